use anyhow::anyhow;
use async_trait::async_trait;

use crate::generator::PipelineError;
use crate::generator::context::GeneratorContext;
use crate::generator::memory::{PipelineMemory, ScopedKeys};
use crate::generator::pipeline_agent::{PipelineAgent, PromptTemplate};

/// 用例策划员 - 基于调研简报提出贴合业务的AI/ML/GenAI用例
#[derive(Default)]
pub struct UseCaseProposer;

#[async_trait]
impl PipelineAgent for UseCaseProposer {
    fn agent_type(&self) -> String {
        "UseCaseAgent".to_string()
    }

    fn memory_key(&self) -> &'static str {
        ScopedKeys::USE_CASES
    }

    fn prompt_template(&self) -> PromptTemplate {
        PromptTemplate {
            system_prompt:
                "You are an AI transformation consultant. You propose practical, business-grounded AI, ML and Generative AI use cases tailored to a company's industry, offerings and strategic focus."
                    .to_string(),

            opening_instruction:
                "Based on the following research brief, propose 5-10 relevant AI/ML/GenAI use cases for the company or industry it describes."
                    .to_string(),

            closing_instruction: r#"For each use case:
1. Give it a clear title.
2. Briefly describe the problem it solves or the opportunity it addresses.
3. Explain how AI/ML/GenAI is applied.
4. Mention the potential benefit (e.g. improve process X, enhance customer Y, boost operational efficiency Z).
5. Briefly mention why this use case is relevant to the company or industry context.

Format the output as a numbered Markdown list, one entry per use case."#
                .to_string(),
        }
    }

    async fn provide_materials(
        &self,
        context: &GeneratorContext,
    ) -> Result<String, PipelineError> {
        // 前序阶段的简报是必需输入，缺失说明编排顺序被破坏
        let brief: String = context
            .get_stage_text(ScopedKeys::RESEARCH_BRIEF)
            .await
            .ok_or_else(|| PipelineError::Internal(anyhow!("会话内存中缺少调研简报")))?;

        Ok(format!("--- Research Brief ---\n{}", brief))
    }
}
