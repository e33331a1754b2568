use async_trait::async_trait;

use crate::generator::PipelineError;
use crate::generator::context::GeneratorContext;
use crate::generator::memory::ScopedKeys;
use crate::generator::pipeline_agent::{PipelineAgent, PromptTemplate};

/// 通用GenAI建议员 - 单一固定prompt，不依赖任何前序阶段的产出
#[derive(Default)]
pub struct GenAiProposer;

#[async_trait]
impl PipelineAgent for GenAiProposer {
    fn agent_type(&self) -> String {
        "GenAiProposerAgent".to_string()
    }

    fn memory_key(&self) -> &'static str {
        ScopedKeys::GENAI_SUGGESTIONS
    }

    fn prompt_template(&self) -> PromptTemplate {
        PromptTemplate {
            system_prompt:
                "You are a Generative AI solutions advisor. You suggest general-purpose GenAI applications that most organizations can adopt."
                    .to_string(),

            opening_instruction: r#"Propose potential applications for general-purpose Generative AI solutions in a business context. Think about solutions like:
- AI-powered internal document search or knowledge base chatbots.
- Automated report generation or summarization (e.g. market reports, performance summaries).
- AI-powered customer support chatbots or virtual assistants.
- Automated content creation (e.g. marketing copy, product descriptions)."#
                .to_string(),

            closing_instruction: r#"For each suggestion, give a title, the application, the potential benefit and the business area it fits. Format the output as a numbered Markdown list."#
                .to_string(),
        }
    }

    async fn provide_materials(
        &self,
        _context: &GeneratorContext,
    ) -> Result<String, PipelineError> {
        // 独立阶段，没有调研材料
        Ok(String::new())
    }
}
