use anyhow::anyhow;
use async_trait::async_trait;

use crate::generator::PipelineError;
use crate::generator::context::GeneratorContext;
use crate::generator::memory::{PipelineMemory, ScopedKeys};
use crate::generator::pipeline_agent::{PipelineAgent, PromptTemplate};
use crate::types::SearchResult;

/// 市场调研员 - 从用户输入派生一条搜索查询，抓取结果后让LLM总结为调研简报
#[derive(Default)]
pub struct Researcher;

impl Researcher {
    /// 从原始输入派生搜索查询
    pub fn derive_query(input: &str) -> String {
        format!("{} company overview", input)
    }

    /// 将搜索结果组装为调研材料，全部摘要都会进入prompt
    pub fn build_materials(input: &str, results: &[SearchResult]) -> String {
        let mut materials = format!("Company/Industry: {}\n\n--- Search Results ---\n", input);
        for result in results {
            materials.push_str(&result.to_prompt_block());
            materials.push('\n');
        }
        materials
    }
}

#[async_trait]
impl PipelineAgent for Researcher {
    fn agent_type(&self) -> String {
        "ResearchAgent".to_string()
    }

    fn memory_key(&self) -> &'static str {
        ScopedKeys::RESEARCH_BRIEF
    }

    fn prompt_template(&self) -> PromptTemplate {
        PromptTemplate {
            system_prompt: r#"You are a market research analyst. Based on web search snippets about a company or industry, you write concise research briefs covering:
1. The main industry sector (e.g. Automotive, Finance, Healthcare).
2. The specific segment within that industry (e.g. Commercial Banking, Oncology, E-commerce).
3. Key products, services or offerings.
4. Strategic focus areas or priorities (e.g. improving efficiency, customer experience, expansion)."#
                .to_string(),

            opening_instruction:
                "Analyze the following web search snippets and write a research brief for the company or industry named below."
                    .to_string(),

            closing_instruction: r#"Requirements:
- Write the brief as plain Markdown text with one short section per point above.
- Ground every statement in the provided snippets; do not invent facts.
- If information for a point is not found, write "N/A"."#
                .to_string(),
        }
    }

    async fn provide_materials(
        &self,
        context: &GeneratorContext,
    ) -> Result<String, PipelineError> {
        let input: String = context
            .get_stage_text(ScopedKeys::INPUT_NAME)
            .await
            .ok_or_else(|| PipelineError::Internal(anyhow!("会话内存中缺少运行输入")))?;

        let query = Self::derive_query(&input);
        if context.config.verbose {
            println!("   🔍 搜索: {}", query);
        }

        let results = context
            .search_client
            .search(&query, context.config.num_results)
            .await?;

        if results.is_empty() {
            // 空结果不中止运行，原样进入后续prompt
            eprintln!("⚠️ 警告: 查询「{}」没有返回搜索结果", query);
        }

        Ok(Self::build_materials(&input, &results))
    }
}
