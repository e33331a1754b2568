use anyhow::anyhow;
use std::collections::HashSet;

use crate::generator::PipelineError;
use crate::generator::context::GeneratorContext;
use crate::generator::memory::{PipelineMemory, ScopedKeys};
use crate::types::{ResourceLinks, ResourceSection};

/// 每条资源查询抓取的结果数量
const RESULTS_PER_QUERY: u8 = 2;

/// 资源搜集员 - 用一组固定的查询为本次提案搜集数据集与开源实现链接。
/// 用例文本不做解析，查询按整次运行派生，而非按单个用例派生。
#[derive(Default)]
pub struct ResourceCollector;

impl ResourceCollector {
    /// 本次运行的固定查询集合，按查询意图分组
    pub fn resource_queries(input: &str) -> Vec<(String, String)> {
        vec![
            (
                "Datasets".to_string(),
                format!(
                    "{} AI use case dataset site:kaggle.com OR site:huggingface.co/datasets",
                    input
                ),
            ),
            (
                "Implementations".to_string(),
                format!("{} AI use case implementation site:github.com", input),
            ),
        ]
    }

    /// 逐条执行查询并按URL去重，渲染结果同时写入会话内存供落盘
    pub async fn collect(
        &self,
        context: &GeneratorContext,
    ) -> Result<ResourceLinks, PipelineError> {
        let input: String = context
            .get_stage_text(ScopedKeys::INPUT_NAME)
            .await
            .ok_or_else(|| PipelineError::Internal(anyhow!("会话内存中缺少运行输入")))?;

        let mut sections = Vec::new();
        let mut seen_links = HashSet::new();

        for (heading, query) in Self::resource_queries(&input) {
            if context.config.verbose {
                println!("   🔍 搜索资源: {}", query);
            }

            let results = context
                .search_client
                .search(&query, RESULTS_PER_QUERY)
                .await?;

            let results = results
                .into_iter()
                .filter(|result| seen_links.insert(result.link.clone()))
                .collect();

            sections.push(ResourceSection { heading, results });
        }

        let links = ResourceLinks { sections };
        context
            .store_stage_text(ScopedKeys::RESOURCE_LINKS, &links.to_markdown())
            .await?;

        println!("✅ Sub-Agent [ResourceCollector]执行完成");
        Ok(links)
    }
}
