use chrono::Utc;

use crate::generator::PipelineError;
use crate::generator::agents::{GenAiProposer, Researcher, ResourceCollector, UseCaseProposer};
use crate::generator::context::GeneratorContext;
use crate::generator::memory::{MemoryScope, PipelineMemory, ScopedKeys};
use crate::generator::pipeline_agent::PipelineAgent;
use crate::types::{FinalReport, ResearchBrief, UseCaseList};

/// 提案编排器 - 顺序执行调研→用例→资源三个阶段，再执行独立的通用建议阶段，
/// 任一阶段失败立即中止，后续阶段不再调用，也不产出部分报告
#[derive(Default)]
pub struct ProposalOrchestrator;

impl ProposalOrchestrator {
    /// 执行完整的提案生成流水线
    pub async fn execute_pipeline(
        &self,
        context: &GeneratorContext,
        input: &str,
    ) -> Result<FinalReport, PipelineError> {
        // 输入校验发生在任何外部调用之前
        let input = validate_input(input)?;

        println!(
            "🚀 开始为「{}」生成AI用例提案... (run {})",
            input, context.run_id
        );
        context
            .store_stage_text(ScopedKeys::INPUT_NAME, &input)
            .await?;

        // 阶段一：市场调研
        let research_text = self
            .execute_agent("ResearchAgent", &Researcher, context)
            .await?;

        // 阶段二：用例生成，消费阶段一的简报
        let use_case_text = self
            .execute_agent("UseCaseAgent", &UseCaseProposer, context)
            .await?;

        // 阶段三：资源搜集，固定查询集合
        println!("🤖 执行 ResourceCollector 资源搜集...");
        let resources = ResourceCollector.collect(context).await?;
        println!("✓ ResourceCollector 完成");

        // 独立阶段：通用GenAI建议
        let suggestions = if context.config.skip_suggestions {
            println!("   ⚠️ 已跳过通用GenAI建议阶段");
            None
        } else {
            Some(
                self.execute_agent("GenAiProposerAgent", &GenAiProposer, context)
                    .await?,
            )
        };

        let report = FinalReport {
            input_name: input,
            generated_at: Utc::now(),
            research: ResearchBrief {
                raw_text: research_text,
            },
            use_cases: UseCaseList {
                raw_text: use_case_text,
            },
            resources,
            suggestions,
        };

        // 存储最终产物供落盘。资源文件与报告章节共用同一份渲染结果
        context
            .store_to_memory(
                MemoryScope::REPORT,
                ScopedKeys::PROPOSAL,
                report.to_markdown(),
            )
            .await?;
        context
            .store_to_memory(
                MemoryScope::REPORT,
                ScopedKeys::RESOURCES_FILE,
                report.resources.to_markdown(),
            )
            .await?;

        println!("✓ 提案生成流程执行完毕");
        Ok(report)
    }

    /// 执行单个Agent
    async fn execute_agent<T>(
        &self,
        name: &str,
        agent: &T,
        context: &GeneratorContext,
    ) -> Result<String, PipelineError>
    where
        T: PipelineAgent + Send + Sync,
    {
        println!("🤖 执行 {} 分析...", name);

        let output = agent.execute(context).await?;
        println!("✓ {} 完成", name);
        Ok(output)
    }
}

/// 输入校验：空白或纯空格输入在调用搜索客户端之前被拒绝
pub fn validate_input(input: &str) -> Result<String, PipelineError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(PipelineError::InvalidInput(
            "公司或行业名称不能为空".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}
