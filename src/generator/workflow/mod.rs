use crate::config::Config;
use crate::generator::context::GeneratorContext;
use crate::generator::orchestrator::ProposalOrchestrator;
use crate::generator::outlet;

use anyhow::Result;

/// 启动提案生成工作流
pub async fn launch(config: &Config, input: &str) -> Result<()> {
    let context = GeneratorContext::new(config.clone())?;

    // 启动时检查模型连接
    context.llm_client.check_connection().await?;

    // 执行流水线
    let orchestrator = ProposalOrchestrator;
    let report = orchestrator.execute_pipeline(&context, input).await?;

    // 渲染报告
    println!("\n{}", report.to_markdown());

    if config.save_report {
        outlet::save(&context).await?;
    }

    Ok(())
}

// Include tests
#[cfg(test)]
mod tests;
