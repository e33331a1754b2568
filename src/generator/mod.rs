use thiserror::Error;

use crate::llm::GenerationError;
use crate::search::SearchError;

pub mod agents;
pub mod context;
pub mod memory;
pub mod orchestrator;
pub mod outlet;
pub mod pipeline_agent;
pub mod workflow;

/// 流水线错误 - 任一阶段失败即中止整个运行，错误向上传播到终端展示。
/// 错误口径只有两类外部失败（搜索、生成），外加输入校验与内部错误。
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("SearchError: {0}")]
    Search(#[from] SearchError),
    #[error("GenerationError: {0}")]
    Generation(#[from] GenerationError),
    #[error("无效输入: {0}")]
    InvalidInput(String),
    #[error("运行期内部错误: {0}")]
    Internal(#[from] anyhow::Error),
}
