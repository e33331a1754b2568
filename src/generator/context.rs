use std::sync::Arc;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{config::Config, llm::LLMClient, memory::Memory, search::SearchClient};

/// 运行上下文 - 每次用户触发的运行创建一个，渲染与落盘后整体丢弃
#[derive(Clone)]
pub struct GeneratorContext {
    /// LLM调用器，用于与AI通信
    pub llm_client: LLMClient,
    /// 搜索客户端
    pub search_client: SearchClient,
    /// 配置
    pub config: Config,
    /// 会话内存，保存各阶段产出
    pub memory: Arc<RwLock<Memory>>,
    /// 本次运行的标识
    pub run_id: Uuid,
}

impl GeneratorContext {
    /// 创建新的运行上下文。密钥配置缺失会在这里直接失败，
    /// 属于启动期致命错误，不进入流水线错误口径。
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let llm_client = LLMClient::new(config.clone())?;
        let search_client = SearchClient::new(config.search.clone())?;
        let memory = Arc::new(RwLock::new(Memory::new()));

        Ok(Self {
            llm_client,
            search_client,
            config,
            memory,
            run_id: Uuid::new_v4(),
        })
    }

    /// 存储数据到会话内存
    pub async fn store_to_memory<T>(&self, scope: &str, key: &str, data: T) -> Result<()>
    where
        T: Serialize + Send + Sync,
    {
        let mut memory = self.memory.write().await;
        memory.store(scope, key, data)
    }

    /// 从会话内存获取数据
    pub async fn get_from_memory<T>(&self, scope: &str, key: &str) -> Option<T>
    where
        T: for<'a> Deserialize<'a> + Send + Sync,
    {
        let memory = self.memory.read().await;
        memory.get(scope, key)
    }

    /// 检查会话内存中是否存在指定数据
    pub async fn has_memory_data(&self, scope: &str, key: &str) -> bool {
        let memory = self.memory.read().await;
        memory.has_data(scope, key)
    }
}
