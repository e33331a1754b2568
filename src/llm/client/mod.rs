//! LLM客户端 - 提供统一的文本生成服务接口

use thiserror::Error;

use crate::config::Config;

mod providers;

use providers::ProviderClient;

/// 文本生成错误 - API错误（含配额与鉴权失败）或空响应
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("模型服务调用失败: {0}")]
    Api(#[from] rig::completion::PromptError),
    #[error("模型返回了空响应")]
    EmptyResponse,
}

/// LLM客户端 - 提供统一的LLM服务接口
#[derive(Clone)]
pub struct LLMClient {
    config: Config,
    client: ProviderClient,
}

impl LLMClient {
    /// 创建新的LLM客户端
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = ProviderClient::new(&config.llm)?;
        Ok(Self { client, config })
    }

    /// 检查模型连接和功能是否正常
    pub async fn check_connection(&self) -> anyhow::Result<()> {
        println!("🔄 正在检查模型连接...");
        // 使用一个简单的prompt来测试连接
        match self.generate("You are a helpful assistant.", "Hello").await {
            Ok(_) => {
                println!("✅ 模型连接正常");
                Ok(())
            }
            Err(e) => {
                eprintln!("❌ 模型连接失败: {}", e);
                Err(e.into())
            }
        }
    }

    /// 单轮文本生成。一次阻塞调用，不重试、不流式、不做token预算管理。
    pub async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, GenerationError> {
        let agent = self
            .client
            .create_agent(&self.config.llm.model, system_prompt, &self.config.llm);

        let text = agent.prompt(user_prompt).await?;
        let text = text.trim().to_string();
        if text.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(text)
    }
}
