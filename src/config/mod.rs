use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

/// LLM Provider类型
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub enum LLMProvider {
    #[serde(rename = "gemini")]
    #[default]
    Gemini,
    #[serde(rename = "openai")]
    OpenAI,
    #[serde(rename = "anthropic")]
    Anthropic,
    #[serde(rename = "deepseek")]
    DeepSeek,
    #[serde(rename = "openrouter")]
    OpenRouter,
    #[serde(rename = "ollama")]
    Ollama,
}

impl std::fmt::Display for LLMProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LLMProvider::Gemini => write!(f, "gemini"),
            LLMProvider::OpenAI => write!(f, "openai"),
            LLMProvider::Anthropic => write!(f, "anthropic"),
            LLMProvider::DeepSeek => write!(f, "deepseek"),
            LLMProvider::OpenRouter => write!(f, "openrouter"),
            LLMProvider::Ollama => write!(f, "ollama"),
        }
    }
}

impl std::str::FromStr for LLMProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gemini" => Ok(LLMProvider::Gemini),
            "openai" => Ok(LLMProvider::OpenAI),
            "anthropic" => Ok(LLMProvider::Anthropic),
            "deepseek" => Ok(LLMProvider::DeepSeek),
            "openrouter" => Ok(LLMProvider::OpenRouter),
            "ollama" => Ok(LLMProvider::Ollama),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}

/// 应用程序配置
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// 报告输出路径
    pub output_path: PathBuf,

    /// 调研阶段每条查询返回的搜索结果数量
    pub num_results: u8,

    /// 是否跳过通用GenAI建议阶段
    pub skip_suggestions: bool,

    /// 是否将报告保存到磁盘
    pub save_report: bool,

    /// LLM模型配置
    pub llm: LLMConfig,

    /// 搜索服务配置
    pub search: SearchConfig,

    /// 是否启用详细日志
    pub verbose: bool,
}

/// LLM模型配置
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LLMConfig {
    /// LLM Provider类型
    pub provider: LLMProvider,

    /// LLM API KEY
    pub api_key: String,

    /// LLM API基地址（OpenAI兼容Provider使用）
    pub api_base_url: String,

    /// 模型名称
    pub model: String,

    /// 最大tokens
    pub max_tokens: u32,

    /// 温度
    pub temperature: f64,
}

/// 搜索服务配置
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SearchConfig {
    /// 搜索API KEY
    pub api_key: String,

    /// 可编程搜索引擎ID
    pub engine_id: String,

    /// 搜索服务端点
    pub endpoint: String,

    /// 超时时间（秒）
    pub timeout_seconds: u64,
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let mut file =
            File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// 校验启动必需的密钥配置，缺失任一项立即失败
    pub fn validate(&self) -> Result<()> {
        if self.llm.api_key.trim().is_empty() {
            bail!(
                "缺少LLM API密钥，请设置环境变量 CASEGEN_LLM_API_KEY 或在 casegen.toml 中配置 llm.api_key"
            );
        }
        if self.search.api_key.trim().is_empty() {
            bail!(
                "缺少搜索API密钥，请设置环境变量 CASEGEN_SEARCH_API_KEY 或在 casegen.toml 中配置 search.api_key"
            );
        }
        if self.search.engine_id.trim().is_empty() {
            bail!(
                "缺少搜索引擎ID，请设置环境变量 CASEGEN_SEARCH_ENGINE_ID 或在 casegen.toml 中配置 search.engine_id"
            );
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("./casegen.report"),
            num_results: 5,
            skip_suggestions: false,
            save_report: true,
            llm: LLMConfig::default(),
            search: SearchConfig::default(),
            verbose: false,
        }
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            provider: LLMProvider::default(),
            api_key: std::env::var("CASEGEN_LLM_API_KEY").unwrap_or_default(),
            api_base_url: String::from("https://api.openai.com/v1"),
            model: String::from("gemini-2.0-flash"),
            max_tokens: 8192,
            temperature: 0.5,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var("CASEGEN_SEARCH_API_KEY").unwrap_or_default(),
            engine_id: std::env::var("CASEGEN_SEARCH_ENGINE_ID").unwrap_or_default(),
            endpoint: String::from("https://www.googleapis.com/customsearch/v1"),
            timeout_seconds: 30,
        }
    }
}
