use crate::config::{Config, LLMProvider};
use clap::Parser;
use std::path::PathBuf;

/// Casegen (casegen-rs) - 由Rust与AI驱动的企业AI用例提案生成引擎
#[derive(Parser, Debug)]
#[command(name = "Casegen (casegen-rs)")]
#[command(
    about = "AI-based generation engine for market research and AI/GenAI use-case proposals. Given a company or industry name, it researches the target via web search, proposes tailored use cases and collects relevant resources into a Markdown report."
)]
#[command(author = "Sopaco")]
#[command(version)]
pub struct Args {
    /// 公司或行业名称
    pub input: String,

    /// 报告输出路径
    #[arg(short, long, default_value = "./casegen.report")]
    pub output_path: PathBuf,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 调研阶段每条查询返回的搜索结果数量
    #[arg(long)]
    pub num_results: Option<u8>,

    /// LLM Provider (gemini, openai, anthropic, deepseek, openrouter, ollama)
    #[arg(long)]
    pub llm_provider: Option<String>,

    /// LLM API基地址
    #[arg(long)]
    pub llm_api_base_url: Option<String>,

    /// LLM API KEY
    #[arg(long)]
    pub llm_api_key: Option<String>,

    /// 模型名称
    #[arg(long)]
    pub model: Option<String>,

    /// 最大tokens数
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// 温度参数
    #[arg(long)]
    pub temperature: Option<f64>,

    /// 搜索API KEY
    #[arg(long)]
    pub search_api_key: Option<String>,

    /// 搜索引擎ID
    #[arg(long)]
    pub search_engine_id: Option<String>,

    /// 跳过通用GenAI建议阶段
    #[arg(long)]
    pub skip_suggestions: bool,

    /// 不将报告保存到磁盘，仅在终端渲染
    #[arg(long)]
    pub no_save: bool,

    /// 是否启用详细日志
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// 将CLI参数转换为配置，优先级：CLI参数 > 配置文件 > 环境变量默认值
    pub fn into_config(self) -> Config {
        let mut config = if let Some(config_path) = &self.config {
            // 如果显式指定了配置文件路径，从该路径加载
            Config::from_file(config_path).unwrap_or_else(|_| {
                panic!("⚠️ 警告: 无法读取配置文件 {:?}", config_path)
            })
        } else {
            // 如果没有显式指定配置文件，尝试从默认位置加载
            let default_config_path = std::env::current_dir()
                .unwrap_or_else(|_| std::path::PathBuf::from("."))
                .join("casegen.toml");

            if default_config_path.exists() {
                Config::from_file(&default_config_path).unwrap_or_else(|_| {
                    panic!(
                        "⚠️ 警告: 无法读取默认配置文件 {:?}",
                        default_config_path
                    )
                })
            } else {
                // 默认配置文件不存在，使用默认值
                Config::default()
            }
        };

        // 覆盖配置文件中的设置
        config.output_path = self.output_path;

        if let Some(num_results) = self.num_results {
            config.num_results = num_results;
        }

        // 覆盖LLM配置
        if let Some(provider_str) = self.llm_provider {
            if let Ok(provider) = provider_str.parse::<LLMProvider>() {
                config.llm.provider = provider;
            } else {
                eprintln!(
                    "⚠️ 警告: 未知的provider: {}，使用默认provider",
                    provider_str
                );
            }
        }
        if let Some(llm_api_base_url) = self.llm_api_base_url {
            config.llm.api_base_url = llm_api_base_url;
        }
        if let Some(llm_api_key) = self.llm_api_key {
            config.llm.api_key = llm_api_key;
        }
        if let Some(model) = self.model {
            config.llm.model = model;
        }
        if let Some(max_tokens) = self.max_tokens {
            config.llm.max_tokens = max_tokens;
        }
        if let Some(temperature) = self.temperature {
            config.llm.temperature = temperature;
        }

        // 覆盖搜索配置
        if let Some(search_api_key) = self.search_api_key {
            config.search.api_key = search_api_key;
        }
        if let Some(search_engine_id) = self.search_engine_id {
            config.search.engine_id = search_engine_id;
        }

        // 其他配置
        if self.skip_suggestions {
            config.skip_suggestions = true;
        }
        if self.no_save {
            config.save_report = false;
        }
        if self.verbose {
            config.verbose = true;
        }

        config
    }
}

// Include tests
#[cfg(test)]
mod tests;
