//! 搜索客户端 - 封装外部可编程搜索服务（Google Programmable Search JSON API）

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::config::SearchConfig;
use crate::types::SearchResult;

/// 搜索错误 - 网络失败、服务端错误状态或响应解析失败
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("搜索服务网络请求失败: {0}")]
    Network(#[from] reqwest::Error),
    #[error("搜索服务返回错误状态 {status}: {message}")]
    Service { status: u16, message: String },
    #[error("搜索服务响应解析失败: {0}")]
    MalformedResponse(String),
}

/// 搜索服务响应体
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

/// 搜索服务返回的单条结果，缺失字段以占位值兜底
#[derive(Debug, Deserialize)]
struct SearchItem {
    title: Option<String>,
    link: Option<String>,
    snippet: Option<String>,
}

impl SearchResponse {
    fn into_results(self) -> Vec<SearchResult> {
        self.items
            .into_iter()
            .map(|item| SearchResult {
                title: item.title.unwrap_or_else(|| String::from("N/A")),
                link: item.link.unwrap_or_else(|| String::from("#")),
                snippet: item.snippet.unwrap_or_else(|| String::from("N/A")),
            })
            .collect()
    }
}

/// 搜索客户端
#[derive(Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    config: SearchConfig,
}

impl SearchClient {
    /// 创建新的搜索客户端
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self { http, config })
    }

    /// 执行一次搜索，返回有序的搜索结果列表。
    /// 每次调用直连外部服务，不重试也不缓存。
    pub async fn search(
        &self,
        query: &str,
        num_results: u8,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let num = num_results.to_string();
        let response = self
            .http
            .get(&self.config.endpoint)
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("cx", self.config.engine_id.as_str()),
                ("q", query),
                ("num", num.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SearchError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| SearchError::MalformedResponse(e.to_string()))?;

        Ok(body.into_results())
    }
}
