// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::EngineSettings;
use crate::domain::search::engine::{EngineError, EngineReply, EngineRequest, SearchEngine};
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Elasticsearch 兼容引擎客户端
///
/// 引擎地址在构造时注入，不使用全局常量
pub struct ElasticsearchClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ElasticsearchClient {
    /// 根据引擎配置创建客户端
    ///
    /// # 错误
    ///
    /// 地址无法解析或HTTP客户端构建失败时返回 `EngineError::Unavailable`
    pub fn new(settings: &EngineSettings) -> Result<Self, EngineError> {
        let base_url = Url::parse(&settings.url)
            .map_err(|e| EngineError::Unavailable(format!("invalid engine url: {}", e)))?;

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| EngineError::Unavailable(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// 拼接引擎URL，路径片段会被百分号编码
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, EngineError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| EngineError::Unavailable("engine url cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<Value>,
    ) -> Result<EngineReply, EngineError> {
        debug!("Sending engine request: {} {}", method, url);
        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| EngineError::Unavailable(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| EngineError::Unavailable(e.to_string()))?;

        if !status.is_success() {
            // Keep whatever the engine said, JSON or not
            let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
            return Err(EngineError::Rejected {
                status: status.as_u16(),
                reason: reason_phrase(status),
                body,
            });
        }

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).map_err(|e| EngineError::InvalidBody(e.to_string()))?
        };

        Ok(EngineReply {
            status: status.as_u16(),
            reason: reason_phrase(status),
            body,
        })
    }
}

#[async_trait]
impl SearchEngine for ElasticsearchClient {
    async fn execute(&self, request: EngineRequest) -> Result<EngineReply, EngineError> {
        match request {
            EngineRequest::Search { index, query } => {
                let body = serde_json::to_value(&query)
                    .map_err(|e| EngineError::InvalidBody(e.to_string()))?;
                let url = self.endpoint(&[&index, "_search"])?;
                self.send(Method::POST, url, Some(body)).await
            }
            EngineRequest::Get { index, id } => {
                let url = self.endpoint(&[&index, "_doc", &id])?;
                self.send(Method::GET, url, None).await
            }
            EngineRequest::Index { index, id, doc } => {
                let url = match &id {
                    Some(id) => self.endpoint(&[&index, "_doc", id])?,
                    None => self.endpoint(&[&index, "_doc"])?,
                };
                self.send(Method::POST, url, Some(Value::Object(doc))).await
            }
            EngineRequest::Delete { index, id } => {
                let url = self.endpoint(&[&index, "_doc", &id])?;
                self.send(Method::DELETE, url, None).await
            }
        }
    }

    fn name(&self) -> &'static str {
        "elasticsearch"
    }
}

fn reason_phrase(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or_default().to_string()
}

#[cfg(test)]
#[path = "elasticsearch_test.rs"]
mod tests;
