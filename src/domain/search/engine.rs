// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::query::EngineQuery;
use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

/// 引擎错误类型
#[derive(Debug, Error, Clone)]
pub enum EngineError {
    /// 网络层失败，无法到达引擎
    #[error("Search engine unavailable: {0}")]
    Unavailable(String),
    /// 引擎返回非2xx状态
    #[error("Search engine responded with {status} {reason}")]
    Rejected {
        status: u16,
        reason: String,
        body: Value,
    },
    /// 引擎返回的响应体无法解析
    #[error("Invalid search engine response body: {0}")]
    InvalidBody(String),
}

/// 发往引擎的请求
#[derive(Debug, Clone, PartialEq)]
pub enum EngineRequest {
    /// `POST /{index}/_search`
    Search { index: String, query: EngineQuery },
    /// `GET /{index}/_doc/{id}`
    Get { index: String, id: String },
    /// `POST /{index}/_doc[/{id}]`
    Index {
        index: String,
        id: Option<String>,
        doc: Map<String, Value>,
    },
    /// `DELETE /{index}/_doc/{id}`
    Delete { index: String, id: String },
}

/// 引擎的成功响应
#[derive(Debug, Clone, PartialEq)]
pub struct EngineReply {
    /// HTTP状态码
    pub status: u16,
    /// 状态原因短语
    pub reason: String,
    /// 原始响应体
    pub body: Value,
}

/// 搜索引擎特质
///
/// 引擎被视为黑盒，只负责把请求送达并原样带回响应
#[async_trait]
pub trait SearchEngine: Send + Sync {
    /// 执行一次引擎请求
    async fn execute(&self, request: EngineRequest) -> Result<EngineReply, EngineError>;

    /// 引擎名称
    fn name(&self) -> &'static str;
}
