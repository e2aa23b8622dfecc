// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 文档记录：源文档并注入 `_id`
pub type Record = Map<String, Value>;

/// 成功状态
pub const STATUS_SUCCESS: &str = "success";

/// 聚合桶
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bucket {
    pub key: Value,
    pub doc_count: u64,
}

/// 列表页附带的聚合结果
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PageAggregations {
    pub categories: Vec<Bucket>,
}

/// 分页数据
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub total: u64,
    pub current_page: u32,
    pub per_page: u32,
    pub total_page: u64,
    pub records: Vec<Record>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregations: Option<PageAggregations>,
}

/// 响应数据载荷
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Payload {
    Buckets(Vec<Bucket>),
    Page(Page),
    Document(Record),
}

/// 统一响应信封
///
/// `data` 仅在删除时为 `null`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Envelope {
    pub status: String,
    pub code: u16,
    pub message: String,
    pub data: Option<Payload>,
}

impl Envelope {
    /// 创建成功响应
    pub fn success(code: u16, message: impl Into<String>, data: Option<Payload>) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            code,
            message: message.into(),
            data,
        }
    }
}

/// 将文档ID注入源文档，ID优先于源文档中的同名字段
pub fn with_id(source: Map<String, Value>, id: &str) -> Record {
    let mut record = source;
    record.insert("_id".to_string(), Value::String(id.to_string()));
    record
}
