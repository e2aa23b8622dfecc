// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::{Map, Value};

/// 列表浏览的过滤条件
///
/// 同时提供查询词和分类时只保留分类过滤（兼容既有行为）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingFilter {
    /// 不过滤，浏览全部文档
    All,
    /// 按标题全文匹配
    Title(String),
    /// 按分类匹配
    Category(String),
}

/// 搜索意图
///
/// 每个请求被解释为且仅被解释为一种意图，携带该意图需要的字段
#[derive(Debug, Clone, PartialEq)]
pub enum SearchIntent {
    /// 标题前缀补全
    Autocomplete { resource: String, query: String },
    /// 全文检索，固定返回第一页
    TextSearch { resource: String, query: String },
    /// 分页浏览
    Listing {
        resource: String,
        filter: ListingFilter,
        page: u32,
    },
    /// 按ID获取文档
    GetById { resource: String, id: String },
    /// 新建文档，由引擎分配ID
    Create {
        resource: String,
        doc: Map<String, Value>,
    },
    /// 按ID整体写入文档（不存在则创建）
    Replace {
        resource: String,
        id: String,
        doc: Map<String, Value>,
    },
    /// 按ID删除文档
    Delete { resource: String, id: String },
}

impl SearchIntent {
    /// 意图目标资源（引擎索引名）
    pub fn resource(&self) -> &str {
        match self {
            SearchIntent::Autocomplete { resource, .. }
            | SearchIntent::TextSearch { resource, .. }
            | SearchIntent::Listing { resource, .. }
            | SearchIntent::GetById { resource, .. }
            | SearchIntent::Create { resource, .. }
            | SearchIntent::Replace { resource, .. }
            | SearchIntent::Delete { resource, .. } => resource,
        }
    }

    /// 意图名称，用于日志与指标标签
    pub fn operation(&self) -> &'static str {
        match self {
            SearchIntent::Autocomplete { .. } => "autocomplete",
            SearchIntent::TextSearch { .. } => "search",
            SearchIntent::Listing { .. } => "listing",
            SearchIntent::GetById { .. } => "get",
            SearchIntent::Create { .. } => "create",
            SearchIntent::Replace { .. } => "replace",
            SearchIntent::Delete { .. } => "delete",
        }
    }
}
