// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Serialize, Serializer};
use serde_json::{json, Value};
use std::collections::BTreeMap;

/// 精确匹配子字段后缀
pub const KEYWORD_SUFFIX: &str = "keyword";

/// 返回字段的精确匹配子字段，例如 `title.keyword`
pub fn keyword_field(field: &str) -> String {
    format!("{}.{}", field, KEYWORD_SUFFIX)
}

/// 引擎原生查询文档
///
/// 未设置的字段不会被序列化，`min_score` 只与查询子句同时出现
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EngineQuery {
    #[serde(rename = "_source", skip_serializing_if = "Option::is_none")]
    pub source: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<QueryClause>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub aggs: BTreeMap<String, Aggregation>,
}

impl EngineQuery {
    /// 设置查询子句及其相关度下限
    pub fn scored(mut self, clause: QueryClause, min_score: f64) -> Self {
        self.query = Some(clause);
        self.min_score = Some(min_score);
        self
    }

    /// 追加一个命名聚合
    pub fn aggregate(mut self, name: &str, aggregation: Aggregation) -> Self {
        self.aggs.insert(name.to_string(), aggregation);
        self
    }
}

/// 查询子句
#[derive(Debug, Clone, PartialEq)]
pub enum QueryClause {
    /// `{"match": {field: text}}`
    Match { field: String, text: String },
    /// `{"match_phrase_prefix": {field: {"query": text}}}`
    MatchPhrasePrefix { field: String, text: String },
    /// `{"bool": {"must": [...]}}`
    Bool { must: Vec<QueryClause> },
}

impl QueryClause {
    pub fn matches(field: &str, text: &str) -> Self {
        QueryClause::Match {
            field: field.to_string(),
            text: text.to_string(),
        }
    }

    pub fn phrase_prefix(field: &str, text: &str) -> Self {
        QueryClause::MatchPhrasePrefix {
            field: field.to_string(),
            text: text.to_string(),
        }
    }

    /// 转换为引擎JSON
    pub fn to_value(&self) -> Value {
        match self {
            QueryClause::Match { field, text } => json!({ "match": { field.as_str(): text } }),
            QueryClause::MatchPhrasePrefix { field, text } => {
                json!({ "match_phrase_prefix": { field.as_str(): { "query": text } } })
            }
            QueryClause::Bool { must } => {
                let must: Vec<Value> = must.iter().map(QueryClause::to_value).collect();
                json!({ "bool": { "must": must } })
            }
        }
    }
}

impl Serialize for QueryClause {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_value().serialize(serializer)
    }
}

/// 聚合请求，目前只使用 terms 聚合
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aggregation {
    pub terms: TermsAggregation,
}

impl Aggregation {
    /// 使用引擎默认桶数量和排序的 terms 聚合
    pub fn terms(field: impl Into<String>) -> Self {
        Self {
            terms: TermsAggregation {
                field: field.into(),
                order: None,
                size: None,
            },
        }
    }

    /// 按文档数降序并限制桶数量
    pub fn top_by_count(mut self, size: u32) -> Self {
        self.terms.order = Some(CountOrder {
            count: SortDirection::Desc,
        });
        self.terms.size = Some(size);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermsAggregation {
    pub field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<CountOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CountOrder {
    #[serde(rename = "_count")]
    pub count: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}
