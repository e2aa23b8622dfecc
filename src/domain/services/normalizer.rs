// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::envelope::{
    with_id, Bucket, Envelope, Page, PageAggregations, Payload, Record,
};
use crate::domain::models::intent::SearchIntent;
use crate::domain::models::page::{total_pages, PageWindow, PER_PAGE};
use crate::domain::search::engine::EngineReply;
use crate::domain::search::query_builder::{AUTOCOMPLETE_AGG, CATEGORIES_AGG};
use crate::domain::services::errors::FacadeError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// 补全与检索接口使用的固定消息
pub const MESSAGE_OBTAINED: &str = "Obtained";
/// 删除接口使用的固定消息
pub const MESSAGE_DELETED: &str = "Deleted";

const STATUS_OK: u16 = 200;

#[derive(Debug, Deserialize)]
struct SearchBody {
    hits: Hits,
}

#[derive(Debug, Deserialize)]
struct AggregationsBody {
    aggregations: HashMap<String, BucketAggregation>,
}

#[derive(Debug, Deserialize)]
struct BucketAggregation {
    buckets: Vec<Bucket>,
}

#[derive(Debug, Deserialize)]
struct Hits {
    total: HitTotal,
    hits: Vec<Hit>,
}

/// 新版本引擎返回 `{"value": n, "relation": ..}`，旧版本直接返回数字
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum HitTotal {
    Object { value: u64 },
    Count(u64),
}

impl HitTotal {
    fn value(&self) -> u64 {
        match self {
            HitTotal::Object { value } | HitTotal::Count(value) => *value,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Hit {
    #[serde(rename = "_id")]
    id: String,
    #[serde(rename = "_source", default)]
    source: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct IndexedDocument {
    #[serde(rename = "_id")]
    id: String,
}

/// 将引擎响应规整为统一响应信封
///
/// # 参数
///
/// * `intent` - 产生该响应的搜索意图
/// * `reply` - 引擎的成功响应
///
/// # 错误
///
/// 响应缺少预期字段时返回 `FacadeError::Shape`
pub fn normalize(intent: &SearchIntent, reply: EngineReply) -> Result<Envelope, FacadeError> {
    match intent {
        SearchIntent::Autocomplete { .. } => {
            let buckets = take_buckets(&reply.body, AUTOCOMPLETE_AGG)?;
            Ok(Envelope::success(
                STATUS_OK,
                MESSAGE_OBTAINED,
                Some(Payload::Buckets(buckets)),
            ))
        }
        SearchIntent::TextSearch { .. } => {
            let body: SearchBody = parse(&reply.body)?;
            let page = Page {
                total: body.hits.total.value(),
                current_page: 1,
                per_page: PER_PAGE,
                total_page: 1,
                records: records(body.hits.hits),
                aggregations: None,
            };
            Ok(Envelope::success(
                STATUS_OK,
                MESSAGE_OBTAINED,
                Some(Payload::Page(page)),
            ))
        }
        SearchIntent::Listing { page, .. } => {
            let body: SearchBody = parse(&reply.body)?;
            let categories = take_buckets(&reply.body, CATEGORIES_AGG)?;
            let window = PageWindow::new(Some(i64::from(*page)));
            let total = body.hits.total.value();
            let page = Page {
                total,
                current_page: window.current_page,
                per_page: window.per_page,
                total_page: total_pages(total, window.per_page),
                records: records(body.hits.hits),
                aggregations: Some(PageAggregations { categories }),
            };
            Ok(Envelope::success(
                reply.status,
                reply.reason,
                Some(Payload::Page(page)),
            ))
        }
        SearchIntent::GetById { .. } => {
            let hit: Hit = parse(&reply.body)?;
            Ok(Envelope::success(
                reply.status,
                reply.reason,
                Some(Payload::Document(with_id(hit.source, &hit.id))),
            ))
        }
        SearchIntent::Create { doc, .. } => {
            let indexed: IndexedDocument = parse(&reply.body)?;
            Ok(Envelope::success(
                reply.status,
                reply.reason,
                Some(Payload::Document(with_id(doc.clone(), &indexed.id))),
            ))
        }
        SearchIntent::Replace { id, doc, .. } => Ok(Envelope::success(
            reply.status,
            reply.reason,
            Some(Payload::Document(with_id(doc.clone(), id))),
        )),
        SearchIntent::Delete { .. } => Ok(Envelope::success(STATUS_OK, MESSAGE_DELETED, None)),
    }
}

fn parse<T: DeserializeOwned>(body: &Value) -> Result<T, FacadeError> {
    T::deserialize(body).map_err(|e| FacadeError::Shape(e.to_string()))
}

fn take_buckets(body: &Value, name: &str) -> Result<Vec<Bucket>, FacadeError> {
    let mut aggregations: AggregationsBody = parse(body)?;
    aggregations
        .aggregations
        .remove(name)
        .map(|agg| agg.buckets)
        .ok_or_else(|| FacadeError::Shape(format!("missing aggregation `{}`", name)))
}

fn records(hits: Vec<Hit>) -> Vec<Record> {
    hits.into_iter()
        .map(|hit| with_id(hit.source, &hit.id))
        .collect()
}

#[cfg(test)]
#[path = "normalizer_test.rs"]
mod tests;
