// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::intent::{ListingFilter, SearchIntent};
use crate::domain::models::page::PageWindow;
use crate::domain::search::engine::EngineRequest;
use crate::domain::search::query::{keyword_field, Aggregation, EngineQuery, QueryClause};

/// 标题字段
pub const TITLE_FIELD: &str = "title";
/// 分类字段
pub const CATEGORY_FIELD: &str = "category";

/// 补全查询的相关度下限，偏低以保留部分前缀匹配
pub const AUTOCOMPLETE_MIN_SCORE: f64 = 0.5;
/// 返回完整文档的查询的相关度下限
pub const SEARCH_MIN_SCORE: f64 = 0.95;
/// 补全聚合的最大桶数量
pub const AUTOCOMPLETE_BUCKETS: u32 = 25;

/// 补全聚合名称
pub const AUTOCOMPLETE_AGG: &str = "auto_complete";
/// 分类聚合名称
pub const CATEGORIES_AGG: &str = "categories";

/// 将搜索意图映射为引擎请求
///
/// 纯函数，不做任何校验或转义，查询文本原样传给引擎
pub fn build_request(intent: &SearchIntent) -> EngineRequest {
    match intent {
        SearchIntent::Autocomplete { resource, query } => EngineRequest::Search {
            index: resource.clone(),
            query: autocomplete_query(query),
        },
        SearchIntent::TextSearch { resource, query } => EngineRequest::Search {
            index: resource.clone(),
            query: text_search_query(query),
        },
        SearchIntent::Listing {
            resource,
            filter,
            page,
        } => EngineRequest::Search {
            index: resource.clone(),
            query: listing_query(filter, PageWindow::new(Some(i64::from(*page)))),
        },
        SearchIntent::GetById { resource, id } => EngineRequest::Get {
            index: resource.clone(),
            id: id.clone(),
        },
        SearchIntent::Create { resource, doc } => EngineRequest::Index {
            index: resource.clone(),
            id: None,
            doc: doc.clone(),
        },
        SearchIntent::Replace { resource, id, doc } => EngineRequest::Index {
            index: resource.clone(),
            id: Some(id.clone()),
            doc: doc.clone(),
        },
        SearchIntent::Delete { resource, id } => EngineRequest::Delete {
            index: resource.clone(),
            id: id.clone(),
        },
    }
}

/// 补全查询：只返回聚合，不返回文档
pub fn autocomplete_query(text: &str) -> EngineQuery {
    EngineQuery {
        source: Some(Vec::new()),
        size: Some(0),
        ..Default::default()
    }
    .scored(
        QueryClause::Bool {
            must: vec![QueryClause::phrase_prefix(TITLE_FIELD, text)],
        },
        AUTOCOMPLETE_MIN_SCORE,
    )
    .aggregate(
        AUTOCOMPLETE_AGG,
        Aggregation::terms(keyword_field(TITLE_FIELD)).top_by_count(AUTOCOMPLETE_BUCKETS),
    )
}

/// 全文检索查询：固定第一页
pub fn text_search_query(text: &str) -> EngineQuery {
    EngineQuery {
        size: Some(PageWindow::first().size()),
        ..Default::default()
    }
    .scored(QueryClause::matches(TITLE_FIELD, text), SEARCH_MIN_SCORE)
}

/// 列表查询：分页并附带分类聚合
pub fn listing_query(filter: &ListingFilter, window: PageWindow) -> EngineQuery {
    let query = EngineQuery {
        from: Some(window.from()),
        size: Some(window.size()),
        ..Default::default()
    };

    let query = match filter {
        ListingFilter::All => query,
        ListingFilter::Title(text) => {
            query.scored(QueryClause::matches(TITLE_FIELD, text), SEARCH_MIN_SCORE)
        }
        ListingFilter::Category(category) => query.scored(
            QueryClause::matches(CATEGORY_FIELD, category),
            SEARCH_MIN_SCORE,
        ),
    };

    query.aggregate(
        CATEGORIES_AGG,
        Aggregation::terms(keyword_field(CATEGORY_FIELD)),
    )
}

#[cfg(test)]
#[path = "query_builder_test.rs"]
mod tests;
