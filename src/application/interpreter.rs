// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::facade_request::{CreateDocumentDto, FacadeQueryParams};
use crate::domain::models::intent::{ListingFilter, SearchIntent};
use crate::domain::models::page::PageWindow;
use crate::domain::services::errors::FacadeError;
use serde_json::{Map, Value};
use validator::Validate;

/// 请求命中的路由类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteKind {
    Autocomplete,
    Search,
    #[default]
    Listing,
    Get,
    Create,
    Replace,
    Delete,
}

/// 未经解释的原始请求
#[derive(Debug, Clone, Default)]
pub struct RawRequest {
    pub route: RouteKind,
    pub resource: Option<String>,
    pub params: FacadeQueryParams,
    pub id: Option<String>,
    pub body: Option<Value>,
}

impl RawRequest {
    pub fn new(route: RouteKind) -> Self {
        Self {
            route,
            ..Default::default()
        }
    }

    pub fn resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn params(mut self, params: FacadeQueryParams) -> Self {
        self.params = params;
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// 将原始请求解释为唯一的搜索意图
///
/// # 参数
///
/// * `raw` - 原始请求
///
/// # 返回值
///
/// * `Ok(SearchIntent)` - 解释出的意图
/// * `Err(FacadeError::Validation)` - 缺少必需参数或请求体不合法
pub fn interpret(raw: RawRequest) -> Result<SearchIntent, FacadeError> {
    let RawRequest {
        route,
        resource,
        params,
        id,
        body,
    } = raw;

    // Every route except Create is addressed by a resource
    let resource = required("resource", resource);

    match route {
        RouteKind::Create => interpret_create(body),
        RouteKind::Autocomplete => {
            let resource = resource?;
            let query = non_blank(params.q)
                .ok_or_else(|| FacadeError::Validation("q is required".to_string()))?;
            Ok(SearchIntent::Autocomplete { resource, query })
        }
        RouteKind::Search => {
            let resource = resource?;
            // An empty q is passed through to the engine untouched
            let query = params
                .q
                .ok_or_else(|| FacadeError::Validation("q is required".to_string()))?;
            Ok(SearchIntent::TextSearch { resource, query })
        }
        RouteKind::Listing => Ok(SearchIntent::Listing {
            resource: resource?,
            filter: listing_filter(params.q, params.c),
            page: PageWindow::new(parse_page(params.page.as_deref())).current_page,
        }),
        RouteKind::Get => Ok(SearchIntent::GetById {
            resource: resource?,
            id: required("id", id)?,
        }),
        RouteKind::Replace => Ok(SearchIntent::Replace {
            resource: resource?,
            id: required("id", id)?,
            doc: document("body", body.unwrap_or(Value::Null))?,
        }),
        RouteKind::Delete => Ok(SearchIntent::Delete {
            resource: resource?,
            id: required("id", id)?,
        }),
    }
}

fn interpret_create(body: Option<Value>) -> Result<SearchIntent, FacadeError> {
    let body = body.ok_or_else(|| FacadeError::Validation("body is required".to_string()))?;
    let dto: CreateDocumentDto = serde_json::from_value(body)
        .map_err(|e| FacadeError::Validation(format!("invalid body: {}", e)))?;
    dto.validate()
        .map_err(|e| FacadeError::Validation(e.to_string()))?;

    Ok(SearchIntent::Create {
        resource: dto.index,
        doc: document("doc", dto.doc)?,
    })
}

/// 分类优先于查询词：两者同时出现时只按分类过滤
fn listing_filter(q: Option<String>, c: Option<String>) -> ListingFilter {
    match (non_blank(q), non_blank(c)) {
        (_, Some(category)) => ListingFilter::Category(category),
        (Some(text), None) => ListingFilter::Title(text),
        (None, None) => ListingFilter::All,
    }
}

/// 宽松解析页码，小数截断为整数，无法解析时视为未提供
pub fn parse_page(page: Option<&str>) -> Option<i64> {
    page.and_then(|p| p.trim().parse::<f64>().ok())
        .filter(|p| p.is_finite())
        .map(|p| p.trunc() as i64)
}

fn required(name: &str, value: Option<String>) -> Result<String, FacadeError> {
    non_blank(value).ok_or_else(|| FacadeError::Validation(format!("{} is required", name)))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn document(name: &str, value: Value) -> Result<Map<String, Value>, FacadeError> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(FacadeError::Validation(format!(
            "{} must be a JSON object",
            name
        ))),
    }
}

#[cfg(test)]
#[path = "interpreter_test.rs"]
mod tests;
