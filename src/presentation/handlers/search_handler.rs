// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Extension, Json, Path, Query};
use std::sync::Arc;

use crate::application::dto::facade_request::FacadeQueryParams;
use crate::application::interpreter::{RawRequest, RouteKind};
use crate::config::settings::Settings;
use crate::domain::models::envelope::Envelope;
use crate::domain::services::errors::FacadeError;
use crate::domain::services::facade_service::QueryFacade;
use crate::presentation::errors::AppError;
use crate::presentation::handlers::dispatch;

/// 标题补全
///
/// `GET /{resource}/autocomplete?q=<text>`
pub async fn autocomplete(
    Extension(facade): Extension<Arc<QueryFacade>>,
    Extension(settings): Extension<Arc<Settings>>,
    Path(resource): Path<String>,
    params: Result<Query<FacadeQueryParams>, QueryRejection>,
) -> Result<Json<Envelope>, AppError> {
    let raw = RawRequest::new(RouteKind::Autocomplete).resource(resource);
    dispatch(&facade, &settings, with_params(raw, params)).await
}

/// 全文检索，固定返回第一页
///
/// `GET /{resource}/search?q=<text>`
pub async fn search(
    Extension(facade): Extension<Arc<QueryFacade>>,
    Extension(settings): Extension<Arc<Settings>>,
    Path(resource): Path<String>,
    params: Result<Query<FacadeQueryParams>, QueryRejection>,
) -> Result<Json<Envelope>, AppError> {
    let raw = RawRequest::new(RouteKind::Search).resource(resource);
    dispatch(&facade, &settings, with_params(raw, params)).await
}

/// 分页浏览
///
/// `GET /{resource}?q=<text>&c=<category>&page=<n>`
pub async fn listing(
    Extension(facade): Extension<Arc<QueryFacade>>,
    Extension(settings): Extension<Arc<Settings>>,
    Path(resource): Path<String>,
    params: Result<Query<FacadeQueryParams>, QueryRejection>,
) -> Result<Json<Envelope>, AppError> {
    let raw = RawRequest::new(RouteKind::Listing).resource(resource);
    dispatch(&facade, &settings, with_params(raw, params)).await
}

fn with_params(
    raw: RawRequest,
    params: Result<Query<FacadeQueryParams>, QueryRejection>,
) -> Result<RawRequest, FacadeError> {
    let Query(params) = params.map_err(|e| FacadeError::Validation(e.body_text()))?;
    Ok(raw.params(params))
}
