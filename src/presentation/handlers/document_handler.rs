// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Json, MatchedPath, Path};
use serde_json::Value;
use std::sync::Arc;

use crate::application::interpreter::{RawRequest, RouteKind};
use crate::config::settings::Settings;
use crate::domain::models::envelope::Envelope;
use crate::domain::services::errors::FacadeError;
use crate::domain::services::facade_service::QueryFacade;
use crate::presentation::errors::AppError;
use crate::presentation::handlers::dispatch;

/// 按ID获取文档
///
/// `GET /{resource}/{id}`
pub async fn get_document(
    Extension(facade): Extension<Arc<QueryFacade>>,
    Extension(settings): Extension<Arc<Settings>>,
    Path((resource, id)): Path<(String, String)>,
) -> Result<Json<Envelope>, AppError> {
    let raw = RawRequest::new(RouteKind::Get).resource(resource).id(id);
    dispatch(&facade, &settings, Ok(raw)).await
}

/// 新建文档，请求体为 `{index, doc}`
///
/// `POST /`
pub async fn create_document(
    Extension(facade): Extension<Arc<QueryFacade>>,
    Extension(settings): Extension<Arc<Settings>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Envelope>, AppError> {
    let raw = json_body(payload).map(|body| RawRequest::new(RouteKind::Create).body(body));
    dispatch(&facade, &settings, raw).await
}

/// 按ID整体写入文档
///
/// `PUT /{resource}/{id}`
pub async fn replace_document(
    Extension(facade): Extension<Arc<QueryFacade>>,
    Extension(settings): Extension<Arc<Settings>>,
    Path((resource, id)): Path<(String, String)>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Envelope>, AppError> {
    replace(&facade, &settings, resource, id, payload).await
}

/// 写入ID与固定路由段同名的文档
///
/// `PUT /{resource}/search`、`PUT /{resource}/autocomplete`
pub async fn replace_reserved_document(
    Extension(facade): Extension<Arc<QueryFacade>>,
    Extension(settings): Extension<Arc<Settings>>,
    matched: MatchedPath,
    Path(resource): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Envelope>, AppError> {
    replace(&facade, &settings, resource, reserved_id(&matched), payload).await
}

/// 按ID删除文档
///
/// `DELETE /{resource}/{id}`
pub async fn delete_document(
    Extension(facade): Extension<Arc<QueryFacade>>,
    Extension(settings): Extension<Arc<Settings>>,
    Path((resource, id)): Path<(String, String)>,
) -> Result<Json<Envelope>, AppError> {
    let raw = RawRequest::new(RouteKind::Delete).resource(resource).id(id);
    dispatch(&facade, &settings, Ok(raw)).await
}

/// `DELETE /{resource}/search`、`DELETE /{resource}/autocomplete`
pub async fn delete_reserved_document(
    Extension(facade): Extension<Arc<QueryFacade>>,
    Extension(settings): Extension<Arc<Settings>>,
    matched: MatchedPath,
    Path(resource): Path<String>,
) -> Result<Json<Envelope>, AppError> {
    let raw = RawRequest::new(RouteKind::Delete)
        .resource(resource)
        .id(reserved_id(&matched));
    dispatch(&facade, &settings, Ok(raw)).await
}

async fn replace(
    facade: &QueryFacade,
    settings: &Settings,
    resource: String,
    id: String,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Envelope>, AppError> {
    let raw = json_body(payload).map(|body| {
        RawRequest::new(RouteKind::Replace)
            .resource(resource)
            .id(id)
            .body(body)
    });
    dispatch(facade, settings, raw).await
}

/// 固定路由的最后一段即文档ID
fn reserved_id(matched: &MatchedPath) -> String {
    matched
        .as_str()
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string()
}

fn json_body(payload: Result<Json<Value>, JsonRejection>) -> Result<Value, FacadeError> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| FacadeError::Validation(e.body_text()))
}
