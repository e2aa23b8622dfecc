// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP请求处理器模块
///
/// 每个处理器只负责收集路由参数，解释、查询和规整统一交给门面服务
pub mod document_handler;
pub mod search_handler;

use axum::Json;

use crate::application::interpreter::{interpret, RawRequest};
use crate::config::settings::Settings;
use crate::domain::models::envelope::Envelope;
use crate::domain::services::errors::FacadeError;
use crate::domain::services::facade_service::QueryFacade;
use crate::presentation::errors::AppError;

/// 解释请求并交给门面服务执行
pub(crate) async fn dispatch(
    facade: &QueryFacade,
    settings: &Settings,
    raw: Result<RawRequest, FacadeError>,
) -> Result<Json<Envelope>, AppError> {
    let expose = settings.server.expose_engine_errors;
    let intent = raw
        .and_then(interpret)
        .map_err(|e| AppError::new(e, expose))?;
    let envelope = facade
        .execute(intent)
        .await
        .map_err(|e| AppError::new(e, expose))?;
    Ok(Json(envelope))
}
