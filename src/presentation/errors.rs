// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Map, Value};
use tracing::error;

use crate::domain::search::engine::EngineError;
use crate::domain::services::errors::FacadeError;

/// 应用错误类型
///
/// 所有错误统一映射为500，错误类别只用于日志和响应体
#[derive(Debug)]
pub struct AppError {
    error: FacadeError,
    expose_details: bool,
}

impl AppError {
    /// 创建应用错误
    ///
    /// # 参数
    ///
    /// * `error` - 门面服务错误
    /// * `expose_details` - 响应体中是否包含底层错误详情
    pub fn new(error: FacadeError, expose_details: bool) -> Self {
        Self {
            error,
            expose_details,
        }
    }

    pub fn error(&self) -> &FacadeError {
        &self.error
    }

    fn body(&self) -> Value {
        let mut detail = Map::new();
        detail.insert("kind".to_string(), json!(self.error.kind()));

        if !self.expose_details {
            detail.insert("message".to_string(), json!("Internal Server Error"));
            return json!({ "error": detail });
        }

        detail.insert("message".to_string(), json!(self.error.to_string()));
        if let FacadeError::Engine(EngineError::Rejected { status, body, .. }) = &self.error {
            detail.insert("status".to_string(), json!(status));
            detail.insert("body".to_string(), body.clone());
        }
        json!({ "error": detail })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(kind = self.error.kind(), "Request failed: {}", self.error);
        (StatusCode::INTERNAL_SERVER_ERROR, Json(self.body())).into_response()
    }
}

/// 未匹配路由的响应
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": "Not Found" })))
}
