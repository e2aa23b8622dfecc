// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::domain::services::facade_service::QueryFacade;
use crate::presentation::errors::not_found;
use crate::presentation::handlers::{document_handler, search_handler};
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// 引擎索引名不能以 `_` 开头，因此服务自身的端点不会遮挡任何资源
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes() -> Router {
    let service_routes = Router::new()
        .route("/_health", get(health_check))
        .route("/_version", get(version));

    let facade_routes = Router::new()
        .route("/", post(document_handler::create_document))
        .route("/{resource}", get(search_handler::listing))
        // Fixed segments shadow `/{resource}/{id}`; documents with these ids
        // are written and deleted through them
        .route(
            "/{resource}/autocomplete",
            get(search_handler::autocomplete)
                .put(document_handler::replace_reserved_document)
                .delete(document_handler::delete_reserved_document),
        )
        .route(
            "/{resource}/search",
            get(search_handler::search)
                .put(document_handler::replace_reserved_document)
                .delete(document_handler::delete_reserved_document),
        )
        .route(
            "/{resource}/{id}",
            get(document_handler::get_document)
                .put(document_handler::replace_document)
                .delete(document_handler::delete_document),
        );

    Router::new()
        .merge(service_routes)
        .merge(facade_routes)
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
}

/// 组装完整应用：路由、共享服务和中间件
///
/// # 参数
///
/// * `facade` - 查询门面服务
/// * `settings` - 应用配置
pub fn app(facade: Arc<QueryFacade>, settings: Arc<Settings>) -> Router {
    let mut app = routes()
        .layer(Extension(facade))
        .layer(Extension(settings.clone()))
        .layer(TraceLayer::new_for_http());

    if settings.server.cors_enabled {
        app = app.layer(CorsLayer::permissive());
    }

    app
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
