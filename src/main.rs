// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use searchgate::config::settings::Settings;
use searchgate::domain::services::facade_service::QueryFacade;
use searchgate::infrastructure::metrics::init_metrics;
use searchgate::infrastructure::search::elasticsearch::ElasticsearchClient;
use searchgate::presentation::routes;
use searchgate::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting searchgate...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Initialize Prometheus Metrics
    init_metrics(&settings.metrics);

    // 4. Initialize search engine client
    let engine = Arc::new(ElasticsearchClient::new(&settings.engine)?);
    info!("Search engine client targeting {}", settings.engine.url);
    let facade = Arc::new(QueryFacade::new(engine));

    // 5. Start HTTP server
    let app = routes::app(facade, settings.clone());

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
