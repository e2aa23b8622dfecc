// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::envelope::Envelope;
use crate::domain::models::intent::SearchIntent;
use crate::domain::search::engine::SearchEngine;
use crate::domain::search::query_builder::build_request;
use crate::domain::services::errors::FacadeError;
use crate::domain::services::normalizer::normalize;
use metrics::{counter, histogram};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument, warn};

/// 查询门面服务
///
/// 按 解释 -> 构建查询 -> 调用引擎 -> 规整响应 的顺序处理请求，
/// 请求之间不保留任何状态
#[derive(Clone)]
pub struct QueryFacade {
    engine: Arc<dyn SearchEngine>,
}

impl QueryFacade {
    /// 创建新的门面服务
    ///
    /// # 参数
    ///
    /// * `engine` - 搜索引擎实现
    pub fn new(engine: Arc<dyn SearchEngine>) -> Self {
        Self { engine }
    }

    /// 执行搜索意图
    ///
    /// # 返回值
    ///
    /// * `Ok(Envelope)` - 规整后的响应
    /// * `Err(FacadeError)` - 引擎不可达、引擎拒绝或响应结构异常
    #[instrument(skip_all, fields(operation = intent.operation(), resource = intent.resource()))]
    pub async fn execute(&self, intent: SearchIntent) -> Result<Envelope, FacadeError> {
        let operation = intent.operation();
        let request = build_request(&intent);
        debug!(engine = self.engine.name(), "Dispatching engine request");

        counter!("engine_requests_total", "operation" => operation).increment(1);
        let start = Instant::now();
        let outcome = self.engine.execute(request).await;
        histogram!("engine_request_duration_seconds", "operation" => operation)
            .record(start.elapsed().as_secs_f64());

        let result = outcome
            .map_err(FacadeError::from)
            .and_then(|reply| {
                debug!(status = reply.status, "Engine request succeeded");
                normalize(&intent, reply)
            });

        if let Err(e) = &result {
            counter!("engine_failures_total", "operation" => operation, "kind" => e.kind())
                .increment(1);
            warn!(kind = e.kind(), "Engine request failed: {}", e);
        }

        result
    }
}
