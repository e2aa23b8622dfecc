// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use axum_test::TestServer;
use searchgate::config::settings::Settings;
use searchgate::domain::search::engine::{EngineError, EngineReply, EngineRequest, SearchEngine};
use searchgate::domain::services::facade_service::QueryFacade;
use searchgate::infrastructure::search::elasticsearch::ElasticsearchClient;
use searchgate::presentation::routes;
use serde_json::{json, Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::Mutex;
use wiremock::MockServer;

/// 基于 wiremock 的测试应用，引擎通过HTTP访问
pub struct MockEngineApp {
    pub server: TestServer,
    pub engine: MockServer,
}

pub async fn create_mock_engine_app() -> MockEngineApp {
    create_mock_engine_app_with(|_| {}).await
}

pub async fn create_mock_engine_app_with(configure: impl FnOnce(&mut Settings)) -> MockEngineApp {
    let engine = MockServer::start().await;
    let mut settings = Settings::from_engine_url(&engine.uri()).unwrap();
    configure(&mut settings);

    let client = Arc::new(ElasticsearchClient::new(&settings.engine).unwrap());
    let facade = Arc::new(QueryFacade::new(client));
    let server = TestServer::new(routes::app(facade, Arc::new(settings))).unwrap();

    MockEngineApp { server, engine }
}

/// 使用内存引擎的测试应用
pub fn create_in_memory_app() -> (TestServer, Arc<InMemoryEngine>) {
    let engine = Arc::new(InMemoryEngine::default());
    let settings = Settings::from_engine_url("http://127.0.0.1:9200").unwrap();
    let facade = Arc::new(QueryFacade::new(engine.clone()));
    let server = TestServer::new(routes::app(facade, Arc::new(settings))).unwrap();
    (server, engine)
}

/// 内存搜索引擎
///
/// 按文档ID存取，搜索时忽略查询条件返回索引内全部文档
#[derive(Default)]
pub struct InMemoryEngine {
    indices: Mutex<HashMap<String, BTreeMap<String, Map<String, Value>>>>,
    next_id: Mutex<u64>,
}

impl InMemoryEngine {
    pub async fn document(&self, index: &str, id: &str) -> Option<Map<String, Value>> {
        self.indices
            .lock()
            .await
            .get(index)
            .and_then(|docs| docs.get(id).cloned())
    }

    fn ok(status: u16, reason: &str, body: Value) -> Result<EngineReply, EngineError> {
        Ok(EngineReply {
            status,
            reason: reason.to_string(),
            body,
        })
    }

    fn not_found(index: &str, id: &str) -> Result<EngineReply, EngineError> {
        Err(EngineError::Rejected {
            status: 404,
            reason: "Not Found".to_string(),
            body: json!({ "_index": index, "_id": id, "found": false }),
        })
    }
}

#[async_trait]
impl SearchEngine for InMemoryEngine {
    async fn execute(&self, request: EngineRequest) -> Result<EngineReply, EngineError> {
        match request {
            EngineRequest::Index { index, id, doc } => {
                let id = match id {
                    Some(id) => id,
                    None => {
                        let mut next = self.next_id.lock().await;
                        *next += 1;
                        format!("mem-{}", *next)
                    }
                };
                let mut indices = self.indices.lock().await;
                let previous = indices
                    .entry(index.clone())
                    .or_default()
                    .insert(id.clone(), doc);
                match previous {
                    Some(_) => Self::ok(
                        200,
                        "OK",
                        json!({ "_index": index, "_id": id, "result": "updated" }),
                    ),
                    None => Self::ok(
                        201,
                        "Created",
                        json!({ "_index": index, "_id": id, "result": "created" }),
                    ),
                }
            }
            EngineRequest::Get { index, id } => match self.document(&index, &id).await {
                Some(source) => Self::ok(
                    200,
                    "OK",
                    json!({ "_index": index, "_id": id, "found": true, "_source": source }),
                ),
                None => Self::not_found(&index, &id),
            },
            EngineRequest::Delete { index, id } => {
                let removed = self
                    .indices
                    .lock()
                    .await
                    .get_mut(&index)
                    .and_then(|docs| docs.remove(&id));
                match removed {
                    Some(_) => Self::ok(
                        200,
                        "OK",
                        json!({ "_index": index, "_id": id, "result": "deleted" }),
                    ),
                    None => Self::not_found(&index, &id),
                }
            }
            EngineRequest::Search { index, .. } => {
                let indices = self.indices.lock().await;
                let docs = indices.get(&index).cloned().unwrap_or_default();

                let mut categories: BTreeMap<String, u64> = BTreeMap::new();
                let mut titles: BTreeMap<String, u64> = BTreeMap::new();
                let hits: Vec<Value> = docs
                    .iter()
                    .map(|(id, source)| {
                        if let Some(category) = source.get("category").and_then(Value::as_str) {
                            *categories.entry(category.to_string()).or_default() += 1;
                        }
                        if let Some(title) = source.get("title").and_then(Value::as_str) {
                            *titles.entry(title.to_string()).or_default() += 1;
                        }
                        json!({ "_index": index, "_id": id, "_score": 1.0, "_source": source })
                    })
                    .collect();

                let buckets = |counts: BTreeMap<String, u64>| -> Vec<Value> {
                    counts
                        .into_iter()
                        .map(|(key, doc_count)| json!({ "key": key, "doc_count": doc_count }))
                        .collect()
                };

                Self::ok(
                    200,
                    "OK",
                    json!({
                        "hits": { "total": { "value": hits.len(), "relation": "eq" }, "hits": hits },
                        "aggregations": {
                            "categories": { "buckets": buckets(categories) },
                            "auto_complete": { "buckets": buckets(titles) }
                        }
                    }),
                )
            }
        }
    }

    fn name(&self) -> &'static str {
        "in-memory"
    }
}
