// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::create_in_memory_app;
use axum::http::StatusCode;
use serde_json::{json, Value};

/// 文档生命周期测试
///
/// 创建、读取、替换、浏览、删除依次走通
#[tokio::test]
async fn test_document_lifecycle() {
    let (server, engine) = create_in_memory_app();

    // Create
    let response = server
        .post("/")
        .json(&json!({
            "index": "books",
            "doc": { "title": "Dune", "category": "scifi" }
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let created: Value = response.json();
    assert_eq!(created["code"], 201);
    assert_eq!(created["message"], "Created");
    let id = created["data"]["_id"].as_str().unwrap().to_string();
    assert_eq!(
        engine.document("books", &id).await,
        Some(json!({ "title": "Dune", "category": "scifi" }).as_object().unwrap().clone())
    );

    // Get
    let response = server.get(&format!("/books/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let fetched: Value = response.json();
    assert_eq!(fetched["code"], 200);
    assert_eq!(fetched["message"], "OK");
    assert_eq!(
        fetched["data"],
        json!({ "_id": id, "title": "Dune", "category": "scifi" })
    );

    // Replace
    let response = server
        .put(&format!("/books/{}", id))
        .json(&json!({ "title": "Dune Messiah", "category": "scifi" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let replaced: Value = response.json();
    assert_eq!(replaced["code"], 200);
    assert_eq!(replaced["data"]["_id"], id.as_str());
    assert_eq!(replaced["data"]["title"], "Dune Messiah");

    // Listing
    let response = server.get("/books").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let listing: Value = response.json();
    assert_eq!(listing["data"]["total"], 1);
    assert_eq!(listing["data"]["totalPage"], 1);
    assert_eq!(listing["data"]["records"][0]["title"], "Dune Messiah");
    assert_eq!(
        listing["data"]["aggregations"]["categories"],
        json!([{ "key": "scifi", "doc_count": 1 }])
    );

    // Delete
    let response = server.delete(&format!("/books/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "status": "success", "code": 200, "message": "Deleted", "data": null })
    );
    assert!(engine.document("books", &id).await.is_none());

    // Get after delete
    let response = server.get(&format!("/books/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"]["kind"], "engine_error");
    assert_eq!(body["error"]["status"], 404);
    assert_eq!(body["error"]["body"]["found"], false);
}

/// 替换不存在的ID时按插入处理
#[tokio::test]
async fn test_replace_creates_missing_document() {
    let (server, engine) = create_in_memory_app();

    let response = server
        .put("/books/isbn-0441013597")
        .json(&json!({ "title": "Dune" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["code"], 201);
    assert_eq!(body["message"], "Created");
    assert_eq!(
        body["data"],
        json!({ "_id": "isbn-0441013597", "title": "Dune" })
    );
    assert!(engine.document("books", "isbn-0441013597").await.is_some());
}

/// 文档自带的 `_id` 字段被引擎分配的ID覆盖
#[tokio::test]
async fn test_engine_id_wins_over_source_field() {
    let (server, _engine) = create_in_memory_app();

    server
        .put("/books/real-id")
        .json(&json!({ "_id": "fake-id", "title": "Emma" }))
        .await;

    let response = server.get("/books/real-id").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["data"]["_id"], "real-id");
}

#[tokio::test]
async fn test_autocomplete_over_stored_titles() {
    let (server, _engine) = create_in_memory_app();

    for (id, title) in [("1", "Dune"), ("2", "Dune"), ("3", "Emma")] {
        server
            .put(&format!("/books/{}", id))
            .json(&json!({ "title": title, "category": "fiction" }))
            .await;
    }

    let response = server
        .get("/books/autocomplete")
        .add_query_param("q", "Du")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Obtained");
    assert_eq!(
        body["data"],
        json!([
            { "key": "Dune", "doc_count": 2 },
            { "key": "Emma", "doc_count": 1 }
        ])
    );
}

#[tokio::test]
async fn test_delete_missing_document_is_engine_error() {
    let (server, _engine) = create_in_memory_app();

    let response = server.delete("/books/nope").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"]["kind"], "engine_error");
    assert_eq!(body["error"]["status"], 404);
}

#[tokio::test]
async fn test_replace_requires_object_body() {
    let (server, engine) = create_in_memory_app();

    let response = server.put("/books/1").json(&json!(["not", "an", "object"])).await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["error"]["kind"], "validation_error");
    assert!(engine.document("books", "1").await.is_none());
}

/// ID 与固定路由段同名的文档仍可写入和删除
#[tokio::test]
async fn test_reserved_segment_ids_can_be_replaced_and_deleted() {
    let (server, engine) = create_in_memory_app();

    for id in ["search", "autocomplete"] {
        let response = server
            .put(&format!("/books/{}", id))
            .json(&json!({ "title": "Named after a route" }))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK, "id {}", id);
        let body: Value = response.json();
        assert_eq!(body["code"], 201);
        assert_eq!(body["data"]["_id"], id);
        assert!(engine.document("books", id).await.is_some());

        let response = server.delete(&format!("/books/{}", id)).await;
        assert_eq!(response.status_code(), StatusCode::OK, "id {}", id);
        assert_eq!(response.json::<Value>()["message"], "Deleted");
        assert!(engine.document("books", id).await.is_none());
    }
}
