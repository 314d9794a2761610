//! Shared helpers: a throwaway search API on localhost.

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::collections::HashMap;
use std::time::Duration;

/// Serves `app` on an ephemeral port and returns its base URL.
pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// `/search?query=...` answers two hits whose titles echo the decoded query,
/// `/broken` answers 500, `/garbage` answers a body without `hits` and `/slow`
/// answers only after three seconds.
pub fn search_api() -> Router {
    Router::new()
        .route("/search", get(search))
        .route("/broken", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .route("/garbage", get(|| async { Json(json!({"nbHits": 0})) }))
        .route("/slow", get(slow))
}

async fn search(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    let query = params.get("query").cloned().unwrap_or_default();
    Json(json!({
        "hits": [
            {
                "objectID": "1",
                "title": format!("Alpha {}", query),
                "author": "alice",
                "url": "https://alpha.example",
                "points": 10,
                "num_comments": 3
            },
            {
                "objectID": "2",
                "title": format!("Beta {}", query),
                "author": "bob",
                "url": null
            }
        ]
    }))
}

async fn slow() -> impl IntoResponse {
    tokio::time::sleep(Duration::from_secs(3)).await;
    Json(json!({"hits": []}))
}
