// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for defillama integration tests
//!
//! Provides a local mock of the DefiLlama API so the clients can be exercised
//! without touching the network. Every service is served from the same host;
//! use [`MockServer::config`] to point a client at it.
//!
//! Routes with canned answers:
//!
//! - `GET /prices/current/{coins}`: one price per requested coin, in request order
//! - `POST /prices`: echoes the JSON body under `received`
//! - `GET /pools`: a `data` envelope with one pool
//! - `GET /chart/{id}`: an error object without `data`
//! - `GET /tvl/{protocol}`: a bare number
//! - `GET /broken`: HTML with status 502
//! - `GET /fail`: JSON with status 500
//! - `GET /slow`: JSON after two seconds
//!
//! Anything else echoes the method, path, raw query and user agent.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Request, State},
    http::{header::USER_AGENT, HeaderMap, StatusCode, Uri},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use defillama::{LlamaConfig, LlamaConfigBuilder};
use serde_json::{json, Map, Value};

/// Shared state of the mock server
#[derive(Debug, Default)]
pub struct MockState {
    hits: AtomicUsize,
}

/// Handle to a running mock server
pub struct MockServer {
    pub addr: SocketAddr,
    state: Arc<MockState>,
}

impl MockServer {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Configuration routing every service to this server
    pub fn config(&self) -> LlamaConfig {
        LlamaConfigBuilder::new().all_base_urls(self.base_url()).build()
    }

    /// Number of requests received so far
    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }
}

/// Start the mock server on the current tokio runtime.
pub async fn start_mock_server() -> MockServer {
    let state = Arc::new(MockState::default());
    let router = create_router(state.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind mock server");
    let addr = listener.local_addr().expect("missing local addr");

    tokio::spawn(async move {
        axum::serve(listener, router.into_make_service())
            .await
            .expect("mock server failed");
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    MockServer { addr, state }
}

/// Start the mock server on its own thread and runtime.
///
/// For blocking clients, which must not run inside a tokio runtime.
pub fn start_mock_server_blocking() -> MockServer {
    let state = Arc::new(MockState::default());
    let router = create_router(state.clone());
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("failed to bind mock server");
    listener
        .set_nonblocking(true)
        .expect("failed to set listener non-blocking");
    let addr = listener.local_addr().expect("missing local addr");

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("failed to build mock runtime");
        runtime.block_on(async move {
            let listener =
                tokio::net::TcpListener::from_std(listener).expect("failed to adopt listener");
            axum::serve(listener, router.into_make_service())
                .await
                .expect("mock server failed");
        });
    });

    MockServer { addr, state }
}

/// Base URL of a port nothing listens on.
pub fn closed_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("failed to bind");
    let addr = listener.local_addr().expect("missing local addr");
    drop(listener);
    format!("http://{addr}")
}

fn create_router(state: Arc<MockState>) -> Router {
    Router::new()
        .route("/prices/current/{coins}", get(current_prices))
        .route("/prices", post(post_prices))
        .route("/pools", get(pools))
        .route("/chart/{id}", get(chart_without_data))
        .route("/tvl/{protocol}", get(protocol_tvl))
        .route("/broken", get(broken))
        .route("/fail", get(fail))
        .route("/slow", get(slow))
        .fallback(echo)
        .layer(middleware::from_fn_with_state(state.clone(), count_requests))
        .with_state(state)
}

async fn count_requests(State(state): State<Arc<MockState>>, request: Request, next: Next) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    next.run(request).await
}

async fn current_prices(Path(coins): Path<String>) -> Json<Value> {
    let mut prices = Map::new();
    for (i, coin) in coins.split(',').enumerate() {
        prices.insert(
            coin.to_string(),
            json!({
                "price": 1000.0 + i as f64,
                "symbol": "TKN",
                "timestamp": 1_700_000_000,
                "confidence": 0.99,
            }),
        );
    }
    Json(json!({ "coins": prices }))
}

async fn post_prices(Json(body): Json<Value>) -> Json<Value> {
    Json(json!({ "received": body }))
}

async fn pools() -> Json<Value> {
    Json(json!({
        "status": "success",
        "data": [{
            "pool": "747c1d2a-c668-4682-b9f9-296708a3dd90",
            "chain": "Ethereum",
            "project": "lido",
            "symbol": "STETH",
            "tvlUsd": 23_000_000_000.0,
            "apy": 3.1,
            "apyBase": 3.1,
            "apyReward": null,
            "outlier": false,
        }],
    }))
}

async fn chart_without_data(Path(id): Path<String>) -> Json<Value> {
    Json(json!({ "status": "error", "msg": format!("unknown pool {id}") }))
}

async fn protocol_tvl() -> Json<Value> {
    Json(json!(4_066_840_236.95))
}

async fn broken() -> impl IntoResponse {
    (StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>")
}

async fn fail() -> impl IntoResponse {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": "internal" })),
    )
}

async fn slow() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(2)).await;
    Json(json!({ "late": true }))
}

async fn echo(method: axum::http::Method, uri: Uri, headers: HeaderMap) -> Json<Value> {
    Json(json!({
        "method": method.as_str(),
        "path": uri.path(),
        "query": uri.query(),
        "userAgent": headers.get(USER_AGENT).and_then(|v| v.to_str().ok()),
    }))
}
