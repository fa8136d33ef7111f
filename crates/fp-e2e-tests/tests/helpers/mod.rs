//! Shared test harness for E2E integration tests.
//!
//! Drives the full Axum router over `tower::ServiceExt::oneshot`
//! against the in-memory store, exercising real code paths across all
//! crate boundaries (routes → import orchestration → CSV tools →
//! validator → store).

#![allow(dead_code)] // each test file links its own copy of the harness

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use fp_fleet_api::routes::build_router;
use fp_fleet_api::state::AppState;

/// End-to-end harness around the router and its in-memory store.
pub struct TestHarness {
    pub state: AppState,
    pub router: Router,
}

impl TestHarness {
    /// Harness with the three-vehicle sample fleet (EV-001..EV-003).
    pub fn with_sample_fleet() -> Self {
        let state = AppState::with_sample_fleet();
        let router = build_router(state.clone());
        Self { state, router }
    }

    /// Harness over an empty store.
    pub fn empty() -> Self {
        let state = AppState::in_memory();
        let router = build_router(state.clone());
        Self { state, router }
    }

    /// GET a JSON endpoint. Returns (status, body JSON).
    pub async fn get_json(&self, path: &str) -> (StatusCode, serde_json::Value) {
        let response = self
            .router
            .clone()
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        Self::split_json(response).await
    }

    /// POST a JSON body. Returns (status, body JSON).
    pub async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::post(path)
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();
        Self::split_json(response).await
    }

    /// PUT a JSON body. Returns (status, body JSON).
    pub async fn put_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::put(path)
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();
        Self::split_json(response).await
    }

    /// DELETE an endpoint. Returns (status, body JSON).
    pub async fn delete(&self, path: &str) -> (StatusCode, serde_json::Value) {
        let response = self
            .router
            .clone()
            .oneshot(Request::delete(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        Self::split_json(response).await
    }

    /// POST raw CSV text to the import endpoint. Returns (status, body JSON).
    pub async fn import_csv(&self, csv: &str) -> (StatusCode, serde_json::Value) {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::post("/api/v1/vehicles/import")
                    .header("content-type", "text/csv")
                    .body(Body::from(csv.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        Self::split_json(response).await
    }

    /// GET the CSV export. Returns (status, body text).
    pub async fn export_csv(&self) -> (StatusCode, String) {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::get("/api/v1/vehicles/export")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn split_json(response: axum::response::Response) -> (StatusCode, serde_json::Value) {
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }
}
