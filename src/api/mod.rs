//! API layer - HTTP handlers and routing
//!
//! This module contains the HTTP endpoints of the console backend:
//! - Pagination window and page-change validation endpoints
//! - Site health endpoint

pub mod middleware;
pub mod pagination;
pub mod site;

use anyhow::Context;
use axum::{
    http::{header, HeaderValue, Method},
    middleware as axum_middleware,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use middleware::{ApiError, AppState, RequestStats};

/// Build the main API router
pub fn build_api_router() -> Router<AppState> {
    Router::new()
        .nest("/pagination", pagination::router())
        .nest("/site", site::router())
}

/// Build the complete router with middleware
pub fn build_router(state: AppState, cors_origin: &str) -> anyhow::Result<Router> {
    let origin = cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin: {}", cors_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Ok(Router::new()
        .nest("/api/v1", build_api_router())
        .fallback(middleware::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::request_stats_middleware,
        ))
        .with_state(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PaginationConfig;
    use crate::pagination::PageEntry;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use pagination::{ChangeResponse, WindowResponse};
    use serde_json::Value;

    fn server() -> TestServer {
        let state = AppState::new(PaginationConfig {
            default_page_size: 10,
            max_page_size: 50,
        });
        let app = build_router(state, "http://localhost:3000").unwrap();
        TestServer::new(app).unwrap()
    }

    fn numbers(entries: &[PageEntry]) -> Vec<Option<u32>> {
        entries.iter().map(PageEntry::page_number).collect()
    }

    #[tokio::test]
    async fn test_window_in_long_list() {
        let server = server();
        let response = server
            .get("/api/v1/pagination/window")
            .add_query_param("page", 7)
            .add_query_param("page_size", 10)
            .add_query_param("total", 200)
            .await;

        response.assert_status_ok();
        let body: WindowResponse = response.json();
        assert_eq!(body.total_pages, 20);
        assert!(body.visible);
        assert_eq!(
            numbers(&body.entries),
            vec![Some(1), None, Some(5), Some(6), Some(7), Some(8), Some(9), None, Some(20)]
        );
        assert!(body.previous.enabled);
        assert_eq!(body.next.page, 8);
    }

    #[tokio::test]
    async fn test_window_uses_default_page_size() {
        let server = server();
        let response = server
            .get("/api/v1/pagination/window")
            .add_query_param("total", 35)
            .await;

        response.assert_status_ok();
        let body: WindowResponse = response.json();
        assert_eq!(body.current_page, 1);
        assert_eq!(body.page_size, 10);
        assert_eq!(numbers(&body.entries), vec![Some(1), Some(2), Some(3), Some(4)]);
        assert!(!body.previous.enabled);
    }

    #[tokio::test]
    async fn test_window_hidden_for_single_page() {
        let server = server();
        let response = server
            .get("/api/v1/pagination/window")
            .add_query_param("total", 5)
            .await;

        let body: Value = response.json();
        assert_eq!(body["visible"], Value::Bool(false));
        assert_eq!(body["entries"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_window_entry_wire_format() {
        let server = server();
        let response = server
            .get("/api/v1/pagination/window")
            .add_query_param("page", 19)
            .add_query_param("total", 200)
            .await;

        let body: Value = response.json();
        assert_eq!(body["entries"][0], serde_json::json!({"type": "page", "number": 1}));
        assert_eq!(body["entries"][1], serde_json::json!({"type": "ellipsis"}));
        assert_eq!(body["entries"][2], serde_json::json!({"type": "page", "number": 15}));
        assert_eq!(body["entries"].as_array().map(Vec::len), Some(8));
    }

    #[tokio::test]
    async fn test_zero_page_size_is_rejected() {
        let server = server();
        let response = server
            .get("/api/v1/pagination/window")
            .add_query_param("page_size", 0)
            .add_query_param("total", 10)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_page_size_above_maximum_is_rejected() {
        let server = server();
        let response = server
            .get("/api/v1/pagination/window")
            .add_query_param("page_size", 51)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_query_returns_json_error() {
        let server = server();

        let response = server
            .get("/api/v1/pagination/change")
            .add_query_param("total", "lots")
            .add_query_param("target", 1)
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let response = server
            .get("/api/v1/pagination/change")
            .add_query_param("total", 35)
            .add_query_param("target", "next")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let response = server
            .get("/api/v1/pagination/window")
            .add_query_param("page", "two")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_change_validation() {
        let server = server();

        for (target, expected) in [(0, None), (5, None), (-1, None), (3, Some(3))] {
            let response = server
                .get("/api/v1/pagination/change")
                .add_query_param("total", 35)
                .add_query_param("target", target)
                .await;

            response.assert_status_ok();
            let body: ChangeResponse = response.json();
            assert_eq!(body.accepted, expected.is_some(), "target {}", target);
            assert_eq!(body.page, expected, "target {}", target);
        }
    }

    #[tokio::test]
    async fn test_health_counts_requests() {
        let server = server();
        server.get("/api/v1/site/health").await.assert_status_ok();

        let body: Value = server.get("/api/v1/site/health").await.json();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["total_requests"], 1);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let server = server();
        let response = server.get("/api/v1/nowhere").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_cors_origin() {
        let state = AppState::new(PaginationConfig::default());
        assert!(build_router(state, "bad\norigin").is_err());
    }
}
