use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::calls::handlers;
use crate::features::calls::services::CallService;

/// Create routes for the calls feature
pub fn routes(service: Arc<CallService>) -> Router {
    Router::new()
        .route("/api/calls", get(handlers::list_calls))
        .route("/api/calls/{id}", get(handlers::get_call))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;

    use crate::shared::test_helpers::{sample_calls, FailingRepository, InMemoryCallRepository};

    fn server() -> TestServer {
        let repository = Arc::new(InMemoryCallRepository::new(sample_calls()));
        TestServer::new(routes(Arc::new(CallService::new(repository)))).unwrap()
    }

    #[tokio::test]
    async fn test_list_calls() {
        let response = server().get("/api/calls").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["meta"]["total"], sample_calls().len() as i64);
        assert!(body["data"][0]["callLog"].is_string());
        assert!(body["data"][0]["isE33"].is_boolean());
    }

    #[tokio::test]
    async fn test_list_calls_with_filters() {
        let response = server()
            .get("/api/calls")
            .add_query_param("monthYear", "2025-08")
            .add_query_param("crime_type", "Geweld")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        let data = body["data"].as_array().unwrap();
        assert!(!data.is_empty());
        for call in data {
            assert_eq!(call["monthYear"], "2025-08");
            assert_eq!(call["crimeType"], "Geweld");
        }
    }

    #[tokio::test]
    async fn test_list_calls_unknown_month_is_empty() {
        let response = server()
            .get("/api/calls")
            .add_query_param("monthYear", "august")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["meta"]["total"], 0);
    }

    #[tokio::test]
    async fn test_list_calls_padded_category_does_not_match() {
        let response = server()
            .get("/api/calls")
            .add_query_param("crimeType", "Geweld ")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["meta"]["total"], 0);
    }

    #[tokio::test]
    async fn test_list_calls_bad_flag() {
        let response = server()
            .get("/api/calls")
            .add_query_param("isE33", "maybe")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_call() {
        let known = sample_calls()[0].clone();

        let response = server().get(&format!("/api/calls/{}", known.id)).await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["id"], known.id.to_string());
        assert_eq!(body["data"]["address"], known.address);
    }

    #[tokio::test]
    async fn test_get_unknown_call() {
        let response = server()
            .get(&format!("/api/calls/{}", uuid::Uuid::new_v4()))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_storage_failure_is_500() {
        let service = CallService::new(Arc::new(FailingRepository));
        let server = TestServer::new(routes(Arc::new(service))).unwrap();

        let response = server.get("/api/calls").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }
}
