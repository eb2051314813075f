//! HTTP API application wiring (Axum router + shared state).
//!
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use rentacar_rental::CompanyRegistry;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(registry: Arc<CompanyRegistry>) -> Router {
    routes::router().layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn(middleware::request_logging))
            .layer(Extension(registry)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        build_app(crate::bootstrap::demo_registry().unwrap())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let res = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    #[tokio::test]
    async fn health_is_ok() {
        let (status, _) = get_json(app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_company_is_not_found() {
        let (status, body) = get_json(app(), "/companies/Avis/car-types").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "unknown_company");
    }

    #[tokio::test]
    async fn unknown_car_type_is_not_found_but_counts_zero() {
        let (status, body) = get_json(app(), "/companies/Hertz/car-types/Minivan").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "unknown_car_type");

        let (status, body) =
            get_json(app(), "/companies/Hertz/car-types/Minivan/reservations/count").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reservations"], 0);
    }

    #[tokio::test]
    async fn inverted_interval_is_a_bad_request() {
        let (status, body) = get_json(
            app(),
            "/companies/Hertz/availability?start=2026-03-02T00:00:00Z&end=2026-03-01T00:00:00Z",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_interval");
    }

    #[tokio::test]
    async fn fresh_fleet_has_every_type_available() {
        let (status, body) = get_json(
            app(),
            "/companies/Hertz/availability?start=2026-03-01T00:00:00Z&end=2026-03-02T00:00:00Z",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Compact", "Economy", "Family", "Premium"]);
    }
}
