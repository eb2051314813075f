use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use rentacar_rental::{CarRentalCompany, CompanyRegistry};

use crate::app::dto;
use crate::app::routes::common::lookup_company;

pub async fn list(Extension(registry): Extension<Arc<CompanyRegistry>>) -> axum::response::Response {
    (StatusCode::OK, Json(serde_json::json!({ "companies": registry.names() }))).into_response()
}

pub async fn show(
    Extension(registry): Extension<Arc<CompanyRegistry>>,
    Path(company): Path<String>,
) -> axum::response::Response {
    let company = match lookup_company(&registry, &company) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    (StatusCode::OK, Json(dto::company_to_json(&*company))).into_response()
}

pub async fn regions(
    Extension(registry): Extension<Arc<CompanyRegistry>>,
    Path(company): Path<String>,
) -> axum::response::Response {
    let company = match lookup_company(&registry, &company) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    (StatusCode::OK, Json(company.regions().to_vec())).into_response()
}

pub async fn has_region(
    Extension(registry): Extension<Arc<CompanyRegistry>>,
    Path((company, region)): Path<(String, String)>,
) -> axum::response::Response {
    let company = match lookup_company(&registry, &company) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "region": region,
            "served": company.has_region(&region),
        })),
    )
        .into_response()
}
