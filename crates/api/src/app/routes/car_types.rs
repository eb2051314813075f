use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use rentacar_core::RentalError;
use rentacar_rental::{CarRentalCompany, CompanyRegistry};

use crate::app::routes::common::lookup_company;
use crate::app::{dto, errors};

pub async fn list(
    Extension(registry): Extension<Arc<CompanyRegistry>>,
    Path(company): Path<String>,
) -> axum::response::Response {
    let company = match lookup_company(&registry, &company) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    (StatusCode::OK, Json(company.all_car_types())).into_response()
}

pub async fn show(
    Extension(registry): Extension<Arc<CompanyRegistry>>,
    Path((company, name)): Path<(String, String)>,
) -> axum::response::Response {
    let company = match lookup_company(&registry, &company) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    match company.car_type(&name) {
        Ok(car_type) => (StatusCode::OK, Json(car_type)).into_response(),
        Err(e) => errors::rental_error_to_response(e),
    }
}

pub async fn available(
    Extension(registry): Extension<Arc<CompanyRegistry>>,
    Path(company): Path<String>,
    Query(interval): Query<dto::IntervalQuery>,
) -> axum::response::Response {
    let company = match lookup_company(&registry, &company) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    if let Err(e) = check_interval(&interval) {
        return errors::rental_error_to_response(e);
    }

    let types = company.available_car_types(interval.start, interval.end);
    (StatusCode::OK, Json(dto::car_types_to_json(types))).into_response()
}

pub async fn availability(
    Extension(registry): Extension<Arc<CompanyRegistry>>,
    Path((company, name)): Path<(String, String)>,
    Query(interval): Query<dto::IntervalQuery>,
) -> axum::response::Response {
    let company = match lookup_company(&registry, &company) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    if let Err(e) = check_interval(&interval) {
        return errors::rental_error_to_response(e);
    }

    match company.is_available(&name, interval.start, interval.end) {
        Ok(available) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "car_type": name,
                "start": interval.start,
                "end": interval.end,
                "available": available,
            })),
        )
            .into_response(),
        Err(e) => errors::rental_error_to_response(e),
    }
}

pub async fn reservation_count(
    Extension(registry): Extension<Arc<CompanyRegistry>>,
    Path((company, name)): Path<(String, String)>,
) -> axum::response::Response {
    let company = match lookup_company(&registry, &company) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "car_type": name,
            "reservations": company.number_of_reservations_for_car_type(&name),
        })),
    )
        .into_response()
}

fn check_interval(interval: &dto::IntervalQuery) -> Result<(), RentalError> {
    if interval.start >= interval.end {
        return Err(RentalError::invalid_interval(format!(
            "start {} must precede end {}",
            interval.start, interval.end
        )));
    }
    Ok(())
}
