use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use rentacar_core::ClientId;
use rentacar_fleet::{Quote, Reservation};
use rentacar_rental::{CarRentalCompany, CompanyRegistry};

use crate::app::routes::common::lookup_company;
use crate::app::{dto, errors};

pub async fn create_quote(
    Extension(registry): Extension<Arc<CompanyRegistry>>,
    Path(company): Path<String>,
    Json(body): Json<dto::CreateQuoteRequest>,
) -> axum::response::Response {
    let company = match lookup_company(&registry, &company) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    let (constraints, client) = match body.into_parts() {
        Ok(parts) => parts,
        Err(e) => return errors::rental_error_to_response(e),
    };

    match company.create_quote(&constraints, &client) {
        Ok(quote) => (StatusCode::OK, Json(quote)).into_response(),
        Err(e) => errors::rental_error_to_response(e),
    }
}

pub async fn confirm_quote(
    Extension(registry): Extension<Arc<CompanyRegistry>>,
    Path(company): Path<String>,
    Json(quote): Json<Quote>,
) -> axum::response::Response {
    let company = match lookup_company(&registry, &company) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    match company.confirm_quote(&quote) {
        Ok(reservation) => (StatusCode::CREATED, Json(reservation)).into_response(),
        Err(e) => errors::rental_error_to_response(e),
    }
}

pub async fn cancel_reservation(
    Extension(registry): Extension<Arc<CompanyRegistry>>,
    Path(company): Path<String>,
    Json(reservation): Json<Reservation>,
) -> axum::response::Response {
    let company = match lookup_company(&registry, &company) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    match company.cancel_reservation(&reservation) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::rental_error_to_response(e),
    }
}

pub async fn by_renter(
    Extension(registry): Extension<Arc<CompanyRegistry>>,
    Path((company, client)): Path<(String, String)>,
) -> axum::response::Response {
    let company = match lookup_company(&registry, &company) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    let reservations = company.reservations_by_renter(&ClientId::new(client));
    (StatusCode::OK, Json(reservations)).into_response()
}
