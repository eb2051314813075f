use axum::{
    routing::{get, post},
    Router,
};

pub mod car_types;
pub mod common;
pub mod companies;
pub mod reservations;
pub mod system;

/// Router for every endpoint; handlers pull the registry from an `Extension`.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/companies", get(companies::list))
        .route("/companies/:company", get(companies::show))
        .route("/companies/:company/regions", get(companies::regions))
        .route("/companies/:company/regions/:region", get(companies::has_region))
        .route("/companies/:company/availability", get(car_types::available))
        .route("/companies/:company/car-types", get(car_types::list))
        .route("/companies/:company/car-types/:name", get(car_types::show))
        .route(
            "/companies/:company/car-types/:name/availability",
            get(car_types::availability),
        )
        .route(
            "/companies/:company/car-types/:name/reservations/count",
            get(car_types::reservation_count),
        )
        .route("/companies/:company/quotes", post(reservations::create_quote))
        .route("/companies/:company/reservations", post(reservations::confirm_quote))
        .route(
            "/companies/:company/reservations/cancel",
            post(reservations::cancel_reservation),
        )
        .route(
            "/companies/:company/renters/:client/reservations",
            get(reservations::by_renter),
        )
}
