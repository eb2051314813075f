use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use rentacar_core::RentalError;

pub fn rental_error_to_response(err: RentalError) -> axum::response::Response {
    let status = match &err {
        RentalError::UnknownCarType(_) | RentalError::UnknownCar(_) => StatusCode::NOT_FOUND,
        RentalError::ReservationRejected(_) => StatusCode::CONFLICT,
        RentalError::InvalidInterval(_) => StatusCode::BAD_REQUEST,
    };
    json_error(status, err.code(), err.to_string())
}

pub fn unknown_company(name: &str) -> axum::response::Response {
    json_error(
        StatusCode::NOT_FOUND,
        "unknown_company",
        format!("no rental company named {name}"),
    )
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
