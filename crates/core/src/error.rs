//! Domain error model.

use thiserror::Error;

use crate::id::CarId;

/// Result type used across the rental domain.
pub type RentalResult<T> = Result<T, RentalError>;

/// Rental domain error.
///
/// Every variant is terminal for the call that produced it; nothing in the
/// engine retries. Callers decide whether to try again with other constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RentalError {
    /// Lookup by a car-type name the company does not know.
    #[error("no car type of name {0}")]
    UnknownCarType(String),

    /// A reservation references a car id that is not part of the fleet
    /// (e.g. cancelling a reservation at the wrong company).
    #[error("no car with id {0}")]
    UnknownCar(CarId),

    /// Domain rejection: region not served, type unavailable for the interval,
    /// or availability lost between quote and confirmation.
    #[error("reservation rejected: {0}")]
    ReservationRejected(String),

    /// A requested interval whose start does not strictly precede its end.
    #[error("invalid interval: {0}")]
    InvalidInterval(String),
}

impl RentalError {
    pub fn unknown_car_type(name: impl Into<String>) -> Self {
        Self::UnknownCarType(name.into())
    }

    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::ReservationRejected(msg.into())
    }

    pub fn invalid_interval(msg: impl Into<String>) -> Self {
        Self::InvalidInterval(msg.into())
    }

    /// Short machine-readable code, used by transports when mapping errors.
    pub fn code(&self) -> &'static str {
        match self {
            RentalError::UnknownCarType(_) => "unknown_car_type",
            RentalError::UnknownCar(_) => "unknown_car",
            RentalError::ReservationRejected(_) => "reservation_rejected",
            RentalError::InvalidInterval(_) => "invalid_interval",
        }
    }
}
