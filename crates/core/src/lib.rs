//! `rentacar-core` — shared building blocks for the rental domain.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identifiers, the error taxonomy, and the entity/value-object markers.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{RentalError, RentalResult};
pub use id::{CarId, ClientId, ReservationId};
pub use value_object::ValueObject;
