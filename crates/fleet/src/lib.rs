//! Fleet domain module: car types, cars, and the reservation records held
//! against them.
//!
//! This crate contains deterministic domain logic only (no IO, no HTTP, no
//! logging). Cross-thread safety of a car's reservation set lives here too,
//! since the car is the unit of mutual exclusion.

pub mod car;
pub mod car_type;
pub mod reservation;

pub use car::Car;
pub use car_type::CarType;
pub use reservation::{Quote, Reservation, ReservationConstraints, intervals_overlap};
