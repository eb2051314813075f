//! Rental company engine.
//!
//! - `service`: the capability set a company exposes to remote callers
//! - `company`: the engine behind it (availability, quotes, reservations)
//! - `pricing`: how an interval turns into a price
//! - `registry`: name-based lookup of companies
//! - `fleet_config`: building a company from a JSON fleet description

pub mod company;
pub mod fleet_config;
pub mod pricing;
pub mod registry;
pub mod service;

pub use company::RentalCompany;
pub use fleet_config::{CarTypeConfig, FleetConfig, FleetConfigError};
pub use registry::CompanyRegistry;
pub use service::CarRentalCompany;

pub use rentacar_core::{CarId, ClientId, RentalError, RentalResult, ReservationId};
pub use rentacar_fleet::{Car, CarType, Quote, Reservation, ReservationConstraints};
