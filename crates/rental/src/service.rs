//! The capability set a rental company exposes to (remote) callers.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use rentacar_core::{ClientId, RentalResult};
use rentacar_fleet::{CarType, Quote, Reservation, ReservationConstraints};

/// Location-transparent interface to one rental company.
///
/// Transports (HTTP, RPC, queues) sit in front of this trait; nothing behind
/// it knows how a call arrived. Implementations must tolerate concurrent calls.
pub trait CarRentalCompany: Send + Sync {
    fn name(&self) -> &str;

    fn regions(&self) -> &[String];

    fn has_region(&self, region: &str) -> bool;

    /// Every car type present in the fleet, ordered by name.
    fn all_car_types(&self) -> Vec<CarType>;

    fn car_type(&self, name: &str) -> RentalResult<CarType>;

    /// Types with at least one car free over `[start, end)`.
    fn available_car_types(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> HashSet<CarType>;

    /// Fails with `UnknownCarType` when the type is not part of the fleet.
    fn is_available(&self, car_type: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> RentalResult<bool>;

    /// Price a request without reserving anything.
    fn create_quote(&self, constraints: &ReservationConstraints, client: &ClientId) -> RentalResult<Quote>;

    /// Turn a quote into a reservation on one concrete car.
    fn confirm_quote(&self, quote: &Quote) -> RentalResult<Reservation>;

    fn cancel_reservation(&self, reservation: &Reservation) -> RentalResult<()>;

    fn reservations_by_renter(&self, client: &ClientId) -> Vec<Reservation>;

    /// Unknown types count zero reservations (no error, unlike `is_available`).
    fn number_of_reservations_for_car_type(&self, car_type: &str) -> usize;
}

impl<S> CarRentalCompany for Arc<S>
where
    S: CarRentalCompany + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn regions(&self) -> &[String] {
        (**self).regions()
    }

    fn has_region(&self, region: &str) -> bool {
        (**self).has_region(region)
    }

    fn all_car_types(&self) -> Vec<CarType> {
        (**self).all_car_types()
    }

    fn car_type(&self, name: &str) -> RentalResult<CarType> {
        (**self).car_type(name)
    }

    fn available_car_types(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> HashSet<CarType> {
        (**self).available_car_types(start, end)
    }

    fn is_available(&self, car_type: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> RentalResult<bool> {
        (**self).is_available(car_type, start, end)
    }

    fn create_quote(&self, constraints: &ReservationConstraints, client: &ClientId) -> RentalResult<Quote> {
        (**self).create_quote(constraints, client)
    }

    fn confirm_quote(&self, quote: &Quote) -> RentalResult<Reservation> {
        (**self).confirm_quote(quote)
    }

    fn cancel_reservation(&self, reservation: &Reservation) -> RentalResult<()> {
        (**self).cancel_reservation(reservation)
    }

    fn reservations_by_renter(&self, client: &ClientId) -> Vec<Reservation> {
        (**self).reservations_by_renter(client)
    }

    fn number_of_reservations_for_car_type(&self, car_type: &str) -> usize {
        (**self).number_of_reservations_for_car_type(car_type)
    }
}
