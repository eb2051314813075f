use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};

use rentacar_core::{CarId, Entity, RentalError, RentalResult};

use crate::car_type::CarType;
use crate::reservation::Reservation;

/// A single rentable unit and the reservations currently held against it.
///
/// The reservation set sits behind a per-car lock. Availability checks take
/// the read side; [`Car::add_reservation`] verifies and inserts under one
/// write guard, so two callers can never both book an overlapping interval on
/// the same car.
#[derive(Debug)]
pub struct Car {
    id: CarId,
    car_type: Arc<CarType>,
    reservations: RwLock<Vec<Reservation>>,
}

impl Car {
    pub fn new(id: CarId, car_type: Arc<CarType>) -> Self {
        Self {
            id,
            car_type,
            reservations: RwLock::new(Vec::new()),
        }
    }

    pub fn car_type(&self) -> &Arc<CarType> {
        &self.car_type
    }

    /// True iff no held reservation intersects `[start, end)`.
    pub fn is_available(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        !self.read().iter().any(|r| r.overlaps(start, end))
    }

    /// Register `reservation` on this car.
    ///
    /// Fails with `ReservationRejected` (and leaves the car untouched) if the
    /// reservation is bound to another car or overlaps one already held.
    pub fn add_reservation(&self, reservation: Reservation) -> RentalResult<()> {
        if reservation.car_id != self.id {
            return Err(RentalError::rejected(format!(
                "reservation is bound to car {}, not car {}",
                reservation.car_id, self.id
            )));
        }

        let mut held = self.write();
        if held.iter().any(|r| r.overlaps(reservation.start(), reservation.end())) {
            return Err(RentalError::rejected(format!(
                "car {} is no longer available from {} to {}",
                self.id,
                reservation.start(),
                reservation.end()
            )));
        }
        held.push(reservation);
        Ok(())
    }

    /// Remove `reservation` (matched by equality). Returns whether it was held.
    pub fn remove_reservation(&self, reservation: &Reservation) -> bool {
        let mut held = self.write();
        let before = held.len();
        held.retain(|r| r != reservation);
        held.len() != before
    }

    /// Snapshot of the held reservations, in insertion order.
    pub fn reservations(&self) -> Vec<Reservation> {
        self.read().clone()
    }

    pub fn reservation_count(&self) -> usize {
        self.read().len()
    }

    // Every mutation is a single push/retain, so a poisoned set is still
    // consistent and safe to keep using.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Reservation>> {
        self.reservations.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Reservation>> {
        self.reservations.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Entity for Car {
    type Id = CarId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
