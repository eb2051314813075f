//! The rental company engine.
//!
//! ## Concurrency
//!
//! There is no company-wide lock. Each car guards its own reservation set, and
//! [`Car::add_reservation`] re-verifies availability under that car's write
//! lock before inserting. `confirm_quote` therefore works from an optimistic
//! scan: it draws a candidate at random, tries to book it, and if another call
//! won the race for that car it draws again from the remaining candidates.
//!
//! Read-only queries (availability, listings) take per-car read locks one car
//! at a time; they see each car's latest committed state but are not a single
//! snapshot across the fleet.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::Rng;

use rentacar_core::{CarId, ClientId, Entity, RentalError, RentalResult};
use rentacar_fleet::{Car, CarType, Quote, Reservation, ReservationConstraints};

use crate::pricing;
use crate::service::CarRentalCompany;

/// A company's fleet, regions and reservation engine.
#[derive(Debug)]
pub struct RentalCompany {
    name: String,
    regions: Vec<String>,
    cars: Vec<Car>,
    car_types: BTreeMap<String, Arc<CarType>>,
}

impl RentalCompany {
    /// Build a company around an already-populated fleet.
    ///
    /// The type map is derived once from the cars; the set of known type names
    /// is fixed for the company's lifetime.
    pub fn new(name: impl Into<String>, regions: Vec<String>, cars: Vec<Car>) -> Self {
        let name = name.into();
        tracing::info!(company = %name, "car rental company starting up");

        let car_types = cars
            .iter()
            .map(|car| (car.car_type().name().to_string(), Arc::clone(car.car_type())))
            .collect();

        let company = Self {
            name,
            regions,
            cars,
            car_types,
        };
        tracing::info!(company = %company.name, cars = company.cars.len(), "{company}");
        company
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    fn car(&self, id: CarId) -> RentalResult<&Car> {
        self.cars
            .iter()
            .find(|car| *car.id() == id)
            .ok_or(RentalError::UnknownCar(id))
    }

    fn available_cars(&self, car_type: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<&Car> {
        self.cars
            .iter()
            .filter(|car| car.car_type().name() == car_type && car.is_available(start, end))
            .collect()
    }
}

impl CarRentalCompany for RentalCompany {
    fn name(&self) -> &str {
        &self.name
    }

    fn regions(&self) -> &[String] {
        &self.regions
    }

    fn has_region(&self, region: &str) -> bool {
        self.regions.iter().any(|r| r == region)
    }

    fn all_car_types(&self) -> Vec<CarType> {
        self.car_types.values().map(|t| CarType::clone(t)).collect()
    }

    fn car_type(&self, name: &str) -> RentalResult<CarType> {
        self.car_types
            .get(name)
            .map(|t| CarType::clone(t))
            .ok_or_else(|| RentalError::unknown_car_type(name))
    }

    fn available_car_types(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> HashSet<CarType> {
        self.cars
            .iter()
            .filter(|car| car.is_available(start, end))
            .map(|car| CarType::clone(car.car_type()))
            .collect()
    }

    fn is_available(&self, car_type: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> RentalResult<bool> {
        tracing::debug!(company = %self.name, car_type, "checking availability");
        let wanted = self
            .car_types
            .get(car_type)
            .ok_or_else(|| RentalError::unknown_car_type(car_type))?;
        Ok(self.available_car_types(start, end).contains(&**wanted))
    }

    fn create_quote(&self, constraints: &ReservationConstraints, client: &ClientId) -> RentalResult<Quote> {
        tracing::info!(company = %self.name, %client, %constraints, "creating quote");

        if !self.has_region(constraints.region())
            || !self.is_available(constraints.car_type(), constraints.start(), constraints.end())?
        {
            tracing::info!(company = %self.name, %client, "quote rejected");
            return Err(RentalError::rejected(format!(
                "<{}> no cars available to satisfy the given constraints",
                self.name
            )));
        }

        let car_type = self.car_type(constraints.car_type())?;
        let price = pricing::rental_price(
            car_type.rental_price_per_day(),
            constraints.start(),
            constraints.end(),
        );

        Ok(Quote {
            car_renter: client.clone(),
            start: constraints.start(),
            end: constraints.end(),
            rental_company: self.name.clone(),
            car_type: constraints.car_type().to_string(),
            rental_price: price,
        })
    }

    fn confirm_quote(&self, quote: &Quote) -> RentalResult<Reservation> {
        tracing::info!(company = %self.name, client = %quote.car_renter, car_type = %quote.car_type, "confirming quote");

        if quote.start >= quote.end {
            return Err(RentalError::invalid_interval(format!(
                "quote starts at {} but ends at {}",
                quote.start, quote.end
            )));
        }

        let mut candidates = self.available_cars(&quote.car_type, quote.start, quote.end);
        let mut rng = rand::rng();

        while !candidates.is_empty() {
            let car = candidates.swap_remove(rng.random_range(0..candidates.len()));
            let car_id = *car.id();
            let reservation = Reservation::new(quote.clone(), car_id);

            match car.add_reservation(reservation.clone()) {
                Ok(()) => {
                    tracing::info!(
                        company = %self.name,
                        reservation = %reservation.id,
                        car = %car_id,
                        "reservation confirmed"
                    );
                    return Ok(reservation);
                }
                Err(e) => {
                    tracing::debug!(company = %self.name, car = %car_id, "candidate lost: {e}");
                }
            }
        }

        tracing::warn!(company = %self.name, client = %quote.car_renter, car_type = %quote.car_type, "confirmation rejected");
        Err(RentalError::rejected(format!(
            "all cars of type {} are unavailable from {} to {}",
            quote.car_type, quote.start, quote.end
        )))
    }

    fn cancel_reservation(&self, reservation: &Reservation) -> RentalResult<()> {
        tracing::info!(company = %self.name, reservation = %reservation.id, car = %reservation.car_id, "cancelling reservation");

        let car = self.car(reservation.car_id)?;
        if !car.remove_reservation(reservation) {
            tracing::warn!(company = %self.name, reservation = %reservation.id, "reservation was not held");
        }
        Ok(())
    }

    fn reservations_by_renter(&self, client: &ClientId) -> Vec<Reservation> {
        self.cars
            .iter()
            .flat_map(|car| car.reservations())
            .filter(|r| r.car_renter() == client)
            .collect()
    }

    fn number_of_reservations_for_car_type(&self, car_type: &str) -> usize {
        self.cars
            .iter()
            .filter(|car| car.car_type().name() == car_type)
            .map(Car::reservation_count)
            .sum()
    }
}

impl core::fmt::Display for RentalCompany {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "<{}> CRC is active in regions {} and serving with {} car types",
            self.name,
            self.regions.join(", "),
            self.car_types.len()
        )
    }
}
