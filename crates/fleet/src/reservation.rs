use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rentacar_core::{CarId, ClientId, RentalError, RentalResult, ReservationId, ValueObject};

/// Half-open interval intersection: `[s1, e1)` and `[s2, e2)` overlap iff
/// `s1 < e2 && s2 < e1`. Back-to-back intervals do not overlap.
pub fn intervals_overlap(
    start1: DateTime<Utc>,
    end1: DateTime<Utc>,
    start2: DateTime<Utc>,
    end2: DateTime<Utc>,
) -> bool {
    start1 < end2 && start2 < end1
}

/// Client-supplied request: an interval, a car type and a region.
///
/// Construction enforces `start < end`; deserialization goes through the same
/// check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawConstraints")]
pub struct ReservationConstraints {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    car_type: String,
    region: String,
}

#[derive(Deserialize)]
struct RawConstraints {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    car_type: String,
    region: String,
}

impl TryFrom<RawConstraints> for ReservationConstraints {
    type Error = RentalError;

    fn try_from(raw: RawConstraints) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end, raw.car_type, raw.region)
    }
}

impl ReservationConstraints {
    pub fn new(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        car_type: impl Into<String>,
        region: impl Into<String>,
    ) -> RentalResult<Self> {
        if start >= end {
            return Err(RentalError::invalid_interval(format!(
                "start {start} must precede end {end}"
            )));
        }
        Ok(Self {
            start,
            end,
            car_type: car_type.into(),
            region: region.into(),
        })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn car_type(&self) -> &str {
        &self.car_type
    }

    pub fn region(&self) -> &str {
        &self.region
    }
}

impl ValueObject for ReservationConstraints {}

impl core::fmt::Display for ReservationConstraints {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Reservation constraints [from {} until {}, in {}, car type: {}]",
            self.start, self.end, self.region, self.car_type
        )
    }
}

/// Non-binding priced offer. Holds no car: nothing is reserved until the
/// quote is confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub car_renter: ClientId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub rental_company: String,
    pub car_type: String,
    /// Price in smallest currency unit (e.g., cents).
    pub rental_price: u64,
}

impl ValueObject for Quote {}

impl core::fmt::Display for Quote {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Quote for {} from {} to {} at {}\nCar type: {}\tTotal price: {}",
            self.car_renter, self.start, self.end, self.rental_company, self.car_type, self.rental_price
        )
    }
}

/// A confirmed quote bound to one specific car.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    #[serde(flatten)]
    pub quote: Quote,
    pub car_id: CarId,
}

impl Reservation {
    pub fn new(quote: Quote, car_id: CarId) -> Self {
        Self {
            id: ReservationId::new(),
            quote,
            car_id,
        }
    }

    pub fn car_renter(&self) -> &ClientId {
        &self.quote.car_renter
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.quote.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.quote.end
    }

    pub fn car_type(&self) -> &str {
        &self.quote.car_type
    }

    pub fn rental_company(&self) -> &str {
        &self.quote.rental_company
    }

    pub fn rental_price(&self) -> u64 {
        self.quote.rental_price
    }

    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        intervals_overlap(self.start(), self.end(), start, end)
    }
}

impl ValueObject for Reservation {}

impl core::fmt::Display for Reservation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Reservation {} on car {}: {}", self.id, self.car_id, self.quote)
    }
}
