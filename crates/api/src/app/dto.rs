use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use rentacar_core::{ClientId, RentalResult};
use rentacar_fleet::{CarType, ReservationConstraints};
use rentacar_rental::CarRentalCompany;

// -------------------------
// Request DTOs
// -------------------------

/// `?start=..&end=..` (RFC3339).
#[derive(Debug, Deserialize)]
pub struct IntervalQuery {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateQuoteRequest {
    pub client: ClientId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub car_type: String,
    pub region: String,
}

impl CreateQuoteRequest {
    pub fn into_parts(self) -> RentalResult<(ReservationConstraints, ClientId)> {
        let constraints = ReservationConstraints::new(self.start, self.end, self.car_type, self.region)?;
        Ok((constraints, self.client))
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn company_to_json(company: &dyn CarRentalCompany) -> serde_json::Value {
    serde_json::json!({
        "name": company.name(),
        "regions": company.regions(),
        "car_types": company.all_car_types(),
    })
}

/// Set semantics on the engine side; sorted by name on the wire so responses are stable.
pub fn car_types_to_json(types: HashSet<CarType>) -> serde_json::Value {
    let mut types: Vec<CarType> = types.into_iter().collect();
    types.sort_by(|a, b| a.name().cmp(b.name()));
    serde_json::json!(types)
}
