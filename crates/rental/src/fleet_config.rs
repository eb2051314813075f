//! Fleet bootstrap: build a [`RentalCompany`] from a JSON fleet description.
//!
//! ```json
//! {
//!   "name": "Hertz",
//!   "regions": ["Antwerp", "Brussels"],
//!   "car_types": [
//!     { "name": "Economy", "num_seats": 4, "trunk_space": 250.0,
//!       "rental_price_per_day": 3000, "smoking_allowed": false, "count": 3 }
//!   ]
//! }
//! ```
//!
//! Cars are numbered from 1 in file order.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use rentacar_core::CarId;
use rentacar_fleet::{Car, CarType};

use crate::company::RentalCompany;

#[derive(Debug, Error)]
pub enum FleetConfigError {
    #[error("failed to read fleet file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed fleet description: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid fleet description: {0}")]
    Invalid(String),
}

impl FleetConfigError {
    fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }
}

/// One car type plus how many cars of it the fleet holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarTypeConfig {
    pub name: String,
    pub num_seats: u32,
    pub trunk_space: f32,
    /// Price in smallest currency unit (e.g., cents).
    pub rental_price_per_day: u64,
    #[serde(default)]
    pub smoking_allowed: bool,
    pub count: u32,
}

/// A company's fleet as supplied by configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetConfig {
    pub name: String,
    pub regions: Vec<String>,
    pub car_types: Vec<CarTypeConfig>,
}

impl FleetConfig {
    pub fn from_json_str(json: &str) -> Result<Self, FleetConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FleetConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| FleetConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), FleetConfigError> {
        if self.name.trim().is_empty() {
            return Err(FleetConfigError::invalid("company name cannot be empty"));
        }
        if self.regions.is_empty() {
            return Err(FleetConfigError::invalid(format!(
                "company {} serves no regions",
                self.name
            )));
        }

        let mut seen = HashSet::new();
        for t in &self.car_types {
            if t.name.trim().is_empty() {
                return Err(FleetConfigError::invalid("car type name cannot be empty"));
            }
            if !seen.insert(t.name.as_str()) {
                return Err(FleetConfigError::invalid(format!(
                    "duplicate car type {}",
                    t.name
                )));
            }
        }

        if self.car_types.iter().all(|t| t.count == 0) {
            return Err(FleetConfigError::invalid(format!(
                "company {} has no cars",
                self.name
            )));
        }
        Ok(())
    }

    /// Instantiate the fleet and hand it to a new company.
    pub fn build(self) -> Result<RentalCompany, FleetConfigError> {
        self.validate()?;

        let mut cars = Vec::new();
        let mut next_id: u32 = 1;
        for t in self.car_types {
            let car_type = Arc::new(CarType::new(
                t.name,
                t.num_seats,
                t.trunk_space,
                t.rental_price_per_day,
                t.smoking_allowed,
            ));
            for _ in 0..t.count {
                cars.push(Car::new(CarId::new(next_id), Arc::clone(&car_type)));
                next_id += 1;
            }
        }

        tracing::debug!(company = %self.name, cars = cars.len(), "fleet loaded");
        Ok(RentalCompany::new(self.name, self.regions, cars))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::CarRentalCompany;
    use rentacar_core::Entity;

    const HERTZ: &str = r#"{
        "name": "Hertz",
        "regions": ["Antwerp", "Brussels"],
        "car_types": [
            { "name": "Economy", "num_seats": 4, "trunk_space": 250.0,
              "rental_price_per_day": 3000, "count": 2 },
            { "name": "Premium", "num_seats": 5, "trunk_space": 400.0,
              "rental_price_per_day": 9000, "smoking_allowed": true, "count": 1 }
        ]
    }"#;

    #[test]
    fn builds_company_with_sequential_car_ids() {
        let company = FleetConfig::from_json_str(HERTZ).unwrap().build().unwrap();

        assert_eq!(company.name(), "Hertz");
        assert_eq!(company.regions(), ["Antwerp", "Brussels"]);
        let ids: Vec<u32> = company.cars().iter().map(|c| c.id().get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(company.cars()[2].car_type().name(), "Premium");
        assert!(company.car_type("Premium").unwrap().is_smoking_allowed());
        assert!(!company.car_type("Economy").unwrap().is_smoking_allowed());
    }

    #[test]
    fn cars_of_one_type_share_the_descriptor() {
        let company = FleetConfig::from_json_str(HERTZ).unwrap().build().unwrap();
        let cars = company.cars();
        assert!(Arc::ptr_eq(cars[0].car_type(), cars[1].car_type()));
    }

    #[test]
    fn duplicate_type_names_are_rejected() {
        let json = r#"{
            "name": "Hertz", "regions": ["Antwerp"],
            "car_types": [
                { "name": "Economy", "num_seats": 4, "trunk_space": 1.0, "rental_price_per_day": 1, "count": 1 },
                { "name": "Economy", "num_seats": 2, "trunk_space": 1.0, "rental_price_per_day": 2, "count": 1 }
            ]
        }"#;
        let err = FleetConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, FleetConfigError::Invalid(msg) if msg.contains("duplicate car type Economy")));
    }

    #[test]
    fn fleets_without_regions_or_cars_are_rejected() {
        let no_regions = r#"{ "name": "Hertz", "regions": [], "car_types": [] }"#;
        assert!(matches!(
            FleetConfig::from_json_str(no_regions),
            Err(FleetConfigError::Invalid(_))
        ));

        let no_cars = r#"{
            "name": "Hertz", "regions": ["Antwerp"],
            "car_types": [ { "name": "Economy", "num_seats": 4, "trunk_space": 1.0, "rental_price_per_day": 1, "count": 0 } ]
        }"#;
        assert!(matches!(
            FleetConfig::from_json_str(no_cars),
            Err(FleetConfigError::Invalid(_))
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            FleetConfig::from_json_str("{ not json"),
            Err(FleetConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = FleetConfig::from_path("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
