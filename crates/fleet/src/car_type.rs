use serde::{Deserialize, Serialize};

use rentacar_core::ValueObject;

/// Descriptor shared by every car of one kind.
///
/// Identity is the name: two `CarType`s with the same name are the same type,
/// whatever their other attributes say.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarType {
    name: String,
    num_seats: u32,
    trunk_space: f32,
    /// Price in smallest currency unit (e.g., cents).
    rental_price_per_day: u64,
    smoking_allowed: bool,
}

impl CarType {
    pub fn new(
        name: impl Into<String>,
        num_seats: u32,
        trunk_space: f32,
        rental_price_per_day: u64,
        smoking_allowed: bool,
    ) -> Self {
        Self {
            name: name.into(),
            num_seats,
            trunk_space,
            rental_price_per_day,
            smoking_allowed,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn num_seats(&self) -> u32 {
        self.num_seats
    }

    pub fn trunk_space(&self) -> f32 {
        self.trunk_space
    }

    pub fn rental_price_per_day(&self) -> u64 {
        self.rental_price_per_day
    }

    pub fn is_smoking_allowed(&self) -> bool {
        self.smoking_allowed
    }
}

impl PartialEq for CarType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for CarType {}

impl core::hash::Hash for CarType {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl ValueObject for CarType {}

impl core::fmt::Display for CarType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Car type: {} \t[seats: {}, price: {}, smoking: {}, trunk: {}]",
            self.name, self.num_seats, self.rental_price_per_day, self.smoking_allowed, self.trunk_space
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn equality_and_hash_follow_the_name() {
        let a = CarType::new("Economy", 4, 250.0, 3000, false);
        let b = CarType::new("Economy", 5, 300.0, 9999, true);
        let c = CarType::new("Premium", 4, 250.0, 3000, false);

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<CarType> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn serializes_with_snake_case_fields() {
        let t = CarType::new("Compact", 4, 200.0, 4500, false);
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["name"], "Compact");
        assert_eq!(json["rental_price_per_day"], 4500);
        assert_eq!(json["smoking_allowed"], false);
    }
}
