use std::sync::Arc;

use rentacar_rental::{CarRentalCompany, CompanyRegistry};

use crate::app::errors;

/// Resolve a company by name, or the 404 response to send back.
pub fn lookup_company(
    registry: &CompanyRegistry,
    name: &str,
) -> Result<Arc<dyn CarRentalCompany>, axum::response::Response> {
    registry.lookup(name).ok_or_else(|| errors::unknown_company(name))
}
