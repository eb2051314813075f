//! Name-based lookup of rental companies.
//!
//! Callers locate a company by name and talk to it through the
//! [`CarRentalCompany`] trait, without knowing which implementation answers.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::service::CarRentalCompany;

/// Shared, thread-safe registry of companies keyed by name.
#[derive(Default)]
pub struct CompanyRegistry {
    inner: RwLock<BTreeMap<String, Arc<dyn CarRentalCompany>>>,
}

impl CompanyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `company` under its own name, replacing any previous binding.
    pub fn register(&self, company: Arc<dyn CarRentalCompany>) {
        let name = company.name().to_string();
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if map.insert(name.clone(), company).is_some() {
            tracing::warn!(company = %name, "rebinding company registration");
        } else {
            tracing::info!(company = %name, "company registered");
        }
    }

    pub fn unregister(&self, name: &str) -> Option<Arc<dyn CarRentalCompany>> {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name)
    }

    pub fn lookup(&self, name: &str) -> Option<Arc<dyn CarRentalCompany>> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Registered company names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }
}

impl core::fmt::Debug for CompanyRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CompanyRegistry")
            .field("companies", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::company::RentalCompany;

    fn empty_company(name: &str) -> Arc<dyn CarRentalCompany> {
        Arc::new(RentalCompany::new(name, vec!["Antwerp".to_string()], Vec::new()))
    }

    #[test]
    fn lookup_by_name() {
        let registry = CompanyRegistry::new();
        registry.register(empty_company("Hertz"));
        registry.register(empty_company("Dockx"));

        assert_eq!(registry.names(), vec!["Dockx", "Hertz"]);
        assert_eq!(registry.lookup("Hertz").unwrap().name(), "Hertz");
        assert!(registry.lookup("Avis").is_none());
    }

    #[test]
    fn unregister_removes_binding() {
        let registry = CompanyRegistry::new();
        registry.register(empty_company("Hertz"));

        assert!(registry.unregister("Hertz").is_some());
        assert!(registry.lookup("Hertz").is_none());
        assert!(registry.unregister("Hertz").is_none());
    }
}
