//! Company bootstrap: turn configured fleet files into a populated registry.

use std::sync::Arc;

use anyhow::Context;

use rentacar_rental::{CompanyRegistry, FleetConfig};

use crate::config::ApiConfig;

const DEMO_FLEETS: [(&str, &str); 2] = [
    ("hertz.json", include_str!("../fleets/hertz.json")),
    ("dockx.json", include_str!("../fleets/dockx.json")),
];

/// Load every configured fleet, or the demo fleets when none are configured.
pub fn load_registry(config: &ApiConfig) -> anyhow::Result<Arc<CompanyRegistry>> {
    let registry = CompanyRegistry::new();

    if config.fleet_files.is_empty() {
        tracing::warn!("RENTAL_FLEET_FILES not set; loading built-in demo fleets");
        for (name, json) in DEMO_FLEETS {
            let fleet = FleetConfig::from_json_str(json)
                .with_context(|| format!("built-in fleet {name}"))?;
            registry.register(Arc::new(fleet.build()?));
        }
    } else {
        for path in &config.fleet_files {
            let fleet = FleetConfig::from_path(path)?;
            registry.register(Arc::new(fleet.build()?));
        }
    }

    Ok(Arc::new(registry))
}

/// Registry holding only the built-in demo fleets.
pub fn demo_registry() -> anyhow::Result<Arc<CompanyRegistry>> {
    load_registry(&ApiConfig::from_vars(None, None)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentacar_rental::CarRentalCompany;

    #[test]
    fn demo_fleets_load() {
        let registry = demo_registry().unwrap();
        assert_eq!(registry.names(), vec!["Dockx", "Hertz"]);

        let hertz = registry.lookup("Hertz").unwrap();
        assert!(hertz.has_region("Antwerp"));
        assert!(hertz.car_type("Minivan").is_err());
    }

    #[test]
    fn missing_fleet_file_fails_bootstrap() {
        let cfg = ApiConfig::from_vars(None, Some("/no/such/fleet.json".to_string())).unwrap();
        assert!(load_registry(&cfg).is_err());
    }
}
