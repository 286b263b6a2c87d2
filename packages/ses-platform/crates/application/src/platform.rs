use crate::config::EngineConfig;
use crate::dashboard::DashboardSummary;
use crate::error::PlatformError;
use crate::registry::EnvironmentRegistry;
use crate::wizard::Wizard;
use domain::{Catalog, CostRates};
use std::sync::Arc;
use tracing::info;

/// Process-wide state: the validated catalog, the rates and the registry.
///
/// Built once at startup. Cloning shares the same catalog and registry.
#[derive(Debug, Clone)]
pub struct Platform {
    catalog: Arc<Catalog>,
    rates: CostRates,
    registry: Arc<EnvironmentRegistry>,
}

impl Platform {
    /// Load the configured catalog (or the bundled one). A malformed
    /// catalog aborts startup.
    pub fn bootstrap(config: &EngineConfig) -> Result<Self, PlatformError> {
        config.validate()?;

        let catalog = match &config.catalog_path {
            Some(path) => {
                info!(path = %path.display(), "Loading catalog from file");
                Catalog::from_file(path)?
            }
            None => Catalog::bundled()?,
        };

        Ok(Self::with_catalog(catalog, config.rates))
    }

    pub fn with_catalog(catalog: Catalog, rates: CostRates) -> Self {
        Self {
            catalog: Arc::new(catalog),
            rates,
            registry: Arc::new(EnvironmentRegistry::new()),
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn rates(&self) -> &CostRates {
        &self.rates
    }

    pub fn registry(&self) -> &Arc<EnvironmentRegistry> {
        &self.registry
    }

    /// A fresh session with an empty draft.
    pub fn open_wizard(&self) -> Wizard {
        Wizard::new(Arc::clone(&self.catalog), self.rates)
    }

    pub fn dashboard(&self) -> DashboardSummary {
        DashboardSummary::from_environments(&self.registry.list())
    }
}
