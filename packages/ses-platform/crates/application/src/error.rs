use crate::config::ConfigError;
use crate::wizard::WizardState;
use domain::{CatalogError, ResolveError, ResourceError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    /// The current step's preconditions do not allow the requested move.
    #[error("Cannot {action} from {state}: {reason}")]
    InvalidTransition {
        action: &'static str,
        state: WizardState,
        reason: String,
    },

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Resource(#[from] ResourceError),
}

/// Startup failures. Any of these aborts initialisation.
#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}
