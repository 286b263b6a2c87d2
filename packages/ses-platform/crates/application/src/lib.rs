pub mod config;
pub mod dashboard;
pub mod error;
pub mod platform;
pub mod registry;
pub mod telemetry;
pub mod templates;
pub mod wizard;

pub use config::{ConfigError, EngineConfig};
pub use dashboard::DashboardSummary;
pub use error::{PlatformError, WizardError};
pub use platform::Platform;
pub use registry::{EnvironmentRegistry, Submission};
pub use templates::{TemplateLibrary, TemplatePlan};
pub use wizard::{DerivedState, DraftConfiguration, Wizard, WizardState, WizardStep};
