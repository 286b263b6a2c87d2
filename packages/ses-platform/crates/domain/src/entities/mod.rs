pub mod capability;
pub mod environment;
pub mod ids;
pub mod resources;
pub mod selection;
pub mod template;

pub use capability::{CapabilityDefinition, EnablerDefinition};
pub use environment::{Environment, EnvironmentId, EnvironmentStatus};
pub use ids::{CapabilityId, EnablerId};
pub use resources::{NetworkMode, Priority, ResourceError, ResourceField, ResourceSpec};
pub use selection::Selection;
pub use template::Template;
