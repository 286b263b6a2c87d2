pub mod graph;
pub mod resolver;

pub use graph::PrerequisiteGraph;
pub use resolver::{CapabilityStatus, CapabilityView, Resolver, Toggle, ToggleChange};
