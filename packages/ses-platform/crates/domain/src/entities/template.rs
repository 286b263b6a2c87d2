use super::ids::CapabilityId;
use serde::Serialize;

/// A reusable starting selection offered next to the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    pub capabilities: Vec<CapabilityId>,
    pub popularity: u32,
}
