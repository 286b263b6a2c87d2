use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A foundational service implied by one or more capabilities.
/// Enablers are never picked directly; their ID is the map key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct EnablerSpec {
    pub name: String,

    #[serde(default)]
    pub description: String,
}
