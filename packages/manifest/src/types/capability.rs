use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A selectable unit of platform functionality.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CapabilitySpec {
    /// Unique identifier, e.g. `C01`.
    pub id: String,

    /// Human-readable name shown in the catalogue.
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Enablers this capability needs, in display order.
    #[serde(default)]
    pub enablers: Vec<String>,

    /// Capabilities that must already be selected before this one.
    #[serde(default, alias = "prerequisites")]
    pub dependencies: Vec<String>,
}
