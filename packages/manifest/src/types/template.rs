use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A named, reusable capability selection.
///
/// Templates may list a capability without its prerequisites; applying
/// one pulls in the missing prerequisites.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct TemplateSpec {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub capabilities: Vec<String>,

    /// How many environments were created from this template.
    #[serde(default)]
    pub popularity: u32,
}
