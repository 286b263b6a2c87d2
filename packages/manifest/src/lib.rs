pub mod parser;
pub mod types;

pub use parser::*;
pub use types::*;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The catalog definition file shipped with the platform.
pub const BUNDLED_CATALOG: &str = include_str!("../catalog.toml");

/// Raw, unvalidated catalog definitions (TOML, JSON or YAML).
///
/// Nothing here guarantees referential integrity; the domain `Catalog`
/// is the validated form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CatalogManifest {
    /// Capabilities in definition order. The order is preserved for listing.
    #[serde(default)]
    pub capabilities: Vec<CapabilitySpec>,

    /// Enablers keyed by their ID (e.g. `E01`).
    #[serde(default)]
    pub enablers: BTreeMap<String, EnablerSpec>,

    /// Pre-configured capability selections.
    #[serde(default)]
    pub templates: Vec<TemplateSpec>,
}

impl CatalogManifest {
    /// Parse the catalog compiled into the crate.
    pub fn bundled() -> anyhow::Result<Self> {
        ManifestParser::parse(BUNDLED_CATALOG, ManifestFormat::Toml)
    }

    /// JSON Schema describing the definition file, for catalog authors.
    pub fn json_schema() -> anyhow::Result<String> {
        let schema = schemars::schema_for!(CatalogManifest);
        Ok(serde_json::to_string_pretty(&schema)?)
    }
}
