use crate::CatalogManifest;
use anyhow::{Context, Result};
use std::path::Path;

/// Multi-format catalog parser (JSON, YAML, TOML)
pub struct ManifestParser;

/// Supported definition file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Json,
    Yaml,
    Toml,
}

impl ManifestParser {
    /// Auto-detect format from file extension and parse
    pub fn parse_file(path: &Path) -> Result<CatalogManifest> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

        let format = Self::detect_format(path)?;
        Self::parse(&content, format)
            .with_context(|| format!("Invalid catalog file: {}", path.display()))
    }

    /// Parse a catalog from string with explicit format
    pub fn parse(content: &str, format: ManifestFormat) -> Result<CatalogManifest> {
        match format {
            ManifestFormat::Json => {
                serde_json::from_str(content).context("Failed to parse JSON catalog")
            }
            ManifestFormat::Yaml => {
                serde_yaml::from_str(content).context("Failed to parse YAML catalog")
            }
            ManifestFormat::Toml => toml::from_str(content).context("Failed to parse TOML catalog"),
        }
    }

    /// Detect format from file extension
    pub fn detect_format(path: &Path) -> Result<ManifestFormat> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| anyhow::anyhow!("File has no extension: {}", path.display()))?;

        match extension.to_lowercase().as_str() {
            "json" => Ok(ManifestFormat::Json),
            "yaml" | "yml" => Ok(ManifestFormat::Yaml),
            "toml" => Ok(ManifestFormat::Toml),
            _ => anyhow::bail!("Unsupported catalog format: .{}", extension),
        }
    }

    pub fn serialize(manifest: &CatalogManifest, format: ManifestFormat) -> Result<String> {
        match format {
            ManifestFormat::Json => {
                serde_json::to_string_pretty(manifest).context("Failed to serialize to JSON")
            }
            ManifestFormat::Yaml => {
                serde_yaml::to_string(manifest).context("Failed to serialize to YAML")
            }
            ManifestFormat::Toml => {
                toml::to_string_pretty(manifest).context("Failed to serialize to TOML")
            }
        }
    }
}
