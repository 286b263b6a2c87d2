use domain::CostRates;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

pub const ENV_CATALOG_PATH: &str = "SES_CATALOG_PATH";
pub const ENV_COMPUTE_RATE: &str = "SES_COMPUTE_RATE";
pub const ENV_STORAGE_RATE: &str = "SES_STORAGE_RATE";
pub const ENV_CAPABILITY_RATE: &str = "SES_CAPABILITY_RATE";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{name} is not a number: {value:?}")]
    InvalidVar { name: &'static str, value: String },

    #[error("Rate {name} must be finite and non-negative, got {value}")]
    InvalidRate { name: &'static str, value: f64 },
}

/// Settings for one platform instance.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub rates: CostRates,
    /// Catalog definition file; the bundled catalog when unset.
    pub catalog_path: Option<PathBuf>,
}

impl EngineConfig {
    /// Defaults overridden by the process environment (and `.env`, if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the `SES_*` names.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_CATALOG_PATH).filter(|p| !p.trim().is_empty()) {
            config.catalog_path = Some(PathBuf::from(path));
        }
        if let Some(rate) = parse_rate(&lookup, ENV_COMPUTE_RATE)? {
            config.rates.compute_rate = rate;
        }
        if let Some(rate) = parse_rate(&lookup, ENV_STORAGE_RATE)? {
            config.rates.storage_rate = rate;
        }
        if let Some(rate) = parse_rate(&lookup, ENV_CAPABILITY_RATE)? {
            config.rates.per_capability_rate = rate;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let rates = [
            ("compute_rate", self.rates.compute_rate),
            ("storage_rate", self.rates.storage_rate),
            ("per_capability_rate", self.rates.per_capability_rate),
            ("monthly_factor", self.rates.monthly_factor),
        ];
        for (name, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidRate { name, value });
            }
        }
        Ok(())
    }
}

fn parse_rate<F>(lookup: &F, name: &'static str) -> Result<Option<f64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidVar { name, value: raw }),
    }
}
