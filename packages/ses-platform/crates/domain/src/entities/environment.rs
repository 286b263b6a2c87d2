use super::ids::{CapabilityId, EnablerId};
use super::resources::ResourceSpec;
use crate::cost::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvironmentId(String);

impl EnvironmentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for EnvironmentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentStatus {
    Provisioning,
    Running,
    Stopped,
    Error,
}

impl EnvironmentStatus {
    /// Provisioning or running environments count as active on the dashboard.
    pub fn is_active(self) -> bool {
        matches!(self, EnvironmentStatus::Provisioning | EnvironmentStatus::Running)
    }
}

impl Display for EnvironmentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EnvironmentStatus::Provisioning => "provisioning",
            EnvironmentStatus::Running => "running",
            EnvironmentStatus::Stopped => "stopped",
            EnvironmentStatus::Error => "error",
        };
        f.write_str(name)
    }
}

/// A created simulation environment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Environment {
    pub id: EnvironmentId,
    pub name: String,
    pub description: String,
    pub owner: String,
    pub tags: Vec<String>,
    pub status: EnvironmentStatus,
    pub capabilities: Vec<CapabilityId>,
    pub enablers: Vec<EnablerId>,
    pub resources: ResourceSpec,
    /// Estimated cost per day.
    pub estimated_cost: Money,
    #[serde(with = "humantime_serde")]
    pub uptime: Duration,
    /// 0-100
    pub health: u8,
    pub created_at: DateTime<Utc>,
}
