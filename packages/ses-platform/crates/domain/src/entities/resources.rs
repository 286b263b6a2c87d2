use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    #[error("Invalid value for {field}: {value} (must be a positive whole number)")]
    InvalidResourceValue { field: &'static str, value: i64 },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkMode {
    #[default]
    Private,
    Public,
    Hybrid,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Display for NetworkMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NetworkMode::Private => "private",
            NetworkMode::Public => "public",
            NetworkMode::Hybrid => "hybrid",
        };
        f.write_str(name)
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        };
        f.write_str(name)
    }
}

/// One edit coming from the resources form.
///
/// Numeric values arrive as raw signed integers so that a cleared or
/// negative input can be reported instead of silently wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceField {
    Cpu(i64),
    MemoryGb(i64),
    Instances(i64),
    StorageGb(i64),
    DurationHours(i64),
    Network(NetworkMode),
    Priority(Priority),
    StartTime(Option<DateTime<Utc>>),
}

/// Compute, storage and scheduling requirements of an environment.
///
/// Every numeric field is strictly positive; the only way to change one is
/// [`ResourceSpec::apply`], which checks that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceSpec {
    cpu: u32,
    memory_gb: u32,
    instances: u32,
    storage_gb: u32,
    network: NetworkMode,
    priority: Priority,
    start_time: Option<DateTime<Utc>>,
    duration_hours: u32,
}

impl Default for ResourceSpec {
    fn default() -> Self {
        Self {
            cpu: 4,
            memory_gb: 16,
            instances: 2,
            storage_gb: 500,
            network: NetworkMode::Private,
            priority: Priority::Medium,
            start_time: None,
            duration_hours: 24,
        }
    }
}

impl ResourceSpec {
    /// Returns a copy with `field` changed. `self` is never modified, so a
    /// rejected edit leaves the previous spec in place.
    pub fn apply(&self, field: ResourceField) -> Result<Self, ResourceError> {
        let mut next = self.clone();
        match field {
            ResourceField::Cpu(v) => next.cpu = positive("cpu", v)?,
            ResourceField::MemoryGb(v) => next.memory_gb = positive("memory_gb", v)?,
            ResourceField::Instances(v) => next.instances = positive("instances", v)?,
            ResourceField::StorageGb(v) => next.storage_gb = positive("storage_gb", v)?,
            ResourceField::DurationHours(v) => {
                next.duration_hours = positive("duration_hours", v)?
            }
            ResourceField::Network(mode) => next.network = mode,
            ResourceField::Priority(priority) => next.priority = priority,
            ResourceField::StartTime(start) => next.start_time = start,
        }
        Ok(next)
    }

    pub fn cpu(&self) -> u32 {
        self.cpu
    }

    pub fn memory_gb(&self) -> u32 {
        self.memory_gb
    }

    pub fn instances(&self) -> u32 {
        self.instances
    }

    pub fn storage_gb(&self) -> u32 {
        self.storage_gb
    }

    pub fn network(&self) -> NetworkMode {
        self.network
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    pub fn duration_hours(&self) -> u32 {
        self.duration_hours
    }
}

fn positive(field: &'static str, value: i64) -> Result<u32, ResourceError> {
    match u32::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(ResourceError::InvalidResourceValue { field, value }),
    }
}
