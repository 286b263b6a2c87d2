use crate::entities::{CapabilityId, EnablerId};
use thiserror::Error;

/// The catalog violates one of its load-time invariants. Fatal at startup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate capability definition: {0}")]
    DuplicateCapability(CapabilityId),

    #[error("Duplicate enabler definition: {0}")]
    DuplicateEnabler(EnablerId),

    #[error("Capability {capability} requires unknown enabler {enabler}")]
    DanglingEnabler {
        capability: CapabilityId,
        enabler: EnablerId,
    },

    #[error("Capability {capability} requires unknown capability {prerequisite}")]
    DanglingPrerequisite {
        capability: CapabilityId,
        prerequisite: CapabilityId,
    },

    #[error("Capability {0} lists itself as a prerequisite")]
    SelfPrerequisite(CapabilityId),

    #[error("Circular prerequisites involving {capability}: {}", format_ids(.cycle))]
    CyclicPrerequisites {
        capability: CapabilityId,
        cycle: Vec<CapabilityId>,
    },

    #[error("Template {template} references unknown capability {capability}")]
    DanglingTemplateCapability {
        template: String,
        capability: CapabilityId,
    },

    #[error("Catalog definition could not be read: {0}")]
    Manifest(String),
}

/// A lookup or selection change the caller can recover from.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Unknown capability: {0}")]
    UnknownCapability(CapabilityId),

    #[error("Unknown enabler: {0}")]
    UnknownEnabler(EnablerId),

    #[error("Capability {capability} is blocked; select {} first", format_ids(.unmet))]
    RejectedToggle {
        capability: CapabilityId,
        unmet: Vec<CapabilityId>,
    },
}

fn format_ids(ids: &[CapabilityId]) -> String {
    ids.iter()
        .map(CapabilityId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
