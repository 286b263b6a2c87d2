use super::ids::{CapabilityId, EnablerId};
use serde::Serialize;

/// A capability as held by the validated catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapabilityDefinition {
    pub id: CapabilityId,
    pub name: String,
    pub description: String,
    /// Required enablers, in definition order.
    pub enablers: Vec<EnablerId>,
    pub prerequisites: Vec<CapabilityId>,
}

impl CapabilityDefinition {
    pub fn new(id: impl Into<CapabilityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            enablers: Vec::new(),
            prerequisites: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_enablers<I, E>(mut self, enablers: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<EnablerId>,
    {
        self.enablers = enablers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_prerequisites<I, C>(mut self, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<CapabilityId>,
    {
        self.prerequisites = prerequisites.into_iter().map(Into::into).collect();
        self
    }

    /// Case-insensitive match on id, name or description.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.id.as_str().to_lowercase().contains(&term)
            || self.name.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnablerDefinition {
    pub id: EnablerId,
    pub name: String,
    pub description: String,
}

impl EnablerDefinition {
    pub fn new(
        id: impl Into<EnablerId>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }
}
