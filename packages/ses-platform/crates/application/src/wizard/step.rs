use domain::EnvironmentId;
use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum WizardStep {
    ProjectDetails,
    CapabilitySelection,
    EnablerReview,
    ResourceSpec,
    ReviewAndSubmit,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::ProjectDetails,
        WizardStep::CapabilitySelection,
        WizardStep::EnablerReview,
        WizardStep::ResourceSpec,
        WizardStep::ReviewAndSubmit,
    ];

    pub fn next(self) -> Option<Self> {
        match self {
            WizardStep::ProjectDetails => Some(WizardStep::CapabilitySelection),
            WizardStep::CapabilitySelection => Some(WizardStep::EnablerReview),
            WizardStep::EnablerReview => Some(WizardStep::ResourceSpec),
            WizardStep::ResourceSpec => Some(WizardStep::ReviewAndSubmit),
            WizardStep::ReviewAndSubmit => None,
        }
    }

    pub fn previous(self) -> Option<Self> {
        match self {
            WizardStep::ProjectDetails => None,
            WizardStep::CapabilitySelection => Some(WizardStep::ProjectDetails),
            WizardStep::EnablerReview => Some(WizardStep::CapabilitySelection),
            WizardStep::ResourceSpec => Some(WizardStep::EnablerReview),
            WizardStep::ReviewAndSubmit => Some(WizardStep::ResourceSpec),
        }
    }

    /// 1-based position, for "Step 2 of 5".
    pub fn number(self) -> usize {
        self as usize + 1
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::ProjectDetails => "Project",
            WizardStep::CapabilitySelection => "Capabilities",
            WizardStep::EnablerReview => "Enablers",
            WizardStep::ResourceSpec => "Resources",
            WizardStep::ReviewAndSubmit => "Review",
        }
    }
}

impl Display for WizardStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Where a wizard session stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardState {
    Active(WizardStep),
    /// Terminal: the draft became this environment.
    Submitted(EnvironmentId),
    /// Terminal: cancelled from the first step, nothing was created.
    Abandoned,
}

impl WizardState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, WizardState::Active(_))
    }
}

impl Display for WizardState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            WizardState::Active(step) => write!(f, "step {} ({})", step.number(), step),
            WizardState::Submitted(id) => write!(f, "submitted wizard ({})", id),
            WizardState::Abandoned => f.write_str("abandoned wizard"),
        }
    }
}
