use crate::error::WizardError;
use crate::registry::{EnvironmentRegistry, Submission};
use crate::templates::{TemplateLibrary, TemplatePlan};
use crate::wizard::{DerivedState, DraftConfiguration, WizardState, WizardStep};
use domain::dependency::ToggleChange;
use domain::{
    Catalog, CapabilityView, CostRates, EnablerDefinition, Environment, ResolveError,
    ResourceField, Resolver, Selection,
};
use ses_manifest::ValidationResult;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// One environment creation session.
///
/// Owns its draft exclusively. Every mutation runs to completion (including
/// the derived-state recomputation) before the next can start, so callers
/// never observe enablers or cost that lag behind the selection.
#[derive(Debug, Clone)]
pub struct Wizard {
    catalog: Arc<Catalog>,
    rates: CostRates,
    state: WizardState,
    draft: DraftConfiguration,
    derived: DerivedState,
}

impl Wizard {
    pub fn new(catalog: Arc<Catalog>, rates: CostRates) -> Self {
        let draft = DraftConfiguration::default();
        let derived = DerivedState::compute(&catalog, &rates, &draft);
        Self {
            catalog,
            rates,
            state: WizardState::Active(WizardStep::ProjectDetails),
            draft,
            derived,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Current step, `None` once submitted or abandoned.
    pub fn step(&self) -> Option<WizardStep> {
        match self.state {
            WizardState::Active(step) => Some(step),
            _ => None,
        }
    }

    pub fn draft(&self) -> &DraftConfiguration {
        &self.draft
    }

    pub fn derived(&self) -> &DerivedState {
        &self.derived
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Catalogue view for the capability step.
    pub fn capabilities(&self) -> Vec<CapabilityView> {
        Resolver::describe(&self.catalog, &self.draft.selection)
    }

    /// Definitions of the derived enablers, for the enabler review step.
    pub fn enabler_details(&self) -> Result<Vec<&EnablerDefinition>, ResolveError> {
        Resolver::enabler_details(&self.catalog, &self.derived.enablers)
    }

    pub fn validation(&self) -> ValidationResult {
        Resolver::validate(&self.catalog, &self.draft.selection)
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), WizardError> {
        self.ensure_active("edit name")?;
        self.draft.name = name.into();
        Ok(())
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), WizardError> {
        self.ensure_active("edit description")?;
        self.draft.description = description.into();
        Ok(())
    }

    pub fn set_owner(&mut self, owner: impl Into<String>) -> Result<(), WizardError> {
        self.ensure_active("edit owner")?;
        self.draft.owner = owner.into();
        Ok(())
    }

    pub fn set_tags(&mut self, tags: impl Into<String>) -> Result<(), WizardError> {
        self.ensure_active("edit tags")?;
        self.draft.tags = tags.into();
        Ok(())
    }

    /// Add or remove a capability. A rejected add leaves the draft untouched.
    pub fn toggle_capability(&mut self, id: &str) -> Result<ToggleChange, WizardError> {
        self.ensure_active("toggle capability")?;
        let toggle = Resolver::toggle(&self.catalog, &self.draft.selection, id)?;
        if toggle.change != ToggleChange::Unchanged {
            self.draft.selection = toggle.selection;
            self.recompute();
        }
        Ok(toggle.change)
    }

    /// Validated update of one resource field. Non-positive values are rejected
    /// before they reach the draft.
    pub fn set_resource(&mut self, field: ResourceField) -> Result<(), WizardError> {
        self.ensure_active("edit resources")?;
        self.draft.resources = self.draft.resources.apply(field)?;
        self.recompute();
        Ok(())
    }

    /// Replace the selection with a template's capabilities and everything
    /// they transitively require.
    ///
    /// Capabilities are added layer by layer through the resolver, so each add
    /// passes the same Ready check as a manual toggle. Either the whole template
    /// applies or the selection is left as it was.
    pub fn apply_template(&mut self, template_id: &str) -> Result<TemplatePlan, WizardError> {
        self.ensure_active("apply template")?;
        let plan = TemplateLibrary::plan(&self.catalog, template_id)?;

        let mut selection = Selection::new();
        for id in plan.layers.iter().flatten() {
            selection = Resolver::select(&self.catalog, &selection, id.as_str())?.selection;
        }

        info!(
            template = %template_id,
            capabilities = selection.len(),
            implied = plan.implied.len(),
            "Template applied"
        );
        self.draft.selection = selection;
        self.recompute();
        Ok(plan)
    }

    /// Move one step forward. Leaving project details needs a name; the review
    /// step only exits through [`Wizard::submit`].
    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        let step = self.ensure_active("advance")?;

        if step == WizardStep::ProjectDetails && !self.draft.has_name() {
            return Err(self.reject("advance", "environment name is required"));
        }

        let Some(next) = step.next() else {
            return Err(self.reject("advance", "use submit to finish the wizard"));
        };

        debug!(from = %step, to = %next, "Wizard advanced");
        self.state = WizardState::Active(next);
        Ok(next)
    }

    /// Move one step back, keeping every entered value. Going back from the
    /// first step abandons the session.
    pub fn retreat(&mut self) -> Result<WizardState, WizardError> {
        let step = self.ensure_active("retreat")?;

        self.state = match step.previous() {
            Some(previous) => {
                debug!(from = %step, to = %previous, "Wizard retreated");
                WizardState::Active(previous)
            }
            None => {
                info!("Wizard abandoned");
                self.draft = DraftConfiguration::default();
                self.recompute();
                WizardState::Abandoned
            }
        };
        Ok(self.state.clone())
    }

    /// Turn the draft into a registered environment.
    ///
    /// Selection issues (e.g. a prerequisite removed after its dependent was
    /// chosen) are logged but do not block submission.
    pub fn submit(&mut self, registry: &EnvironmentRegistry) -> Result<Environment, WizardError> {
        let step = self.ensure_active("submit")?;
        if step != WizardStep::ReviewAndSubmit {
            return Err(self.reject("submit", "submission is only possible from the review step"));
        }
        if !self.draft.has_name() {
            return Err(self.reject("submit", "environment name is required"));
        }

        let validation = self.validation();
        for issue in &validation.issues {
            warn!(field = %issue.field, "Submitting with selection issue: {}", issue.message);
        }

        // Recomputed so the record can never carry a stale estimate.
        self.recompute();
        let draft = std::mem::take(&mut self.draft);
        let submission = Submission {
            draft,
            enablers: self.derived.enablers.clone(),
            estimated_cost: self.derived.estimate.daily,
        };
        let environment = registry.create(submission);

        self.state = WizardState::Submitted(environment.id.clone());
        self.recompute();
        Ok(environment)
    }

    fn ensure_active(&self, action: &'static str) -> Result<WizardStep, WizardError> {
        match self.state {
            WizardState::Active(step) => Ok(step),
            _ => Err(self.reject(action, "the wizard has finished")),
        }
    }

    fn reject(&self, action: &'static str, reason: &str) -> WizardError {
        warn!(action, state = %self.state, reason, "Rejected wizard transition");
        WizardError::InvalidTransition {
            action,
            state: self.state.clone(),
            reason: reason.to_string(),
        }
    }

    fn recompute(&mut self) {
        self.derived = DerivedState::compute(&self.catalog, &self.rates, &self.draft);
        debug!(
            capabilities = self.draft.selection.len(),
            enablers = self.derived.enablers.len(),
            daily = %self.derived.estimate.daily,
            "Derived state recomputed"
        );
    }
}
