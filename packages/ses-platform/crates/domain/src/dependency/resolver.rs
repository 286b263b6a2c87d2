use crate::catalog::Catalog;
use crate::entities::{CapabilityDefinition, CapabilityId, EnablerDefinition, EnablerId, Selection};
use crate::error::ResolveError;
use serde::Serialize;
use ses_manifest::ValidationResult;
use std::collections::BTreeSet;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CapabilityStatus {
    Ready,
    Blocked,
}

/// What happened to the selection on a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleChange {
    Added,
    Removed,
    /// Selecting something already selected.
    Unchanged,
}

/// Result of an accepted selection change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggle {
    pub selection: Selection,
    pub change: ToggleChange,
}

/// One row of the capability catalogue as seen from a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapabilityView {
    pub id: CapabilityId,
    pub name: String,
    pub description: String,
    pub status: CapabilityStatus,
    pub selected: bool,
    /// Selected capabilities can always be removed, so this is
    /// `selected || status == Ready`.
    pub selectable: bool,
    pub unmet: Vec<CapabilityId>,
}

/// Stateless capability/enabler resolution over a catalog.
pub struct Resolver;

impl Resolver {
    /// Prerequisites of `id` that are not in `selection`, in definition order.
    pub fn unmet_prerequisites(
        catalog: &Catalog,
        selection: &Selection,
        id: &str,
    ) -> Result<Vec<CapabilityId>, ResolveError> {
        let capability = catalog.capability(id)?;
        Ok(Self::readiness(capability, selection).1)
    }

    /// Ready when every prerequisite is selected (vacuously for none).
    pub fn status(
        catalog: &Catalog,
        selection: &Selection,
        id: &str,
    ) -> Result<CapabilityStatus, ResolveError> {
        let capability = catalog.capability(id)?;
        Ok(Self::readiness(capability, selection).0)
    }

    pub fn is_selectable(
        catalog: &Catalog,
        selection: &Selection,
        id: &str,
    ) -> Result<bool, ResolveError> {
        let status = Self::status(catalog, selection, id)?;
        Ok(selection.contains(id) || status == CapabilityStatus::Ready)
    }

    /// Add `id`. A no-op when already selected; rejected when blocked.
    pub fn select(
        catalog: &Catalog,
        selection: &Selection,
        id: &str,
    ) -> Result<Toggle, ResolveError> {
        let capability = catalog.capability(id)?;
        if selection.contains(id) {
            return Ok(Toggle {
                selection: selection.clone(),
                change: ToggleChange::Unchanged,
            });
        }

        let unmet = Self::unmet_prerequisites(catalog, selection, id)?;
        if !unmet.is_empty() {
            warn!(capability = %id, ?unmet, "Rejected selection of blocked capability");
            return Err(ResolveError::RejectedToggle {
                capability: capability.id.clone(),
                unmet,
            });
        }

        debug!(capability = %id, "Capability selected");
        Ok(Toggle {
            selection: selection.with(capability.id.clone()),
            change: ToggleChange::Added,
        })
    }

    /// Remove `id`. Always succeeds for a known capability; dependents that
    /// remain selected are reported by [`Resolver::validate`].
    pub fn deselect(
        catalog: &Catalog,
        selection: &Selection,
        id: &str,
    ) -> Result<Toggle, ResolveError> {
        catalog.capability(id)?;
        if !selection.contains(id) {
            return Ok(Toggle {
                selection: selection.clone(),
                change: ToggleChange::Unchanged,
            });
        }

        debug!(capability = %id, "Capability deselected");
        Ok(Toggle {
            selection: selection.without(id),
            change: ToggleChange::Removed,
        })
    }

    /// Remove `id` if selected, otherwise try to add it.
    pub fn toggle(
        catalog: &Catalog,
        selection: &Selection,
        id: &str,
    ) -> Result<Toggle, ResolveError> {
        if selection.contains(id) {
            Self::deselect(catalog, selection, id)
        } else {
            Self::select(catalog, selection, id)
        }
    }

    /// Union of the required enablers of every selected capability.
    ///
    /// Always recomputed from scratch. Unknown IDs contribute nothing; they
    /// cannot enter a selection through `toggle` and `validate` reports them.
    pub fn derive_enablers(catalog: &Catalog, selection: &Selection) -> BTreeSet<EnablerId> {
        selection
            .iter()
            .filter_map(|id| catalog.capability(id.as_str()).ok())
            .flat_map(|cap| cap.enablers.iter().cloned())
            .collect()
    }

    /// Full definitions of a derived enabler set, in ID order.
    pub fn enabler_details<'c>(
        catalog: &'c Catalog,
        enablers: &BTreeSet<EnablerId>,
    ) -> Result<Vec<&'c EnablerDefinition>, ResolveError> {
        enablers
            .iter()
            .map(|id| catalog.enabler(id.as_str()))
            .collect()
    }

    /// Every capability in catalog order with its status for `selection`.
    pub fn describe(catalog: &Catalog, selection: &Selection) -> Vec<CapabilityView> {
        catalog
            .list_capabilities()
            .iter()
            .map(|cap| {
                let (status, unmet) = Self::readiness(cap, selection);
                let selected = selection.contains(cap.id.as_str());
                CapabilityView {
                    id: cap.id.clone(),
                    name: cap.name.clone(),
                    description: cap.description.clone(),
                    status,
                    selected,
                    selectable: selected || status == CapabilityStatus::Ready,
                    unmet,
                }
            })
            .collect()
    }

    /// Check a whole selection, e.g. before review.
    pub fn validate(catalog: &Catalog, selection: &Selection) -> ValidationResult {
        let mut result = ValidationResult::new();

        if selection.is_empty() {
            result.add_warning("capabilities", "No capabilities selected");
        }

        for id in selection {
            let field = format!("capabilities.{}", id);
            match catalog.capability(id.as_str()) {
                Ok(cap) => {
                    for prerequisite in &cap.prerequisites {
                        if !selection.contains(prerequisite.as_str()) {
                            result.add_error(
                                field.clone(),
                                format!("Capability {} requires {}", id, prerequisite),
                            );
                        }
                    }
                }
                Err(_) => result.add_error(field, format!("Capability {} not found", id)),
            }
        }

        result
    }

    /// Ready when every prerequisite is selected; the unmet ones in definition order.
    fn readiness(
        capability: &CapabilityDefinition,
        selection: &Selection,
    ) -> (CapabilityStatus, Vec<CapabilityId>) {
        let unmet: Vec<CapabilityId> = capability
            .prerequisites
            .iter()
            .filter(|p| !selection.contains(p.as_str()))
            .cloned()
            .collect();
        let status = if unmet.is_empty() {
            CapabilityStatus::Ready
        } else {
            CapabilityStatus::Blocked
        };
        (status, unmet)
    }
}
