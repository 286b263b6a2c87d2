use domain::{CostEstimate, CostEstimator, CostRates, EnablerId, ResourceSpec, Selection};
use domain::{Catalog, Resolver};
use serde::Serialize;
use std::collections::BTreeSet;

/// The in-progress environment definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DraftConfiguration {
    pub name: String,
    pub description: String,
    pub owner: String,
    /// Raw comma separated input, e.g. `production, load-test`.
    pub tags: String,
    pub selection: Selection,
    pub resources: ResourceSpec,
}

impl DraftConfiguration {
    /// Any non-empty input counts, whitespace included.
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }

    /// Tags split on commas, trimmed, blanks dropped.
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Values computed from a draft; never edited directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedState {
    pub enablers: BTreeSet<EnablerId>,
    pub estimate: CostEstimate,
}

impl DerivedState {
    pub fn compute(catalog: &Catalog, rates: &CostRates, draft: &DraftConfiguration) -> Self {
        Self {
            enablers: Resolver::derive_enablers(catalog, &draft.selection),
            estimate: CostEstimator::breakdown(rates, &draft.resources, &draft.selection),
        }
    }
}
