use domain::dependency::{CapabilityStatus, Resolver, ToggleChange};
use domain::ResolveError;
use domain::{Catalog, CostEstimator, CostRates, ResourceField, ResourceSpec, Selection};
use proptest::prelude::*;
use proptest::sample::subsequence;

fn catalog() -> Catalog {
    Catalog::bundled().unwrap()
}

fn all_ids() -> Vec<String> {
    catalog()
        .list_capabilities()
        .iter()
        .map(|c| c.id.as_str().to_string())
        .collect()
}

fn any_selection() -> impl Strategy<Value = Selection> {
    subsequence(all_ids(), 0..=18).prop_map(|ids| ids.into_iter().collect())
}

fn any_capability() -> impl Strategy<Value = String> {
    proptest::sample::select(all_ids())
}

fn resources(cpu: i64, memory: i64, instances: i64, storage: i64) -> ResourceSpec {
    ResourceSpec::default()
        .apply(ResourceField::Cpu(cpu))
        .and_then(|r| r.apply(ResourceField::MemoryGb(memory)))
        .and_then(|r| r.apply(ResourceField::Instances(instances)))
        .and_then(|r| r.apply(ResourceField::StorageGb(storage)))
        .unwrap()
}

proptest! {
    #[test]
    fn test_status_ready_iff_prerequisites_selected(
        selection in any_selection(),
        id in any_capability(),
    ) {
        let catalog = catalog();
        let cap = catalog.capability(&id).unwrap();
        let all_met = cap.prerequisites.iter().all(|p| selection.contains(p.as_str()));

        let status = Resolver::status(&catalog, &selection, &id).unwrap();
        prop_assert_eq!(status == CapabilityStatus::Ready, all_met);
    }

    #[test]
    fn test_double_toggle_is_identity(
        selection in any_selection(),
        id in any_capability(),
    ) {
        let catalog = catalog();
        if let Ok(first) = Resolver::toggle(&catalog, &selection, &id) {
            let second = Resolver::toggle(&catalog, &first.selection, &id);
            let readd_ready = Resolver::status(&catalog, &first.selection, &id).unwrap()
                == CapabilityStatus::Ready;

            match first.change {
                // removing what was just added is always allowed
                ToggleChange::Added => {
                    prop_assert_eq!(second.unwrap().selection, selection);
                }
                ToggleChange::Removed if readd_ready => {
                    prop_assert_eq!(second.unwrap().selection, selection);
                }
                // a dependent kept without its prerequisites cannot come back
                ToggleChange::Removed => {
                    let rejected = matches!(second, Err(ResolveError::RejectedToggle { .. }));
                    prop_assert!(rejected);
                }
                ToggleChange::Unchanged => {
                    prop_assert!(false, "toggle always adds or removes");
                }
            }
        }
    }

    #[test]
    fn test_derived_enablers_are_monotonic(
        selection in any_selection(),
        id in any_capability(),
    ) {
        let catalog = catalog();
        let before = Resolver::derive_enablers(&catalog, &selection);

        let mut grown: Vec<String> = selection.iter().map(|c| c.as_str().to_string()).collect();
        grown.push(id);
        let grown: Selection = grown.into_iter().collect();
        let after = Resolver::derive_enablers(&catalog, &grown);

        prop_assert!(before.is_subset(&after));
    }

    #[test]
    fn test_derived_enablers_match_union(selection in any_selection()) {
        let catalog = catalog();
        let mut expected = std::collections::BTreeSet::new();
        for id in &selection {
            expected.extend(catalog.capability(id.as_str()).unwrap().enablers.iter().cloned());
        }

        prop_assert_eq!(Resolver::derive_enablers(&catalog, &selection), expected);
    }

    #[test]
    fn test_cost_monotonic_in_resources(
        cpu in 1i64..64,
        memory in 1i64..256,
        instances in 1i64..20,
        storage in 1i64..10_000,
        bump in 1i64..10,
        selection in any_selection(),
    ) {
        let rates = CostRates::default();
        let base = CostEstimator::estimate(&rates, &resources(cpu, memory, instances, storage), &selection);

        for bigger in [
            resources(cpu + bump, memory, instances, storage),
            resources(cpu, memory + bump, instances, storage),
            resources(cpu, memory, instances + bump, storage),
            resources(cpu, memory, instances, storage + bump),
        ] {
            prop_assert!(CostEstimator::estimate(&rates, &bigger, &selection) >= base);
        }
    }

    #[test]
    fn test_cost_monotonic_in_selection_size(
        selection in any_selection(),
        id in any_capability(),
    ) {
        let rates = CostRates::default();
        let spec = ResourceSpec::default();
        let base = CostEstimator::estimate(&rates, &spec, &selection);

        let mut grown: Vec<String> = selection.iter().map(|c| c.as_str().to_string()).collect();
        grown.push(id);
        let grown: Selection = grown.into_iter().collect();

        prop_assert!(CostEstimator::estimate(&rates, &spec, &grown) >= base);
    }
}
