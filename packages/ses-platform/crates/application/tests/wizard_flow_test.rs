use application::{
    EngineConfig, EnvironmentRegistry, Platform, Submission, WizardError, WizardState, WizardStep,
};
use domain::{
    CapabilityId, EnablerId, EnvironmentStatus, Money, NetworkMode, Priority, ResourceField,
};
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::thread;

fn platform() -> Platform {
    Platform::bootstrap(&EngineConfig::default()).unwrap()
}

fn enablers(raw: &[&str]) -> BTreeSet<EnablerId> {
    raw.iter().map(|id| EnablerId::from(*id)).collect()
}

#[test]
fn test_advance_requires_name() {
    let platform = platform();
    let mut wizard = platform.open_wizard();

    let err = wizard.advance().unwrap_err();
    assert!(matches!(
        err,
        WizardError::InvalidTransition { action: "advance", .. }
    ));
    assert_eq!(wizard.step(), Some(WizardStep::ProjectDetails));

    wizard.set_name("Load Test").unwrap();
    assert_eq!(wizard.advance().unwrap(), WizardStep::CapabilitySelection);

    assert_eq!(
        wizard.retreat().unwrap(),
        WizardState::Active(WizardStep::ProjectDetails)
    );
    assert_eq!(wizard.draft().name, "Load Test");
}

#[test]
fn test_whitespace_name_advances() {
    let platform = platform();
    let mut wizard = platform.open_wizard();
    wizard.set_name(" ").unwrap();
    assert_eq!(wizard.advance().unwrap(), WizardStep::CapabilitySelection);
    assert_eq!(wizard.draft().name, " ");

    for _ in 0..3 {
        wizard.advance().unwrap();
    }
    let env = wizard.submit(platform.registry()).unwrap();
    assert_eq!(env.name, " ");
}

#[test]
fn test_selection_updates_enablers() {
    let platform = platform();
    let mut wizard = platform.open_wizard();

    wizard.toggle_capability("C01").unwrap();
    assert_eq!(
        wizard.derived().enablers,
        enablers(&["E02", "E11", "E17", "E20"])
    );

    wizard.toggle_capability("C02").unwrap();
    assert_eq!(
        wizard.derived().enablers,
        enablers(&["E01", "E02", "E03", "E04", "E11", "E17", "E20"])
    );

    // Removing a prerequisite is allowed; the dependent stays and validation flags it.
    wizard.toggle_capability("C01").unwrap();
    assert_eq!(
        wizard.derived().enablers,
        enablers(&["E01", "E03", "E04", "E17"])
    );
    let validation = wizard.validation();
    assert!(validation.has_errors());
    assert_eq!(validation.issues[0].message, "Capability C02 requires C01");
}

#[test]
fn test_enabler_review_lists_definitions() {
    let platform = platform();
    let mut wizard = platform.open_wizard();
    wizard.toggle_capability("C17").unwrap();

    let names: Vec<&str> = wizard
        .enabler_details()
        .unwrap()
        .into_iter()
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(names, vec!["E01", "E07", "E09", "E19"]);
}

#[test]
fn test_capability_view_marks_blocked() {
    let platform = platform();
    let mut wizard = platform.open_wizard();
    wizard.toggle_capability("C01").unwrap();

    let views = wizard.capabilities();
    let c02 = views.iter().find(|v| v.id.as_str() == "C02").unwrap();
    assert!(c02.selectable);
    let c03 = views.iter().find(|v| v.id.as_str() == "C03").unwrap();
    assert!(!c03.selectable);
    assert_eq!(c03.unmet, vec![CapabilityId::from("C02")]);
}

#[test]
fn test_resource_edits_update_cost() {
    let platform = platform();
    let mut wizard = platform.open_wizard();
    for id in ["C01", "C02", "C03", "C17", "C16", "C07"] {
        wizard.toggle_capability(id).unwrap();
    }
    assert_eq!(wizard.derived().estimate.daily.to_string(), "86.40");
    assert_eq!(wizard.derived().estimate.optimization_tip, None);

    wizard.set_resource(ResourceField::Instances(6)).unwrap();
    // 4 * 16 * 6 * 0.05 = 19.20
    assert_eq!(wizard.derived().estimate.daily.to_string(), "99.20");
    assert!(wizard.derived().estimate.optimization_tip.is_some());

    wizard.set_resource(ResourceField::Network(NetworkMode::Hybrid)).unwrap();
    wizard.set_resource(ResourceField::Priority(Priority::Critical)).unwrap();
    assert_eq!(wizard.draft().resources.network(), NetworkMode::Hybrid);
    assert_eq!(wizard.draft().resources.priority(), Priority::Critical);

    let err = wizard.set_resource(ResourceField::MemoryGb(0)).unwrap_err();
    assert!(matches!(err, WizardError::Resource(_)));
    assert_eq!(wizard.draft().resources.memory_gb(), 16);
}

#[test]
fn test_apply_template_selects_closure() {
    let platform = platform();
    let mut wizard = platform.open_wizard();
    wizard.toggle_capability("C08").unwrap_err();
    wizard.toggle_capability("C01").unwrap();

    let plan = wizard.apply_template("tmpl-003").unwrap();
    assert_eq!(plan.implied.len(), 6);
    assert_eq!(wizard.draft().selection.len(), 10);
    assert!(!wizard.validation().has_errors());
    assert_eq!(wizard.derived().estimate.daily.to_string(), "106.40");

    let before = wizard.draft().clone();
    let err = wizard.apply_template("tmpl-missing").unwrap_err();
    assert_eq!(err, WizardError::UnknownTemplate("tmpl-missing".to_string()));
    assert_eq!(wizard.draft(), &before);
}

#[test]
fn test_submit_only_from_review() {
    let platform = platform();
    let mut wizard = platform.open_wizard();
    wizard.set_name("Early").unwrap();

    let err = wizard.submit(platform.registry()).unwrap_err();
    assert!(matches!(
        err,
        WizardError::InvalidTransition { action: "submit", .. }
    ));
    assert!(platform.registry().is_empty());
}

#[test]
fn test_submit_creates_environment() {
    let platform = platform();
    let registry = platform.registry();

    let mut first = platform.open_wizard();
    first.set_name("Baseline").unwrap();
    for _ in 0..4 {
        first.advance().unwrap();
    }
    let baseline = first.submit(registry).unwrap();

    let mut wizard = platform.open_wizard();
    wizard.set_name("Load Test").unwrap();
    wizard.set_owner("perf-team").unwrap();
    wizard.set_tags("production, load-test").unwrap();
    wizard.advance().unwrap();
    wizard.toggle_capability("C01").unwrap();
    wizard.toggle_capability("C02").unwrap();
    wizard.advance().unwrap();
    wizard.advance().unwrap();
    wizard.advance().unwrap();
    assert_eq!(wizard.step(), Some(WizardStep::ReviewAndSubmit));

    let expected_cost = wizard.derived().estimate.daily;
    let env = wizard.submit(registry).unwrap();

    assert_eq!(env.status, EnvironmentStatus::Provisioning);
    assert_eq!(env.health, 100);
    assert_eq!(env.estimated_cost, expected_cost);
    assert_eq!(env.owner, "perf-team");
    assert_eq!(env.tags, vec!["production", "load-test"]);
    assert_eq!(
        env.capabilities,
        vec![CapabilityId::from("C01"), CapabilityId::from("C02")]
    );
    assert_eq!(env.enablers.len(), 7);
    assert_eq!(wizard.state(), &WizardState::Submitted(env.id.clone()));

    let listed = registry.list();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0], baseline);
    assert_eq!(listed[1], env);

    assert!(wizard.advance().is_err());
    assert!(wizard.submit(registry).is_err());
    assert_eq!(registry.len(), 2);

    let summary = platform.dashboard();
    assert_eq!(summary.total, 2);
    assert_eq!(summary.active, 2);
    assert_eq!(summary.average_health, Some(100));
}

#[test]
fn test_concurrent_creates_get_unique_ids() {
    let registry = Arc::new(EnvironmentRegistry::new());

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for n in 0..25 {
                    registry.create(Submission {
                        draft: application::DraftConfiguration {
                            name: format!("env {worker}-{n}"),
                            ..Default::default()
                        },
                        enablers: BTreeSet::new(),
                        estimated_cost: Money::ZERO,
                    });
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let environments = registry.list();
    assert_eq!(environments.len(), 200);
    let ids: BTreeSet<_> = environments.iter().map(|e| e.id.clone()).collect();
    assert_eq!(ids.len(), 200);
}
