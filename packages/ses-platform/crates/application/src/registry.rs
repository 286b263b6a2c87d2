use crate::wizard::DraftConfiguration;
use chrono::Utc;
use domain::{EnablerId, Environment, EnvironmentId, EnvironmentStatus, Money};
use parking_lot::RwLock;
use std::collections::BTreeSet;
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

/// A finished draft plus the values derived from it at submission time.
#[derive(Debug, Clone)]
pub struct Submission {
    pub draft: DraftConfiguration,
    pub enablers: BTreeSet<EnablerId>,
    /// Daily estimate as last shown to the user.
    pub estimated_cost: Money,
}

/// Append-only store of created environments, shared between sessions.
///
/// ID allocation and the append happen under one write lock. Readers get
/// copies, so they never hold the lock while working with the records.
#[derive(Debug, Default)]
pub struct EnvironmentRegistry {
    environments: RwLock<Vec<Environment>>,
}

impl EnvironmentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, submission: Submission) -> Environment {
        let Submission {
            draft,
            enablers,
            estimated_cost,
        } = submission;
        let tags = draft.tag_list();

        let mut environments = self.environments.write();
        let id = loop {
            let candidate = EnvironmentId::new(format!("env-{}", Uuid::new_v4().simple()));
            if !environments.iter().any(|env| env.id == candidate) {
                break candidate;
            }
        };

        let environment = Environment {
            id,
            name: draft.name,
            description: draft.description,
            owner: draft.owner,
            tags,
            status: EnvironmentStatus::Provisioning,
            capabilities: draft.selection.iter().cloned().collect(),
            enablers: enablers.into_iter().collect(),
            resources: draft.resources,
            estimated_cost,
            uptime: Duration::ZERO,
            health: 100,
            created_at: Utc::now(),
        };
        environments.push(environment.clone());

        info!(
            id = %environment.id,
            name = %environment.name,
            capabilities = environment.capabilities.len(),
            daily_cost = %environment.estimated_cost,
            "Environment created"
        );
        environment
    }

    /// Snapshot in creation order.
    pub fn list(&self) -> Vec<Environment> {
        self.environments.read().clone()
    }

    pub fn get(&self, id: &str) -> Option<Environment> {
        self.environments
            .read()
            .iter()
            .find(|env| env.id.as_str() == id)
            .cloned()
    }

    /// Case-insensitive name match, creation order.
    pub fn search(&self, term: &str) -> Vec<Environment> {
        let needle = term.trim().to_lowercase();
        self.environments
            .read()
            .iter()
            .filter(|env| env.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.environments.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.environments.read().is_empty()
    }
}
