use domain::{Environment, Money};
use serde::Serialize;

/// Headline numbers over the registered environments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub total: usize,
    /// Provisioning or running.
    pub active: usize,
    pub daily_cost: Money,
    /// `None` with no environments.
    pub average_health: Option<u8>,
}

impl DashboardSummary {
    pub fn from_environments(environments: &[Environment]) -> Self {
        let total = environments.len();
        let active = environments
            .iter()
            .filter(|env| env.status.is_active())
            .count();
        let daily_cost = environments.iter().map(|env| env.estimated_cost).sum();

        let average_health = if total == 0 {
            None
        } else {
            let sum: usize = environments.iter().map(|env| usize::from(env.health)).sum();
            let rounded = (sum + total / 2) / total;
            Some(u8::try_from(rounded).unwrap_or(u8::MAX))
        };

        Self {
            total,
            active,
            daily_cost,
            average_health,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use domain::{EnvironmentId, EnvironmentStatus, ResourceSpec};
    use std::time::Duration;

    fn environment(status: EnvironmentStatus, cents: u64, health: u8) -> Environment {
        Environment {
            id: EnvironmentId::new("env-test"),
            name: "test".to_string(),
            description: String::new(),
            owner: String::new(),
            tags: Vec::new(),
            status,
            capabilities: Vec::new(),
            enablers: Vec::new(),
            resources: ResourceSpec::default(),
            estimated_cost: Money::from_cents(cents),
            uptime: Duration::ZERO,
            health,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_dashboard() {
        let summary = DashboardSummary::from_environments(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.active, 0);
        assert_eq!(summary.daily_cost, Money::ZERO);
        assert_eq!(summary.average_health, None);
    }

    #[test]
    fn test_summary_counts() {
        let environments = vec![
            environment(EnvironmentStatus::Provisioning, 8640, 100),
            environment(EnvironmentStatus::Running, 1000, 95),
            environment(EnvironmentStatus::Stopped, 250, 0),
        ];
        let summary = DashboardSummary::from_environments(&environments);

        assert_eq!(summary.total, 3);
        assert_eq!(summary.active, 2);
        assert_eq!(summary.daily_cost.to_string(), "98.90");
        assert_eq!(summary.average_health, Some(65));
    }
}
