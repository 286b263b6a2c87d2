use super::money::Money;
use crate::entities::{ResourceSpec, Selection};
use serde::{Deserialize, Serialize};

/// Instance count above which the estimate suggests auto-scaling.
const AUTOSCALE_HINT_INSTANCES: u32 = 5;

/// Unit prices used by the estimator. Supplied by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostRates {
    /// Per cpu × memory GB × instance, per day.
    pub compute_rate: f64,
    /// Per storage GB, per day.
    pub storage_rate: f64,
    /// Flat daily charge per selected capability.
    pub per_capability_rate: f64,
    /// Days in a billing month.
    pub monthly_factor: f64,
}

impl Default for CostRates {
    fn default() -> Self {
        Self {
            compute_rate: 0.05,
            storage_rate: 0.1,
            per_capability_rate: 5.0,
            monthly_factor: 30.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostBreakdown {
    pub compute: Money,
    pub storage: Money,
    pub capabilities: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostEstimate {
    pub breakdown: CostBreakdown,
    pub daily: Money,
    pub monthly: Money,
    pub optimization_tip: Option<String>,
}

pub struct CostEstimator;

impl CostEstimator {
    /// Daily cost of running `resources` with `selection`, rounded once at the end.
    pub fn estimate(rates: &CostRates, resources: &ResourceSpec, selection: &Selection) -> Money {
        let (compute, storage, capabilities) = Self::components(rates, resources, selection);
        Money::from_amount(compute + storage + capabilities)
    }

    /// The estimate with its parts, a monthly projection and an optional tip.
    ///
    /// Parts are rounded individually for display, so they may not add up to
    /// `daily` to the cent.
    pub fn breakdown(
        rates: &CostRates,
        resources: &ResourceSpec,
        selection: &Selection,
    ) -> CostEstimate {
        let (compute, storage, capabilities) = Self::components(rates, resources, selection);
        let daily = compute + storage + capabilities;

        let optimization_tip = (resources.instances() > AUTOSCALE_HINT_INSTANCES).then(|| {
            "Consider using auto-scaling to optimize costs during low usage".to_string()
        });

        CostEstimate {
            breakdown: CostBreakdown {
                compute: Money::from_amount(compute),
                storage: Money::from_amount(storage),
                capabilities: Money::from_amount(capabilities),
            },
            daily: Money::from_amount(daily),
            monthly: Money::from_amount(daily * rates.monthly_factor),
            optimization_tip,
        }
    }

    fn components(
        rates: &CostRates,
        resources: &ResourceSpec,
        selection: &Selection,
    ) -> (f64, f64, f64) {
        let compute = f64::from(resources.cpu())
            * f64::from(resources.memory_gb())
            * f64::from(resources.instances())
            * rates.compute_rate;
        let storage = f64::from(resources.storage_gb()) * rates.storage_rate;
        let capabilities = selection.len() as f64 * rates.per_capability_rate;
        (compute, storage, capabilities)
    }
}
