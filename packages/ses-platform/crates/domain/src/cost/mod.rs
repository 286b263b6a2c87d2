pub mod estimator;
pub mod money;

pub use estimator::{CostBreakdown, CostEstimate, CostEstimator, CostRates};
pub use money::Money;
