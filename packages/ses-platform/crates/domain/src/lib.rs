pub mod catalog;
pub mod cost;
pub mod dependency;
pub mod entities;
pub mod error;

pub use catalog::Catalog;
pub use cost::{CostEstimate, CostEstimator, CostRates, Money};
pub use dependency::{CapabilityStatus, CapabilityView, Resolver, Toggle};
pub use entities::*;
pub use error::{CatalogError, ResolveError};
