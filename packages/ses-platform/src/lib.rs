//! Capability resolution, cost estimation and the environment creation
//! wizard of the simulation environment platform.
//!
//! ```no_run
//! use ses_platform::application::{EngineConfig, Platform};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! ses_platform::application::telemetry::init_tracing();
//! let platform = Platform::bootstrap(&EngineConfig::from_env()?)?;
//!
//! let mut wizard = platform.open_wizard();
//! wizard.set_name("Load Test")?;
//! wizard.advance()?;
//! wizard.toggle_capability("C01")?;
//! println!("{} per day", wizard.derived().estimate.daily);
//! # Ok(())
//! # }
//! ```

pub use application;
pub use domain;
