pub mod capability;
pub mod enabler;
pub mod template;
pub mod validation;

pub use capability::*;
pub use enabler::*;
pub use template::*;
pub use validation::*;
