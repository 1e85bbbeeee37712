//! Parameter validation and error types

pub mod error;
pub mod params;

pub use error::{PlanningError, PlanningResult};
pub use params::{ParameterValidator, ValidationConfig, ValidationReport, ValidationWarning};
