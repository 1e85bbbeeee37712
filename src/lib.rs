//! Two-station coverage planner
//!
//! Sweeps a polar grid around the platform start point and, for one of three
//! positioning methods (differential-range, direct-range, angle-measuring),
//! reports the region where the position-error bound stays within tolerance
//! together with the outline of that region.

pub mod core;
pub mod algorithms;
pub mod processing;
pub mod validation;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use crate::core::{ErrorParameters, GridConfig, Method, Point2D, RegionResult, RegionSummary};
pub use crate::algorithms::{build_model, ErrorModel, SamplingFrame};
pub use crate::processing::{CancellationToken, Sweep, SweepOptions, SweepProgress};
pub use crate::validation::{PlanningError, PlanningResult};
pub use crate::utils::{ConfigError, ConfigurationManager, PlannerConfig};
pub use crate::api::{
    compute, BackgroundSweep, CoveragePlanner, CsvFormatter, JsonFormatter, SweepRequest,
    SweepStatus, TextFormatter,
};
