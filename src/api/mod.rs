//! Planner API
//!
//! Blocking and background entry points for running sweeps, plus output
//! formatters for the resulting regions.

pub mod blocking;
pub mod background;
pub mod types;
pub mod formatting;

pub use types::{SweepRequest, SweepStatus};
pub use blocking::{compute, CoveragePlanner};
pub use background::BackgroundSweep;
pub use formatting::{CsvFormatter, JsonFormatter, TextFormatter};
