//! Request and status types shared by the blocking and background APIs

use crate::core::{ErrorParameters, GridConfig, Method, Point2D};
use serde::{Deserialize, Serialize};

/// Everything needed to run one sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRequest {
    pub station_a: Point2D,
    pub station_b: Point2D,
    pub params: ErrorParameters,
    pub grid: GridConfig,
}

impl SweepRequest {
    pub fn new(station_a: Point2D, station_b: Point2D, params: ErrorParameters, grid: GridConfig) -> Self {
        Self {
            station_a,
            station_b,
            params,
            grid,
        }
    }

    /// Method implied by the error parameters
    pub fn method(&self) -> Method {
        self.params.method()
    }
}

/// Observable state of a background sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SweepStatus {
    /// Worker is still tracing rays; completed fraction in `[0, 1]`
    Running(f64),
    /// Worker finished; the result is ready to be joined
    Finished,
    /// Cancellation was requested and the worker has not exited yet
    Cancelling,
}
