//! Blocking API for coverage computation
//!
//! Validates the request, builds the matching error model and runs one sweep
//! on the calling thread. Each call is independent and returns a fresh result.

use crate::algorithms::build_model;
use crate::api::types::SweepRequest;
use crate::core::{ErrorParameters, GridConfig, Method, Point2D, RegionResult};
use crate::processing::{CancellationToken, Sweep, SweepOptions, SweepProgress};
use crate::validation::{ParameterValidator, PlanningResult, ValidationConfig};
use log::warn;

/// Synchronous planner for the three positioning methods
#[derive(Debug, Clone, Default)]
pub struct CoveragePlanner {
    validator: ParameterValidator,
    options: SweepOptions,
}

impl CoveragePlanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: SweepOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_validation(mut self, config: ValidationConfig) -> Self {
        self.validator = ParameterValidator::with_config(config);
        self
    }

    pub fn options(&self) -> SweepOptions {
        self.options
    }

    /// Compute the acceptable region for `method`
    pub fn compute(
        &self,
        method: Method,
        station_a: Point2D,
        station_b: Point2D,
        params: &ErrorParameters,
        grid: GridConfig,
    ) -> PlanningResult<RegionResult> {
        self.compute_with(
            method,
            &SweepRequest::new(station_a, station_b, *params, grid),
            CancellationToken::new(),
            SweepProgress::new(),
        )
    }

    /// Compute a request, using the method implied by its parameters
    pub fn compute_request(&self, request: &SweepRequest) -> PlanningResult<RegionResult> {
        self.compute_with(
            request.method(),
            request,
            CancellationToken::new(),
            SweepProgress::new(),
        )
    }

    /// Compute with caller-owned cancellation and progress handles
    pub fn compute_with(
        &self,
        method: Method,
        request: &SweepRequest,
        cancellation: CancellationToken,
        progress: SweepProgress,
    ) -> PlanningResult<RegionResult> {
        let warnings = self
            .validator
            .validate(method, request.station_a, request.station_b, &request.params, &request.grid)
            .into_result()?;
        for warning in &warnings {
            warn!("{} parameters: {}", method, warning);
        }

        let model = build_model(request.station_a, request.station_b, &request.params);
        Sweep::new(model.as_ref(), request.grid)
            .with_options(self.options)
            .with_cancellation(cancellation)
            .with_progress(progress)
            .run()
    }
}

/// Compute the acceptable region and its outline with default settings
pub fn compute(
    method: Method,
    station_a: Point2D,
    station_b: Point2D,
    params: &ErrorParameters,
    grid: GridConfig,
) -> PlanningResult<RegionResult> {
    CoveragePlanner::new().compute(method, station_a, station_b, params, grid)
}
