use crate::core::{ErrorParameters, GridConfig, Method, Point2D, GEOMETRY_EPSILON};
use crate::validation::error::{PlanningError, PlanningResult};
use std::fmt;

/// Configuration for parameter validation
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Sweeps with more samples than this produce a warning
    pub sample_budget: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            sample_budget: 3600 * 2000,
        }
    }
}

/// Non-fatal findings about a parameter set
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationWarning {
    /// Stations share a position; the geometry degenerates for every method
    CoincidentStations { station: Point2D },
    /// Direct-range threshold is above 1, so no sample can pass
    UnreachableThreshold { sin_alpha_min: f64 },
    /// Sweep is larger than the configured budget
    LargeSweep { samples: usize, budget: usize },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::CoincidentStations { station } => {
                write!(f, "Stations coincide at ({:.3}, {:.3})", station.x, station.y)
            }
            ValidationWarning::UnreachableThreshold { sin_alpha_min } => {
                write!(f, "Minimum sin(alpha) {:.4} is not reachable, region will be empty", sin_alpha_min)
            }
            ValidationWarning::LargeSweep { samples, budget } => {
                write!(f, "Sweep of {} samples exceeds budget of {}", samples, budget)
            }
        }
    }
}

/// Validation result containing every error and warning found
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub errors: Vec<PlanningError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Collapse into a result: one error is returned as is, several are wrapped
    pub fn into_result(self) -> PlanningResult<Vec<ValidationWarning>> {
        let mut errors = self.errors;
        match errors.len() {
            0 => Ok(self.warnings),
            1 => Err(errors.remove(0)),
            _ => Err(PlanningError::Multiple(errors)),
        }
    }
}

/// Checks sweep inputs before any sample is evaluated
#[derive(Debug, Clone, Default)]
pub struct ParameterValidator {
    config: ValidationConfig,
}

impl ParameterValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Validate a full sweep request
    pub fn validate(
        &self,
        method: Method,
        station_a: Point2D,
        station_b: Point2D,
        params: &ErrorParameters,
        grid: &GridConfig,
    ) -> ValidationReport {
        let mut report = ValidationReport::default();

        if params.method() != method {
            report.errors.push(PlanningError::MethodMismatch {
                requested: method,
                provided: params.method(),
            });
        }

        for (name, station) in [("station_a", station_a), ("station_b", station_b)] {
            if !station.is_finite() {
                report.errors.push(PlanningError::invalid(
                    name,
                    format!("({}, {})", station.x, station.y),
                    "coordinates must be finite",
                ));
            }
        }

        for (name, sigma) in params.sigmas() {
            if !sigma.is_finite() || sigma <= 0.0 {
                report.errors.push(PlanningError::invalid(name, sigma, "must be positive and finite"));
            }
        }

        self.check_grid(grid, &mut report);

        // Warnings only make sense on otherwise valid input
        if report.is_valid() {
            self.check_warnings(station_a, station_b, params, grid, &mut report);
        }

        report
    }

    fn check_grid(&self, grid: &GridConfig, report: &mut ValidationReport) {
        if grid.steps == 0 {
            report.errors.push(PlanningError::invalid("steps", grid.steps, "must be at least 1"));
        }
        if !grid.spacing.is_finite() || grid.spacing <= 0.0 {
            report.errors.push(PlanningError::invalid("spacing", grid.spacing, "must be positive and finite"));
        }
    }

    fn check_warnings(
        &self,
        station_a: Point2D,
        station_b: Point2D,
        params: &ErrorParameters,
        grid: &GridConfig,
        report: &mut ValidationReport,
    ) {
        if station_a.vector_to(station_b).norm() < GEOMETRY_EPSILON {
            report.warnings.push(ValidationWarning::CoincidentStations { station: station_a });
        }

        if let ErrorParameters::DirectRange { sigma_d, sigma_r } = *params {
            let sin_alpha_min = std::f64::consts::SQRT_2 * sigma_r / sigma_d;
            if sin_alpha_min > 1.0 {
                report.warnings.push(ValidationWarning::UnreachableThreshold { sin_alpha_min });
            }
        }

        let samples = grid.sample_count();
        if samples > self.config.sample_budget {
            report.warnings.push(ValidationWarning::LargeSweep {
                samples,
                budget: self.config.sample_budget,
            });
        }
    }
}
