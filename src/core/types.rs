//! Core data types for the coverage planner

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Point in the planning plane (metres, origin at the platform start)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const ORIGIN: Point2D = Point2D { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Vector pointing from `self` to `target`
    pub fn vector_to(self, target: Point2D) -> Vector2<f64> {
        Vector2::new(target.x - self.x, target.y - self.y)
    }

    /// Distance from the origin
    pub fn radius(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<Vector2<f64>> for Point2D {
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Position-estimation method whose error region is being planned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Differential-range (range-difference) positioning
    DiffRange,
    /// Direct-range positioning
    DirectRange,
    /// Angle-measuring positioning
    AngleMeasuring,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::DiffRange, Method::DirectRange, Method::AngleMeasuring];

    pub fn name(&self) -> &'static str {
        match self {
            Method::DiffRange => "diff_range",
            Method::DirectRange => "direct_range",
            Method::AngleMeasuring => "angle_measuring",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Method-specific noise figures. Every sigma must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum ErrorParameters {
    DiffRange {
        /// Allowed position error
        sigma_r_allow: f64,
        /// Range-difference measurement error
        sigma_t: f64,
    },
    DirectRange {
        /// Allowed position error
        sigma_d: f64,
        /// Range measurement error
        sigma_r: f64,
    },
    AngleMeasuring {
        /// Allowed position error
        sigma_d: f64,
        /// Bearing measurement error (degrees)
        sigma_theta: f64,
    },
}

impl ErrorParameters {
    pub fn method(&self) -> Method {
        match self {
            ErrorParameters::DiffRange { .. } => Method::DiffRange,
            ErrorParameters::DirectRange { .. } => Method::DirectRange,
            ErrorParameters::AngleMeasuring { .. } => Method::AngleMeasuring,
        }
    }

    /// Named sigma values, in declaration order
    pub fn sigmas(&self) -> [(&'static str, f64); 2] {
        match *self {
            ErrorParameters::DiffRange { sigma_r_allow, sigma_t } => {
                [("sigma_r_allow", sigma_r_allow), ("sigma_t", sigma_t)]
            }
            ErrorParameters::DirectRange { sigma_d, sigma_r } => {
                [("sigma_d", sigma_d), ("sigma_r", sigma_r)]
            }
            ErrorParameters::AngleMeasuring { sigma_d, sigma_theta } => {
                [("sigma_d", sigma_d), ("sigma_theta", sigma_theta)]
            }
        }
    }
}

/// Radial layout of the polar sampling grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of radial steps per ray (P)
    pub steps: u32,
    /// Radial spacing between steps (r)
    pub spacing: f64,
}

impl GridConfig {
    pub fn new(steps: u32, spacing: f64) -> Self {
        Self { steps, spacing }
    }

    /// Outermost sampled radius
    pub fn max_radius(&self) -> f64 {
        self.steps as f64 * self.spacing
    }

    /// Total number of samples in one sweep
    pub fn sample_count(&self) -> usize {
        super::ANGULAR_STEPS * self.steps as usize
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { steps: 100, spacing: 0.5 }
    }
}

/// Outcome of one sweep: the acceptable region, its outline and station markers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionResult {
    pub method: Method,
    pub interior: Vec<Point2D>,
    pub outline: Vec<Point2D>,
    pub stations: Vec<Point2D>,
}

impl RegionResult {
    /// Number of samples classified acceptable
    pub fn accepted_count(&self) -> usize {
        self.interior.len() + self.outline.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interior.is_empty() && self.outline.is_empty()
    }

    pub fn summary(&self) -> RegionSummary {
        let max_radius = self
            .interior
            .iter()
            .chain(self.outline.iter())
            .map(|p| p.radius())
            .fold(0.0_f64, f64::max);

        RegionSummary {
            method: self.method,
            interior_count: self.interior.len(),
            outline_count: self.outline.len(),
            max_radius,
        }
    }
}

/// Compact statistics for display next to a plotted region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionSummary {
    pub method: Method,
    pub interior_count: usize,
    pub outline_count: usize,
    /// Largest distance from the origin of any accepted point (0 if empty)
    pub max_radius: f64,
}
