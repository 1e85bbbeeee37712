//! Polar sampling grid

use crate::algorithms::SamplingFrame;
use crate::core::{GridConfig, Point2D, ANGLE_STEP_DEG, ANGULAR_STEPS};
use std::f64::consts::PI;

/// Enumerates sample points ray by ray.
///
/// Angle indices run `1..=3600` (angle `j · 0.1°`, so the domain is
/// `(0°, 360°]`); radial indices run `1..=P`. Radius 0 is never produced.
#[derive(Debug, Clone, Copy)]
pub struct GridSampler {
    grid: GridConfig,
    frame: SamplingFrame,
}

impl GridSampler {
    pub fn new(grid: GridConfig, frame: SamplingFrame) -> Self {
        Self { grid, frame }
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    /// Angle indices in traversal order
    pub fn angle_indices(&self) -> std::ops::RangeInclusive<usize> {
        1..=ANGULAR_STEPS
    }

    /// Angle of ray `angle_index` in radians
    pub fn angle(angle_index: usize) -> f64 {
        angle_index as f64 * ANGLE_STEP_DEG * PI / 180.0
    }

    /// Sample at `(angle_index, radial_index)`
    pub fn point(&self, angle_index: usize, radial_index: u32) -> Point2D {
        let radius = radial_index as f64 * self.grid.spacing;
        self.frame.point(Self::angle(angle_index), radius)
    }

    /// Samples of one ray in increasing radius
    pub fn ray(&self, angle_index: usize) -> impl Iterator<Item = Point2D> + '_ {
        (1..=self.grid.steps).map(move |i| self.point(angle_index, i))
    }
}
