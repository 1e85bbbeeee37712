//! Classifier capability shared by the three error models

use crate::algorithms::angle_measuring::AngleMeasuringModel;
use crate::algorithms::diff_range::DiffRangeModel;
use crate::algorithms::direct_range::DirectRangeModel;
use crate::core::{ErrorParameters, Method, Point2D};

/// Orientation of the polar sampling frame.
///
/// The differential-range method samples with `(sin, cos)`, which rotates its
/// frame relative to the other methods; both layouts must be kept as they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingFrame {
    /// `(cos(angle)·ρ, sin(angle)·ρ)`
    CosSin,
    /// `(sin(angle)·ρ, cos(angle)·ρ)`
    SinCos,
}

impl SamplingFrame {
    pub fn point(&self, angle_rad: f64, radius: f64) -> Point2D {
        let (sin, cos) = angle_rad.sin_cos();
        match self {
            SamplingFrame::CosSin => Point2D::new(cos * radius, sin * radius),
            SamplingFrame::SinCos => Point2D::new(sin * radius, cos * radius),
        }
    }
}

/// Error model deciding whether a sample lies within the allowed error bound
pub trait ErrorModel: Send + Sync {
    fn method(&self) -> Method;

    /// Sampling frame the sweep must use for this model
    fn frame(&self) -> SamplingFrame {
        SamplingFrame::CosSin
    }

    /// Whether the sample point is acceptable. Degenerate geometry rejects.
    fn classify(&self, sample: Point2D) -> bool;

    /// Markers plotted alongside the region
    fn station_markers(&self) -> Vec<Point2D>;
}

/// Build the error model matching the supplied parameters
pub fn build_model(
    station_a: Point2D,
    station_b: Point2D,
    params: &ErrorParameters,
) -> Box<dyn ErrorModel> {
    match *params {
        ErrorParameters::DiffRange { sigma_r_allow, sigma_t } => {
            Box::new(DiffRangeModel::new(station_a, station_b, sigma_r_allow, sigma_t))
        }
        ErrorParameters::DirectRange { sigma_d, sigma_r } => {
            Box::new(DirectRangeModel::new(station_a, station_b, sigma_d, sigma_r))
        }
        ErrorParameters::AngleMeasuring { sigma_d, sigma_theta } => {
            Box::new(AngleMeasuringModel::new(station_a, station_b, sigma_d, sigma_theta))
        }
    }
}
