//! Differential-range error model
//!
//! The platform measures range differences to the two stations relative to
//! its start point at the origin. The error coefficient grows as the angles
//! subtended at the sample by the origin and each station shrink.

use crate::algorithms::model::{ErrorModel, SamplingFrame};
use crate::algorithms::vector::cosine_between;
use crate::core::{Method, Point2D, GEOMETRY_EPSILON};

#[derive(Debug, Clone)]
pub struct DiffRangeModel {
    station_a: Point2D,
    station_b: Point2D,
    /// Allowed error ratio `sigma_r_allow / sigma_t`
    allowed_ratio: f64,
}

impl DiffRangeModel {
    pub fn new(station_a: Point2D, station_b: Point2D, sigma_r_allow: f64, sigma_t: f64) -> Self {
        Self {
            station_a,
            station_b,
            allowed_ratio: sigma_r_allow / sigma_t,
        }
    }

    pub fn allowed_ratio(&self) -> f64 {
        self.allowed_ratio
    }

    /// Coefficient assigned to samples whose geometry is undefined.
    /// Always exceeds the allowed ratio so the sample is rejected.
    pub fn fallback_coefficient(&self) -> f64 {
        self.allowed_ratio + 1.0
    }

    /// Error coefficient `Kr` at the sample
    pub fn coefficient(&self, sample: Point2D) -> f64 {
        let m0 = sample.vector_to(Point2D::ORIGIN);
        let v1 = sample.vector_to(self.station_a);
        let v2 = sample.vector_to(self.station_b);

        let (cos1, cos2) = match (cosine_between(&m0, &v1), cosine_between(&m0, &v2)) {
            (Some(c1), Some(c2)) => (c1, c2),
            _ => return self.fallback_coefficient(),
        };

        let psi1 = cos1.acos();
        let psi2 = cos2.acos();
        let half1 = (psi1 / 2.0).sin();
        let half2 = (psi2 / 2.0).sin();

        let denominator = 2.0 * ((psi1 + psi2) / 2.0).sin() * half1 * half2;
        if denominator.abs() < GEOMETRY_EPSILON {
            return self.fallback_coefficient();
        }

        (half1 * half1 + half2 * half2).sqrt() / denominator
    }
}

impl ErrorModel for DiffRangeModel {
    fn method(&self) -> Method {
        Method::DiffRange
    }

    fn frame(&self) -> SamplingFrame {
        SamplingFrame::SinCos
    }

    fn classify(&self, sample: Point2D) -> bool {
        self.coefficient(sample) < self.allowed_ratio
    }

    fn station_markers(&self) -> Vec<Point2D> {
        vec![Point2D::ORIGIN, self.station_a, self.station_b]
    }
}
