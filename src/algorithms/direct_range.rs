//! Direct-range error model
//!
//! Accuracy of a two-range fix depends on the angle between the lines of
//! position, so the model accepts samples where the stations are seen under
//! a sufficiently wide angle.

use crate::algorithms::model::ErrorModel;
use crate::algorithms::vector::sine_between;
use crate::core::{Method, Point2D};

#[derive(Debug, Clone)]
pub struct DirectRangeModel {
    station_a: Point2D,
    station_b: Point2D,
    /// `sqrt(2) · sigma_r / sigma_d`
    sin_alpha_min: f64,
}

impl DirectRangeModel {
    pub fn new(station_a: Point2D, station_b: Point2D, sigma_d: f64, sigma_r: f64) -> Self {
        Self {
            station_a,
            station_b,
            sin_alpha_min: std::f64::consts::SQRT_2 * sigma_r / sigma_d,
        }
    }

    pub fn sin_alpha_min(&self) -> f64 {
        self.sin_alpha_min
    }

    /// Sine of the angle AMB, or `None` if the sample sits on a station
    pub fn sin_alpha(&self, sample: Point2D) -> Option<f64> {
        let ma = sample.vector_to(self.station_a);
        let mb = sample.vector_to(self.station_b);
        sine_between(&ma, &mb)
    }
}

impl ErrorModel for DirectRangeModel {
    fn method(&self) -> Method {
        Method::DirectRange
    }

    fn classify(&self, sample: Point2D) -> bool {
        match self.sin_alpha(sample) {
            Some(sin_alpha) => sin_alpha >= self.sin_alpha_min,
            None => false,
        }
    }

    fn station_markers(&self) -> Vec<Point2D> {
        vec![self.station_a, self.station_b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_sample() {
        let model = DirectRangeModel::new(Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0), 10.0, 1.0);
        assert_relative_eq!(model.sin_alpha_min(), 0.1414213562373095, epsilon = 1e-12);

        // cos(AMB) = 9 / (3 · sqrt(109)) at M = (0, 3)
        let sample = Point2D::new(0.0, 3.0);
        let sin_alpha = model.sin_alpha(sample).unwrap();
        assert_relative_eq!(sin_alpha, 0.9578262852211513, epsilon = 1e-12);
        assert!(model.classify(sample));
    }

    #[test]
    fn test_threshold_above_one_rejects_everything() {
        let model = DirectRangeModel::new(Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0), 1.0, 1.0);
        // Perpendicular view of the baseline: sin(alpha) = 1
        assert!(!model.classify(Point2D::new(5.0, 5.0)));
    }

    #[test]
    fn test_collinear_sample_rejected() {
        let model = DirectRangeModel::new(Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0), 10.0, 1.0);
        assert_eq!(model.sin_alpha(Point2D::new(20.0, 0.0)), Some(0.0));
        assert!(!model.classify(Point2D::new(20.0, 0.0)));
        assert!(!model.classify(Point2D::new(10.0, 0.0)));
    }
}
