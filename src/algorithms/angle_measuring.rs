//! Angle-measuring error model

use crate::algorithms::model::ErrorModel;
use crate::algorithms::vector::{magnitude, sine_between};
use crate::core::{Method, Point2D, ANGLE_ERROR_SCALE, GEOMETRY_EPSILON};

#[derive(Debug, Clone)]
pub struct AngleMeasuringModel {
    station_a: Point2D,
    station_b: Point2D,
    /// Baseline length |AB|
    baseline: f64,
    /// `sigma_d / (|AB| · sigma_theta)`; infinite for coincident stations
    limit: f64,
}

impl AngleMeasuringModel {
    pub fn new(station_a: Point2D, station_b: Point2D, sigma_d: f64, sigma_theta: f64) -> Self {
        let baseline = magnitude(&station_a.vector_to(station_b));
        Self {
            station_a,
            station_b,
            baseline,
            limit: sigma_d / (baseline * sigma_theta),
        }
    }

    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    /// Error coefficient `Kr` at the sample.
    ///
    /// `None` when the coefficient is undefined: coincident stations, a
    /// sample on a station, or stations collinear with the sample.
    pub fn coefficient(&self, sample: Point2D) -> Option<f64> {
        if self.baseline < GEOMETRY_EPSILON {
            return None;
        }

        let ma = sample.vector_to(self.station_a);
        let mb = sample.vector_to(self.station_b);
        let sin_alpha = sine_between(&ma, &mb)?;
        if sin_alpha < GEOMETRY_EPSILON {
            return None;
        }

        let ra = magnitude(&ma) / self.baseline;
        let rb = magnitude(&mb) / self.baseline;
        Some(ANGLE_ERROR_SCALE / sin_alpha * (ra * ra + rb * rb).sqrt())
    }
}

impl ErrorModel for AngleMeasuringModel {
    fn method(&self) -> Method {
        Method::AngleMeasuring
    }

    fn classify(&self, sample: Point2D) -> bool {
        match self.coefficient(sample) {
            Some(kr) => kr <= self.limit,
            None => false,
        }
    }

    fn station_markers(&self) -> Vec<Point2D> {
        vec![self.station_a, self.station_b]
    }
}
