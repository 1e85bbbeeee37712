//! Region tracing along rays
//!
//! Every ray is classified in full first and then walked once. An
//! acceptable sample goes to the outline when it opens a run after a
//! rejected sample (rising edge) or closes a run before a rejected sample
//! (falling edge); every other acceptable sample is interior. Runs touching
//! the first or last radial step only get the opposite edge, and nothing is
//! carried from one ray to the next.

use crate::core::{Method, Point2D, RegionResult};

/// Tracer state while walking a ray
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RayState {
    Outside,
    Inside,
}

/// Interior and outline points contributed by one ray
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RayTrace {
    pub interior: Vec<Point2D>,
    pub outline: Vec<Point2D>,
    /// Number of maximal acceptable runs on the ray
    pub runs: usize,
}

/// Split the samples of one ray into interior and outline points.
///
/// `samples` and `accepted` are indexed by radial step, innermost first.
pub fn trace_ray(samples: &[Point2D], accepted: &[bool]) -> RayTrace {
    debug_assert_eq!(samples.len(), accepted.len());

    let mut trace = RayTrace::default();
    let mut state = RayState::Outside;

    for (k, (&point, &ok)) in samples.iter().zip(accepted).enumerate() {
        if !ok {
            state = RayState::Outside;
            continue;
        }

        let rising = state == RayState::Outside && k > 0;
        let falling = matches!(accepted.get(k + 1), Some(false));
        if state == RayState::Outside {
            trace.runs += 1;
        }

        if rising || falling {
            trace.outline.push(point);
        } else {
            trace.interior.push(point);
        }
        state = RayState::Inside;
    }

    trace
}

/// Accumulates ray traces into a region result
#[derive(Debug, Default)]
pub struct RegionTracer {
    interior: Vec<Point2D>,
    outline: Vec<Point2D>,
}

impl RegionTracer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the points of the next ray, in angle order
    pub fn absorb(&mut self, trace: RayTrace) {
        self.interior.extend(trace.interior);
        self.outline.extend(trace.outline);
    }

    pub fn finish(self, method: Method, stations: Vec<Point2D>) -> RegionResult {
        RegionResult {
            method,
            interior: self.interior,
            outline: self.outline,
            stations,
        }
    }
}
