//! Grid sampling, region tracing and the sweep that ties them together

pub mod grid;
pub mod tracer;
pub mod sweep;

pub use grid::GridSampler;
pub use tracer::{trace_ray, RayTrace, RegionTracer};
pub use sweep::{CancellationToken, Sweep, SweepOptions, SweepProgress};
