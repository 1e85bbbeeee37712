//! Vector primitives and the three error models

pub mod vector;
pub mod model;
pub mod diff_range;
pub mod direct_range;
pub mod angle_measuring;

pub use model::{build_model, ErrorModel, SamplingFrame};
pub use diff_range::DiffRangeModel;
pub use direct_range::DirectRangeModel;
pub use angle_measuring::AngleMeasuringModel;
