//! Grid and numeric constants shared by the sweep

/// Number of angular rays per revolution (0.1° step)
pub const ANGULAR_STEPS: usize = 3600;

/// Angular step between neighbouring rays (degrees)
pub const ANGLE_STEP_DEG: f64 = 0.1;

/// Magnitudes and denominators below this value are treated as zero
pub const GEOMETRY_EPSILON: f64 = 1e-12;

/// Degree-to-radian factor used by the angle-measuring error budget
pub const ANGLE_ERROR_SCALE: f64 = 0.017;
