use crate::math::Real;

/// Local-space squared length at or below which a point is inside a shield.
pub const INSIDE_THRESHOLD: Real = 1.0;

/// Local-space squared length at or below which a point is considered near a shield.
pub const NEAR_THRESHOLD: Real = 2.0;

/// Number of samples of the low-resolution geodesic tessellation of a shield.
pub const LOW_RES_SAMPLES: usize = 162;

/// Number of samples of the high-resolution geodesic tessellation of a shield.
pub const HIGH_RES_SAMPLES: usize = 642;

/// Duration of one simulation step, in seconds.
pub const PHYSICS_STEP: Real = 1.0 / 60.0;

/// Cross-product axes with a squared length at or below this value are skipped by SAT tests.
pub const SAT_AXIS_EPSILON: Real = 1.0e-6;
