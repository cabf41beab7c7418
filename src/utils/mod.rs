//! Various unsorted geometrical operators.

pub use self::center::center;
pub use self::consts::*;
pub use self::transform::{linear_part, transform_point, transform_vector};

mod center;
mod consts;
mod transform;
