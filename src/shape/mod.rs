//! Shapes the shield queries operate on.

pub use self::ellipsoid::Ellipsoid;
pub use self::oriented_box::{OrientedBox, CENTER_SLOT, CORNER_SIGNS, OBB_EDGES};
#[doc(inline)]
pub use self::support_map::SupportMap;
pub use self::triangle::Triangle;

mod ellipsoid;
mod oriented_box;
#[doc(hidden)]
pub mod support_map;
mod triangle;
