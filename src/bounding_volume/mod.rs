//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::aabb::Aabb;
#[doc(inline)]
pub use crate::bounding_volume::cell_range::CellRange;

#[doc(hidden)]
pub mod aabb;
#[doc(hidden)]
pub mod cell_range;
