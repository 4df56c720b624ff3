//! Pure math/data for gesture geometry in Gestura
//!
//! This crate contains the point and rectangle primitives shared by the
//! gesture engine, its platform adapters and the testing harness.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Point3, Rect};
}
