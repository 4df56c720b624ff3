pub mod tracker;
pub mod types;

pub use tracker::{ContactChange, PointerSet, PointerTracker};
pub use types::{AccelerationSample, ContactPoint, PointerId, ScrollDirection};

pub mod prelude {
    pub use super::tracker::{PointerSet, PointerTracker};
    pub use super::types::{AccelerationSample, ContactPoint, PointerId, ScrollDirection};
}
