use gestura_geometry::{Point, Point3};

/// Accumulated manipulation of the target object.
///
/// Mutated incrementally by the classifiers; only [`GestureEngine::reset`]
/// restores it.
///
/// [`GestureEngine::reset`]: crate::GestureEngine::reset
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureState {
    /// Always within the configured scale bounds.
    pub scale: f32,
    /// Unbounded; accumulates freely in both directions.
    pub rotation_degrees: f32,
    pub position: Point3,
    pub velocity: Point,
}

impl GestureState {
    pub fn new(scale: f32) -> Self {
        Self {
            scale,
            rotation_degrees: 0.0,
            position: Point3::ZERO,
            velocity: Point::ZERO,
        }
    }
}
