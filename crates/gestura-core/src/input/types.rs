use gestura_geometry::Point;

/// Identifier of one active contact.
///
/// Touch identifiers come from the platform and are only unique among
/// contacts that are currently down. The mouse gets the reserved
/// [`PointerId::MOUSE`], which assumes at most one non-touch pointer at a
/// time.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct PointerId(pub u64);

impl PointerId {
    /// Reserved identifier for the (single) mouse pointer.
    pub const MOUSE: PointerId = PointerId(u64::MAX);

    /// Identifier for a platform touch. Touch identifiers are 32-bit, so they
    /// can never reach [`PointerId::MOUSE`].
    pub const fn touch(identifier: u32) -> Self {
        PointerId(identifier as u64)
    }

    pub fn is_mouse(&self) -> bool {
        *self == Self::MOUSE
    }
}

/// One tracked contact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactPoint {
    pub id: PointerId,
    pub position: Point,
    /// Where the contact went down.
    pub press_position: Point,
    /// Furthest distance from `press_position` seen so far.
    pub max_travel: f32,
}

impl ContactPoint {
    pub fn new(id: PointerId, position: Point) -> Self {
        Self {
            id,
            position,
            press_position: position,
            max_travel: 0.0,
        }
    }

    /// Moves the contact, keeping the press origin.
    pub fn move_to(&mut self, position: Point) {
        self.position = position;
        self.max_travel = self
            .max_travel
            .max(self.press_position.distance_to(position));
    }
}

/// Direction of a discrete scroll step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Zoom in (`+1`).
    In,
    /// Zoom out (`-1`).
    Out,
}

impl ScrollDirection {
    pub fn sign(&self) -> f32 {
        match self {
            ScrollDirection::In => 1.0,
            ScrollDirection::Out => -1.0,
        }
    }

    /// Maps a wheel delta to a step. Negative deltas (wheel pushed away from
    /// the user) zoom in; a zero delta is no step.
    pub fn from_wheel_delta(delta: f64) -> Option<Self> {
        if delta < 0.0 {
            Some(ScrollDirection::In)
        } else if delta > 0.0 {
            Some(ScrollDirection::Out)
        } else {
            None
        }
    }
}

/// One accelerometer reading. Units are whatever the source reports; the
/// shake threshold must be calibrated to the same unit.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct AccelerationSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl AccelerationSample {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}
