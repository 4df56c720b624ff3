//! Shared gesture constants for consistent touch/pointer handling.
//!
//! These are the defaults behind [`GestureConfig`](crate::GestureConfig).
//! Distances are in logical (CSS) pixels, times in milliseconds.
//!
//! # DPI Considerations
//!
//! Pixel thresholds are not scaled by device density. For very high-density
//! touch screens, consider passing scaled values through the config.

/// Lower bound for the manipulated object's scale.
pub const MIN_SCALE: f32 = 0.5;

/// Upper bound for the manipulated object's scale.
pub const MAX_SCALE: f32 = 2.0;

/// Scale the engine starts at and returns to on reset (clamped into bounds).
pub const INITIAL_SCALE: f32 = 1.0;

/// Two releases closer together in time than this form a double-tap.
pub const DOUBLE_TAP_WINDOW_MS: i64 = 300;

/// Two releases closer together in space than this form a double-tap.
pub const DOUBLE_TAP_DISTANCE_PX: f32 = 30.0;

/// Drag threshold in logical pixels.
///
/// If a contact travels further than this from its press position, its
/// release is a drag-end and never classified as a tap.
///
/// Matches common platform conventions (Android uses ~8dp for
/// ViewConfiguration.TOUCH_SLOP).
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Prior inter-point distances below this skip the pinch frame instead of
/// dividing by (nearly) zero.
pub const PINCH_EPSILON: f32 = 1e-3;

/// Acceleration magnitude a sample must exceed to count towards a shake.
///
/// Calibrated for m/s² including gravity, as reported by `devicemotion`.
pub const SHAKE_THRESHOLD: f32 = 20.0;

/// Qualifying samples further apart than this restart the shake count.
pub const SHAKE_WINDOW_MS: i64 = 1_000;

/// Qualifying samples within one window needed to emit a shake.
pub const SHAKE_REPEAT_THRESHOLD: u32 = 2;

/// Multiplier from raw pointer pixels to drag position units.
pub const DRAG_GAIN: f32 = 0.5;

/// Multiplier from drag position delta to reported velocity.
pub const VELOCITY_GAIN: f32 = 0.1;

/// Scale change per discrete scroll step.
pub const SCROLL_STEP: f32 = 0.1;

/// Depth nudge per degree of two-point rotation.
///
/// A UX coupling rather than physics: it gives two-finger rotation a
/// pseudo-3D feel.
pub const ROTATION_DEPTH_COUPLING: f32 = 0.05;

/// Half-extent of normalized placement space; taps land in `-100..=100`.
pub const PLACEMENT_EXTENT: f32 = 100.0;
