//! Engine configuration.

use crate::gesture_constants::*;
use std::fmt;

/// Tunables for every recognizer in the engine.
///
/// All fields are public; `Default` carries the values from
/// [`gesture_constants`](crate::gesture_constants). Use [`validate`](Self::validate)
/// (or [`GestureEngine::with_config`](crate::GestureEngine::with_config), which
/// calls it) before handing a hand-built config to the engine.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureConfig {
    pub min_scale: f32,
    pub max_scale: f32,
    pub double_tap_window_ms: i64,
    pub double_tap_distance_px: f32,
    pub drag_threshold_px: f32,
    pub pinch_epsilon_px: f32,
    pub shake_threshold: f32,
    pub shake_window_ms: i64,
    pub shake_repeat_threshold: u32,
    pub drag_gain: f32,
    pub velocity_gain: f32,
    pub scroll_step: f32,
    pub rotation_depth_coupling: f32,
    /// When set, a release that ends a sequence which ever held two or more
    /// contacts is never a tap. Off by default: the last lift of any sequence
    /// is a tap unless it ends a drag.
    pub suppress_tap_after_multi_touch: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            double_tap_window_ms: DOUBLE_TAP_WINDOW_MS,
            double_tap_distance_px: DOUBLE_TAP_DISTANCE_PX,
            drag_threshold_px: DRAG_THRESHOLD,
            pinch_epsilon_px: PINCH_EPSILON,
            shake_threshold: SHAKE_THRESHOLD,
            shake_window_ms: SHAKE_WINDOW_MS,
            shake_repeat_threshold: SHAKE_REPEAT_THRESHOLD,
            drag_gain: DRAG_GAIN,
            velocity_gain: VELOCITY_GAIN,
            scroll_step: SCROLL_STEP,
            rotation_depth_coupling: ROTATION_DEPTH_COUPLING,
            suppress_tap_after_multi_touch: false,
        }
    }
}

impl GestureConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scale_bounds(mut self, min_scale: f32, max_scale: f32) -> Self {
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self
    }

    pub fn with_double_tap(mut self, window_ms: i64, distance_px: f32) -> Self {
        self.double_tap_window_ms = window_ms;
        self.double_tap_distance_px = distance_px;
        self
    }

    pub fn with_drag_threshold(mut self, threshold_px: f32) -> Self {
        self.drag_threshold_px = threshold_px;
        self
    }

    pub fn with_shake(mut self, threshold: f32, window_ms: i64, repeat_threshold: u32) -> Self {
        self.shake_threshold = threshold;
        self.shake_window_ms = window_ms;
        self.shake_repeat_threshold = repeat_threshold;
        self
    }

    pub fn with_drag_gains(mut self, drag_gain: f32, velocity_gain: f32) -> Self {
        self.drag_gain = drag_gain;
        self.velocity_gain = velocity_gain;
        self
    }

    pub fn with_scroll_step(mut self, step: f32) -> Self {
        self.scroll_step = step;
        self
    }

    pub fn with_rotation_depth_coupling(mut self, coupling: f32) -> Self {
        self.rotation_depth_coupling = coupling;
        self
    }

    pub fn with_multi_touch_tap_suppression(mut self, suppress: bool) -> Self {
        self.suppress_tap_after_multi_touch = suppress;
        self
    }

    /// Clamps `scale` into `[min_scale, max_scale]`.
    pub fn clamp_scale(&self, scale: f32) -> f32 {
        scale.clamp(self.min_scale, self.max_scale)
    }

    /// Checks that every field can be used without producing non-finite or
    /// out-of-range output.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("min_scale", self.min_scale),
            ("max_scale", self.max_scale),
            ("double_tap_distance_px", self.double_tap_distance_px),
            ("drag_threshold_px", self.drag_threshold_px),
            ("pinch_epsilon_px", self.pinch_epsilon_px),
            ("shake_threshold", self.shake_threshold),
            ("drag_gain", self.drag_gain),
            ("velocity_gain", self.velocity_gain),
            ("scroll_step", self.scroll_step),
            ("rotation_depth_coupling", self.rotation_depth_coupling),
        ];
        if let Some((field, _)) = finite.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::NonFinite { field: *field });
        }

        let positive = [
            ("min_scale", self.min_scale),
            ("double_tap_distance_px", self.double_tap_distance_px),
            ("pinch_epsilon_px", self.pinch_epsilon_px),
            ("scroll_step", self.scroll_step),
        ];
        if let Some((field, _)) = positive.iter().find(|(_, value)| *value <= 0.0) {
            return Err(ConfigError::NonPositive { field: *field });
        }
        if self.drag_threshold_px < 0.0 {
            return Err(ConfigError::NonPositive {
                field: "drag_threshold_px",
            });
        }
        if self.shake_threshold < 0.0 {
            return Err(ConfigError::NonPositive {
                field: "shake_threshold",
            });
        }
        if self.double_tap_window_ms <= 0 {
            return Err(ConfigError::NonPositive {
                field: "double_tap_window_ms",
            });
        }
        if self.shake_window_ms <= 0 {
            return Err(ConfigError::NonPositive {
                field: "shake_window_ms",
            });
        }
        if self.shake_repeat_threshold == 0 {
            return Err(ConfigError::NonPositive {
                field: "shake_repeat_threshold",
            });
        }
        if self.min_scale > self.max_scale {
            return Err(ConfigError::InvertedScaleBounds {
                min: self.min_scale,
                max: self.max_scale,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonFinite { field: &'static str },
    NonPositive { field: &'static str },
    InvertedScaleBounds { min: f32, max: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonFinite { field } => write!(f, "`{field}` must be finite"),
            ConfigError::NonPositive { field } => write!(f, "`{field}` must be positive"),
            ConfigError::InvertedScaleBounds { min, max } => {
                write!(f, "min_scale {min} is greater than max_scale {max}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GestureConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.min_scale, 0.5);
        assert_eq!(config.max_scale, 2.0);
        assert_eq!(config.double_tap_window_ms, 300);
        assert_eq!(config.shake_repeat_threshold, 2);
    }

    #[test]
    fn inverted_bounds_rejected() {
        let config = GestureConfig::new().with_scale_bounds(3.0, 1.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedScaleBounds { min: 3.0, max: 1.0 })
        );
    }

    #[test]
    fn non_finite_and_non_positive_rejected() {
        let nan_gain = GestureConfig::new().with_drag_gains(f32::NAN, 0.1);
        assert_eq!(
            nan_gain.validate(),
            Err(ConfigError::NonFinite { field: "drag_gain" })
        );

        let zero_min = GestureConfig::new().with_scale_bounds(0.0, 2.0);
        assert_eq!(
            zero_min.validate(),
            Err(ConfigError::NonPositive { field: "min_scale" })
        );

        let zero_repeat = GestureConfig::new().with_shake(20.0, 1_000, 0);
        assert_eq!(
            zero_repeat.validate(),
            Err(ConfigError::NonPositive {
                field: "shake_repeat_threshold"
            })
        );
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = ConfigError::NonPositive {
            field: "scroll_step",
        };
        assert_eq!(err.to_string(), "`scroll_step` must be positive");
    }
}
