//! Assertion utilities for robot testing
//!
//! This module provides assertion helpers specifically designed for
//! validating recorded gesture events.

use gestura_core::{GestureConfig, GestureEvent};
use gestura_geometry::{Point, Point3};

/// Assert that a value is within an expected range.
///
/// Gesture math runs in `f32`, so scale and position checks need a tolerance.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

pub fn assert_point_approx_eq(actual: Point, expected: Point, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
}

pub fn assert_point3_approx_eq(actual: Point3, expected: Point3, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
    assert_approx_eq(actual.z, expected.z, tolerance, &format!("{} - z", msg));
}

/// Assert the recorded event kinds, in order.
pub fn assert_event_names(events: &[GestureEvent], expected: &[&str], msg: &str) {
    let names: Vec<&str> = events.iter().map(GestureEvent::name).collect();
    assert_eq!(names, expected, "{}: unexpected event sequence", msg);
}

/// Scales carried by every pinch event, in order.
pub fn pinch_scales(events: &[GestureEvent]) -> Vec<f32> {
    events
        .iter()
        .filter_map(|event| match event {
            GestureEvent::Pinch(pinch) => Some(pinch.scale),
            _ => None,
        })
        .collect()
}

/// Assert that every pinch scale is finite and within the configured bounds.
pub fn assert_scales_in_bounds(events: &[GestureEvent], config: &GestureConfig, msg: &str) {
    for scale in pinch_scales(events) {
        assert!(
            scale.is_finite() && scale >= config.min_scale && scale <= config.max_scale,
            "{}: scale {} outside [{}, {}]",
            msg,
            scale,
            config.min_scale,
            config.max_scale
        );
    }
}

/// Count events of one kind.
pub fn count_named(events: &[GestureEvent], name: &str) -> usize {
    events.iter().filter(|event| event.name() == name).count()
}
