//! Pinch, rotate, drag and scroll-step classification.
//!
//! Every pointer-set mutation is classified from a `before`/`after` pair of
//! snapshots:
//! - both sets hold the same single contact: drag
//! - both sets share the same leading pair: pinch + rotate
//! - anything else (a contact joined or left the pair): no output this frame
//!
//! Scroll steps are a second channel into the same `scale` field.

use crate::config::GestureConfig;
use crate::dispatcher::{DragEvent, PinchEvent, RotateEvent};
use crate::input::{PointerSet, ScrollDirection};
use crate::state::GestureState;
use gestura_geometry::{Point, Point3};

/// Result of classifying one pointer-set mutation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformOutcome {
    None,
    Drag(DragEvent),
    PinchRotate(PinchEvent, RotateEvent),
}

#[derive(Clone, Debug)]
pub struct TransformClassifier {
    min_scale: f32,
    max_scale: f32,
    pinch_epsilon: f32,
    drag_gain: f32,
    velocity_gain: f32,
    scroll_step: f32,
    rotation_depth_coupling: f32,
}

impl TransformClassifier {
    pub fn new(config: &GestureConfig) -> Self {
        Self {
            min_scale: config.min_scale,
            max_scale: config.max_scale,
            pinch_epsilon: config.pinch_epsilon_px,
            drag_gain: config.drag_gain,
            velocity_gain: config.velocity_gain,
            scroll_step: config.scroll_step,
            rotation_depth_coupling: config.rotation_depth_coupling,
        }
    }

    pub fn classify(
        &self,
        before: &PointerSet,
        after: &PointerSet,
        state: &mut GestureState,
    ) -> TransformOutcome {
        if let (Some(prev), Some(next)) = (before.single(), after.single()) {
            if prev.id == next.id {
                return self.drag(prev.position, next.position, state);
            }
            return TransformOutcome::None;
        }

        match (before.pair(), after.pair()) {
            (Some((a0, b0)), Some((a1, b1))) if a0.id == a1.id && b0.id == b1.id => self
                .pinch_rotate(
                    (a0.position, b0.position),
                    (a1.position, b1.position),
                    state,
                ),
            _ => TransformOutcome::None,
        }
    }

    /// Applies one discrete scroll step and reports the new scale at `anchor`.
    pub fn scroll(
        &self,
        direction: ScrollDirection,
        anchor: Point,
        state: &mut GestureState,
    ) -> PinchEvent {
        let target = state.scale + direction.sign() * self.scroll_step;
        state.scale = self.clamp_scale(target, state.scale);
        PinchEvent {
            scale: state.scale,
            center: anchor,
        }
    }

    fn drag(&self, from: Point, to: Point, state: &mut GestureState) -> TransformOutcome {
        let delta = (to - from).scale(self.drag_gain);
        let velocity = delta.scale(self.velocity_gain);
        let mut position = state.position;
        position += Point3::new(delta.x, delta.y, 0.0);
        if !velocity.is_finite() || !position.is_finite() {
            log::trace!("drag frame skipped, {from:?} -> {to:?} overflows");
            return TransformOutcome::None;
        }
        state.velocity = velocity;
        state.position = position;
        TransformOutcome::Drag(DragEvent {
            position: state.position,
            velocity: state.velocity,
        })
    }

    fn pinch_rotate(
        &self,
        (a0, b0): (Point, Point),
        (a1, b1): (Point, Point),
        state: &mut GestureState,
    ) -> TransformOutcome {
        let d0 = a0.distance_to(b0);
        if d0 < self.pinch_epsilon {
            log::trace!("pinch frame skipped, prior distance {d0}");
            return TransformOutcome::None;
        }
        let d1 = a1.distance_to(b1);
        state.scale = self.clamp_scale(state.scale * (d1 / d0), state.scale);

        let delta_degrees = wrap_degrees(a1.heading_degrees_to(b1) - a0.heading_degrees_to(b0));
        state.rotation_degrees += delta_degrees;
        state.position.z += delta_degrees * self.rotation_depth_coupling;

        TransformOutcome::PinchRotate(
            PinchEvent {
                scale: state.scale,
                center: a1.midpoint(b1),
            },
            RotateEvent {
                rotation: Point3::new(0.0, 0.0, state.rotation_degrees),
                delta_degrees,
            },
        )
    }

    /// Clamps `target` into bounds, keeping `current` if `target` is not finite.
    fn clamp_scale(&self, target: f32, current: f32) -> f32 {
        if target.is_finite() {
            target.clamp(self.min_scale, self.max_scale)
        } else {
            current
        }
    }
}

/// Wraps an angle difference into `(-180, 180]` so crossing the `atan2`
/// branch cut reads as a small turn.
fn wrap_degrees(delta: f32) -> f32 {
    if delta > 180.0 {
        delta - 360.0
    } else if delta <= -180.0 {
        delta + 360.0
    } else {
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{PointerId, PointerTracker};

    fn classifier() -> TransformClassifier {
        TransformClassifier::new(&GestureConfig::default())
    }

    fn snapshot(points: &[(u32, f32, f32)]) -> PointerSet {
        let mut tracker = PointerTracker::new();
        for &(id, x, y) in points {
            tracker.add_or_update(PointerId::touch(id), Point::new(x, y));
        }
        tracker.current().clone()
    }

    #[test]
    fn pinch_scales_by_distance_ratio() {
        let mut state = GestureState::new(1.0);
        let before = snapshot(&[(1, 100.0, 100.0), (2, 200.0, 100.0)]);
        let after = snapshot(&[(1, 90.0, 100.0), (2, 210.0, 100.0)]);

        let outcome = classifier().classify(&before, &after, &mut state);

        let TransformOutcome::PinchRotate(pinch, rotate) = outcome else {
            panic!("expected pinch, got {outcome:?}");
        };
        assert!((pinch.scale - 1.2).abs() < 1e-5);
        assert_eq!(pinch.center, Point::new(150.0, 100.0));
        assert_eq!(rotate.delta_degrees, 0.0);
        assert!((state.scale - 1.2).abs() < 1e-5);
    }

    #[test]
    fn pinch_clamps_to_bounds() {
        let mut state = GestureState::new(1.5);
        let before = snapshot(&[(1, 0.0, 0.0), (2, 10.0, 0.0)]);
        let after = snapshot(&[(1, 0.0, 0.0), (2, 100.0, 0.0)]);
        classifier().classify(&before, &after, &mut state);
        assert_eq!(state.scale, 2.0);

        let shrink = snapshot(&[(1, 0.0, 0.0), (2, 1.0, 0.0)]);
        classifier().classify(&after, &shrink, &mut state);
        assert_eq!(state.scale, 0.5);
    }

    #[test]
    fn coincident_prior_points_skip_frame() {
        let mut state = GestureState::new(1.0);
        let before = snapshot(&[(1, 50.0, 50.0), (2, 50.0, 50.0)]);
        let after = snapshot(&[(1, 0.0, 50.0), (2, 100.0, 50.0)]);

        let outcome = classifier().classify(&before, &after, &mut state);

        assert_eq!(outcome, TransformOutcome::None);
        assert_eq!(state, GestureState::new(1.0));
    }

    #[test]
    fn rotation_accumulates_and_nudges_depth() {
        let mut state = GestureState::new(1.0);
        let horizontal = snapshot(&[(1, 0.0, 0.0), (2, 100.0, 0.0)]);
        let vertical = snapshot(&[(1, 0.0, 0.0), (2, 0.0, 100.0)]);
        let c = classifier();

        c.classify(&horizontal, &vertical, &mut state);
        assert!((state.rotation_degrees - 90.0).abs() < 1e-3);
        assert!((state.position.z - 90.0 * crate::gesture_constants::ROTATION_DEPTH_COUPLING).abs() < 1e-3);

        c.classify(&vertical, &horizontal, &mut state);
        c.classify(&horizontal, &vertical, &mut state);
        c.classify(&vertical, &horizontal, &mut state);
        assert!(state.rotation_degrees.abs() < 1e-3);
    }

    #[test]
    fn rotation_across_branch_cut_is_small() {
        let mut state = GestureState::new(1.0);
        let before = snapshot(&[(1, 0.0, 0.0), (2, -100.0, 1.0)]);
        let after = snapshot(&[(1, 0.0, 0.0), (2, -100.0, -1.0)]);

        classifier().classify(&before, &after, &mut state);

        assert!(state.rotation_degrees.abs() < 2.0);
    }

    #[test]
    fn drag_applies_gains() {
        let mut state = GestureState::new(1.0);
        let before = snapshot(&[(1, 10.0, 10.0)]);
        let after = snapshot(&[(1, 30.0, 0.0)]);

        let outcome = classifier().classify(&before, &after, &mut state);

        assert_eq!(
            outcome,
            TransformOutcome::Drag(DragEvent {
                position: Point3::new(10.0, -5.0, 0.0),
                velocity: Point::new(1.0, -0.5),
            })
        );
    }

    #[test]
    fn overflowing_drag_is_skipped() {
        let mut state = GestureState::new(1.0);
        let before = snapshot(&[(1, -3.0e38, 0.0)]);
        let after = snapshot(&[(1, 3.0e38, 0.0)]);

        let outcome = classifier().classify(&before, &after, &mut state);

        assert_eq!(outcome, TransformOutcome::None);
        assert_eq!(state, GestureState::new(1.0));
    }

    #[test]
    fn pinch_center_of_far_apart_contacts_is_finite() {
        let mut state = GestureState::new(1.0);
        let before = snapshot(&[(1, 3.0e38, 0.0), (2, 2.9e38, 0.0)]);
        let after = snapshot(&[(1, 3.0e38, 0.0), (2, 2.8e38, 0.0)]);

        let TransformOutcome::PinchRotate(pinch, rotate) =
            classifier().classify(&before, &after, &mut state)
        else {
            panic!("expected pinch");
        };

        assert!(pinch.center.is_finite());
        assert!(pinch.scale.is_finite());
        assert!(rotate.rotation.is_finite());
        assert!((state.scale - 2.0).abs() < 1e-3);
    }

    #[test]
    fn membership_changes_produce_nothing() {
        let mut state = GestureState::new(1.0);
        let c = classifier();
        let one = snapshot(&[(1, 0.0, 0.0)]);
        let two = snapshot(&[(1, 0.0, 0.0), (2, 50.0, 0.0)]);
        let other = snapshot(&[(3, 5.0, 0.0)]);

        assert_eq!(c.classify(&PointerSet::new(), &one, &mut state), TransformOutcome::None);
        assert_eq!(c.classify(&one, &two, &mut state), TransformOutcome::None);
        assert_eq!(c.classify(&two, &one, &mut state), TransformOutcome::None);
        assert_eq!(c.classify(&one, &other, &mut state), TransformOutcome::None);
        assert_eq!(state, GestureState::new(1.0));
    }

    #[test]
    fn scroll_steps_clamp_and_hold() {
        let mut state = GestureState::new(1.0);
        let c = classifier();
        let expected = [0.9, 0.8, 0.7, 0.6, 0.5, 0.5];
        for want in expected {
            let pinch = c.scroll(ScrollDirection::Out, Point::ZERO, &mut state);
            assert!((pinch.scale - want).abs() < 1e-5, "{} != {}", pinch.scale, want);
            assert!(pinch.scale >= 0.5);
        }
    }
}
