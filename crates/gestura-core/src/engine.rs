//! The gesture engine: owns all recognizer state and sequences
//! tracker → classifier → dispatcher for every input.
//!
//! Processing of one input, including handler dispatch, completes before the
//! call returns. Handlers receive plain data and cannot reach back into the
//! engine, so there is no re-entrant processing.

use crate::config::{ConfigError, GestureConfig};
use crate::dispatcher::{GestureDispatcher, GestureEvent, TapEvent};
use crate::gestures::{
    project_to_placement, ShakeDetector, ShakeTracker, TapDisambiguator, TapKind, TapRecord,
    TransformClassifier, TransformOutcome,
};
use crate::input::{
    AccelerationSample, ContactChange, PointerId, PointerSet, PointerTracker, ScrollDirection,
};
use crate::motion::{MotionHandle, MotionShared};
use crate::state::GestureState;
use gestura_geometry::{Point, Point3, Rect};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

/// Supplies the container rectangle used to normalize tap positions.
///
/// Queried at tap-resolution time, never cached, since hosts may resize or
/// scroll between taps.
pub trait ContainerBounds {
    fn bounds(&self) -> Rect;
}

impl ContainerBounds for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}

impl ContainerBounds for Cell<Rect> {
    fn bounds(&self) -> Rect {
        self.get()
    }
}

impl<T: ContainerBounds + ?Sized> ContainerBounds for Rc<T> {
    fn bounds(&self) -> Rect {
        (**self).bounds()
    }
}

pub struct GestureEngine {
    config: GestureConfig,
    tracker: PointerTracker,
    classifier: TransformClassifier,
    taps: TapDisambiguator,
    motion: Arc<MotionShared>,
    state: GestureState,
    dispatcher: GestureDispatcher,
    container: Box<dyn ContainerBounds>,
    /// Set once the current press sequence holds two or more contacts;
    /// cleared when the last contact lifts.
    sequence_multi_touch: bool,
    detached: bool,
}

impl GestureEngine {
    /// Creates an engine with the default configuration.
    pub fn new(container: impl ContainerBounds + 'static) -> Self {
        Self::build(GestureConfig::default(), Box::new(container))
    }

    /// Creates an engine after validating `config`.
    pub fn with_config(
        config: GestureConfig,
        container: impl ContainerBounds + 'static,
    ) -> Result<Self, ConfigError> {
        if let Err(err) = config.validate() {
            log::warn!("rejected gesture config: {err}");
            return Err(err);
        }
        Ok(Self::build(config, Box::new(container)))
    }

    fn build(config: GestureConfig, container: Box<dyn ContainerBounds>) -> Self {
        let detector = ShakeDetector::new(
            config.shake_threshold,
            config.shake_window_ms,
            config.shake_repeat_threshold,
        );
        Self {
            tracker: PointerTracker::new(),
            classifier: TransformClassifier::new(&config),
            taps: TapDisambiguator::new(config.double_tap_window_ms, config.double_tap_distance_px),
            motion: MotionShared::new(detector),
            state: GestureState::new(initial_scale(&config)),
            dispatcher: GestureDispatcher::new(),
            container,
            sequence_multi_touch: false,
            detached: false,
            config,
        }
    }

    /// Handler table; register `on_tap`, `on_pinch`, ... here.
    pub fn handlers_mut(&mut self) -> &mut GestureDispatcher {
        &mut self.dispatcher
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn pointers(&self) -> &PointerSet {
        self.tracker.current()
    }

    pub fn pending_tap(&self) -> Option<TapRecord> {
        self.taps.pending()
    }

    pub fn shake_tracker(&self) -> ShakeTracker {
        self.motion.tracker()
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Handle for feeding acceleration samples from another thread.
    pub fn motion_handle(&self) -> MotionHandle {
        MotionHandle::new(Arc::clone(&self.motion))
    }

    /// A contact went down or moved.
    pub fn on_contact(&mut self, id: PointerId, position: Point) {
        if self.detached {
            return;
        }
        if !position.is_finite() {
            log::warn!("dropping non-finite position {position:?} for {id:?}");
            return;
        }

        let before = self.tracker.current().clone();
        if self.tracker.add_or_update(id, position) == ContactChange::Added {
            log::trace!("contact {id:?} down at {position:?}");
        }
        if self.tracker.len() >= 2 {
            self.sequence_multi_touch = true;
        }
        self.classify(&before);
    }

    /// A contact lifted at `time_ms`. Unknown ids are ignored.
    ///
    /// When the last contact lifts, the release is classified as a tap or
    /// double-tap unless the contact travelled past the drag threshold. With
    /// [`GestureConfig::suppress_tap_after_multi_touch`] set, sequences that
    /// ever held two contacts never tap either.
    pub fn on_contact_removed(&mut self, id: PointerId, time_ms: i64) {
        if self.detached {
            return;
        }
        let before = self.tracker.current().clone();
        let Some(contact) = self.tracker.remove(id) else {
            log::trace!("release of unknown contact {id:?} ignored");
            return;
        };
        self.classify(&before);

        if !self.tracker.is_empty() {
            return;
        }
        let multi_touch = std::mem::take(&mut self.sequence_multi_touch);
        if multi_touch && self.config.suppress_tap_after_multi_touch {
            log::trace!("multi-touch sequence ended");
            return;
        }
        if contact.max_travel > self.config.drag_threshold_px {
            log::trace!("drag ended after {} px", contact.max_travel);
            return;
        }
        self.resolve_tap(time_ms, contact.position);
    }

    /// A contact was cancelled by the platform; never produces a tap.
    pub fn on_contact_cancelled(&mut self, id: PointerId) {
        if self.detached {
            return;
        }
        let before = self.tracker.current().clone();
        if self.tracker.remove(id).is_none() {
            return;
        }
        self.classify(&before);
        if self.tracker.is_empty() {
            self.sequence_multi_touch = false;
        }
    }

    /// One discrete zoom step, anchored at `anchor` (screen space).
    pub fn on_scroll_step(&mut self, direction: ScrollDirection, anchor: Point) {
        if self.detached {
            return;
        }
        if !anchor.is_finite() {
            log::warn!("dropping scroll step with non-finite anchor {anchor:?}");
            return;
        }
        let pinch = self.classifier.scroll(direction, anchor, &mut self.state);
        log::trace!("scroll {direction:?} -> scale {}", pinch.scale);
        self.dispatcher.dispatch(GestureEvent::Pinch(pinch));
    }

    /// An acceleration sample from the engine's own thread.
    pub fn on_acceleration(&mut self, time_ms: i64, sample: AccelerationSample) {
        if self.detached {
            return;
        }
        if !sample.is_finite() {
            log::warn!("dropping non-finite acceleration {sample:?}");
            return;
        }
        if self.motion.sample(time_ms, sample, false) {
            log::debug!("shake at {time_ms}");
            self.dispatcher.dispatch(GestureEvent::Shake);
        }
    }

    /// Dispatches shakes detected through a [`MotionHandle`] since the last
    /// pump. Returns how many were dispatched.
    pub fn pump_motion(&mut self) -> u32 {
        if self.detached {
            return 0;
        }
        let pending = self.motion.take_pending();
        for _ in 0..pending {
            log::debug!("shake from motion handle");
            self.dispatcher.dispatch(GestureEvent::Shake);
        }
        pending
    }

    /// Restores the manipulation state to its initial value. Pointers, the
    /// pending tap and the shake tracker are untouched.
    pub fn reset(&mut self) {
        self.state = GestureState::new(initial_scale(&self.config));
    }

    /// Stops accepting input and clears all transient recognizer state.
    ///
    /// Idempotent. Registered handlers are dropped, and motion handles reject
    /// further samples.
    pub fn detach(&mut self) {
        if self.detached {
            return;
        }
        self.detached = true;
        self.tracker.clear();
        self.taps.clear();
        self.motion.detach();
        self.dispatcher.clear();
        self.sequence_multi_touch = false;
        log::debug!("gesture engine detached");
    }

    fn classify(&mut self, before: &PointerSet) {
        let outcome = self
            .classifier
            .classify(before, self.tracker.current(), &mut self.state);
        match outcome {
            TransformOutcome::None => {}
            TransformOutcome::Drag(drag) => {
                log::trace!("drag -> {:?}", drag.position);
                self.dispatcher.dispatch(GestureEvent::Drag(drag));
            }
            TransformOutcome::PinchRotate(pinch, rotate) => {
                log::trace!(
                    "pinch -> scale {}, rotate {} deg",
                    pinch.scale,
                    rotate.rotation.z
                );
                self.dispatcher.dispatch(GestureEvent::Pinch(pinch));
                self.dispatcher.dispatch(GestureEvent::Rotate(rotate));
            }
        }
    }

    fn resolve_tap(&mut self, time_ms: i64, release: Point) {
        let depth = self.state.position.z;
        let bounds = self.container.bounds();
        let position = project_to_placement(bounds, release, depth).unwrap_or_else(|| {
            log::warn!("cannot project {release:?} into {bounds:?}, tap placed at origin");
            Point3::new(0.0, 0.0, depth)
        });

        let event = TapEvent { position };
        match self.taps.resolve(time_ms, release) {
            TapKind::Single => {
                log::debug!("tap at {position:?}");
                self.dispatcher.dispatch(GestureEvent::Tap(event));
            }
            TapKind::Double => {
                log::debug!("double tap at {position:?}");
                self.dispatcher.dispatch(GestureEvent::DoubleTap(event));
            }
        }
    }
}

impl Drop for GestureEngine {
    fn drop(&mut self) {
        self.detach();
    }
}

fn initial_scale(config: &GestureConfig) -> f32 {
    config.clamp_scale(crate::gesture_constants::INITIAL_SCALE)
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
