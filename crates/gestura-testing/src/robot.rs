//! Robot testing framework for scripted gesture sessions
//!
//! This module provides a robot-style API that:
//! - Drives a real [`GestureEngine`] with touch, mouse, scroll and motion input
//! - Owns a virtual clock so time windows are deterministic
//! - Records every emitted [`GestureEvent`] in dispatch order
//!
//! # Example
//!
//! ```
//! use gestura_testing::robot::GestureRobot;
//!
//! let mut robot = GestureRobot::new(400.0, 300.0);
//!
//! robot.tap_at(200.0, 150.0);
//! robot.advance_time(100);
//! robot.tap_at(205.0, 150.0);
//!
//! assert_eq!(robot.event_names(), vec!["tap", "double_tap"]);
//! ```

use gestura_core::{
    AccelerationSample, ConfigError, GestureConfig, GestureEngine, GestureEvent, PointerId,
    ScrollDirection,
};
use gestura_geometry::{Point, Rect};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Touch id used by the single-finger helpers.
pub const PRIMARY_TOUCH: PointerId = PointerId::touch(0);
/// Second finger for two-finger helpers.
pub const SECONDARY_TOUCH: PointerId = PointerId::touch(1);

/// Interval between generated move frames (one 60 Hz frame).
pub const FRAME_MS: i64 = 16;

/// Programmatic control over a [`GestureEngine`] with event recording.
///
/// The robot registers every handler on the engine; registering your own
/// through [`engine_mut`](Self::engine_mut) replaces the recorder for that
/// gesture.
pub struct GestureRobot {
    engine: GestureEngine,
    bounds: Rc<Cell<Rect>>,
    now_ms: i64,
    events: Rc<RefCell<Vec<GestureEvent>>>,
}

impl GestureRobot {
    /// Create a robot over a `width` x `height` container at the origin with
    /// the default configuration.
    pub fn new(width: f32, height: f32) -> Self {
        let bounds = Rc::new(Cell::new(Rect::new(0.0, 0.0, width, height)));
        let engine = GestureEngine::new(Rc::clone(&bounds));
        Self::attach(engine, bounds)
    }

    /// Create a robot with a custom configuration.
    pub fn with_config(width: f32, height: f32, config: GestureConfig) -> Result<Self, ConfigError> {
        let bounds = Rc::new(Cell::new(Rect::new(0.0, 0.0, width, height)));
        let engine = GestureEngine::with_config(config, Rc::clone(&bounds))?;
        Ok(Self::attach(engine, bounds))
    }

    fn attach(mut engine: GestureEngine, bounds: Rc<Cell<Rect>>) -> Self {
        let events = Rc::new(RefCell::new(Vec::new()));
        let record = |events: &Rc<RefCell<Vec<GestureEvent>>>| {
            let events = Rc::clone(events);
            move |event: GestureEvent| events.borrow_mut().push(event)
        };
        let tap = record(&events);
        let double_tap = record(&events);
        let pinch = record(&events);
        let rotate = record(&events);
        let drag = record(&events);
        let shake = record(&events);
        engine
            .handlers_mut()
            .on_tap(move |e| tap(GestureEvent::Tap(e)))
            .on_double_tap(move |e| double_tap(GestureEvent::DoubleTap(e)))
            .on_pinch(move |e| pinch(GestureEvent::Pinch(e)))
            .on_rotate(move |e| rotate(GestureEvent::Rotate(e)))
            .on_drag(move |e| drag(GestureEvent::Drag(e)))
            .on_shake(move || shake(GestureEvent::Shake));

        Self {
            engine,
            bounds,
            now_ms: 0,
            events,
        }
    }

    pub fn engine(&self) -> &GestureEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut GestureEngine {
        &mut self.engine
    }

    /// Current virtual time in milliseconds.
    pub fn now_ms(&self) -> i64 {
        self.now_ms
    }

    /// Advance the virtual clock.
    pub fn advance_time(&mut self, millis: i64) {
        self.now_ms += millis;
        log::trace!("robot clock at {} ms", self.now_ms);
    }

    /// Move or resize the container (simulates layout change or scroll).
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds.set(bounds);
    }

    pub fn bounds(&self) -> Rect {
        self.bounds.get()
    }

    pub fn press(&mut self, id: PointerId, x: f32, y: f32) {
        self.engine.on_contact(id, Point::new(x, y));
    }

    pub fn move_to(&mut self, id: PointerId, x: f32, y: f32) {
        self.engine.on_contact(id, Point::new(x, y));
    }

    pub fn release(&mut self, id: PointerId) {
        self.engine.on_contact_removed(id, self.now_ms);
    }

    pub fn cancel(&mut self, id: PointerId) {
        self.engine.on_contact_cancelled(id);
    }

    /// Press and release the primary finger at the current time.
    pub fn tap_at(&mut self, x: f32, y: f32) {
        self.press(PRIMARY_TOUCH, x, y);
        self.release(PRIMARY_TOUCH);
    }

    /// Mouse click at the current time.
    pub fn click_at(&mut self, x: f32, y: f32) {
        self.press(PointerId::MOUSE, x, y);
        self.release(PointerId::MOUSE);
    }

    /// Drag the primary finger from `from` to `to` in `steps` move frames.
    pub fn drag(&mut self, from: Point, to: Point, steps: u32) {
        let steps = steps.max(1);
        self.press(PRIMARY_TOUCH, from.x, from.y);
        for step in 1..=steps {
            self.advance_time(FRAME_MS);
            let t = step as f32 / steps as f32;
            let x = from.x + (to.x - from.x) * t;
            let y = from.y + (to.y - from.y) * t;
            self.move_to(PRIMARY_TOUCH, x, y);
        }
        self.release(PRIMARY_TOUCH);
    }

    /// Two fingers placed horizontally around `center`, spread from
    /// `from_distance` to `to_distance` apart, then lifted.
    pub fn pinch(&mut self, center: Point, from_distance: f32, to_distance: f32, steps: u32) {
        let steps = steps.max(1);
        let half = from_distance * 0.5;
        self.press(PRIMARY_TOUCH, center.x - half, center.y);
        self.press(SECONDARY_TOUCH, center.x + half, center.y);
        for step in 1..=steps {
            self.advance_time(FRAME_MS);
            let t = step as f32 / steps as f32;
            let half = (from_distance + (to_distance - from_distance) * t) * 0.5;
            self.move_to(PRIMARY_TOUCH, center.x - half, center.y);
            self.move_to(SECONDARY_TOUCH, center.x + half, center.y);
        }
        self.release(SECONDARY_TOUCH);
        self.release(PRIMARY_TOUCH);
    }

    /// Two fingers `radius` from `center` turned by `degrees`, then lifted.
    pub fn rotate(&mut self, center: Point, radius: f32, degrees: f32, steps: u32) {
        let steps = steps.max(1);
        let place = |robot: &mut Self, angle: f32| {
            let (sin, cos) = angle.to_radians().sin_cos();
            let offset = Point::new(cos * radius, sin * radius);
            robot.move_to(PRIMARY_TOUCH, center.x - offset.x, center.y - offset.y);
            robot.move_to(SECONDARY_TOUCH, center.x + offset.x, center.y + offset.y);
        };
        self.press(PRIMARY_TOUCH, center.x - radius, center.y);
        self.press(SECONDARY_TOUCH, center.x + radius, center.y);
        for step in 1..=steps {
            self.advance_time(FRAME_MS);
            place(self, degrees * step as f32 / steps as f32);
        }
        self.release(SECONDARY_TOUCH);
        self.release(PRIMARY_TOUCH);
    }

    /// `count` discrete scroll steps anchored at `at`.
    pub fn scroll(&mut self, direction: ScrollDirection, at: Point, count: u32) {
        for _ in 0..count {
            self.engine.on_scroll_step(direction, at);
        }
    }

    /// One acceleration sample of the given magnitude (along z) at the
    /// current time.
    pub fn accelerate(&mut self, magnitude: f32) {
        self.engine
            .on_acceleration(self.now_ms, AccelerationSample::new(0.0, 0.0, magnitude));
    }

    /// `samples` strong samples `interval_ms` apart.
    pub fn shake(&mut self, magnitude: f32, samples: u32, interval_ms: i64) {
        for index in 0..samples {
            if index > 0 {
                self.advance_time(interval_ms);
            }
            self.accelerate(magnitude);
        }
    }

    pub fn detach(&mut self) {
        log::debug!("robot detaching engine at {} ms", self.now_ms);
        self.engine.detach();
    }

    /// Everything recorded so far, in dispatch order.
    pub fn events(&self) -> Vec<GestureEvent> {
        self.events.borrow().clone()
    }

    /// Drain the recorded events.
    pub fn take_events(&mut self) -> Vec<GestureEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn event_names(&self) -> Vec<&'static str> {
        self.events.borrow().iter().map(GestureEvent::name).collect()
    }

    pub fn last_event(&self) -> Option<GestureEvent> {
        self.events.borrow().last().copied()
    }
}
