//! Gesture event dispatch.
//!
//! The dispatcher owns the typed handler table and nothing else: recognizers
//! produce a [`GestureEvent`], the engine hands it over, and the matching
//! handler (if any) runs synchronously on the calling thread.

use gestura_geometry::{Point, Point3};

/// A tap or double-tap in normalized placement space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TapEvent {
    pub position: Point3,
}

/// A new absolute scale, anchored at `center` (screen space).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchEvent {
    pub scale: f32,
    pub center: Point,
}

/// Two-point rotation.
///
/// `rotation.z` is the sum of every frame's turn since the last reset, not
/// the current heading of the contact pair. Read `delta_degrees` for the
/// angle turned by this frame alone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotateEvent {
    /// Accumulated rotation; only `z` is meaningful, `x`/`y` stay zero.
    pub rotation: Point3,
    /// Signed change in degrees applied by this frame, wrapped into `(-180, 180]`.
    pub delta_degrees: f32,
}

/// Single-point drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragEvent {
    pub position: Point3,
    pub velocity: Point,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    Tap(TapEvent),
    DoubleTap(TapEvent),
    Pinch(PinchEvent),
    Rotate(RotateEvent),
    Drag(DragEvent),
    Shake,
}

impl GestureEvent {
    pub fn name(&self) -> &'static str {
        match self {
            GestureEvent::Tap(_) => "tap",
            GestureEvent::DoubleTap(_) => "double_tap",
            GestureEvent::Pinch(_) => "pinch",
            GestureEvent::Rotate(_) => "rotate",
            GestureEvent::Drag(_) => "drag",
            GestureEvent::Shake => "shake",
        }
    }
}

type Handler<E> = Box<dyn FnMut(E)>;

/// Typed table of optional gesture handlers.
///
/// Unregistered handlers are skipped silently. Registering a handler replaces
/// the previous one for that gesture.
#[derive(Default)]
pub struct GestureDispatcher {
    on_tap: Option<Handler<TapEvent>>,
    on_double_tap: Option<Handler<TapEvent>>,
    on_pinch: Option<Handler<PinchEvent>>,
    on_rotate: Option<Handler<RotateEvent>>,
    on_drag: Option<Handler<DragEvent>>,
    on_shake: Option<Box<dyn FnMut()>>,
}

impl GestureDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_tap(&mut self, handler: impl FnMut(TapEvent) + 'static) -> &mut Self {
        self.on_tap = Some(Box::new(handler));
        self
    }

    pub fn on_double_tap(&mut self, handler: impl FnMut(TapEvent) + 'static) -> &mut Self {
        self.on_double_tap = Some(Box::new(handler));
        self
    }

    pub fn on_pinch(&mut self, handler: impl FnMut(PinchEvent) + 'static) -> &mut Self {
        self.on_pinch = Some(Box::new(handler));
        self
    }

    pub fn on_rotate(&mut self, handler: impl FnMut(RotateEvent) + 'static) -> &mut Self {
        self.on_rotate = Some(Box::new(handler));
        self
    }

    pub fn on_drag(&mut self, handler: impl FnMut(DragEvent) + 'static) -> &mut Self {
        self.on_drag = Some(Box::new(handler));
        self
    }

    pub fn on_shake(&mut self, handler: impl FnMut() + 'static) -> &mut Self {
        self.on_shake = Some(Box::new(handler));
        self
    }

    /// Routes `event` to its handler.
    pub fn dispatch(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::Tap(tap) => call(&mut self.on_tap, tap),
            GestureEvent::DoubleTap(tap) => call(&mut self.on_double_tap, tap),
            GestureEvent::Pinch(pinch) => call(&mut self.on_pinch, pinch),
            GestureEvent::Rotate(rotate) => call(&mut self.on_rotate, rotate),
            GestureEvent::Drag(drag) => call(&mut self.on_drag, drag),
            GestureEvent::Shake => {
                if let Some(handler) = self.on_shake.as_mut() {
                    handler();
                }
            }
        }
    }

    /// Drops every registered handler.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn call<E>(handler: &mut Option<Handler<E>>, event: E) {
    if let Some(handler) = handler.as_mut() {
        handler(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn routes_to_matching_handler_only() {
        let taps = Rc::new(RefCell::new(Vec::new()));
        let shakes = Rc::new(RefCell::new(0));
        let mut dispatcher = GestureDispatcher::new();
        {
            let taps = Rc::clone(&taps);
            let shakes = Rc::clone(&shakes);
            dispatcher
                .on_tap(move |tap| taps.borrow_mut().push(tap.position))
                .on_shake(move || *shakes.borrow_mut() += 1);
        }

        dispatcher.dispatch(GestureEvent::Tap(TapEvent {
            position: Point3::new(1.0, 2.0, 0.0),
        }));
        dispatcher.dispatch(GestureEvent::DoubleTap(TapEvent {
            position: Point3::ZERO,
        }));
        dispatcher.dispatch(GestureEvent::Shake);

        assert_eq!(taps.borrow().as_slice(), &[Point3::new(1.0, 2.0, 0.0)]);
        assert_eq!(*shakes.borrow(), 1);
    }

    #[test]
    fn unregistered_handlers_are_skipped() {
        let mut dispatcher = GestureDispatcher::new();
        dispatcher.dispatch(GestureEvent::Pinch(PinchEvent {
            scale: 1.0,
            center: Point::ZERO,
        }));
        dispatcher.dispatch(GestureEvent::Shake);
    }

    #[test]
    fn clear_drops_handlers() {
        let hits = Rc::new(RefCell::new(0));
        let mut dispatcher = GestureDispatcher::new();
        {
            let hits = Rc::clone(&hits);
            dispatcher.on_shake(move || *hits.borrow_mut() += 1);
        }
        dispatcher.clear();
        dispatcher.dispatch(GestureEvent::Shake);
        assert_eq!(*hits.borrow(), 0);
        assert_eq!(Rc::strong_count(&hits), 1);
    }
}
