//! Translates DOM input events into [`GestureEngine`] calls.
//!
//! The adapter does not register listeners itself; the host wires its own
//! closures (touch/mouse/wheel on the overlay element, `devicemotion` on the
//! window) and forwards each event here, or routes everything through
//! [`WebPlatform::handle_event`]. Coordinates are CSS client pixels, the same
//! space `getBoundingClientRect` reports, so [`ElementBounds`] needs no
//! conversion.

use gestura_core::{AccelerationSample, ContainerBounds, GestureEngine, PointerId, ScrollDirection};
use gestura_geometry::{Point, Rect};
use wasm_bindgen::JsCast;
use web_sys::{DeviceMotionEvent, Element, Event, MouseEvent, TouchEvent, TouchList, WheelEvent};
use web_time::Instant;

/// Container bounds backed by a live DOM element.
///
/// `getBoundingClientRect` is called at every tap, so layout changes and
/// scrolling are always reflected.
pub struct ElementBounds {
    element: Element,
}

impl ElementBounds {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl ContainerBounds for ElementBounds {
    fn bounds(&self) -> Rect {
        let rect = self.element.get_bounding_client_rect();
        rect_from_dom(rect.x(), rect.y(), rect.width(), rect.height())
    }
}

pub struct WebPlatform {
    origin: Instant,
    mouse_pressed: bool,
}

impl WebPlatform {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            mouse_pressed: false,
        }
    }

    /// Milliseconds since this adapter was created.
    pub fn now_ms(&self) -> i64 {
        self.origin.elapsed().as_millis() as i64
    }

    pub fn pointer_position(&self, client_x: i32, client_y: i32) -> Point {
        Point::new(client_x as f32, client_y as f32)
    }

    /// Routes any supported DOM event by its type. Returns `false` for events
    /// the adapter does not understand.
    pub fn handle_event(&mut self, engine: &mut GestureEngine, event: &Event) -> bool {
        let kind = event.type_();
        match kind.as_str() {
            "touchstart" | "touchmove" => self.with_touch(event, |p, e| p.touch_moved(engine, e)),
            "touchend" => self.with_touch(event, |p, e| p.touch_ended(engine, e)),
            "touchcancel" => self.with_touch(event, |p, e| p.touch_cancelled(engine, e)),
            "mousedown" => self.with_mouse(event, |p, e| p.mouse_down(engine, e)),
            "mousemove" => self.with_mouse(event, |p, e| p.mouse_move(engine, e)),
            "mouseup" => self.with_mouse(event, |p, e| p.mouse_up(engine, e)),
            "wheel" => match event.dyn_ref::<WheelEvent>() {
                Some(wheel) => {
                    self.wheel(engine, wheel);
                    true
                }
                None => false,
            },
            "devicemotion" => match event.dyn_ref::<DeviceMotionEvent>() {
                Some(motion) => {
                    self.device_motion(engine, motion);
                    true
                }
                None => false,
            },
            _ => {
                log::trace!("unhandled event type {kind}");
                false
            }
        }
    }

    fn with_touch(&mut self, event: &Event, f: impl FnOnce(&mut Self, &TouchEvent)) -> bool {
        match event.dyn_ref::<TouchEvent>() {
            Some(touch) => {
                f(self, touch);
                true
            }
            None => false,
        }
    }

    fn with_mouse(&mut self, event: &Event, f: impl FnOnce(&mut Self, &MouseEvent)) -> bool {
        match event.dyn_ref::<MouseEvent>() {
            Some(mouse) => {
                f(self, mouse);
                true
            }
            None => false,
        }
    }

    /// `touchstart` and `touchmove`: every changed touch is added or moved.
    pub fn touch_moved(&self, engine: &mut GestureEngine, event: &TouchEvent) {
        for (id, position) in self.changed_touches(&event.changed_touches()) {
            engine.on_contact(id, position);
        }
    }

    /// `touchend`: every changed touch is released.
    pub fn touch_ended(&self, engine: &mut GestureEngine, event: &TouchEvent) {
        let time_ms = self.now_ms();
        for (id, position) in self.changed_touches(&event.changed_touches()) {
            // The end event can carry a final position the last move did not.
            if engine.pointers().contains(id) {
                engine.on_contact(id, position);
            }
            engine.on_contact_removed(id, time_ms);
        }
    }

    /// `touchcancel`: every changed touch is dropped without a tap.
    pub fn touch_cancelled(&self, engine: &mut GestureEngine, event: &TouchEvent) {
        for (id, _) in self.changed_touches(&event.changed_touches()) {
            engine.on_contact_cancelled(id);
        }
    }

    pub fn mouse_down(&mut self, engine: &mut GestureEngine, event: &MouseEvent) {
        if event.button() != 0 {
            return;
        }
        self.mouse_pressed = true;
        engine.on_contact(
            PointerId::MOUSE,
            self.pointer_position(event.client_x(), event.client_y()),
        );
    }

    /// Hover moves are ignored; the mouse is only a contact while pressed.
    pub fn mouse_move(&mut self, engine: &mut GestureEngine, event: &MouseEvent) {
        if !self.mouse_pressed {
            return;
        }
        engine.on_contact(
            PointerId::MOUSE,
            self.pointer_position(event.client_x(), event.client_y()),
        );
    }

    pub fn mouse_up(&mut self, engine: &mut GestureEngine, event: &MouseEvent) {
        if event.button() != 0 || !self.mouse_pressed {
            return;
        }
        self.mouse_pressed = false;
        engine.on_contact(
            PointerId::MOUSE,
            self.pointer_position(event.client_x(), event.client_y()),
        );
        engine.on_contact_removed(PointerId::MOUSE, self.now_ms());
    }

    pub fn wheel(&self, engine: &mut GestureEngine, event: &WheelEvent) {
        if let Some(direction) = ScrollDirection::from_wheel_delta(event.delta_y()) {
            let anchor = self.pointer_position(event.client_x(), event.client_y());
            engine.on_scroll_step(direction, anchor);
        }
    }

    pub fn device_motion(&self, engine: &mut GestureEngine, event: &DeviceMotionEvent) {
        if let Some(sample) = motion_sample(event) {
            engine.on_acceleration(self.now_ms(), sample);
        }
    }

    fn changed_touches(&self, touches: &TouchList) -> impl Iterator<Item = (PointerId, Point)> + '_ {
        let touches = touches.clone();
        (0..touches.length()).filter_map(move |index| {
            let touch = touches.item(index)?;
            Some((
                touch_id(touch.identifier()),
                self.pointer_position(touch.client_x(), touch.client_y()),
            ))
        })
    }
}

impl Default for WebPlatform {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads `accelerationIncludingGravity` from a `devicemotion` event.
///
/// Browsers without a motion sensor fire events with a null acceleration
/// object; those yield no sample, which leaves shake detection dormant.
pub fn motion_sample(event: &DeviceMotionEvent) -> Option<AccelerationSample> {
    let acceleration = event.acceleration_including_gravity()?;
    acceleration_from_axes(acceleration.x(), acceleration.y(), acceleration.z())
}

/// Builds a sample from nullable axes; missing axes read as zero, and all
/// three missing is no sample.
pub fn acceleration_from_axes(
    x: Option<f64>,
    y: Option<f64>,
    z: Option<f64>,
) -> Option<AccelerationSample> {
    if x.is_none() && y.is_none() && z.is_none() {
        return None;
    }
    Some(AccelerationSample::new(
        x.unwrap_or(0.0) as f32,
        y.unwrap_or(0.0) as f32,
        z.unwrap_or(0.0) as f32,
    ))
}

/// Maps a DOM touch identifier into the touch id namespace.
pub fn touch_id(identifier: i32) -> PointerId {
    PointerId::touch(identifier as u32)
}

pub fn rect_from_dom(x: f64, y: f64, width: f64, height: f64) -> Rect {
    Rect::new(x as f32, y as f32, width as f32, height as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_ids_stay_clear_of_mouse() {
        assert_eq!(touch_id(0), PointerId::touch(0));
        assert!(!touch_id(-1).is_mouse());
        assert_ne!(touch_id(-1), touch_id(1));
    }

    #[test]
    fn missing_axes_read_as_zero() {
        assert_eq!(
            acceleration_from_axes(Some(3.0), None, Some(4.0)),
            Some(AccelerationSample::new(3.0, 0.0, 4.0))
        );
        assert_eq!(acceleration_from_axes(None, None, None), None);
    }

    #[test]
    fn dom_rect_converts_to_bounds() {
        assert_eq!(
            rect_from_dom(10.0, 20.0, 300.0, 150.0),
            Rect::new(10.0, 20.0, 300.0, 150.0)
        );
    }

    #[test]
    fn clock_is_monotonic() {
        let platform = WebPlatform::new();
        let first = platform.now_ms();
        let second = platform.now_ms();
        assert!(first >= 0);
        assert!(second >= first);
    }
}
