//! Multi-modal gesture recognition for Gestura
//!
//! Turns contact, scroll-step and acceleration input into semantic
//! manipulation events (tap, double-tap, pinch, rotate, drag, shake) for a
//! virtual object. Everything runs synchronously inside the caller's input
//! callback; nothing is scheduled.
//!
//! # Example
//!
//! ```
//! use gestura_core::{GestureEngine, PointerId};
//! use gestura_geometry::{Point, Rect};
//!
//! let mut engine = GestureEngine::new(Rect::new(0.0, 0.0, 400.0, 300.0));
//! engine
//!     .handlers_mut()
//!     .on_tap(|tap| println!("tap at {:?}", tap.position))
//!     .on_pinch(|pinch| println!("scale {}", pinch.scale));
//!
//! engine.on_contact(PointerId::touch(0), Point::new(200.0, 150.0));
//! engine.on_contact_removed(PointerId::touch(0), 16);
//! ```

pub mod config;
pub mod dispatcher;
pub mod engine;
pub mod gesture_constants;
pub mod gestures;
pub mod input;
pub mod motion;
pub mod state;

pub use config::{ConfigError, GestureConfig};
pub use dispatcher::{
    DragEvent, GestureDispatcher, GestureEvent, PinchEvent, RotateEvent, TapEvent,
};
pub use engine::{ContainerBounds, GestureEngine};
pub use gestures::{ShakeTracker, TapRecord};
pub use input::{AccelerationSample, ContactPoint, PointerId, PointerSet, ScrollDirection};
pub use motion::MotionHandle;
pub use state::GestureState;

pub mod prelude {
    pub use crate::config::GestureConfig;
    pub use crate::dispatcher::{DragEvent, GestureEvent, PinchEvent, RotateEvent, TapEvent};
    pub use crate::engine::{ContainerBounds, GestureEngine};
    pub use crate::input::prelude::*;
    pub use crate::state::GestureState;
}
