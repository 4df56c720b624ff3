//! Testing utilities and harness for Gestura

pub mod robot;
pub mod robot_assertions;

pub use robot::*;

pub mod prelude {
    pub use crate::robot::*;
    pub use crate::robot_assertions;
    pub use crate::robot_assertions::{
        assert_approx_eq, assert_event_names, assert_point3_approx_eq, pinch_scales,
    };
}
