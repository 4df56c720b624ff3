//! Replays canned gesture sessions and logs what the engine recognizes.
//!
//! Run with `RUST_LOG=debug` (or `trace`) to see the engine's own logging
//! interleaved with the replay output.

use gestura_core::{AccelerationSample, GestureEvent, ScrollDirection};
use gestura_geometry::Point;
use gestura_testing::GestureRobot;
use std::thread;

const CONTAINER_WIDTH: f32 = 800.0;
const CONTAINER_HEIGHT: f32 = 600.0;

struct Session {
    name: &'static str,
    play: fn(&mut GestureRobot),
}

const SESSIONS: &[Session] = &[
    Session {
        name: "tap",
        play: |robot| robot.tap_at(200.0, 150.0),
    },
    Session {
        name: "double tap",
        play: |robot| {
            robot.tap_at(400.0, 300.0);
            robot.advance_time(120);
            robot.tap_at(404.0, 302.0);
        },
    },
    Session {
        name: "pinch",
        play: |robot| robot.pinch(Point::new(400.0, 300.0), 120.0, 220.0, 6),
    },
    Session {
        name: "rotate",
        play: |robot| robot.rotate(Point::new(400.0, 300.0), 80.0, 45.0, 5),
    },
    Session {
        name: "drag",
        play: |robot| robot.drag(Point::new(100.0, 100.0), Point::new(260.0, 180.0), 8),
    },
    Session {
        name: "scroll",
        play: |robot| {
            robot.scroll(ScrollDirection::In, Point::new(400.0, 300.0), 3);
            robot.scroll(ScrollDirection::Out, Point::new(400.0, 300.0), 12);
        },
    },
    Session {
        name: "shake",
        play: |robot| robot.shake(24.0, 4, 150),
    },
    Session {
        name: "background motion",
        play: play_background_motion,
    },
];

/// Feeds acceleration from a sensor thread and pumps the queued shakes back
/// on the engine thread.
fn play_background_motion(robot: &mut GestureRobot) {
    let handle = robot.engine().motion_handle();
    let start_ms = robot.now_ms();
    let sensor = thread::spawn(move || {
        let sample = AccelerationSample::new(15.0, 15.0, 9.8);
        (0..6i64)
            .filter(|&step| handle.push_sample(start_ms + step * 200, sample))
            .count()
    });
    match sensor.join() {
        Ok(detected) => log::debug!("sensor thread detected {detected} shake(s)"),
        Err(_) => log::error!("sensor thread panicked"),
    }
    let pumped = robot.engine_mut().pump_motion();
    log::debug!("pumped {pumped} shake(s)");
}

fn describe(event: &GestureEvent) -> String {
    match event {
        GestureEvent::Tap(tap) | GestureEvent::DoubleTap(tap) => format!(
            "at ({:.1}, {:.1}, {:.2})",
            tap.position.x, tap.position.y, tap.position.z
        ),
        GestureEvent::Pinch(pinch) => format!(
            "scale {:.3} around ({:.0}, {:.0})",
            pinch.scale, pinch.center.x, pinch.center.y
        ),
        GestureEvent::Rotate(rotate) => format!(
            "{:+.2} deg, total {:.2} deg",
            rotate.delta_degrees, rotate.rotation.z
        ),
        GestureEvent::Drag(drag) => format!(
            "to ({:.1}, {:.1}) velocity ({:.2}, {:.2})",
            drag.position.x, drag.position.y, drag.velocity.x, drag.velocity.y
        ),
        GestureEvent::Shake => String::new(),
    }
}

fn main() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let mut robot = GestureRobot::new(CONTAINER_WIDTH, CONTAINER_HEIGHT);

    for session in SESSIONS {
        log::info!("=== {} ===", session.name);
        (session.play)(&mut robot);
        for event in robot.take_events() {
            log::info!("{:>10} {}", event.name(), describe(&event));
        }
        // Keep sessions outside each other's double-tap and shake windows.
        robot.advance_time(2_000);
    }

    let state = robot.engine().state();
    log::info!(
        "final state: scale {:.3}, rotation {:.2} deg, position ({:.1}, {:.1}, {:.2})",
        state.scale,
        state.rotation_degrees,
        state.position.x,
        state.position.y,
        state.position.z
    );
    robot.detach();
}
