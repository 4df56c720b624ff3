//! Shake detection from acceleration magnitude.

use crate::input::AccelerationSample;

/// Debounce state for the shake detector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShakeTracker {
    pub last_event_ms: i64,
    pub repeat_count: u32,
}

/// Repeat-count state machine over qualifying acceleration samples.
///
/// A sample qualifies when its magnitude exceeds the threshold. Qualifying
/// samples within one window of each other count up; reaching the repeat
/// threshold emits a shake and restarts the count at zero.
#[derive(Clone, Debug)]
pub struct ShakeDetector {
    threshold: f32,
    window_ms: i64,
    repeat_threshold: u32,
    tracker: ShakeTracker,
}

impl ShakeDetector {
    pub fn new(threshold: f32, window_ms: i64, repeat_threshold: u32) -> Self {
        Self {
            threshold,
            window_ms,
            repeat_threshold,
            tracker: ShakeTracker::default(),
        }
    }

    /// Feeds one sample; returns `true` when it completes a shake.
    ///
    /// Samples older than the last qualifying one are dropped.
    pub fn sample(&mut self, time_ms: i64, sample: AccelerationSample) -> bool {
        if !sample.is_finite() || sample.magnitude() <= self.threshold {
            return false;
        }

        let gap = time_ms - self.tracker.last_event_ms;
        if gap < 0 {
            log::trace!("shake sample at {time_ms} predates tracker, dropped");
            return false;
        }

        if gap >= self.window_ms {
            self.tracker = ShakeTracker {
                last_event_ms: time_ms,
                repeat_count: 1,
            };
            return false;
        }

        self.tracker.repeat_count += 1;
        self.tracker.last_event_ms = time_ms;
        if self.tracker.repeat_count >= self.repeat_threshold {
            self.tracker = ShakeTracker {
                last_event_ms: time_ms,
                repeat_count: 0,
            };
            return true;
        }
        false
    }

    pub fn tracker(&self) -> ShakeTracker {
        self.tracker
    }

    pub fn reset(&mut self) {
        self.tracker = ShakeTracker::default();
    }
}
