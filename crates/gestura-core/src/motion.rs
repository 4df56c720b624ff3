//! Cross-thread access to the shake detector.
//!
//! Hosts that sample the accelerometer on their own thread push samples
//! through a [`MotionHandle`]. The [`ShakeTracker`] is the only engine state
//! that crosses that boundary; it lives behind a mutex here. Shakes detected
//! off-thread are counted and dispatched later by
//! [`GestureEngine::pump_motion`](crate::GestureEngine::pump_motion) on the
//! engine's thread, since handlers are not `Send`.

use crate::gestures::{ShakeDetector, ShakeTracker};
use crate::input::AccelerationSample;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

pub(crate) struct MotionShared {
    detector: Mutex<ShakeDetector>,
    pending_shakes: AtomicU32,
    detached: AtomicBool,
}

impl MotionShared {
    pub(crate) fn new(detector: ShakeDetector) -> Arc<Self> {
        Arc::new(Self {
            detector: Mutex::new(detector),
            pending_shakes: AtomicU32::new(0),
            detached: AtomicBool::new(false),
        })
    }

    fn detector(&self) -> MutexGuard<'_, ShakeDetector> {
        // Tracker updates assign whole values, so a poisoned lock is still consistent.
        self.detector
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Runs the detector; `true` when the sample completed a shake. With
    /// `queue` set, the shake is also counted for the next pump.
    ///
    /// The detached flag is checked and the pending count bumped under the
    /// detector lock, so nothing lands after [`detach`](Self::detach) clears.
    pub(crate) fn sample(&self, time_ms: i64, sample: AccelerationSample, queue: bool) -> bool {
        let mut detector = self.detector();
        if self.detached.load(Ordering::Acquire) {
            return false;
        }
        let shaken = detector.sample(time_ms, sample);
        if shaken && queue {
            self.pending_shakes.fetch_add(1, Ordering::AcqRel);
        }
        shaken
    }

    pub(crate) fn tracker(&self) -> ShakeTracker {
        self.detector().tracker()
    }

    pub(crate) fn take_pending(&self) -> u32 {
        self.pending_shakes.swap(0, Ordering::AcqRel)
    }

    pub(crate) fn detach(&self) {
        let mut detector = self.detector();
        self.detached.store(true, Ordering::Release);
        detector.reset();
        self.pending_shakes.store(0, Ordering::Release);
    }
}

/// Cloneable, `Send + Sync` entry point for acceleration samples.
#[derive(Clone)]
pub struct MotionHandle {
    shared: Arc<MotionShared>,
}

impl MotionHandle {
    pub(crate) fn new(shared: Arc<MotionShared>) -> Self {
        Self { shared }
    }

    /// Feeds a sample from any thread.
    ///
    /// Returns `true` when the sample completed a shake; the shake is queued
    /// for the next [`pump_motion`](crate::GestureEngine::pump_motion).
    pub fn push_sample(&self, time_ms: i64, sample: AccelerationSample) -> bool {
        self.shared.sample(time_ms, sample, true)
    }

    /// `true` once the owning engine has been detached.
    pub fn is_detached(&self) -> bool {
        self.shared.detached.load(Ordering::Acquire)
    }
}
