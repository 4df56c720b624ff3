//! Tap / double-tap disambiguation.

use crate::gesture_constants::PLACEMENT_EXTENT;
use gestura_geometry::{Point, Point3, Rect};

/// The last completed single tap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TapRecord {
    pub time_ms: i64,
    pub position: Point,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapKind {
    Single,
    Double,
}

/// Classifies qualifying releases as single or double taps.
///
/// Windows are compared lazily against the stored record, never scheduled.
#[derive(Clone, Debug)]
pub struct TapDisambiguator {
    window_ms: i64,
    distance_px: f32,
    record: Option<TapRecord>,
}

impl TapDisambiguator {
    pub fn new(window_ms: i64, distance_px: f32) -> Self {
        Self {
            window_ms,
            distance_px,
            record: None,
        }
    }

    /// Classifies a release at `position` and updates the pending record.
    ///
    /// A double-tap consumes the record, so a third quick tap starts over as a
    /// single tap. A record newer than `time_ms` never pairs with it.
    pub fn resolve(&mut self, time_ms: i64, position: Point) -> TapKind {
        let is_double = self.record.is_some_and(|record| {
            let dt = time_ms - record.time_ms;
            (0..self.window_ms).contains(&dt) && record.position.distance_to(position) < self.distance_px
        });

        if is_double {
            self.record = None;
            TapKind::Double
        } else {
            self.record = Some(TapRecord { time_ms, position });
            TapKind::Single
        }
    }

    pub fn pending(&self) -> Option<TapRecord> {
        self.record
    }

    pub fn clear(&mut self) {
        self.record = None;
    }
}

/// Projects a screen point into normalized placement space.
///
/// Returns `None` when `bounds` cannot be used as a normalization basis or the
/// projected point is not finite.
pub fn project_to_placement(bounds: Rect, point: Point, depth: f32) -> Option<Point3> {
    if !bounds.is_usable() {
        return None;
    }
    let normalized = bounds.normalize(point).scale(PLACEMENT_EXTENT);
    let placed = Point3::new(normalized.x, normalized.y, depth);
    placed.is_finite().then_some(placed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taps() -> TapDisambiguator {
        TapDisambiguator::new(300, 30.0)
    }

    #[test]
    fn quick_close_release_is_double() {
        let mut taps = taps();
        assert_eq!(taps.resolve(1_000, Point::new(50.0, 50.0)), TapKind::Single);
        assert_eq!(taps.resolve(1_299, Point::new(79.0, 50.0)), TapKind::Double);
        assert_eq!(taps.pending(), None);
    }

    #[test]
    fn slow_release_is_two_singles() {
        let mut taps = taps();
        assert_eq!(taps.resolve(1_000, Point::new(50.0, 50.0)), TapKind::Single);
        assert_eq!(taps.resolve(1_301, Point::new(50.0, 50.0)), TapKind::Single);
        assert_eq!(
            taps.pending(),
            Some(TapRecord {
                time_ms: 1_301,
                position: Point::new(50.0, 50.0)
            })
        );
    }

    #[test]
    fn far_release_is_single() {
        let mut taps = taps();
        taps.resolve(0, Point::new(0.0, 0.0));
        assert_eq!(taps.resolve(100, Point::new(30.0, 0.0)), TapKind::Single);
    }

    #[test]
    fn triple_tap_does_not_cascade() {
        let mut taps = taps();
        assert_eq!(taps.resolve(0, Point::ZERO), TapKind::Single);
        assert_eq!(taps.resolve(100, Point::ZERO), TapKind::Double);
        assert_eq!(taps.resolve(200, Point::ZERO), TapKind::Single);
        assert_eq!(taps.resolve(300, Point::ZERO), TapKind::Double);
    }

    #[test]
    fn older_release_never_pairs() {
        let mut taps = taps();
        taps.resolve(1_000, Point::ZERO);
        assert_eq!(taps.resolve(900, Point::ZERO), TapKind::Single);
    }

    #[test]
    fn projection_maps_into_placement_space() {
        let bounds = Rect::new(0.0, 0.0, 400.0, 200.0);
        assert_eq!(
            project_to_placement(bounds, Point::new(200.0, 100.0), 3.0),
            Some(Point3::new(0.0, 0.0, 3.0))
        );
        assert_eq!(
            project_to_placement(bounds, Point::new(0.0, 0.0), 0.0),
            Some(Point3::new(-100.0, 100.0, 0.0))
        );
        assert_eq!(
            project_to_placement(bounds, Point::new(300.0, 150.0), 0.0),
            Some(Point3::new(50.0, -50.0, 0.0))
        );
        assert_eq!(
            project_to_placement(Rect::new(0.0, 0.0, 0.0, 0.0), Point::ZERO, 0.0),
            None
        );
    }

    #[test]
    fn overflowing_projection_is_rejected() {
        let bounds = Rect::new(-3.0e38, 0.0, 1.0e-3, 100.0);
        assert_eq!(
            project_to_placement(bounds, Point::new(3.0e38, 50.0), 0.0),
            None
        );
    }
}
