//! Layout of the watch face: hour indicators, time arc bounds and the time arc angles
//!
//! Angles follow the screen convention: degrees, 0 at 3 o'clock, growing clockwise
//! (y axis pointing down).

use std::f64::consts::PI;

use hoodie_types::{FaceConfig, WatchShape};

/// Number of hour indicators around the dial
pub const INDICATOR_COUNT: usize = 12;

/// Smallest gap kept between the hour and minute ends of the time arc
pub const MIN_SWEEP_ANGLE_DEG: f64 = 2.0;

/// Minimum center displacement (in pixels) that invalidates the cached layout
pub const CENTER_CHANGE_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when either coordinate differs from `other` by more than the threshold
    pub fn moved_from(&self, other: &Point) -> bool {
        (self.x - other.x).abs() > CENTER_CHANGE_THRESHOLD
            || (self.y - other.y).abs() > CENTER_CHANGE_THRESHOLD
    }
}

/// Axis-aligned rectangle given by its edges
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }
}

/// A single straight stroke
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// The twelve radial hour indicators
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IndicatorPath {
    segments: Vec<Segment>,
}

impl IndicatorPath {
    /// Build radial segments around `center`, one every 30 degrees starting at 3 o'clock.
    ///
    /// Radii are given per axis so square screens can stretch the inner ends
    /// towards the edges while the outer ends reach into the corners.
    pub fn radial(center: Point, inner: (f64, f64), outer: (f64, f64)) -> Self {
        let segments = (0..INDICATOR_COUNT)
            .map(|i| {
                let angle = 2.0 * PI / INDICATOR_COUNT as f64 * i as f64;
                let (sin, cos) = angle.sin_cos();
                Segment {
                    from: Point::new(center.x + inner.0 * cos, center.y + inner.1 * sin),
                    to: Point::new(center.x + outer.0 * cos, center.y + outer.1 * sin),
                }
            })
            .collect();

        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Screen geometry derived from the host's size report
#[derive(Debug, Clone, PartialEq)]
pub struct FaceLayout {
    pub center: Point,
    /// Side of the square drawing area, `min(width, height + chin)`
    pub diameter: i32,
    /// Extra margin added on chinned screens, half the chin size
    pub chin_margin: i32,
    pub outer_radius: (f64, f64),
    pub inner_radius: (f64, f64),
    pub indicators: IndicatorPath,
    pub arc_bounds: Rect,
    /// Offset of the emblem from the top-left corner, on both axes
    pub emblem_margin: f64,
}

impl FaceLayout {
    /// Center of the visible dial. The chin is below the screen, so it pushes the center down.
    pub fn center_for(width: i32, height: i32, chin_size: i32) -> Point {
        Point::new(0.5 * width as f64, 0.5 * (height + chin_size) as f64)
    }

    pub fn compute(
        width: i32,
        height: i32,
        chin_size: i32,
        shape: WatchShape,
        config: &FaceConfig,
    ) -> Self {
        let center = Self::center_for(width, height, chin_size);
        let chin_margin = chin_size / 2;
        let diameter = width.min(height + chin_size);
        let margin = chin_margin as f64;

        let indicator_len = config.indicators_height + margin;
        let (outer_radius, inner_radius) = match shape {
            WatchShape::Square => {
                // Reach the corners of the screen, start inside the top edge
                let outer = center.x.hypot(center.y);
                (
                    (outer, outer),
                    (center.x - indicator_len, center.y - indicator_len),
                )
            }
            WatchShape::Round => {
                let outer = 0.5 * diameter as f64;
                ((outer, outer), (outer - indicator_len, outer - indicator_len))
            }
        };

        let indicators = IndicatorPath::radial(center, inner_radius, outer_radius);

        let arc_margin = config.timearc_margin + margin;
        let side = diameter as f64;
        let arc_bounds = Rect::new(arc_margin, arc_margin, side - arc_margin, side - arc_margin);

        Self {
            center,
            diameter,
            chin_margin,
            outer_radius,
            inner_radius,
            indicators,
            arc_bounds,
            emblem_margin: config.centerpic_margin + margin,
        }
    }
}

/// Start and sweep of the arc joining the hour hand to the minute hand
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeArc {
    pub start_deg: f64,
    pub sweep_deg: f64,
}

impl TimeArc {
    /// Compute the arc from hand rotations in degrees (0 at 12 o'clock, clockwise).
    ///
    /// The sweep never collapses to zero nor closes into a full circle: an arc
    /// within `MIN_SWEEP_ANGLE_DEG` of either limit is adjusted by half that gap.
    pub fn from_rotations(hours_deg: f64, minutes_deg: f64) -> Self {
        let half_gap = 0.5 * MIN_SWEEP_ANGLE_DEG;
        let mut start_deg = hours_deg - 90.0;
        let mut sweep_deg = (360.0 - hours_deg + minutes_deg).rem_euclid(360.0);

        if sweep_deg < MIN_SWEEP_ANGLE_DEG {
            start_deg -= 0.5 * half_gap;
            sweep_deg += half_gap;
        } else if sweep_deg > 360.0 - MIN_SWEEP_ANGLE_DEG {
            start_deg += 0.5 * half_gap;
            sweep_deg -= half_gap;
        }

        Self {
            start_deg,
            sweep_deg,
        }
    }

    pub fn end_deg(&self) -> f64 {
        self.start_deg + self.sweep_deg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    fn no_margin_config() -> FaceConfig {
        FaceConfig {
            indicators_height: 10.0,
            timearc_margin: 4.0,
            centerpic_margin: 40.0,
            ..FaceConfig::default()
        }
    }

    #[test]
    fn test_round_layout_400() {
        let layout = FaceLayout::compute(400, 400, 0, WatchShape::Round, &no_margin_config());

        assert_eq!(layout.center, Point::new(200.0, 200.0));
        assert_eq!(layout.diameter, 400);
        assert_eq!(layout.outer_radius, (200.0, 200.0));
        assert_eq!(layout.inner_radius, (190.0, 190.0));
        assert_eq!(layout.arc_bounds, Rect::new(4.0, 4.0, 396.0, 396.0));
        assert_close(layout.emblem_margin, 40.0);
    }

    #[test]
    fn test_round_outer_radius_uses_smaller_side() {
        let layout = FaceLayout::compute(320, 300, 0, WatchShape::Round, &no_margin_config());
        assert_eq!(layout.outer_radius.0, 0.5 * 300.0);
    }

    #[test]
    fn test_square_outer_radius_reaches_corners() {
        let layout = FaceLayout::compute(300, 400, 0, WatchShape::Square, &no_margin_config());
        let expected = (150.0f64 * 150.0 + 200.0 * 200.0).sqrt();

        assert_close(layout.outer_radius.0, expected);
        assert_close(layout.outer_radius.1, expected);
        assert_eq!(layout.inner_radius, (140.0, 190.0));
    }

    #[test]
    fn test_chin_moves_center_and_adds_margin() {
        let layout = FaceLayout::compute(320, 290, 30, WatchShape::Round, &no_margin_config());

        assert_eq!(layout.center, Point::new(160.0, 160.0));
        assert_eq!(layout.chin_margin, 15);
        assert_eq!(layout.diameter, 320);
        // indicators_height + chin margin
        assert_eq!(layout.inner_radius, (160.0 - 25.0, 160.0 - 25.0));
        assert_eq!(layout.arc_bounds.left, 19.0);
        assert_eq!(layout.arc_bounds.right, 320.0 - 19.0);
        assert_close(layout.emblem_margin, 55.0);
    }

    #[test]
    fn test_odd_chin_margin_truncates() {
        let layout = FaceLayout::compute(320, 289, 31, WatchShape::Round, &no_margin_config());
        assert_eq!(layout.chin_margin, 15);
    }

    #[test]
    fn test_indicators_are_twelve_evenly_spaced() {
        let layout = FaceLayout::compute(400, 400, 0, WatchShape::Round, &no_margin_config());
        let segments = layout.indicators.segments();
        assert_eq!(segments.len(), INDICATOR_COUNT);

        for (i, segment) in segments.iter().enumerate() {
            let dx = segment.to.x - layout.center.x;
            let dy = segment.to.y - layout.center.y;
            let angle = dy.atan2(dx).to_degrees().rem_euclid(360.0);
            let expected = 30.0 * i as f64;
            let diff = (angle - expected).abs();
            assert!(diff < 1e-6 || (360.0 - diff) < 1e-6, "segment {} at {}", i, angle);
        }
    }

    #[test]
    fn test_first_indicator_points_right() {
        let layout = FaceLayout::compute(400, 400, 0, WatchShape::Round, &no_margin_config());
        let first = layout.indicators.segments()[0];

        assert_close(first.from.x, 390.0);
        assert_close(first.from.y, 200.0);
        assert_close(first.to.x, 400.0);
        assert_close(first.to.y, 200.0);
    }

    #[test]
    fn test_center_moved_threshold() {
        let origin = Point::new(200.0, 200.0);
        assert!(!Point::new(200.5, 199.5).moved_from(&origin));
        assert!(Point::new(200.6, 200.0).moved_from(&origin));
        assert!(Point::new(200.0, 199.4).moved_from(&origin));
    }

    #[test]
    fn test_time_arc_zero_keeps_a_sliver() {
        let arc = TimeArc::from_rotations(0.0, 0.0);
        assert_close(arc.sweep_deg, 1.0);
        assert_close(arc.start_deg, -90.5);
    }

    #[test]
    fn test_time_arc_regular_case() {
        // 3:00 -> hour hand at 90, minute hand at 0
        let arc = TimeArc::from_rotations(90.0, 0.0);
        assert_close(arc.start_deg, 0.0);
        assert_close(arc.sweep_deg, 270.0);
        assert_close(arc.end_deg(), 270.0);
    }

    #[test]
    fn test_time_arc_almost_closed_is_trimmed() {
        let arc = TimeArc::from_rotations(1.0, 0.0);
        assert_close(arc.sweep_deg, 358.0);
        assert_close(arc.start_deg, -88.5);
    }

    #[test]
    fn test_time_arc_sweep_stays_in_range() {
        let mut hours = -720.0;
        while hours <= 720.0 {
            let mut minutes = -360.0;
            while minutes <= 720.0 {
                let arc = TimeArc::from_rotations(hours, minutes);
                assert!(
                    (1.0..=359.0).contains(&arc.sweep_deg),
                    "hours={} minutes={} sweep={}",
                    hours,
                    minutes,
                    arc.sweep_deg
                );
                minutes += 0.25;
            }
            hours += 7.5;
        }
    }
}
