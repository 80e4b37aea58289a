//! Geometry primitives for window layout.
//!
//! Points, rectangles and sizes are plain `kurbo` types. This module adds the
//! small algebra the snap engine is built from: edge proximity, axis overlap,
//! and [`Distance`], a per-axis correction where an axis may be unset.

use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Corner of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Edge of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Corner {
    /// The two edges meeting at this corner, as (vertical edge, horizontal edge).
    ///
    /// The vertical edge moves along x, the horizontal edge along y.
    pub fn edges(self) -> (Edge, Edge) {
        match self {
            Corner::TopLeft => (Edge::Left, Edge::Top),
            Corner::TopRight => (Edge::Right, Edge::Top),
            Corner::BottomLeft => (Edge::Left, Edge::Bottom),
            Corner::BottomRight => (Edge::Right, Edge::Bottom),
        }
    }

    /// The diagonally opposite corner.
    pub fn opposite(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::BottomRight,
            Corner::TopRight => Corner::BottomLeft,
            Corner::BottomLeft => Corner::TopRight,
            Corner::BottomRight => Corner::TopLeft,
        }
    }
}

/// Returns whichever value has the smaller magnitude, treating `None` as absent.
///
/// If both are absent the result is absent. Ties keep `a`.
pub fn abs_min(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => {
            if b.abs() < a.abs() {
                Some(b)
            } else {
                Some(a)
            }
        }
        (Some(a), None) => Some(a),
        (None, b) => b,
    }
}

/// Check if `value` lies within `accuracy` of `target` (inclusive on both ends).
pub fn is_near(value: f64, target: f64, accuracy: f64) -> bool {
    target - accuracy <= value && value <= target + accuracy
}

/// A proposed corrective displacement.
///
/// Each axis is either set (a correction was found, possibly of magnitude
/// zero) or unset (no correction applies on that axis).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl Distance {
    /// A distance with both axes unset.
    pub const UNSET: Distance = Distance { x: None, y: None };

    /// Create a distance from per-axis corrections.
    pub fn new(x: Option<f64>, y: Option<f64>) -> Self {
        Self { x, y }
    }

    /// Check if neither axis carries a correction.
    pub fn is_unset(&self) -> bool {
        self.x.is_none() && self.y.is_none()
    }

    /// Combine two distances axis by axis with [`abs_min`].
    ///
    /// On equal magnitudes `self` wins.
    pub fn min(self, other: Distance) -> Distance {
        Distance {
            x: abs_min(self.x, other.x),
            y: abs_min(self.y, other.y),
        }
    }

    /// The displacement to apply; unset axes contribute nothing.
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x.unwrap_or(0.0), self.y.unwrap_or(0.0))
    }
}

/// A directed segment whose endpoints may be unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub start: Option<Point>,
    pub end: Option<Point>,
}

impl Vector {
    /// Create a vector between two known points.
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// A vector with no endpoints.
    pub fn unset() -> Self {
        Self::default()
    }

    /// Check if either endpoint is unset.
    pub fn is_unset(&self) -> bool {
        self.start.is_none() || self.end.is_none()
    }

    /// The displacement from start to end.
    pub fn displacement(&self) -> Option<Vec2> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }

    /// Signed length along x.
    pub fn length_x(&self) -> Option<f64> {
        self.displacement().map(|d| d.x)
    }

    /// Signed length along y.
    pub fn length_y(&self) -> Option<f64> {
        self.displacement().map(|d| d.y)
    }

    /// Euclidean length.
    pub fn length(&self) -> Option<f64> {
        self.displacement().map(|d| d.hypot())
    }

    /// Check if both endpoints are set and coincide.
    pub fn is_zero(&self) -> bool {
        self.displacement().is_some_and(|d| d.x == 0.0 && d.y == 0.0)
    }

    /// Check if both endpoints are set and share the same y.
    pub fn is_horizontal(&self) -> bool {
        self.length_y() == Some(0.0)
    }

    /// Check if both endpoints are set and share the same x.
    pub fn is_vertical(&self) -> bool {
        self.length_x() == Some(0.0)
    }
}

/// Point helpers used by the snap engine.
pub trait PointExt {
    /// Offset the point by `dx`, `dy`.
    fn translated(self, dx: f64, dy: f64) -> Point;
    /// Offset the point by a distance; unset axes leave the coordinate alone.
    fn translated_by(self, distance: Distance) -> Point;
    /// Check if both coordinates are finite.
    fn all_finite(self) -> bool;
}

impl PointExt for Point {
    fn translated(self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    fn translated_by(self, distance: Distance) -> Point {
        self + distance.to_vec2()
    }

    fn all_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Round a point to whole-pixel coordinates.
pub fn round(point: Point) -> Point {
    point.round()
}

/// Rectangle helpers for window geometry.
pub trait RectExt {
    fn top_left(&self) -> Point;
    fn top_right(&self) -> Point;
    fn bottom_left(&self) -> Point;
    fn bottom_right(&self) -> Point;
    /// Position of the given corner.
    fn corner(&self, corner: Corner) -> Point;
    /// Check if the projections onto the x axis intersect once widened by `tolerance`.
    fn overlaps_horizontally(&self, other: &Rect, tolerance: f64) -> bool;
    /// Check if the projections onto the y axis intersect once widened by `tolerance`.
    fn overlaps_vertically(&self, other: &Rect, tolerance: f64) -> bool;
    /// Check if every coordinate is finite.
    fn all_finite(&self) -> bool;
    /// Inclusive containment: points on the right and bottom edges count as inside.
    fn contains_inclusive(&self, point: Point) -> bool;
}

impl RectExt for Rect {
    fn top_left(&self) -> Point {
        Point::new(self.x0, self.y0)
    }

    fn top_right(&self) -> Point {
        Point::new(self.x1, self.y0)
    }

    fn bottom_left(&self) -> Point {
        Point::new(self.x0, self.y1)
    }

    fn bottom_right(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    fn corner(&self, corner: Corner) -> Point {
        match corner {
            Corner::TopLeft => self.top_left(),
            Corner::TopRight => self.top_right(),
            Corner::BottomLeft => self.bottom_left(),
            Corner::BottomRight => self.bottom_right(),
        }
    }

    fn overlaps_horizontally(&self, other: &Rect, tolerance: f64) -> bool {
        self.x0 - tolerance <= other.x1 && other.x0 <= self.x1 + tolerance
    }

    fn overlaps_vertically(&self, other: &Rect, tolerance: f64) -> bool {
        self.y0 - tolerance <= other.y1 && other.y0 <= self.y1 + tolerance
    }

    fn all_finite(&self) -> bool {
        self.x0.is_finite() && self.y0.is_finite() && self.x1.is_finite() && self.y1.is_finite()
    }

    fn contains_inclusive(&self, point: Point) -> bool {
        point.x >= self.x0 && point.x <= self.x1 && point.y >= self.y0 && point.y <= self.y1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abs_min_prefers_smaller_magnitude() {
        assert_eq!(abs_min(Some(3.0), Some(-2.0)), Some(-2.0));
        assert_eq!(abs_min(Some(-1.0), Some(4.0)), Some(-1.0));
    }

    #[test]
    fn test_abs_min_unset() {
        assert_eq!(abs_min(None, Some(7.5)), Some(7.5));
        assert_eq!(abs_min(Some(-7.5), None), Some(-7.5));
        assert_eq!(abs_min(None, None), None);
    }

    #[test]
    fn test_abs_min_tie_keeps_first() {
        assert_eq!(abs_min(Some(4.0), Some(-4.0)), Some(4.0));
        assert_eq!(abs_min(Some(-4.0), Some(4.0)), Some(-4.0));
    }

    #[test]
    fn test_abs_min_zero_is_not_unset() {
        assert_eq!(abs_min(Some(0.0), Some(3.0)), Some(0.0));
        assert_eq!(abs_min(None, Some(0.0)), Some(0.0));
    }

    #[test]
    fn test_is_near_inclusive() {
        assert!(is_near(795.0, 800.0, 5.0));
        assert!(is_near(805.0, 800.0, 5.0));
        assert!(!is_near(805.1, 800.0, 5.0));
        assert!(is_near(10.0, 10.0, 0.0));
    }

    #[test]
    fn test_distance_min_per_axis() {
        let a = Distance::new(Some(3.0), None);
        let b = Distance::new(Some(-1.0), Some(2.0));
        assert_eq!(a.min(b), Distance::new(Some(-1.0), Some(2.0)));
        assert_eq!(Distance::UNSET.min(Distance::UNSET), Distance::UNSET);
        assert!(Distance::UNSET.min(Distance::UNSET).is_unset());
    }

    #[test]
    fn test_distance_to_vec2() {
        assert_eq!(Distance::new(None, Some(4.0)).to_vec2(), Vec2::new(0.0, 4.0));
        assert_eq!(Distance::UNSET.to_vec2(), Vec2::ZERO);
    }

    #[test]
    fn test_point_translate_and_round() {
        let p = Point::new(1.4, 2.6).translated(1.0, -1.0);
        assert!((p.x - 2.4).abs() < 1e-10);
        assert!((p.y - 1.6).abs() < 1e-10);
        assert_eq!(round(p), Point::new(2.0, 2.0));
        let q = Point::new(10.0, 10.0).translated_by(Distance::new(Some(-3.0), None));
        assert_eq!(q, Point::new(7.0, 10.0));
    }

    #[test]
    fn test_vector_lengths() {
        let v = Vector::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert_eq!(v.length_x(), Some(3.0));
        assert_eq!(v.length_y(), Some(4.0));
        assert_eq!(v.length(), Some(5.0));
        assert!(!v.is_zero());
        assert!(!v.is_horizontal());
        assert!(!v.is_vertical());
    }

    #[test]
    fn test_vector_flags() {
        let h = Vector::new(Point::new(0.0, 5.0), Point::new(10.0, 5.0));
        assert!(h.is_horizontal());
        assert!(!h.is_vertical());

        let z = Vector::new(Point::new(2.0, 2.0), Point::new(2.0, 2.0));
        assert!(z.is_zero());

        let u = Vector {
            start: Some(Point::ZERO),
            end: None,
        };
        assert!(u.is_unset());
        assert_eq!(u.length(), None);
        assert!(!u.is_zero());
        assert!(!u.is_horizontal());
        assert!(Vector::unset().is_unset());
    }

    #[test]
    fn test_rect_corners() {
        let r = Rect::from_origin_size((10.0, 20.0), (100.0, 50.0));
        assert_eq!(r.top_left(), Point::new(10.0, 20.0));
        assert_eq!(r.top_right(), Point::new(110.0, 20.0));
        assert_eq!(r.bottom_left(), Point::new(10.0, 70.0));
        assert_eq!(r.bottom_right(), Point::new(110.0, 70.0));
        assert_eq!(r.corner(Corner::BottomRight), r.bottom_right());
        assert_eq!(Corner::TopRight.opposite(), Corner::BottomLeft);
    }

    #[test]
    fn test_overlaps_with_tolerance() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(105.0, 0.0, 200.0, 100.0);
        assert!(!a.overlaps_horizontally(&b, 0.0));
        assert!(!a.overlaps_horizontally(&b, 4.0));
        assert!(a.overlaps_horizontally(&b, 5.0));
        assert!(a.overlaps_vertically(&b, 0.0));
    }

    #[test]
    fn test_overlaps_symmetric() {
        let rects = [
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Rect::new(105.0, 110.0, 200.0, 300.0),
            Rect::new(50.0, 50.0, 50.0, 50.0),
            Rect::new(-20.0, 90.0, 10.0, 95.0),
        ];
        for a in &rects {
            for b in &rects {
                for t in [0.0, 3.0, 10.0] {
                    assert_eq!(a.overlaps_horizontally(b, t), b.overlaps_horizontally(a, t));
                    assert_eq!(a.overlaps_vertically(b, t), b.overlaps_vertically(a, t));
                }
            }
        }
    }

    #[test]
    fn test_degenerate_rect_overlaps() {
        let line = Rect::new(50.0, 0.0, 50.0, 600.0);
        let window = Rect::new(40.0, 100.0, 140.0, 200.0);
        assert!(window.overlaps_horizontally(&line, 0.0));
        assert!(window.overlaps_vertically(&line, 0.0));
    }

    #[test]
    fn test_all_finite() {
        assert!(Rect::new(0.0, 0.0, 1.0, 1.0).all_finite());
        assert!(!Rect::new(f64::NAN, 0.0, 1.0, 1.0).all_finite());
        assert!(!Point::new(0.0, f64::INFINITY).all_finite());
    }
}
