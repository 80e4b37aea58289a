//! Snap functionality for aligning window edges to bounds.
//!
//! A window being moved or resized is attracted to the edges of a set of
//! bound rectangles (the host canvas and sibling windows). Each axis is
//! corrected independently: the closest magnet on x and the closest magnet
//! on y may come from different bounds.

use crate::error::{ConfigError, ConfigResult, non_negative};
use crate::geometry::{Corner, Distance, Edge, PointExt, RectExt, abs_min, is_near};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Default attraction threshold in pixels.
pub const DEFAULT_SNAP_DISTANCE: f64 = 5.0;

/// Snap settings for one window controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    /// Whether snapping is applied at all.
    pub enabled: bool,
    /// Candidate rectangles to snap against.
    pub bounds: Vec<Rect>,
    /// How close an edge must be to a snap line to be attracted.
    pub snap_distance: f64,
    /// Gap kept between adjacent edges once snapped.
    pub snap_margin: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            bounds: Vec::new(),
            snap_distance: DEFAULT_SNAP_DISTANCE,
            snap_margin: 0.0,
        }
    }
}

impl SnapConfig {
    /// Create an enabled configuration with validated thresholds and no bounds.
    pub fn new(snap_distance: f64, snap_margin: f64) -> ConfigResult<Self> {
        let config = Self {
            snap_distance,
            snap_margin,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// A configuration that never snaps.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Check the thresholds. Bounds need no validation; non-finite bounds are skipped.
    pub fn validate(&self) -> ConfigResult<()> {
        if !non_negative(self.snap_distance) {
            return Err(ConfigError::InvalidSnapDistance(self.snap_distance));
        }
        if !non_negative(self.snap_margin) {
            return Err(ConfigError::InvalidSnapMargin(self.snap_margin));
        }
        Ok(())
    }

    /// Replace the bounds with the host rectangle followed by sibling rectangles.
    pub fn with_host_and_siblings(
        mut self,
        host: Rect,
        siblings: impl IntoIterator<Item = Rect>,
    ) -> Self {
        self.bounds.clear();
        self.bounds.push(host);
        self.bounds.extend(siblings);
        self
    }

    /// Add one bound rectangle.
    pub fn with_bound(mut self, bound: Rect) -> Self {
        self.bounds.push(bound);
        self
    }

    /// Enable or disable snapping.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Tolerance used by the overlap gate: an edge only snaps to bounds lying
    /// alongside it within this distance.
    fn overlap_tolerance(&self) -> f64 {
        self.snap_distance + self.snap_margin
    }
}

/// Result of a snap operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapResult {
    /// The corrected point.
    pub point: Point,
    /// Whether the X coordinate was snapped.
    pub snapped_x: bool,
    /// Whether the Y coordinate was snapped.
    pub snapped_y: bool,
}

impl SnapResult {
    /// Create a result with no snapping.
    pub fn none(point: Point) -> Self {
        Self {
            point,
            snapped_x: false,
            snapped_y: false,
        }
    }

    fn from_distance(point: Point, distance: Distance) -> Self {
        Self {
            point: point.translated_by(distance),
            snapped_x: distance.x.is_some(),
            snapped_y: distance.y.is_some(),
        }
    }

    /// Check if any snapping occurred.
    pub fn is_snapped(&self) -> bool {
        self.snapped_x || self.snapped_y
    }
}

/// Correction that moves `edge` onto `line`, if it is within `accuracy` of it.
fn align(edge: f64, line: f64, accuracy: f64) -> Option<f64> {
    is_near(edge, line, accuracy).then(|| line - edge)
}

/// Correction for one edge of `rect` against one bound.
///
/// Left and right edges only consider bounds that lie alongside vertically;
/// top and bottom edges only consider bounds that lie alongside horizontally.
/// An edge may align flush with the bound's same-side edge, or sit next to
/// the bound's opposite edge separated by the snap margin.
fn edge_distance(edge: Edge, rect: &Rect, bound: &Rect, config: &SnapConfig) -> Option<f64> {
    let d = config.snap_distance;
    let m = config.snap_margin;
    let tolerance = config.overlap_tolerance();

    match edge {
        Edge::Left => {
            if !rect.overlaps_vertically(bound, tolerance) {
                return None;
            }
            abs_min(align(rect.x0, bound.x0, d), align(rect.x0, bound.x1 + m, d))
        }
        Edge::Right => {
            if !rect.overlaps_vertically(bound, tolerance) {
                return None;
            }
            abs_min(align(rect.x1, bound.x0 - m, d), align(rect.x1, bound.x1, d))
        }
        Edge::Top => {
            if !rect.overlaps_horizontally(bound, tolerance) {
                return None;
            }
            abs_min(align(rect.y0, bound.y0, d), align(rect.y0, bound.y1 + m, d))
        }
        Edge::Bottom => {
            if !rect.overlaps_horizontally(bound, tolerance) {
                return None;
            }
            abs_min(align(rect.y1, bound.y0 - m, d), align(rect.y1, bound.y1, d))
        }
    }
}

/// Fold a per-bound distance over every usable bound, closest magnet first.
fn closest_distance<F>(config: &SnapConfig, mut per_bound: F) -> Distance
where
    F: FnMut(&Rect) -> Distance,
{
    config
        .bounds
        .iter()
        .filter(|bound| bound.all_finite())
        .fold(Distance::UNSET, |best, bound| best.min(per_bound(bound)))
}

/// Snap a moving rectangle, returning its corrected top-left corner.
pub fn snap_position(rect: Rect, config: &SnapConfig) -> SnapResult {
    let origin = rect.top_left();
    if !config.enabled {
        return SnapResult::none(origin);
    }
    if !rect.all_finite() {
        log::warn!("Skipping snap for non-finite rectangle {:?}", rect);
        return SnapResult::none(origin);
    }

    let distance = closest_distance(config, |bound| Distance {
        x: abs_min(
            edge_distance(Edge::Right, &rect, bound, config),
            edge_distance(Edge::Left, &rect, bound, config),
        ),
        y: abs_min(
            edge_distance(Edge::Bottom, &rect, bound, config),
            edge_distance(Edge::Top, &rect, bound, config),
        ),
    });

    let result = SnapResult::from_distance(origin, distance);
    log::trace!("snap_position {:?} -> {:?}", origin, result);
    result
}

/// Snap one corner of a rectangle being resized.
///
/// Only the two edges meeting at `corner` are evaluated; the rest of the
/// rectangle is treated as fixed.
pub fn snap_corner(rect: Rect, config: &SnapConfig, corner: Corner) -> SnapResult {
    let point = rect.corner(corner);
    if !config.enabled {
        return SnapResult::none(point);
    }
    if !rect.all_finite() {
        log::warn!("Skipping corner snap for non-finite rectangle {:?}", rect);
        return SnapResult::none(point);
    }

    let (x_edge, y_edge) = corner.edges();
    let distance = closest_distance(config, |bound| Distance {
        x: edge_distance(x_edge, &rect, bound, config),
        y: edge_distance(y_edge, &rect, bound, config),
    });

    let result = SnapResult::from_distance(point, distance);
    log::trace!("snap_corner {:?} {:?} -> {:?}", corner, point, result);
    result
}

/// Snap the top-left corner of a rectangle being resized.
pub fn snap_top_left(rect: Rect, config: &SnapConfig) -> SnapResult {
    snap_corner(rect, config, Corner::TopLeft)
}

/// Snap the top-right corner of a rectangle being resized.
pub fn snap_top_right(rect: Rect, config: &SnapConfig) -> SnapResult {
    snap_corner(rect, config, Corner::TopRight)
}

/// Snap the bottom-left corner of a rectangle being resized.
pub fn snap_bottom_left(rect: Rect, config: &SnapConfig) -> SnapResult {
    snap_corner(rect, config, Corner::BottomLeft)
}

/// Snap the bottom-right corner of a rectangle being resized.
pub fn snap_bottom_right(rect: Rect, config: &SnapConfig) -> SnapResult {
    snap_corner(rect, config, Corner::BottomRight)
}
