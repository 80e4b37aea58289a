//! Drag interaction state machine for a floating window.
//!
//! A drag that starts inside a border zone resizes the window around the
//! matching anchor; a drag that starts anywhere else moves it. Every pointer
//! move is routed through the snap engine and, for resizes, through the
//! window's size limits. The controller never touches caller geometry: it
//! takes the rectangle at drag start and hands back a new one per move.

use crate::error::{ConfigError, ConfigResult, non_negative};
use crate::geometry::{Corner, RectExt};
use crate::snap::{SnapConfig, snap_corner, snap_position};
use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Thickness of the border hit-test zone in pixels.
pub const BORDER_THICKNESS: f64 = 8.0;

/// The corner or edge a resize drag pivots around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeAnchor {
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
}

/// Pointer shape a host should show over a resize zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeCursor {
    /// Diagonal, top-left to bottom-right.
    NwseResize,
    /// Diagonal, top-right to bottom-left.
    NeswResize,
    /// Vertical.
    NsResize,
    /// Horizontal.
    EwResize,
}

impl ResizeAnchor {
    /// All anchors, clockwise from the top-left corner.
    pub const ALL: [ResizeAnchor; 8] = [
        ResizeAnchor::TopLeft,
        ResizeAnchor::Top,
        ResizeAnchor::TopRight,
        ResizeAnchor::Right,
        ResizeAnchor::BottomRight,
        ResizeAnchor::Bottom,
        ResizeAnchor::BottomLeft,
        ResizeAnchor::Left,
    ];

    /// Build an anchor from border zone membership.
    ///
    /// Returns `None` when the point is in no zone (the title region).
    pub fn from_zones(near_top: bool, near_bottom: bool, near_left: bool, near_right: bool) -> Option<Self> {
        let vertical = if near_top {
            Some(true)
        } else if near_bottom {
            Some(false)
        } else {
            None
        };
        let horizontal = if near_left {
            Some(true)
        } else if near_right {
            Some(false)
        } else {
            None
        };

        match (vertical, horizontal) {
            (Some(true), Some(true)) => Some(ResizeAnchor::TopLeft),
            (Some(true), Some(false)) => Some(ResizeAnchor::TopRight),
            (Some(true), None) => Some(ResizeAnchor::Top),
            (Some(false), Some(true)) => Some(ResizeAnchor::BottomLeft),
            (Some(false), Some(false)) => Some(ResizeAnchor::BottomRight),
            (Some(false), None) => Some(ResizeAnchor::Bottom),
            (None, Some(true)) => Some(ResizeAnchor::Left),
            (None, Some(false)) => Some(ResizeAnchor::Right),
            (None, None) => None,
        }
    }

    /// Check if this anchor drags the left edge.
    pub fn moves_left(self) -> bool {
        matches!(self, ResizeAnchor::TopLeft | ResizeAnchor::Left | ResizeAnchor::BottomLeft)
    }

    /// Check if this anchor drags the right edge.
    pub fn moves_right(self) -> bool {
        matches!(self, ResizeAnchor::TopRight | ResizeAnchor::Right | ResizeAnchor::BottomRight)
    }

    /// Check if this anchor drags the top edge.
    pub fn moves_top(self) -> bool {
        matches!(self, ResizeAnchor::TopLeft | ResizeAnchor::Top | ResizeAnchor::TopRight)
    }

    /// Check if this anchor drags the bottom edge.
    pub fn moves_bottom(self) -> bool {
        matches!(self, ResizeAnchor::BottomLeft | ResizeAnchor::Bottom | ResizeAnchor::BottomRight)
    }

    /// Check if this anchor changes the window's width.
    pub fn controls_width(self) -> bool {
        self.moves_left() || self.moves_right()
    }

    /// Check if this anchor changes the window's height.
    pub fn controls_height(self) -> bool {
        self.moves_top() || self.moves_bottom()
    }

    /// The corner whose snap entry point drives this anchor.
    ///
    /// Edge anchors borrow a corner that contains their edge; the other axis
    /// of that corner's result is ignored.
    pub fn snap_corner(self) -> Corner {
        match self {
            ResizeAnchor::TopLeft | ResizeAnchor::Top | ResizeAnchor::Left => Corner::TopLeft,
            ResizeAnchor::TopRight | ResizeAnchor::Right => Corner::TopRight,
            ResizeAnchor::BottomLeft | ResizeAnchor::Bottom => Corner::BottomLeft,
            ResizeAnchor::BottomRight => Corner::BottomRight,
        }
    }

    /// Pointer shape for this anchor.
    pub fn cursor(self) -> ResizeCursor {
        match self {
            ResizeAnchor::TopLeft | ResizeAnchor::BottomRight => ResizeCursor::NwseResize,
            ResizeAnchor::TopRight | ResizeAnchor::BottomLeft => ResizeCursor::NeswResize,
            ResizeAnchor::Top | ResizeAnchor::Bottom => ResizeCursor::NsResize,
            ResizeAnchor::Left | ResizeAnchor::Right => ResizeCursor::EwResize,
        }
    }
}

/// Find the resize anchor under `point`, if it lies in a border zone of `rect`.
///
/// On a window narrower than two zones, the closer side wins.
pub fn hit_test_anchor(rect: Rect, point: Point, thickness: f64) -> Option<ResizeAnchor> {
    if !rect.contains_inclusive(point) {
        return None;
    }

    let left = point.x - rect.x0;
    let right = rect.x1 - point.x;
    let top = point.y - rect.y0;
    let bottom = rect.y1 - point.y;

    ResizeAnchor::from_zones(
        top < thickness && top <= bottom,
        bottom < thickness && bottom < top,
        left < thickness && left <= right,
        right < thickness && right < left,
    )
}

/// Current phase of a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionState {
    /// No drag in progress.
    #[default]
    Idle,
    /// The whole window follows the pointer.
    Moving,
    /// One corner or edge follows the pointer.
    Resizing(ResizeAnchor),
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_moving(&self) -> bool {
        matches!(self, Self::Moving)
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing(_))
    }

    /// The active resize anchor, if resizing.
    pub fn anchor(&self) -> Option<ResizeAnchor> {
        match self {
            Self::Resizing(anchor) => Some(*anchor),
            _ => None,
        }
    }
}

/// Minimum and maximum window size.
///
/// A missing maximum means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeLimits {
    pub min_width: f64,
    pub max_width: Option<f64>,
    pub min_height: f64,
    pub max_height: Option<f64>,
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self {
            min_width: 0.0,
            max_width: None,
            min_height: 0.0,
            max_height: None,
        }
    }
}

impl SizeLimits {
    /// Create validated limits.
    pub fn new(min: Size, max: Size) -> ConfigResult<Self> {
        let limits = Self {
            min_width: min.width,
            max_width: Some(max.width),
            min_height: min.height,
            max_height: Some(max.height),
        };
        limits.validate()?;
        Ok(limits)
    }

    /// Limits with only a minimum size.
    pub fn at_least(min: Size) -> ConfigResult<Self> {
        let limits = Self {
            min_width: min.width,
            min_height: min.height,
            ..Self::default()
        };
        limits.validate()?;
        Ok(limits)
    }

    /// Check that minimums are non-negative and do not exceed maximums.
    pub fn validate(&self) -> ConfigResult<()> {
        check_axis("width", self.min_width, self.max_width)?;
        check_axis("height", self.min_height, self.max_height)
    }

    /// Clamp a width into range. Never panics, even on inverted limits.
    pub fn clamp_width(&self, width: f64) -> f64 {
        clamp_axis(width, self.min_width, self.max_width)
    }

    /// Clamp a height into range. Never panics, even on inverted limits.
    pub fn clamp_height(&self, height: f64) -> f64 {
        clamp_axis(height, self.min_height, self.max_height)
    }
}

fn check_axis(axis: &'static str, min: f64, max: Option<f64>) -> ConfigResult<()> {
    if !non_negative(min) {
        return Err(ConfigError::InvalidMinimum { axis, value: min });
    }
    match max {
        Some(max) if max.is_nan() || max < min => Err(ConfigError::InvertedLimits { axis, min, max }),
        _ => Ok(()),
    }
}

fn clamp_axis(value: f64, min: f64, max: Option<f64>) -> f64 {
    let value = value.max(min);
    match max {
        Some(max) => value.min(max),
        None => value,
    }
}

/// Move `original` by `delta`, then snap its position. Size is unchanged.
pub fn move_rect(original: Rect, delta: Vec2, config: &SnapConfig) -> Rect {
    let proposed = original + delta;
    let snapped = snap_position(proposed, config);
    proposed.with_origin(snapped.point)
}

/// Resize `original` around `anchor` by `delta`, then snap and clamp.
///
/// The corner driven by the anchor is snapped first; width and height are
/// then derived from its distance to the fixed opposite edges and clamped to
/// `limits`. Edges the anchor does not control never move. Dragging past a
/// fixed edge collapses that axis to its minimum instead of flipping.
pub fn resize_rect(
    original: Rect,
    anchor: ResizeAnchor,
    delta: Vec2,
    config: &SnapConfig,
    limits: &SizeLimits,
) -> Rect {
    let mut proposed = original;
    if anchor.moves_left() {
        proposed.x0 += delta.x;
    }
    if anchor.moves_right() {
        proposed.x1 += delta.x;
    }
    if anchor.moves_top() {
        proposed.y0 += delta.y;
    }
    if anchor.moves_bottom() {
        proposed.y1 += delta.y;
    }

    let corner = snap_corner(proposed, config, anchor.snap_corner()).point;

    let mut result = original;
    if anchor.moves_right() {
        let width = limits.clamp_width((corner.x - original.x0).max(0.0));
        result.x1 = original.x0 + width;
    } else if anchor.moves_left() {
        let width = limits.clamp_width((original.x1 - corner.x).max(0.0));
        result.x0 = original.x1 - width;
    }
    if anchor.moves_bottom() {
        let height = limits.clamp_height((corner.y - original.y0).max(0.0));
        result.y1 = original.y0 + height;
    } else if anchor.moves_top() {
        let height = limits.clamp_height((original.y1 - corner.y).max(0.0));
        result.y0 = original.y1 - height;
    }
    result
}

/// Geometry captured when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    start_pointer: Point,
    original: Rect,
}

/// Tracks one window's drag interaction.
#[derive(Debug, Clone)]
pub struct InteractionController {
    state: InteractionState,
    session: Option<DragSession>,
    /// Size range enforced while resizing.
    pub limits: SizeLimits,
    /// Border zone thickness used to pick a resize anchor.
    border_thickness: f64,
    /// When false, border zones start a move instead of a resize.
    pub resizable: bool,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self {
            state: InteractionState::Idle,
            session: None,
            limits: SizeLimits::default(),
            border_thickness: BORDER_THICKNESS,
            resizable: true,
        }
    }
}

impl InteractionController {
    /// Create an idle controller with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the size limits.
    pub fn with_limits(mut self, limits: SizeLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the border zone thickness.
    pub fn with_border_thickness(mut self, thickness: f64) -> ConfigResult<Self> {
        if !non_negative(thickness) {
            return Err(ConfigError::InvalidBorderThickness(thickness));
        }
        self.border_thickness = thickness;
        Ok(self)
    }

    pub fn border_thickness(&self) -> f64 {
        self.border_thickness
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Check if a drag is in progress.
    pub fn is_active(&self) -> bool {
        !self.state.is_idle()
    }

    /// The rectangle captured at drag start, while a drag is in progress.
    pub fn original_rect(&self) -> Option<Rect> {
        self.session.map(|s| s.original)
    }

    /// The pointer position captured at drag start, while a drag is in progress.
    pub fn start_pointer(&self) -> Option<Point> {
        self.session.map(|s| s.start_pointer)
    }

    /// The anchor a drag starting at `point` would resize, for hover feedback.
    pub fn hover_anchor(&self, rect: Rect, point: Point) -> Option<ResizeAnchor> {
        if !self.resizable {
            return None;
        }
        hit_test_anchor(rect, point, self.border_thickness)
    }

    /// Start a drag at `pointer` on a window occupying `rect`.
    ///
    /// Border zones start a resize, everything else a move. Ignored while a
    /// drag is already in progress. Returns the resulting state.
    pub fn begin(&mut self, pointer: Point, rect: Rect) -> InteractionState {
        match self.hover_anchor(rect, pointer) {
            Some(anchor) => self.begin_resize(pointer, rect, anchor),
            None => self.begin_move(pointer, rect),
        };
        self.state
    }

    /// Start moving. Returns false if a drag is already in progress.
    pub fn begin_move(&mut self, pointer: Point, rect: Rect) -> bool {
        self.start(pointer, rect, InteractionState::Moving)
    }

    /// Start resizing around `anchor`. Returns false if a drag is already in progress.
    pub fn begin_resize(&mut self, pointer: Point, rect: Rect, anchor: ResizeAnchor) -> bool {
        self.start(pointer, rect, InteractionState::Resizing(anchor))
    }

    fn start(&mut self, pointer: Point, rect: Rect, state: InteractionState) -> bool {
        if self.is_active() {
            log::debug!("Ignoring drag start while {:?}", self.state);
            return false;
        }
        self.state = state;
        self.session = Some(DragSession {
            start_pointer: pointer,
            original: rect,
        });
        log::debug!("Drag started: {:?} at {:?} on {:?}", state, pointer, rect);
        true
    }

    /// Compute the window rectangle for the pointer at `pointer`.
    ///
    /// Returns `None` when idle.
    pub fn update(&self, pointer: Point, config: &SnapConfig) -> Option<Rect> {
        let session = self.session?;
        let delta = pointer - session.start_pointer;
        match self.state {
            InteractionState::Idle => None,
            InteractionState::Moving => Some(move_rect(session.original, delta, config)),
            InteractionState::Resizing(anchor) => Some(resize_rect(
                session.original,
                anchor,
                delta,
                config,
                &self.limits,
            )),
        }
    }

    /// Finish the drag. Returns the state that was active.
    pub fn end(&mut self) -> InteractionState {
        let ended = std::mem::take(&mut self.state);
        self.session = None;
        if !ended.is_idle() {
            log::debug!("Drag ended: {:?}", ended);
        }
        ended
    }

    /// Abort the drag, returning the rectangle captured at drag start.
    pub fn cancel(&mut self) -> Option<Rect> {
        let original = self.original_rect();
        self.state = InteractionState::Idle;
        self.session = None;
        if original.is_some() {
            log::debug!("Drag cancelled");
        }
        original
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas_config() -> SnapConfig {
        SnapConfig::new(5.0, 0.0)
            .unwrap()
            .with_bound(Rect::new(0.0, 0.0, 800.0, 600.0))
    }

    fn window() -> Rect {
        Rect::from_origin_size((205.0, 300.0), (100.0, 50.0))
    }

    #[test]
    fn test_hit_test_zones() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let cases = [
            (Point::new(2.0, 2.0), Some(ResizeAnchor::TopLeft)),
            (Point::new(50.0, 2.0), Some(ResizeAnchor::Top)),
            (Point::new(98.0, 2.0), Some(ResizeAnchor::TopRight)),
            (Point::new(98.0, 50.0), Some(ResizeAnchor::Right)),
            (Point::new(98.0, 98.0), Some(ResizeAnchor::BottomRight)),
            (Point::new(50.0, 98.0), Some(ResizeAnchor::Bottom)),
            (Point::new(2.0, 98.0), Some(ResizeAnchor::BottomLeft)),
            (Point::new(2.0, 50.0), Some(ResizeAnchor::Left)),
            (Point::new(50.0, 50.0), None),
            (Point::new(150.0, 50.0), None),
        ];
        for (point, expected) in cases {
            assert_eq!(hit_test_anchor(rect, point, BORDER_THICKNESS), expected, "{:?}", point);
        }
    }

    #[test]
    fn test_hit_test_narrow_window_prefers_closer_side() {
        let rect = Rect::new(0.0, 0.0, 10.0, 100.0);
        assert_eq!(hit_test_anchor(rect, Point::new(3.0, 50.0), 8.0), Some(ResizeAnchor::Left));
        assert_eq!(hit_test_anchor(rect, Point::new(7.0, 50.0), 8.0), Some(ResizeAnchor::Right));
    }

    #[test]
    fn test_anchor_edges_and_cursor() {
        for anchor in ResizeAnchor::ALL {
            assert!(anchor.controls_width() || anchor.controls_height());
            assert!(!(anchor.moves_left() && anchor.moves_right()));
            assert!(!(anchor.moves_top() && anchor.moves_bottom()));
        }
        assert_eq!(ResizeAnchor::TopLeft.cursor(), ResizeCursor::NwseResize);
        assert_eq!(ResizeAnchor::BottomLeft.cursor(), ResizeCursor::NeswResize);
        assert_eq!(ResizeAnchor::Bottom.cursor(), ResizeCursor::NsResize);
        assert_eq!(ResizeAnchor::Left.cursor(), ResizeCursor::EwResize);
        assert!(!ResizeAnchor::Top.controls_width());
    }

    #[test]
    fn test_begin_picks_move_or_resize() {
        let mut controller = InteractionController::new();
        assert_eq!(controller.begin(Point::new(250.0, 320.0), window()), InteractionState::Moving);
        controller.end();
        assert_eq!(
            controller.begin(Point::new(303.0, 348.0), window()),
            InteractionState::Resizing(ResizeAnchor::BottomRight)
        );
    }

    #[test]
    fn test_non_resizable_border_starts_move() {
        let mut controller = InteractionController::new();
        controller.resizable = false;
        assert_eq!(controller.hover_anchor(window(), Point::new(303.0, 348.0)), None);
        assert_eq!(controller.begin(Point::new(303.0, 348.0), window()), InteractionState::Moving);
    }

    #[test]
    fn test_reentrant_begin_is_ignored() {
        let mut controller = InteractionController::new();
        controller.begin(Point::new(250.0, 320.0), window());
        let other = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(controller.begin(Point::new(1.0, 1.0), other), InteractionState::Moving);
        assert!(!controller.begin_resize(Point::new(1.0, 1.0), other, ResizeAnchor::Top));
        assert_eq!(controller.original_rect(), Some(window()));
        assert_eq!(controller.start_pointer(), Some(Point::new(250.0, 320.0)));
    }

    #[test]
    fn test_move_snaps_to_canvas_right_edge() {
        let mut controller = InteractionController::new();
        controller.begin(Point::new(250.0, 320.0), window());
        let rect = controller.update(Point::new(742.0, 320.0), &canvas_config()).unwrap();
        assert_eq!(rect.origin(), Point::new(700.0, 300.0));
        assert_eq!(rect.size(), window().size());
        assert_eq!(rect.x0 + rect.width() - 1.0, 799.0);
    }

    #[test]
    fn test_move_without_snap_follows_pointer() {
        let mut controller = InteractionController::new();
        controller.begin(Point::new(250.0, 320.0), window());
        let rect = controller.update(Point::new(260.0, 310.0), &SnapConfig::disabled()).unwrap();
        assert_eq!(rect.origin(), Point::new(215.0, 290.0));
    }

    #[test]
    fn test_resize_right_edge_snaps_to_canvas() {
        let rect = resize_rect(
            window(),
            ResizeAnchor::BottomRight,
            Vec2::new(492.0, 0.0),
            &canvas_config(),
            &SizeLimits::default(),
        );
        assert_eq!(rect.x1, 800.0);
        assert_eq!(rect.x0 + rect.width() - 1.0, 799.0);
        assert_eq!(rect.top_left(), window().top_left());
    }

    #[test]
    fn test_bottom_right_resize_keeps_top_left() {
        let config = canvas_config();
        for delta in [Vec2::new(10.0, 10.0), Vec2::new(-40.0, 200.0), Vec2::new(490.0, 248.0)] {
            let rect = resize_rect(window(), ResizeAnchor::BottomRight, delta, &config, &SizeLimits::default());
            assert_eq!(rect.top_left(), window().top_left());
        }
    }

    #[test]
    fn test_opposite_edges_stay_fixed() {
        let config = canvas_config();
        let original = window();
        let delta = Vec2::new(-37.0, -21.0);
        for anchor in ResizeAnchor::ALL {
            let rect = resize_rect(original, anchor, delta, &config, &SizeLimits::default());
            if !anchor.moves_left() {
                assert_eq!(rect.x0, original.x0, "{:?}", anchor);
            }
            if !anchor.moves_right() {
                assert_eq!(rect.x1, original.x1, "{:?}", anchor);
            }
            if !anchor.moves_top() {
                assert_eq!(rect.y0, original.y0, "{:?}", anchor);
            }
            if !anchor.moves_bottom() {
                assert_eq!(rect.y1, original.y1, "{:?}", anchor);
            }
        }
    }

    #[test]
    fn test_clamp_rejects_snap_target_outside_limits() {
        let limits = SizeLimits::new(Size::new(20.0, 20.0), Size::new(150.0, 400.0)).unwrap();
        let config = SnapConfig::new(5.0, 0.0)
            .unwrap()
            .with_bound(Rect::new(400.0, 0.0, 400.0, 600.0));
        let original = Rect::new(100.0, 100.0, 200.0, 200.0);
        // Right edge lands at 397, next to the guide at 400, but that width exceeds 150.
        let rect = resize_rect(original, ResizeAnchor::Right, Vec2::new(197.0, 0.0), &config, &limits);
        assert_eq!(rect.x0, 100.0);
        assert_eq!(rect.width(), 150.0);
        assert_eq!(rect.height(), 100.0);
    }

    #[test]
    fn test_left_resize_clamps_to_minimum() {
        let limits = SizeLimits::at_least(Size::new(50.0, 30.0)).unwrap();
        let original = Rect::new(100.0, 100.0, 200.0, 200.0);
        let rect = resize_rect(
            original,
            ResizeAnchor::TopLeft,
            Vec2::new(80.0, 90.0),
            &SnapConfig::disabled(),
            &limits,
        );
        assert_eq!(rect, Rect::new(150.0, 170.0, 200.0, 200.0));
    }

    #[test]
    fn test_edge_anchor_ignores_other_axis() {
        let config = canvas_config();
        let original = Rect::new(2.0, 100.0, 102.0, 200.0);
        // Top edge drag near the canvas top; the left edge at 2 is in range but must not move.
        let rect = resize_rect(original, ResizeAnchor::Top, Vec2::new(0.0, -97.0), &config, &SizeLimits::default());
        assert_eq!(rect, Rect::new(2.0, 0.0, 102.0, 200.0));
    }

    #[test]
    fn test_drag_past_fixed_edge_collapses_to_minimum() {
        let limits = SizeLimits::at_least(Size::new(20.0, 20.0)).unwrap();
        let config = SnapConfig::disabled();
        let original = window();

        // Right edge dragged to x=150, then further to x=100, both left of x0=205.
        let near = resize_rect(original, ResizeAnchor::Right, Vec2::new(-155.0, 0.0), &config, &limits);
        let far = resize_rect(original, ResizeAnchor::Right, Vec2::new(-205.0, 0.0), &config, &limits);
        assert_eq!(near, Rect::new(205.0, 300.0, 225.0, 350.0));
        assert_eq!(far, near);

        // Left edge dragged past the right edge.
        let rect = resize_rect(original, ResizeAnchor::Left, Vec2::new(150.0, 0.0), &config, &limits);
        assert_eq!(rect, Rect::new(285.0, 300.0, 305.0, 350.0));

        // Top edge dragged below the bottom edge.
        let rect = resize_rect(original, ResizeAnchor::Top, Vec2::new(0.0, 120.0), &config, &limits);
        assert_eq!(rect, Rect::new(205.0, 330.0, 305.0, 350.0));
    }

    #[test]
    fn test_right_edge_follows_pointer_monotonically() {
        let config = SnapConfig::disabled();
        let mut last = f64::INFINITY;
        for dx in [0.0, -40.0, -99.0, -100.0, -150.0, -250.0] {
            let rect = resize_rect(window(), ResizeAnchor::Right, Vec2::new(dx, 0.0), &config, &SizeLimits::default());
            assert!(rect.x1 <= last, "{} grew to {}", dx, rect.x1);
            assert!(rect.x1 >= rect.x0);
            assert_eq!(rect.x0, 205.0);
            last = rect.x1;
        }
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let limits = SizeLimits::new(Size::new(40.0, 10.0), Size::new(300.0, 90.0)).unwrap();
        for w in [0.0, 39.0, 40.0, 120.0, 300.0, 1000.0] {
            let once = limits.clamp_width(w);
            assert_eq!(limits.clamp_width(once), once);
            assert!((40.0..=300.0).contains(&once));
        }
        for h in [-5.0, 50.0, 95.0] {
            let once = limits.clamp_height(h);
            assert_eq!(limits.clamp_height(once), once);
            assert!((10.0..=90.0).contains(&once));
        }
    }

    #[test]
    fn test_size_limits_validation() {
        assert_eq!(
            SizeLimits::new(Size::new(300.0, 10.0), Size::new(200.0, 90.0)),
            Err(ConfigError::InvertedLimits {
                axis: "width",
                min: 300.0,
                max: 200.0,
            })
        );
        assert_eq!(
            SizeLimits::at_least(Size::new(10.0, -1.0)),
            Err(ConfigError::InvalidMinimum {
                axis: "height",
                value: -1.0,
            })
        );
        assert!(InteractionController::new().with_border_thickness(-2.0).is_err());
    }

    #[test]
    fn test_end_returns_to_idle() {
        let mut controller = InteractionController::new();
        controller.begin(Point::new(303.0, 348.0), window());
        assert!(controller.state().is_resizing());
        assert_eq!(controller.end(), InteractionState::Resizing(ResizeAnchor::BottomRight));
        assert!(controller.state().is_idle());
        assert_eq!(controller.update(Point::new(400.0, 400.0), &canvas_config()), None);
        assert_eq!(controller.end(), InteractionState::Idle);
    }

    #[test]
    fn test_cancel_restores_original() {
        let mut controller = InteractionController::new();
        assert_eq!(controller.cancel(), None);
        controller.begin(Point::new(250.0, 320.0), window());
        assert_eq!(controller.cancel(), Some(window()));
        assert!(!controller.is_active());
    }
}
