//! FloatDesk Core Library
//!
//! Platform-agnostic layout and motion engine for floating windows: edge
//! snapping, move/resize interaction and inertial release.

pub mod error;
pub mod geometry;
pub mod inertia;
pub mod interaction;
pub mod snap;
pub mod window;

pub use error::{ConfigError, ConfigResult};
pub use geometry::{Corner, Distance, Edge, PointExt, RectExt, Vector, abs_min, is_near};
pub use inertia::{Easing, InertiaCalculator, InertiaConfig, InertialMotion, TrailSample};
pub use interaction::{
    BORDER_THICKNESS, InteractionController, InteractionState, ResizeAnchor, ResizeCursor, SizeLimits,
    hit_test_anchor, move_rect, resize_rect,
};
pub use snap::{
    DEFAULT_SNAP_DISTANCE, SnapConfig, SnapResult, snap_bottom_left, snap_bottom_right, snap_corner,
    snap_position, snap_top_left, snap_top_right,
};
pub use window::{FloatingWindow, PointerEvent, Release, WindowResponse};
