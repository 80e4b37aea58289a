//! Inertial motion ("fling") planning after a drag is released.
//!
//! While a window is dragged, recent pointer samples are kept in a short
//! trail. On release the trail yields an average velocity, which is turned
//! into a deceleration plan: where the window lands, how long the glide
//! takes, and which easing curve the host animator should play it with.

use crate::error::{ConfigError, ConfigResult, non_negative};
use crate::geometry::{RectExt, Vector};
use crate::snap::{SnapConfig, snap_position};
use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Samples older than this (relative to the newest one) are dropped.
pub const DEFAULT_STALENESS_WINDOW: Duration = Duration::from_millis(100);

/// Default deceleration in pixels per second squared.
pub const DEFAULT_DECELERATION: f64 = 2000.0;

/// Deceleration curve for the host animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    QuadraticOut,
    #[default]
    CubicOut,
    ExponentialOut,
}

impl Easing {
    /// Evaluate the curve at progress `t` in `[0, 1]`.
    pub fn ease(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadraticOut => 1.0 - (1.0 - t).powi(2),
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::ExponentialOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
        }
    }
}

/// Inertia tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InertiaConfig {
    /// How far back the trail reaches.
    pub staleness_window: Duration,
    /// Trails spanning less time than this yield no fling.
    pub min_elapsed: Duration,
    /// Deceleration in px/s²; the glide lasts `speed / deceleration`.
    pub deceleration: f64,
    /// Fraction of `velocity * duration` travelled. 0.5 is uniform deceleration.
    pub damping: f64,
    /// Upper bound on the glide duration.
    pub max_duration: Duration,
    /// Curve handed to the animator.
    pub easing: Easing,
}

impl Default for InertiaConfig {
    fn default() -> Self {
        Self {
            staleness_window: DEFAULT_STALENESS_WINDOW,
            min_elapsed: Duration::from_millis(1),
            deceleration: DEFAULT_DECELERATION,
            damping: 0.5,
            max_duration: Duration::from_secs(1),
            easing: Easing::default(),
        }
    }
}

impl InertiaConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.staleness_window.is_zero() {
            return Err(ConfigError::EmptyStalenessWindow);
        }
        if !(self.deceleration.is_finite() && self.deceleration > 0.0) {
            return Err(ConfigError::InvalidDeceleration(self.deceleration));
        }
        if !non_negative(self.damping) {
            return Err(ConfigError::InvalidDamping(self.damping));
        }
        Ok(())
    }
}

/// A pointer position recorded during a drag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailSample {
    pub position: Point,
    /// Monotonic time since a host-chosen origin.
    pub timestamp: Duration,
}

/// A one-shot motion plan for the host animator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InertialMotion {
    /// Window top-left when the glide starts.
    pub start: Point,
    /// Window top-left when the glide ends.
    pub end: Point,
    pub duration: Duration,
    pub easing: Easing,
    /// Release velocity in px/s.
    pub velocity: Vec2,
}

impl InertialMotion {
    /// Glide duration in seconds.
    pub fn seconds(&self) -> f64 {
        self.duration.as_secs_f64()
    }

    pub fn displacement(&self) -> Vec2 {
        self.end - self.start
    }
}

/// Collects the drag trail and plans the fling on release.
#[derive(Debug, Clone, Default)]
pub struct InertiaCalculator {
    pub config: InertiaConfig,
    trail: VecDeque<TrailSample>,
}

impl InertiaCalculator {
    pub fn new(config: InertiaConfig) -> Self {
        Self {
            config,
            trail: VecDeque::new(),
        }
    }

    /// Append a sample and drop everything older than the staleness window.
    ///
    /// A timestamp earlier than the newest sample restarts the trail.
    pub fn record_sample(&mut self, position: Point, timestamp: Duration) {
        if self.trail.back().is_some_and(|last| timestamp < last.timestamp) {
            log::debug!("Trail timestamp went backwards, restarting trail");
            self.trail.clear();
        }
        self.trail.push_back(TrailSample { position, timestamp });

        while let Some(oldest) = self.trail.front() {
            if timestamp.saturating_sub(oldest.timestamp) > self.config.staleness_window {
                self.trail.pop_front();
            } else {
                break;
            }
        }
    }

    /// Discard the trail.
    pub fn clear(&mut self) {
        self.trail.clear();
    }

    pub fn len(&self) -> usize {
        self.trail.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trail.is_empty()
    }

    /// Samples from oldest to newest.
    pub fn samples(&self) -> impl Iterator<Item = &TrailSample> {
        self.trail.iter()
    }

    /// Average velocity across the trail in px/s.
    ///
    /// `None` with fewer than two samples or when they span almost no time.
    pub fn velocity(&self) -> Option<Vec2> {
        if self.trail.len() < 2 {
            return None;
        }
        let first = self.trail.front()?;
        let last = self.trail.back()?;
        let elapsed = last.timestamp.saturating_sub(first.timestamp);
        if elapsed < self.config.min_elapsed || elapsed.is_zero() {
            return None;
        }
        let displacement = Vector::new(first.position, last.position).displacement()?;
        Some(displacement / elapsed.as_secs_f64())
    }

    /// Plan a fling for a window released at `current`.
    ///
    /// The landing position goes back through the snap engine. Returns `None`
    /// for a plain release.
    pub fn compute_fling(&self, current: Rect, snap: &SnapConfig) -> Option<InertialMotion> {
        let velocity = self.velocity()?;
        let speed = velocity.hypot();
        if !speed.is_finite() || speed <= f64::EPSILON {
            return None;
        }

        let max_secs = self.config.max_duration.as_secs_f64();
        let secs = (speed / self.config.deceleration).min(max_secs);
        let duration = Duration::try_from_secs_f64(secs).ok()?;
        if duration.is_zero() {
            return None;
        }

        let travel = velocity * (secs * self.config.damping);
        let landing = current + travel;
        let end = snap_position(landing, snap).point;

        let motion = InertialMotion {
            start: current.top_left(),
            end,
            duration,
            easing: self.config.easing,
            velocity,
        };
        log::debug!(
            "Fling planned: {:?} -> {:?} over {:.3}s",
            motion.start,
            motion.end,
            motion.seconds()
        );
        Some(motion)
    }

    /// Plan a fling that also keeps the window inside `container`.
    pub fn compute_fling_within(
        &self,
        current: Rect,
        snap: &SnapConfig,
        container: Rect,
    ) -> Option<InertialMotion> {
        let mut motion = self.compute_fling(current, snap)?;
        motion.end = contain(motion.end, current.size(), container);
        Some(motion)
    }
}

/// Clamp a top-left so a window of `size` stays inside `container`.
///
/// A window larger than the container is pinned to the container's origin on that axis.
fn contain(origin: Point, size: Size, container: Rect) -> Point {
    let x = if size.width <= container.width() {
        origin.x.max(container.x0).min(container.x1 - size.width)
    } else {
        container.x0
    };
    let y = if size.height <= container.height() {
        origin.y.max(container.y0).min(container.y1 - size.height)
    } else {
        container.y0
    };
    Point::new(x, y)
}
