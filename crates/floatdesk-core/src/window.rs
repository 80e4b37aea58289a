//! Per-window drag session.
//!
//! Pointer events feed both the interaction state machine (live geometry) and
//! the inertia trail. Release ends the interaction and, for a move, plans a
//! fling for the host to animate.

use crate::geometry::round;
use crate::inertia::{InertiaCalculator, InertiaConfig, InertialMotion};
use crate::interaction::{InteractionController, InteractionState, ResizeAnchor, SizeLimits};
use crate::snap::SnapConfig;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Normalized pointer event for a single window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point, timestamp: Duration },
    Move { position: Point, timestamp: Duration },
    Up { position: Point, timestamp: Duration },
}

/// Outcome of releasing the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Release {
    /// Window geometry at release.
    pub rect: Rect,
    /// The interaction that was active.
    pub ended: InteractionState,
    /// Glide to play, if the release was a fling.
    pub motion: Option<InertialMotion>,
}

/// What a pointer event did to the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowResponse {
    /// The event did not apply (e.g. a move while idle, a second pointer-down).
    Ignored,
    Started(InteractionState),
    Updated(Rect),
    Released(Release),
}

/// A floating window's geometry plus its drag session.
#[derive(Debug, Clone)]
pub struct FloatingWindow {
    rect: Rect,
    interaction: InteractionController,
    inertia: InertiaCalculator,
    container: Option<Rect>,
    /// When false, releases never produce a fling.
    pub inertia_enabled: bool,
    /// Round written-back geometry to whole pixels.
    pub round_to_pixels: bool,
}

impl FloatingWindow {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            interaction: InteractionController::new(),
            inertia: InertiaCalculator::default(),
            container: None,
            inertia_enabled: true,
            round_to_pixels: true,
        }
    }

    pub fn with_limits(mut self, limits: SizeLimits) -> Self {
        self.interaction.limits = limits;
        self
    }

    pub fn with_inertia(mut self, config: InertiaConfig) -> Self {
        self.inertia.config = config;
        self
    }

    /// Keep fling landings inside `container`.
    pub fn with_container(mut self, container: Rect) -> Self {
        self.container = Some(container);
        self
    }

    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.interaction.resizable = resizable;
        self
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Replace the geometry, e.g. after the host finished animating a fling.
    /// Ignored while a drag is in progress.
    pub fn set_rect(&mut self, rect: Rect) {
        if self.interaction.is_active() {
            log::warn!("Ignoring set_rect during an active drag");
            return;
        }
        self.rect = rect;
    }

    pub fn state(&self) -> InteractionState {
        self.interaction.state()
    }

    pub fn interaction(&self) -> &InteractionController {
        &self.interaction
    }

    pub fn inertia(&self) -> &InertiaCalculator {
        &self.inertia
    }

    /// Resize anchor under `point`, for hover feedback.
    pub fn hover_anchor(&self, point: Point) -> Option<ResizeAnchor> {
        self.interaction.hover_anchor(self.rect, point)
    }

    /// Start a drag. A pointer-down during an active drag is ignored.
    pub fn pointer_down(&mut self, position: Point, timestamp: Duration) -> InteractionState {
        if self.interaction.is_active() {
            log::debug!("Ignoring pointer-down during {:?}", self.interaction.state());
            return self.interaction.state();
        }
        let state = self.interaction.begin(position, self.rect);
        self.inertia.clear();
        self.inertia.record_sample(position, timestamp);
        state
    }

    /// Track the pointer and return the window's new geometry.
    pub fn pointer_move(&mut self, position: Point, timestamp: Duration, config: &SnapConfig) -> Rect {
        if !self.interaction.is_active() {
            return self.rect;
        }
        self.inertia.record_sample(position, timestamp);
        if let Some(rect) = self.interaction.update(position, config) {
            self.write_back(rect);
        }
        self.rect
    }

    /// Finish the drag and plan a fling if the window was being moved.
    pub fn pointer_up(&mut self, position: Point, timestamp: Duration, config: &SnapConfig) -> Release {
        if !self.interaction.is_active() {
            return Release {
                rect: self.rect,
                ended: InteractionState::Idle,
                motion: None,
            };
        }

        self.pointer_move(position, timestamp, config);
        let ended = self.interaction.end();

        let motion = if ended.is_moving() && self.inertia_enabled {
            let motion = match self.container {
                Some(container) => self.inertia.compute_fling_within(self.rect, config, container),
                None => self.inertia.compute_fling(self.rect, config),
            };
            motion.map(|mut motion| {
                if self.round_to_pixels {
                    motion.end = round(motion.end);
                }
                motion
            })
        } else {
            None
        };
        self.inertia.clear();

        Release {
            rect: self.rect,
            ended,
            motion,
        }
    }

    /// Abort the drag, restoring the geometry from drag start.
    pub fn cancel(&mut self) -> Rect {
        if let Some(original) = self.interaction.cancel() {
            self.rect = original;
        }
        self.inertia.clear();
        self.rect
    }

    /// Dispatch a pointer event.
    pub fn handle_pointer_event(&mut self, event: PointerEvent, config: &SnapConfig) -> WindowResponse {
        match event {
            PointerEvent::Down { position, timestamp } => {
                if self.interaction.is_active() {
                    return WindowResponse::Ignored;
                }
                WindowResponse::Started(self.pointer_down(position, timestamp))
            }
            PointerEvent::Move { position, timestamp } => {
                if !self.interaction.is_active() {
                    return WindowResponse::Ignored;
                }
                WindowResponse::Updated(self.pointer_move(position, timestamp, config))
            }
            PointerEvent::Up { position, timestamp } => {
                if !self.interaction.is_active() {
                    return WindowResponse::Ignored;
                }
                WindowResponse::Released(self.pointer_up(position, timestamp, config))
            }
        }
    }

    /// Store live geometry. A move rounds the origin and keeps the size; a
    /// resize rounds each edge on its own so fixed edges stay put.
    fn write_back(&mut self, rect: Rect) {
        self.rect = if !self.round_to_pixels {
            rect
        } else if self.interaction.state().is_moving() {
            rect.with_origin(round(rect.origin()))
        } else {
            rect.round()
        };
    }
}
