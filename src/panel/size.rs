//! Hover-driven expand/collapse with anchor-preserving compensation
//!
//! The panel shrinks toward (or grows away from) an anchor chosen from the
//! screen edges it touches, so a panel docked to an edge stays docked.

use std::time::Duration;

use serde::Serialize;

use crate::animation::{AnimationTrack, Easing};
use crate::model::{PanelGeometry, PointF, Size, SizeF, TouchedEdges};

/// Expanded while hovered, collapsed otherwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HoverState {
    Expanded,
    Collapsed,
}

/// Point held fixed while resizing, as fractions of the panel size
///
/// Each axis is `0.0` (left/top edge), `0.5` (middle) or `1.0` (right/bottom edge).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Anchor {
    pub fx: f64,
    pub fy: f64,
}

impl Anchor {
    pub const CENTER: Anchor = Anchor { fx: 0.5, fy: 0.5 };

    /// Corner point for two touched edges, edge midpoint for one, center otherwise
    pub fn from_edges(edges: &TouchedEdges) -> Self {
        let axis = |near: bool, far: bool| {
            if near {
                0.0
            } else if far {
                1.0
            } else {
                0.5
            }
        };
        Self {
            fx: axis(edges.left, edges.right),
            fy: axis(edges.top, edges.bottom),
        }
    }

    /// Anchor in panel-local pixels
    pub fn local(&self, size: SizeF) -> PointF {
        PointF::new(self.fx * size.width, self.fy * size.height)
    }

    /// Anchor in global screen pixels
    pub fn global(&self, geometry: &PanelGeometry) -> PointF {
        geometry.position.to_f64() + self.local(geometry.size.to_f64())
    }

    /// Position offset that keeps this anchor fixed while scaling `from` → `to`
    pub fn compensation(&self, from: SizeF, to: SizeF) -> PointF {
        let local = self.local(from);
        let scale = |target: f64, current: f64| {
            if current == 0.0 {
                0.0
            } else {
                1.0 - target / current
            }
        };
        PointF::new(
            local.x * scale(to.width, from.width),
            local.y * scale(to.height, from.height),
        )
    }
}

/// Resolved minimized-size policy in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum MinimizedSize {
    /// Thin across a touched edge, `parallel` otherwise
    EdgeOriented { parallel: i32, perpendicular: i32 },
    /// Same collapsed size wherever the panel is
    Fixed(Size),
}

/// One size step produced by a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeStep {
    /// New size, snapped and clamped
    pub size: Size,
    /// Position offset to queue through the drag path
    pub compensation: PointF,
    pub finished: bool,
}

#[derive(Debug, Clone)]
pub struct SizeTransitionController {
    state: HoverState,
    anchor: Anchor,
    track: Option<AnimationTrack<SizeF>>,
    /// Last written size before snapping
    current: SizeF,
    full: Size,
    minimized: MinimizedSize,
    duration: Duration,
    easing: Easing,
}

impl SizeTransitionController {
    /// Starts expanded at `full`
    pub fn new(full: Size, minimized: MinimizedSize, duration: Duration, easing: Easing) -> Self {
        Self {
            state: HoverState::Expanded,
            anchor: Anchor::CENTER,
            track: None,
            current: full.to_f64(),
            full,
            minimized,
            duration,
            easing,
        }
    }

    pub fn state(&self) -> HoverState {
        self.state
    }

    /// Anchor used by the most recent transition
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    pub fn is_animating(&self) -> bool {
        self.track.is_some()
    }

    /// Target of the running transition, if any
    pub fn target(&self) -> Option<Size> {
        self.track.as_ref().map(|track| track.end().round())
    }

    /// Collapsed size for a panel touching `edges`
    pub fn minimized_size(&self, edges: &TouchedEdges) -> Size {
        let size = match self.minimized {
            MinimizedSize::EdgeOriented {
                parallel,
                perpendicular,
            } => Size::new(
                if edges.horizontal() { perpendicular } else { parallel },
                if edges.vertical() { perpendicular } else { parallel },
            ),
            MinimizedSize::Fixed(size) => size,
        };
        size.clamp(self.min_bound(), self.full)
    }

    /// Smallest size any collapse can produce; lower bound of the size invariant
    pub fn min_bound(&self) -> Size {
        let bound = match self.minimized {
            MinimizedSize::EdgeOriented {
                parallel,
                perpendicular,
            } => {
                let smallest = parallel.min(perpendicular).max(1);
                Size::new(smallest, smallest)
            }
            MinimizedSize::Fixed(size) => Size::new(size.width.max(1), size.height.max(1)),
        };
        bound.min(self.full)
    }

    /// Clamp a size into `[min_bound, full]`
    pub fn clamp_size(&self, size: Size) -> Size {
        size.clamp(self.min_bound(), self.full)
    }

    /// Start animating toward `target`, holding `anchor` fixed
    ///
    /// Returns false when nothing needs to change: the target equals the
    /// current size (any running track is dropped), or a running track
    /// already heads there.
    pub fn begin_transition(&mut self, target: Size, anchor: Anchor) -> bool {
        let target = self.clamp_size(target);
        if self.target() == Some(target) {
            return false;
        }
        if self.current.round() == target {
            self.track = None;
            self.current = target.to_f64();
            return false;
        }

        self.anchor = anchor;
        self.track = Some(AnimationTrack::new(
            self.current,
            target.to_f64(),
            self.duration,
            self.easing,
        ));
        tracing::debug!(
            from_w = self.current.width,
            from_h = self.current.height,
            to_w = target.width,
            to_h = target.height,
            anchor_x = anchor.fx,
            anchor_y = anchor.fy,
            "size transition started"
        );
        true
    }

    /// Pointer entered the panel
    pub fn on_enter(&mut self, edges: &TouchedEdges) -> bool {
        if self.state == HoverState::Expanded {
            return false;
        }
        self.state = HoverState::Expanded;
        self.begin_transition(self.full, Anchor::from_edges(edges))
    }

    /// Pointer left the panel; ignored while `cursor` is still inside `geometry`
    ///
    /// Resizing moves the bounds under a still cursor, which makes the
    /// platform report leave/enter pairs that are not real exits.
    pub fn on_leave(
        &mut self,
        cursor: PointF,
        geometry: &PanelGeometry,
        edges: &TouchedEdges,
    ) -> bool {
        if geometry.contains(cursor) {
            tracing::debug!(x = cursor.x, y = cursor.y, "leave ignored, cursor inside");
            return false;
        }
        if self.state == HoverState::Collapsed {
            return false;
        }
        self.state = HoverState::Collapsed;
        let target = self.minimized_size(edges);
        self.begin_transition(target, Anchor::from_edges(edges))
    }

    /// Advance the size track
    pub fn tick(&mut self, dt: Duration) -> Option<SizeStep> {
        let track = self.track.as_mut()?;
        let next = track.advance(dt);
        let finished = track.is_finished();
        let compensation = self.anchor.compensation(self.current, next);
        self.current = next;
        if finished {
            self.track = None;
        }
        Some(SizeStep {
            size: self.clamp_size(next.round()),
            compensation,
            finished,
        })
    }
}
