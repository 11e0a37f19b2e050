//! Panel model - the complete state of the toolbar panel
//!
//! This module contains all the state types following the Elm Architecture pattern.
//! Only `update` mutates a `PanelModel`.

pub mod corners;
pub mod geometry;

pub use corners::{
    Corner, CornerRadii, Corners, Edges, Margins, ProximityState, TouchedEdges,
};
pub use geometry::{PanelGeometry, Point, PointF, ScreenMetrics, Size, SizeF};

use serde::Serialize;

use crate::config::{PanelConfig, ResolvedConfig};
use crate::error::PanelError;
use crate::panel::{
    clamp_position, DragAccumulator, HoverState, Move, ProximityDetector, RadiusAnimator,
    SizeTransitionController,
};
use crate::style::PanelStyle;

/// Pointer-related state
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PointerState {
    /// Last global pointer position while the button is held
    pub drag_origin: Option<PointF>,
    /// Last known global pointer position
    pub cursor: Option<PointF>,
    /// Grabbed affordance (closed hand, grabbed border)
    pub grabbed: bool,
    /// Hover highlight; cleared only by a confirmed leave
    pub hovered: bool,
}

impl PointerState {
    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanelFrame {
    pub geometry: PanelGeometry,
    pub radii: CornerRadii,
    pub style: PanelStyle,
}

/// The complete panel model
#[derive(Debug, Clone)]
pub struct PanelModel {
    pub config: ResolvedConfig,
    /// Captured once at startup
    pub screen: ScreenMetrics,
    pub geometry: PanelGeometry,
    pub radii: CornerRadii,
    pub pointer: PointerState,
    pub proximity: ProximityDetector,
    pub radius_animator: RadiusAnimator,
    pub drag: DragAccumulator,
    pub size: SizeTransitionController,
}

impl PanelModel {
    /// Expanded panel centered on `screen`
    pub fn new(screen: ScreenMetrics, config: &PanelConfig) -> Result<Self, PanelError> {
        let resolved = config.resolve(&screen)?;
        let position = PanelGeometry::centered(resolved.full_size, &screen).position;
        Self::from_resolved(screen, resolved, position)
    }

    /// Expanded panel with its top-left at `position` (clamped onto the screen)
    pub fn new_at(
        screen: ScreenMetrics,
        config: &PanelConfig,
        position: Point,
    ) -> Result<Self, PanelError> {
        let resolved = config.resolve(&screen)?;
        Self::from_resolved(screen, resolved, position)
    }

    fn from_resolved(
        screen: ScreenMetrics,
        config: ResolvedConfig,
        position: Point,
    ) -> Result<Self, PanelError> {
        let size = config.full_size;
        let position = clamp_position(position, size, &screen, config.clamp_margin);
        let geometry = PanelGeometry::new(position, size);

        let proximity = ProximityDetector::new(&config.proximity);
        let initial = proximity.evaluate(&geometry, &screen);
        let radius_animator = RadiusAnimator::new(
            initial,
            config.square_radius,
            config.round_radius,
            config.radius_duration,
            config.easing,
        );
        let radii = radius_animator.settled_radii();
        let size_controller = SizeTransitionController::new(
            size,
            config.minimized,
            config.size_duration,
            config.easing,
        );

        tracing::info!(
            screen_w = screen.width(),
            screen_h = screen.height(),
            x = position.x,
            y = position.y,
            w = size.width,
            h = size.height,
            "panel created"
        );

        Ok(Self {
            drag: DragAccumulator::new(config.clamp_margin),
            config,
            screen,
            geometry,
            radii,
            pointer: PointerState::default(),
            proximity,
            radius_animator,
            size: size_controller,
        })
    }

    pub fn hover_state(&self) -> HoverState {
        self.size.state()
    }

    pub fn style(&self) -> PanelStyle {
        self.config
            .palette
            .style(self.pointer.hovered, self.pointer.grabbed)
    }

    pub fn frame(&self) -> PanelFrame {
        PanelFrame {
            geometry: self.geometry,
            radii: self.radii,
            style: self.style(),
        }
    }

    /// True while any track is running; the host keeps ticking until false
    pub fn is_animating(&self) -> bool {
        self.radius_animator.is_animating() || self.size.is_animating()
    }

    pub fn touched_edges(&self) -> TouchedEdges {
        let margins = self.proximity.margins(&self.geometry, &self.screen);
        self.proximity.touched_edges(&margins)
    }

    pub fn proximity_state(&self) -> ProximityState {
        self.proximity.evaluate(&self.geometry, &self.screen)
    }

    /// Move the panel by `delta` through the drag accumulator (floored, clamped)
    pub fn apply_offset(&mut self, delta: PointF) -> Result<Move, PanelError> {
        let moved = self.drag.apply(
            delta,
            self.geometry.position,
            self.geometry.size,
            &self.screen,
        )?;
        self.geometry.position = self.geometry.position + Point::new(moved.dx, moved.dy);
        Ok(moved)
    }

    /// Re-run proximity detection and start radius tracks for flipped corners
    pub fn refresh_proximity(&mut self) -> Vec<Corner> {
        let state = self.proximity_state();
        self.radius_animator.observe(state, &self.radii)
    }

    /// Panic with context if a model invariant is broken
    #[cfg(debug_assertions)]
    pub fn assert_invariants_with_context(&self, context: &str) {
        let square = self.config.square_radius;
        let round = self.config.round_radius;
        for corner in Corner::ALL {
            let radius = self.radii.get(corner);
            assert!(
                radius >= square - 1e-9 && radius <= round + 1e-9,
                "[{}] radius {} at {} outside [{}, {}]",
                context,
                radius,
                corner.label(),
                square,
                round
            );
        }

        let size = self.geometry.size;
        assert_eq!(
            self.size.clamp_size(size),
            size,
            "[{}] size {}x{} outside bounds",
            context,
            size.width,
            size.height
        );

        let position = self.geometry.position;
        assert_eq!(
            clamp_position(position, size, &self.screen, self.config.clamp_margin),
            position,
            "[{}] position ({}, {}) outside clamp range",
            context,
            position.x,
            position.y
        );
    }
}
