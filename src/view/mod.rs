//! View layer - turns a `PanelFrame` into pixels
//!
//! The panel draws itself through the `DrawSurface` seam; `Frame` is the
//! software implementation over a softbuffer-style ARGB buffer.

pub mod frame;

pub use frame::{blend_colors, Frame};

use crate::model::{CornerRadii, PanelFrame};
use crate::style::Color;

/// Axis-aligned rectangle in surface pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Minimal drawing interface the panel needs from a platform surface
pub trait DrawSurface {
    /// Width and height in pixels
    fn size(&self) -> (usize, usize);

    fn clear_to(&mut self, color: Color);

    /// Fill a rectangle with independently rounded corners and an inner border
    fn fill_rounded_rect(
        &mut self,
        rect: Rect,
        radii: &CornerRadii,
        fill: Color,
        border: Color,
        border_width: f64,
    );
}

/// Paint one panel frame, filling the whole surface
///
/// The host window tracks the panel bounds, so the panel is drawn at the
/// surface origin at the surface's own size.
pub fn paint_panel(surface: &mut impl DrawSurface, frame: &PanelFrame) {
    let (width, height) = surface.size();
    surface.clear_to(Color::TRANSPARENT);
    if width == 0 || height == 0 {
        return;
    }
    surface.fill_rounded_rect(
        Rect::new(0.0, 0.0, width as f64, height as f64),
        &frame.radii,
        frame.style.fill,
        frame.style.border,
        frame.style.border_width as f64,
    );
}
