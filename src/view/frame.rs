//! Software rasterizer over an ARGB pixel buffer
//!
//! Pixels outside the panel shape stay fully transparent so the host window
//! shows through; edge pixels are anti-aliased from a signed distance.

use super::{DrawSurface, Rect};
use crate::model::CornerRadii;
use crate::style::Color;

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in ARGB format (0xAARRGGBB). Returns the blended color
/// with full opacity (alpha = 0xFF).
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let bg_r = ((bg >> 16) & 0xFF) as f32;
    let bg_g = ((bg >> 8) & 0xFF) as f32;
    let bg_b = (bg & 0xFF) as f32;

    let fg_r = ((fg >> 16) & 0xFF) as f32;
    let fg_g = ((fg >> 8) & 0xFF) as f32;
    let fg_b = (fg & 0xFF) as f32;

    let final_r = (bg_r * (1.0 - alpha) + fg_r * alpha) as u32;
    let final_g = (bg_g * (1.0 - alpha) + fg_g * alpha) as u32;
    let final_b = (bg_b * (1.0 - alpha) + fg_b * alpha) as u32;

    0xFF000000 | (final_r << 16) | (final_g << 8) | final_b
}

/// Scale a color's channels and alpha by `coverage` (premultiplied ARGB)
#[inline]
fn premultiply(color: u32, coverage: f32) -> u32 {
    let scale = |shift: u32| ((((color >> shift) & 0xFF) as f32) * coverage).round() as u32;
    (scale(24) << 24) | (scale(16) << 16) | (scale(8) << 8) | scale(0)
}

/// Mix two opaque ARGB colors, `t = 0` gives `a`
#[inline]
fn mix(a: u32, b: u32, t: f32) -> u32 {
    if t <= 0.0 {
        a
    } else if t >= 1.0 {
        b
    } else {
        blend_colors(a, b, t)
    }
}

/// Signed distance from `(px, py)` (relative to the box center) to a rounded box
///
/// `hw`/`hh` are half extents; negative inside.
#[inline]
fn rounded_box_distance(px: f64, py: f64, hw: f64, hh: f64, radius: f64) -> f64 {
    let qx = px.abs() - hw + radius;
    let qy = py.abs() - hh + radius;
    let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
    outside + qx.max(qy).min(0.0) - radius
}

/// Borrowed pixel buffer; writes outside the bounds are dropped
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
}

impl<'a> Frame<'a> {
    /// Create a new frame from a mutable pixel buffer
    ///
    /// If the buffer is smaller than width*height, dimensions are adjusted
    /// to match the actual buffer size to prevent out-of-bounds access.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let expected_size = width * height;
        let actual_size = buffer.len();

        let (width, height) = if actual_size < expected_size && width > 0 {
            (width, actual_size / width)
        } else {
            (width, height)
        };

        Self {
            buffer,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get a pixel, or 0 when out of bounds
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> u32 {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x]
        } else {
            0
        }
    }

    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, color: u32) {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x] = color;
        }
    }

    /// Clear the entire buffer with a solid color
    #[inline]
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// Composite `color` at `coverage` over the current pixel
    ///
    /// Transparent pixels get premultiplied color so edges fade into the
    /// desktop instead of into black.
    fn cover_pixel(&mut self, x: usize, y: usize, color: u32, coverage: f32) {
        if coverage <= 0.0 || x >= self.width || y >= self.height {
            return;
        }
        let idx = y * self.width + x;
        if coverage >= 1.0 {
            self.buffer[idx] = color;
        } else if self.buffer[idx] >> 24 == 0 {
            self.buffer[idx] = premultiply(color, coverage);
        } else {
            self.buffer[idx] = blend_colors(self.buffer[idx], color, coverage);
        }
    }
}

impl DrawSurface for Frame<'_> {
    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn clear_to(&mut self, color: Color) {
        self.clear(color.to_argb_u32());
    }

    fn fill_rounded_rect(
        &mut self,
        rect: Rect,
        radii: &CornerRadii,
        fill: Color,
        border: Color,
        border_width: f64,
    ) {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return;
        }
        let (hw, hh) = (rect.width / 2.0, rect.height / 2.0);
        let (cx, cy) = (rect.x + hw, rect.y + hh);
        let max_radius = hw.min(hh);
        let fill = fill.to_argb_u32() | 0xFF000000;
        let border = border.to_argb_u32() | 0xFF000000;

        let x0 = rect.x.floor().max(0.0) as usize;
        let y0 = rect.y.floor().max(0.0) as usize;
        let x1 = ((rect.x + rect.width).ceil().max(0.0) as usize).min(self.width);
        let y1 = ((rect.y + rect.height).ceil().max(0.0) as usize).min(self.height);

        for y in y0..y1 {
            let py = y as f64 + 0.5 - cy;
            for x in x0..x1 {
                let px = x as f64 + 0.5 - cx;
                let radius = match (px < 0.0, py < 0.0) {
                    (true, true) => radii.top_left,
                    (false, true) => radii.top_right,
                    (true, false) => radii.bottom_left,
                    (false, false) => radii.bottom_right,
                }
                .clamp(0.0, max_radius);

                let distance = rounded_box_distance(px, py, hw, hh, radius);
                let coverage = (0.5 - distance).clamp(0.0, 1.0) as f32;
                if coverage <= 0.0 {
                    continue;
                }
                // Fraction of this pixel inside the border band's inner edge
                let inner = (0.5 - (distance + border_width)).clamp(0.0, 1.0) as f32;
                self.cover_pixel(x, y, mix(border, fill, inner), coverage);
            }
        }
    }
}
