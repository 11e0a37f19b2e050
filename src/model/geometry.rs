//! Screen and panel geometry primitives
//!
//! Integer types (`Point`, `Size`) describe what is actually on screen.
//! Floating types (`PointF`, `SizeF`) carry pointer input and animated
//! values before they are snapped to whole pixels.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::error::PanelError;

/// Integer pixel position (or pixel delta)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn to_f64(self) -> PointF {
        PointF::new(self.x as f64, self.y as f64)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

/// Sub-pixel position or delta, as delivered by the pointer source
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointF {
    pub x: f64,
    pub y: f64,
}

impl PointF {
    pub const ZERO: PointF = PointF { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for PointF {
    type Output = PointF;

    fn add(self, rhs: PointF) -> PointF {
        PointF::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for PointF {
    type Output = PointF;

    fn sub(self, rhs: PointF) -> PointF {
        PointF::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Integer pixel size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn to_f64(self) -> SizeF {
        SizeF::new(self.width as f64, self.height as f64)
    }

    /// Component-wise clamp into `[min, max]`
    pub fn clamp(self, min: Size, max: Size) -> Size {
        Size::new(
            self.width.max(min.width).min(max.width.max(min.width)),
            self.height.max(min.height).min(max.height.max(min.height)),
        )
    }

    /// Component-wise minimum
    pub fn min(self, other: Size) -> Size {
        Size::new(self.width.min(other.width), self.height.min(other.height))
    }
}

/// Real-valued size used while a size animation is in flight
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeF {
    pub width: f64,
    pub height: f64,
}

impl SizeF {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Snap to whole pixels (round half away from zero)
    pub fn round(self) -> Size {
        Size::new(self.width.round() as i32, self.height.round() as i32)
    }
}

/// Snapshot of the usable screen area
///
/// Captured once at startup. Width and height are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScreenMetrics {
    width: i32,
    height: i32,
    diagonal: f64,
}

impl ScreenMetrics {
    /// Capture screen bounds, rejecting zero or negative dimensions
    pub fn new(width: i64, height: i64) -> Result<Self, PanelError> {
        if width <= 0 || height <= 0 || width > i32::MAX as i64 || height > i32::MAX as i64 {
            return Err(PanelError::DegenerateScreen { width, height });
        }
        let (w, h) = (width as f64, height as f64);
        Ok(Self {
            width: width as i32,
            height: height as i32,
            diagonal: (w * w + h * h).sqrt(),
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// `sqrt(w² + h²)`, used to scale border widths
    #[inline]
    pub fn diagonal(&self) -> f64 {
        self.diagonal
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Position and size of the panel in global screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PanelGeometry {
    /// Top-left corner
    pub position: Point,
    pub size: Size,
}

impl PanelGeometry {
    pub const fn new(position: Point, size: Size) -> Self {
        Self { position, size }
    }

    /// Geometry of a panel of `size` centered on `screen`
    pub fn centered(size: Size, screen: &ScreenMetrics) -> Self {
        let x = ((screen.width() - size.width) as f64 / 2.0).round() as i32;
        let y = ((screen.height() - size.height) as f64 / 2.0).round() as i32;
        Self::new(Point::new(x, y), size)
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.position.x + self.size.width
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.position.y + self.size.height
    }

    /// Hit-test a global point against the panel bounds (right/bottom exclusive)
    pub fn contains(&self, point: PointF) -> bool {
        point.x >= self.position.x as f64
            && point.x < self.right() as f64
            && point.y >= self.position.y as f64
            && point.y < self.bottom() as f64
    }
}
