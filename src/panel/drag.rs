//! Sub-pixel drag accumulation
//!
//! Pointer deltas may be fractional (e.g. scaled from logical to physical
//! pixels). Rounding each event independently drifts over a long drag, so
//! the fractional remainder is carried between calls instead.

use crate::error::PanelError;
use crate::model::{Point, PointF, ScreenMetrics, Size};

/// Largest pointer delta accepted on one axis, in pixels
///
/// Anything larger comes from a broken event source, not a human.
pub const MAX_POINTER_DELTA: f64 = 1.0e7;

/// Totals this close to a whole pixel are snapped to it
///
/// Size compensation arrives as many small float steps whose exact sum is
/// an integer; without snapping the float error would floor one pixel short.
const SNAP_EPSILON: f64 = 1.0e-9;

/// Integer move actually applied to the panel position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Move {
    pub dx: i32,
    pub dy: i32,
}

impl Move {
    pub fn is_zero(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

/// Clamp a top-left position so the panel stays within `[-margin, screen - size + margin]`
///
/// A panel larger than the clamp range is pinned at `-margin`.
pub fn clamp_position(position: Point, size: Size, screen: &ScreenMetrics, margin: i32) -> Point {
    let clamp_axis = |value: i64, extent: i32, panel: i32| -> i32 {
        let lo = -(margin as i64);
        let hi = (extent as i64 - panel as i64 + margin as i64).max(lo);
        value.clamp(lo, hi) as i32
    };
    Point::new(
        clamp_axis(position.x as i64, screen.width(), size.width),
        clamp_axis(position.y as i64, screen.height(), size.height),
    )
}

fn snap(value: PointF) -> PointF {
    let axis = |v: f64| {
        let nearest = v.round();
        if (v - nearest).abs() < SNAP_EPSILON {
            nearest
        } else {
            v
        }
    };
    PointF::new(axis(value.x), axis(value.y))
}

#[derive(Debug, Clone, Default)]
pub struct DragAccumulator {
    residual: PointF,
    margin: i32,
}

impl DragAccumulator {
    pub fn new(margin: i32) -> Self {
        Self {
            residual: PointF::ZERO,
            margin,
        }
    }

    /// Sub-pixel remainder carried to the next call; each axis in `[0, 1)`
    pub fn residual(&self) -> PointF {
        self.residual
    }

    /// Accumulate `delta` and return the clamped integer move from `position`
    ///
    /// The part of a move removed by clamping is dropped, not banked.
    pub fn apply(
        &mut self,
        delta: PointF,
        position: Point,
        size: Size,
        screen: &ScreenMetrics,
    ) -> Result<Move, PanelError> {
        if !delta.is_finite() {
            return Err(PanelError::MalformedPointer {
                x: delta.x,
                y: delta.y,
                reason: "non-finite delta",
            });
        }
        if delta.x.abs() > MAX_POINTER_DELTA || delta.y.abs() > MAX_POINTER_DELTA {
            return Err(PanelError::MalformedPointer {
                x: delta.x,
                y: delta.y,
                reason: "delta out of range",
            });
        }

        let total = snap(self.residual + delta);
        let whole = PointF::new(total.x.floor(), total.y.floor());
        self.residual = total - whole;

        let target_x = position.x as i64 + whole.x as i64;
        let target_y = position.y as i64 + whole.y as i64;
        let target = Point::new(
            target_x.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
            target_y.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
        );
        let clamped = clamp_position(target, size, screen, self.margin);

        Ok(Move {
            dx: clamped.x - position.x,
            dy: clamped.y - position.y,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> ScreenMetrics {
        ScreenMetrics::new(1920, 1080).unwrap()
    }

    #[test]
    fn test_whole_pixel_delta_moves_exactly() {
        let mut drag = DragAccumulator::new(0);
        let moved = drag
            .apply(PointF::new(5.0, -3.0), Point::new(100, 100), Size::new(50, 50), &screen())
            .unwrap();
        assert_eq!(moved, Move { dx: 5, dy: -3 });
        assert_eq!(drag.residual(), PointF::ZERO);
    }

    #[test]
    fn test_fractional_deltas_accumulate() {
        let mut drag = DragAccumulator::new(0);
        let mut position = Point::new(100, 100);
        let size = Size::new(50, 50);
        let mut total = 0;
        for _ in 0..4 {
            let moved = drag
                .apply(PointF::new(0.25, 0.0), position, size, &screen())
                .unwrap();
            position.x += moved.dx;
            total += moved.dx;
        }
        assert_eq!(total, 1);
        assert!(drag.residual().x.abs() < 1e-12);
    }

    #[test]
    fn test_negative_fractions_floor_toward_negative() {
        let mut drag = DragAccumulator::new(0);
        let moved = drag
            .apply(PointF::new(-0.5, 0.0), Point::new(100, 100), Size::new(50, 50), &screen())
            .unwrap();
        assert_eq!(moved.dx, -1);
        assert!((drag.residual().x - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_residual_stays_below_one() {
        let mut drag = DragAccumulator::new(0);
        let mut position = Point::new(500, 500);
        let size = Size::new(50, 50);
        for i in 0..500 {
            let delta = PointF::new(0.37 * ((i % 7) as f64 - 3.0), 0.61);
            let moved = drag.apply(delta, position, size, &screen()).unwrap();
            position.x += moved.dx;
            position.y += moved.dy;
            let r = drag.residual();
            assert!(r.x.abs() < 1.0 && r.y.abs() < 1.0);
        }
    }

    #[test]
    fn test_float_error_snaps_to_whole_pixel() {
        let mut drag = DragAccumulator::new(0);
        let mut position = Point::new(100, 100);
        let size = Size::new(50, 50);
        let mut total = 0;
        for _ in 0..10 {
            let moved = drag
                .apply(PointF::new(0.1, 0.0), position, size, &screen())
                .unwrap();
            position.x += moved.dx;
            total += moved.dx;
        }
        assert_eq!(total, 1);
    }

    #[test]
    fn test_clamp_respects_margin() {
        let mut drag = DragAccumulator::new(6);
        let moved = drag
            .apply(PointF::new(-500.0, 5000.0), Point::new(10, 10), Size::new(50, 50), &screen())
            .unwrap();
        assert_eq!(moved.dx, -16);
        assert_eq!(10 + moved.dy, 1080 - 50 + 6);
    }

    #[test]
    fn test_rejects_non_finite_delta() {
        let mut drag = DragAccumulator::new(0);
        let result = drag.apply(
            PointF::new(f64::NAN, 0.0),
            Point::new(0, 0),
            Size::new(10, 10),
            &screen(),
        );
        assert!(matches!(result, Err(PanelError::MalformedPointer { .. })));
        assert_eq!(drag.residual(), PointF::ZERO);
    }

    #[test]
    fn test_rejects_huge_delta() {
        let mut drag = DragAccumulator::new(0);
        let result = drag.apply(
            PointF::new(1.0e12, 0.0),
            Point::new(0, 0),
            Size::new(10, 10),
            &screen(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_oversized_panel_pins_to_negative_margin() {
        let position = clamp_position(
            Point::new(300, 300),
            Size::new(4000, 4000),
            &screen(),
            2,
        );
        assert_eq!(position, Point::new(-2, -2));
    }
}
