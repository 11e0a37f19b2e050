//! Per-corner and per-edge value containers

use serde::{Deserialize, Serialize};

/// One of the four panel corners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// All corners for iteration
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Short label used in logs ("TL", "TR", ...)
    pub fn label(&self) -> &'static str {
        match self {
            Corner::TopLeft => "TL",
            Corner::TopRight => "TR",
            Corner::BottomLeft => "BL",
            Corner::BottomRight => "BR",
        }
    }
}

/// A value for each corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Corners<T> {
    pub top_left: T,
    pub top_right: T,
    pub bottom_left: T,
    pub bottom_right: T,
}

impl<T: Copy> Corners<T> {
    /// Same value in all four corners
    pub const fn splat(value: T) -> Self {
        Self {
            top_left: value,
            top_right: value,
            bottom_left: value,
            bottom_right: value,
        }
    }

    pub fn get(&self, corner: Corner) -> T {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomLeft => self.bottom_left,
            Corner::BottomRight => self.bottom_right,
        }
    }

    pub fn map<U: Copy>(&self, mut f: impl FnMut(Corner, T) -> U) -> Corners<U> {
        Corners {
            top_left: f(Corner::TopLeft, self.top_left),
            top_right: f(Corner::TopRight, self.top_right),
            bottom_left: f(Corner::BottomLeft, self.bottom_left),
            bottom_right: f(Corner::BottomRight, self.bottom_right),
        }
    }
}

impl<T> Corners<T> {
    pub fn get_mut(&mut self, corner: Corner) -> &mut T {
        match corner {
            Corner::TopLeft => &mut self.top_left,
            Corner::TopRight => &mut self.top_right,
            Corner::BottomLeft => &mut self.bottom_left,
            Corner::BottomRight => &mut self.bottom_right,
        }
    }
}

/// Corner radii in pixels, each in `[square, round]`
pub type CornerRadii = Corners<f64>;

/// Per-corner "touching a screen edge" flags from one proximity evaluation
pub type ProximityState = Corners<bool>;

impl ProximityState {
    pub fn any(&self) -> bool {
        self.top_left || self.top_right || self.bottom_left || self.bottom_right
    }
}

/// A value for each screen edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Edges<T> {
    pub left: T,
    pub top: T,
    pub right: T,
    pub bottom: T,
}

/// Signed distance from the panel to each screen edge
pub type Margins = Edges<f64>;

/// Which screen edges the panel is currently touching
pub type TouchedEdges = Edges<bool>;

impl TouchedEdges {
    /// Touching the left or right edge
    pub fn horizontal(&self) -> bool {
        self.left || self.right
    }

    /// Touching the top or bottom edge
    pub fn vertical(&self) -> bool {
        self.top || self.bottom
    }
}
