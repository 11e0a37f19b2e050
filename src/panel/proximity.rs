//! Edge and corner proximity detection
//!
//! Pure functions of geometry: nothing here holds state between calls.

use serde::{Deserialize, Serialize};

use crate::config::ProximityConfig;
use crate::model::{
    Margins, PanelGeometry, Point, ProximityState, ScreenMetrics, Size, TouchedEdges,
};

/// How touched edges combine into touched corners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CornerRule {
    /// A corner touches when either adjacent edge is touched
    #[default]
    Either,
    /// A corner touches only when both adjacent edges are touched
    Both,
}

impl CornerRule {
    #[inline]
    fn combine(self, a: bool, b: bool) -> bool {
        match self {
            CornerRule::Either => a || b,
            CornerRule::Both => a && b,
        }
    }
}

/// Signed distances from the panel bounding box to each screen edge, minus `offset`
///
/// Negative values mean the panel overhangs that edge.
pub fn margins(position: Point, size: Size, screen: &ScreenMetrics, offset: f64) -> Margins {
    let (x, y) = (position.x as f64, position.y as f64);
    let (w, h) = (size.width as f64, size.height as f64);
    Margins {
        left: x - offset,
        top: y - offset,
        right: screen.width() as f64 - x - w - offset,
        bottom: screen.height() as f64 - y - h - offset,
    }
}

/// Threshold comparison shared by edges and corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityDetector {
    threshold: f64,
    inclusive: bool,
    offset: f64,
    corner_rule: CornerRule,
}

impl ProximityDetector {
    pub fn new(config: &ProximityConfig) -> Self {
        Self {
            threshold: config.threshold,
            inclusive: config.inclusive,
            offset: config.offset,
            corner_rule: config.corner_rule,
        }
    }

    /// Margins of `geometry` on `screen`, using the configured offset
    pub fn margins(&self, geometry: &PanelGeometry, screen: &ScreenMetrics) -> Margins {
        margins(geometry.position, geometry.size, screen, self.offset)
    }

    #[inline]
    fn is_touching(&self, margin: f64) -> bool {
        if self.inclusive {
            margin <= self.threshold
        } else {
            margin < self.threshold
        }
    }

    pub fn touched_edges(&self, margins: &Margins) -> TouchedEdges {
        TouchedEdges {
            left: self.is_touching(margins.left),
            top: self.is_touching(margins.top),
            right: self.is_touching(margins.right),
            bottom: self.is_touching(margins.bottom),
        }
    }

    /// Per-corner touching flags derived from edge margins
    pub fn is_in_corner(&self, margins: &Margins) -> ProximityState {
        let edges = self.touched_edges(margins);
        let rule = self.corner_rule;
        ProximityState {
            top_left: rule.combine(edges.top, edges.left),
            top_right: rule.combine(edges.top, edges.right),
            bottom_left: rule.combine(edges.bottom, edges.left),
            bottom_right: rule.combine(edges.bottom, edges.right),
        }
    }

    /// Margins and corner flags in one call
    pub fn evaluate(&self, geometry: &PanelGeometry, screen: &ScreenMetrics) -> ProximityState {
        self.is_in_corner(&self.margins(geometry, screen))
    }
}
