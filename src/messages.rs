//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types. Pointer positions
//! are global screen coordinates in physical pixels.

use std::time::Duration;

use crate::model::PointF;

/// Primary-button pointer events
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerMsg {
    /// Button pressed over the panel
    Down { pos: PointF },
    /// Pointer moved, button held or not
    Move { pos: PointF },
    /// Button released
    Up { pos: PointF },
}

/// Pointer crossing the panel bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoverMsg {
    Enter,
    /// Leave reported by the platform, with the cursor position at that moment
    Leave { cursor: PointF },
}

/// Top-level message type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Msg {
    Pointer(PointerMsg),
    Hover(HoverMsg),
    /// Animation clock advanced by this much
    Tick(Duration),
}

// Convenience constructors for common messages
impl Msg {
    pub fn down(x: f64, y: f64) -> Self {
        Msg::Pointer(PointerMsg::Down {
            pos: PointF::new(x, y),
        })
    }

    pub fn move_to(x: f64, y: f64) -> Self {
        Msg::Pointer(PointerMsg::Move {
            pos: PointF::new(x, y),
        })
    }

    pub fn up(x: f64, y: f64) -> Self {
        Msg::Pointer(PointerMsg::Up {
            pos: PointF::new(x, y),
        })
    }

    pub fn leave(x: f64, y: f64) -> Self {
        Msg::Hover(HoverMsg::Leave {
            cursor: PointF::new(x, y),
        })
    }

    pub fn tick_ms(millis: u64) -> Self {
        Msg::Tick(Duration::from_millis(millis))
    }

    /// Short name for span fields and logs
    pub fn kind(&self) -> &'static str {
        match self {
            Msg::Pointer(PointerMsg::Down { .. }) => "pointer_down",
            Msg::Pointer(PointerMsg::Move { .. }) => "pointer_move",
            Msg::Pointer(PointerMsg::Up { .. }) => "pointer_up",
            Msg::Hover(HoverMsg::Enter) => "hover_enter",
            Msg::Hover(HoverMsg::Leave { .. }) => "hover_leave",
            Msg::Tick(_) => "tick",
        }
    }
}
