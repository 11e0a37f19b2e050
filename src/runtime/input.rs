//! Platform input mapping
//!
//! winit reports pointer positions relative to the window. The panel model
//! works in global screen pixels, so every position is offset by the window
//! origin before it becomes a message.

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::{KeyCode, PhysicalKey};

use dockbar::messages::{HoverMsg, Msg, PointerMsg};
use dockbar::model::{Point, PointF};

/// Keys the panel reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    /// Write a JSON state dump (debug builds)
    DumpState,
}

/// Window-local position to global screen position
pub fn to_global(origin: Point, local: PhysicalPosition<f64>) -> PointF {
    PointF::new(origin.x as f64 + local.x, origin.y as f64 + local.y)
}

/// Primary button press/release; other buttons are ignored
pub fn mouse_button_msg(state: ElementState, button: MouseButton, pos: PointF) -> Option<Msg> {
    if button != MouseButton::Left {
        return None;
    }
    let msg = match state {
        ElementState::Pressed => PointerMsg::Down { pos },
        ElementState::Released => PointerMsg::Up { pos },
    };
    Some(Msg::Pointer(msg))
}

/// Leave message for the last known cursor position
///
/// With no known position the cursor is placed just outside the window
/// origin, which always counts as a real exit.
pub fn leave_msg(origin: Point, last_local: Option<PhysicalPosition<f64>>) -> Msg {
    let cursor = match last_local {
        Some(local) => to_global(origin, local),
        None => PointF::new(origin.x as f64 - 1.0, origin.y as f64 - 1.0),
    };
    Msg::Hover(HoverMsg::Leave { cursor })
}

pub fn key_action(key: PhysicalKey, state: ElementState) -> Option<KeyAction> {
    if state != ElementState::Pressed {
        return None;
    }
    match key {
        PhysicalKey::Code(KeyCode::Escape) => Some(KeyAction::Quit),
        PhysicalKey::Code(KeyCode::KeyD) if cfg!(debug_assertions) => Some(KeyAction::DumpState),
        _ => None,
    }
}
