//! Pointer message handlers: press, drag, release

use crate::commands::{Cmd, CursorAffordance};
use crate::error::PanelError;
use crate::messages::PointerMsg;
use crate::model::{PanelModel, PointF};

fn check_position(pos: PointF) -> Result<PointF, PanelError> {
    if pos.is_finite() {
        Ok(pos)
    } else {
        Err(PanelError::MalformedPointer {
            x: pos.x,
            y: pos.y,
            reason: "non-finite position",
        })
    }
}

/// Handle pointer messages
pub fn update_pointer(model: &mut PanelModel, msg: PointerMsg) -> Result<Option<Cmd>, PanelError> {
    match msg {
        PointerMsg::Down { pos } => {
            let pos = check_position(pos)?;
            model.pointer.drag_origin = Some(pos);
            model.pointer.cursor = Some(pos);
            model.pointer.grabbed = true;
            tracing::debug!(x = pos.x, y = pos.y, "drag started");
            Ok(Some(Cmd::batch(vec![
                Cmd::SetCursor(CursorAffordance::Grabbing),
                Cmd::Redraw,
            ])))
        }

        PointerMsg::Move { pos } => {
            let pos = check_position(pos)?;
            let Some(origin) = model.pointer.drag_origin else {
                model.pointer.cursor = Some(pos);
                return Ok(None);
            };

            let moved = model.apply_offset(pos - origin)?;
            model.pointer.drag_origin = Some(pos);
            model.pointer.cursor = Some(pos);
            if moved.is_zero() {
                return Ok(None);
            }

            let started = model.refresh_proximity();
            if !started.is_empty() {
                tracing::debug!(corners = started.len(), "proximity changed while dragging");
            }
            Ok(Some(Cmd::batch(vec![
                Cmd::SyncWindow {
                    geometry: model.geometry,
                },
                Cmd::Redraw,
            ])))
        }

        PointerMsg::Up { pos } => {
            if pos.is_finite() {
                model.pointer.cursor = Some(pos);
            }
            let was_grabbed = model.pointer.grabbed;
            model.pointer.drag_origin = None;
            model.pointer.grabbed = false;
            if !was_grabbed {
                return Ok(None);
            }
            tracing::debug!(
                x = model.geometry.position.x,
                y = model.geometry.position.y,
                "drag ended"
            );
            Ok(Some(Cmd::batch(vec![
                Cmd::SetCursor(CursorAffordance::Open),
                Cmd::Redraw,
            ])))
        }
    }
}
