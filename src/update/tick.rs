//! Animation clock handler

use std::time::Duration;

use crate::commands::Cmd;
use crate::error::PanelError;
use crate::model::PanelModel;

/// Advance every running track by `dt`
///
/// Size steps are written first, then their anchor compensation goes
/// through the drag path so the resized panel is clamped at its new size.
pub fn update_tick(model: &mut PanelModel, dt: Duration) -> Result<Option<Cmd>, PanelError> {
    let radii_changed = model.radius_animator.tick(dt, &mut model.radii);

    let Some(step) = model.size.tick(dt) else {
        return Ok(radii_changed.then_some(Cmd::Redraw));
    };

    let before = model.geometry;
    model.geometry.size = step.size;
    model.apply_offset(step.compensation)?;

    if step.finished {
        tracing::debug!(
            w = step.size.width,
            h = step.size.height,
            x = model.geometry.position.x,
            y = model.geometry.position.y,
            "size transition finished"
        );
    }

    if model.geometry == before {
        return Ok(radii_changed.then_some(Cmd::Redraw));
    }

    // Resizing changes the margins, which can flip corners
    if !model.refresh_proximity().is_empty() {
        model.radius_animator.tick(Duration::ZERO, &mut model.radii);
    }

    Ok(Some(Cmd::batch(vec![
        Cmd::SyncWindow {
            geometry: model.geometry,
        },
        Cmd::Redraw,
    ])))
}
