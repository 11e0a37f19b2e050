//! Hover message handlers: expand on enter, collapse on a confirmed leave

use crate::commands::Cmd;
use crate::error::PanelError;
use crate::messages::HoverMsg;
use crate::model::PanelModel;

/// Handle hover messages
pub fn update_hover(model: &mut PanelModel, msg: HoverMsg) -> Result<Option<Cmd>, PanelError> {
    match msg {
        HoverMsg::Enter => {
            let was_hovered = model.pointer.hovered;
            model.pointer.hovered = true;
            let edges = model.touched_edges();
            let started = model.size.on_enter(&edges);
            Ok((started || !was_hovered).then_some(Cmd::Redraw))
        }

        HoverMsg::Leave { cursor } => {
            if !cursor.is_finite() {
                return Err(PanelError::MalformedPointer {
                    x: cursor.x,
                    y: cursor.y,
                    reason: "non-finite leave position",
                });
            }
            model.pointer.cursor = Some(cursor);
            if model.geometry.contains(cursor) {
                tracing::debug!(x = cursor.x, y = cursor.y, "spurious leave ignored");
                return Ok(None);
            }

            let was_hovered = model.pointer.hovered;
            model.pointer.hovered = false;
            let edges = model.touched_edges();
            let geometry = model.geometry;
            let started = model.size.on_leave(cursor, &geometry, &edges);
            Ok((started || was_hovered).then_some(Cmd::Redraw))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PanelConfig;
    use crate::model::{Point, PointF, ScreenMetrics, Size};
    use crate::panel::HoverState;

    fn model() -> PanelModel {
        let screen = ScreenMetrics::new(1920, 1080).unwrap();
        PanelModel::new_at(screen, &PanelConfig::default(), Point::new(500, 300)).unwrap()
    }

    #[test]
    fn test_leave_outside_collapses() {
        let mut model = model();
        update_hover(&mut model, HoverMsg::Enter).unwrap();
        let cmd = update_hover(
            &mut model,
            HoverMsg::Leave {
                cursor: PointF::new(10.0, 10.0),
            },
        )
        .unwrap();
        assert_eq!(cmd, Some(Cmd::Redraw));
        assert_eq!(model.hover_state(), HoverState::Collapsed);
        assert_eq!(model.size.target(), Some(Size::new(54, 54)));
        assert!(!model.pointer.hovered);
    }

    #[test]
    fn test_leave_inside_is_ignored() {
        let mut model = model();
        update_hover(&mut model, HoverMsg::Enter).unwrap();
        let cmd = update_hover(
            &mut model,
            HoverMsg::Leave {
                cursor: PointF::new(520.0, 400.0),
            },
        )
        .unwrap();
        assert!(cmd.is_none());
        assert_eq!(model.hover_state(), HoverState::Expanded);
        assert!(model.pointer.hovered);
        assert!(!model.is_animating());
    }

    #[test]
    fn test_enter_while_expanded_only_highlights() {
        let mut model = model();
        let cmd = update_hover(&mut model, HoverMsg::Enter).unwrap();
        assert_eq!(cmd, Some(Cmd::Redraw));
        assert!(!model.size.is_animating());

        let again = update_hover(&mut model, HoverMsg::Enter).unwrap();
        assert!(again.is_none());
    }

    #[test]
    fn test_non_finite_leave_rejected() {
        let mut model = model();
        let result = update_hover(
            &mut model,
            HoverMsg::Leave {
                cursor: PointF::new(f64::NAN, 1.0),
            },
        );
        assert!(result.is_err());
    }
}
