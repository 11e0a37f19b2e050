//! Expand/collapse tests: anchor preservation, reversal, spurious leaves

mod common;

use std::time::Duration;

use common::*;
use dockbar::messages::{HoverMsg, Msg};
use dockbar::model::{PanelModel, Point, PointF, Size};
use dockbar::panel::{Anchor, CornerRule, HoverState};

const STEP: Duration = Duration::from_millis(16);

fn enter(model: &mut PanelModel) {
    send(model, Msg::Hover(HoverMsg::Enter));
}

fn leave_outside(model: &mut PanelModel) {
    // The screen's far corner is outside any panel that is not docked there
    let g = model.geometry;
    let cursor = if g.contains(PointF::new(1.0, 1.0)) {
        PointF::new(SCREEN_W as f64 - 1.0, SCREEN_H as f64 - 1.0)
    } else {
        PointF::new(1.0, 1.0)
    };
    send(model, Msg::leave(cursor.x, cursor.y));
}

fn distance(a: PointF, b: PointF) -> f64 {
    let d = a - b;
    (d.x * d.x + d.y * d.y).sqrt()
}

// ========================================================================
// Anchor preservation
// ========================================================================

#[test]
fn test_collapse_and_expand_hold_anchor_everywhere() {
    let config = config_180x720(CornerRule::Both);
    let positions = [
        (860, 180),  // free floating
        (0, 180),    // left edge
        (1740, 180), // right edge
        (860, 0),    // top edge
        (860, 360),  // bottom edge
        (0, 0),      // top-left corner
        (1740, 360), // bottom-right corner
    ];

    for (x, y) in positions {
        let mut model = test_model_with(&config, x, y);
        leave_outside(&mut model);
        let anchor = model.size.anchor();
        let before = anchor.global(&model.geometry);

        while model.is_animating() {
            send(&mut model, Msg::Tick(STEP));
            let during = anchor.global(&model.geometry);
            assert!(
                distance(before, during) <= 2.0,
                "anchor wandered mid-collapse from ({}, {})",
                x,
                y
            );
        }
        let after = anchor.global(&model.geometry);
        assert!(
            distance(before, after) <= 1.0,
            "anchor moved {:?} -> {:?} collapsing from ({}, {})",
            before,
            after,
            x,
            y
        );
        assert_eq!(model.hover_state(), HoverState::Collapsed);

        enter(&mut model);
        let anchor = model.size.anchor();
        let before = anchor.global(&model.geometry);
        settle(&mut model, STEP);
        let after = anchor.global(&model.geometry);
        assert!(distance(before, after) <= 1.0);
        assert_eq!(model.geometry.size, Size::new(180, 720));
    }
}

#[test]
fn test_right_edge_collapse_stays_docked() {
    let mut model = test_model_with(&config_180x720(CornerRule::Both), 1740, 180);
    assert_eq!(model.size.anchor(), Anchor::CENTER);
    leave_outside(&mut model);
    assert_eq!(model.size.anchor(), Anchor { fx: 1.0, fy: 0.5 });
    settle(&mut model, STEP);

    // Thin across the touched edge, full width along it
    assert_eq!(model.geometry.size, Size::new(90, 180));
    assert_eq!(model.geometry.right(), SCREEN_W as i32);
    assert_eq!(model.geometry.position.y, 180 + 270);
}

#[test]
fn test_top_left_corner_collapse_keeps_corner() {
    let mut model = test_model_with(&config_180x720(CornerRule::Both), 0, 0);
    leave_outside(&mut model);
    settle(&mut model, STEP);
    assert_eq!(model.geometry.position, Point::new(0, 0));
    assert_eq!(model.geometry.size, Size::new(90, 90));
}

#[test]
fn test_horizontal_panel_collapses_to_square() {
    let mut config = config_180x720(CornerRule::Both);
    config.size.full = Some(Size::new(400, 54));
    let mut model = test_model_with(&config, 760, 500);
    leave_outside(&mut model);
    assert!(model.is_animating());
    settle(&mut model, STEP);
    assert_eq!(model.geometry.size, Size::new(54, 54));
    assert_eq!(model.geometry.position, Point::new(933, 500));
}

// ========================================================================
// Reversal
// ========================================================================

#[test]
fn test_reversal_mid_collapse_is_continuous() {
    let mut model = test_model_with(&config_180x720(CornerRule::Both), 860, 180);
    leave_outside(&mut model);
    for _ in 0..8 {
        send(&mut model, Msg::Tick(STEP));
    }
    let paused = model.geometry.size;
    assert!(paused.height < 720 && paused.height > 180);

    enter(&mut model);
    assert_eq!(model.hover_state(), HoverState::Expanded);
    assert_eq!(model.geometry.size, paused, "reversal must not jump");

    let mut last = paused.height;
    while model.is_animating() {
        send(&mut model, Msg::Tick(STEP));
        let height = model.geometry.size.height;
        assert!(height >= last, "height shrank after reversing: {} -> {}", last, height);
        assert!(height - last <= 80, "height jumped: {} -> {}", last, height);
        last = height;
    }
    assert_eq!(model.geometry.size, Size::new(180, 720));
    assert_eq!(model.geometry.position, Point::new(860, 180));
}

#[test]
fn test_repeated_enter_does_not_restart() {
    let mut model = test_model_with(&config_180x720(CornerRule::Both), 860, 180);
    leave_outside(&mut model);
    settle(&mut model, STEP);
    enter(&mut model);
    send(&mut model, Msg::Tick(STEP));
    let size = model.geometry.size;
    // A second enter while expanding changes nothing
    assert_eq!(send(&mut model, Msg::Hover(HoverMsg::Enter)), None);
    assert_eq!(model.geometry.size, size);
    let elapsed = settle(&mut model, STEP);
    assert!(elapsed < Duration::from_millis(320));
}

// ========================================================================
// Spurious leaves
// ========================================================================

#[test]
fn test_leave_inside_panel_is_ignored() {
    let mut model = test_model_with(&config_180x720(CornerRule::Both), 860, 180);
    enter(&mut model);
    for (fx, fy) in [(0.0, 0.0), (0.5, 0.5), (0.99, 0.99)] {
        let inside = panel_point(&model, fx, fy);
        assert_eq!(send(&mut model, Msg::leave(inside.x, inside.y)), None);
        assert_eq!(model.hover_state(), HoverState::Expanded);
        assert!(model.pointer.hovered);
    }
    assert!(!model.is_animating());
}

#[test]
fn test_leave_on_far_edge_counts_as_outside() {
    let mut model = test_model_with(&config_180x720(CornerRule::Both), 860, 180);
    let edge = panel_point(&model, 1.0, 0.5);
    send(&mut model, Msg::leave(edge.x, edge.y));
    assert_eq!(model.hover_state(), HoverState::Collapsed);
}

#[test]
fn test_collapse_while_dragging_keeps_panel_on_screen() {
    let mut model = test_model_with(&config_180x720(CornerRule::Both), 860, 180);
    let mut cursor = grab_point(&model);
    send(&mut model, Msg::down(cursor.x, cursor.y));
    leave_outside(&mut model);
    while model.is_animating() {
        cursor.x += 37.5;
        send(&mut model, Msg::move_to(cursor.x, cursor.y));
        send(&mut model, Msg::Tick(STEP));
    }
    let g = model.geometry;
    assert!(g.position.x >= 0 && g.right() <= SCREEN_W as i32);
    assert!(g.position.y >= 0 && g.bottom() <= SCREEN_H as i32);
}
