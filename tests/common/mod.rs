//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::time::Duration;

use dockbar::config::PanelConfig;
use dockbar::messages::Msg;
use dockbar::model::{PanelModel, Point, PointF, ScreenMetrics};
use dockbar::panel::CornerRule;
use dockbar::update::update;
use dockbar::Cmd;

pub const SCREEN_W: i64 = 1920;
pub const SCREEN_H: i64 = 1080;

pub fn screen() -> ScreenMetrics {
    ScreenMetrics::new(SCREEN_W, SCREEN_H).unwrap()
}

/// Config with a fixed 180x720 panel on the 1920x1080 test screen
pub fn config_180x720(corner_rule: CornerRule) -> PanelConfig {
    let mut config = PanelConfig::default();
    config.size.full = Some(dockbar::model::Size::new(180, 720));
    config.proximity.corner_rule = corner_rule;
    config
}

/// Default-config model with its top-left at (x, y)
pub fn test_model(x: i32, y: i32) -> PanelModel {
    PanelModel::new_at(screen(), &PanelConfig::default(), Point::new(x, y)).unwrap()
}

pub fn test_model_with(config: &PanelConfig, x: i32, y: i32) -> PanelModel {
    PanelModel::new_at(screen(), config, Point::new(x, y)).unwrap()
}

/// Run one message, panicking on error
pub fn send(model: &mut PanelModel, msg: Msg) -> Option<Cmd> {
    update(model, msg).unwrap()
}

/// Press at a point inside the panel, drag by (dx, dy) in one move, release
pub fn drag_by(model: &mut PanelModel, dx: f64, dy: f64) {
    let start = grab_point(model);
    send(model, Msg::down(start.x, start.y));
    send(model, Msg::move_to(start.x + dx, start.y + dy));
    send(model, Msg::up(start.x + dx, start.y + dy));
}

/// A point a few pixels inside the panel's top-left corner
pub fn grab_point(model: &PanelModel) -> PointF {
    let p = model.geometry.position;
    PointF::new(p.x as f64 + 5.0, p.y as f64 + 5.0)
}

/// Tick in `step` increments until nothing is animating; returns the elapsed total
pub fn settle(model: &mut PanelModel, step: Duration) -> Duration {
    let mut elapsed = Duration::ZERO;
    while model.is_animating() {
        send(model, Msg::Tick(step));
        elapsed += step;
        assert!(elapsed < Duration::from_secs(10), "animation never settled");
    }
    elapsed
}

/// Global position of a point given as fractions of the panel's size
pub fn panel_point(model: &PanelModel, fx: f64, fy: f64) -> PointF {
    let g = model.geometry;
    PointF::new(
        g.position.x as f64 + fx * g.size.width as f64,
        g.position.y as f64 + fy * g.size.height as f64,
    )
}
