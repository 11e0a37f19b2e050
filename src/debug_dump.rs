//! Debug state dump for development diagnostics
//!
//! Serializes a snapshot of the panel state to JSON for easier debugging.
//! Triggered by the D key in debug builds.

use serde::Serialize;

use dockbar::model::{
    CornerRadii, PanelGeometry, PanelModel, PointerState, ProximityState, TouchedEdges,
};
use dockbar::panel::HoverState;
use dockbar::style::PanelStyle;

#[derive(Serialize)]
pub struct StateDump {
    /// Seconds since the Unix epoch
    pub timestamp: u64,
    pub screen: (i32, i32),
    pub geometry: PanelGeometry,
    pub radii: CornerRadii,
    pub proximity: ProximityState,
    pub touched_edges: TouchedEdges,
    pub hover: HoverState,
    pub pointer: PointerState,
    pub style: PanelStyle,
    pub animating: AnimationDump,
}

#[derive(Serialize)]
pub struct AnimationDump {
    pub radius: bool,
    pub size: bool,
    pub size_target: Option<(i32, i32)>,
    pub drag_residual: (f64, f64),
}

impl StateDump {
    pub fn from_model(model: &PanelModel) -> Self {
        let residual = model.drag.residual();
        Self {
            timestamp: unix_timestamp(),
            screen: (model.screen.width(), model.screen.height()),
            geometry: model.geometry,
            radii: model.radii,
            proximity: model.proximity_state(),
            touched_edges: model.touched_edges(),
            hover: model.hover_state(),
            pointer: model.pointer,
            style: model.style(),
            animating: AnimationDump {
                radius: model.radius_animator.is_animating(),
                size: model.size.is_animating(),
                size_target: model.size.target().map(|s| (s.width, s.height)),
                drag_residual: (residual.x, residual.y),
            },
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }

    /// Write to `<dumps dir>/state-<timestamp>.json`, returning the path
    pub fn save_to_file(&self) -> std::io::Result<String> {
        let dir = dockbar::config_paths::dumps_dir();
        std::fs::create_dir_all(&dir)?;

        let path = dir.join(format!("state-{}.json", self.timestamp));
        std::fs::write(&path, self.to_json())?;
        Ok(path.display().to_string())
    }
}

fn unix_timestamp() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
