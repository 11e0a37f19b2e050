//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! drag, hover and animation state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=panel=debug,message=debug` - scoped filtering
//! - `RUST_LOG=dockbar::panel=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/dockbar/logs/dockbar.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{CornerRadii, PanelModel, Point, Size};
use crate::panel::HoverState;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG env var for filtering, defaulting to `warn`.
/// File logging writes to `~/.config/dockbar/logs/dockbar.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let logs_dir = crate::config_paths::logs_dir()
        .ok_or_else(|| "no config directory available".to_string())
        .and_then(|dir| {
            std::fs::create_dir_all(&dir)
                .map(|_| dir.clone())
                .map_err(|e| format!("failed to create {}: {}", dir.display(), e))
        });
    let file_layer = match logs_dir {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "dockbar.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of panel state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSnapshot {
    pub position: Point,
    pub size: Size,
    pub radii: CornerRadii,
    pub hover: HoverState,
    pub grabbed: bool,
    pub hovered: bool,
}

impl PanelSnapshot {
    pub fn from_model(model: &PanelModel) -> Self {
        Self {
            position: model.geometry.position,
            size: model.geometry.size,
            radii: model.radii,
            hover: model.hover_state(),
            grabbed: model.pointer.grabbed,
            hovered: model.pointer.hovered,
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &PanelSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.position != other.position {
            changes.push(format!(
                "pos: ({},{}) → ({},{})",
                self.position.x, self.position.y, other.position.x, other.position.y
            ));
        }
        if self.size != other.size {
            changes.push(format!(
                "size: {}x{} → {}x{}",
                self.size.width, self.size.height, other.size.width, other.size.height
            ));
        }
        if self.radii != other.radii {
            let r = &other.radii;
            changes.push(format!(
                "radii: [{:.1} {:.1} {:.1} {:.1}]",
                r.top_left, r.top_right, r.bottom_left, r.bottom_right
            ));
        }
        if self.hover != other.hover {
            changes.push(format!("hover: {:?} → {:?}", self.hover, other.hover));
        }
        if self.grabbed != other.grabbed {
            changes.push(format!("grabbed: {}", other.grabbed));
        }
        if self.hovered != other.hovered {
            changes.push(format!("hovered: {}", other.hovered));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
