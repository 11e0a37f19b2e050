//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::model::PanelGeometry;

/// Pointer cursor shown over the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorAffordance {
    /// Open hand: the panel can be grabbed
    Open,
    /// Closed hand: the panel is being dragged
    Grabbing,
}

/// Commands returned by update functions
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Repaint the panel
    Redraw,
    /// Move and resize the host window to match the panel
    SyncWindow { geometry: PanelGeometry },
    /// Change the pointer cursor
    SetCursor(CursorAffordance),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands, flattening `None`s away
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        let mut cmds: Vec<Cmd> = cmds.into_iter().filter(|c| *c != Cmd::None).collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // A resized window must be repainted at its new size
            Cmd::SyncWindow { .. } => true,
            Cmd::SetCursor(_) => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Geometry to sync, taking the last one in a batch
    pub fn window_geometry(&self) -> Option<PanelGeometry> {
        match self {
            Cmd::SyncWindow { geometry } => Some(*geometry),
            Cmd::Batch(cmds) => cmds.iter().rev().find_map(|c| c.window_geometry()),
            _ => None,
        }
    }
}
