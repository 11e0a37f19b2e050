//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod hover;
mod pointer;
mod tick;

use crate::commands::Cmd;
use crate::error::PanelError;
use crate::messages::Msg;
use crate::model::PanelModel;

#[cfg(debug_assertions)]
use crate::tracing::PanelSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use hover::update_hover;
pub use pointer::update_pointer;
pub use tick::update_tick;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut PanelModel, msg: Msg) -> Result<Option<Cmd>, PanelError> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut PanelModel, msg: Msg) -> Result<Option<Cmd>, PanelError> {
    match msg {
        Msg::Pointer(m) => pointer::update_pointer(model, m),
        Msg::Hover(m) => hover::update_hover(model, m),
        Msg::Tick(dt) => tick::update_tick(model, dt),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after panel state and logs diffs for debugging.
/// Ticks are frequent, so they skip the span and the processing line.
#[cfg(debug_assertions)]
fn update_traced(model: &mut PanelModel, msg: Msg) -> Result<Option<Cmd>, PanelError> {
    let is_noisy = matches!(msg, Msg::Tick(_));

    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = msg.kind()).entered())
    };

    if !is_noisy {
        debug!(target: "message", ?msg, "processing");
    }

    let before = PanelSnapshot::from_model(model);
    let result = update_inner(model, msg);
    let after = PanelSnapshot::from_model(model);

    if let Some(diff) = before.diff(&after) {
        debug!(target: "panel", %diff, "state changed");
    }

    model.assert_invariants_with_context(msg.kind());
    result
}

/// Feed a sequence of messages, stopping at the first error
///
/// Returns the commands produced, in order.
pub fn update_all(
    model: &mut PanelModel,
    msgs: impl IntoIterator<Item = Msg>,
) -> Result<Vec<Cmd>, PanelError> {
    let mut cmds = Vec::new();
    for msg in msgs {
        if let Some(cmd) = update(model, msg)? {
            cmds.push(cmd);
        }
    }
    Ok(cmds)
}
