//! Runtime module - winit/platform integration
//!
//! This module contains platform-specific code for running the panel:
//! - `app` - ApplicationHandler, window management and the tick clock
//! - `input` - Pointer/keyboard event to message mapping

pub mod app;
pub mod input;

pub use app::App;
