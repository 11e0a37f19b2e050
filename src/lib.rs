//! dockbar - a self-docking floating toolbar panel
//!
//! This crate provides the core types and logic for a floating panel that
//! squares its corners against screen edges and collapses toward the edge
//! it is docked to, implementing the Elm Architecture pattern.

pub mod animation;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod messages;
pub mod model;
pub mod panel;
pub mod queue;
pub mod style;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::PanelConfig;
pub use error::PanelError;
pub use messages::Msg;
pub use model::PanelModel;
