//! Error types for the panel core
//!
//! Only configuration problems and malformed input surface as errors.
//! Out-of-range geometry is clamped silently and never reported here.

/// Errors produced by the panel core
#[derive(Debug, Clone, thiserror::Error)]
pub enum PanelError {
    #[error("degenerate screen metrics: {width}x{height}")]
    DegenerateScreen { width: i64, height: i64 },

    #[error("malformed pointer input ({x}, {y}): {reason}")]
    MalformedPointer {
        x: f64,
        y: f64,
        reason: &'static str,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid screen size {0:?}, expected WIDTHxHEIGHT")]
    ScreenParse(String),
}

impl PanelError {
    /// Short stable code, used as a tracing field
    pub fn code(&self) -> &'static str {
        match self {
            Self::DegenerateScreen { .. } => "E_SCREEN",
            Self::MalformedPointer { .. } => "E_POINTER",
            Self::InvalidConfig(_) => "E_CONFIG",
            Self::ScreenParse(_) => "E_SCREEN_PARSE",
        }
    }
}
