//! Panel configuration persistence
//!
//! Stores tuning values in `~/.config/dockbar/config.yaml`. Every field is
//! optional; anything missing falls back to the documented default.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::Easing;
use crate::error::PanelError;
use crate::model::{ScreenMetrics, Size};
use crate::panel::{CornerRule, MinimizedSize};
use crate::style::PanelPalette;

/// Root of `config.yaml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub proximity: ProximityConfig,
    pub radius: RadiusConfig,
    pub animation: AnimationConfig,
    pub size: SizeConfig,
    pub drag: DragConfig,
    pub style: StyleConfig,
}

/// Edge/corner detection thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProximityConfig {
    /// Margin (px) at or below which an edge counts as touched
    pub threshold: f64,
    /// `<=` when true, `<` when false
    pub inclusive: bool,
    /// Subtracted from every margin before comparing
    pub offset: f64,
    pub corner_rule: CornerRule,
}

impl Default for ProximityConfig {
    fn default() -> Self {
        Self {
            threshold: 1.0,
            inclusive: true,
            offset: 0.0,
            corner_rule: CornerRule::Either,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadiusConfig {
    /// Radius of a corner touching an edge
    pub square: f64,
    /// Radius of a free corner; defaults to a quarter of the full width, in whole pixels
    pub round: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub radius_ms: u64,
    pub size_ms: u64,
    pub easing: Easing,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            radius_ms: 320,
            size_ms: 320,
            easing: Easing::CubicInOut,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeConfig {
    /// Expanded size; derived from the screen when absent
    pub full: Option<Size>,
    pub minimized: MinimizedPolicy,
}

/// How the collapsed size is chosen, in fractions of the full size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum MinimizedPolicy {
    /// Thin across touched edges; both values are fractions of the full size's shorter side
    EdgeOriented { parallel: f64, perpendicular: f64 },
    /// Fixed fraction of each full dimension
    Ratio { width: f64, height: f64 },
}

impl Default for MinimizedPolicy {
    fn default() -> Self {
        MinimizedPolicy::EdgeOriented {
            parallel: 1.0,
            perpendicular: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// How far (px) the panel may overhang a screen edge
    pub clamp_margin: i32,
}

/// Colors as hex strings ("#RRGGBB" or "#RRGGBBAA")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub background: String,
    pub border: String,
    pub border_hover: String,
    pub border_grabbed: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: "#282626".to_string(),
            border: "#877F7F".to_string(),
            border_hover: "#FFFFFF".to_string(),
            border_grabbed: "#C9C3C3".to_string(),
        }
    }
}

/// Configuration with every derived value computed for one screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedConfig {
    pub proximity: ProximityConfig,
    pub square_radius: f64,
    pub round_radius: f64,
    pub radius_duration: Duration,
    pub size_duration: Duration,
    pub easing: Easing,
    pub full_size: Size,
    pub minimized: MinimizedSize,
    pub clamp_margin: i32,
    pub palette: PanelPalette,
}

/// Expanded size for a screen: height is `screen / 2.5`, width an eighth of that
pub fn default_full_size(screen: &ScreenMetrics) -> Size {
    let height = (screen.height() as f64 / 2.5).round().max(1.0);
    let width = (height / 8.0).round().max(1.0);
    Size::new(width as i32, height as i32)
}

fn invalid(message: impl Into<String>) -> PanelError {
    PanelError::InvalidConfig(message.into())
}

fn check_fraction(name: &str, value: f64) -> Result<f64, PanelError> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        Err(invalid(format!("{} must be in (0, 1], got {}", name, value)))
    }
}

fn scaled(extent: i32, fraction: f64) -> i32 {
    ((extent as f64 * fraction).round() as i32).max(1)
}

impl PanelConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        Self::load_or_default(&path)
    }

    /// Load from an explicit path, warning and falling back to defaults on failure
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, PanelError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            invalid(format!("Failed to read config at {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content).map_err(|e| {
            invalid(format!("Failed to parse config at {}: {}", path.display(), e))
        })
    }

    pub fn from_yaml(content: &str) -> Result<Self, PanelError> {
        serde_yaml::from_str(content).map_err(|e| invalid(e.to_string()))
    }

    pub fn to_yaml(&self) -> Result<String, PanelError> {
        serde_yaml::to_string(self).map_err(|e| invalid(e.to_string()))
    }

    /// Validate and derive pixel values for `screen`
    pub fn resolve(&self, screen: &ScreenMetrics) -> Result<ResolvedConfig, PanelError> {
        let proximity = self.proximity;
        if !proximity.threshold.is_finite() || !proximity.offset.is_finite() {
            return Err(invalid("proximity threshold and offset must be finite"));
        }

        let full_size = match self.size.full {
            Some(size) if size.width <= 0 || size.height <= 0 => {
                return Err(invalid(format!(
                    "size.full must be positive, got {}x{}",
                    size.width, size.height
                )));
            }
            Some(size) => size,
            None => default_full_size(screen),
        };

        let minimized = match self.size.minimized {
            MinimizedPolicy::EdgeOriented {
                parallel,
                perpendicular,
            } => {
                // Scaling from the long side would clamp the collapse back to full size
                let short_side = full_size.width.min(full_size.height);
                MinimizedSize::EdgeOriented {
                    parallel: scaled(short_side, check_fraction("parallel", parallel)?),
                    perpendicular: scaled(
                        short_side,
                        check_fraction("perpendicular", perpendicular)?,
                    ),
                }
            }
            MinimizedPolicy::Ratio { width, height } => MinimizedSize::Fixed(Size::new(
                scaled(full_size.width, check_fraction("width", width)?),
                scaled(full_size.height, check_fraction("height", height)?),
            )),
        };

        let square_radius = self.radius.square;
        let round_radius = self
            .radius
            .round
            .unwrap_or((full_size.width / 4) as f64);
        if !square_radius.is_finite() || square_radius < 0.0 {
            return Err(invalid(format!(
                "radius.square must be a non-negative number, got {}",
                square_radius
            )));
        }
        if !round_radius.is_finite() || round_radius < square_radius {
            return Err(invalid(format!(
                "radius.round must be at least radius.square, got {}",
                round_radius
            )));
        }

        if self.drag.clamp_margin < 0 {
            return Err(invalid(format!(
                "drag.clamp_margin must not be negative, got {}",
                self.drag.clamp_margin
            )));
        }

        Ok(ResolvedConfig {
            proximity,
            square_radius,
            round_radius,
            radius_duration: Duration::from_millis(self.animation.radius_ms),
            size_duration: Duration::from_millis(self.animation.size_ms),
            easing: self.animation.easing,
            full_size,
            minimized,
            clamp_margin: self.drag.clamp_margin,
            palette: PanelPalette::resolve(&self.style, screen)?,
        })
    }
}
