//! Panel colors and border metrics

use serde::Serialize;

use crate::config::StyleConfig;
use crate::error::PanelError;
use crate::model::ScreenMetrics;

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA"
    pub fn from_hex(s: &str) -> Result<Self, PanelError> {
        let hex = s.trim().trim_start_matches('#');
        let invalid = || PanelError::InvalidConfig(format!("invalid color {:?}", s));
        if !hex.is_ascii() || !(hex.len() == 6 || hex.len() == 8) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

/// Border width for a screen: one pixel per thousand pixels of diagonal, at least one
pub fn border_width_for(screen: &ScreenMetrics) -> u32 {
    ((screen.diagonal() / 1000.0).round() as u32).max(1)
}

/// Every color the panel can be drawn with, parsed once at startup
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanelPalette {
    pub background: Color,
    pub border: Color,
    pub border_hover: Color,
    pub border_grabbed: Color,
    pub border_width: u32,
}

impl PanelPalette {
    pub fn resolve(config: &StyleConfig, screen: &ScreenMetrics) -> Result<Self, PanelError> {
        Ok(Self {
            background: Color::from_hex(&config.background)?,
            border: Color::from_hex(&config.border)?,
            border_hover: Color::from_hex(&config.border_hover)?,
            border_grabbed: Color::from_hex(&config.border_grabbed)?,
            border_width: border_width_for(screen),
        })
    }

    /// Style for the current pointer state; grabbed wins over hovered
    pub fn style(&self, hovered: bool, grabbed: bool) -> PanelStyle {
        let border = if grabbed {
            self.border_grabbed
        } else if hovered {
            self.border_hover
        } else {
            self.border
        };
        PanelStyle {
            fill: self.background,
            border,
            border_width: self.border_width,
        }
    }
}

/// Colors and border width for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanelStyle {
    pub fill: Color,
    pub border: Color,
    pub border_width: u32,
}
