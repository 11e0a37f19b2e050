//! Command-line argument parsing
//!
//! Supports:
//! - An explicit config file path
//! - Overriding the detected screen size
//! - Printing the effective configuration

use clap::Parser;
use std::path::PathBuf;

use crate::config::PanelConfig;
use crate::error::PanelError;
use crate::model::ScreenMetrics;

/// A floating toolbar that docks to screen edges
#[derive(Parser, Debug)]
#[command(name = "dockbar", version, about = "A floating toolbar that docks to screen edges")]
pub struct CliArgs {
    /// Read configuration from PATH instead of the default location
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Use a WIDTHxHEIGHT screen instead of the primary monitor
    #[arg(long, value_name = "WxH")]
    pub screen: Option<String>,

    /// Print the effective configuration as YAML and exit
    #[arg(long)]
    pub print_config: bool,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub panel: PanelConfig,
    /// Screen size override, already validated
    pub screen: Option<ScreenMetrics>,
    pub print_config: bool,
}

/// Parse "1920x1080" (also accepts 'X' or '*')
pub fn parse_screen(value: &str) -> Result<ScreenMetrics, PanelError> {
    let parse_error = || PanelError::ScreenParse(value.to_string());
    let (w, h) = value
        .trim()
        .split_once(['x', 'X', '*'])
        .ok_or_else(parse_error)?;
    let width: i64 = w.trim().parse().map_err(|_| parse_error())?;
    let height: i64 = h.trim().parse().map_err(|_| parse_error())?;
    ScreenMetrics::new(width, height)
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, PanelError> {
        let screen = self.screen.as_deref().map(parse_screen).transpose()?;

        let panel = match &self.config {
            // An explicitly named file that cannot be read is a hard error
            Some(path) => PanelConfig::load_from(path)?,
            None => PanelConfig::load(),
        };

        Ok(StartupConfig {
            panel,
            screen,
            print_config: self.print_config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_screen() {
        let screen = parse_screen("1920x1080").unwrap();
        assert_eq!(screen.width(), 1920);
        assert_eq!(screen.height(), 1080);
        assert_eq!(parse_screen(" 800 X 600 ").unwrap().height(), 600);
    }

    #[test]
    fn test_parse_screen_rejects_garbage() {
        assert!(matches!(
            parse_screen("1920"),
            Err(PanelError::ScreenParse(_))
        ));
        assert!(matches!(
            parse_screen("axb"),
            Err(PanelError::ScreenParse(_))
        ));
        assert!(matches!(
            parse_screen("0x1080"),
            Err(PanelError::DegenerateScreen { .. })
        ));
    }

    #[test]
    fn test_explicit_config_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "drag:\n  clamp_margin: 7\n").unwrap();

        let args = CliArgs {
            config: Some(path),
            screen: Some("1280x720".to_string()),
            print_config: true,
        };
        let config = args.into_config().unwrap();
        assert_eq!(config.panel.drag.clamp_margin, 7);
        assert_eq!(config.screen.map(|s| s.width()), Some(1280));
        assert!(config.print_config);
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let args = CliArgs {
            config: Some(PathBuf::from("/nonexistent/dockbar.yaml")),
            screen: None,
            print_config: false,
        };
        assert!(args.into_config().is_err());
    }

    #[test]
    fn test_cli_parses_flags() {
        let args = CliArgs::parse_from(["dockbar", "--screen", "640x480", "--print-config"]);
        assert_eq!(args.screen.as_deref(), Some("640x480"));
        assert!(args.print_config);
        assert!(args.config.is_none());
    }
}
