//! Where dockbar keeps its files
//!
//! Everything lives in one per-user directory:
//!
//! ```text
//! <base>/dockbar/
//!   config.yaml        panel configuration
//!   logs/dockbar.log   rolling debug log
//!   dumps/             JSON state dumps (debug builds)
//! ```
//!
//! `<base>` is `$XDG_CONFIG_HOME` or `~/.config` on Unix and macOS, and
//! `%APPDATA%` on Windows. Nothing here touches the filesystem; callers
//! create directories when they first write.

use std::path::PathBuf;

const APP_DIR: &str = "dockbar";
const CONFIG_FILE: &str = "config.yaml";

fn base_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(PathBuf::from)
    }

    #[cfg(not(target_os = "windows"))]
    {
        std::env::var_os("XDG_CONFIG_HOME")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
    }
}

/// Per-user dockbar directory, if a home or config base can be found
pub fn config_dir() -> Option<PathBuf> {
    base_dir().map(|base| base.join(APP_DIR))
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Debug state dumps; falls back to `./dumps` when no config dir exists
pub fn dumps_dir() -> PathBuf {
    config_dir()
        .map(|dir| dir.join("dumps"))
        .unwrap_or_else(|| PathBuf::from("dumps"))
}
