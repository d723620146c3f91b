//! Card theme selection and persistence.
//!
//! Overview
//! - Two palettes, dark and light, applied by the card renderer
//! - Persistence: JSON file at `<data_dir>/preferences.json`
//! - Concurrency: file access guarded with fs2 file locks (shared for read, exclusive for write)
//! - Resolution order: stored preference, then the terminal's `COLORFGBG` hint,
//!   then the configured default (falling back to dark)
//!
//! The stored preference only changes through [`set`] and [`toggle`]; plain
//! readings never write it, so running casts leaves the theme file untouched.

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// Parse a configured theme name. Case-insensitive; anything that is not
    /// "dark" or "light" is `None`.
    pub fn from_name(name: &str) -> Option<Theme> {
        match name.to_ascii_lowercase().as_str() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// On-disk schema for `<data_dir>/preferences.json`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PreferencesFile {
    #[serde(default)]
    pub theme: Option<Theme>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

fn preferences_path(base_dir: &str) -> PathBuf {
    Path::new(base_dir).join("preferences.json")
}

fn load_preferences(base_dir: &str) -> PreferencesFile {
    let path = preferences_path(base_dir);
    if let Ok(mut f) = fs::OpenOptions::new().read(true).open(&path) {
        // Try shared lock for read
        let _ = f.lock_shared();
        let mut s = String::new();
        if let Err(e) = f.read_to_string(&mut s) {
            log::warn!("theme: failed reading preferences.json: {}", e);
            return PreferencesFile::default();
        }
        let cleaned = s.trim_start_matches('\0');
        serde_json::from_str(cleaned).unwrap_or_default()
    } else {
        PreferencesFile::default()
    }
}

fn save_preferences(base_dir: &str, prefs: &PreferencesFile) {
    if let Err(e) = ensure_dir(Path::new(base_dir)) {
        log::warn!("theme: unable to ensure dir {:?}: {}", base_dir, e);
        return;
    }
    let path = preferences_path(base_dir);
    match serde_json::to_string_pretty(prefs) {
        Ok(data) => {
            if let Ok(mut f) = fs::OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&path)
            {
                if f.lock_exclusive().is_ok() {
                    let _ = f.write_all(data.as_bytes());
                    let _ = f.flush();
                    let _ = f.sync_all();
                    let _ = f.unlock();
                }
            }
        }
        Err(e) => log::warn!("theme: serialize error: {}", e),
    }
}

/// Interpret the rxvt-style `COLORFGBG` variable ("fg;bg", sometimes
/// "fg;default;bg"). Background colors 0-6 and 8 read as a dark terminal.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg = value.rsplit(';').next()?.trim();
    match bg.parse::<u8>().ok()? {
        0..=6 | 8 => Some(Theme::Dark),
        7 | 9..=15 => Some(Theme::Light),
        _ => None,
    }
}

fn resolve_parts(stored: Option<Theme>, terminal_hint: Option<Theme>, config: &Config) -> Theme {
    if let Some(theme) = stored {
        return theme;
    }
    if let Some(theme) = terminal_hint {
        return theme;
    }
    Theme::from_name(&config.ui.default_theme).unwrap_or_else(|| {
        log::warn!(
            "theme: invalid default_theme {:?} in config, using dark",
            config.ui.default_theme
        );
        Theme::Dark
    })
}

/// Determine the active theme for this invocation.
pub fn resolve(base_dir: &str, config: &Config) -> Theme {
    let stored = load_preferences(base_dir).theme;
    let hint = std::env::var("COLORFGBG")
        .ok()
        .and_then(|v| theme_from_colorfgbg(&v));
    resolve_parts(stored, hint, config)
}

/// Persist an explicit theme choice.
pub fn set(base_dir: &str, theme: Theme) {
    let prefs = PreferencesFile {
        theme: Some(theme),
        updated_at: Some(Utc::now()),
    };
    save_preferences(base_dir, &prefs);
}

/// Flip the active theme and persist the choice. Returns the new theme.
pub fn toggle(base_dir: &str, config: &Config) -> Theme {
    let next = resolve(base_dir, config).toggled();
    set(base_dir, next);
    next
}
