//! Light/dark theme flag, persisted under a fixed key. Purely presentational;
//! nothing in the accounting core reads it.

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// File name the flag is stored under.
pub const THEME_KEY: &str = "neumoTheme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn from_flag(flag: &str) -> Self {
        if flag.trim() == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Flat-file store for the theme flag. Reads fall back to `Light` when the
/// file is missing or unreadable; only writes can fail.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `<user config dir>/prestamos/neumoTheme`.
    pub fn default_location() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join("prestamos").join(THEME_KEY))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Theme {
        match fs::read_to_string(&self.path) {
            Ok(flag) => Theme::from_flag(&flag),
            Err(_) => Theme::default(),
        }
    }

    pub fn save(&self, theme: Theme) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, theme.as_str())?;
        Ok(())
    }

    pub fn toggle(&self) -> Result<Theme> {
        let next = self.load().toggled();
        self.save(next)?;
        Ok(next)
    }
}
