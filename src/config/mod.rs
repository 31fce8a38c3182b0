// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! Application settings
//!
//! Settings are read from an optional TOML file. Every field has a default,
//! so an empty file (or no file at all) gives the stock two-window layout.
//!
//! # Example
//!
//! ```toml
//! width = 1280
//! height = 720
//! data_dir = "~/movies"
//! extension = "csv"
//!
//! [[windows]]
//! name = "Library"
//! x = 40.0
//! y = 40.0
//! ```

pub mod error;

use serde::Deserialize;
use std::{fs, path::{Path, PathBuf}};
use tracing::debug;

pub use error::ConfigError;

use crate::ui::shell::FileSettings;

/// Title and screen position of one window
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct WindowPlacement {
    pub name: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

impl WindowPlacement {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }
}

/// Top-level application settings
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Initial window width
    pub width: i32,
    /// Initial window height
    pub height: i32,
    /// Directory file dialogs start in (`~` is expanded)
    pub data_dir: String,
    /// Only files with this extension can be picked
    pub extension: String,
    /// One View is opened per entry
    pub windows: Vec<WindowPlacement>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: 960,
            height: 540,
            data_dir: ".".to_string(),
            extension: "csv".to_string(),
            windows: vec![
                WindowPlacement::new("Movies 1", 20.0, 40.0),
                WindowPlacement::new("Movies 2", 1000.0, 40.0),
            ],
        }
    }
}

impl AppConfig {
    /// Parses settings from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads settings from `path`
    ///
    /// # Errors
    ///
    /// * `ConfigError::Read` - File missing or unreadable
    /// * `ConfigError::Parse` - Not valid TOML
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), "loading settings");
        Self::from_toml(&content)
    }

    /// Reads settings from `path` if given, otherwise returns the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.windows.is_empty() {
            return Err(ConfigError::NoWindows);
        }

        if let Some(index) = self.windows.iter().position(|w| w.name.trim().is_empty()) {
            return Err(ConfigError::EmptyWindowName(index + 1));
        }

        if self.extension.is_empty() || self.extension.contains('.') {
            return Err(ConfigError::InvalidExtension(self.extension.clone()));
        }

        Ok(())
    }

    /// Data directory with `~` and environment variables expanded
    pub fn data_dir(&self) -> PathBuf {
        let expanded = shellexpand::full(&self.data_dir)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| self.data_dir.clone());
        PathBuf::from(expanded)
    }

    /// File dialog defaults derived from these settings
    pub fn file_settings(&self) -> FileSettings {
        FileSettings {
            initial_dir: self.data_dir(),
            extension: self.extension.clone(),
        }
    }
}

#[cfg(test)]
mod tests;
