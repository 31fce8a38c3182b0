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


//! Tests for loading application settings

use std::{fs, path::PathBuf};
use tempfile::TempDir;

use crate::config::{AppConfig, ConfigError, WindowPlacement};

#[test]
fn test_defaults_open_two_windows() {
    let config = AppConfig::default();

    assert_eq!(config.width, 960);
    assert_eq!(config.height, 540);
    assert_eq!(config.extension, "csv");
    assert_eq!(config.windows.len(), 2);
    assert_eq!(config.windows[0], WindowPlacement::new("Movies 1", 20.0, 40.0));
}

#[test]
fn test_empty_file_gives_defaults() {
    let config = AppConfig::from_toml("").unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let config = AppConfig::from_toml("width = 1280\n").unwrap();

    assert_eq!(config.width, 1280);
    assert_eq!(config.height, 540);
    assert_eq!(config.windows.len(), 2);
}

#[test]
fn test_windows_table_replaces_default_windows() {
    let content = r#"
[[windows]]
name = "Library"
x = 40.0
y = 60.0

[[windows]]
name = "Editor"
"#;
    let config = AppConfig::from_toml(content).unwrap();

    assert_eq!(
        config.windows,
        vec![
            WindowPlacement::new("Library", 40.0, 60.0),
            WindowPlacement::new("Editor", 0.0, 0.0),
        ]
    );
}

#[test]
fn test_wrong_type_is_a_parse_error() {
    let result = AppConfig::from_toml("width = \"wide\"\n");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_empty_window_name_is_rejected() {
    let content = "[[windows]]\nname = \"  \"\n";
    assert!(matches!(
        AppConfig::from_toml(content),
        Err(ConfigError::EmptyWindowName(1))
    ));
}

#[test]
fn test_empty_window_list_is_rejected() {
    assert!(matches!(
        AppConfig::from_toml("windows = []\n"),
        Err(ConfigError::NoWindows)
    ));
}

#[test]
fn test_dotted_extension_is_rejected() {
    assert!(matches!(
        AppConfig::from_toml("extension = \".csv\"\n"),
        Err(ConfigError::InvalidExtension(_))
    ));
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.toml");
    fs::write(&path, "data_dir = \"/srv/movies\"\nextension = \"tsv\"\n").unwrap();

    let config = AppConfig::load(&path).unwrap();
    let files = config.file_settings();

    assert_eq!(files.initial_dir, PathBuf::from("/srv/movies"));
    assert_eq!(files.extension, "tsv");
}

#[test]
fn test_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.toml");

    assert!(matches!(AppConfig::load(&path), Err(ConfigError::Read { .. })));
}

#[test]
fn test_load_or_default_without_path() {
    assert_eq!(AppConfig::load_or_default(None).unwrap(), AppConfig::default());
}
