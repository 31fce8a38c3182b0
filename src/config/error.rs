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


use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading application settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Settings file could not be read.
    #[error("Failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Settings file is not valid TOML or has fields of the wrong type.
    #[error("Invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),
    /// The window list is empty, so nothing would be shown.
    #[error("At least one window must be configured")]
    NoWindows,
    /// A window placement has an empty name.
    #[error("Window #{0} has an empty name")]
    EmptyWindowName(usize),
    /// The file dialog extension is empty or contains a dot.
    #[error("Invalid file extension '{0}' (expected e.g. \"csv\")")]
    InvalidExtension(String),
}
