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

/// Errors raised by the Model while loading, editing or saving a collection.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Collection file does not exist.
    #[error("Collection file not found: {0}")]
    NotFound(PathBuf),
    /// A record in the collection file could not be parsed.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
    /// A property was set to a value of the wrong shape or out of range.
    #[error("Invalid value for '{key}': expected {expected}")]
    InvalidValue { key: String, expected: String },
    /// A movie field was edited while nothing is selected.
    #[error("Cannot set '{0}' without a selected movie")]
    NoSelection(String),
    /// Atomic write operation failed.
    #[error("Atomic write failed: {0}")]
    WriteFailed(String),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
