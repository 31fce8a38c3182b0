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


//! src/core/mod.rs
//!
//! Core data module
//!
//! This module contains the toolkit-independent data side of the
//! application:
//! - Notification values and well-known keys
//! - The movie record and its CSV reader/writer
//! - The Model (property store + collection) and its errors
//!
//! Nothing in here knows about views, panes or GTK, so all of it is
//! unit tested without a display server.

pub mod csv;
pub mod error;
pub mod model;
pub mod movie;
pub mod value;

pub use error::ModelError;
pub use model::{Change, Model};
pub use movie::Movie;
pub use value::{keys, Value};

#[cfg(test)]
mod tests;
