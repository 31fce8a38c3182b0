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


//! Movie Browser
//!
//! A small desktop application for browsing and editing a movie
//! collection in any number of windows that stay in sync.
//!
//! # Features
//!
//! - **Synchronised windows:** Every change reaches every pane of every window
//! - **Ordered delivery:** No pane sees a later change before an earlier one
//! - **Clean detach:** Closing a window deregisters it and disconnects its listeners
//! - **GTK4 Interface:** Tabbed panes, menu bar, native file dialogs
//! - **Atomic saves:** Collections are written with temp-file-then-rename
//!
//! # Architecture
//!
//! - **`core`:** Data (values, movies, CSV, Model)
//! - **`config`:** Application settings (TOML)
//! - **`ui`:** MVC Controller, Views and panes; GTK4 adapter behind the `gui` feature
//!
//! # Examples
//!
//! ## Reading a collection
//!
//! ```no_run
//! use movie_browser::core::csv::read_movies;
//! use std::path::Path;
//!
//! let movies = read_movies(Path::new("movies.csv"))?;
//! println!("Found {} movies", movies.len());
//! # Ok::<(), movie_browser::core::ModelError>(())
//! ```
//!
//! ## Driving the Controller
//!
//! ```
//! use movie_browser::core::{keys, Model, Movie, Value};
//! use movie_browser::ui::Controller;
//!
//! let controller = Controller::new(Model::with_movies(vec![
//!     Movie::new("Alien", 1979, "Horror", 8.5),
//! ]));
//!
//! controller.set_property(keys::SELECTED, Value::Integer(0));
//! assert_eq!(controller.get_property(keys::TITLE), Some(Value::from("Alien")));
//! ```
//!
//! ## Using the GUI
//!
//! ```no_run
//! # #[cfg(feature = "gui")]
//! # {
//! use movie_browser::{config::AppConfig, ui::App};
//!
//! let app = App::new(AppConfig::default(), None);
//! app.run(); // Blocks until the last window closes
//! # }
//! ```

pub mod config;
pub mod core;
pub mod ui;

// Re-export commonly used types for convenience
pub use core::{Model, Movie, Value};
