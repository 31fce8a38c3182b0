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


//! User interface with MVC architecture
//!
//! # Architecture
//!
//! - **Model**: `core::Model` (property store + movie collection)
//! - **View**: a window composed of panes (`view.rs`, `components/`)
//! - **Controller**: owns the View registry and broadcasts every change
//!   (`controller.rs`)
//!
//! The protocol half (`controller`, `view`, `pane`, `menu`, `shell`,
//! `protocol`) is toolkit independent. The GTK4 half (`app`, `window`,
//! `components`) is only built with the `gui` feature.
//!
//! # Module Structure
//!
//! ```text
//! ui/
//! ├── mod.rs          // This file - exports
//! ├── protocol.rs     // Controller ⇄ View traits, ViewId
//! ├── controller.rs   // MVC Controller, registry and fan-out
//! ├── view.rs         // View lifecycle, fan-out to panes, menu commands
//! ├── pane.rs         // Pane trait and Tab
//! ├── menu.rs         // Menu bar layout and command table
//! ├── shell.rs        // WindowShell trait and file dialog requests
//! ├── window.rs       // GTK4 WindowShell
//! ├── app.rs          // GTK4 Application setup
//! └── components/     // GTK4 panes
//! ```

pub mod controller;
pub mod menu;
pub mod pane;
pub mod protocol;
pub mod shell;
pub mod view;

#[cfg(feature = "gui")]
pub mod app;
#[cfg(feature = "gui")]
pub mod components;
#[cfg(feature = "gui")]
pub mod window;

pub use {controller::Controller, view::View};

#[cfg(feature = "gui")]
pub use app::App;

#[cfg(test)]
mod tests;
