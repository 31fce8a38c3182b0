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


//! Window toolkit seam
//!
//! A View never touches the windowing toolkit directly. Everything it needs
//! from a window (tabs, menu bar, listeners, dialogs) goes through
//! [`WindowShell`]. The GTK4 implementation lives in `ui::window`.

use std::path::PathBuf;

use crate::ui::{
    menu::{CommandState, MenuBar, MenuCommand},
    pane::Tab,
};

/// Callback fired when the window asks to close
pub type CloseHandler = Box<dyn Fn()>;

/// Callback fired when a menu item is activated
pub type CommandHandler = Box<dyn Fn(MenuCommand)>;

/// One-shot callback receiving the dialog result (`None` = cancelled)
pub type FileChoiceHandler = Box<dyn FnOnce(Option<PathBuf>)>;

/// Whether a dialog picks an existing file or a destination
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FileMode {
    Open,
    Save,
}

/// Parameters of a modal file dialog
#[derive(Clone, Debug, PartialEq)]
pub struct FileRequest {
    pub mode: FileMode,
    pub title: String,
    /// Directory the dialog starts in
    pub initial_dir: PathBuf,
    /// Suggested file name (save dialogs only)
    pub initial_name: Option<String>,
    /// Human readable filter name (e.g., "CSV")
    pub filter_name: String,
    /// Extension without the dot (e.g., "csv")
    pub extension: String,
}

impl FileRequest {
    /// Glob pattern of the only selectable files (e.g., `*.csv`)
    pub fn pattern(&self) -> String {
        format!("*.{}", self.extension)
    }
}

/// File dialog defaults shared by every window
#[derive(Clone, Debug, PartialEq)]
pub struct FileSettings {
    pub initial_dir: PathBuf,
    pub extension: String,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            initial_dir: PathBuf::from("."),
            extension: "csv".to_string(),
        }
    }
}

impl FileSettings {
    pub fn open_request(&self) -> FileRequest {
        FileRequest {
            mode: FileMode::Open,
            title: "Open File".to_string(),
            initial_dir: self.initial_dir.clone(),
            initial_name: None,
            filter_name: self.extension.to_uppercase(),
            extension: self.extension.clone(),
        }
    }

    pub fn save_request(&self) -> FileRequest {
        FileRequest {
            mode: FileMode::Save,
            title: "Save File".to_string(),
            initial_dir: self.initial_dir.clone(),
            initial_name: Some(format!("movies.{}", self.extension)),
            filter_name: self.extension.to_uppercase(),
            extension: self.extension.clone(),
        }
    }
}

/// What a View needs from its window
pub trait WindowShell {
    /// Widget type accepted as tab content
    type Widget;

    /// Appends a tab to the tabbed layout
    fn add_tab(&self, tab: Tab<Self::Widget>);

    /// Builds the menu bar; items start enabled and without accelerators
    fn install_menu_bar(&self, menu_bar: &MenuBar);

    /// Applies enabled state and accelerator to one menu item
    fn configure_command(&self, command: MenuCommand, state: CommandState);

    /// Registers the window-close listener
    fn connect_close_request(&self, handler: CloseHandler);

    /// Registers the menu-action listener
    fn connect_command(&self, handler: CommandHandler);

    /// Detaches every listener registered through this shell
    fn disconnect_listeners(&self);

    /// Shows the window with a title at a screen position
    fn show(&self, title: &str, x: f64, y: f64);

    /// Runs a modal file dialog and reports the choice exactly once
    fn choose_file(&self, request: FileRequest, on_choice: FileChoiceHandler);
}
