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


//! Menu bar layout and command table
//!
//! Every menu item is a [`MenuCommand`]. The table below fixes, per
//! command, its label, its action name, its accelerator, whether it is
//! enabled once the View is initialised, and what activating it does.
//!
//! ```text
//! Movies   File      Edit     Window
//! About    New       Undo     One
//! Quit     Open      Redo     Two
//!          ──────    ──────   Three
//!          Close     Cut
//!          Save      Copy
//!          Print     Paste
//! ```
//!
//! Only Open and Save are wired to the Controller. Print, Undo and Redo are
//! disabled; everything else is an inert placeholder.

use std::fmt;

/// Every item of the menu bar
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MenuCommand {
    MoviesAbout,
    MoviesQuit,
    FileNew,
    FileOpen,
    FileClose,
    FileSave,
    FilePrint,
    EditUndo,
    EditRedo,
    EditCut,
    EditCopy,
    EditPaste,
    WindowOne,
    WindowTwo,
    WindowThree,
}

/// What activating a command does
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CommandKind {
    /// Choose a file, then hand it to the Controller as the `file` property
    Open,
    /// Choose a destination, then ask the Controller to save there
    Save,
    /// Logs an informational message and does nothing else
    Placeholder,
}

/// Per-command setup applied once by `View::initialize`
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CommandState {
    pub enabled: bool,
    /// Accelerator in GTK syntax (e.g., `<Control>o`)
    pub accelerator: Option<&'static str>,
}

impl MenuCommand {
    /// All commands in menu order
    pub const ALL: [MenuCommand; 15] = [
        MenuCommand::MoviesAbout,
        MenuCommand::MoviesQuit,
        MenuCommand::FileNew,
        MenuCommand::FileOpen,
        MenuCommand::FileClose,
        MenuCommand::FileSave,
        MenuCommand::FilePrint,
        MenuCommand::EditUndo,
        MenuCommand::EditRedo,
        MenuCommand::EditCut,
        MenuCommand::EditCopy,
        MenuCommand::EditPaste,
        MenuCommand::WindowOne,
        MenuCommand::WindowTwo,
        MenuCommand::WindowThree,
    ];

    /// Item label shown in the menu
    pub fn label(self) -> &'static str {
        match self {
            MenuCommand::MoviesAbout => "About",
            MenuCommand::MoviesQuit => "Quit",
            MenuCommand::FileNew => "New",
            MenuCommand::FileOpen => "Open",
            MenuCommand::FileClose => "Close",
            MenuCommand::FileSave => "Save",
            MenuCommand::FilePrint => "Print",
            MenuCommand::EditUndo => "Undo",
            MenuCommand::EditRedo => "Redo",
            MenuCommand::EditCut => "Cut",
            MenuCommand::EditCopy => "Copy",
            MenuCommand::EditPaste => "Paste",
            MenuCommand::WindowOne => "One",
            MenuCommand::WindowTwo => "Two",
            MenuCommand::WindowThree => "Three",
        }
    }

    /// Action name, unique per window (e.g., `file-open`)
    pub fn action_name(self) -> &'static str {
        match self {
            MenuCommand::MoviesAbout => "movies-about",
            MenuCommand::MoviesQuit => "movies-quit",
            MenuCommand::FileNew => "file-new",
            MenuCommand::FileOpen => "file-open",
            MenuCommand::FileClose => "file-close",
            MenuCommand::FileSave => "file-save",
            MenuCommand::FilePrint => "file-print",
            MenuCommand::EditUndo => "edit-undo",
            MenuCommand::EditRedo => "edit-redo",
            MenuCommand::EditCut => "edit-cut",
            MenuCommand::EditCopy => "edit-copy",
            MenuCommand::EditPaste => "edit-paste",
            MenuCommand::WindowOne => "window-one",
            MenuCommand::WindowTwo => "window-two",
            MenuCommand::WindowThree => "window-three",
        }
    }

    /// Reverse lookup of [`MenuCommand::action_name`]
    pub fn from_action_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.action_name() == name)
    }

    pub fn kind(self) -> CommandKind {
        match self {
            MenuCommand::FileOpen => CommandKind::Open,
            MenuCommand::FileSave => CommandKind::Save,
            _ => CommandKind::Placeholder,
        }
    }

    pub fn accelerator(self) -> Option<&'static str> {
        match self {
            MenuCommand::MoviesQuit => Some("<Control>q"),
            MenuCommand::FileNew => Some("<Control>n"),
            MenuCommand::FileOpen => Some("<Control>o"),
            MenuCommand::FileClose => Some("<Control>w"),
            MenuCommand::FileSave => Some("<Control>s"),
            MenuCommand::FilePrint => Some("<Control>p"),
            MenuCommand::EditUndo => Some("<Control>z"),
            MenuCommand::EditRedo => Some("<Control>y"),
            MenuCommand::EditCut => Some("<Control>x"),
            MenuCommand::EditCopy => Some("<Control>c"),
            MenuCommand::EditPaste => Some("<Control>v"),
            MenuCommand::MoviesAbout
            | MenuCommand::WindowOne
            | MenuCommand::WindowTwo
            | MenuCommand::WindowThree => None,
        }
    }

    /// Whether the item is usable once the View is initialised
    pub fn is_enabled(self) -> bool {
        !matches!(
            self,
            MenuCommand::FilePrint | MenuCommand::EditUndo | MenuCommand::EditRedo
        )
    }

    pub fn state(self) -> CommandState {
        CommandState {
            enabled: self.is_enabled(),
            accelerator: self.accelerator(),
        }
    }
}

impl fmt::Display for MenuCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let menu = MenuBar::standard()
            .menus
            .iter()
            .find(|menu| menu.contains(*self))
            .map(|menu| menu.label)
            .unwrap_or("?");
        write!(f, "{} → {}", menu, self.label())
    }
}

/// One top-level menu; each section is separated from the next
#[derive(Clone, Debug, PartialEq)]
pub struct Menu {
    pub label: &'static str,
    pub sections: Vec<Vec<MenuCommand>>,
}

impl Menu {
    pub fn contains(&self, command: MenuCommand) -> bool {
        self.sections.iter().any(|section| section.contains(&command))
    }
}

/// The full menu bar
#[derive(Clone, Debug, PartialEq)]
pub struct MenuBar {
    pub menus: Vec<Menu>,
}

impl MenuBar {
    /// The application's Movies / File / Edit / Window menu bar
    pub fn standard() -> Self {
        use MenuCommand::*;

        Self {
            menus: vec![
                Menu {
                    label: "Movies",
                    sections: vec![vec![MoviesAbout, MoviesQuit]],
                },
                Menu {
                    label: "File",
                    sections: vec![
                        vec![FileNew, FileOpen],
                        vec![FileClose, FileSave, FilePrint],
                    ],
                },
                Menu {
                    label: "Edit",
                    sections: vec![
                        vec![EditUndo, EditRedo],
                        vec![EditCut, EditCopy, EditPaste],
                    ],
                },
                Menu {
                    label: "Window",
                    sections: vec![vec![WindowOne, WindowTwo, WindowThree]],
                },
            ],
        }
    }

    /// Commands in menu order
    pub fn commands(&self) -> impl Iterator<Item = MenuCommand> + '_ {
        self.menus
            .iter()
            .flat_map(|menu| menu.sections.iter().flatten().copied())
    }
}
