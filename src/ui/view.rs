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


//! View - one window, a menu bar and a fixed set of panes
//!
//! # Lifecycle
//!
//! ```text
//! View::new ──► Controller::add_view ──► initialize ──► update* ──► terminate
//!   (window shown,                        (panes, menus)              (window closed)
//!    listeners connected)
//! ```
//!
//! The pane list is fixed at construction. Notifications are forwarded to
//! every pane in list order without filtering; after `terminate` the View
//! is inert and ignores notifications and menu commands.

use std::{
    cell::Cell,
    path::PathBuf,
    rc::{Rc, Weak},
};
use tracing::{debug, info, warn};

use crate::core::{keys, Value};
use crate::ui::{
    menu::{CommandKind, MenuBar, MenuCommand},
    pane::Pane,
    protocol::{ControllerPort, ViewId, ViewObserver},
    shell::{FileSettings, WindowShell},
};

/// Where a View is in its lifecycle
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ViewState {
    /// Window shown, panes not yet initialised
    Constructed,
    /// Receiving notifications and commands
    Initialized,
    /// Closed; everything is ignored
    Terminated,
}

/// A window composed of panes, kept in sync by the Controller
pub struct View<W> {
    id: ViewId,
    name: String,
    /// Held weakly so an open window never keeps the Controller alive
    controller: Weak<dyn ControllerPort>,
    shell: Box<dyn WindowShell<Widget = W>>,
    panes: Vec<Box<dyn Pane<Widget = W>>>,
    files: FileSettings,
    /// Shared with pending dialog callbacks, which must not outlive `terminate`
    state: Rc<Cell<ViewState>>,
    close_requested: Cell<bool>,
}

impl<W: 'static> View<W> {
    /// Builds the window and shows it
    ///
    /// Lays out one tab per pane (in pane order) plus the standard menu bar,
    /// connects the close and command listeners, then shows the window with
    /// `name` as its title at `(x, y)`. No pane is initialised yet.
    ///
    /// # Arguments
    ///
    /// * `controller` - Controller the View reports to
    /// * `name` - Window title
    /// * `(x, y)` - Screen position
    /// * `panes` - Content panes, in tab order
    /// * `shell` - Toolkit window
    /// * `files` - File dialog defaults
    pub fn new(
        controller: Weak<dyn ControllerPort>,
        name: impl Into<String>,
        (x, y): (f64, f64),
        panes: Vec<Box<dyn Pane<Widget = W>>>,
        shell: Box<dyn WindowShell<Widget = W>>,
        files: FileSettings,
    ) -> Rc<Self> {
        let name = name.into();
        let id = ViewId::next();

        Rc::new_cyclic(|weak: &Weak<Self>| {
            for pane in &panes {
                shell.add_tab(pane.create_tab());
            }

            shell.install_menu_bar(&MenuBar::standard());

            let view_for_close = weak.clone();
            shell.connect_close_request(Box::new(move || {
                if let Some(view) = view_for_close.upgrade() {
                    view.handle_close_request();
                }
            }));

            let view_for_command = weak.clone();
            shell.connect_command(Box::new(move |command| {
                if let Some(view) = view_for_command.upgrade() {
                    view.dispatch(command);
                }
            }));

            shell.show(&name, x, y);
            debug!(view = %id, name = %name, panes = panes.len(), "view constructed");

            Self {
                id,
                name,
                controller,
                shell,
                panes,
                files,
                state: Rc::new(Cell::new(ViewState::Constructed)),
                close_requested: Cell::new(false),
            }
        })
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> ViewState {
        self.state.get()
    }

    pub fn pane_count(&self) -> usize {
        self.panes.len()
    }

    /// Initialises every pane, then sets up the menu items
    pub fn initialize(&self) {
        if self.state.get() != ViewState::Constructed {
            warn!(view = %self.id, state = ?self.state.get(), "initialize called twice, ignored");
            return;
        }

        for pane in &self.panes {
            pane.initialize();
        }

        for command in MenuBar::standard().commands() {
            self.shell.configure_command(command, command.state());
        }

        self.state.set(ViewState::Initialized);
        debug!(view = %self.id, "view initialized");
    }

    /// Terminates every pane and detaches this View's listeners
    pub fn terminate(&self) {
        if self.state.get() == ViewState::Terminated {
            warn!(view = %self.id, "terminate called twice, ignored");
            return;
        }

        self.state.set(ViewState::Terminated);

        for pane in &self.panes {
            pane.terminate();
        }

        self.shell.disconnect_listeners();
        debug!(view = %self.id, "view terminated");
    }

    /// Forwards an event to every pane
    pub fn update(&self, key: &str, value: &Value) {
        if !self.is_live() {
            return;
        }

        for pane in &self.panes {
            pane.update(key, value);
        }
    }

    /// Forwards a property change to every pane
    pub fn update_property(&self, key: &str, new_value: &Value, old_value: &Value) {
        if !self.is_live() {
            return;
        }

        for pane in &self.panes {
            pane.update_property(key, new_value, old_value);
        }
    }

    /// Window close listener: asks the Controller to remove this View, once
    pub fn handle_close_request(&self) {
        if self.close_requested.replace(true) {
            debug!(view = %self.id, "repeated close request ignored");
            return;
        }

        info!(view = %self.id, name = %self.name, "window closing");

        if let Some(controller) = self.controller.upgrade() {
            controller.remove_view(self.id);
        }
    }

    /// Menu action listener
    pub fn dispatch(&self, command: MenuCommand) {
        if self.state.get() != ViewState::Initialized {
            debug!(view = %self.id, %command, "command ignored outside initialized state");
            return;
        }

        if !command.is_enabled() {
            debug!(view = %self.id, %command, "disabled command ignored");
            return;
        }

        match command.kind() {
            CommandKind::Open => self.handle_file_open(),
            CommandKind::Save => self.handle_file_save(),
            CommandKind::Placeholder => {
                info!(view = %self.id, %command, "menu item selected (not implemented)");
            }
        }
    }

    /// Lets the user pick a collection, then hands it to the Controller
    fn handle_file_open(&self) {
        let controller = self.controller.clone();
        let state = self.state.clone();
        let id = self.id;

        self.shell.choose_file(
            self.files.open_request(),
            Box::new(move |choice: Option<PathBuf>| match choice {
                Some(_) if state.get() != ViewState::Initialized => {
                    debug!(view = %id, "open finished after the window closed, ignored");
                }
                Some(path) => {
                    info!(view = %id, path = %path.display(), "opening collection");
                    if let Some(controller) = controller.upgrade() {
                        controller.set_property(keys::FILE, Value::Path(path));
                    }
                }
                None => debug!(view = %id, "open cancelled"),
            }),
        );
    }

    /// Lets the user pick a destination, then asks the Controller to save
    fn handle_file_save(&self) {
        let controller = self.controller.clone();
        let state = self.state.clone();
        let id = self.id;

        self.shell.choose_file(
            self.files.save_request(),
            Box::new(move |choice: Option<PathBuf>| match choice {
                Some(_) if state.get() != ViewState::Initialized => {
                    debug!(view = %id, "save finished after the window closed, ignored");
                }
                Some(path) => {
                    info!(view = %id, path = %path.display(), "saving collection");
                    if let Some(controller) = controller.upgrade() {
                        controller.save(path);
                    }
                }
                None => debug!(view = %id, "save cancelled"),
            }),
        );
    }

    fn is_live(&self) -> bool {
        self.state.get() == ViewState::Initialized
    }
}

impl<W: 'static> ViewObserver for View<W> {
    fn id(&self) -> ViewId {
        self.id
    }

    fn initialize(&self) {
        View::initialize(self);
    }

    fn terminate(&self) {
        View::terminate(self);
    }

    fn update(&self, key: &str, value: &Value) {
        View::update(self, key, value);
    }

    fn update_property(&self, key: &str, new_value: &Value, old_value: &Value) {
        View::update_property(self, key, new_value, old_value);
    }
}
