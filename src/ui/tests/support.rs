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


//! Recording test doubles for the View/Controller protocol

use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    path::PathBuf,
    rc::{Rc, Weak},
};

use crate::core::{Movie, Value};
use crate::ui::{
    menu::{CommandState, MenuBar, MenuCommand},
    pane::{Pane, Tab},
    protocol::{ControllerPort, ViewId},
    shell::{
        CloseHandler, CommandHandler, FileChoiceHandler, FileRequest, FileSettings, WindowShell,
    },
    Controller, View,
};

/// Shared, ordered record of everything the panes saw
pub type Log = Rc<RefCell<Vec<String>>>;

pub fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

/// Reaction run after a pane has logged a property change
pub type Reaction = Box<dyn Fn(&str, &Value)>;

/// Pane that appends one line per call to a shared log
pub struct RecordingPane {
    name: String,
    log: Log,
    on_property: Option<Reaction>,
}

impl RecordingPane {
    pub fn new(name: &str, log: &Log) -> Self {
        Self {
            name: name.to_string(),
            log: log.clone(),
            on_property: None,
        }
    }

    /// Runs `reaction` for every property change this pane receives
    pub fn reacting(mut self, reaction: impl Fn(&str, &Value) + 'static) -> Self {
        self.on_property = Some(Box::new(reaction));
        self
    }

    pub fn boxed(self) -> Box<dyn Pane<Widget = String>> {
        Box::new(self)
    }

    fn record(&self, entry: String) {
        self.log.borrow_mut().push(format!("{}:{}", self.name, entry));
    }
}

impl Pane for RecordingPane {
    type Widget = String;

    fn initialize(&self) {
        self.record("initialize".to_string());
    }

    fn terminate(&self) {
        self.record("terminate".to_string());
    }

    fn update(&self, key: &str, value: &Value) {
        self.record(format!("update {}={}", key, value));
    }

    fn update_property(&self, key: &str, new_value: &Value, old_value: &Value) {
        self.record(format!("property {}={}<-{}", key, new_value, old_value));

        if let Some(reaction) = &self.on_property {
            reaction(key, new_value);
        }
    }

    fn create_tab(&self) -> Tab<String> {
        Tab::new(self.name.clone(), format!("widget:{}", self.name))
    }
}

/// Everything a [`RecordingShell`] was asked to do
#[derive(Default)]
pub struct ShellState {
    pub tabs: RefCell<Vec<Tab<String>>>,
    pub menu_bar: RefCell<Option<MenuBar>>,
    pub configured: RefCell<Vec<(MenuCommand, CommandState)>>,
    pub shown: RefCell<Option<(String, f64, f64)>>,
    pub disconnects: Cell<usize>,
    pub requests: RefCell<Vec<FileRequest>>,
    /// Dialog answers handed out in order; `None` once empty
    pub answers: RefCell<VecDeque<Option<PathBuf>>>,
    /// Keep dialogs open until [`ShellState::finish_dialog`]
    pub hold_dialogs: Cell<bool>,
    held_dialog: RefCell<Option<FileChoiceHandler>>,
    close_handler: RefCell<Option<Rc<dyn Fn()>>>,
    command_handler: RefCell<Option<Rc<dyn Fn(MenuCommand)>>>,
}

impl ShellState {
    /// Simulates the window manager asking the window to close
    pub fn request_close(&self) {
        let handler = self.close_handler.borrow().clone();
        if let Some(handler) = handler {
            handler();
        }
    }

    /// Simulates the user activating a menu item
    pub fn activate(&self, command: MenuCommand) {
        let handler = self.command_handler.borrow().clone();
        if let Some(handler) = handler {
            handler(command);
        }
    }

    /// Queues the result of the next file dialog
    pub fn answer(&self, choice: Option<PathBuf>) {
        self.answers.borrow_mut().push_back(choice);
    }

    /// Answers the dialog left open while `hold_dialogs` was set
    pub fn finish_dialog(&self, choice: Option<PathBuf>) {
        let on_choice = self.held_dialog.borrow_mut().take();
        if let Some(on_choice) = on_choice {
            on_choice(choice);
        }
    }

    pub fn has_listeners(&self) -> bool {
        self.close_handler.borrow().is_some() || self.command_handler.borrow().is_some()
    }
}

/// Window shell answering dialogs synchronously from a queue
pub struct RecordingShell(pub Rc<ShellState>);

impl WindowShell for RecordingShell {
    type Widget = String;

    fn add_tab(&self, tab: Tab<String>) {
        self.0.tabs.borrow_mut().push(tab);
    }

    fn install_menu_bar(&self, menu_bar: &MenuBar) {
        *self.0.menu_bar.borrow_mut() = Some(menu_bar.clone());
    }

    fn configure_command(&self, command: MenuCommand, state: CommandState) {
        self.0.configured.borrow_mut().push((command, state));
    }

    fn connect_close_request(&self, handler: CloseHandler) {
        *self.0.close_handler.borrow_mut() = Some(Rc::from(handler));
    }

    fn connect_command(&self, handler: CommandHandler) {
        *self.0.command_handler.borrow_mut() = Some(Rc::from(handler));
    }

    fn disconnect_listeners(&self) {
        self.0.disconnects.set(self.0.disconnects.get() + 1);
        self.0.close_handler.borrow_mut().take();
        self.0.command_handler.borrow_mut().take();
    }

    fn show(&self, title: &str, x: f64, y: f64) {
        *self.0.shown.borrow_mut() = Some((title.to_string(), x, y));
    }

    fn choose_file(&self, request: FileRequest, on_choice: FileChoiceHandler) {
        self.0.requests.borrow_mut().push(request);

        if self.0.hold_dialogs.get() {
            *self.0.held_dialog.borrow_mut() = Some(on_choice);
            return;
        }

        let choice = self.0.answers.borrow_mut().pop_front().flatten();
        on_choice(choice);
    }
}

/// A Controller call made by a View
#[derive(Clone, Debug, PartialEq)]
pub enum PortCall {
    SetProperty(String, Value),
    Save(PathBuf),
    RemoveView(ViewId),
}

/// Controller stand-in that only records calls
#[derive(Default)]
pub struct RecordingPort {
    pub calls: RefCell<Vec<PortCall>>,
}

impl ControllerPort for RecordingPort {
    fn set_property(&self, key: &str, value: Value) {
        self.calls
            .borrow_mut()
            .push(PortCall::SetProperty(key.to_string(), value));
    }

    fn save(&self, path: PathBuf) {
        self.calls.borrow_mut().push(PortCall::Save(path));
    }

    fn remove_view(&self, id: ViewId) {
        self.calls.borrow_mut().push(PortCall::RemoveView(id));
    }
}

/// Builds a View over recording doubles
///
/// Returns the View and the shell's recorded state.
pub fn build_view(
    controller: Weak<dyn ControllerPort>,
    name: &str,
    panes: Vec<Box<dyn Pane<Widget = String>>>,
) -> (Rc<View<String>>, Rc<ShellState>) {
    let state = Rc::new(ShellState::default());
    let view = View::new(
        controller,
        name,
        (20.0, 40.0),
        panes,
        Box::new(RecordingShell(state.clone())),
        FileSettings::default(),
    );

    (view, state)
}

/// Panes named `<prefix>1..=<prefix>n` sharing `log`
pub fn recording_panes(prefix: &str, count: usize, log: &Log) -> Vec<Box<dyn Pane<Widget = String>>> {
    (1..=count)
        .map(|i| RecordingPane::new(&format!("{}{}", prefix, i), log).boxed())
        .collect()
}

/// Builds a View over recording doubles and registers it with `controller`
pub fn attach(
    controller: &Rc<Controller>,
    name: &str,
    panes: Vec<Box<dyn Pane<Widget = String>>>,
) -> (Rc<View<String>>, Rc<ShellState>) {
    let weak: Weak<Controller> = Rc::downgrade(controller);
    let (view, shell) = build_view(weak, name, panes);
    controller
        .add_view(view.clone())
        .expect("fresh view should register");

    (view, shell)
}

pub fn sample_movies() -> Vec<Movie> {
    vec![
        Movie::new("Alien", 1979, "Horror", 8.5),
        Movie::new("Heat", 1995, "Crime", 8.3),
        Movie::new("Up", 2009, "Animation", 8.2),
    ]
}
