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


//! GTK4 window shell
//!
//! Implements [`WindowShell`] on top of an `ApplicationWindow`:
//!
//! ```text
//! ApplicationWindow
//!   └─ Box (vertical)
//!        ├─ PopoverMenuBar   (gio::Menu, actions in the "view" group)
//!        └─ Notebook         (one page per pane)
//! ```
//!
//! Menu items activate window-scoped `view.<command>` actions, so several
//! windows can share one menu model without seeing each other's clicks.

use gtk4::{
    gio, prelude::*, Application, ApplicationWindow, FileDialog, FileFilter, Label,
    Notebook, Orientation, PopoverMenuBar,
};
use std::{cell::RefCell, collections::HashMap, rc::Rc};
use tracing::{debug, warn};

use crate::ui::{
    menu::{CommandState, MenuBar, MenuCommand},
    pane::Tab,
    shell::{CloseHandler, CommandHandler, FileChoiceHandler, FileMode, FileRequest, WindowShell},
};

/// Prefix of the window-scoped action group
const ACTION_GROUP: &str = "view";

/// Shared slot for the menu listener; empty once listeners are detached
type CommandSlot = Rc<RefCell<Option<Rc<dyn Fn(MenuCommand)>>>>;

/// GTK4 implementation of [`WindowShell`]
pub struct GtkShell {
    app: Application,
    window: ApplicationWindow,
    root: gtk4::Box,
    notebook: Notebook,
    actions: gio::SimpleActionGroup,
    action_by_command: RefCell<HashMap<MenuCommand, gio::SimpleAction>>,
    command_slot: CommandSlot,
    close_handler: RefCell<Option<glib::SignalHandlerId>>,
}

impl GtkShell {
    /// Creates a hidden window of the given size attached to `app`
    pub fn new(app: &Application, width: i32, height: i32) -> Self {
        let window = ApplicationWindow::builder()
            .application(app)
            .default_width(width)
            .default_height(height)
            .build();

        let root = gtk4::Box::new(Orientation::Vertical, 0);

        let notebook = Notebook::builder().hexpand(true).vexpand(true).build();
        root.append(&notebook);
        window.set_child(Some(&root));

        let actions = gio::SimpleActionGroup::new();
        window.insert_action_group(ACTION_GROUP, Some(&actions));

        Self {
            app: app.clone(),
            window,
            root,
            notebook,
            actions,
            action_by_command: RefCell::new(HashMap::new()),
            command_slot: Rc::new(RefCell::new(None)),
            close_handler: RefCell::new(None),
        }
    }

    /// The underlying GTK window
    pub fn window(&self) -> &ApplicationWindow {
        &self.window
    }

    fn detailed_action_name(command: MenuCommand) -> String {
        format!("{}.{}", ACTION_GROUP, command.action_name())
    }

    /// Creates the action backing one menu item
    fn create_action(&self, command: MenuCommand) -> gio::SimpleAction {
        let action = gio::SimpleAction::new(command.action_name(), None);
        let slot = self.command_slot.clone();

        action.connect_activate(move |action, _| {
            let Some(command) = MenuCommand::from_action_name(&action.name()) else {
                warn!(action = %action.name(), "activation of an unknown action");
                return;
            };

            // Release the borrow before running the listener
            let handler = slot.borrow().clone();
            if let Some(handler) = handler {
                handler(command);
            }
        });

        self.actions.add_action(&action);
        action
    }

    fn build_file_filter(request: &FileRequest) -> FileFilter {
        let filter = FileFilter::new();
        filter.set_name(Some(&request.filter_name));
        filter.add_pattern(&request.pattern());
        filter
    }
}

impl WindowShell for GtkShell {
    type Widget = gtk4::Widget;

    fn add_tab(&self, tab: Tab<gtk4::Widget>) {
        let label = Label::new(Some(&tab.title));
        if let Some(tooltip) = &tab.tooltip {
            label.set_tooltip_text(Some(tooltip));
        }

        self.notebook.append_page(&tab.content, Some(&label));
    }

    fn install_menu_bar(&self, menu_bar: &MenuBar) {
        let model = gio::Menu::new();
        let mut action_by_command = self.action_by_command.borrow_mut();

        for menu in &menu_bar.menus {
            let submenu = gio::Menu::new();

            for section in &menu.sections {
                let section_model = gio::Menu::new();

                for command in section {
                    section_model.append(
                        Some(command.label()),
                        Some(&Self::detailed_action_name(*command)),
                    );
                    action_by_command.insert(*command, self.create_action(*command));
                }

                submenu.append_section(None, &section_model);
            }

            model.append_submenu(Some(menu.label), &submenu);
        }

        let bar = PopoverMenuBar::from_model(Some(&model));
        self.root.prepend(&bar);
    }

    fn configure_command(&self, command: MenuCommand, state: CommandState) {
        match self.action_by_command.borrow().get(&command) {
            Some(action) => action.set_enabled(state.enabled),
            None => {
                warn!(%command, "configure_command before the menu bar was installed");
                return;
            }
        }

        let accels: Vec<&str> = state.accelerator.into_iter().collect();
        self.app
            .set_accels_for_action(&Self::detailed_action_name(command), &accels);
    }

    fn connect_close_request(&self, handler: CloseHandler) {
        let id = self.window.connect_close_request(move |_| {
            handler();
            glib::Propagation::Proceed
        });

        if let Some(previous) = self.close_handler.replace(Some(id)) {
            self.window.disconnect(previous);
        }
    }

    fn connect_command(&self, handler: CommandHandler) {
        *self.command_slot.borrow_mut() = Some(Rc::from(handler));
    }

    fn disconnect_listeners(&self) {
        if let Some(id) = self.close_handler.borrow_mut().take() {
            self.window.disconnect(id);
        }

        self.command_slot.borrow_mut().take();

        for action in self.action_by_command.borrow().values() {
            action.set_enabled(false);
        }
    }

    fn show(&self, title: &str, x: f64, y: f64) {
        self.window.set_title(Some(title));
        // GTK4 leaves window placement to the compositor
        debug!(title, x, y, "requested window position is advisory only");
        self.window.present();
    }

    fn choose_file(&self, request: FileRequest, on_choice: FileChoiceHandler) {
        let filter = Self::build_file_filter(&request);
        let filters = gio::ListStore::new::<FileFilter>();
        filters.append(&filter);

        let builder = FileDialog::builder()
            .title(request.title.as_str())
            .modal(true)
            .initial_folder(&gio::File::for_path(&request.initial_dir))
            .filters(&filters)
            .default_filter(&filter);

        let dialog = match &request.initial_name {
            Some(name) => builder.initial_name(name.as_str()).build(),
            None => builder.build(),
        };

        let on_result = move |result: Result<gio::File, glib::Error>| {
            // Dismissal and dialog errors both count as a cancel
            let path = result.ok().and_then(|file| file.path());
            on_choice(path);
        };

        match request.mode {
            FileMode::Open => dialog.open(Some(&self.window), gio::Cancellable::NONE, on_result),
            FileMode::Save => dialog.save(Some(&self.window), gio::Cancellable::NONE, on_result),
        }
    }
}
