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


//! GTK4 Application wrapper
//!
//! This module sets up the GTK4 application lifecycle and opens one View
//! per configured window, all sharing a single Controller.
//!
//! # Architecture
//!
//! ```text
//! App (GTK4 Application)
//!   ├─ Creates Controller (owns the Model and the View registry)
//!   ├─ Per window: GtkShell + CollectionPane + EditorPane → View
//!   └─ Registers each View with the Controller
//! ```
//!
//! GTK quits the application once the last window has closed.

use gtk4::{gdk, prelude::*, Application, CssProvider};
use std::{
    path::PathBuf,
    rc::{Rc, Weak},
};
use tracing::{error, info, warn};

use crate::config::AppConfig;
use crate::core::{keys, Model, Value};
use crate::ui::{
    components::{CollectionPane, EditorPane},
    pane::Pane,
    protocol::ControllerPort,
    window::GtkShell,
    Controller, View,
};

/// GTK4 Application for browsing and editing a movie collection
pub struct App {
    /// GTK4 Application instance
    app: Application,
    /// MVC Controller shared by every window
    controller: Rc<Controller>,
    /// Window layout and dialog defaults
    config: Rc<AppConfig>,
    /// Collection opened right after the windows appear
    initial_file: Option<PathBuf>,
}

impl App {
    /// Creates a new App
    ///
    /// # Arguments
    ///
    /// * `config` - Window layout and file dialog settings
    /// * `initial_file` - Optional collection to open on startup
    ///
    /// # Example
    ///
    /// ```no_run
    /// use movie_browser::{config::AppConfig, ui::App};
    ///
    /// let app = App::new(AppConfig::default(), None);
    /// app.run(); // Blocks until the last window closes
    /// ```
    pub fn new(config: AppConfig, initial_file: Option<PathBuf>) -> Self {
        let app = Application::builder()
            .application_id("com.tidynest.movie-browser")
            .build();

        Self {
            app,
            controller: Controller::new(Model::new()),
            config: Rc::new(config),
            initial_file,
        }
    }

    /// Runs the GTK4 main loop until the application exits
    pub fn run(self) {
        let controller = self.controller.clone();
        let config = self.config.clone();
        let initial_file = self.initial_file.clone();

        self.app.connect_activate(move |app| {
            Self::build_ui(app, &controller, &config, initial_file.clone());
        });

        // GTK must not parse our command line
        self.app.run_with_args::<&str>(&[]);
    }

    /// Loads custom CSS styling for the application
    fn load_css() {
        let provider = CssProvider::new();
        provider.load_from_string(include_str!("style.css"));

        match gdk::Display::default() {
            Some(display) => gtk4::style_context_add_provider_for_display(
                &display,
                &provider,
                gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
            ),
            None => warn!("no default display, skipping stylesheet"),
        }
    }

    /// Opens every configured window
    fn build_ui(
        app: &Application,
        controller: &Rc<Controller>,
        config: &AppConfig,
        initial_file: Option<PathBuf>,
    ) {
        Self::load_css();

        for placement in &config.windows {
            let position = (placement.x, placement.y);
            let view = Self::build_view(app, controller, config, &placement.name, position);

            if let Err(e) = controller.add_view(view) {
                error!(error = %e, "failed to register view");
            }
        }

        info!(windows = controller.view_count(), "windows opened");

        if let Some(path) = initial_file {
            controller.set_property(keys::FILE, Value::Path(path));
        }
    }

    /// Builds one window with its panes
    fn build_view(
        app: &Application,
        controller: &Rc<Controller>,
        config: &AppConfig,
        name: &str,
        position: (f64, f64),
    ) -> Rc<View<gtk4::Widget>> {
        let shell = GtkShell::new(app, config.width, config.height);

        let panes: Vec<Box<dyn Pane<Widget = gtk4::Widget>>> = vec![
            Box::new(CollectionPane::new(controller)),
            Box::new(EditorPane::new(controller)),
        ];

        let port: Weak<Controller> = Rc::downgrade(controller);
        let port: Weak<dyn ControllerPort> = port;

        View::new(
            port,
            name,
            position,
            panes,
            Box::new(shell),
            config.file_settings(),
        )
    }
}
