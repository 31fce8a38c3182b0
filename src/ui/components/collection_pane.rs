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


//! Collection pane
//!
//! Lists every movie of the collection and lets the user pick one.
//! Picking a row sets the `selected` property; the list itself only
//! changes in response to `movies` and `selected` notifications, so every
//! open window shows the same list and the same selection.
//!
//! # Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ movies.csv - 3 movies                        │
//! ├──────────────────────────────────────────────┤
//! │ Alien                    1979  Horror   8.5  │
//! │ Heat                     1995  Crime    8.3  │
//! │ ...                                          │
//! ├──────────────────────────────────────────────┤
//! │ status message                               │
//! └──────────────────────────────────────────────┘
//! ```

use gtk4::{prelude::*, Box as GtkBox, Label, ListBox, Orientation, ScrolledWindow};
use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};
use tracing::debug;

use crate::core::{keys, Movie, Value};
use crate::ui::{pane::Pane, pane::Tab, Controller};

/// Scrollable list of the movie collection
pub struct CollectionPane {
    /// Root widget
    widget: GtkBox,
    /// Shows the open file and the movie count
    header_label: Label,
    /// List box containing one row per movie
    list_box: ListBox,
    /// Last status message received
    status_label: Label,
    /// Controller the selection is reported to
    controller: Weak<Controller>,
    /// Set while rows are rebuilt or selected programmatically
    syncing: Rc<Cell<bool>>,
    /// Row-selected handler, connected between initialize and terminate
    selection_handler: RefCell<Option<glib::SignalHandlerId>>,
}

impl CollectionPane {
    /// Creates the pane; nothing is shown until `initialize`
    pub fn new(controller: &Rc<Controller>) -> Self {
        let widget = GtkBox::new(Orientation::Vertical, 6);
        widget.set_margin_start(10);
        widget.set_margin_end(10);
        widget.set_margin_top(10);
        widget.set_margin_bottom(10);

        let header_label = Label::builder().label("No file open").xalign(0.0).build();
        header_label.add_css_class("pane-header");
        widget.append(&header_label);

        let scrolled_window = ScrolledWindow::builder()
            .hexpand(true)
            .vexpand(true)
            .build();

        let list_box = ListBox::builder()
            .selection_mode(gtk4::SelectionMode::Single)
            .build();
        scrolled_window.set_child(Some(&list_box));
        widget.append(&scrolled_window);

        let status_label = Label::builder().label("").xalign(0.0).build();
        status_label.add_css_class("status");
        widget.append(&status_label);

        Self {
            widget,
            header_label,
            list_box,
            status_label,
            controller: Rc::downgrade(controller),
            syncing: Rc::new(Cell::new(false)),
            selection_handler: RefCell::new(None),
        }
    }

    /// Current collection; empty once the Controller is gone
    fn movies(&self) -> Rc<Vec<Movie>> {
        self.controller
            .upgrade()
            .map(|controller| controller.movies())
            .unwrap_or_default()
    }

    fn property(&self, key: &str) -> Option<Value> {
        self.controller.upgrade()?.get_property(key)
    }

    /// Rebuilds every row from `movies`
    fn show_movies(&self, movies: &[Movie]) {
        self.syncing.set(true);

        while let Some(child) = self.list_box.first_child() {
            self.list_box.remove(&child);
        }

        for (index, movie) in movies.iter().enumerate() {
            self.list_box.append(&Self::create_row(movie, index));
        }

        self.syncing.set(false);
        self.refresh_header();
    }

    /// Highlights the row at `index` (negative = clear)
    fn show_selection(&self, index: i64) {
        self.syncing.set(true);

        let row = i32::try_from(index)
            .ok()
            .and_then(|i| self.list_box.row_at_index(i));
        self.list_box.select_row(row.as_ref());

        self.syncing.set(false);
    }

    fn refresh_header(&self) {
        let count = self.movies().len();
        let file = self
            .property(keys::FILE)
            .and_then(|value| value.as_path().cloned())
            .and_then(|path| path.file_name().map(|n| n.to_string_lossy().into_owned()))
            .unwrap_or_else(|| "Untitled".to_string());

        self.header_label.set_label(&format!(
            "{} - {} movie{}",
            file,
            count,
            if count == 1 { "" } else { "s" }
        ));
    }

    fn create_row(movie: &Movie, index: usize) -> GtkBox {
        let row = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(20)
            .margin_start(10)
            .margin_end(10)
            .margin_top(5)
            .margin_bottom(5)
            .build();

        row.add_css_class(if index % 2 == 0 { "even-row" } else { "odd-row" });

        let title_label = Label::builder()
            .label(movie.title.as_str())
            .xalign(0.0)
            .hexpand(true)
            .build();

        let year_label = Label::builder()
            .label(movie.year.to_string())
            .width_chars(6)
            .xalign(0.0)
            .build();

        let genre_label = Label::builder()
            .label(movie.genre.as_str())
            .width_chars(12)
            .xalign(0.0)
            .build();

        let rating_label = Label::builder()
            .label(format!("{:.1}", movie.rating))
            .width_chars(4)
            .xalign(1.0)
            .build();

        row.append(&title_label);
        row.append(&year_label);
        row.append(&genre_label);
        row.append(&rating_label);

        row
    }
}

impl Pane for CollectionPane {
    type Widget = gtk4::Widget;

    fn initialize(&self) {
        self.show_movies(&self.movies());

        let selected = self
            .property(keys::SELECTED)
            .and_then(|value| value.as_integer())
            .unwrap_or(-1);
        self.show_selection(selected);

        let controller = self.controller.clone();
        let syncing = self.syncing.clone();

        let id = self.list_box.connect_row_selected(move |_list_box, row| {
            if syncing.get() {
                return;
            }

            let index = row.map(|r| i64::from(r.index())).unwrap_or(-1);
            debug!(index, "row selected");

            if let Some(controller) = controller.upgrade() {
                controller.set_property(keys::SELECTED, Value::Integer(index));
            }
        });

        *self.selection_handler.borrow_mut() = Some(id);
    }

    fn terminate(&self) {
        if let Some(id) = self.selection_handler.borrow_mut().take() {
            self.list_box.disconnect(id);
        }
    }

    fn update(&self, key: &str, value: &Value) {
        match key {
            keys::FILE => {
                self.refresh_header();
                self.status_label.set_label(&format!("Opened {}", value));
            }
            keys::SAVED => self.status_label.set_label(&format!("Saved to {}", value)),
            keys::STATUS => self.status_label.set_label(&value.to_string()),
            _ => {}
        }
    }

    fn update_property(&self, key: &str, new_value: &Value, _old_value: &Value) {
        match key {
            keys::MOVIES => {
                if let Some(movies) = new_value.as_collection() {
                    self.show_movies(movies);
                }
                // Rows were rebuilt, so restore the current highlight
                if let Some(selected) = self.property(keys::SELECTED) {
                    self.show_selection(selected.as_integer().unwrap_or(-1));
                }
            }
            keys::SELECTED => self.show_selection(new_value.as_integer().unwrap_or(-1)),
            keys::FILE => self.refresh_header(),
            _ => {}
        }
    }

    fn create_tab(&self) -> Tab<gtk4::Widget> {
        Tab::new("Collection", self.widget.clone().upcast::<gtk4::Widget>())
            .with_tooltip("Browse the movie collection")
    }
}
