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


//! Editor pane
//!
//! Edits the fields of the selected movie. Each widget commits its value
//! as a property change (`title`, `year`, `genre`, `rating`) and is only
//! ever refreshed from the matching `update_property` notification, so
//! edits made in one window show up in every other window.

use gtk4::{
    prelude::*, Adjustment, Align, Box as GtkBox, Entry, Grid, Label, Orientation,
    SpinButton,
};
use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use crate::core::{keys, Movie, Value};
use crate::ui::{pane::Pane, pane::Tab, Controller};

/// Form for the selected movie's fields
pub struct EditorPane {
    /// Root widget
    widget: GtkBox,
    /// Shows which movie is being edited
    caption_label: Label,
    title_entry: Entry,
    year_spin: SpinButton,
    genre_entry: Entry,
    rating_spin: SpinButton,
    /// Controller the edits are committed to
    controller: Weak<Controller>,
    /// Set while widgets are filled programmatically
    syncing: Rc<Cell<bool>>,
    /// Handlers connected between initialize and terminate
    handlers: RefCell<Vec<(gtk4::Widget, glib::SignalHandlerId)>>,
}

impl EditorPane {
    /// Helper to create a label/value row in the form grid
    fn attach_row(grid: &Grid, row: i32, header_text: &str, value: &impl IsA<gtk4::Widget>) {
        let header = Label::builder()
            .label(header_text)
            .halign(Align::End)
            .xalign(1.0)
            .build();
        header.add_css_class("field-header");

        grid.attach(&header, 0, row, 1, 1);
        grid.attach(value, 1, row, 1, 1);
    }

    /// Creates the pane; all fields stay insensitive until a movie is selected
    pub fn new(controller: &Rc<Controller>) -> Self {
        let widget = GtkBox::new(Orientation::Vertical, 10);
        widget.set_margin_start(15);
        widget.set_margin_end(15);
        widget.set_margin_top(15);
        widget.set_margin_bottom(15);

        let caption_label = Label::builder()
            .label("Select a movie...")
            .xalign(0.0)
            .build();
        caption_label.add_css_class("pane-header");
        widget.append(&caption_label);

        let grid = Grid::builder().row_spacing(10).column_spacing(15).build();

        let title_entry = Entry::builder().hexpand(true).build();
        Self::attach_row(&grid, 0, "Title:", &title_entry);

        let year_spin = SpinButton::new(
            Some(&Adjustment::new(2000.0, 1888.0, 2100.0, 1.0, 10.0, 0.0)),
            1.0,
            0,
        );
        Self::attach_row(&grid, 1, "Year:", &year_spin);

        let genre_entry = Entry::builder().hexpand(true).build();
        Self::attach_row(&grid, 2, "Genre:", &genre_entry);

        let rating_spin = SpinButton::new(
            Some(&Adjustment::new(0.0, 0.0, Movie::MAX_RATING, 0.1, 1.0, 0.0)),
            0.1,
            1,
        );
        Self::attach_row(&grid, 3, "Rating:", &rating_spin);

        widget.append(&grid);

        let pane = Self {
            widget,
            caption_label,
            title_entry,
            year_spin,
            genre_entry,
            rating_spin,
            controller: Rc::downgrade(controller),
            syncing: Rc::new(Cell::new(false)),
            handlers: RefCell::new(Vec::new()),
        };
        pane.set_editable(false);
        pane
    }

    fn set_editable(&self, editable: bool) {
        self.title_entry.set_sensitive(editable);
        self.year_spin.set_sensitive(editable);
        self.genre_entry.set_sensitive(editable);
        self.rating_spin.set_sensitive(editable);
    }

    /// Fills every widget from the Controller's current state
    fn show_current(&self) {
        let Some(controller) = self.controller.upgrade() else {
            return;
        };

        match controller.selected_movie() {
            Some(movie) => {
                self.caption_label.set_label(&format!("Editing: {}", movie));
                self.set_editable(true);
            }
            None => {
                self.caption_label.set_label("Select a movie...");
                self.set_editable(false);
            }
        }

        for key in [keys::TITLE, keys::YEAR, keys::GENRE, keys::RATING] {
            if let Some(value) = controller.get_property(key) {
                self.show_field(key, &value);
            }
        }
    }

    /// Puts one property value into its widget without echoing it back
    fn show_field(&self, key: &str, value: &Value) {
        self.syncing.set(true);

        match key {
            keys::TITLE => self.title_entry.set_text(value.as_text().unwrap_or("")),
            keys::GENRE => self.genre_entry.set_text(value.as_text().unwrap_or("")),
            keys::YEAR => {
                if let Some(year) = value.as_integer() {
                    self.year_spin.set_value(year as f64);
                }
            }
            keys::RATING => {
                if let Some(rating) = value.as_real() {
                    self.rating_spin.set_value(rating);
                }
            }
            _ => {}
        }

        self.syncing.set(false);
    }

    /// Commits an entry's text as `key` when the user presses Enter
    fn connect_entry(&self, entry: &Entry, key: &'static str) {
        let controller = self.controller.clone();
        let syncing = self.syncing.clone();

        let id = entry.connect_activate(move |entry| {
            commit(&controller, &syncing, key, Value::Text(entry.text().to_string()));
        });

        self.handlers.borrow_mut().push((entry.clone().upcast::<gtk4::Widget>(), id));
    }

    /// Commits a spin button's value as `key` whenever it changes
    fn connect_spin(&self, spin: &SpinButton, key: &'static str, integral: bool) {
        let controller = self.controller.clone();
        let syncing = self.syncing.clone();

        let id = spin.connect_value_changed(move |spin| {
            let value = if integral {
                Value::Integer(i64::from(spin.value_as_int()))
            } else {
                // Spin buttons report binary fractions; keep one decimal
                Value::Real((spin.value() * 10.0).round() / 10.0)
            };
            commit(&controller, &syncing, key, value);
        });

        self.handlers.borrow_mut().push((spin.clone().upcast::<gtk4::Widget>(), id));
    }
}

fn commit(controller: &Weak<Controller>, syncing: &Cell<bool>, key: &str, value: Value) {
    if syncing.get() {
        return;
    }

    if let Some(controller) = controller.upgrade() {
        controller.set_property(key, value);
    }
}

impl Pane for EditorPane {
    type Widget = gtk4::Widget;

    fn initialize(&self) {
        self.show_current();

        self.connect_entry(&self.title_entry, keys::TITLE);
        self.connect_spin(&self.year_spin, keys::YEAR, true);
        self.connect_entry(&self.genre_entry, keys::GENRE);
        self.connect_spin(&self.rating_spin, keys::RATING, false);
    }

    fn terminate(&self) {
        for (widget, id) in self.handlers.borrow_mut().drain(..) {
            widget.disconnect(id);
        }
    }

    fn update(&self, key: &str, _value: &Value) {
        if key == keys::FILE {
            self.show_current();
        }
    }

    fn update_property(&self, key: &str, new_value: &Value, _old_value: &Value) {
        match key {
            keys::TITLE | keys::YEAR | keys::GENRE | keys::RATING => {
                self.show_field(key, new_value);
            }
            keys::SELECTED | keys::MOVIES => self.show_current(),
            _ => {}
        }
    }

    fn create_tab(&self) -> Tab<gtk4::Widget> {
        Tab::new("Editor", self.widget.clone().upcast::<gtk4::Widget>())
            .with_tooltip("Edit the selected movie")
    }
}
