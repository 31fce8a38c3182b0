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


//! MVC Controller - Mediates between the Model and every open View
//!
//! # Responsibilities
//!
//! - Own the registry of live Views (register, initialise, remove, terminate)
//! - Apply property changes and saves to the Model
//! - Broadcast every resulting change to every registered View
//!
//! # Delivery order
//!
//! Notifications are delivered synchronously, View by View in registration
//! order. If a pane reacts to a notification by mutating the Model, the
//! resulting notifications are queued and delivered only after the current
//! one has reached every View, so no pane ever sees a later change before
//! an earlier one. Each notification is delivered to the registry as it was
//! when that delivery started.

use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    path::{Path, PathBuf},
    rc::Rc,
};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::core::{keys, Change, Model, ModelError, Movie, Value};
use crate::ui::protocol::{ControllerPort, ViewId, ViewObserver};

/// Errors raised by view registration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControllerError {
    /// The View is already registered
    #[error("View {0} is already registered")]
    DuplicateView(ViewId),
}

/// A notification waiting to be delivered
#[derive(Clone, Debug, PartialEq)]
enum Notification {
    Event {
        key: String,
        value: Value,
    },
    Property {
        key: String,
        new_value: Value,
        old_value: Value,
    },
}

impl From<Change> for Notification {
    fn from(change: Change) -> Self {
        match change {
            Change::Event { key, value } => Notification::Event { key, value },
            Change::Property {
                key,
                new_value,
                old_value,
            } => Notification::Property {
                key,
                new_value,
                old_value,
            },
        }
    }
}

/// MVC Controller coordinating the Model and its Views
pub struct Controller {
    /// Application data
    model: RefCell<Model>,
    /// Live Views in registration order
    views: RefCell<Vec<Rc<dyn ViewObserver>>>,
    /// Notifications not yet delivered
    pending: RefCell<VecDeque<Notification>>,
    /// True while a delivery loop or a lifecycle call is on the stack
    busy: Cell<bool>,
}

/// Clears the busy flag even if a pane panics mid-delivery
struct BusyGuard<'a>(&'a Cell<bool>);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl Controller {
    /// Creates a Controller over `model` with no Views
    ///
    /// # Example
    ///
    /// ```
    /// use movie_browser::core::Model;
    /// use movie_browser::ui::Controller;
    ///
    /// let controller = Controller::new(Model::new());
    /// assert_eq!(controller.view_count(), 0);
    /// ```
    pub fn new(model: Model) -> Rc<Self> {
        Rc::new(Self {
            model: RefCell::new(model),
            views: RefCell::new(Vec::new()),
            pending: RefCell::new(VecDeque::new()),
            busy: Cell::new(false),
        })
    }

    // ------------------------------------------------------------------
    // View registry
    // ------------------------------------------------------------------

    /// Registers a View, then initialises it
    ///
    /// # Errors
    ///
    /// Returns `ControllerError::DuplicateView` if the View is already
    /// registered; the registry is left unchanged.
    pub fn add_view(&self, view: Rc<dyn ViewObserver>) -> Result<(), ControllerError> {
        let id = view.id();

        if self.has_view(id) {
            return Err(ControllerError::DuplicateView(id));
        }

        self.views.borrow_mut().push(view.clone());
        info!(view = %id, views = self.view_count(), "view added");

        self.run_exclusive(|| view.initialize());
        Ok(())
    }

    /// Deregisters a View, then terminates it
    ///
    /// Returns `false` (and does nothing) if the View is not registered,
    /// so a second removal is harmless.
    pub fn remove_view(&self, id: ViewId) -> bool {
        let removed = {
            let mut views = self.views.borrow_mut();
            let index = views.iter().position(|view| view.id() == id);
            index.map(|index| views.remove(index))
        };

        match removed {
            Some(view) => {
                info!(view = %id, views = self.view_count(), "view removed");
                self.run_exclusive(|| view.terminate());
                true
            }
            None => {
                debug!(view = %id, "remove_view for unknown view ignored");
                false
            }
        }
    }

    pub fn has_view(&self, id: ViewId) -> bool {
        self.views.borrow().iter().any(|view| view.id() == id)
    }

    pub fn view_count(&self) -> usize {
        self.views.borrow().len()
    }

    /// Ids of the live Views, in registration order
    pub fn view_ids(&self) -> Vec<ViewId> {
        self.views.borrow().iter().map(|view| view.id()).collect()
    }

    // ------------------------------------------------------------------
    // Model access
    // ------------------------------------------------------------------

    /// Returns the current value of a property
    pub fn get_property(&self, key: &str) -> Option<Value> {
        self.model.borrow().get(key).cloned()
    }

    /// Returns the shared movie collection
    pub fn movies(&self) -> Rc<Vec<Movie>> {
        self.model.borrow().movies()
    }

    /// Returns the selected movie, if any
    pub fn selected_movie(&self) -> Option<Movie> {
        self.model.borrow().selected_movie()
    }

    /// Applies a property change and broadcasts what it caused
    ///
    /// Rejected changes are logged and reported to the Views as a
    /// `status` event; the Model is left untouched.
    pub fn set_property(&self, key: &str, value: Value) {
        match self.try_set_property(key, value) {
            Ok(count) => debug!(key, changes = count, "property set"),
            Err(e) => {
                warn!(key, error = %e, "property change rejected");
                self.update(keys::STATUS, Value::Text(e.to_string()));
            }
        }
    }

    /// Like [`Controller::set_property`] but returns the Model's verdict
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of changes broadcast
    /// * `Err(ModelError)` - Change rejected, nothing broadcast
    pub fn try_set_property(&self, key: &str, value: Value) -> Result<usize, ModelError> {
        let changes = self.model.borrow_mut().set_property(key, value)?;
        let count = changes.len();

        self.enqueue_all(changes.into_iter().map(Notification::from));
        Ok(count)
    }

    /// Saves the collection to `path` and broadcasts the outcome
    ///
    /// Success is reported as a `saved` event carrying the path, failure as
    /// a `status` event carrying the error message.
    pub fn save(&self, path: &Path) {
        match self.try_save(path) {
            Ok(()) => {
                info!(path = %path.display(), "collection saved");
                self.update(keys::SAVED, Value::Path(path.to_path_buf()));
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "save failed");
                self.update(keys::STATUS, Value::Text(format!("Save failed: {}", e)));
            }
        }
    }

    /// Saves the collection to `path` without broadcasting
    pub fn try_save(&self, path: &Path) -> Result<(), ModelError> {
        self.model.borrow().save(path)
    }

    // ------------------------------------------------------------------
    // Broadcast
    // ------------------------------------------------------------------

    /// Broadcasts an event to every View
    pub fn update(&self, key: &str, value: Value) {
        self.enqueue_all(std::iter::once(Notification::Event {
            key: key.to_string(),
            value,
        }));
    }

    /// Broadcasts a property change to every View
    pub fn update_property(&self, key: &str, new_value: Value, old_value: Value) {
        self.enqueue_all(std::iter::once(Notification::Property {
            key: key.to_string(),
            new_value,
            old_value,
        }));
    }

    /// Queues notifications and, unless a delivery is already running
    /// further up the stack, delivers the whole queue
    fn enqueue_all(&self, notifications: impl IntoIterator<Item = Notification>) {
        self.pending.borrow_mut().extend(notifications);

        if !self.busy.get() {
            self.run_exclusive(|| {});
        }
    }

    /// Runs `f` with the busy flag set, then drains the queue
    ///
    /// Anything queued while `f` or a delivery is running is delivered
    /// afterwards, in FIFO order. Nested calls just run `f`.
    fn run_exclusive(&self, f: impl FnOnce()) {
        if self.busy.get() {
            f();
            return;
        }

        self.busy.set(true);
        let _guard = BusyGuard(&self.busy);

        f();

        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(notification) = next else {
                break;
            };

            // Snapshot so Views can be added or removed while we deliver
            let views: Vec<Rc<dyn ViewObserver>> = self.views.borrow().clone();

            for view in &views {
                match &notification {
                    Notification::Event { key, value } => view.update(key, value),
                    Notification::Property {
                        key,
                        new_value,
                        old_value,
                    } => view.update_property(key, new_value, old_value),
                }
            }
        }
    }
}

impl ControllerPort for Controller {
    fn set_property(&self, key: &str, value: Value) {
        Controller::set_property(self, key, value);
    }

    fn save(&self, path: PathBuf) {
        Controller::save(self, &path);
    }

    fn remove_view(&self, id: ViewId) {
        Controller::remove_view(self, id);
    }
}
