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


//! Pane capability set
//!
//! A pane is a self-contained content unit rendered inside one tab of a
//! View. The View owns its panes exclusively and drives them through this
//! trait only; it never knows the concrete pane type.
//!
//! Panes receive every notification the Controller broadcasts, unfiltered,
//! and are responsible for ignoring keys they do not care about. The same
//! `(key, value)` may arrive more than once.

use crate::core::Value;

/// A titled piece of content for the tabbed layout
///
/// `W` is the toolkit's widget type (`gtk4::Widget` in the application).
#[derive(Clone, Debug, PartialEq)]
pub struct Tab<W> {
    /// Tab label
    pub title: String,
    /// Optional tooltip shown on the tab label
    pub tooltip: Option<String>,
    /// Root widget of the pane
    pub content: W,
}

impl<W> Tab<W> {
    pub fn new(title: impl Into<String>, content: W) -> Self {
        Self {
            title: title.into(),
            tooltip: None,
            content,
        }
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }
}

/// Capability set shared by every pane variant
pub trait Pane {
    /// Widget type produced by [`Pane::create_tab`]
    type Widget;

    /// Called once by the owning View after it has been registered
    fn initialize(&self);

    /// Called once by the owning View when its window closes
    fn terminate(&self);

    /// A named event occurred
    fn update(&self, key: &str, value: &Value);

    /// A named property was replaced
    fn update_property(&self, key: &str, new_value: &Value, old_value: &Value);

    /// Builds the tab hosting this pane
    fn create_tab(&self) -> Tab<Self::Widget>;
}
