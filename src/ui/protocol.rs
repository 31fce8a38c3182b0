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


//! Controller ⇄ View contract
//!
//! Two small traits describe everything the Controller and its Views know
//! about each other:
//!
//! - [`ViewObserver`] - what the Controller calls on a registered View
//! - [`ControllerPort`] - what a View calls on its Controller
//!
//! Notifications are push-based, synchronous and unfiltered: the Controller
//! calls every registered View in registration order and each View forwards
//! to every pane in pane order.

use std::{
    fmt,
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering},
};

use crate::core::Value;

/// Identity of a View within the process
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ViewId(u64);

impl ViewId {
    /// Allocates a fresh, never reused id
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        ViewId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view#{}", self.0)
    }
}

/// Controller-side surface of a View
pub trait ViewObserver {
    fn id(&self) -> ViewId;

    /// Called once, right after registration
    fn initialize(&self);

    /// Called once, when the View is removed
    fn terminate(&self);

    /// A named event occurred
    fn update(&self, key: &str, value: &Value);

    /// A named property was replaced
    fn update_property(&self, key: &str, new_value: &Value, old_value: &Value);
}

/// View-side surface of the Controller
pub trait ControllerPort {
    /// Requests a property change
    fn set_property(&self, key: &str, value: Value);

    /// Requests persistence to `path`; failures are the Controller's concern
    fn save(&self, path: PathBuf);

    /// Deregisters a closing View
    fn remove_view(&self, id: ViewId);
}
