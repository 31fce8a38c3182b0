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


//! UI Components
//!
//! GTK4 pane variants hosted in the tabs of every View.
//!
//! # Components
//!
//! - `collection_pane.rs` - Scrollable movie list with selection
//! - `editor_pane.rs` - Form editing the selected movie

mod collection_pane;
mod editor_pane;

pub use collection_pane::CollectionPane;
pub use editor_pane::EditorPane;
