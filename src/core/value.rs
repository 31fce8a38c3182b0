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


//! Notification payloads and well-known keys
//!
//! Every change the Controller broadcasts is a `(key, Value)` pair. Keys are
//! plain strings; the shape of the value behind a key is a contract between
//! the Model and the panes that care about that key.

use std::{fmt, path::PathBuf, rc::Rc};

use crate::core::movie::Movie;

/// Well-known notification keys
pub mod keys {
    /// Event/property: path of the open collection file
    pub const FILE: &str = "file";
    /// Property: the movie collection
    pub const MOVIES: &str = "movies";
    /// Property: index of the selected movie, `-1` for none
    pub const SELECTED: &str = "selected";
    /// Property: title of the selected movie
    pub const TITLE: &str = "title";
    /// Property: release year of the selected movie
    pub const YEAR: &str = "year";
    /// Property: genre of the selected movie
    pub const GENRE: &str = "genre";
    /// Property: rating (0.0 - 10.0) of the selected movie
    pub const RATING: &str = "rating";
    /// Event: the collection was written to the given path
    pub const SAVED: &str = "saved";
    /// Event: human readable status or error message
    pub const STATUS: &str = "status";
}

/// Value carried by a notification
///
/// `Collection` is reference counted so that a fan-out to many panes
/// never copies the movie list.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Real(f64),
    Text(String),
    Path(PathBuf),
    Collection(Rc<Vec<Movie>>),
}

impl Value {
    /// Short type name used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Real(_) => "real",
            Value::Text(_) => "text",
            Value::Path(_) => "path",
            Value::Collection(_) => "collection",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Integers are widened, so `rating = 7` is accepted as `7.0`
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Real(r) => Some(*r),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_path(&self) -> Option<&PathBuf> {
        match self {
            Value::Path(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_collection(&self) -> Option<&Rc<Vec<Movie>>> {
        match self {
            Value::Collection(c) => Some(c),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "(none)"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Real(r) => write!(f, "{:.1}", r),
            Value::Text(s) => write!(f, "{}", s),
            Value::Path(p) => write!(f, "{}", p.display()),
            Value::Collection(c) => write!(f, "{} movies", c.len()),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Real(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<PathBuf> for Value {
    fn from(value: PathBuf) -> Self {
        Value::Path(value)
    }
}

impl From<Vec<Movie>> for Value {
    fn from(value: Vec<Movie>) -> Self {
        Value::Collection(Rc::new(value))
    }
}
