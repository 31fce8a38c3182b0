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


//! src/core/model.rs
//!
//! Application Model: a keyed property store plus the movie collection
//!
//! The Model never notifies anybody itself. Every mutation returns the
//! ordered list of [`Change`]s it produced and the Controller decides how
//! to broadcast them. A property change is only reported when the new
//! value differs from the old one.
//!
//! # Well-known keys
//!
//! - `file` - setting a path loads the collection (`file`, `movies`, `selected`),
//!   then reports a `file` event
//! - `selected` - selecting copies the movie fields into `title`/`year`/`genre`/`rating`
//! - `title`/`year`/`genre`/`rating` - edit the selected movie (field, then `movies`)
//!
//! Any other key is stored verbatim.

use std::{collections::BTreeMap, path::Path, rc::Rc};

use crate::core::{
    csv,
    error::ModelError,
    movie::Movie,
    value::{keys, Value},
};

/// A single observable consequence of a Model mutation
#[derive(Clone, Debug, PartialEq)]
pub enum Change {
    /// A named property was replaced
    Property {
        key: String,
        new_value: Value,
        old_value: Value,
    },
    /// A named event occurred
    Event { key: String, value: Value },
}

impl Change {
    pub fn key(&self) -> &str {
        match self {
            Change::Property { key, .. } | Change::Event { key, .. } => key,
        }
    }
}

/// Property store and movie collection
#[derive(Debug)]
pub struct Model {
    properties: BTreeMap<String, Value>,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// Creates an empty Model with no file, no movies and no selection
    pub fn new() -> Self {
        let mut properties = BTreeMap::new();
        properties.insert(keys::FILE.to_string(), Value::Null);
        properties.insert(keys::MOVIES.to_string(), Value::from(Vec::new()));
        properties.insert(keys::SELECTED.to_string(), Value::Integer(-1));
        properties.insert(keys::TITLE.to_string(), Value::Text(String::new()));
        properties.insert(keys::YEAR.to_string(), Value::Integer(0));
        properties.insert(keys::GENRE.to_string(), Value::Text(String::new()));
        properties.insert(keys::RATING.to_string(), Value::Real(0.0));

        Self { properties }
    }

    /// Creates a Model already holding `movies` (no file attached)
    pub fn with_movies(movies: Vec<Movie>) -> Self {
        let mut model = Self::new();
        model
            .properties
            .insert(keys::MOVIES.to_string(), Value::from(movies));
        model
    }

    /// Returns the current value of a property, if it was ever set
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Returns the shared movie collection
    pub fn movies(&self) -> Rc<Vec<Movie>> {
        self.properties
            .get(keys::MOVIES)
            .and_then(Value::as_collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Returns the selected index, if any
    pub fn selected_index(&self) -> Option<usize> {
        self.properties
            .get(keys::SELECTED)
            .and_then(Value::as_integer)
            .and_then(|i| usize::try_from(i).ok())
    }

    /// Returns a copy of the selected movie, if any
    pub fn selected_movie(&self) -> Option<Movie> {
        let index = self.selected_index()?;
        self.movies().get(index).cloned()
    }

    /// Applies a property change and returns what it caused
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidValue` for values of the wrong shape,
    /// `ModelError::NoSelection` when a movie field is edited with no
    /// selection, and any load error for the `file` key. The Model is left
    /// untouched on error.
    pub fn set_property(&mut self, key: &str, value: Value) -> Result<Vec<Change>, ModelError> {
        match key {
            keys::FILE => self.open_file(value),
            keys::MOVIES => Err(invalid(key, "a file to load (movies is read-only)")),
            keys::SELECTED => self.select(value),
            keys::TITLE | keys::YEAR | keys::GENRE | keys::RATING => self.edit_field(key, value),
            _ => Ok(self.replace(key, value).into_iter().collect()),
        }
    }

    /// Writes the collection to `path`
    pub fn save(&self, path: &Path) -> Result<(), ModelError> {
        csv::write_movies(path, &self.movies())
    }

    fn open_file(&mut self, value: Value) -> Result<Vec<Change>, ModelError> {
        let path = match &value {
            Value::Path(path) => path.clone(),
            _ => return Err(invalid(keys::FILE, "path")),
        };

        // Parse before touching any state so a bad file changes nothing
        let movies = csv::read_movies(&path)?;

        let mut changes = Vec::new();
        changes.extend(self.replace(keys::FILE, value.clone()));
        changes.extend(self.replace(keys::MOVIES, Value::from(movies)));
        changes.extend(self.select(Value::Integer(-1))?);

        // Reported even when reopening the same, unchanged file
        changes.push(Change::Event {
            key: keys::FILE.to_string(),
            value,
        });

        Ok(changes)
    }

    fn select(&mut self, value: Value) -> Result<Vec<Change>, ModelError> {
        let index = value
            .as_integer()
            .ok_or_else(|| invalid(keys::SELECTED, "integer"))?;

        let movies = self.movies();
        if index < -1 || index >= movies.len() as i64 {
            return Err(invalid(
                keys::SELECTED,
                &format!("an index between -1 and {}", movies.len() as i64 - 1),
            ));
        }

        let mut changes = Vec::new();
        changes.extend(self.replace(keys::SELECTED, Value::Integer(index)));

        let movie = usize::try_from(index)
            .ok()
            .and_then(|i| movies.get(i).cloned())
            .unwrap_or_default();

        changes.extend(self.replace(keys::TITLE, Value::Text(movie.title)));
        changes.extend(self.replace(keys::YEAR, Value::Integer(movie.year)));
        changes.extend(self.replace(keys::GENRE, Value::Text(movie.genre)));
        changes.extend(self.replace(keys::RATING, Value::Real(movie.rating)));

        Ok(changes)
    }

    fn edit_field(&mut self, key: &str, value: Value) -> Result<Vec<Change>, ModelError> {
        let index = self
            .selected_index()
            .ok_or_else(|| ModelError::NoSelection(key.to_string()))?;

        let mut movies = (*self.movies()).clone();
        let movie = movies
            .get_mut(index)
            .ok_or_else(|| ModelError::NoSelection(key.to_string()))?;

        // Normalised value actually stored under `key`
        let stored = match key {
            keys::TITLE => {
                let title = single_line(key, &value)?;
                movie.title = title.to_string();
                Value::Text(movie.title.clone())
            }
            keys::YEAR => {
                movie.year = value.as_integer().ok_or_else(|| invalid(key, "integer"))?;
                Value::Integer(movie.year)
            }
            keys::GENRE => {
                let genre = single_line(key, &value)?;
                movie.genre = genre.to_string();
                Value::Text(movie.genre.clone())
            }
            _ => {
                let rating = value
                    .as_real()
                    .filter(|r| Movie::is_valid_rating(*r))
                    .ok_or_else(|| invalid(key, "a real number between 0.0 and 10.0"))?;
                movie.rating = rating;
                Value::Real(rating)
            }
        };

        let mut changes = Vec::new();
        if let Some(change) = self.replace(key, stored) {
            changes.push(change);
            changes.extend(self.replace(keys::MOVIES, Value::from(movies)));
        }

        Ok(changes)
    }

    /// Stores `value` under `key`, reporting a change only if it differs
    fn replace(&mut self, key: &str, value: Value) -> Option<Change> {
        let old_value = self.properties.get(key).cloned().unwrap_or_default();
        if old_value == value {
            return None;
        }

        self.properties.insert(key.to_string(), value.clone());

        Some(Change::Property {
            key: key.to_string(),
            new_value: value,
            old_value,
        })
    }
}

/// Text without line breaks, which a collection file cannot hold
fn single_line<'a>(key: &str, value: &'a Value) -> Result<&'a str, ModelError> {
    value
        .as_text()
        .filter(|text| !text.contains(['\n', '\r']))
        .ok_or_else(|| invalid(key, "single-line text"))
}

fn invalid(key: &str, expected: &str) -> ModelError {
    ModelError::InvalidValue {
        key: key.to_string(),
        expected: expected.to_string(),
    }
}
