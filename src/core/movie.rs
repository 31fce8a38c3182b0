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


//! Movie record held by the Model

use std::fmt;

/// A single entry of the movie collection
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Movie {
    /// Display title
    pub title: String,
    /// Release year
    pub year: i64,
    /// Free-form genre (e.g., "Drama")
    pub genre: String,
    /// Rating on a 0.0 - 10.0 scale
    pub rating: f64,
}

impl Movie {
    /// Highest rating accepted by the Model
    pub const MAX_RATING: f64 = 10.0;

    pub fn new(title: impl Into<String>, year: i64, genre: impl Into<String>, rating: f64) -> Self {
        Self {
            title: title.into(),
            year,
            genre: genre.into(),
            rating,
        }
    }

    /// Returns true if `rating` lies within the accepted scale
    pub fn is_valid_rating(rating: f64) -> bool {
        (0.0..=Self::MAX_RATING).contains(&rating)
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.year)
    }
}
