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


//! src/core/csv.rs
//!
//! Movie collection reader and writer
//!
//! The on-disk format is a small CSV dialect:
//! - Optional header line `title,year,genre,rating`
//! - Fields may be wrapped in double quotes, `""` inside quotes is a quote
//! - Blank lines are ignored
//! - Line numbers are reported for every malformed record
//!
//! Reading uses nom combinators; writing goes through an atomic
//! temp-file-then-rename so a failed save never truncates the destination.

use atomic_write_file::AtomicWriteFile;
use nom::{
    branch::alt,
    bytes::complete::{is_not, tag, take_while},
    character::complete::{char, space0},
    combinator::map,
    multi::{fold_many0, separated_list1},
    sequence::delimited,
    IResult, Parser,
};
use std::{io::Write, path::Path};

use crate::core::{error::ModelError, movie::Movie};

/// Column names written as the first line of every saved file
pub const HEADER: [&str; 4] = ["title", "year", "genre", "rating"];

/// Parse a complete collection file
///
/// # Arguments
/// * `content` - The full file content
///
/// # Returns
/// All movies in file order, or the first `ModelError::Parse` encountered
pub fn parse_movies(content: &str) -> Result<Vec<Movie>, ModelError> {
    let mut movies = Vec::new();
    let mut seen_record = false;

    for (line_num, line) in content.lines().enumerate() {
        let line_num = line_num + 1;

        if line.trim().is_empty() {
            continue;
        }

        let fields = parse_record_line(line).map_err(|message| ModelError::Parse {
            line: line_num,
            message,
        })?;

        // Header is only recognised before the first record
        if !seen_record && is_header(&fields) {
            seen_record = true;
            continue;
        }
        seen_record = true;

        movies.push(movie_from_fields(&fields, line_num)?);
    }

    Ok(movies)
}

/// Split one line into its fields
pub fn parse_record_line(line: &str) -> Result<Vec<String>, String> {
    match record(line) {
        Ok(("", fields)) => Ok(fields),
        Ok((rest, _)) => Err(format!("unexpected trailing input '{}'", rest)),
        Err(e) => Err(format!("{:?}", e)),
    }
}

fn record(input: &str) -> IResult<&str, Vec<String>> {
    separated_list1(char(','), field).parse(input)
}

fn field(input: &str) -> IResult<&str, String> {
    alt((delimited(space0, quoted_field, space0), plain_field)).parse(input)
}

/// `"..."` with `""` standing for a literal quote
fn quoted_field(input: &str) -> IResult<&str, String> {
    delimited(
        char('"'),
        fold_many0(
            alt((map(tag("\"\""), |_| "\""), is_not("\""))),
            String::new,
            |mut acc: String, piece: &str| {
                acc.push_str(piece);
                acc
            },
        ),
        char('"'),
    )
    .parse(input)
}

fn plain_field(input: &str) -> IResult<&str, String> {
    map(take_while(|c: char| c != ',' && c != '"'), |s: &str| {
        s.trim().to_string()
    })
    .parse(input)
}

fn is_header(fields: &[String]) -> bool {
    fields.len() == HEADER.len()
        && fields
            .iter()
            .zip(HEADER.iter())
            .all(|(field, name)| field.eq_ignore_ascii_case(name))
}

fn movie_from_fields(fields: &[String], line: usize) -> Result<Movie, ModelError> {
    let parse_error = |message: String| ModelError::Parse { line, message };

    if fields.len() != HEADER.len() {
        return Err(parse_error(format!(
            "expected {} fields, found {}",
            HEADER.len(),
            fields.len()
        )));
    }

    let year = fields[1]
        .parse::<i64>()
        .map_err(|_| parse_error(format!("invalid year '{}'", fields[1])))?;

    let rating = fields[3]
        .parse::<f64>()
        .map_err(|_| parse_error(format!("invalid rating '{}'", fields[3])))?;

    if !Movie::is_valid_rating(rating) {
        return Err(parse_error(format!("rating {} out of range", rating)));
    }

    Ok(Movie::new(fields[0].clone(), year, fields[2].clone(), rating))
}

/// Format a collection as CSV text, header included
pub fn format_movies(movies: &[Movie]) -> String {
    let mut out = HEADER.join(",");
    out.push('\n');

    for movie in movies {
        out.push_str(&format!(
            "{},{},{},{}\n",
            escape_field(&movie.title),
            movie.year,
            escape_field(&movie.genre),
            movie.rating
        ));
    }

    out
}

fn escape_field(value: &str) -> String {
    let needs_quotes = value.contains(',')
        || value.contains('"')
        || value.trim() != value;

    if needs_quotes {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Atomically write a collection to `path`
///
/// Fails before touching `path` if a field holds a line break, since the
/// result could not be read back.
pub fn write_movies(path: &Path, movies: &[Movie]) -> Result<(), ModelError> {
    if let Some(movie) = movies
        .iter()
        .find(|m| [&m.title, &m.genre].iter().any(|f| f.contains(['\n', '\r'])))
    {
        return Err(ModelError::WriteFailed(format!(
            "'{}' contains a line break",
            movie.title.escape_debug()
        )));
    }

    let mut file = AtomicWriteFile::options()
        .open(path)
        .map_err(|e| ModelError::WriteFailed(format!("Failed to open for atomic write: {}", e)))?;

    file.write_all(format_movies(movies).as_bytes())
        .map_err(|e| ModelError::WriteFailed(format!("Failed to write content: {}", e)))?;

    file.commit()
        .map_err(|e| ModelError::WriteFailed(format!("Failed to commit atomic write: {}", e)))?;

    Ok(())
}

/// Read and parse a collection from `path`
pub fn read_movies(path: &Path) -> Result<Vec<Movie>, ModelError> {
    if !path.exists() {
        return Err(ModelError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    parse_movies(&content)
}
