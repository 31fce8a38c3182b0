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


//! CLI entry point for movie-browser
//!
//! Provides a command-line interface for listing a collection and
//! launching the GUI.

use clap::{Parser, Subcommand};
use colored::*;
use movie_browser::core::csv::read_movies;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "movie-browser")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the GUI (default)
    Gui {
        /// Settings file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Collection to open on startup
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// List the movies of a collection
    List {
        /// Path to a collection file
        #[arg(short, long)]
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Gui { config: None, file: None }) {
        Commands::Gui { config, file } => launch_gui(config, file)?,
        Commands::List { file } => list_movies(&expand(&file)?)?,
    }

    Ok(())
}

/// Expand `~` and environment variables in a path argument
fn expand(path: &Path) -> anyhow::Result<PathBuf> {
    let raw = path
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?;
    let expanded = shellexpand::full(raw)
        .map_err(|e| anyhow::anyhow!("Failed to expand {}: {}", raw, e))?;

    Ok(PathBuf::from(expanded.as_ref()))
}

#[cfg(feature = "gui")]
fn launch_gui(config: Option<PathBuf>, file: Option<PathBuf>) -> anyhow::Result<()> {
    use movie_browser::{config::AppConfig, ui::App};

    let config_path = config.as_deref().map(expand).transpose()?;
    let settings = AppConfig::load_or_default(config_path.as_deref())?;
    let file = file.as_deref().map(expand).transpose()?;

    App::new(settings, file).run();
    Ok(())
}

#[cfg(not(feature = "gui"))]
fn launch_gui(_config: Option<PathBuf>, _file: Option<PathBuf>) -> anyhow::Result<()> {
    anyhow::bail!("this build has no GUI; rebuild with `--features gui`")
}

/// Print every movie of a collection
fn list_movies(path: &Path) -> anyhow::Result<()> {
    let movies = read_movies(path)?;

    println!("{}", format!("Movies from: {}\n", path.display()).bold());

    for movie in &movies {
        println!(
            "{} {} {} {}",
            movie.title.cyan().bold(),
            format!("({})", movie.year).dimmed(),
            movie.genre.magenta(),
            format!("{:.1}", movie.rating).green(),
        );
    }

    println!(
        "\n{} Total: {} movie{}",
        "✓".green(),
        movies.len(),
        if movies.len() == 1 { "" } else { "s" }
    );

    Ok(())
}
