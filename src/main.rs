// SPDX-License-Identifier: MIT
//
// base46-import — imports NvChad base46 themes into a validated theme
// catalog for syntax/diff highlighting.
//
// This is the thin binary that wires together the crates:
//
//   b46-color → the Rgb value type and sRGB math
//   b46-theme → table parsing, validation, contrast adjustment, loading
//
// Everything interesting happens in the library crates; this file only
// finds theme files, feeds their text to the engine, and writes the
// resulting catalog as JSON:
//
//   *.lua files → ThemeSource blobs → build_catalog → JSON (stdout/file)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use b46_theme::{LoaderConfig, Selection, ThemeSource, build_catalog};

/// Import NvChad base46 themes into a validated theme catalog.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Directory containing base46 theme files (*.lua).
    #[arg(long, value_name = "DIR")]
    themes_dir: PathBuf,

    /// Theme names to include (default: all themes found).
    #[arg(long, value_name = "NAME", num_args = 1..)]
    themes: Vec<String>,

    /// Write the catalog JSON here instead of stdout.
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let sources = read_theme_sources(&cli.themes_dir)?;
    let selection = if cli.themes.is_empty() {
        Selection::All
    } else {
        Selection::Names(cli.themes)
    };

    let catalog = build_catalog(&sources, &selection, &LoaderConfig::default())
        .context("building theme catalog")?;
    tracing::info!(themes = catalog.len(), "catalog built");

    let json = serde_json::to_string_pretty(&catalog).context("serializing catalog")?;
    match cli.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
        }
        None => println!("{json}"),
    }

    Ok(())
}

/// Read every `*.lua` file in `dir`, sorted by file name. The file stem
/// becomes the theme name.
fn read_theme_sources(dir: &Path) -> Result<Vec<ThemeSource>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("theme directory not found: {}", dir.display()))?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "lua"))
        .collect();
    paths.sort();

    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        let source =
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        sources.push(ThemeSource { name: stem.to_owned(), source });
    }
    Ok(sources)
}
