use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use acrofind_core::config::ColorMode;

/// Candidate paths are read from stdin (or `--input`), one per line, as
/// produced by an external lister such as `fd` or `git ls-files`.
#[derive(Parser)]
#[command(name = "acrofind", about = "Match file paths against typed abbreviations", version)]
pub struct Cli {
    /// Abbreviation to match (omit to print every candidate with its acronym)
    pub needle: Option<String>,

    /// Read candidate paths from FILE instead of stdin
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Only consider candidate paths matching this regex
    #[arg(long, value_name = "REGEX")]
    pub prefilter: Option<String>,

    /// Prepend the winning score to each match line
    #[arg(long)]
    pub scores: bool,

    /// When to use ANSI colors
    #[arg(long, value_enum, value_name = "WHEN")]
    pub color: Option<ColorWhen>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl ColorWhen {
    pub fn into_mode(self) -> ColorMode {
        match self {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}
