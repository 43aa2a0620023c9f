pub mod args;

use std::fs::File;
use std::io::{self, BufReader, Write};

use log::debug;
use regex::Regex;

use acrofind_core::collect::{collect, Candidate, Scored};
use acrofind_core::config::{ColorMode, Config};
use acrofind_core::error::AcrofindError;

use crate::input;
use crate::style;

use self::args::Cli;

pub fn run(cli: Cli) -> color_eyre::Result<()> {
    let config = Config::load()?;

    let color = cli
        .color
        .map(args::ColorWhen::into_mode)
        .unwrap_or(config.color);
    apply_color_mode(color);

    let prefilter = cli
        .prefilter
        .as_deref()
        .map(Regex::new)
        .transpose()
        .map_err(|e| AcrofindError::Prefilter(e.to_string()))?;

    let candidates = read_candidates(&cli, prefilter.as_ref())?;
    debug!("{} candidate path(s) after ingestion", candidates.len());

    let results = collect(candidates, cli.needle.as_deref());
    debug!("{} result(s)", results.len());

    let show_scores = cli.scores || config.show_scores;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for scored in &results {
        writeln!(out, "{}", render_line(scored, show_scores))?;
    }

    Ok(())
}

fn read_candidates(cli: &Cli, prefilter: Option<&Regex>) -> Result<Vec<Candidate>, AcrofindError> {
    match &cli.input {
        Some(path) => {
            let file = File::open(path).map_err(|source| AcrofindError::InputRead {
                path: path.clone(),
                source,
            })?;
            input::read_candidates(BufReader::new(file), prefilter)
        }
        None => input::read_candidates(io::stdin().lock(), prefilter),
    }
}

fn apply_color_mode(mode: ColorMode) {
    match mode {
        ColorMode::Auto => colored::control::unset_override(),
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
    }
}

// Tab-separated so a downstream selector can split columns reliably; only
// the decoration differs between score and no-score lines.
fn render_line(scored: &Scored, show_scores: bool) -> String {
    let mut columns = Vec::with_capacity(3);
    if show_scores {
        let score = scored
            .score
            .map_or_else(|| "-".to_string(), |s| s.to_string());
        columns.push(style::score(&score).to_string());
    }
    columns.push(style::acronym(&scored.candidate.acronym).to_string());
    columns.push(style::path(&scored.candidate.path).to_string());
    columns.join("\t")
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    fn plain(scored: &Scored, show_scores: bool) -> String {
        colored::control::set_override(false);
        render_line(scored, show_scores)
    }

    fn scored(path: &str, score: Option<i32>) -> Scored {
        Scored {
            score,
            candidate: Candidate::from_path(path),
        }
    }

    #[test]
    fn renders_acronym_and_path() {
        let line = plain(&scored("app/models/context_external_tool.rb", Some(70)), false);
        assert_eq!(line, "AMcetR\tapp/models/context_external_tool.rb");
    }

    #[test]
    fn renders_score_column_when_enabled() {
        let line = plain(&scored("app/models/context_external_tool.rb", Some(70)), true);
        assert_eq!(line, "70\tAMcetR\tapp/models/context_external_tool.rb");
    }

    #[test]
    fn pass_through_score_renders_as_dash() {
        let line = plain(&scored("app/models/user.rb", None), true);
        assert_eq!(line, "-\tAMuR\tapp/models/user.rb");
    }

    #[test]
    fn reads_candidates_from_input_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "app/models/user.rb").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "lib/tasks/cleanup.rake").unwrap();

        let cli = Cli {
            needle: None,
            input: Some(file.path().to_path_buf()),
            prefilter: None,
            scores: false,
            color: None,
        };
        let candidates = read_candidates(&cli, None).unwrap();
        let paths: Vec<&str> = candidates.iter().map(|c| c.path.as_str()).collect();
        assert_eq!(paths, vec!["app/models/user.rb", "lib/tasks/cleanup.rake"]);
    }

    #[test]
    fn missing_input_file_reports_its_path() {
        let cli = Cli {
            needle: None,
            input: Some("does/not/exist.txt".into()),
            prefilter: None,
            scores: false,
            color: None,
        };
        let err = read_candidates(&cli, None).unwrap_err();
        assert!(matches!(err, AcrofindError::InputRead { .. }));
        assert!(err.to_string().contains("does/not/exist.txt"));
    }
}
