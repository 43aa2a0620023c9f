//! Candidate list ingestion.
//!
//! acrofind never walks the file system: an external lister (`fd`,
//! `git ls-files`, a screen scraper, ...) supplies newline-separated paths
//! on stdin or in a file, and this module turns them into candidates.

use std::io::BufRead;

use log::debug;
use regex::Regex;

use acrofind_core::collect::Candidate;
use acrofind_core::error::AcrofindError;

/// Read newline-separated candidate paths.
///
/// Trailing whitespace is trimmed and blank lines are skipped. Lines failing
/// the prefilter are dropped before acronymization.
pub fn read_candidates<R: BufRead>(
    reader: R,
    prefilter: Option<&Regex>,
) -> Result<Vec<Candidate>, AcrofindError> {
    let mut candidates = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let path = line.trim_end();
        if path.is_empty() {
            continue;
        }
        if let Some(re) = prefilter {
            if !re.is_match(path) {
                debug!("prefilter dropped {path}");
                continue;
            }
        }
        candidates.push(Candidate::from_path(path));
    }
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn trims_and_skips_blank_lines() {
        let listing = "app/models/user.rb\n\n  \nlib/tasks/cleanup.rake  \n";
        let candidates = read_candidates(Cursor::new(listing), None).unwrap();
        let paths: Vec<&str> = candidates.iter().map(|c| c.path.as_str()).collect();
        assert_eq!(paths, vec!["app/models/user.rb", "lib/tasks/cleanup.rake"]);
    }

    #[test]
    fn acronymizes_each_line() {
        let candidates =
            read_candidates(Cursor::new("app/models/context_external_tool.rb\n"), None).unwrap();
        assert_eq!(candidates[0].acronym, "AMcetR");
    }

    #[test]
    fn prefilter_drops_non_matching_paths() {
        let listing = "app/models/user.rb\nspec/models/user_spec.rb\napp/models/note.rb\n";
        let re = Regex::new(r"^app/").unwrap();
        let candidates = read_candidates(Cursor::new(listing), Some(&re)).unwrap();
        let paths: Vec<&str> = candidates.iter().map(|c| c.path.as_str()).collect();
        assert_eq!(paths, vec!["app/models/user.rb", "app/models/note.rb"]);
    }

    #[test]
    fn empty_input_yields_no_candidates() {
        assert!(read_candidates(Cursor::new(""), None).unwrap().is_empty());
    }
}
