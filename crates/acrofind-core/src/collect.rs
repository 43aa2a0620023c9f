//! Streaming result collection.
//!
//! Candidates arrive one at a time from an external lister. With a needle,
//! [`TopScoreCollector`] keeps only the running best-score set — a single
//! forward pass holding nothing beyond the current leaders. Without a
//! needle, collection degenerates to a pass-through that emits everything
//! unscored in arrival order.

use crate::acronym::acronymize;
use crate::score::score;

/// A candidate path paired with its derived acronym.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: String,
    pub acronym: String,
}

impl Candidate {
    /// Build a candidate by acronymizing the path.
    pub fn from_path(path: impl Into<String>) -> Self {
        let path = path.into();
        let acronym = acronymize(&path);
        Self { path, acronym }
    }
}

/// A collected result: the candidate plus the winning score, when the
/// collection pass scored it (pass-through results carry no score).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scored {
    pub score: Option<i32>,
    pub candidate: Candidate,
}

/// Tracks the best-scoring candidates seen so far for a fixed needle.
///
/// `max_score` starts below any real score, so the first scored candidate
/// always takes the lead — zero and negative scores included. A strictly
/// better candidate supersedes the whole leader set; equal scores accumulate
/// in arrival order; unscored candidates leave the state untouched.
#[derive(Debug)]
pub struct TopScoreCollector {
    needle: String,
    max_score: Option<i32>,
    matches: Vec<Candidate>,
}

impl TopScoreCollector {
    pub fn new(needle: impl Into<String>) -> Self {
        Self {
            needle: needle.into(),
            max_score: None,
            matches: Vec::new(),
        }
    }

    /// Feed one candidate through the scorer, updating the leader set.
    pub fn process(&mut self, candidate: Candidate) {
        let Some(score) = score(&candidate.acronym, &self.needle) else {
            return;
        };
        match self.max_score {
            Some(max) if score < max => {}
            Some(max) if score == max => self.matches.push(candidate),
            _ => {
                self.max_score = Some(score);
                self.matches = vec![candidate];
            }
        }
    }

    /// The leader set, in arrival order, each entry carrying the winning
    /// score.
    pub fn into_results(self) -> Vec<Scored> {
        let score = self.max_score;
        self.matches
            .into_iter()
            .map(|candidate| Scored { score, candidate })
            .collect()
    }
}

/// Run a candidate sequence through collection.
///
/// With a needle, returns the maximal-score subset, input order preserved
/// among ties. Without one, returns every candidate unscored in input order.
pub fn collect<I>(candidates: I, needle: Option<&str>) -> Vec<Scored>
where
    I: IntoIterator<Item = Candidate>,
{
    match needle {
        Some(needle) => {
            let mut collector = TopScoreCollector::new(needle);
            for candidate in candidates {
                collector.process(candidate);
            }
            collector.into_results()
        }
        None => candidates
            .into_iter()
            .map(|candidate| Scored {
                score: None,
                candidate,
            })
            .collect(),
    }
}
