//! Tiered acronym scoring.
//!
//! A needle is compared against an acronym through a fixed ladder of tiers,
//! checked in order; the first tier that applies determines the score. The
//! boundary-aligned tiers carry fixed scores (100/90/80/70). The fallback
//! substring tiers subtract the acronym length from their base (60/50/40/30),
//! so a short, specific acronym outranks a long incidental one within the
//! same tier.
//!
//! The tier ranges only stay disjoint while acronyms are short relative to
//! the ten-point gaps between bases. That, and the resulting ordering
//! anomalies between the suffix tiers, is a known property of the heuristic
//! kept as-is.

/// One rule in the scoring ladder.
struct Tier {
    applies: fn(&str, &str) -> bool,
    base: i32,
    length_penalty: bool,
}

const TIERS: &[Tier] = &[
    Tier {
        applies: exact,
        base: 100,
        length_penalty: false,
    },
    Tier {
        applies: prefix_before_final_upper,
        base: 90,
        length_penalty: false,
    },
    Tier {
        applies: suffix_after_boundary,
        base: 80,
        length_penalty: false,
    },
    Tier {
        applies: between_boundaries,
        base: 70,
        length_penalty: false,
    },
    Tier {
        applies: stem_suffix,
        base: 60,
        length_penalty: true,
    },
    Tier {
        applies: folded_suffix,
        base: 50,
        length_penalty: true,
    },
    Tier {
        applies: substring,
        base: 40,
        length_penalty: true,
    },
    Tier {
        applies: folded_substring,
        base: 30,
        length_penalty: true,
    },
];

/// Score a needle against an acronym.
///
/// Returns `None` when no tier applies — a normal outcome, not a failure.
/// An empty needle never matches; emitting every candidate is the
/// collector's explicit pass-through mode instead.
pub fn score(acronym: &str, needle: &str) -> Option<i32> {
    if needle.is_empty() {
        return None;
    }
    let tier = TIERS.iter().find(|t| (t.applies)(acronym, needle))?;
    let mut value = tier.base;
    if tier.length_penalty {
        value -= acronym.chars().count() as i32;
    }
    Some(value)
}

// An uppercase initial marks a directory or word boundary in the acronym.
// A literal slash also counts, though acronymization never emits one.
fn is_boundary(c: char) -> bool {
    c.is_ascii_uppercase() || c == '/'
}

fn exact(acronym: &str, needle: &str) -> bool {
    acronym == needle
}

/// The whole acronym is the needle followed by exactly one uppercase letter,
/// i.e. the needle covers everything but the final extension initial.
fn prefix_before_final_upper(acronym: &str, needle: &str) -> bool {
    acronym.strip_prefix(needle).is_some_and(|rest| {
        let mut chars = rest.chars();
        chars.next().is_some_and(|c| c.is_ascii_uppercase()) && chars.next().is_none()
    })
}

/// The needle is the acronym's tail, entered at a boundary letter.
fn suffix_after_boundary(acronym: &str, needle: &str) -> bool {
    acronym
        .strip_suffix(needle)
        .is_some_and(|head| head.chars().last().is_some_and(is_boundary))
}

/// The needle sits between a boundary letter and a single trailing uppercase
/// letter.
fn between_boundaries(acronym: &str, needle: &str) -> bool {
    let mut chars = acronym.chars();
    let Some(last) = chars.next_back() else {
        return false;
    };
    if !last.is_ascii_uppercase() {
        return false;
    }
    chars
        .as_str()
        .strip_suffix(needle)
        .is_some_and(|head| head.chars().last().is_some_and(is_boundary))
}

/// After dropping the trailing run of uppercase letters (the extension
/// initials), the lower-cased remainder ends with the needle.
fn stem_suffix(acronym: &str, needle: &str) -> bool {
    let stem = acronym.trim_end_matches(|c: char| c.is_ascii_uppercase());
    stem.to_lowercase().ends_with(needle)
}

fn folded_suffix(acronym: &str, needle: &str) -> bool {
    acronym.to_lowercase().ends_with(needle)
}

fn substring(acronym: &str, needle: &str) -> bool {
    acronym.contains(needle)
}

fn folded_substring(acronym: &str, needle: &str) -> bool {
    acronym.to_lowercase().contains(&needle.to_lowercase())
}
