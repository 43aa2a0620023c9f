//! Terminal styling helpers.
//!
//! Free functions over plain strings, one per semantic role. Styling stays
//! out of the core library; paths print unstyled so a downstream selector
//! can consume them verbatim.

use colored::{ColoredString, Colorize};

pub fn acronym(s: &str) -> ColoredString {
    s.cyan().bold()
}

pub fn score(s: &str) -> ColoredString {
    s.yellow()
}

pub fn path(s: &str) -> ColoredString {
    s.normal()
}
