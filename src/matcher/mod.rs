//! Line matching engine.
//!
//! A line either contains the pattern as a plain substring, matches a
//! wildcard pattern (`*` and `?`), or matches an anchored pattern (`^`,
//! `$`). Case folding and match inversion are applied on top of whichever
//! mode is selected.

pub mod anchor;
pub mod wildcard;

use std::fmt;

use memchr::memmem;
use serde::{Deserialize, Serialize};

/// How a pattern is interpreted against a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Plain substring containment.
    #[default]
    Substring,
    /// `*` matches any run of bytes, `?` matches exactly one.
    Wildcard,
    /// `^` pins to line start, `$` to line end.
    Anchored,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatchMode::Substring => "substring",
            MatchMode::Wildcard => "wildcard",
            MatchMode::Anchored => "anchored",
        };
        f.write_str(name)
    }
}

/// Toggles applied on top of the match mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchOptions {
    /// Fold both line and pattern to ASCII lowercase before matching.
    pub ignore_case: bool,
    /// Select lines that do NOT match.
    pub invert: bool,
}

/// Decide whether `line` is selected by `pattern`.
///
/// The line is matched with its terminator still attached when one was
/// present in the input. Folding copies both sides, so pathological input
/// sizes cost two allocations per line in case-insensitive mode.
pub fn line_matches(line: &[u8], pattern: &[u8], mode: MatchMode, opts: MatchOptions) -> bool {
    let hit = if opts.ignore_case {
        let folded_line = line.to_ascii_lowercase();
        let folded_pattern = pattern.to_ascii_lowercase();
        raw_match(&folded_line, &folded_pattern, mode)
    } else {
        raw_match(line, pattern, mode)
    };
    hit != opts.invert
}

fn raw_match(text: &[u8], pattern: &[u8], mode: MatchMode) -> bool {
    match mode {
        MatchMode::Substring => memmem::find(text, pattern).is_some(),
        MatchMode::Wildcard => wildcard::is_match(text, pattern),
        MatchMode::Anchored => anchor::is_match(text, pattern),
    }
}
