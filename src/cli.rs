//! Command line interface.

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::config::Config;
use crate::matcher::{MatchMode, MatchOptions};
use crate::processor::Source;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Search for a pattern in files or standard input",
    long_about = None
)]
pub struct Cli {
    /// Pattern to search for
    #[arg(value_name = "PATTERN", required_unless_present = "completions")]
    pub pattern: Option<String>,

    /// Files to search; `-` means standard input, no files reads standard input
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Ignore case distinctions in pattern and input
    #[arg(short = 'i', long = "ignore-case")]
    pub ignore_case: bool,

    /// Prefix each printed line with its 1-based line number
    #[arg(short = 'n', long = "line-number")]
    pub line_number: bool,

    /// Print only a count of matching lines per input
    #[arg(short = 'c', long = "count")]
    pub count: bool,

    /// Select non-matching lines
    #[arg(short = 'v', long = "invert-match")]
    pub invert: bool,

    /// Interpret the pattern as a wildcard expression (`*`, `?`)
    #[arg(short = 'w', long = "wildcard")]
    pub wildcard: bool,

    /// Interpret the pattern as anchored (`^` start, `$` end)
    #[arg(short = 'a', long = "anchored")]
    pub anchored: bool,

    /// Write log output to this file instead of standard error
    #[arg(long = "log", value_name = "FILE")]
    pub log: Option<PathBuf>,

    /// Truncate physical lines to this many bytes before matching; 0 disables
    #[arg(long = "max-line-len", value_name = "BYTES")]
    pub max_line_len: Option<usize>,

    /// Generate shell completions and exit
    #[arg(long = "completions", value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Resolve the match mode from flags, falling back to the configured
    /// default. Anchors outrank wildcards when both flags are given.
    pub fn match_mode(&self, config: &Config) -> MatchMode {
        if self.anchored {
            MatchMode::Anchored
        } else if self.wildcard {
            MatchMode::Wildcard
        } else {
            config.matcher.default_mode
        }
    }

    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            ignore_case: self.ignore_case,
            invert: self.invert,
        }
    }

    /// The inputs to scan, in command line order.
    pub fn sources(&self) -> Vec<Source> {
        if self.files.is_empty() {
            vec![Source::Stdin]
        } else {
            self.files.iter().map(|path| Source::from_arg(path)).collect()
        }
    }
}
