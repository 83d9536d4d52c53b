//! Line-oriented pattern search over files and standard input.
//!
//! Supports plain substring search, wildcard patterns (`*`, `?`) and
//! anchored patterns (`^`, `$`), with optional case folding, inverted
//! selection, line numbers and per-input match counts.

pub mod cli;
pub mod config;
pub mod error;
pub mod matcher;
pub mod processor;

pub use cli::Cli;
pub use config::Config;
pub use error::{PatgrepError, Result};
pub use matcher::{MatchMode, MatchOptions};
pub use processor::{scan_reader, scan_source, ScanConfig, Source};
