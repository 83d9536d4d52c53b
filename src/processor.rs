//! Scanning driver.
//!
//! Reads each input line by line, hands every line to the matcher, and
//! writes the matching lines (or a per-input count) to the output stream.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{PatgrepError, Result};
use crate::matcher::{self, MatchMode, MatchOptions};

/// One input to scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// Map a command line argument to a source; `-` names standard input.
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == "-" {
            Source::Stdin
        } else {
            Source::File(arg.to_path_buf())
        }
    }

    /// Name used in output prefixes and diagnostics.
    pub fn label(&self) -> String {
        match self {
            Source::Stdin => "stdin".to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }
}

/// Everything the scanner needs beyond the input itself.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub pattern: Vec<u8>,
    pub mode: MatchMode,
    pub options: MatchOptions,
    /// Prefix each printed line with its 1-based line number.
    pub line_numbers: bool,
    /// Print only the number of matching lines per input.
    pub count_only: bool,
    /// Prefix output with the source label; on when scanning more than
    /// one input.
    pub prefix_labels: bool,
    /// Truncation cap in bytes; 0 disables truncation.
    pub max_line_len: usize,
}

/// Scan one source and return how many lines matched.
///
/// Open and read failures carry the source label so the caller can report
/// them and move on to the next input.
pub fn scan_source(source: &Source, scan: &ScanConfig, out: &mut impl Write) -> Result<usize> {
    let label = source.label();
    log::debug!("scanning {label}");
    match source {
        Source::Stdin => {
            let stdin = io::stdin();
            let mut reader = stdin.lock();
            scan_reader(&mut reader, &label, scan, out).map_err(|err| PatgrepError::Scan {
                name: label.clone(),
                source: err,
            })
        }
        Source::File(path) => {
            let file = File::open(path).map_err(|err| PatgrepError::Open {
                name: label.clone(),
                source: err,
            })?;
            let mut reader = BufReader::new(file);
            scan_reader(&mut reader, &label, scan, out).map_err(|err| PatgrepError::Scan {
                name: label,
                source: err,
            })
        }
    }
}

/// Scan a buffered reader line by line.
///
/// Physical lines longer than the cap are truncated to the cap before
/// matching; the cut-off tail is discarded. Line numbers always count
/// physical lines. Every emitted line ends in exactly one newline, whether
/// or not the input line carried one.
pub fn scan_reader<R: BufRead>(
    reader: &mut R,
    label: &str,
    scan: &ScanConfig,
    out: &mut impl Write,
) -> io::Result<usize> {
    let mut buf = Vec::new();
    let mut lineno: usize = 0;
    let mut hits: usize = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        lineno += 1;
        if scan.max_line_len > 0 && buf.len() > scan.max_line_len {
            log::debug!("{label}:{lineno}: truncated to {} bytes", scan.max_line_len);
            buf.truncate(scan.max_line_len);
        }
        if matcher::line_matches(&buf, &scan.pattern, scan.mode, scan.options) {
            hits += 1;
            if !scan.count_only {
                emit_line(&buf, lineno, label, scan, out)?;
            }
        }
    }
    if scan.count_only {
        if scan.prefix_labels {
            writeln!(out, "{label}:{hits}")?;
        } else {
            writeln!(out, "{hits}")?;
        }
    }
    log::debug!("{label}: {hits} of {lineno} lines matched");
    Ok(hits)
}

fn emit_line(
    line: &[u8],
    lineno: usize,
    label: &str,
    scan: &ScanConfig,
    out: &mut impl Write,
) -> io::Result<()> {
    if scan.prefix_labels {
        write!(out, "{label}:")?;
    }
    if scan.line_numbers {
        write!(out, "{lineno}:")?;
    }
    let body = line.strip_suffix(b"\n").unwrap_or(line);
    out.write_all(body)?;
    out.write_all(b"\n")
}
