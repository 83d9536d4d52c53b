use std::fs::File;
use std::io::{self, Write};
use std::time::Instant;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;
use log::info;

use patgrep::cli::Cli;
use patgrep::config::Config;
use patgrep::error::{PatgrepError, Result};
use patgrep::processor::{self, ScanConfig};

fn setup_logging(cli: &Cli) -> Result<()> {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.args()
        )
    });
    if let Some(path) = &cli.log {
        let file = File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder
        .try_init()
        .map_err(|err| PatgrepError::Other(format!("failed to initialise logging: {err}")))?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = setup_logging(&cli) {
        eprintln!("{} {err}", "warning:".yellow());
    }

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut io::stdout());
        return;
    }

    // clap enforces the pattern unless --completions was given
    let Some(pattern) = cli.pattern.clone() else {
        eprintln!("{} a pattern is required", "patgrep:".red());
        std::process::exit(2);
    };

    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {err:#}", "warning:".yellow());
            Config::default()
        }
    };

    let sources = cli.sources();
    let scan = ScanConfig {
        pattern: pattern.into_bytes(),
        mode: cli.match_mode(&config),
        options: cli.match_options(),
        line_numbers: cli.line_number,
        count_only: cli.count,
        prefix_labels: sources.len() > 1,
        max_line_len: cli.max_line_len.unwrap_or(config.scan.max_line_len),
    };

    info!(
        "starting scan: mode={} sources={} max_line_len={}",
        scan.mode,
        sources.len(),
        scan.max_line_len
    );
    let started = Instant::now();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut total = 0usize;
    for source in &sources {
        match processor::scan_source(source, &scan, &mut out) {
            Ok(hits) => total += hits,
            Err(err) => {
                info!("skipping {}: {err}", source.label());
                eprintln!("{} {err}", "patgrep:".red());
            }
        }
    }
    if let Err(err) = out.flush() {
        eprintln!("{} failed to write output: {err}", "patgrep:".red());
    }

    info!(
        "done: {total} matching lines across {} sources in {:.2?}",
        sources.len(),
        started.elapsed()
    );
}
