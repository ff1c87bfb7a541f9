//! grload CLI
//!
//! Feed geometry representation files (or literal lines) through the
//! loader against a recording engine, optionally as a self-test.

use anyhow::{bail, Context, Result};
use clap::Parser;
use grload::{Body, Counters, Error, Harness, Options, Recorder, Source, Transcript, DEFAULT_PROJECTION};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser, Debug)]
#[command(name = "grload")]
#[command(version)]
#[command(about = "Load geometry representations line by line")]
struct Cli {
    /// Files, directories or literal lines to load
    #[arg(required = true)]
    sources: Vec<OsString>,

    /// Projection passed to every creation call
    #[arg(long, default_value = DEFAULT_PROJECTION)]
    prj: String,

    /// Do not fit the viewport after each source
    #[arg(long)]
    no_fit: bool,

    /// Classify lines as PASS/FAIL instead of stopping at the first error
    #[arg(long)]
    test: bool,

    /// In test mode, stop at the first FAIL
    #[arg(long, requires = "test")]
    stop_on_failure: bool,

    /// Write the transcript of created items here (default: stdout, unless --test)
    #[arg(short = 'o', long)]
    transcript: Option<PathBuf>,

    /// Write the summed counters as JSON
    #[arg(long)]
    report: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = Options::default()
        .with_projection(cli.prj.clone())
        .with_fit_viewport(!cli.no_fit)
        .with_self_test(cli.test)
        .with_stop_on_first_failure(cli.stop_on_failure);

    let sources = collect_sources(&cli.sources)?;
    let mut engine = Recorder::new();
    let mut total = Counters::default();
    let mut stopped = None;

    for source in &sources {
        let lines = source.lines()?;
        tracing::info!(source = %source.label(), lines = lines.len(), "loading");

        let mut harness = Harness::new(options.clone());
        match harness.run(&mut engine, lines) {
            Ok(counters) => total += counters,
            Err(Error::StoppedOnFailure { line, counters, .. }) => {
                total += counters;
                stopped = Some((source.label(), line));
                break;
            }
            Err(err) => return Err(err).with_context(|| format!("Failed to load: {}", source.label())),
        }
    }

    let transcript = Transcript::new();
    if let Some(path) = &cli.transcript {
        transcript.encode_to_file(&engine.requests, path)?;
    } else if !cli.test {
        transcript.encode_to_writer(&engine.requests, std::io::stdout().lock())?;
    }

    if let Some(path) = &cli.report {
        write_report(path, &total)?;
    }

    if let Some((label, line)) = stopped {
        bail!("Stopped on first failure: {}:{}", label, line);
    }
    if cli.test && total.fail > 0 {
        bail!("{} of {} tests failed", total.fail, total.run);
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Expand directories into their files, sorted by path
fn collect_sources(values: &[OsString]) -> Result<Vec<Source>> {
    let mut sources = Vec::new();

    for value in values {
        let path = Path::new(value);
        if path.is_dir() {
            let mut files = walkdir::WalkDir::new(path)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
                .map(|e| e.into_path())
                .collect::<Vec<_>>();
            files.sort();

            if files.is_empty() {
                tracing::warn!(dir = %path.display(), "directory has no files");
            }
            sources.extend(files.into_iter().map(Source::File));
        } else {
            sources.push(Source::resolve(value)?);
        }
    }

    Ok(sources)
}

fn write_report(path: &Path, counters: &Counters) -> Result<()> {
    let body = Body::Json(serde_json::to_value(counters)?);
    std::fs::write(path, body.encode())
        .with_context(|| format!("Failed to write: {}", path.display()))?;
    Ok(())
}
