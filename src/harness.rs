//! Line-by-line creation with optional self-test bookkeeping

use crate::directive::Directive;
use crate::dispatch::dispatch;
use crate::engine::GeometryEngine;
use crate::error::{Error, Result};
use crate::sniff::sniff;
use crate::source::Source;
use serde::Serialize;
use std::ffi::OsStr;
use std::io::Write;
use std::ops::AddAssign;

/// Projection used when none is given
pub const DEFAULT_PROJECTION: &str = "*APrjPC";

/// Longest content prefix echoed in reports and errors, in characters
pub const PREVIEW_LEN: usize = 100;

/// Run configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Passed unchanged to every creation call
    pub projection: String,
    /// Fit the viewport once all lines are processed
    pub fit_viewport: bool,
    /// Classify and continue instead of failing fast
    pub self_test: bool,
    /// Halt a self-test at the first FAIL
    pub stop_on_first_failure: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            projection: DEFAULT_PROJECTION.to_string(),
            fit_viewport: true,
            self_test: false,
            stop_on_first_failure: false,
        }
    }
}

impl Options {
    pub fn with_projection(mut self, projection: impl Into<String>) -> Self {
        self.projection = projection.into();
        self
    }

    pub fn with_fit_viewport(mut self, fit: bool) -> Self {
        self.fit_viewport = fit;
        self
    }

    pub fn with_self_test(mut self, self_test: bool) -> Self {
        self.self_test = self_test;
        self
    }

    pub fn with_stop_on_first_failure(mut self, stop: bool) -> Self {
        self.stop_on_first_failure = stop;
        self
    }
}

/// Outcome tallies of one or more runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct Counters {
    pub run: usize,
    pub pass: usize,
    pub fail: usize,
}

impl Counters {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Pass => self.pass += 1,
            Outcome::Fail => self.fail += 1,
        }
    }

    /// Print the three tallies, one per line
    pub fn write_summary<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "Tests summary:")?;
        for (key, value) in [("RUN", self.run), ("PASS", self.pass), ("FAIL", self.fail)] {
            writeln!(out, "{:>4}: {}", key, value)?;
        }
        Ok(())
    }
}

impl AddAssign for Counters {
    fn add_assign(&mut self, other: Self) {
        self.run += other.run;
        self.pass += other.pass;
        self.fail += other.fail;
    }
}

/// Classification of one content line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail,
}

impl Outcome {
    /// A marked line passes only when creation fails
    pub fn classify(created: bool, expect_fail: bool) -> Self {
        if created != expect_fail {
            Outcome::Pass
        } else {
            Outcome::Fail
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Pass => "PASS",
            Outcome::Fail => "FAIL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarnessState {
    Idle,
    Running,
    Done,
    Aborted,
}

/// Drives directives through the sniffer and dispatcher
#[derive(Debug)]
pub struct Harness {
    options: Options,
    state: HarnessState,
}

impl Harness {
    pub fn new(options: Options) -> Self {
        Self {
            options,
            state: HarnessState::Idle,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn state(&self) -> HarnessState {
        self.state
    }

    /// Process `lines` in order, reporting to stdout
    pub fn run<E, I, S>(&mut self, engine: &mut E, lines: I) -> Result<Counters>
    where
        E: GeometryEngine + ?Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stdout = std::io::stdout();
        self.run_with_output(engine, lines, &mut stdout.lock())
    }

    /// Process `lines` in order, writing the self-test report to `out`.
    ///
    /// Outside self-test mode nothing is written and the first creation
    /// failure is returned as [`Error::Creation`].
    pub fn run_with_output<E, I, S, W>(&mut self, engine: &mut E, lines: I, out: &mut W) -> Result<Counters>
    where
        E: GeometryEngine + ?Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        W: Write,
    {
        self.state = HarnessState::Running;
        let mut counters = Counters::default();

        for (index, raw) in lines.into_iter().enumerate() {
            let line = index + 1;
            let directive = Directive::parse(raw.as_ref());
            let Some(content) = directive.content() else {
                continue;
            };

            counters.run += 1;
            let shown = preview(content);
            if self.options.self_test {
                writeln!(out, "Test {:>3} {}", counters.run, shown).map_err(Error::Report)?;
            }

            let tag = sniff(content);
            let created = dispatch(engine, content, tag, &self.options.projection);
            let outcome = Outcome::classify(created.is_ok(), directive.expect_fail);
            counters.record(outcome);

            if !self.options.self_test {
                if let Err(source) = created {
                    self.state = HarnessState::Aborted;
                    tracing::warn!(line, %tag, "creation failed, aborting");
                    return Err(Error::Creation {
                        line,
                        preview: shown.to_string(),
                        source,
                    });
                }
                continue;
            }

            let failure = created.err();
            if let Some(err) = &failure {
                tracing::debug!(line, %tag, error = %err, "creation failed");
            }
            let note = match (directive.expect_fail, outcome) {
                (false, _) => "",
                (true, Outcome::Pass) => "(failed as expected)",
                (true, Outcome::Fail) => "(expected to fail)",
            };
            writeln!(out, "{:>8} {}", outcome.label(), note).map_err(Error::Report)?;

            if outcome == Outcome::Fail && self.options.stop_on_first_failure {
                self.state = HarnessState::Aborted;
                counters.write_summary(out).map_err(Error::Report)?;
                return Err(Error::StoppedOnFailure {
                    line,
                    counters,
                    source: failure,
                });
            }
        }

        self.state = HarnessState::Done;
        if self.options.fit_viewport {
            fit_viewport(engine);
        }
        if self.options.self_test {
            counters.write_summary(out).map_err(Error::Report)?;
        }

        tracing::info!(run = counters.run, pass = counters.pass, fail = counters.fail, "run complete");
        Ok(counters)
    }
}

/// Ask the engine to fit its view, ignoring any failure
pub fn fit_viewport<E: GeometryEngine + ?Sized>(engine: &mut E) {
    if let Err(err) = engine.fit_viewport() {
        tracing::debug!(error = %err, "viewport fit failed");
    }
}

/// Load `source` and run it through a fresh harness
pub fn create_from_source<E: GeometryEngine + ?Sized>(
    engine: &mut E,
    source: impl AsRef<OsStr>,
    options: &Options,
) -> Result<Counters> {
    let source = Source::resolve(source)?;
    let lines = source.lines()?;
    tracing::info!(source = %source.label(), lines = lines.len(), "loaded");
    Harness::new(options.clone()).run(engine, lines)
}

/// First [`PREVIEW_LEN`] characters of `content`
fn preview(content: &str) -> &str {
    match content.char_indices().nth(PREVIEW_LEN) {
        Some((end, _)) => &content[..end],
        None => content,
    }
}
