//! Reads session state after `end()` and renders it for humans or tools.
//!
//! This is the thin frontend surface: colored PASS/FAIL lines plus a summary
//! on the console, and a JSON rendering for programmatic consumers. It only
//! reads the record lines the session already composed; no new formatting
//! policy lives here.

use crate::session::{Outcome, Record, Session};
use serde::Serialize;
use std::rc::Rc;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Configuration for console reporting.
pub struct ReportConfig {
    pub use_colors: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

/// Prints one line per record and a closing summary to stdout.
pub fn report(session: &Session, config: &ReportConfig) {
    let choice = if config.use_colors {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    for record in session.results() {
        print_record(&mut stdout, record);
    }

    let (passed, failed) = session.tally();
    println!(
        "\nSession summary: total {}, passed {}, failed {}{}",
        session.results().count(),
        passed,
        failed,
        session
            .elapsed()
            .map(|d| format!(" ({:.3}s)", d.as_secs_f64()))
            .unwrap_or_default(),
    );

    if failed > 0 {
        eprintln!("\nFailed tests:");
        for record in session.failures() {
            eprintln!("  - {}", record.line);
        }
    }
}

fn print_record(stdout: &mut StandardStream, record: &Rc<Record>) {
    let color = match record.outcome {
        Outcome::Pass => Color::Green,
        Outcome::Fail => Color::Red,
    };
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(color)));
    println!("{}", record.line);
    let _ = stdout.reset();
}

#[derive(Serialize)]
struct Summary<'a> {
    total: usize,
    passed: usize,
    failed: usize,
    elapsed_ms: Option<f64>,
    results: &'a crate::collection::Collection<Rc<Record>>,
}

/// Renders the full session (counts, timing, every record) as JSON.
pub fn summary_json(session: &Session) -> serde_json::Result<String> {
    let (passed, failed) = session.tally();
    let summary = Summary {
        total: session.results().count(),
        passed,
        failed,
        elapsed_ms: session.elapsed().map(|d| d.as_secs_f64() * 1000.0),
        results: session.results(),
    };
    serde_json::to_string_pretty(&summary)
}
