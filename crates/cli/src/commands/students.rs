//! Students command implementation
//!
//! This module implements the `classwork students` command, which checks the
//! demo roster and prints the honor-roll status and validation outcome of
//! every record in insertion order.

use std::io::{self, Write};

use anyhow::{Context, Result};
use classwork_roster::{evaluate, seed_students, StudentReport, StudentValidator};
use tracing::debug;

/// Arguments for the students command
pub struct StudentsArgs {
    /// Emit one JSON object per student instead of text lines
    pub json: bool,
}

/// Execute the students command
pub fn execute_students_command(args: StudentsArgs) -> Result<()> {
    let students = seed_students();
    debug!(count = students.len(), "Evaluating student roster");

    let reports = evaluate(&students, &StudentValidator::new());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_reports(&reports, args.json, &mut out)
}

/// Write reports in text or JSON-lines form
pub fn write_reports<W: Write>(reports: &[StudentReport], json: bool, out: &mut W) -> Result<()> {
    for report in reports {
        if json {
            let line = serde_json::to_string(report)
                .with_context(|| format!("Failed to encode report {}", report.index))?;
            writeln!(out, "{}", line)?;
        } else {
            writeln!(out, "{}", report)?;
        }
    }

    out.flush().context("Failed to flush output")?;
    Ok(())
}
