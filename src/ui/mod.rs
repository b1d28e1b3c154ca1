//! Terminal output.
//!
//! Diagnostics (range, notices, commit data, instructions) go to stderr; the
//! release suggestion and commands go to stdout.

pub mod formatter;

use anyhow::Result;
use console::style;

use crate::boundary::BoundaryNotice;
use crate::cli::RunOutcome;
use crate::config::OutputConfig;
use crate::domain::CommitDigest;
use crate::release_note::ReleaseNote;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").for_stderr().red(), message);
}

pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").for_stderr().yellow(), message);
}

pub fn display_notice(notice: &BoundaryNotice) {
    eprintln!("{} {}", style("ℹ").for_stderr().cyan(), notice);
}

pub fn display_commit_data(digest: &CommitDigest) -> Result<()> {
    eprintln!("\n{}", style("=== Commit Data ===").for_stderr().bold());
    eprintln!("{}", digest.to_json()?);
    Ok(())
}

pub fn display_instructions() {
    eprintln!("\n{}\n", formatter::format_instructions());
}

pub fn display_release(note: &ReleaseNote, remote: &str) {
    println!("{}", formatter::format_release(note, remote));
}

/// Prints a complete workflow outcome on both streams.
pub fn display_outcome(outcome: &RunOutcome, output: &OutputConfig) -> Result<()> {
    if let Some(line) = formatter::format_range(&outcome.range) {
        display_status(&line);
    }

    for notice in &outcome.notices {
        display_notice(notice);
    }

    if let Some(note) = &outcome.note {
        display_commit_data(&note.digest)?;
        if output.show_instructions {
            display_instructions();
        }
        display_release(note, &output.remote);
    }

    Ok(())
}
