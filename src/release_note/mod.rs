//! Release note assembly.
//!
//! Pure formatting over an already computed [`Classification`] and
//! [`VersionDecision`]. Nothing here touches git or the terminal.

pub mod summarizer;

pub use summarizer::{PlaceholderSummarizer, Summarizer, SUMMARY_INSTRUCTIONS};

use crate::domain::{CategoryCounts, Classification, CommitDigest, VersionDecision};

/// Everything rendered for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNote {
    /// Proposed tag name
    pub version: String,
    /// Commit totals over raw categories
    pub stats: String,
    /// Merged commit buckets for the summarizer
    pub digest: CommitDigest,
    /// `Suggested version: ...` line
    pub suggestion: String,
    /// Annotated tag message
    pub message: String,
}

/// Renders the stats line from raw counts.
///
/// Categories are listed in enumeration order and only when non-zero; the
/// parenthesized list is left out entirely when nothing was classified.
pub fn stats_line(counts: &CategoryCounts) -> String {
    let total = counts.total();
    let noun = if total == 1 { "commit" } else { "commits" };
    let items: Vec<String> = counts
        .non_zero()
        .map(|(category, count)| format!("{}: {}", category, count))
        .collect();

    if items.is_empty() {
        format!("Stats: {} {}", total, noun)
    } else {
        format!("Stats: {} {} ({})", total, noun, items.join(", "))
    }
}

pub fn suggestion_line(decision: &VersionDecision) -> String {
    format!(
        "Suggested version: {} ({} bump, {})",
        decision.version, decision.bump, decision.reason
    )
}

/// Builds the tag message: headline, blank line, reserved sections, stats.
pub fn compose_message(version: &str, summary: &str, sections: &[String], stats: &str) -> String {
    let mut lines = vec![format!("{} - {}", version, summary), String::new()];
    lines.extend(sections.iter().cloned());
    lines.push(stats.to_string());
    lines.join("\n")
}

/// Assembles the release note from classified commits and the version decision.
pub fn assemble(
    classification: &Classification,
    decision: &VersionDecision,
    summarizer: &dyn Summarizer,
) -> ReleaseNote {
    let digest = classification.digest();
    let stats = stats_line(classification.counts());
    let summary = summarizer.summarize(&digest);
    let message = compose_message(&decision.version, &summary, &[], &stats);

    ReleaseNote {
        version: decision.version.clone(),
        stats,
        digest,
        suggestion: suggestion_line(decision),
        message,
    }
}

impl ReleaseNote {
    /// Command that would create the annotated tag. Printed, never run.
    pub fn tag_command(&self) -> String {
        format!(
            "git tag -a {} -m \"$(cat <<'EOF'\n{}\nEOF\n)\"",
            self.version, self.message
        )
    }

    /// Command that would publish the tag. Printed, never run.
    pub fn push_command(&self, remote: &str) -> String {
        format!("git push {} {}", remote, self.version)
    }
}
