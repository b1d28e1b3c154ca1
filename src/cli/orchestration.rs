//! Main workflow orchestration logic
//!
//! Runs one analysis: resolve the range, read subjects, classify, infer the
//! version and assemble the release note. Printing is left to the caller so
//! the workflow can be driven programmatically and tested against
//! [`MockRepository`](crate::git::MockRepository).

use crate::analyzer::VersionAnalyzer;
use crate::boundary::BoundaryNotice;
use crate::config::Config;
use crate::domain::classify;
use crate::git::{CommitRange, History};
use crate::release_note::{assemble, PlaceholderSummarizer, ReleaseNote, Summarizer};

/// Arguments for the release note workflow
///
/// Mirrors the CLI positional arguments without depending on clap.
/// Empty strings are treated like absent values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunArgs {
    /// Lower boundary tag; when absent the latest reachable tag is used
    pub from_tag: Option<String>,

    /// Version to propose instead of the inferred one
    pub target_version: Option<String>,
}

/// Result of one workflow run
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    /// Range that was analyzed
    pub range: CommitRange,

    /// Non-fatal conditions met along the way, in order
    pub notices: Vec<BoundaryNotice>,

    /// The release note, absent when the range held no commits
    pub note: Option<ReleaseNote>,
}

/// Runs the workflow with the configured placeholder summary.
pub fn run<H: History>(args: &RunArgs, config: &Config, history: &H) -> RunOutcome {
    let summarizer = PlaceholderSummarizer::new(config.output.summary_placeholder.clone());
    run_with_summarizer(args, config, history, &summarizer)
}

/// Runs the workflow with a caller-supplied summarizer.
///
/// Every failure is absorbed into a [`BoundaryNotice`]:
/// 1. Resolve the prior tag (explicit or latest reachable)
/// 2. Read subjects in `tag..HEAD`, or all history without a tag
/// 3. Stop with a notice when the query fails or yields nothing
/// 4. Classify, infer the next version and assemble the note
pub fn run_with_summarizer<H: History>(
    args: &RunArgs,
    config: &Config,
    history: &H,
    summarizer: &dyn Summarizer,
) -> RunOutcome {
    let mut notices = Vec::new();

    let prior_tag = match args.from_tag.as_deref().filter(|t| !t.is_empty()) {
        Some(tag) => Some(tag.to_string()),
        None => history.latest_tag().unwrap_or_else(|e| {
            tracing::debug!(error = %e, "latest tag lookup failed");
            None
        }),
    };

    let range = CommitRange::from_boundary(prior_tag.as_deref());
    if range == CommitRange::All {
        notices.push(BoundaryNotice::NoTagFound);
    }

    let subjects = match history.list_subjects(&range) {
        Ok(subjects) => subjects,
        Err(e) => {
            notices.push(BoundaryNotice::HistoryUnavailable {
                range: range.clone(),
                reason: e.to_string(),
            });
            return RunOutcome {
                range,
                notices,
                note: None,
            };
        }
    };

    if subjects.is_empty() {
        notices.push(BoundaryNotice::EmptyRange {
            range: range.clone(),
        });
        return RunOutcome {
            range,
            notices,
            note: None,
        };
    }

    let classification = classify(&subjects);
    tracing::debug!(
        subjects = subjects.len(),
        classified = classification.total(),
        "classified commits"
    );

    let analyzer = VersionAnalyzer::new(config.version.clone());

    // Covers the configured initial version too when there is no prior tag
    let target_version = args.target_version.as_deref().filter(|v| !v.is_empty());
    if target_version.is_none() {
        let baseline = analyzer.baseline(prior_tag.as_deref());
        if analyzer
            .bump_from(baseline, classification.counts())
            .is_err()
        {
            notices.push(BoundaryNotice::MalformedVersionTag {
                tag: baseline.to_string(),
                fallback: config.version.fallback.clone(),
            });
        }
    }

    let decision = analyzer.infer(prior_tag.as_deref(), target_version, classification.counts());
    let note = assemble(&classification, &decision, summarizer);

    RunOutcome {
        range,
        notices,
        note: Some(note),
    }
}
