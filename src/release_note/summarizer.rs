//! Summary extension point.
//!
//! The release message's first line carries a short prose summary. Writing
//! that prose is left to a downstream consumer (a person or a language model)
//! working from the structured [`CommitDigest`]; this crate only defines the
//! seam and ships a placeholder.

use crate::domain::CommitDigest;

/// Guidance printed next to the commit digest for whoever writes the summary.
pub const SUMMARY_INSTRUCTIONS: &[&str] = &[
    "Write a concise release summary from the commit data above:",
    "1. Review each category and group its commits by scope",
    "2. Describe each group in one short line (30 words at most)",
    "3. Merge commits that deliver the same capability into one line",
    "4. Prefer wording a user understands over internal jargon",
    "5. Stay accurate; do not describe changes that are not listed",
];

/// Produces the one-line summary for a release message.
pub trait Summarizer {
    fn summarize(&self, digest: &CommitDigest) -> String;
}

/// Returns a fixed placeholder for a downstream consumer to replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderSummarizer {
    placeholder: String,
}

impl PlaceholderSummarizer {
    pub fn new(placeholder: impl Into<String>) -> Self {
        PlaceholderSummarizer {
            placeholder: placeholder.into(),
        }
    }
}

impl Summarizer for PlaceholderSummarizer {
    fn summarize(&self, _digest: &CommitDigest) -> String {
        self.placeholder.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classify;

    struct ScopeList;

    impl Summarizer for ScopeList {
        fn summarize(&self, digest: &CommitDigest) -> String {
            let scopes: Vec<&str> = digest.feat.iter().map(|c| c.scope.as_str()).collect();
            format!("new: {}", scopes.join(", "))
        }
    }

    #[test]
    fn test_placeholder_ignores_digest() {
        let summarizer = PlaceholderSummarizer::new("[todo]");
        let digest = classify(&["feat(api): add"]).digest();
        assert_eq!(summarizer.summarize(&digest), "[todo]");
        assert_eq!(summarizer.summarize(&CommitDigest::default()), "[todo]");
    }

    #[test]
    fn test_custom_summarizer_reads_digest() {
        let digest = classify(&["feat(api): add", "feat(ui): show"]).digest();
        let summarizer: &dyn Summarizer = &ScopeList;
        assert_eq!(summarizer.summarize(&digest), "new: api, ui");
    }
}
