use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use super::category::{Category, CategoryCounts};
use crate::error::Result;

static MERGE_SUBJECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^Merge (?:pull request|branch)").expect("valid regex literal")
});

static CONVENTIONAL_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(feat|fix|style|refactor|perf|docs|test|chore|build)(?:\(([^)]+)\))?:\s*(.+)")
        .expect("valid regex literal")
});

static TEST_BRANCH_SUBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^Test/").expect("valid regex literal"));

static TRAILING_PR_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(#[0-9]+\)$").expect("valid regex literal"));

static TRAILING_ISSUE_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*#[0-9]+$").expect("valid regex literal"));

/// A commit subject filed under one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedCommit {
    #[serde(skip)]
    pub category: Category,
    /// Parenthesized scope, empty when the subject has none
    pub scope: String,
    /// Description with the trailing issue/PR reference removed
    #[serde(rename = "desc")]
    pub description: String,
    /// Subject line as it came out of history
    pub original: String,
}

/// Returns true for subjects git generates for merges.
pub fn is_merge_subject(subject: &str) -> bool {
    MERGE_SUBJECT.is_match(subject)
}

/// Strips one trailing `(#123)` and then one trailing `#123`.
fn strip_references(description: &str) -> String {
    let without_pr = TRAILING_PR_REF.replace(description, "");
    TRAILING_ISSUE_REF.replace(&without_pr, "").into_owned()
}

/// Classifies a single subject line.
///
/// Returns `None` for merge subjects and for subjects that are neither a
/// conventional commit with a known type nor a `Test/...` subject.
pub fn classify_subject(subject: &str) -> Option<ClassifiedCommit> {
    if is_merge_subject(subject) {
        return None;
    }

    if let Some(captures) = CONVENTIONAL_HEADER.captures(subject) {
        let category = captures
            .get(1)
            .and_then(|m| Category::from_token(m.as_str()))?;
        let scope = captures
            .get(2)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        let description = captures
            .get(3)
            .map(|m| strip_references(m.as_str().trim()))
            .unwrap_or_default();

        return Some(ClassifiedCommit {
            category,
            scope,
            description,
            original: subject.to_string(),
        });
    }

    if TEST_BRANCH_SUBJECT.is_match(subject) {
        return Some(ClassifiedCommit {
            category: Category::Test,
            scope: "test".to_string(),
            description: subject.to_string(),
            original: subject.to_string(),
        });
    }

    None
}

/// Result of classifying a run of subjects.
///
/// Holds the raw buckets and counts. The merged reporting view is derived
/// on demand by [`Classification::digest`] and never replaces the raw one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    commits: Vec<ClassifiedCommit>,
    counts: CategoryCounts,
}

impl Classification {
    /// Raw per-category counts.
    pub fn counts(&self) -> &CategoryCounts {
        &self.counts
    }

    /// Classified commits in input order.
    pub fn commits(&self) -> &[ClassifiedCommit] {
        &self.commits
    }

    /// Raw bucket for one category, in input order.
    pub fn bucket(&self, category: Category) -> impl Iterator<Item = &ClassifiedCommit> {
        self.commits.iter().filter(move |c| c.category == category)
    }

    pub fn total(&self) -> usize {
        self.counts.total()
    }

    /// Builds the merged reporting view.
    pub fn digest(&self) -> CommitDigest {
        let mut digest = CommitDigest::default();
        for category in Category::ALL {
            let target = digest.bucket_mut(category.report_bucket());
            target.extend(self.bucket(category).cloned());
        }
        digest
    }
}

/// Classifies subject lines into raw buckets and counts.
pub fn classify<S: AsRef<str>>(subjects: &[S]) -> Classification {
    let mut classification = Classification::default();

    for subject in subjects {
        let subject = subject.as_ref();
        match classify_subject(subject) {
            Some(commit) => {
                classification.counts.increment(commit.category);
                classification.commits.push(commit);
            }
            None => tracing::debug!(subject, "subject not classified"),
        }
    }

    classification
}

/// Merged view of classified commits handed to summarizers.
///
/// `perf` commits are listed under `refactor` and `build` commits under
/// `chore`. Field order is the serialization order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommitDigest {
    pub feat: Vec<ClassifiedCommit>,
    pub fix: Vec<ClassifiedCommit>,
    pub style: Vec<ClassifiedCommit>,
    pub refactor: Vec<ClassifiedCommit>,
    pub docs: Vec<ClassifiedCommit>,
    pub test: Vec<ClassifiedCommit>,
    pub chore: Vec<ClassifiedCommit>,
}

impl CommitDigest {
    /// Bucket a category is reported under.
    pub fn bucket(&self, category: Category) -> &[ClassifiedCommit] {
        match category.report_bucket() {
            Category::Feat => &self.feat,
            Category::Fix => &self.fix,
            Category::Style => &self.style,
            Category::Docs => &self.docs,
            Category::Test => &self.test,
            Category::Refactor | Category::Perf => &self.refactor,
            Category::Chore | Category::Build => &self.chore,
        }
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Vec<ClassifiedCommit> {
        match category.report_bucket() {
            Category::Feat => &mut self.feat,
            Category::Fix => &mut self.fix,
            Category::Style => &mut self.style,
            Category::Docs => &mut self.docs,
            Category::Test => &mut self.test,
            Category::Refactor | Category::Perf => &mut self.refactor,
            Category::Chore | Category::Build => &mut self.chore,
        }
    }

    pub fn len(&self) -> usize {
        [
            &self.feat,
            &self.fix,
            &self.style,
            &self.refactor,
            &self.docs,
            &self.test,
            &self.chore,
        ]
        .iter()
        .map(|bucket| bucket.len())
        .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pretty-printed JSON for downstream consumers.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_scope_and_pr_reference() {
        let commit = classify_subject("feat(auth): add login (#12)").unwrap();
        assert_eq!(commit.category, Category::Feat);
        assert_eq!(commit.scope, "auth");
        assert_eq!(commit.description, "add login");
        assert_eq!(commit.original, "feat(auth): add login (#12)");
    }

    #[test]
    fn test_parse_without_scope() {
        let commit = classify_subject("fix: crash on start").unwrap();
        assert_eq!(commit.category, Category::Fix);
        assert_eq!(commit.scope, "");
        assert_eq!(commit.description, "crash on start");
    }

    #[test]
    fn test_type_token_is_lowercased() {
        let commit = classify_subject("FIX(Parser): handle tabs").unwrap();
        assert_eq!(commit.category, Category::Fix);
        assert_eq!(commit.scope, "Parser");
    }

    #[test]
    fn test_bare_issue_reference_is_stripped() {
        let commit = classify_subject("docs: describe flags #45").unwrap();
        assert_eq!(commit.description, "describe flags");
    }

    #[test]
    fn test_only_last_pr_reference_is_stripped() {
        let commit = classify_subject("fix: retry upload (#1) (#2)").unwrap();
        assert_eq!(commit.description, "retry upload (#1)");
    }

    #[test]
    fn test_pr_then_issue_reference_both_stripped() {
        let commit = classify_subject("fix: retry upload #7 (#8)").unwrap();
        assert_eq!(commit.description, "retry upload");
    }

    #[test]
    fn test_merge_subjects_are_dropped() {
        assert!(classify_subject("Merge pull request #5 from x/y").is_none());
        assert!(classify_subject("merge branch 'main' into dev").is_none());
        assert!(is_merge_subject("MERGE BRANCH 'x'"));
        assert!(!is_merge_subject("Merged the thing"));
    }

    #[test]
    fn test_unknown_type_is_dropped() {
        assert!(classify_subject("ci: bump runner").is_none());
        assert!(classify_subject("feature: nope").is_none());
        assert!(classify_subject("feat!: breaking").is_none());
        assert!(classify_subject("random commit message").is_none());
    }

    #[test]
    fn test_test_branch_subject_keeps_full_text() {
        let commit = classify_subject("test/login flow (#3)").unwrap();
        assert_eq!(commit.category, Category::Test);
        assert_eq!(commit.scope, "test");
        assert_eq!(commit.description, "test/login flow (#3)");
    }

    #[test]
    fn test_classify_counts_and_drops() {
        let subjects = [
            "feat: add login (#12)",
            "Merge branch 'dev'",
            "perf(db): cache lookups",
            "build: bump toolchain",
            "whatever",
        ];
        let classification = classify(&subjects);

        assert_eq!(classification.total(), 3);
        assert_eq!(classification.commits().len(), 3);
        assert_eq!(classification.counts().get(Category::Feat), 1);
        assert_eq!(classification.counts().get(Category::Perf), 1);
        assert_eq!(classification.counts().get(Category::Build), 1);
        assert_eq!(classification.counts().get(Category::Refactor), 0);
    }

    #[test]
    fn test_digest_merges_without_touching_raw_counts() {
        let subjects = [
            "perf: faster parse",
            "refactor: split module",
            "build: new target",
            "chore: tidy",
        ];
        let classification = classify(&subjects);
        let digest = classification.digest();

        let refactor: Vec<_> = digest.refactor.iter().map(|c| c.description.as_str()).collect();
        assert_eq!(refactor, vec!["split module", "faster parse"]);
        let chore: Vec<_> = digest.chore.iter().map(|c| c.description.as_str()).collect();
        assert_eq!(chore, vec!["tidy", "new target"]);
        assert_eq!(digest.bucket(Category::Perf).len(), 2);
        assert_eq!(digest.len(), 4);

        assert_eq!(classification.counts().get(Category::Perf), 1);
        assert_eq!(classification.counts().get(Category::Refactor), 1);
    }

    #[test]
    fn test_digest_json_shape() {
        let classification = classify(&["fix(ui): align (#9)"]);
        let json: crate::error::Result<String> = classification.digest().to_json();
        let json = json.unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["fix"][0]["scope"], "ui");
        assert_eq!(value["fix"][0]["desc"], "align");
        assert_eq!(value["fix"][0]["original"], "fix(ui): align (#9)");
        assert!(value.get("perf").is_none());
        assert!(value.get("build").is_none());
        assert!(json.find("\"feat\"").unwrap() < json.find("\"chore\"").unwrap());
    }

    #[test]
    fn test_classification_is_idempotent() {
        let subjects = vec![
            "feat: a".to_string(),
            "fix: b".to_string(),
            "Test/c".to_string(),
        ];
        assert_eq!(classify(&subjects), classify(&subjects));
    }
}
