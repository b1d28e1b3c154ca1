use crate::error::{ReleaseNoteError, Result};
use crate::git::{CommitRange, History};

#[derive(Debug, Clone)]
struct MockCommit {
    subject: String,
    tags: Vec<String>,
    merge: bool,
}

/// In-memory linear history for testing without actual git operations
///
/// Commits are recorded oldest first; HEAD is the last one added.
#[derive(Debug, Clone, Default)]
pub struct MockRepository {
    commits: Vec<MockCommit>,
    history_error: Option<String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a commit on top of HEAD
    pub fn add_commit(&mut self, subject: impl Into<String>) -> &mut Self {
        self.commits.push(MockCommit {
            subject: subject.into(),
            tags: Vec::new(),
            merge: false,
        });
        self
    }

    /// Append a merge commit on top of HEAD
    pub fn add_merge(&mut self, subject: impl Into<String>) -> &mut Self {
        self.commits.push(MockCommit {
            subject: subject.into(),
            tags: Vec::new(),
            merge: true,
        });
        self
    }

    /// Tag the current HEAD commit
    pub fn tag_head(&mut self, name: impl Into<String>) -> &mut Self {
        if let Some(head) = self.commits.last_mut() {
            head.tags.push(name.into());
        }
        self
    }

    /// Make every subject query fail with the given message
    pub fn fail_history(&mut self, message: impl Into<String>) -> &mut Self {
        self.history_error = Some(message.into());
        self
    }
}

impl History for MockRepository {
    fn list_subjects(&self, range: &CommitRange) -> Result<Vec<String>> {
        if let Some(message) = &self.history_error {
            return Err(git2::Error::from_str(message).into());
        }

        let start = match range {
            CommitRange::All => 0,
            CommitRange::Since(tag) => {
                let position = self
                    .commits
                    .iter()
                    .rposition(|c| c.tags.iter().any(|t| t == tag))
                    .ok_or_else(|| {
                        ReleaseNoteError::Git(git2::Error::from_str(&format!(
                            "revspec '{}' not found",
                            tag
                        )))
                    })?;
                position + 1
            }
        };

        Ok(self.commits[start..]
            .iter()
            .rev()
            .filter(|c| !c.merge)
            .map(|c| c.subject.clone())
            .collect())
    }

    fn latest_tag(&self) -> Result<Option<String>> {
        Ok(self
            .commits
            .iter()
            .rev()
            .find_map(|c| c.tags.last().cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MockRepository {
        let mut repo = MockRepository::new();
        repo.add_commit("chore: init")
            .tag_head("v0.1.0")
            .add_commit("feat: add login")
            .add_merge("Merge branch 'dev'")
            .add_commit("fix: crash");
        repo
    }

    #[test]
    fn test_mock_latest_tag() {
        assert_eq!(sample().latest_tag().unwrap(), Some("v0.1.0".to_string()));
        assert_eq!(MockRepository::new().latest_tag().unwrap(), None);
    }

    #[test]
    fn test_mock_subjects_since_tag_newest_first() {
        let subjects = sample()
            .list_subjects(&CommitRange::Since("v0.1.0".to_string()))
            .unwrap();
        assert_eq!(subjects, vec!["fix: crash", "feat: add login"]);
    }

    #[test]
    fn test_mock_subjects_all() {
        let subjects = sample().list_subjects(&CommitRange::All).unwrap();
        assert_eq!(subjects.len(), 3);
        assert_eq!(subjects.last().map(String::as_str), Some("chore: init"));
    }

    #[test]
    fn test_mock_unknown_tag_fails() {
        let result = sample().list_subjects(&CommitRange::Since("v9.9.9".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_mock_history_failure() {
        let mut repo = sample();
        repo.fail_history("object not found");
        assert!(repo.list_subjects(&CommitRange::All).is_err());
    }
}
