//! Commit history access
//!
//! This module provides a trait-based abstraction over the read-only git
//! queries git-release-note needs: the latest reachable tag and the subject
//! lines of a commit range.
//!
//! # Overview
//!
//! - [repository::Git2Repository]: a real implementation using the `git2` crate
//! - [mock::MockRepository]: an in-memory implementation for testing
//!
//! Code that analyzes history should depend on the [History] trait so it can
//! be exercised without a repository on disk.
//!
//! ```rust
//! # use git_release_note::git::{CommitRange, History};
//! # fn example<H: History>(repo: &H) -> Result<(), Box<dyn std::error::Error>> {
//! let range = match repo.latest_tag()? {
//!     Some(tag) => CommitRange::Since(tag),
//!     None => CommitRange::All,
//! };
//! for subject in repo.list_subjects(&range)? {
//!     println!("{}", subject);
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use std::fmt;

/// Range of history to analyze
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitRange {
    /// Commits reachable from HEAD but not from the tag (`tag..HEAD`)
    Since(String),
    /// Every commit reachable from any reference
    All,
}

impl CommitRange {
    /// Range starting at an optional lower boundary; `None` or empty means all history.
    pub fn from_boundary(tag: Option<&str>) -> Self {
        match tag.filter(|t| !t.is_empty()) {
            Some(tag) => CommitRange::Since(tag.to_string()),
            None => CommitRange::All,
        }
    }

    pub fn boundary(&self) -> Option<&str> {
        match self {
            CommitRange::Since(tag) => Some(tag),
            CommitRange::All => None,
        }
    }
}

impl fmt::Display for CommitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommitRange::Since(tag) => write!(f, "{}..HEAD", tag),
            CommitRange::All => f.write_str("--all"),
        }
    }
}

/// Read-only history queries
///
/// ## Error Handling
///
/// Methods return [crate::error::Result<T>]. Callers treat a failed subject
/// query as an empty range rather than aborting.
pub trait History {
    /// Subject lines of the non-merge commits in `range`, newest first.
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Subjects, possibly empty
    /// * `Err` - If the boundary cannot be resolved or the walk fails
    fn list_subjects(&self, range: &CommitRange) -> Result<Vec<String>>;

    /// Most recent tag reachable from HEAD.
    ///
    /// # Returns
    /// * `Ok(Some(tag))` - Tag name
    /// * `Ok(None)` - If no tag is reachable
    /// * `Err` - If there's a Git error
    fn latest_tag(&self) -> Result<Option<String>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_from_boundary() {
        assert_eq!(
            CommitRange::from_boundary(Some("v1.0.0")),
            CommitRange::Since("v1.0.0".to_string())
        );
        assert_eq!(CommitRange::from_boundary(Some("")), CommitRange::All);
        assert_eq!(CommitRange::from_boundary(None), CommitRange::All);
    }

    #[test]
    fn test_range_display() {
        assert_eq!(
            CommitRange::Since("v0.2.0".to_string()).to_string(),
            "v0.2.0..HEAD"
        );
        assert_eq!(CommitRange::All.to_string(), "--all");
        assert_eq!(CommitRange::All.boundary(), None);
    }
}
