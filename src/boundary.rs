use std::fmt;

use crate::git::CommitRange;

/// Conditions at the edges of the analyzed history.
/// None of these stop the run; they are reported to the user as notices.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryNotice {
    /// No reachable version tag; the whole history is analyzed
    NoTagFound,
    /// The history query failed and is treated as an empty range
    HistoryUnavailable { range: CommitRange, reason: String },
    /// The range holds no commits
    EmptyRange { range: CommitRange },
    /// Prior tag (or the configured initial version when untagged) is not a
    /// bumpable `vX.Y.Z`; the fallback version is proposed
    MalformedVersionTag { tag: String, fallback: String },
}

impl fmt::Display for BoundaryNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryNotice::NoTagFound => {
                write!(f, "No version tag found, analyzing all commits")
            }
            BoundaryNotice::HistoryUnavailable { range, reason } => {
                write!(f, "Could not read commits in {}: {}", range, reason)
            }
            BoundaryNotice::EmptyRange { range } => {
                write!(f, "No commits found in range {}", range)
            }
            BoundaryNotice::MalformedVersionTag { tag, fallback } => {
                write!(
                    f,
                    "Cannot parse tag '{}' as a version, proposing {}",
                    tag, fallback
                )
            }
        }
    }
}
