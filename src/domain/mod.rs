//! Domain logic - pure classification and version rules independent of git

pub mod category;
pub mod commit;
pub mod version;

pub use category::{Category, CategoryCounts};
pub use commit::{classify, classify_subject, ClassifiedCommit, Classification, CommitDigest};
pub use version::{BumpType, SemanticVersion, VersionDecision};
