use crate::error::{ReleaseNoteError, Result};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static VERSION_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v?([0-9]+)\.([0-9]+)\.([0-9]+)").expect("valid regex literal"));

/// Semantic version representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// Text following the numeric triple in the source tag (e.g. `-rc.1`)
    pub marker: String,
}

impl SemanticVersion {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
            marker: String::new(),
        }
    }

    /// Parse version from a tag string (e.g., "v1.2.3" -> 1.2.3)
    ///
    /// Only a lower-case `v` prefix is accepted. Anything after the third
    /// component is kept as the marker.
    pub fn parse(tag: &str) -> Result<Self> {
        let captures = VERSION_TAG.captures(tag).ok_or_else(|| {
            ReleaseNoteError::version(format!(
                "Invalid version format: '{}' - expected vX.Y.Z",
                tag
            ))
        })?;

        let component = |index: usize| -> Result<u64> {
            let text = captures.get(index).map(|m| m.as_str()).unwrap_or_default();
            text.parse::<u64>().map_err(|_| {
                ReleaseNoteError::version(format!("Version component out of range: {}", text))
            })
        };

        let major = component(1)?;
        let minor = component(2)?;
        let patch = component(3)?;
        let consumed = captures.get(0).map(|m| m.end()).unwrap_or_default();

        Ok(SemanticVersion {
            major,
            minor,
            patch,
            marker: tag[consumed..].to_string(),
        })
    }

    /// Bump version according to bump type
    ///
    /// Fails when the bumped component is already `u64::MAX`.
    pub fn bump(&self, bump_type: BumpType) -> Result<Self> {
        let overflow = || {
            ReleaseNoteError::version(format!("Cannot apply {} bump to {}", bump_type, self))
        };

        Ok(match bump_type {
            BumpType::Major => {
                SemanticVersion::new(self.major.checked_add(1).ok_or_else(overflow)?, 0, 0)
            }
            BumpType::Minor => SemanticVersion::new(
                self.major,
                self.minor.checked_add(1).ok_or_else(overflow)?,
                0,
            ),
            BumpType::Patch => SemanticVersion::new(
                self.major,
                self.minor,
                self.patch.checked_add(1).ok_or_else(overflow)?,
            ),
        })
    }

    /// Renders as a `v`-prefixed tag name, without the marker.
    pub fn to_tag(&self) -> String {
        format!("v{}", self)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Version bump type decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpType {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for BumpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BumpType::Major => "major",
            BumpType::Minor => "minor",
            BumpType::Patch => "patch",
        })
    }
}

/// Proposed next version with the reasoning behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionDecision {
    pub version: String,
    pub bump: BumpType,
    pub reason: String,
}
