use crate::config::VersionConfig;
use crate::domain::{BumpType, Category, CategoryCounts, SemanticVersion, VersionDecision};
use crate::error::Result;

pub const FEATURE_REASON: &str = "contains new features";
pub const FIX_REASON: &str = "fixes and improvements";

/// Infers the next version from the prior tag and raw category counts
pub struct VersionAnalyzer {
    config: VersionConfig,
}

impl VersionAnalyzer {
    /// Create a new version analyzer
    pub fn new(config: VersionConfig) -> Self {
        VersionAnalyzer { config }
    }

    /// Decide the next version.
    ///
    /// An explicit version always wins. Otherwise the prior tag (or the
    /// configured initial version) is parsed and bumped: `minor` when any
    /// `feat` commit exists, `patch` otherwise. Below 1.0 a feature bump only
    /// moves the patch component. A prior tag that cannot be parsed or
    /// bumped yields the configured fallback version.
    pub fn infer(
        &self,
        prior_tag: Option<&str>,
        explicit_version: Option<&str>,
        counts: &CategoryCounts,
    ) -> VersionDecision {
        if let Some(version) = explicit_version.filter(|v| !v.is_empty()) {
            return VersionDecision {
                version: version.to_string(),
                bump: BumpType::Patch,
                reason: FIX_REASON.to_string(),
            };
        }

        let current = self.baseline(prior_tag);
        self.bump_from(current, counts).unwrap_or_else(|e| {
            tracing::debug!(tag = current, error = %e, "using fallback version");
            VersionDecision {
                version: self.config.fallback.clone(),
                bump: BumpType::Patch,
                reason: FIX_REASON.to_string(),
            }
        })
    }

    /// Version string the bump starts from: the prior tag, or the configured
    /// initial version when there is none.
    pub fn baseline<'a>(&'a self, prior_tag: Option<&'a str>) -> &'a str {
        prior_tag
            .filter(|t| !t.is_empty())
            .unwrap_or(self.config.initial.as_str())
    }

    /// Parses `current` and bumps it according to `counts`, without any
    /// fallback.
    pub fn bump_from(&self, current: &str, counts: &CategoryCounts) -> Result<VersionDecision> {
        let prior = SemanticVersion::parse(current)?;

        if counts.get(Category::Feat) > 0 {
            let next = if prior.major == 0 {
                prior.bump(BumpType::Patch)?
            } else {
                prior.bump(BumpType::Minor)?
            };
            Ok(VersionDecision {
                version: next.to_tag(),
                bump: BumpType::Minor,
                reason: FEATURE_REASON.to_string(),
            })
        } else {
            Ok(VersionDecision {
                version: prior.bump(BumpType::Patch)?.to_tag(),
                bump: BumpType::Patch,
                reason: FIX_REASON.to_string(),
            })
        }
    }
}

impl Default for VersionAnalyzer {
    fn default() -> Self {
        VersionAnalyzer::new(VersionConfig::default())
    }
}
