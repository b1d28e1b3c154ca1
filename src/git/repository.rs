use crate::error::Result;
use crate::git::{CommitRange, History};
use git2::{
    DescribeFormatOptions, DescribeOptions, ErrorClass, ErrorCode, Repository as Git2Repo, Sort,
};
use std::path::Path;

/// Wrapper around git2::Repository implementing [History]
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl History for Git2Repository {
    fn list_subjects(&self, range: &CommitRange) -> Result<Vec<String>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;

        match range {
            CommitRange::Since(tag) => {
                revwalk.push_head()?;
                let boundary = self.repo.revparse_single(tag)?.peel_to_commit()?;
                revwalk.hide(boundary.id())?;
            }
            CommitRange::All => {
                for reference in self.repo.references()?.flatten() {
                    // Refs that do not lead to a commit (e.g. tagged blobs) are skipped
                    if let Ok(commit) = reference.peel_to_commit() {
                        revwalk.push(commit.id())?;
                    }
                }
                if self.repo.head().is_ok() {
                    revwalk.push_head()?;
                }
            }
        }

        let mut subjects = Vec::new();

        for oid_result in revwalk {
            let commit = self.repo.find_commit(oid_result?)?;

            if commit.parent_count() > 1 {
                continue;
            }

            let subject = commit.summary().unwrap_or_default().trim();
            if !subject.is_empty() {
                subjects.push(subject.to_string());
            }
        }

        tracing::debug!(%range, count = subjects.len(), "listed commit subjects");
        Ok(subjects)
    }

    fn latest_tag(&self) -> Result<Option<String>> {
        let mut describe_options = DescribeOptions::new();
        describe_options.describe_tags();

        let describe = match self.repo.describe(&describe_options) {
            Ok(describe) => describe,
            // libgit2 reports "no tags at all" as a generic describe error
            Err(e)
                if e.class() == ErrorClass::Describe
                    || matches!(e.code(), ErrorCode::NotFound | ErrorCode::UnbornBranch) =>
            {
                return Ok(None)
            }
            Err(e) => return Err(e.into()),
        };

        let mut format_options = DescribeFormatOptions::new();
        format_options.abbreviated_size(0);

        Ok(Some(describe.format(Some(&format_options))?))
    }
}
