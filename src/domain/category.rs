use std::fmt;

/// Commit intent declared by a conventional-commit type token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Feat,
    Fix,
    Style,
    Refactor,
    Perf,
    Docs,
    Test,
    Chore,
    Build,
}

impl Category {
    /// Every category in enumeration order.
    pub const ALL: [Category; 9] = [
        Category::Feat,
        Category::Fix,
        Category::Style,
        Category::Refactor,
        Category::Perf,
        Category::Docs,
        Category::Test,
        Category::Chore,
        Category::Build,
    ];

    /// Lower-case type token, as written in commit subjects.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Feat => "feat",
            Category::Fix => "fix",
            Category::Style => "style",
            Category::Refactor => "refactor",
            Category::Perf => "perf",
            Category::Docs => "docs",
            Category::Test => "test",
            Category::Chore => "chore",
            Category::Build => "build",
        }
    }

    /// Matches a type token case-insensitively.
    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.to_ascii_lowercase();
        Category::ALL.into_iter().find(|c| c.as_str() == token)
    }

    /// Bucket this category is reported under in the merged view.
    ///
    /// `perf` folds into `refactor` and `build` into `chore`.
    pub fn report_bucket(self) -> Self {
        match self {
            Category::Perf => Category::Refactor,
            Category::Build => Category::Chore,
            other => other,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw per-category commit counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    counts: [usize; 9],
}

impl CategoryCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, category: Category) {
        self.counts[category.index()] += 1;
    }

    pub fn get(&self, category: Category) -> usize {
        self.counts[category.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Categories with at least one commit, in enumeration order.
    pub fn non_zero(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::ALL
            .into_iter()
            .map(|c| (c, self.get(c)))
            .filter(|(_, n)| *n > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token_is_case_insensitive() {
        assert_eq!(Category::from_token("FEAT"), Some(Category::Feat));
        assert_eq!(Category::from_token("Docs"), Some(Category::Docs));
        assert_eq!(Category::from_token("ci"), None);
        assert_eq!(Category::from_token("feature"), None);
    }

    #[test]
    fn test_report_bucket_merges_perf_and_build() {
        assert_eq!(Category::Perf.report_bucket(), Category::Refactor);
        assert_eq!(Category::Build.report_bucket(), Category::Chore);
        assert_eq!(Category::Fix.report_bucket(), Category::Fix);
    }

    #[test]
    fn test_counts_start_at_zero() {
        let counts = CategoryCounts::new();
        assert!(Category::ALL.iter().all(|c| counts.get(*c) == 0));
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.non_zero().count(), 0);
    }

    #[test]
    fn test_non_zero_follows_enumeration_order() {
        let mut counts = CategoryCounts::new();
        counts.increment(Category::Build);
        counts.increment(Category::Feat);
        counts.increment(Category::Feat);
        counts.increment(Category::Perf);

        let listed: Vec<_> = counts.non_zero().collect();
        assert_eq!(
            listed,
            vec![
                (Category::Feat, 2),
                (Category::Perf, 1),
                (Category::Build, 1)
            ]
        );
        assert_eq!(counts.total(), 4);
    }
}
