use chrono::{DateTime, Utc};

use crate::{
    comparison::{Comparison, ContenderMetrics},
    github::{Account, Repository},
    stats::ProfileStats,
};

/// Account and repositories as fetched for one query.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSnapshot {
    /// The fetched account.
    pub account: Account,
    /// Up to 100 repositories, most starred first.
    pub repositories: Vec<Repository>,
    /// When the fetch completed.
    pub fetched_at: DateTime<Utc>,
}

/// A snapshot with its derived statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileReport {
    /// The raw data.
    pub snapshot: ProfileSnapshot,
    /// Statistics derived from the repositories.
    pub stats: ProfileStats,
}

impl ProfileReport {
    /// Derives the statistics of `snapshot`.
    pub fn new(snapshot: ProfileSnapshot, top_languages: usize, top_repositories: usize) -> Self {
        let stats = ProfileStats::from_repositories(
            &snapshot.repositories,
            top_languages,
            top_repositories,
        );
        Self { snapshot, stats }
    }

    /// The analyzed account.
    pub fn account(&self) -> &Account {
        &self.snapshot.account
    }

    /// The values this account brings to a comparison.
    pub fn metrics(&self) -> ContenderMetrics {
        ContenderMetrics::new(&self.snapshot.account, &self.stats)
    }
}

/// Two profiles and their head-to-head score.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    /// The first account.
    pub a: ProfileReport,
    /// The second account.
    pub b: ProfileReport,
    /// The head-to-head score.
    pub comparison: Comparison,
}

impl ComparisonReport {
    /// Scores `a` against `b`.
    pub fn new(a: ProfileReport, b: ProfileReport) -> Self {
        let comparison = Comparison::score(&a.metrics(), &b.metrics());
        Self { a, b, comparison }
    }
}
