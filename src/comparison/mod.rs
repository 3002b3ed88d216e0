//! Weighted head-to-head scoring of two accounts.
#[cfg(test)]
mod tests;

use serde::Serialize;

use crate::{format::format_count, github::Account, stats::ProfileStats};

/// One of the five fixed comparison metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKey {
    /// Follower count.
    Followers,
    /// Stars summed over the fetched repositories.
    Stars,
    /// Public repository count.
    PublicRepos,
    /// Accounts followed.
    Following,
    /// Number of distinct primary languages.
    LanguageDiversity,
}

impl MetricKey {
    /// All metrics in display order.
    pub const ALL: [MetricKey; 5] = [
        MetricKey::Followers,
        MetricKey::Stars,
        MetricKey::PublicRepos,
        MetricKey::Following,
        MetricKey::LanguageDiversity,
    ];

    /// Display name of the metric.
    pub fn label(self) -> &'static str {
        match self {
            MetricKey::Followers => "Followers",
            MetricKey::Stars => "Total Stars",
            MetricKey::PublicRepos => "Public Repos",
            MetricKey::Following => "Following",
            MetricKey::LanguageDiversity => "Language Diversity",
        }
    }

    /// Points awarded to the side that leads this metric.
    pub fn weight(self) -> u32 {
        match self {
            MetricKey::Followers | MetricKey::Stars => 3,
            MetricKey::PublicRepos => 2,
            MetricKey::Following | MetricKey::LanguageDiversity => 1,
        }
    }
}

/// One of the two compared accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    /// The first account.
    A,
    /// The second account.
    B,
}

/// The raw values one account brings to a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContenderMetrics {
    /// Follower count.
    pub followers: u64,
    /// Stars over the fetched repositories.
    pub total_stars: u64,
    /// Public repository count.
    pub public_repos: u64,
    /// Accounts followed.
    pub following: u64,
    /// Distinct primary languages.
    pub distinct_languages: u64,
}

impl ContenderMetrics {
    /// Collects the metrics of one account.
    pub fn new(account: &Account, stats: &ProfileStats) -> Self {
        Self {
            followers: account.followers,
            total_stars: stats.total_stars,
            public_repos: account.public_repos,
            following: account.following,
            distinct_languages: stats.distinct_languages as u64,
        }
    }

    /// The value this side brings for `key`.
    pub fn value(&self, key: MetricKey) -> u64 {
        match key {
            MetricKey::Followers => self.followers,
            MetricKey::Stars => self.total_stars,
            MetricKey::PublicRepos => self.public_repos,
            MetricKey::Following => self.following,
            MetricKey::LanguageDiversity => self.distinct_languages,
        }
    }
}

/// Split of a comparison bar between the two sides, in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BarShare {
    /// Percent of the bar for side A.
    pub a: u8,
    /// Percent of the bar for side B.
    pub b: u8,
}

/// `round(100 * a / (a + b))` for side A and the remainder for B.
///
/// When both values are zero A gets 0% and B gets 100%.
pub fn bar_share(a: u64, b: u64) -> BarShare {
    let total = u128::from(a) + u128::from(b);
    if total == 0 {
        return BarShare { a: 0, b: 100 };
    }
    // round half up without floating point
    let a_pct = ((200 * u128::from(a) + total) / (2 * total)) as u8;
    BarShare { a: a_pct, b: 100 - a_pct }
}

/// Both sides' values for one metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonMetric {
    /// Which metric this is.
    pub key: MetricKey,
    /// Display name.
    pub label: &'static str,
    /// Value of side A.
    pub a: u64,
    /// Value of side B.
    pub b: u64,
    /// Points the leader earns.
    pub weight: u32,
}

impl ComparisonMetric {
    /// The side with the strictly greater value, `None` on a tie.
    pub fn leader(&self) -> Option<Side> {
        match self.a.cmp(&self.b) {
            std::cmp::Ordering::Greater => Some(Side::A),
            std::cmp::Ordering::Less => Some(Side::B),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// How the comparison bar is split for this metric.
    pub fn bar_share(&self) -> BarShare {
        bar_share(self.a, self.b)
    }
}

/// Overall outcome of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    /// The side with more points.
    Leads(Side),
    /// Equal points.
    Tie,
}

/// A scored comparison of two accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    /// Every metric in display order.
    pub metrics: Vec<ComparisonMetric>,
    /// Points earned by side A.
    pub score_a: u32,
    /// Points earned by side B.
    pub score_b: u32,
}

impl Comparison {
    /// Scores every metric: the strictly greater side earns the metric's
    /// weight, ties earn nothing.
    pub fn score(a: &ContenderMetrics, b: &ContenderMetrics) -> Self {
        let metrics: Vec<ComparisonMetric> = MetricKey::ALL
            .iter()
            .map(|&key| ComparisonMetric {
                key,
                label: key.label(),
                a: a.value(key),
                b: b.value(key),
                weight: key.weight(),
            })
            .collect();

        let (score_a, score_b) =
            metrics.iter().fold((0, 0), |(sa, sb), metric| match metric.leader() {
                Some(Side::A) => (sa + metric.weight, sb),
                Some(Side::B) => (sa, sb + metric.weight),
                None => (sa, sb),
            });

        Self { metrics, score_a, score_b }
    }

    /// Who leads on points.
    pub fn verdict(&self) -> Verdict {
        match self.score_a.cmp(&self.score_b) {
            std::cmp::Ordering::Greater => Verdict::Leads(Side::A),
            std::cmp::Ordering::Less => Verdict::Leads(Side::B),
            std::cmp::Ordering::Equal => Verdict::Tie,
        }
    }

    /// "{name} leads" or "It's a tie".
    pub fn verdict_text(&self, name_a: &str, name_b: &str) -> String {
        match self.verdict() {
            Verdict::Leads(Side::A) => format!("{name_a} leads"),
            Verdict::Leads(Side::B) => format!("{name_b} leads"),
            Verdict::Tie => "It's a tie".to_string(),
        }
    }

    /// One sentence per metric explaining who leads it.
    pub fn narrative(&self, name_a: &str, name_b: &str) -> Vec<String> {
        self.metrics
            .iter()
            .map(|m| match m.leader() {
                Some(Side::A) => format!(
                    "✅ {name_a} leads in {} ({} vs {}).",
                    m.label,
                    format_count(m.a),
                    format_count(m.b)
                ),
                Some(Side::B) => format!(
                    "✅ {name_b} leads in {} ({} vs {}).",
                    m.label,
                    format_count(m.b),
                    format_count(m.a)
                ),
                None => format!(
                    "➖ Tie in {} ({} vs {}).",
                    m.label,
                    format_count(m.a),
                    format_count(m.b)
                ),
            })
            .collect()
    }
}
