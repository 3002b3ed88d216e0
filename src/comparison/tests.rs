use super::*;
use crate::{
    stats::ProfileStats,
    test_helpers::{account, repo},
};

fn metrics(
    followers: u64,
    total_stars: u64,
    public_repos: u64,
    following: u64,
    distinct_languages: u64,
) -> ContenderMetrics {
    ContenderMetrics { followers, total_stars, public_repos, following, distinct_languages }
}

#[test]
fn test_score_split_metrics_is_a_tie() {
    let a = metrics(100, 50, 10, 5, 3);
    let b = metrics(80, 60, 10, 5, 3);

    let comparison = Comparison::score(&a, &b);

    assert_eq!(comparison.score_a, 3);
    assert_eq!(comparison.score_b, 3);
    assert_eq!(comparison.verdict(), Verdict::Tie);
    assert_eq!(comparison.metrics[0].leader(), Some(Side::A));
    assert_eq!(comparison.metrics[1].leader(), Some(Side::B));
    assert!(comparison.metrics[2..].iter().all(|m| m.leader().is_none()));
}

#[test]
fn test_score_uses_weights() {
    let a = metrics(0, 0, 11, 6, 4);
    let b = metrics(1, 0, 10, 5, 3);

    let comparison = Comparison::score(&a, &b);

    assert_eq!(comparison.score_a, 4);
    assert_eq!(comparison.score_b, 3);
    assert_eq!(comparison.verdict(), Verdict::Leads(Side::A));
}

#[test]
fn test_score_b_leads() {
    let comparison = Comparison::score(&metrics(0, 0, 0, 0, 0), &metrics(1, 1, 1, 1, 1));

    assert_eq!(comparison.score_a, 0);
    assert_eq!(comparison.score_b, 10);
    assert_eq!(comparison.verdict(), Verdict::Leads(Side::B));
    assert_eq!(comparison.verdict_text("alice", "bob"), "bob leads");
}

#[test]
fn test_metrics_are_fixed_and_ordered() {
    let comparison = Comparison::score(&metrics(0, 0, 0, 0, 0), &metrics(0, 0, 0, 0, 0));

    let summary: Vec<(&str, u32)> =
        comparison.metrics.iter().map(|m| (m.label, m.weight)).collect();

    assert_eq!(
        summary,
        vec![
            ("Followers", 3),
            ("Total Stars", 3),
            ("Public Repos", 2),
            ("Following", 1),
            ("Language Diversity", 1),
        ]
    );
    assert_eq!(comparison.verdict_text("alice", "bob"), "It's a tie");
}

#[test]
fn test_bar_share() {
    assert_eq!(bar_share(1, 1), BarShare { a: 50, b: 50 });
    assert_eq!(bar_share(1, 2), BarShare { a: 33, b: 67 });
    assert_eq!(bar_share(2, 1), BarShare { a: 67, b: 33 });
    assert_eq!(bar_share(1, 7), BarShare { a: 13, b: 87 });
    assert_eq!(bar_share(5, 0), BarShare { a: 100, b: 0 });
}

#[test]
fn test_bar_share_zero_total() {
    assert_eq!(bar_share(0, 0), BarShare { a: 0, b: 100 });
}

#[test]
fn test_bar_share_large_values() {
    assert_eq!(bar_share(u64::MAX, u64::MAX), BarShare { a: 50, b: 50 });
}

#[test]
fn test_narrative() {
    let comparison = Comparison::score(&metrics(1500, 50, 10, 5, 3), &metrics(80, 60, 10, 5, 3));

    let lines = comparison.narrative("alice", "bob");

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "✅ alice leads in Followers (1,500 vs 80).");
    assert_eq!(lines[1], "✅ bob leads in Total Stars (60 vs 50).");
    assert_eq!(lines[2], "➖ Tie in Public Repos (10 vs 10).");
}

#[test]
fn test_contender_metrics_from_account_and_stats() {
    let acct = account("alice", 12, 340, 7);
    let repos = vec![repo("a", Some("Rust"), 4), repo("b", Some("Go"), 6), repo("c", None, 0)];
    let stats = ProfileStats::from_repositories(&repos, 8, 10);

    let contender = ContenderMetrics::new(&acct, &stats);

    assert_eq!(contender, metrics(340, 10, 12, 7, 2));
}
