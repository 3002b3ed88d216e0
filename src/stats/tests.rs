use super::*;
use crate::test_helpers::repo;

#[test]
fn test_total_stars() {
    let repos = vec![repo("a", None, 3), repo("b", Some("Rust"), 0), repo("c", Some("Go"), 39)];
    assert_eq!(total_stars(&repos), 42);
}

#[test]
fn test_total_stars_empty() {
    assert_eq!(total_stars(&[]), 0);
}

#[test]
fn test_top_languages_sorted_and_excludes_missing() {
    let repos = vec![
        repo("a", Some("Go"), 1),
        repo("b", Some("Rust"), 1),
        repo("c", None, 1),
        repo("d", Some("Rust"), 1),
        repo("e", Some(""), 1),
        repo("f", Some("Rust"), 1),
        repo("g", Some("Go"), 1),
        repo("h", Some("C"), 1),
    ];

    let top = top_languages(&repos, DEFAULT_TOP_LANGUAGES);

    assert_eq!(
        top,
        vec![
            LanguageCount { language: "Rust".to_string(), repositories: 3 },
            LanguageCount { language: "Go".to_string(), repositories: 2 },
            LanguageCount { language: "C".to_string(), repositories: 1 },
        ]
    );
}

#[test]
fn test_top_languages_ties_keep_first_seen_order() {
    let repos = vec![
        repo("a", Some("Python"), 0),
        repo("b", Some("Java"), 0),
        repo("c", Some("Ruby"), 0),
        repo("d", Some("Ruby"), 0),
        repo("e", Some("Java"), 0),
    ];

    let names: Vec<String> =
        top_languages(&repos, DEFAULT_TOP_LANGUAGES).into_iter().map(|l| l.language).collect();

    assert_eq!(names, vec!["Java", "Ruby", "Python"]);
}

#[test]
fn test_top_languages_truncates_to_eight() {
    let languages = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"];
    let repos: Vec<_> =
        languages.iter().enumerate().map(|(i, l)| repo(&i.to_string(), Some(l), 0)).collect();

    let top = top_languages(&repos, DEFAULT_TOP_LANGUAGES);

    assert_eq!(top.len(), 8);
    assert_eq!(top[0].language, "A");
    assert_eq!(top[7].language, "H");
}

#[test]
fn test_distinct_languages() {
    let repos = vec![
        repo("a", Some("Go"), 0),
        repo("b", Some("Go"), 0),
        repo("c", None, 0),
        repo("d", Some("Rust"), 0),
    ];
    assert_eq!(distinct_languages(&repos), 2);
    assert_eq!(distinct_languages(&[]), 0);
}

#[test]
fn test_top_starred_filters_and_sorts() {
    let repos = vec![
        repo("zero", None, 0),
        repo("small", None, 5),
        repo("big", None, 500),
        repo("mid", None, 50),
    ];

    let names: Vec<&str> = top_starred(&repos, DEFAULT_TOP_REPOSITORIES)
        .into_iter()
        .map(|r| r.name.as_str())
        .collect();

    assert_eq!(names, vec!["big", "mid", "small"]);
}

#[test]
fn test_top_starred_truncates_to_ten() {
    let repos: Vec<_> = (1..=25).map(|i| repo(&format!("r{i}"), None, i)).collect();

    let top = top_starred(&repos, DEFAULT_TOP_REPOSITORIES);

    assert_eq!(top.len(), 10);
    assert_eq!(top[0].stargazers_count, 25);
    assert_eq!(top[9].stargazers_count, 16);
    assert!(top.windows(2).all(|w| w[0].stargazers_count >= w[1].stargazers_count));
}

#[test]
fn test_truncate_label() {
    assert_eq!(truncate_label("abcdefghijklmnopqrst"), "abcdefghijklmno...");
    assert_eq!(truncate_label("exactly-15-char"), "exactly-15-char");
    assert_eq!(truncate_label("short"), "short");
    assert_eq!(truncate_label(&"ä".repeat(18)), format!("{}...", "ä".repeat(15)));
}

#[test]
fn test_percentage() {
    assert_eq!(percentage(0, 0), 0.0);
    assert_eq!(percentage(1, 4), 25.0);
}

#[test]
fn test_profile_stats_from_repositories() {
    let repos = vec![
        repo("a-very-long-repository-name", Some("Rust"), 10),
        repo("b", Some("Rust"), 0),
        repo("c", Some("Go"), 2),
    ];

    let stats = ProfileStats::from_repositories(&repos, 8, 10);

    assert_eq!(stats.total_stars, 12);
    assert_eq!(stats.distinct_languages, 2);
    assert_eq!(stats.top_languages.len(), 2);
    assert_eq!(stats.top_starred.len(), 2);
    assert_eq!(stats.top_starred[0].label, "a-very-long-rep...");
    assert_eq!(stats.top_starred[0].name, "a-very-long-repository-name");
}
