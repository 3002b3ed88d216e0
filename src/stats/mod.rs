//! Pure reductions over a repository listing.
#[cfg(test)]
mod tests;

use std::collections::HashMap;

use serde::Serialize;

use crate::github::Repository;

/// Languages shown in the distribution chart.
pub const DEFAULT_TOP_LANGUAGES: usize = 8;
/// Repositories shown in the stars chart.
pub const DEFAULT_TOP_REPOSITORIES: usize = 10;
/// Chart labels longer than this many characters are truncated.
pub const LABEL_MAX_CHARS: usize = 15;

/// Number of repositories using a language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageCount {
    /// Language name as reported by GitHub.
    pub language: String,
    /// Repositories whose primary language it is.
    pub repositories: usize,
}

/// A repository ranked by stars, with its chart label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StarredRepository {
    /// Full repository name.
    pub name: String,
    /// Name shortened for chart labels.
    pub label: String,
    /// Number of stars.
    pub stars: u64,
    /// URL of the repository page.
    pub html_url: String,
}

/// Everything the dashboard derives from one account's repositories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileStats {
    /// Stars over all fetched repositories.
    pub total_stars: u64,
    /// Number of distinct languages.
    pub distinct_languages: usize,
    /// Most used languages, most used first.
    pub top_languages: Vec<LanguageCount>,
    /// Most starred repositories, most starred first.
    pub top_starred: Vec<StarredRepository>,
}

impl ProfileStats {
    /// Derives all statistics, keeping the top `top_languages_n` languages and
    /// `top_repositories_n` repositories.
    pub fn from_repositories(
        repos: &[Repository],
        top_languages_n: usize,
        top_repositories_n: usize,
    ) -> Self {
        Self {
            total_stars: total_stars(repos),
            distinct_languages: distinct_languages(repos),
            top_languages: top_languages(repos, top_languages_n),
            top_starred: top_starred(repos, top_repositories_n)
                .into_iter()
                .map(|repo| StarredRepository {
                    name: repo.name.clone(),
                    label: truncate_label(&repo.name),
                    stars: repo.stargazers_count,
                    html_url: repo.html_url.clone(),
                })
                .collect(),
        }
    }
}

/// Sum of stars over `repos`.
pub fn total_stars(repos: &[Repository]) -> u64 {
    repos.iter().map(|repo| repo.stargazers_count).sum()
}

/// Repository count per non-empty language, in first-seen order.
pub fn language_tally(repos: &[Repository]) -> Vec<LanguageCount> {
    let mut tally: Vec<LanguageCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for language in repos.iter().filter_map(Repository::language) {
        match index.get(language) {
            Some(&i) => tally[i].repositories += 1,
            None => {
                index.insert(language, tally.len());
                tally.push(LanguageCount { language: language.to_string(), repositories: 1 });
            }
        }
    }

    tally
}

/// The `n` most used languages, most used first. Ties keep first-seen order.
pub fn top_languages(repos: &[Repository], n: usize) -> Vec<LanguageCount> {
    let mut tally = language_tally(repos);
    // sort_by is stable
    tally.sort_by(|a, b| b.repositories.cmp(&a.repositories));
    tally.truncate(n);
    tally
}

/// Number of distinct non-empty languages.
pub fn distinct_languages(repos: &[Repository]) -> usize {
    language_tally(repos).len()
}

/// The `n` most starred repositories with at least one star, most starred
/// first. Ties keep listing order.
pub fn top_starred(repos: &[Repository], n: usize) -> Vec<&Repository> {
    let mut starred: Vec<&Repository> =
        repos.iter().filter(|repo| repo.stargazers_count > 0).collect();
    starred.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
    starred.truncate(n);
    starred
}

/// Shortens `name` to [`LABEL_MAX_CHARS`] characters followed by `...`.
pub fn truncate_label(name: &str) -> String {
    if name.chars().count() > LABEL_MAX_CHARS {
        let head: String = name.chars().take(LABEL_MAX_CHARS).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}

/// `part` as a percentage of `total`; zero when `total` is zero.
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 { 0.0 } else { part as f64 * 100.0 / total as f64 }
}
