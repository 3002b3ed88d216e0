//! HTML fragments for the profile and comparison views.
use crate::{
    colors::language_color,
    comparison::{ComparisonMetric, MetricKey},
    format::{format_count, html_escape},
    github::{Account, Repository},
    report::{ComparisonReport, ProfileReport},
};

use super::registry::ChartSlot;

const NO_BIO: &str = "No bio available";
const NO_DESCRIPTION: &str = "No description available";

/// Avatar, name, bio and counters of a single profile.
pub fn render_profile_card(report: &ProfileReport) -> String {
    let account = report.account();
    format!(
        r#"<section class="profile-card" id="userProfile">
  <img class="avatar" id="userAvatar" src="{avatar}" alt="{name}">
  <div class="profile-info">
    <h2 id="userName">{name}</h2>
    <p id="userBio">{bio}</p>
    <a id="profileLink" href="{url}" target="_blank" rel="noopener">View on GitHub</a>
  </div>
  <div class="stats">
{repos}{followers}{following}{stars}  </div>
</section>
"#,
        avatar = html_escape(&account.avatar_url),
        name = html_escape(account.display_name()),
        bio = html_escape(account.bio().unwrap_or(NO_BIO)),
        url = html_escape(&account.html_url),
        repos = render_stat("publicRepos", "Public Repos", account.public_repos),
        followers = render_stat("followers", "Followers", account.followers),
        following = render_stat("following", "Following", account.following),
        stars = render_stat("totalStars", "Total Stars", report.stats.total_stars),
    )
}

fn render_stat(id: &str, label: &str, value: u64) -> String {
    format!(
        "    <div class=\"stat\"><span class=\"stat-value\" id=\"{id}\">{}</span><span class=\"stat-label\">{label}</span></div>\n",
        format_count(value)
    )
}

/// Cards for the first `limit` repositories.
pub fn render_repository_list(repos: &[Repository], limit: usize) -> String {
    let items: String = repos.iter().take(limit).map(render_repository).collect();
    format!("<section class=\"repos-card\">\n<div id=\"repositoriesList\">\n{items}</div>\n</section>\n")
}

fn render_repository(repo: &Repository) -> String {
    let language = repo
        .language()
        .map(|lang| {
            format!(
                "<div class=\"repo-stat\"><span class=\"language-dot\" style=\"background-color: {}\"></span>{}</div>",
                language_color(lang),
                html_escape(lang)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<a class="repo-item" href="{url}" target="_blank" rel="noopener">
  <div class="repo-name">{name}</div>
  <div class="repo-description">{description}</div>
  <div class="repo-stats">{language}<div class="repo-stat">★ {stars}</div><div class="repo-stat">⑂ {forks}</div><div class="repo-stat">👁 {watchers}</div></div>
</a>
"#,
        url = html_escape(&repo.html_url),
        name = html_escape(&repo.name),
        description = html_escape(repo.description().unwrap_or(NO_DESCRIPTION)),
        stars = repo.stargazers_count,
        forks = repo.forks_count,
        watchers = repo.watchers_count,
    )
}

/// Canvas elements for the given chart slots.
pub fn render_chart_canvases(slots: &[ChartSlot]) -> String {
    slots
        .iter()
        .map(|slot| {
            format!(
                "<div class=\"chart-card\"><canvas id=\"{}\"></canvas></div>\n",
                slot.canvas_id()
            )
        })
        .collect()
}

/// One side of the comparison view.
pub fn render_compare_card(account: &Account, total_stars: u64, suffix: char) -> String {
    format!(
        r#"<div class="compare-card">
  <img class="avatar" id="compareAvatar{suffix}" src="{avatar}" alt="{name}">
  <h3 id="compareName{suffix}">{name}</h3>
  <p id="compareBio{suffix}">{bio}</p>
  <a id="compareLink{suffix}" href="{url}" target="_blank" rel="noopener">View on GitHub</a>
  <div class="stats">
    <div class="stat"><span id="repos{suffix}">{repos}</span> repos</div>
    <div class="stat"><span id="followers{suffix}">{followers}</span> followers</div>
    <div class="stat"><span id="following{suffix}">{following}</span> following</div>
    <div class="stat"><span id="stars{suffix}">{stars}</span> stars</div>
  </div>
</div>
"#,
        avatar = html_escape(&account.avatar_url),
        name = html_escape(account.display_name()),
        bio = html_escape(account.bio().unwrap_or(NO_BIO)),
        url = html_escape(&account.html_url),
        repos = format_count(account.public_repos),
        followers = format_count(account.followers),
        following = format_count(account.following),
        stars = format_count(total_stars),
    )
}

fn metric_icon(key: MetricKey) -> &'static str {
    match key {
        MetricKey::Followers => r#"<i class="fas fa-users"></i>"#,
        MetricKey::Stars => r#"<i class="fas fa-star"></i>"#,
        MetricKey::PublicRepos => r#"<i class="fas fa-code-branch"></i>"#,
        MetricKey::Following => r#"<i class="fas fa-user-plus"></i>"#,
        MetricKey::LanguageDiversity => r#"<i class="fas fa-code"></i>"#,
    }
}

fn render_insight_card(metric: &ComparisonMetric, name_a: &str, name_b: &str) -> String {
    let share = metric.bar_share();
    format!(
        r#"<div class="insight-card">
  <div class="insight-title">{icon}<span>{label}</span></div>
  <div class="metric-row"><span class="metric-badge"><span class="legend-dot dot-a"></span>{name_a}</span><span>{a}</span></div>
  <div class="bar" aria-hidden="true"><div class="bar-fill-a" style="width:{pa}%"></div><div class="bar-fill-b" style="width:{pb}%"></div></div>
  <div class="metric-footer"><span class="metric-badge"><span class="legend-dot dot-b"></span>{name_b}</span><span>{b}</span></div>
</div>
"#,
        icon = metric_icon(metric.key),
        label = metric.label,
        a = format_count(metric.a),
        b = format_count(metric.b),
        pa = share.a,
        pb = share.b,
    )
}

/// "Who's ahead and why": winner pill, legend, and one card per metric.
pub fn render_comparison_summary(report: &ComparisonReport) -> String {
    let name_a = html_escape(report.a.account().display_name());
    let name_b = html_escape(report.b.account().display_name());
    let comparison = &report.comparison;

    let cards: String = comparison
        .metrics
        .iter()
        .map(|metric| render_insight_card(metric, &name_a, &name_b))
        .collect();
    let narrative: String = comparison
        .narrative(&name_a, &name_b)
        .into_iter()
        .map(|line| format!("    <li>{line}</li>\n"))
        .collect();

    format!(
        r#"<section id="compareSummary">
  <div class="summary-header">
    <div class="repo-name">Who’s ahead and why</div>
    <div class="winner-pill">{verdict} ({score_a} - {score_b})</div>
  </div>
  <div class="legend-row">
    <span class="legend-item"><span class="legend-dot dot-a"></span>{name_a}</span>
    <span class="legend-item"><span class="legend-dot dot-b"></span>{name_b}</span>
  </div>
  <ul class="narrative">
{narrative}  </ul>
  <div class="insight-grid">
{cards}  </div>
</section>
"#,
        verdict = comparison.verdict_text(&name_a, &name_b),
        score_a = comparison.score_a,
        score_b = comparison.score_b,
    )
}

/// The error banner shown in place of results.
pub fn render_error(message: &str) -> String {
    format!(
        "<div class=\"error-message\" id=\"errorMessage\"><span id=\"errorText\">{}</span></div>\n",
        html_escape(message)
    )
}
