#![warn(missing_docs)]
//! Analytics dashboard for public GitHub accounts.
//!
//! Fetches an account and its repositories from the GitHub REST API, derives
//! language and star statistics, scores two accounts head to head, and renders
//! the result as a standalone HTML page with Chart.js charts.

/// Animation timing for the counters and the particle backdrop.
pub mod animation;
/// Command-line arguments.
pub mod cli;
/// Language colors and color arithmetic.
pub mod colors;
/// Weighted comparison of two accounts.
pub mod comparison;
/// The configuration for the application.
pub mod config;
/// The search and compare flows with their view state.
pub mod dashboard;
/// Number and text formatting helpers.
pub mod format;
/// The client for interacting with the GitHub API.
pub mod github;
/// Charts, markup and the final page.
pub mod presentation;
/// Fetched data bundled with its derived statistics.
pub mod report;
/// Aggregations over a repository list.
pub mod stats;
#[cfg(test)]
mod test_helpers;

use std::{path::Path, sync::Arc};

use chrono::Utc;
use tokio::io::AsyncWriteExt;

use crate::{
    cli::{Cli, Command},
    config::Config,
    dashboard::{Dashboard, DashboardError, Mode, SuggestionRotation},
    github::DefaultGithubClient,
    presentation::{HtmlChartSurface, Session, html},
};

const PAGE_TITLE: &str = "GitHub Analytics";

/// A finished page and the error it reports, if the action failed.
#[derive(Debug)]
pub struct Rendered {
    /// The complete HTML document.
    pub page: String,
    /// Why no results are shown. The page then carries the error banner.
    pub error: Option<DashboardError>,
}

/// Runs one analyze or compare request and writes the resulting page.
///
/// A failed request still writes a page with the error banner before the
/// error is returned.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let github_client =
        Arc::new(DefaultGithubClient::new(config.github_api_url.clone(), &config.user_agent)?);
    let dashboard =
        Dashboard::with_limits(github_client, config.top_languages, config.top_repositories);

    let rendered = render(&dashboard, &cli.command, config.repositories_shown).await?;
    write_page(cli.command.output().map(|p| p.as_path()), &rendered.page).await?;

    match rendered.error {
        Some(err) => {
            suggest(&err);
            Err(err.into())
        }
        None => Ok(()),
    }
}

/// Runs `command` on `dashboard` and renders the outcome as a page.
pub async fn render(
    dashboard: &Dashboard,
    command: &Command,
    repositories_shown: usize,
) -> serde_json::Result<Rendered> {
    let mut session = Session::new(HtmlChartSurface::default());

    let outcome = match command {
        Command::Analyze { handle, .. } => dashboard.search(handle).await.map(|report| {
            let body =
                presentation::render_profile_view(&mut session, &report, repositories_shown);
            (format!("{} · {PAGE_TITLE}", report.account().display_name()), body)
        }),
        Command::Compare { handle_a, handle_b, .. } => {
            dashboard.set_mode(Mode::Compare).await;
            dashboard.compare(handle_a, handle_b).await.map(|report| {
                let body = presentation::render_comparison_view(&mut session, &report);
                let title = format!(
                    "{} vs {} · {PAGE_TITLE}",
                    report.a.account().display_name(),
                    report.b.account().display_name()
                );
                (title, body)
            })
        }
    };

    let (title, body, error) = match outcome {
        Ok((title, body)) => (title, body, None),
        Err(err) => {
            session.clear();
            (PAGE_TITLE.to_string(), html::render_error(&err.to_string()), Some(err))
        }
    };
    tracing::debug!("Rendered {} charts", session.len());

    let page = presentation::render_page(&title, &body, session.surface(), Utc::now())?;
    Ok(Rendered { page, error })
}

async fn write_page(output: Option<&Path>, page: &str) -> std::io::Result<()> {
    match output {
        Some(path) => {
            tokio::fs::write(path, page).await?;
            tracing::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(page.as_bytes()).await?;
            stdout.flush().await?;
        }
    }
    Ok(())
}

fn suggest(err: &DashboardError) {
    if let DashboardError::Validation(_) = err {
        if let Some(hint) = SuggestionRotation::default().hint() {
            eprintln!("{hint}");
        }
    }
}
