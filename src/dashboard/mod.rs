//! The search and compare flows behind the dashboard controls.
mod view;

use std::{
    future::Future,
    str::FromStr,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use chrono::Utc;
use thiserror::Error;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

pub use view::{
    EXAMPLE_HANDLES, Mode, SEARCH_FOCUS_PLACEHOLDER, SEARCH_PLACEHOLDER, SuggestionRotation,
    ViewState, search_placeholder,
};

use crate::{
    github::{Account, GithubClient, GithubError, Handle, Repository},
    report::{ComparisonReport, ProfileReport, ProfileSnapshot},
    stats::{DEFAULT_TOP_LANGUAGES, DEFAULT_TOP_REPOSITORIES},
};

/// Shown when a search is started with an empty handle.
pub const SEARCH_VALIDATION_MESSAGE: &str = "Please enter a GitHub username";
/// Shown when a comparison is started without two handles.
pub const COMPARE_VALIDATION_MESSAGE: &str = "Please enter two GitHub usernames to compare";

/// Why a search or comparison produced no report.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The input was rejected before any request was made.
    #[error("{0}")]
    Validation(&'static str),
    /// A request failed.
    #[error(transparent)]
    Github(#[from] GithubError),
    /// A newer action started before this one finished.
    #[error("Request was superseded by a newer one")]
    Superseded,
}

/// Result alias for dashboard actions.
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Identifies one user-triggered action.
#[derive(Debug, Clone)]
struct Action {
    generation: u64,
    token: CancellationToken,
}

/// Runs the search and compare flows and tracks what the page shows.
///
/// Every action takes a new generation and cancels the one before it, so the
/// result of an action that was overtaken is discarded instead of shown.
pub struct Dashboard {
    github_client: Arc<dyn GithubClient>,
    top_languages: usize,
    top_repositories: usize,
    generation: AtomicU64,
    current: Mutex<CancellationToken>,
    view: Mutex<ViewState>,
}

impl Dashboard {
    /// A dashboard with the default chart limits.
    pub fn new(github_client: Arc<dyn GithubClient>) -> Self {
        Self::with_limits(github_client, DEFAULT_TOP_LANGUAGES, DEFAULT_TOP_REPOSITORIES)
    }

    /// A dashboard showing `top_languages` languages and `top_repositories`
    /// repositories in its charts.
    pub fn with_limits(
        github_client: Arc<dyn GithubClient>,
        top_languages: usize,
        top_repositories: usize,
    ) -> Self {
        Self {
            github_client,
            top_languages,
            top_repositories,
            generation: AtomicU64::new(0),
            current: Mutex::new(CancellationToken::new()),
            view: Mutex::new(ViewState::default()),
        }
    }

    /// A copy of the current view state.
    pub async fn view(&self) -> ViewState {
        self.view.lock().await.clone()
    }

    /// Switches between the analyze and compare forms.
    pub async fn set_mode(&self, mode: Mode) {
        self.view.lock().await.activate(mode);
    }

    /// Fetches one account and its repositories.
    pub async fn search(&self, input: &str) -> Result<ProfileReport> {
        let Ok(handle) = Handle::from_str(input) else {
            self.view.lock().await.show_error(SEARCH_VALIDATION_MESSAGE);
            return Err(DashboardError::Validation(SEARCH_VALIDATION_MESSAGE));
        };

        let action = self.begin_action().await;
        self.update_view(&action, ViewState::begin_search).await;
        tracing::debug!("Search #{} for {handle}", action.generation);

        let fetched = self
            .settle(&action, async {
                let account = self.github_client.fetch_account(&handle).await?;
                let repositories = self.github_client.fetch_repositories(&handle).await?;
                Ok((account, repositories))
            })
            .await;

        let result = fetched.map(|(account, repositories)| {
            let snapshot = ProfileSnapshot { account, repositories, fetched_at: Utc::now() };
            ProfileReport::new(snapshot, self.top_languages, self.top_repositories)
        });

        self.apply(&action, &result, ViewState::finish_search).await;
        result
    }

    /// Fetches both accounts and both repository lists concurrently and
    /// scores them. Any single failure fails the whole comparison.
    pub async fn compare(&self, input_a: &str, input_b: &str) -> Result<ComparisonReport> {
        let (Ok(a), Ok(b)) = (Handle::from_str(input_a), Handle::from_str(input_b)) else {
            self.view.lock().await.show_error(COMPARE_VALIDATION_MESSAGE);
            return Err(DashboardError::Validation(COMPARE_VALIDATION_MESSAGE));
        };

        let action = self.begin_action().await;
        self.update_view(&action, ViewState::begin_compare).await;
        tracing::debug!("Compare #{} for {a} vs {b}", action.generation);

        let client = &self.github_client;
        let fetched = self
            .settle(&action, async {
                futures::try_join!(
                    client.fetch_account(&a),
                    client.fetch_account(&b),
                    client.fetch_repositories(&a),
                    client.fetch_repositories(&b),
                )
            })
            .await;

        let result = fetched.map(|(account_a, account_b, repos_a, repos_b)| {
            let fetched_at = Utc::now();
            let report = |account: Account, repositories: Vec<Repository>| {
                ProfileReport::new(
                    ProfileSnapshot { account, repositories, fetched_at },
                    self.top_languages,
                    self.top_repositories,
                )
            };
            ComparisonReport::new(report(account_a, repos_a), report(account_b, repos_b))
        });

        self.apply(&action, &result, ViewState::finish_compare).await;
        result
    }

    /// Starts a new action and cancels the previous one.
    ///
    /// The generation is taken under the token lock so that the newest
    /// generation always owns the installed token.
    async fn begin_action(&self) -> Action {
        let mut current = self.current.lock().await;
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let token = CancellationToken::new();
        std::mem::replace(&mut *current, token.clone()).cancel();
        Action { generation, token }
    }

    /// Runs `update` on the view only while `action` is the newest one.
    async fn update_view(&self, action: &Action, update: impl FnOnce(&mut ViewState)) {
        let mut view = self.view.lock().await;
        if self.is_current(action) {
            update(&mut view);
        }
    }

    fn is_current(&self, action: &Action) -> bool {
        self.generation.load(Ordering::SeqCst) == action.generation
    }

    /// Awaits `fetch` unless the action is cancelled first. Results of an
    /// action that is no longer current are discarded.
    async fn settle<T>(
        &self,
        action: &Action,
        fetch: impl Future<Output = std::result::Result<T, GithubError>>,
    ) -> Result<T> {
        let outcome = tokio::select! {
            _ = action.token.cancelled() => None,
            outcome = fetch => Some(outcome),
        };

        match outcome {
            Some(outcome) if self.is_current(action) => outcome.map_err(|e| {
                if e.is_transient() {
                    tracing::warn!("Action #{} failed: {e:?}", action.generation);
                } else {
                    tracing::debug!("Action #{} failed: {e}", action.generation);
                }
                DashboardError::Github(e)
            }),
            _ => {
                tracing::debug!("Discarding result of superseded action #{}", action.generation);
                Err(DashboardError::Superseded)
            }
        }
    }

    /// Applies the outcome to the view unless the action was superseded.
    async fn apply<T>(
        &self,
        action: &Action,
        result: &Result<T>,
        finish: fn(&mut ViewState, Option<String>),
    ) {
        if matches!(result, Err(DashboardError::Superseded)) {
            return;
        }
        let error = result.as_ref().err().map(ToString::to_string);
        self.update_view(action, |view| finish(view, error)).await;
    }
}
