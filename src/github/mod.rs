mod handle;
mod models;

use async_trait::async_trait;
use mockall::automock;
use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, HeaderMap, HeaderValue, InvalidHeaderValue, USER_AGENT},
};
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

pub use handle::{EmptyHandle, Handle};
pub use models::{Account, Repository};

/// The listing endpoint never returns more than one page of this size.
pub const MAX_REPOSITORIES: usize = 100;

const GENERIC_FETCH_FAILURE: &str = "Failed to fetch user data. Please try again.";

/// Errors raised while talking to the GitHub API.
///
/// The `Display` text of every variant a request can produce is the message
/// shown to the user.
#[derive(Debug, Error)]
pub enum GithubError {
    /// The API answered 404.
    #[error("User not found. Please check the username and try again.")]
    NotFound,
    /// The API answered 403.
    #[error("API rate limit exceeded. Please try again later.")]
    RateLimited,
    /// Any other non-success status from the account endpoint.
    #[error("{}", GENERIC_FETCH_FAILURE)]
    FetchFailed {
        /// The status the API answered with.
        status: StatusCode,
    },
    /// Any other non-success status from the repository listing.
    #[error("Failed to fetch repositories data")]
    RepositoriesFetchFailed {
        /// The status the API answered with.
        status: StatusCode,
    },
    /// The request never got a response.
    #[error("{}", GENERIC_FETCH_FAILURE)]
    RequestError {
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },
    /// The body was not the expected JSON shape.
    #[error("{}", GENERIC_FETCH_FAILURE)]
    InvalidResponse {
        /// The underlying decode error.
        #[source]
        source: reqwest::Error,
    },
    /// The configured user agent is not a valid header value.
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),
    /// The configured API URL cannot carry path segments.
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl GithubError {
    /// Whether waiting and trying again could succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::RateLimited
                | Self::FetchFailed { .. }
                | Self::RepositoriesFetchFailed { .. }
                | Self::RequestError { .. }
                | Self::InvalidResponse { .. }
        )
    }
}

/// Result alias for GitHub API calls.
pub type Result<T> = std::result::Result<T, GithubError>;

/// Maps an HTTP status to the user-facing error taxonomy.
pub fn check_status(status: StatusCode) -> Result<()> {
    match status {
        s if s.is_success() => Ok(()),
        StatusCode::NOT_FOUND => Err(GithubError::NotFound),
        StatusCode::FORBIDDEN => Err(GithubError::RateLimited),
        status => Err(GithubError::FetchFailed { status }),
    }
}

/// Read-only access to the two endpoints the dashboard needs.
#[automock]
#[async_trait]
pub trait GithubClient: Send + Sync {
    /// Fetch the public profile of `handle`.
    async fn fetch_account(&self, handle: &Handle) -> Result<Account>;

    /// Fetch up to 100 repositories of `handle`, most starred first.
    async fn fetch_repositories(&self, handle: &Handle) -> Result<Vec<Repository>>;
}

/// [`GithubClient`] backed by the public REST API.
#[derive(Clone)]
pub struct DefaultGithubClient {
    client: Client,
    api_url: Url,
}

impl DefaultGithubClient {
    /// Creates a client that sends `user_agent` with every request to `api_url`.
    pub fn new(api_url: Url, user_agent: &str) -> Result<Self> {
        if api_url.cannot_be_a_base() {
            return Err(GithubError::InvalidBaseUrl(api_url.to_string()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(user_agent)?);
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(GithubError::ClientBuild)?;
        tracing::debug!("HTTP client built successfully.");

        Ok(Self { client, api_url })
    }

    /// Appends `segments` to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| GithubError::InvalidBaseUrl(self.api_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a GET, check the status, and decode the JSON body as `T`.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!("GET {url}");

        let resp = self.client.get(url.clone()).send().await.map_err(|e| {
            tracing::warn!("Network error requesting {url}: {e}");
            GithubError::RequestError { source: e }
        })?;

        let status = resp.status();
        if let Err(err) = check_status(status) {
            let text = match resp.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!("Failed to read response text: {e}. Using empty fallback.");
                    String::new()
                }
            };
            tracing::warn!("Non-success HTTP {status} from {url}: {text}");
            return Err(err);
        }

        resp.json::<T>().await.map_err(|e| {
            tracing::error!("Response from {url} did not match the expected shape: {e}");
            GithubError::InvalidResponse { source: e }
        })
    }
}

#[async_trait]
impl GithubClient for DefaultGithubClient {
    async fn fetch_account(&self, handle: &Handle) -> Result<Account> {
        tracing::debug!("Fetching account {handle}");
        let url = self.endpoint(&["users", handle.as_str()])?;
        self.get_json(url).await
    }

    async fn fetch_repositories(&self, handle: &Handle) -> Result<Vec<Repository>> {
        tracing::debug!("Fetching repositories of {handle}");
        let mut url = self.endpoint(&["users", handle.as_str(), "repos"])?;
        url.query_pairs_mut()
            .append_pair("sort", "stars")
            .append_pair("per_page", &MAX_REPOSITORIES.to_string());

        let mut repos: Vec<Repository> = self.get_json(url).await.map_err(|e| match e {
            GithubError::FetchFailed { status } => GithubError::RepositoriesFetchFailed { status },
            other => other,
        })?;
        repos.truncate(MAX_REPOSITORIES);
        Ok(repos)
    }
}
