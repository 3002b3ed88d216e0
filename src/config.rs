use std::env;

use thiserror::Error;
use url::Url;

const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
const DEFAULT_USER_AGENT: &str = "github-analytics-rs";
const DEFAULT_TOP_LANGUAGES: usize = 8;
const DEFAULT_TOP_REPOSITORIES: usize = 10;
const DEFAULT_REPOSITORIES_SHOWN: usize = 12;

/// Errors raised while reading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `GITHUB_API_URL` is not a valid URL.
    #[error("Invalid GITHUB_API_URL '{value}': {source}")]
    InvalidApiUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
}

/// Represents the application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the GitHub REST API.
    pub github_api_url: Url,
    /// The `User-Agent` sent with every request.
    pub user_agent: String,
    /// How many languages the language chart shows.
    pub top_languages: usize,
    /// How many repositories the stars chart shows.
    pub top_repositories: usize,
    /// How many repositories the profile repository list shows.
    pub repositories_shown: usize,
}

impl Config {
    /// Creates a new `Config` instance from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url =
            env::var("GITHUB_API_URL").unwrap_or_else(|_| DEFAULT_GITHUB_API_URL.to_string());
        let github_api_url = Url::parse(&api_url)
            .map_err(|source| ConfigError::InvalidApiUrl { value: api_url.clone(), source })?;

        Ok(Self {
            github_api_url,
            user_agent: env::var("GITHUB_USER_AGENT")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            top_languages: parse_or("TOP_LANGUAGES", DEFAULT_TOP_LANGUAGES),
            top_repositories: parse_or("TOP_REPOSITORIES", DEFAULT_TOP_REPOSITORIES),
            repositories_shown: parse_or("REPOSITORIES_SHOWN", DEFAULT_REPOSITORIES_SHOWN),
        })
    }
}

fn parse_or(key: &str, default: usize) -> usize {
    env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use temp_env::with_vars;

    use super::*;

    #[test]
    fn test_from_env() {
        with_vars(
            [
                ("GITHUB_API_URL", Some("http://localhost:8080")),
                ("GITHUB_USER_AGENT", Some("test-agent")),
                ("TOP_LANGUAGES", Some("5")),
                ("TOP_REPOSITORIES", Some("3")),
                ("REPOSITORIES_SHOWN", Some("20")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.github_api_url.as_str(), "http://localhost:8080/");
                assert_eq!(config.user_agent, "test-agent");
                assert_eq!(config.top_languages, 5);
                assert_eq!(config.top_repositories, 3);
                assert_eq!(config.repositories_shown, 20);
            },
        );
    }

    #[test]
    fn test_missing_values_default() {
        with_vars(
            [
                ("GITHUB_API_URL", None::<&str>),
                ("GITHUB_USER_AGENT", None),
                ("TOP_LANGUAGES", None),
                ("TOP_REPOSITORIES", None),
                ("REPOSITORIES_SHOWN", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.github_api_url.as_str(), "https://api.github.com/");
                assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
                assert_eq!(config.top_languages, DEFAULT_TOP_LANGUAGES);
                assert_eq!(config.top_repositories, DEFAULT_TOP_REPOSITORIES);
                assert_eq!(config.repositories_shown, DEFAULT_REPOSITORIES_SHOWN);
            },
        );
    }

    #[test]
    fn test_unparsable_limits_default() {
        with_vars(
            [("GITHUB_API_URL", None), ("TOP_LANGUAGES", Some("many")), ("TOP_REPOSITORIES", Some("-1"))],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.top_languages, DEFAULT_TOP_LANGUAGES);
                assert_eq!(config.top_repositories, DEFAULT_TOP_REPOSITORIES);
            },
        );
    }

    #[test]
    fn test_invalid_api_url_error() {
        with_vars([("GITHUB_API_URL", Some("not a url"))], || {
            let config = Config::from_env();
            assert!(matches!(config, Err(ConfigError::InvalidApiUrl { .. })));
        });
    }

    #[test]
    fn test_blank_user_agent_default() {
        with_vars([("GITHUB_API_URL", None), ("GITHUB_USER_AGENT", Some("  "))], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        });
    }
}
