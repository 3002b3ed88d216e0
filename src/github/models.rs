use serde::{Deserialize, Serialize};

/// Public profile of a GitHub user or organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// The unique handle.
    pub login: String,
    /// Display name, if set.
    #[serde(default)]
    pub name: Option<String>,
    /// URL of the profile picture.
    pub avatar_url: String,
    /// Profile bio, if set.
    #[serde(default)]
    pub bio: Option<String>,
    /// URL of the profile page.
    pub html_url: String,
    /// Number of public repositories.
    pub public_repos: u64,
    /// Number of followers.
    pub followers: u64,
    /// Number of accounts followed.
    pub following: u64,
}

impl Account {
    /// The display name, falling back to the login when no name is set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|name| !name.is_empty()).unwrap_or(&self.login)
    }

    /// The bio, `None` when absent or empty.
    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref().filter(|bio| !bio.is_empty())
    }
}

/// A public repository as returned by the repository listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository name without the owner.
    pub name: String,
    /// Short description, if set.
    #[serde(default)]
    pub description: Option<String>,
    /// Primary language as detected by GitHub.
    #[serde(default)]
    pub language: Option<String>,
    /// Number of stars.
    pub stargazers_count: u64,
    /// Number of forks.
    pub forks_count: u64,
    /// Number of watchers.
    pub watchers_count: u64,
    /// URL of the repository page.
    pub html_url: String,
}

impl Repository {
    /// Primary language, `None` when absent or empty.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref().filter(|lang| !lang.is_empty())
    }

    /// The description, `None` when absent or empty.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|desc| !desc.is_empty())
    }
}
