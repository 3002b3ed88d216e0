use crate::github::{Account, Repository};

// Builds a repository with only the fields the aggregations look at.
pub fn repo(name: &str, language: Option<&str>, stars: u64) -> Repository {
    Repository {
        name: name.to_string(),
        description: None,
        language: language.map(str::to_string),
        stargazers_count: stars,
        forks_count: 0,
        watchers_count: stars,
        html_url: format!("https://github.com/test/{name}"),
    }
}

pub fn account(login: &str, public_repos: u64, followers: u64, following: u64) -> Account {
    Account {
        login: login.to_string(),
        name: None,
        avatar_url: format!("https://avatars.example.com/{login}"),
        bio: None,
        html_url: format!("https://github.com/{login}"),
        public_repos,
        followers,
        following,
    }
}
