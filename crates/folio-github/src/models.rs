use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A repository as returned by the `repos` and `search/repositories` endpoints.
///
/// Only the fields the portfolio needs are decoded; everything else in the
/// payload is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GithubRepository {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub language: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub topics: Vec<String>,
    pub html_url: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub homepage: Option<String>,
    pub owner: GithubOwner,
    #[serde(default)]
    pub fork: bool,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GithubOwner {
    pub login: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GithubOrganization {
    pub login: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<GithubRepository>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// GitHub reports an unset homepage as either null or "".
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}
