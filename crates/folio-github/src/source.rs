use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use ureq::http::header::ACCEPT;

use crate::{
    error::FetchError,
    http_client::SHARED_AGENT,
    models::{GithubOrganization, GithubRepository, SearchResponse},
};

const GITHUB_JSON: &str = "application/vnd.github+json";
const API_VERSION: &str = "2022-11-28";

/// The four read-only endpoint shapes the portfolio consumes.
///
/// Implemented over HTTP by [`GithubApi`]; tests substitute in-memory sources.
pub trait RepositorySource {
    /// Repositories of `user`, most recently updated first.
    fn user_repos(&self, user: &str, per_page: usize) -> Result<Vec<GithubRepository>, FetchError>;

    /// Public organization memberships of `user`.
    fn user_orgs(&self, user: &str) -> Result<Vec<GithubOrganization>, FetchError>;

    /// Repositories of organization `org`, most recently updated first.
    fn org_repos(&self, org: &str, per_page: usize) -> Result<Vec<GithubRepository>, FetchError>;

    /// Public repositories with commits authored by `user`.
    fn search_committed(
        &self,
        user: &str,
        per_page: usize,
    ) -> Result<Vec<GithubRepository>, FetchError>;
}

impl<S: RepositorySource + ?Sized> RepositorySource for &S {
    fn user_repos(&self, user: &str, per_page: usize) -> Result<Vec<GithubRepository>, FetchError> {
        (**self).user_repos(user, per_page)
    }

    fn user_orgs(&self, user: &str) -> Result<Vec<GithubOrganization>, FetchError> {
        (**self).user_orgs(user)
    }

    fn org_repos(&self, org: &str, per_page: usize) -> Result<Vec<GithubRepository>, FetchError> {
        (**self).org_repos(org, per_page)
    }

    fn search_committed(
        &self,
        user: &str,
        per_page: usize,
    ) -> Result<Vec<GithubRepository>, FetchError> {
        (**self).search_committed(user, per_page)
    }
}

/// Unauthenticated client for the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GithubApi {
    base_url: String,
}

impl Default for GithubApi {
    fn default() -> Self {
        Self::new("https://api.github.com")
    }
}

impl GithubApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str, query: &[(&str, &str)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        if !query.is_empty() {
            let encoded = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(query)
                .finish();
            url.push('?');
            url.push_str(&encoded);
        }
        url
    }

    fn fetch_json<T: DeserializeOwned>(&self, url: String) -> Result<T, FetchError> {
        debug!("GET {}", url);

        let mut resp = SHARED_AGENT
            .get(&url)
            .header(ACCEPT, GITHUB_JSON)
            .header("X-GitHub-Api-Version", API_VERSION)
            .call()?;
        let status = resp.status();
        trace!("{} -> {}", url, status);

        if !status.is_success() {
            return Err(FetchError::HttpError {
                status: status.as_u16(),
                url,
            });
        }

        resp.body_mut()
            .read_json::<T>()
            .map_err(|_| FetchError::InvalidResponse { url })
    }
}

impl RepositorySource for GithubApi {
    fn user_repos(&self, user: &str, per_page: usize) -> Result<Vec<GithubRepository>, FetchError> {
        let per_page = per_page.to_string();
        let url = self.url(
            &format!("/users/{user}/repos"),
            &[("sort", "updated"), ("per_page", per_page.as_str())],
        );
        self.fetch_json(url)
    }

    fn user_orgs(&self, user: &str) -> Result<Vec<GithubOrganization>, FetchError> {
        self.fetch_json(self.url(&format!("/users/{user}/orgs"), &[]))
    }

    fn org_repos(&self, org: &str, per_page: usize) -> Result<Vec<GithubRepository>, FetchError> {
        let per_page = per_page.to_string();
        let url = self.url(
            &format!("/orgs/{org}/repos"),
            &[("sort", "updated"), ("per_page", per_page.as_str())],
        );
        self.fetch_json(url)
    }

    fn search_committed(
        &self,
        user: &str,
        per_page: usize,
    ) -> Result<Vec<GithubRepository>, FetchError> {
        let per_page = per_page.to_string();
        let query = format!("committer:{user} is:public");
        let url = self.url(
            "/search/repositories",
            &[("q", query.as_str()), ("sort", "updated"), ("per_page", per_page.as_str())],
        );
        let response: SearchResponse = self.fetch_json(url)?;
        Ok(response.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash() {
        let api = GithubApi::new("https://api.github.com/");
        assert_eq!(api.base_url(), "https://api.github.com");
    }

    #[test]
    fn test_user_repos_url() {
        let api = GithubApi::default();
        let url = api.url(
            "/users/octocat/repos",
            &[("sort", "updated"), ("per_page", "12")],
        );
        assert_eq!(
            url,
            "https://api.github.com/users/octocat/repos?sort=updated&per_page=12"
        );
    }

    #[test]
    fn test_url_without_query() {
        let api = GithubApi::default();
        assert_eq!(
            api.url("/users/octocat/orgs", &[]),
            "https://api.github.com/users/octocat/orgs"
        );
    }

    #[test]
    fn test_search_query_is_encoded() {
        let api = GithubApi::new("http://localhost:9000");
        let url = api.url(
            "/search/repositories",
            &[("q", "committer:octocat is:public"), ("per_page", "6")],
        );
        assert_eq!(
            url,
            "http://localhost:9000/search/repositories?q=committer%3Aoctocat+is%3Apublic&per_page=6"
        );
    }

    #[test]
    fn test_unreachable_host_is_network_error() {
        // port 9 (discard) on localhost is closed in test environments
        let api = GithubApi::new("http://127.0.0.1:9");
        let err = api.user_orgs("octocat").unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }
}
