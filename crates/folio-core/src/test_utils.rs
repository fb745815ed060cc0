use std::{cell::RefCell, collections::HashMap};

use chrono::{DateTime, Duration, TimeZone, Utc};
use folio_github::{
    error::FetchError,
    models::{GithubOrganization, GithubOwner, GithubRepository},
    source::RepositorySource,
};

use crate::repository::Repository;

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

/// A described, non-fork repository last updated `age_days` before [`now`].
pub fn gh_repo(id: u64, owner: &str, age_days: i64) -> GithubRepository {
    GithubRepository {
        id,
        name: format!("repo-{id}"),
        description: Some(format!("Description of repo {id}")),
        stargazers_count: id,
        forks_count: 0,
        language: Some("Rust".to_string()),
        topics: Vec::new(),
        html_url: format!("https://github.com/{owner}/repo-{id}"),
        homepage: None,
        owner: GithubOwner {
            login: owner.to_string(),
        },
        fork: false,
        updated_at: now() - Duration::days(age_days),
    }
}

pub fn repo(id: u64, owner: &str, age_days: i64) -> Repository {
    gh_repo(id, owner, age_days).into()
}

/// In-memory [`RepositorySource`]. Failures are given as HTTP status codes;
/// every call is recorded in `calls`.
pub struct FakeSource {
    pub owned: Result<Vec<GithubRepository>, u16>,
    pub orgs: Result<Vec<GithubOrganization>, u16>,
    pub org_repos: HashMap<String, Result<Vec<GithubRepository>, u16>>,
    pub search: Result<Vec<GithubRepository>, u16>,
    pub calls: RefCell<Vec<String>>,
}

impl Default for FakeSource {
    fn default() -> Self {
        Self {
            owned: Ok(Vec::new()),
            orgs: Ok(Vec::new()),
            org_repos: HashMap::new(),
            search: Ok(Vec::new()),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl FakeSource {
    pub fn with_org(mut self, login: &str, repos: Result<Vec<GithubRepository>, u16>) -> Self {
        if let Ok(orgs) = &mut self.orgs {
            orgs.push(GithubOrganization {
                login: login.to_string(),
            });
        }
        self.org_repos.insert(login.to_string(), repos);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn respond<T: Clone>(
        &self,
        call: String,
        response: &Result<Vec<T>, u16>,
    ) -> Result<Vec<T>, FetchError> {
        self.calls.borrow_mut().push(call.clone());
        response.clone().map_err(|status| {
            FetchError::HttpError {
                status,
                url: call,
            }
        })
    }
}

impl RepositorySource for FakeSource {
    fn user_repos(&self, user: &str, per_page: usize) -> Result<Vec<GithubRepository>, FetchError> {
        self.respond(format!("user_repos:{user}:{per_page}"), &self.owned)
    }

    fn user_orgs(&self, user: &str) -> Result<Vec<GithubOrganization>, FetchError> {
        self.respond(format!("user_orgs:{user}"), &self.orgs)
    }

    fn org_repos(&self, org: &str, per_page: usize) -> Result<Vec<GithubRepository>, FetchError> {
        let response = self.org_repos.get(org).cloned().unwrap_or(Err(404));
        self.respond(format!("org_repos:{org}:{per_page}"), &response)
    }

    fn search_committed(
        &self,
        user: &str,
        per_page: usize,
    ) -> Result<Vec<GithubRepository>, FetchError> {
        self.respond(format!("search:{user}:{per_page}"), &self.search)
    }
}
