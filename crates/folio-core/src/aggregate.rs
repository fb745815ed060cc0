//! Gathers repositories from the user's own listing, their organizations and
//! a committer search, then merges them into the list shown on the page.
//!
//! Only the user's own listing is required. Organization and search results
//! are best-effort: a failing call contributes nothing and is reported at
//! debug level.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use folio_config::{
    config::Config,
    error::{ConfigError, Result as ConfigResult},
};
use folio_github::{error::FetchError, models::GithubRepository, source::RepositorySource};
use miette::Diagnostic;
use thiserror::Error;
use tracing::{debug, info};

use crate::repository::{classify, ClassifiedRepository, Repository};

#[derive(Error, Diagnostic, Debug)]
pub enum AggregateError {
    #[error("Unable to fetch repositories for '{username}'")]
    #[diagnostic(
        code(folio::aggregate::fetch),
        help(
            "Check your internet connection, the configured GitHub username and GitHub API rate \
             limits"
        )
    )]
    Fetch {
        username: String,
        #[source]
        source: FetchError,
    },
}

impl AggregateError {
    pub fn fetch_error(&self) -> &FetchError {
        match self {
            Self::Fetch { source, .. } => source,
        }
    }
}

/// Result of an optional source: either its records or the ignored failure.
#[derive(Debug)]
pub enum SourceOutcome<T> {
    Fetched(Vec<T>),
    Ignored(FetchError),
}

impl<T> SourceOutcome<T> {
    /// Wraps `result`, logging a failure under `label`.
    pub fn from_result(label: &str, result: Result<Vec<T>, FetchError>) -> Self {
        match result {
            Ok(items) => Self::Fetched(items),
            Err(err) => {
                debug!("Skipping {}: {}", label, err);
                Self::Ignored(err)
            }
        }
    }

    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Fetched(items) => items,
            Self::Ignored(_) => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateSettings {
    pub username: String,
    pub owned_repos: usize,
    pub max_organizations: usize,
    pub org_repos: usize,
    pub search_results: usize,
    pub org_max_age: Duration,
}

impl AggregateSettings {
    pub fn from_config(config: &Config) -> ConfigResult<Self> {
        let org_max_age = Duration::from_std(config.org_max_age()?).map_err(|_| {
            ConfigError::InvalidDuration {
                name: "limits.org_max_age",
                value: config.limits.org_max_age.clone(),
            }
        })?;

        Ok(Self {
            username: config.username.clone(),
            owned_repos: config.limits.owned_repos,
            max_organizations: config.limits.max_organizations,
            org_repos: config.limits.org_repos,
            search_results: config.limits.search_results,
            org_max_age,
        })
    }
}

/// Repositories grouped by the source that produced them, in merge order.
#[derive(Debug, Default)]
struct Gathered {
    owned: Vec<Repository>,
    organization: Vec<Repository>,
    contributions: Vec<Repository>,
    org_ids: HashSet<u64>,
}

pub struct Aggregator<S> {
    source: S,
    settings: AggregateSettings,
    now: DateTime<Utc>,
}

impl<S: RepositorySource> Aggregator<S> {
    pub fn new(source: S, settings: AggregateSettings) -> Self {
        Self {
            source,
            settings,
            now: Utc::now(),
        }
    }

    /// Overrides the reference time used for the organization age cut-off.
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Fetches, merges, classifies, filters and sorts.
    ///
    /// Calls are made one after another: owned repositories, the organization
    /// list, each organization's repositories, then the committer search.
    pub fn run(&self) -> Result<Vec<ClassifiedRepository>, AggregateError> {
        let owned = self.fetch_owned()?;

        let (organization, org_ids) = self.fetch_organization_repos();
        let contributions = self.fetch_contributions().into_items();

        let gathered = Gathered {
            owned,
            organization,
            contributions,
            org_ids,
        };

        let repositories = self.finish(gathered);
        info!(
            "Collected {} repositories for {}",
            repositories.len(),
            self.settings.username
        );
        Ok(repositories)
    }

    fn fetch_owned(&self) -> Result<Vec<Repository>, AggregateError> {
        let username = &self.settings.username;
        let repos = self
            .source
            .user_repos(username, self.settings.owned_repos)
            .map_err(|source| {
                AggregateError::Fetch {
                    username: username.clone(),
                    source,
                }
            })?;

        debug!("Fetched {} repositories owned by {}", repos.len(), username);
        Ok(repos.into_iter().map(Repository::from).collect())
    }

    /// Recent, described repositories of the user's first organizations, plus
    /// the ids of every repository those organizations listed.
    fn fetch_organization_repos(&self) -> (Vec<Repository>, HashSet<u64>) {
        let username = &self.settings.username;
        let orgs = SourceOutcome::from_result(
            &format!("organizations of {username}"),
            self.source.user_orgs(username),
        )
        .into_items();

        let mut repos = Vec::new();
        let mut org_ids = HashSet::new();

        for org in orgs.iter().take(self.settings.max_organizations) {
            let outcome = SourceOutcome::from_result(
                &format!("repositories of organization {}", org.login),
                self.source.org_repos(&org.login, self.settings.org_repos),
            );

            for repo in outcome.into_items() {
                org_ids.insert(repo.id);
                if self.qualifies_as_org_repo(&repo) {
                    repos.push(Repository::from(repo));
                }
            }
        }

        debug!(
            "Kept {} organization repositories out of {} listed",
            repos.len(),
            org_ids.len()
        );
        (repos, org_ids)
    }

    fn qualifies_as_org_repo(&self, repo: &GithubRepository) -> bool {
        let described = repo
            .description
            .as_deref()
            .is_some_and(|d| !d.trim().is_empty());
        described && is_recent(repo.updated_at, self.now, self.settings.org_max_age)
    }

    fn fetch_contributions(&self) -> SourceOutcome<Repository> {
        let username = &self.settings.username;
        let outcome = SourceOutcome::from_result(
            &format!("committer search for {username}"),
            self.source
                .search_committed(username, self.settings.search_results),
        );

        match outcome {
            SourceOutcome::Fetched(items) => {
                SourceOutcome::Fetched(items.into_iter().map(Repository::from).collect())
            }
            SourceOutcome::Ignored(err) => SourceOutcome::Ignored(err),
        }
    }

    fn finish(&self, gathered: Gathered) -> Vec<ClassifiedRepository> {
        let Gathered {
            owned,
            organization,
            contributions,
            org_ids,
        } = gathered;

        let merged = merge_unique([owned, organization, contributions]);

        let mut classified: Vec<_> = merged
            .into_iter()
            .map(|repo| {
                let classification = classify(&repo, &self.settings.username, &org_ids);
                ClassifiedRepository::new(repo, classification)
            })
            .filter(|c| c.repository.has_description())
            .collect();

        sort_by_updated(&mut classified);
        classified
    }
}

/// Whether `updated_at` lies strictly within `max_age` of `now`.
pub fn is_recent(updated_at: DateTime<Utc>, now: DateTime<Utc>, max_age: Duration) -> bool {
    now.signed_duration_since(updated_at) < max_age
}

/// Concatenates `sources` in order, keeping only the first record seen for
/// each repository id.
pub fn merge_unique<I>(sources: I) -> Vec<Repository>
where
    I: IntoIterator<Item = Vec<Repository>>,
{
    let mut seen = HashSet::new();
    sources
        .into_iter()
        .flatten()
        .filter(|repo| seen.insert(repo.id))
        .collect()
}

/// Most recently updated first; ties keep their merge order.
pub fn sort_by_updated(repos: &mut [ClassifiedRepository]) {
    repos.sort_by(|a, b| b.repository.updated_at.cmp(&a.repository.updated_at));
}
