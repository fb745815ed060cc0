use std::{collections::HashSet, fmt};

use chrono::{DateTime, Utc};
use folio_github::models::GithubRepository;
use serde::Serialize;

/// One repository's metadata, as shown on a project card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub language: Option<String>,
    pub topics: Vec<String>,
    pub html_url: String,
    pub homepage: Option<String>,
    pub owner: String,
    pub fork: bool,
    pub updated_at: DateTime<Utc>,
}

impl From<GithubRepository> for Repository {
    fn from(repo: GithubRepository) -> Self {
        Self {
            id: repo.id,
            name: repo.name,
            description: repo.description,
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            language: repo.language,
            topics: repo.topics,
            html_url: repo.html_url,
            homepage: repo.homepage,
            owner: repo.owner.login,
            fork: repo.fork,
            updated_at: repo.updated_at,
        }
    }
}

impl Repository {
    /// Whether the repository carries a description worth showing.
    pub fn has_description(&self) -> bool {
        self.description
            .as_deref()
            .is_some_and(|d| !d.trim().is_empty())
    }

    pub fn is_owned_by(&self, username: &str) -> bool {
        self.owner.eq_ignore_ascii_case(username)
    }
}

/// Relationship between the configured user and a repository's owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Owned,
    OrganizationContribution,
    ExternalContribution,
    Fork,
}

impl Classification {
    /// Badge label shown on the card. Owned repositories carry no badge.
    pub fn badge(self) -> Option<&'static str> {
        match self {
            Self::Owned => None,
            Self::OrganizationContribution => Some("Organization"),
            Self::ExternalContribution => Some("Contribution"),
            Self::Fork => Some("Fork Contribution"),
        }
    }

    /// CSS modifier for the badge element.
    pub fn badge_class(self) -> Option<&'static str> {
        match self {
            Self::Owned => None,
            Self::OrganizationContribution => Some("badge-org"),
            Self::ExternalContribution => Some("badge-contribution"),
            Self::Fork => Some("badge-fork"),
        }
    }

    /// Whether the card names the owner ("by <owner>").
    pub fn shows_attribution(self) -> bool {
        matches!(
            self,
            Self::OrganizationContribution | Self::ExternalContribution
        )
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Owned => "Owned",
            Self::OrganizationContribution => "Organization",
            Self::ExternalContribution => "External Contribution",
            Self::Fork => "Fork",
        };
        write!(f, "{s}")
    }
}

/// Classifies `repo` relative to `username`.
///
/// Ownership wins over everything else. Among repositories owned by someone
/// else, forks are reported as such; the rest are organization contributions
/// when their id was seen in an organization listing and external
/// contributions otherwise.
pub fn classify(repo: &Repository, username: &str, org_ids: &HashSet<u64>) -> Classification {
    if repo.is_owned_by(username) {
        Classification::Owned
    } else if repo.fork {
        Classification::Fork
    } else if org_ids.contains(&repo.id) {
        Classification::OrganizationContribution
    } else {
        Classification::ExternalContribution
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedRepository {
    #[serde(flatten)]
    pub repository: Repository,
    pub classification: Classification,
}

impl ClassifiedRepository {
    pub fn new(repository: Repository, classification: Classification) -> Self {
        Self {
            repository,
            classification,
        }
    }
}
