use std::time::Duration;

use documented::{Documented, DocumentedFields};
use serde::{Deserialize, Serialize};

use crate::{
    error::{ConfigError, Result},
    time::parse_duration,
};

/// Page sizes and cut-offs applied while gathering repositories.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Documented, DocumentedFields)]
#[serde(default)]
pub struct Limits {
    /// Number of most recently updated repositories fetched for the user.
    /// Default: 12
    pub owned_repos: usize,

    /// Maximum number of organizations whose repositories are fetched.
    /// Default: 3
    pub max_organizations: usize,

    /// Number of recently updated repositories fetched per organization.
    /// Default: 10
    pub org_repos: usize,

    /// Number of results requested from the committer search.
    /// Default: 6
    pub search_results: usize,

    /// Organization repositories not updated within this window are skipped.
    /// Default: "365d"
    pub org_max_age: String,

    /// Number of project cards visible before the "show more" toggle.
    /// Default: 6
    pub visible_cards: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            owned_repos: 12,
            max_organizations: 3,
            org_repos: 10,
            search_results: 6,
            org_max_age: "365d".to_string(),
            visible_cards: 6,
        }
    }
}

impl Limits {
    pub fn org_max_age(&self) -> Result<Duration> {
        parse_duration(&self.org_max_age).ok_or_else(|| {
            ConfigError::InvalidDuration {
                name: "limits.org_max_age",
                value: self.org_max_age.clone(),
            }
        })
    }

    pub(crate) fn validate(&self) -> Result<()> {
        let counts = [
            ("limits.owned_repos", self.owned_repos),
            ("limits.max_organizations", self.max_organizations),
            ("limits.org_repos", self.org_repos),
            ("limits.search_results", self.search_results),
            ("limits.visible_cards", self.visible_cards),
        ];

        if let Some((name, value)) = counts.into_iter().find(|(_, value)| *value == 0) {
            return Err(ConfigError::InvalidLimit {
                name,
                value,
            });
        }

        self.org_max_age()?;
        Ok(())
    }
}
