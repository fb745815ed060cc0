use crate::{
    aggregate::AggregateError,
    render::{card::Card, toggle::OverflowToggle},
    repository::ClassifiedRepository,
};

/// Likely reasons shown when the repository list could not be fetched.
pub const FETCH_FAILURE_CAUSES: [&str; 3] = [
    "Your internet connection",
    "The GitHub username in your configuration",
    "GitHub API rate limits",
];

/// What the projects section shows in place of, or as, the card grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectsView {
    Cards {
        visible: Vec<Card>,
        overflow: Vec<Card>,
        toggle: Option<OverflowToggle>,
    },
    NoProjects,
    FetchFailed {
        rate_limited: bool,
    },
}

impl ProjectsView {
    pub fn build(
        result: &Result<Vec<ClassifiedRepository>, AggregateError>,
        visible_count: usize,
    ) -> Self {
        match result {
            Ok(repos) => Self::from_repositories(repos, visible_count),
            Err(err) => {
                Self::FetchFailed {
                    rate_limited: err.fetch_error().is_rate_limited(),
                }
            }
        }
    }

    /// Splits `repos` into the first `visible_count` cards and the overflow.
    pub fn from_repositories(repos: &[ClassifiedRepository], visible_count: usize) -> Self {
        if repos.is_empty() {
            return Self::NoProjects;
        }

        let mut visible: Vec<Card> = repos.iter().map(Card::from).collect();
        let overflow = visible.split_off(visible_count.min(visible.len()));
        let toggle = OverflowToggle::new(overflow.len());

        Self::Cards {
            visible,
            overflow,
            toggle,
        }
    }

    pub fn is_fetch_failed(&self) -> bool {
        matches!(self, Self::FetchFailed { .. })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::NoProjects)
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::FetchFailed { rate_limited: true })
    }

    pub fn visible(&self) -> &[Card] {
        match self {
            Self::Cards { visible, .. } => visible,
            _ => &[],
        }
    }

    pub fn overflow(&self) -> &[Card] {
        match self {
            Self::Cards { overflow, .. } => overflow,
            _ => &[],
        }
    }

    pub fn toggle(&self) -> Option<&OverflowToggle> {
        match self {
            Self::Cards { toggle, .. } => toggle.as_ref(),
            _ => None,
        }
    }

    pub fn failure_causes(&self) -> &'static [&'static str] {
        if self.is_fetch_failed() {
            &FETCH_FAILURE_CAUSES
        } else {
            &[]
        }
    }
}
