use url::Url;

use crate::repository::ClassifiedRepository;

pub const DESCRIPTION_FALLBACK: &str = "No description available";
pub const LANGUAGE_FALLBACK: &str = "N/A";

/// Returns the trimmed `link` when it parses as an absolute `http` or `https`
/// URL. Anything else must never reach an `href`.
pub fn web_link(link: &str) -> Option<String> {
    let link = link.trim();
    Url::parse(link)
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https"))
        .map(|_| link.to_string())
}

/// Everything a project card displays, with fallbacks already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub name: String,
    pub description: String,
    pub stars: u64,
    pub forks: u64,
    pub language: String,
    pub topics: Vec<String>,
    pub repo_url: String,
    pub demo_url: Option<String>,
    pub badge: Option<&'static str>,
    pub badge_class: Option<&'static str>,
    pub attribution: Option<String>,
}

impl From<&ClassifiedRepository> for Card {
    fn from(classified: &ClassifiedRepository) -> Self {
        let repo = &classified.repository;
        let classification = classified.classification;

        let description = repo
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(DESCRIPTION_FALLBACK)
            .to_string();

        Self {
            name: repo.name.clone(),
            description,
            stars: repo.stars,
            forks: repo.forks,
            language: repo
                .language
                .clone()
                .unwrap_or_else(|| LANGUAGE_FALLBACK.to_string()),
            topics: repo.topics.clone(),
            repo_url: web_link(&repo.html_url)
                .unwrap_or_else(|| format!("https://github.com/{}/{}", repo.owner, repo.name)),
            demo_url: repo.homepage.as_deref().and_then(web_link),
            badge: classification.badge(),
            badge_class: classification.badge_class(),
            attribution: classification
                .shows_attribution()
                .then(|| format!("by {}", repo.owner)),
        }
    }
}

impl Card {
    pub fn has_topics(&self) -> bool {
        !self.topics.is_empty()
    }
}
