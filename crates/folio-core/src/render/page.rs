use askama::Template;
use folio_config::config::Config;

use crate::{render::view::ProjectsView, FolioResult};

/// Scroll offset in pixels after which the header switches background.
pub const SCROLL_THRESHOLD: u32 = 50;
pub const HEADER_BG_TOP: &str = "#161b22";
pub const HEADER_BG_SCROLLED: &str = "#0d1117";

#[derive(Template)]
#[template(path = "page.html")]
pub struct PortfolioPage {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub avatar: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub mailto: String,
    pub stylesheet: String,
    pub projects: ProjectsView,
    pub scroll_threshold: u32,
    pub header_bg_top: &'static str,
    pub header_bg_scrolled: &'static str,
}

impl PortfolioPage {
    pub fn new(config: &Config, projects: ProjectsView) -> Self {
        let profile = &config.profile;
        Self {
            name: profile.name.clone(),
            title: profile.title.clone(),
            bio: profile.bio.clone(),
            avatar: profile.avatar.clone(),
            github_url: config.github_url(),
            linkedin_url: profile.linkedin_url.clone(),
            mailto: profile.mailto(),
            stylesheet: config.stylesheet.clone(),
            projects,
            scroll_threshold: SCROLL_THRESHOLD,
            header_bg_top: HEADER_BG_TOP,
            header_bg_scrolled: HEADER_BG_SCROLLED,
        }
    }

    pub fn render_page(&self) -> FolioResult<String> {
        Ok(self.render()?)
    }
}

#[cfg(test)]
mod tests {
    use folio_github::error::FetchError;

    use super::*;
    use crate::{
        aggregate::AggregateError,
        render::render_portfolio,
        repository::{Classification, ClassifiedRepository},
        test_utils::repo,
    };

    fn render(result: Result<Vec<ClassifiedRepository>, AggregateError>) -> String {
        render_portfolio(&Config::default(), &result).unwrap()
    }

    #[test]
    fn test_overflow_toggle_rendered() {
        let mut repos: Vec<ClassifiedRepository> = (1..=7)
            .map(|i| {
                ClassifiedRepository::new(repo(i, "hsvillanueva", i as i64), Classification::Owned)
            })
            .collect();
        repos.push(ClassifiedRepository::new(
            repo(8, "acme-org", 8),
            Classification::OrganizationContribution,
        ));

        let html = render(Ok(repos));

        assert_eq!(html.matches("class=\"project-card\"").count(), 8);
        assert!(html.contains("id=\"projects-overflow\""));
        assert!(html.contains("Show 2 More Projects"));
        assert!(html.contains("Show Less"));
        assert!(html.contains("fa-chevron-down"));
        assert!(html.contains(">Organization<"));
        assert!(html.contains("by acme-org"));

        let overflow_start = html.find("id=\"projects-overflow\"").unwrap();
        assert!(html[overflow_start..].contains("repo-7"));
        assert!(html[..overflow_start].contains("repo-6"));
        assert!(!html[..overflow_start].contains("repo-7"));
    }

    #[test]
    fn test_no_toggle_for_six_cards() {
        let repos = (1..=6)
            .map(|i| ClassifiedRepository::new(repo(i, "hsvillanueva", 0), Classification::Owned))
            .collect();

        let html = render(Ok(repos));

        assert_eq!(html.matches("class=\"project-card\"").count(), 6);
        assert!(!html.contains("id=\"projects-toggle\""));
        assert!(!html.contains("id=\"projects-overflow\""));
    }

    #[test]
    fn test_optional_sections_omitted() {
        let repos = vec![ClassifiedRepository::new(
            repo(1, "hsvillanueva", 0),
            Classification::Owned,
        )];

        let html = render(Ok(repos));

        assert!(html.contains("repo-link"));
        assert!(!html.contains("demo-link"));
        assert!(!html.contains("class=\"project-topics\""));
        assert!(!html.contains("class=\"project-badge"));
        assert!(!html.contains("class=\"project-owner\""));
    }

    #[test]
    fn test_topics_and_demo_link() {
        let mut r = repo(1, "hsvillanueva", 0);
        r.topics = vec!["portfolio".to_string()];
        r.homepage = Some("https://example.com".to_string());

        let html = render(Ok(vec![ClassifiedRepository::new(r, Classification::Owned)]));

        assert!(html.contains("class=\"project-topics\""));
        assert!(html.contains(">portfolio<"));
        assert!(html.contains("demo-link"));
        assert!(html.contains("Live Demo"));
    }

    #[test]
    fn test_script_homepage_not_linked() {
        let mut r = repo(1, "mallory", 0);
        r.homepage = Some("javascript:alert(document.cookie)".to_string());

        let html = render(Ok(vec![ClassifiedRepository::new(
            r,
            Classification::ExternalContribution,
        )]));

        assert!(!html.contains("href=\"javascript:"));
        assert!(!html.contains("demo-link"));
        assert!(html.contains("repo-link"));
    }

    #[test]
    fn test_card_styles_embedded() {
        let html = render(Ok(Vec::new()));

        let style_start = html.find("<style>").unwrap();
        let style_end = html.find("</style>").unwrap();
        let styles = &html[style_start..style_end];
        for class in [".project-card", ".badge-org", ".badge-fork", ".projects-toggle"] {
            assert!(styles.contains(class), "missing rule for {class}");
        }
        assert!(style_end < html.find("rel=\"stylesheet\"").unwrap());
    }

    #[test]
    fn test_no_projects_panel() {
        let html = render(Ok(Vec::new()));

        assert!(html.contains("No projects found"));
        assert!(html.contains("Please check the GitHub username in your configuration"));
        assert!(!html.contains("class=\"project-card\""));
    }

    #[test]
    fn test_fetch_failed_panel() {
        let html = render(Err(AggregateError::Fetch {
            username: "nobody".to_string(),
            source: FetchError::HttpError {
                status: 404,
                url: String::new(),
            },
        }));

        assert!(html.contains("Oops! Something went wrong"));
        assert!(html.contains("Your internet connection"));
        assert!(html.contains("The GitHub username in your configuration"));
        assert!(html.contains("GitHub API rate limits"));
        assert!(!html.contains("class=\"project-card\""));
        assert!(!html.contains("API rate limit was exceeded"));
    }

    #[test]
    fn test_profile_injected() {
        let mut config = Config::default();
        config.profile.name = "Ada Lovelace".to_string();
        config.profile.email = "ada@example.com".to_string();

        let page = PortfolioPage::new(&config, ProjectsView::NoProjects);
        let html = page.render_page().unwrap();

        assert!(html.contains("&gt; Ada Lovelace"));
        assert!(html.contains("ada@example.com"));
        assert_eq!(page.mailto, "mailto:ada@example.com");
        assert_eq!(page.github_url, "https://github.com/hsvillanueva");
    }

    #[test]
    fn test_names_are_escaped() {
        let mut r = repo(1, "hsvillanueva", 0);
        r.name = "<script>".to_string();

        let html = render(Ok(vec![ClassifiedRepository::new(r, Classification::Owned)]));

        assert!(!html.contains("<h3 class=\"project-title\"><script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
