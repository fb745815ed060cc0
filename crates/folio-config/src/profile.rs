use documented::{Documented, DocumentedFields};
use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME: &str = "Hannah Villanueva";
pub const DEFAULT_TITLE: &str = "Developer in Progress";
pub const DEFAULT_BIO: &str = "I am Hannah Sophia L. Villanueva, a 3rd year BS Computer Science \
student at Caraga State University - Main Campus. I specialize in Python programming and \
designing UX/UI interfaces for websites. Currently learning frameworks like React, Django and \
Flask to enhance my web development skills.";
pub const DEFAULT_EMAIL: &str = "hslvillanueva@gmail.com";
pub const DEFAULT_LINKEDIN_URL: &str = "https://www.linkedin.com/in/hannahsophiavillanueva/";
pub const DEFAULT_AVATAR: &str = "profile.jpg";

/// Personal details injected into the hero, about and contact sections.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Documented, DocumentedFields)]
#[serde(default)]
pub struct PersonalInfo {
    /// Display name shown in the hero heading.
    pub name: String,

    /// Short tagline shown below the name.
    pub title: String,

    /// Paragraph shown in the about section.
    pub bio: String,

    /// Contact address used for the `mailto:` link.
    pub email: String,

    /// Link to the GitHub profile.
    /// Default: derived from `username`
    pub github_url: Option<String>,

    /// Link to the LinkedIn profile.
    pub linkedin_url: String,

    /// Profile image path relative to the generated page.
    /// A placeholder icon is shown if the image fails to load.
    pub avatar: String,
}

impl Default for PersonalInfo {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            title: DEFAULT_TITLE.to_string(),
            bio: DEFAULT_BIO.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            github_url: None,
            linkedin_url: DEFAULT_LINKEDIN_URL.to_string(),
            avatar: DEFAULT_AVATAR.to_string(),
        }
    }
}

impl PersonalInfo {
    /// GitHub profile link, falling back to `https://github.com/{username}`.
    pub fn github_url(&self, username: &str) -> String {
        self.github_url
            .clone()
            .unwrap_or_else(|| format!("https://github.com/{username}"))
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}
