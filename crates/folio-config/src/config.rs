use std::{
    fs,
    path::{Path, PathBuf},
    sync::{LazyLock, PoisonError, RwLock},
    time::Duration,
};

use documented::{Documented, DocumentedFields};
use serde::{Deserialize, Serialize};
use toml_edit::DocumentMut;
use tracing::{debug, info};

use crate::{
    annotations::annotate_toml_table,
    error::{ConfigError, Result},
    http::HttpSettings,
    limits::Limits,
    profile::PersonalInfo,
    utils::xdg_config_home,
};

pub const DEFAULT_USERNAME: &str = "hsvillanueva";
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Portfolio generator configuration
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Documented, DocumentedFields)]
#[serde(default)]
pub struct Config {
    /// GitHub username whose repositories are showcased.
    /// Default: "hsvillanueva"
    pub username: String,

    /// Path of the generated HTML page.
    /// Default: "index.html"
    pub output: String,

    /// Stylesheet linked from the generated page.
    /// Default: "styles.css"
    pub stylesheet: String,

    /// Base URL of the GitHub REST API.
    /// Default: "https://api.github.com"
    pub api_url: String,

    /// Personal details shown on the page.
    pub profile: PersonalInfo,

    /// Page sizes and cut-offs used while gathering repositories.
    pub limits: Limits,

    /// HTTP client settings.
    pub http: HttpSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

pub static CONFIG: LazyLock<RwLock<Option<Config>>> = LazyLock::new(|| RwLock::new(None));

pub static CONFIG_PATH: LazyLock<RwLock<PathBuf>> = LazyLock::new(|| {
    RwLock::new(match std::env::var("FOLIO_CONFIG") {
        Ok(path_str) => PathBuf::from(path_str),
        Err(_) => xdg_config_home().join("folio").join("config.toml"),
    })
});

pub fn config_path() -> PathBuf {
    CONFIG_PATH
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

pub fn set_config_path(path: PathBuf) {
    *CONFIG_PATH.write().unwrap_or_else(PoisonError::into_inner) = path;
}

/// Loads the configuration from [`CONFIG_PATH`] into the global store.
pub fn init() -> Result<()> {
    let config = Config::new()?;
    set_config(config);
    Ok(())
}

pub fn set_config(config: Config) {
    *CONFIG.write().unwrap_or_else(PoisonError::into_inner) = Some(config);
}

/// Returns the loaded configuration, or the built-in defaults when [`init`]
/// has not run.
pub fn get_config() -> Config {
    CONFIG
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .unwrap_or_default()
}

impl Config {
    pub fn default_config() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            output: "index.html".to_string(),
            stylesheet: "styles.css".to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            profile: PersonalInfo::default(),
            limits: Limits::default(),
            http: HttpSettings::default(),
        }
    }

    /// Reads the configuration file at [`CONFIG_PATH`]. A missing file yields
    /// the defaults.
    pub fn new() -> Result<Self> {
        Self::load(&config_path())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let mut config = match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(
                    "No config file at {}, using defaults",
                    path.display()
                );
                Self::default_config()
            }
            Err(err) => return Err(ConfigError::IoError(err)),
        };

        config.resolve()?;
        Ok(config)
    }

    pub fn resolve(&mut self) -> Result<()> {
        self.username = self.username.trim().to_string();
        if self.username.is_empty()
            || self
                .username
                .chars()
                .any(|c| c == '/' || c.is_whitespace())
        {
            return Err(ConfigError::InvalidUsername(self.username.clone()));
        }

        self.api_url = self.api_url.trim_end_matches('/').to_string();
        if self.api_url.is_empty() {
            self.api_url = DEFAULT_API_URL.to_string();
        }

        self.limits.validate()?;
        self.http.timeout()?;

        Ok(())
    }

    pub fn org_max_age(&self) -> Result<Duration> {
        self.limits.org_max_age()
    }

    pub fn http_timeout(&self) -> Result<Option<Duration>> {
        self.http.timeout()
    }

    pub fn github_url(&self) -> String {
        self.profile.github_url(&self.username)
    }

    pub fn to_annotated_document(&self) -> Result<DocumentMut> {
        let toml_string = toml::to_string_pretty(self)?;
        let mut doc = toml_string.parse::<DocumentMut>()?;

        annotate_toml_table::<Config>(doc.as_table_mut(), true)?;

        if let Some(table) = doc.get_mut("profile").and_then(|t| t.as_table_mut()) {
            annotate_toml_table::<PersonalInfo>(table, false)?;
        }
        if let Some(table) = doc.get_mut("limits").and_then(|t| t.as_table_mut()) {
            annotate_toml_table::<Limits>(table, false)?;
        }
        if let Some(table) = doc.get_mut("http").and_then(|t| t.as_table_mut()) {
            annotate_toml_table::<HttpSettings>(table, false)?;
        }

        Ok(doc)
    }
}

/// Writes the documented default configuration to `path`.
pub fn generate_default_config(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(ConfigError::ConfigAlreadyExists);
    }

    let annotated_doc = Config::default_config().to_annotated_document()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, annotated_doc.to_string())?;
    info!(
        "Default configuration file generated with documentation at: {}",
        path.display()
    );
    Ok(())
}
