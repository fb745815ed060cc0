use std::time::Duration;

use documented::{Documented, DocumentedFields};
use serde::{Deserialize, Serialize};

use crate::{
    error::{ConfigError, Result},
    time::parse_duration,
};

/// Settings for requests made against the GitHub API.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Documented, DocumentedFields)]
#[serde(default)]
pub struct HttpSettings {
    /// User agent sent with every request. GitHub rejects requests without one.
    /// Default: "folio"
    pub user_agent: String,

    /// Per-request timeout, e.g. "30s". Use "0s" to wait indefinitely.
    /// Default: "30s"
    pub timeout: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            user_agent: "folio".to_string(),
            timeout: "30s".to_string(),
        }
    }
}

impl HttpSettings {
    /// The configured timeout, `None` when disabled with a zero duration.
    pub fn timeout(&self) -> Result<Option<Duration>> {
        let timeout = parse_duration(&self.timeout).ok_or_else(|| {
            ConfigError::InvalidDuration {
                name: "http.timeout",
                value: self.timeout.clone(),
            }
        })?;

        Ok((!timeout.is_zero()).then_some(timeout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout() {
        let http = HttpSettings::default();
        assert_eq!(http.timeout().unwrap(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_zero_timeout_disables() {
        let http = HttpSettings {
            timeout: "0s".to_string(),
            ..Default::default()
        };
        assert_eq!(http.timeout().unwrap(), None);
    }

    #[test]
    fn test_invalid_timeout() {
        let http = HttpSettings {
            timeout: "forever".to_string(),
            ..Default::default()
        };
        assert!(http.timeout().is_err());
    }
}
