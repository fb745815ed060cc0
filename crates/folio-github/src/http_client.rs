use std::{
    sync::{Arc, LazyLock, PoisonError, RwLock},
    time::Duration,
};

use ureq::{
    http::{self, HeaderMap, Uri},
    typestate::WithoutBody,
    Agent, Proxy, RequestBuilder,
};

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub user_agent: Option<String>,
    pub headers: Option<HeaderMap>,
    pub proxy: Option<Proxy>,
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    /// A config sending the `folio` user agent, with no proxy, extra headers or timeout.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio_github::http_client::ClientConfig;
    ///
    /// let cfg = ClientConfig::default();
    /// assert_eq!(cfg.user_agent.as_deref(), Some("folio"));
    /// assert!(cfg.timeout.is_none());
    /// ```
    fn default() -> Self {
        Self {
            user_agent: Some("folio".into()),
            proxy: None,
            headers: None,
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Builds an `Agent` from this config.
    ///
    /// Non-success statuses are returned as regular responses so callers can
    /// report the status code themselves.
    pub fn build(&self) -> Agent {
        let mut config = ureq::Agent::config_builder()
            .proxy(self.proxy.clone())
            .timeout_global(self.timeout)
            .http_status_as_error(false);

        if let Some(user_agent) = &self.user_agent {
            config = config.user_agent(user_agent);
        }

        config.build().into()
    }
}

struct SharedClient {
    agent: Agent,
    config: ClientConfig,
}

static SHARED_CLIENT_STATE: LazyLock<Arc<RwLock<SharedClient>>> = LazyLock::new(|| {
    let config = ClientConfig::default();
    let agent = config.build();

    Arc::new(RwLock::new(SharedClient {
        agent,
        config,
    }))
});

/// Handle to the process-wide agent configured through [`configure_http_client`].
#[derive(Clone, Default)]
pub struct SharedAgent;

impl SharedAgent {
    pub fn new() -> Self {
        Self
    }

    /// Creates a GET request with the globally configured headers applied.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use folio_github::http_client::SHARED_AGENT;
    ///
    /// let response = SHARED_AGENT.get("https://api.github.com/users/octocat").call();
    /// ```
    pub fn get<T>(&self, uri: T) -> RequestBuilder<WithoutBody>
    where
        Uri: TryFrom<T>,
        <Uri as TryFrom<T>>::Error: Into<http::Error>,
    {
        let state = SHARED_CLIENT_STATE
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let req = state.agent.get(uri);
        apply_headers(req, &state.config.headers)
    }

    pub fn config(&self) -> ClientConfig {
        SHARED_CLIENT_STATE
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .config
            .clone()
    }
}

fn apply_headers<B>(mut req: RequestBuilder<B>, headers: &Option<HeaderMap>) -> RequestBuilder<B> {
    if let Some(headers) = headers {
        for (key, value) in headers.iter() {
            req = req.header(key, value);
        }
    }
    req
}

pub static SHARED_AGENT: LazyLock<SharedAgent> = LazyLock::new(SharedAgent::new);

/// Applies `updater` to a copy of the shared config and swaps in a freshly
/// built agent.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use folio_github::http_client::configure_http_client;
///
/// configure_http_client(|cfg| {
///     cfg.timeout = Some(Duration::from_secs(10));
/// });
/// ```
pub fn configure_http_client<F>(updater: F)
where
    F: FnOnce(&mut ClientConfig),
{
    let mut state = SHARED_CLIENT_STATE
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    let mut new_config = state.config.clone();
    updater(&mut new_config);
    state.agent = new_config.build();
    state.config = new_config;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.user_agent, Some("folio".to_string()));
        assert!(config.proxy.is_none());
        assert!(config.headers.is_none());
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_client_config_build_with_timeout() {
        let config = ClientConfig {
            user_agent: Some("folio-test".to_string()),
            proxy: None,
            headers: None,
            timeout: Some(Duration::from_secs(5)),
        };
        let _agent = config.build();
    }

    #[test]
    fn test_configure_http_client() {
        configure_http_client(|cfg| {
            cfg.user_agent = Some("folio-test/1.0".to_string());
        });

        assert_eq!(
            SHARED_AGENT.config().user_agent.as_deref(),
            Some("folio-test/1.0")
        );
        let _ = SHARED_AGENT.get("https://api.github.com");
    }

    #[test]
    fn test_apply_headers_some() {
        let agent: ureq::Agent = ureq::Agent::config_builder().build().into();
        let req = agent.get("https://api.github.com");

        let mut headers = ureq::http::HeaderMap::new();
        headers.insert(
            ureq::http::header::ACCEPT,
            ureq::http::HeaderValue::from_static("application/json"),
        );

        let req = apply_headers(req, &Some(headers));
        let _ = req;
    }
}
