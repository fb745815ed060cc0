use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum FetchError {
    #[error(transparent)]
    #[diagnostic(
        code(folio_github::network),
        help("Check your internet connection or try again later")
    )]
    Network(#[from] Box<ureq::Error>),

    #[error("HTTP {status}: {url}")]
    #[diagnostic(code(folio_github::http_error))]
    HttpError { status: u16, url: String },

    #[error("Invalid response from {url}")]
    #[diagnostic(
        code(folio_github::invalid_response),
        help("The GitHub API returned a body that could not be decoded")
    )]
    InvalidResponse { url: String },
}

impl FetchError {
    /// GitHub answers unauthenticated clients over their quota with 403 or 429.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::HttpError { status: 403 | 429, .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<ureq::Error> for FetchError {
    fn from(e: ureq::Error) -> Self {
        Self::Network(Box::new(e))
    }
}
