//! Error types for folio-core.

use folio_config::error::ConfigError;
use miette::Diagnostic;
use thiserror::Error;

use crate::aggregate::AggregateError;

#[derive(Error, Diagnostic, Debug)]
pub enum FolioError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Aggregate(#[from] AggregateError),

    #[error("Failed to render page: {0}")]
    #[diagnostic(
        code(folio::render),
        help("This is an internal error, please report it")
    )]
    Render(#[from] askama::Error),

    #[error("Error while {action}")]
    #[diagnostic(code(folio::io), help("Check file permissions and disk space"))]
    IoError {
        action: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(code(folio::json))]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    #[diagnostic(code(folio::error))]
    Custom(String),
}

/// Trait for adding context to IO errors.
pub trait ErrorContext<T> {
    fn with_context<C>(self, context: C) -> std::result::Result<T, FolioError>
    where
        C: FnOnce() -> String;
}

impl<T> ErrorContext<T> for std::io::Result<T> {
    fn with_context<C>(self, context: C) -> std::result::Result<T, FolioError>
    where
        C: FnOnce() -> String,
    {
        self.map_err(|err| {
            FolioError::IoError {
                action: context(),
                source: err,
            }
        })
    }
}
