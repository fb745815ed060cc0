use error::FolioError;

pub mod aggregate;
pub mod error;
pub mod render;
pub mod repository;

#[cfg(test)]
pub(crate) mod test_utils;

pub type FolioResult<T> = std::result::Result<T, FolioError>;
