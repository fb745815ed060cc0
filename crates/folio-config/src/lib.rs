pub mod annotations;
pub mod config;
pub mod error;
pub mod http;
pub mod limits;
pub mod profile;
pub mod time;
pub mod utils;

#[cfg(test)]
pub mod test_utils;
