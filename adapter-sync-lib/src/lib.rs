pub mod adapters;
pub mod config;
pub mod download_client;
pub mod error;
pub mod github;
pub mod logging;
pub mod project_stats;
pub mod runtime_version;
pub mod sync;

#[cfg(test)]
pub mod test_helpers;
