pub mod config;
pub mod database;
pub mod models;
pub mod services;
pub mod web;

use crate::config::{ConfigError, ServerConfig};
use crate::database::{seed_catalog, ActivityDirectory};

/// Builds the directory from `ACTIVITIES_SEED` or the built-in catalog.
pub fn load_directory(config: &ServerConfig) -> Result<ActivityDirectory, ConfigError> {
    let seed = match &config.seed_path {
        Some(path) => seed_catalog::load_seed_file(path)?,
        None => seed_catalog::builtin_seed()?,
    };
    ActivityDirectory::from_seed(seed, config.capacity_policy)
}
