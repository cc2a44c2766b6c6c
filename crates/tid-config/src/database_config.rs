use crate::DEFAULT_DATABASE_FILENAME;

use serde::Deserialize;

/// Where the tenancy database lives. Only a file name is configurable; it is
/// resolved inside the config directory, so one directory fully describes an
/// installation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file name, relative to the config directory.
    pub filename: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            filename: String::from(DEFAULT_DATABASE_FILENAME),
        }
    }
}
