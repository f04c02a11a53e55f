use thiserror::Error;

/// Errors produced while loading application configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failure to create the application-instance directory that holds the
    /// default SQLite database file.
    #[error("Failed to create instance directory: {0}")]
    InstanceDir(#[from] std::io::Error),
}
