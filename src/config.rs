use crate::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://instance/app.db?mode=rwc";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const INSTANCE_DIR: &str = "instance";

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
}

impl Config {
    /// Loads configuration from environment variables with local defaults.
    ///
    /// When `DATABASE_URL` is unset the application-instance directory is
    /// created and a single-file SQLite database inside it is used.
    ///
    /// # Returns
    /// - `Ok(Config)` - Loaded configuration
    /// - `Err(AppError::ConfigErr)` - Failed to create the instance directory
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = match std::env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                std::fs::create_dir_all(INSTANCE_DIR).map_err(ConfigError::InstanceDir)?;
                DEFAULT_DATABASE_URL.to_string()
            }
        };

        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        Ok(Self {
            database_url,
            bind_addr,
        })
    }
}
