use thiserror::Error;

const DEFAULT_PORT: u16 = 3333;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Environment variable {0} has an invalid value: {1}")]
    InvalidEnvVar(String, String),
}

/// Process-wide configuration, read once at startup and immutable after.
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub client_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar("PORT".to_string(), raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            client_url: std::env::var("CLIENT_URL")
                .map_err(|_| ConfigError::MissingEnvVar("CLIENT_URL".to_string()))?,
        })
    }
}
