use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PasswordError {
    #[error("invalid password length: {0} (must be greater than zero)")]
    InvalidLength(i64),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config file not found: {0}")]
    NotFound(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
