use std::result::Result as StdResult;

use duesboard_config::ConfigError;
use duesboard_storage_json::StorageError;
use thiserror::Error;

/// Unified error type for the application layers.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Data error: {0}")]
    Storage(#[from] StorageError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = StdResult<T, AppError>;

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<StorageError> for CliError {
    fn from(err: StorageError) -> Self {
        CliError::from(AppError::from(err))
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::from(AppError::from(err))
    }
}
