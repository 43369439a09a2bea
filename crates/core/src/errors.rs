//! Core error types for Raid Explorer.
//!
//! Remote fetch failures keep their classified [`ApiError`] form; storage
//! collaborators convert their own failures into the string-carrying variants
//! so this type stays independent of any persistence format.

use raidexplorer_gw2_api::ApiError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Api(#[from] ApiError),

    #[error("Credential store error: {0}")]
    CredentialStore(String),

    #[error("No stored API key named '{0}'")]
    CredentialNotFound(String),

    #[error("You have not added any API key yet.")]
    NoCredentials,

    #[error("A load is already in progress")]
    LoadInProgress,

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    InstallFolder(String),

    #[error("Plugin update failed: {0}")]
    Plugin(String),

    #[error("I couldn't check if there is a new version available: {0}")]
    VersionCheck(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for user input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The provided key must be exactly {expected} characters long (got {actual})")]
    SecretLength { expected: usize, actual: usize },

    #[error("You must provide a name for that key")]
    MissingName,

    #[error("An API key named '{0}' already exists")]
    DuplicateName(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
