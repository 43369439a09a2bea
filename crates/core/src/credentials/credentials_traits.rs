//! Credential repository and service traits.

use super::credentials_model::{Credential, NewCredential};
use crate::errors::Result;

/// Persistence contract for the credential list.
///
/// Storage is whole-list: implementations read and replace every record at
/// once. Order is insertion order.
pub trait CredentialRepositoryTrait: Send + Sync {
    /// Reads every stored credential.
    fn get_all(&self) -> Result<Vec<Credential>>;

    /// Replaces the stored list.
    fn set_all(&self, credentials: &[Credential]) -> Result<()>;
}

/// Business operations over stored credentials.
pub trait CredentialServiceTrait: Send + Sync {
    /// Names of all stored credentials, in insertion order.
    fn list_names(&self) -> Result<Vec<String>>;

    /// Validates and saves a new credential. Nothing is written on failure.
    fn add_credential(&self, new_credential: NewCredential) -> Result<Credential>;

    /// Deletes the credential with the given name.
    fn remove_credential(&self, name: &str) -> Result<()>;

    /// Returns the named credential, or the first stored one when `name` is `None`.
    fn select_credential(&self, name: Option<&str>) -> Result<Credential>;
}
