use log::{debug, info};
use std::sync::{Arc, Mutex};

use super::credentials_model::{Credential, NewCredential};
use super::credentials_traits::{CredentialRepositoryTrait, CredentialServiceTrait};
use crate::errors::{Error, Result, ValidationError};

/// Service for managing stored API keys.
pub struct CredentialService {
    repository: Arc<dyn CredentialRepositoryTrait>,
    // Serializes read-modify-write cycles against the repository.
    write_lock: Mutex<()>,
}

impl CredentialService {
    pub fn new(repository: Arc<dyn CredentialRepositoryTrait>) -> Self {
        Self {
            repository,
            write_lock: Mutex::new(()),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|_| Error::CredentialStore("credential lock poisoned".to_string()))
    }
}

impl CredentialServiceTrait for CredentialService {
    fn list_names(&self) -> Result<Vec<String>> {
        Ok(self
            .repository
            .get_all()?
            .into_iter()
            .map(|credential| credential.name)
            .collect())
    }

    fn add_credential(&self, new_credential: NewCredential) -> Result<Credential> {
        new_credential.validate()?;
        let credential = new_credential.into_credential();

        let _guard = self.lock()?;
        let mut credentials = self.repository.get_all()?;
        if credentials.iter().any(|c| c.name == credential.name) {
            return Err(ValidationError::DuplicateName(credential.name).into());
        }

        credentials.push(credential.clone());
        self.repository.set_all(&credentials)?;
        info!("[Credentials] Stored API key '{}'", credential.name);
        Ok(credential)
    }

    fn remove_credential(&self, name: &str) -> Result<()> {
        let _guard = self.lock()?;
        let mut credentials = self.repository.get_all()?;
        let before = credentials.len();
        credentials.retain(|c| c.name != name);
        if credentials.len() == before {
            return Err(Error::CredentialNotFound(name.to_string()));
        }

        self.repository.set_all(&credentials)?;
        info!("[Credentials] Removed API key '{}'", name);
        Ok(())
    }

    fn select_credential(&self, name: Option<&str>) -> Result<Credential> {
        let credentials = self.repository.get_all()?;
        let selected = match name {
            Some(name) => credentials
                .into_iter()
                .find(|c| c.name == name)
                .ok_or_else(|| Error::CredentialNotFound(name.to_string()))?,
            None => credentials.into_iter().next().ok_or(Error::NoCredentials)?,
        };
        debug!("[Credentials] Selected API key '{}'", selected.name);
        Ok(selected)
    }
}
