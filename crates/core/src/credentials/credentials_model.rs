//! Credential domain models.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::credentials_constants::SECRET_LENGTH;
use crate::errors::{Result, ValidationError};

/// A stored API key and the name the user gave it.
///
/// `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub name: String,
    pub secret: String,
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("name", &self.name)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Input model for adding a credential.
#[derive(Clone)]
pub struct NewCredential {
    pub name: String,
    pub secret: String,
}

impl fmt::Debug for NewCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewCredential")
            .field("name", &self.name)
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl NewCredential {
    pub fn new(name: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            secret: secret.into(),
        }
    }

    /// Validates the form fields. Uniqueness is checked by the service.
    ///
    /// Surrounding whitespace is ignored for both fields.
    pub fn validate(&self) -> Result<()> {
        let actual = self.secret.trim().chars().count();
        if actual != SECRET_LENGTH {
            return Err(ValidationError::SecretLength {
                expected: SECRET_LENGTH,
                actual,
            }
            .into());
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName.into());
        }
        Ok(())
    }

    /// Returns the trimmed credential to persist.
    pub fn into_credential(self) -> Credential {
        Credential {
            name: self.name.trim().to_string(),
            secret: self.secret.trim().to_string(),
        }
    }
}
