//! Credentials module - stored API keys, validation, and the repository seam.

mod credentials_constants;
mod credentials_model;
mod credentials_service;
mod credentials_traits;


// Re-export the public interface
pub use credentials_constants::*;
pub use credentials_model::{Credential, NewCredential};
pub use credentials_service::CredentialService;
pub use credentials_traits::{CredentialRepositoryTrait, CredentialServiceTrait};
