use std::{fs, path::PathBuf, sync::Mutex};

use serde::{Deserialize, Serialize};

use raidexplorer_core::{
    credentials::{Credential, CredentialRepositoryTrait},
    errors::Error,
    Result,
};

const CURRENT_VERSION: u32 = 1;

/// Stores API keys as a versioned JSON document in the data directory.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    lock: Mutex<()>,
}

#[derive(Serialize, Deserialize, Default)]
struct CredentialsFile {
    version: u32,
    #[serde(default)]
    credentials: Vec<Credential>,
}

impl FileCredentialStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    fn guard(&self) -> Result<std::sync::MutexGuard<'_, ()>> {
        self.lock
            .lock()
            .map_err(|_| Error::CredentialStore("Credential file lock poisoned".into()))
    }

    fn load_locked(&self) -> Result<Vec<Credential>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let raw = fs::read(&self.path)?;
        if raw.is_empty() {
            return Ok(Vec::new());
        }

        let file: CredentialsFile = serde_json::from_slice(&raw).map_err(|e| {
            Error::CredentialStore(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))
        })?;
        if file.version > CURRENT_VERSION {
            return Err(Error::CredentialStore(format!(
                "Unsupported credentials file version {}",
                file.version
            )));
        }
        Ok(file.credentials)
    }

    fn persist_locked(&self, credentials: &[Credential]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = CredentialsFile {
            version: CURRENT_VERSION,
            credentials: credentials.to_vec(),
        };
        let json = serde_json::to_string_pretty(&file)?;

        let mut tmp = self.path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl CredentialRepositoryTrait for FileCredentialStore {
    fn get_all(&self) -> Result<Vec<Credential>> {
        let _guard = self.guard()?;
        self.load_locked()
    }

    fn set_all(&self, credentials: &[Credential]) -> Result<()> {
        let _guard = self.guard()?;
        self.persist_locked(credentials)
    }
}
