use serde::{Deserialize, Serialize};

/// The published version file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReleaseInfo {
    pub version: String,
    #[serde(default)]
    pub release_url: Option<String>,
}

/// Result of comparing the running version with the published one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VersionStatus {
    UpToDate {
        current: String,
    },
    UpdateAvailable {
        current: String,
        latest: String,
        release_url: Option<String>,
    },
}

impl VersionStatus {
    pub fn message(&self) -> String {
        match self {
            VersionStatus::UpToDate { current } => {
                format!("You are running the latest version ({}).", current)
            }
            VersionStatus::UpdateAvailable {
                current,
                latest,
                release_url,
            } => {
                let mut message = format!(
                    "There is a new version available: {} (you have {}).",
                    latest, current
                );
                if let Some(url) = release_url {
                    message.push_str(&format!(" Download it from {}", url));
                }
                message
            }
        }
    }
}
