use std::time::Duration;

use log::{debug, info};
use semver::Version;

use super::updates_model::{ReleaseInfo, VersionStatus};
use crate::errors::{Error, Result};

/// Where the project publishes its current version.
pub const DEFAULT_VERSION_URL: &str =
    "https://raw.githubusercontent.com/Aens/Gw2RaidExplorer/master/version.txt";

const VERSION_CHECK_TIMEOUT_SECS: u64 = 30;

/// Parses a version, accepting the short `major.minor` form the version file uses.
fn parse_version(raw: &str) -> Result<Version> {
    let raw = raw.trim().trim_start_matches('v');
    let padded = match raw.matches('.').count() {
        0 => format!("{}.0.0", raw),
        1 => format!("{}.0", raw),
        _ => raw.to_string(),
    };
    Version::parse(&padded)
        .map_err(|e| Error::VersionCheck(format!("invalid version '{}': {}", raw, e)))
}

/// Compares the running version with the published release.
pub fn compare_versions(current: &str, release: &ReleaseInfo) -> Result<VersionStatus> {
    let running = parse_version(current)?;
    let latest = parse_version(&release.version)?;

    if latest > running {
        Ok(VersionStatus::UpdateAvailable {
            current: running.to_string(),
            latest: latest.to_string(),
            release_url: release.release_url.clone(),
        })
    } else {
        Ok(VersionStatus::UpToDate {
            current: running.to_string(),
        })
    }
}

/// Fetches the version file at `url` and compares it with `current`.
///
/// The file is served as plain text, so the body is decoded as JSON by hand.
pub async fn check_for_update(url: &str, current: &str) -> Result<VersionStatus> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(VERSION_CHECK_TIMEOUT_SECS))
        .user_agent(format!("RaidExplorer/{}", current))
        .build()
        .map_err(|e| Error::VersionCheck(e.to_string()))?;

    debug!("[Updates] GET {}", url);
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::VersionCheck(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::VersionCheck(format!("HTTP {}", status)));
    }

    let body = response
        .text()
        .await
        .map_err(|e| Error::VersionCheck(e.to_string()))?;
    let release: ReleaseInfo =
        serde_json::from_str(&body).map_err(|e| Error::VersionCheck(e.to_string()))?;

    let result = compare_versions(current, &release)?;
    info!("[Updates] {}", result.message());
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn release(version: &str) -> ReleaseInfo {
        ReleaseInfo {
            version: version.to_string(),
            release_url: Some("https://example.invalid/releases".to_string()),
        }
    }

    #[test]
    fn test_newer_release_is_reported() {
        let status = compare_versions("1.1.0", &release("1.2")).unwrap();
        assert_eq!(
            status,
            VersionStatus::UpdateAvailable {
                current: "1.1.0".to_string(),
                latest: "1.2.0".to_string(),
                release_url: Some("https://example.invalid/releases".to_string()),
            }
        );
        assert!(status.message().contains("1.2.0"));
    }

    #[test]
    fn test_same_or_older_release_is_up_to_date() {
        assert!(matches!(
            compare_versions("1.1.0", &release("1.1")).unwrap(),
            VersionStatus::UpToDate { .. }
        ));
        assert!(matches!(
            compare_versions("1.1.0", &release("1.0.9")).unwrap(),
            VersionStatus::UpToDate { .. }
        ));
    }

    #[test]
    fn test_minor_ten_is_newer_than_minor_nine() {
        let status = compare_versions("1.9", &release("1.10")).unwrap();
        assert!(matches!(status, VersionStatus::UpdateAvailable { .. }));
    }

    #[test]
    fn test_garbage_version_is_a_check_error() {
        let err = compare_versions("1.1.0", &release("latest")).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("I couldn't check if there is a new version available:"));
    }

    #[test]
    fn test_release_file_without_url() {
        let release: ReleaseInfo = serde_json::from_str(r#"{"version": "1.3"}"#).unwrap();
        assert_eq!(release.release_url, None);
    }
}
