//! Tests for the plugin updater.

use std::collections::HashMap;
use std::fs;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;

use super::*;
use crate::errors::{Error, Result};

const ARCDPS_BODY: &[u8] = b"arcdps binary v2";
const TEMPLATES_BODY: &[u8] = b"buildtemplates binary";
const MECHANICS_BODY: &[u8] = b"mechanics binary";

#[derive(Default)]
struct MockPluginSource {
    texts: HashMap<&'static str, String>,
    files: HashMap<&'static str, Vec<u8>>,
    requested: Mutex<Vec<String>>,
}

impl MockPluginSource {
    fn downloads(&self) -> Vec<String> {
        self.requested
            .lock()
            .unwrap()
            .iter()
            .filter(|url| !url.ends_with(".md5sum"))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl PluginSource for MockPluginSource {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        self.requested.lock().unwrap().push(url.to_string());
        self.texts
            .get(url)
            .cloned()
            .ok_or_else(|| Error::Plugin(format!("{} answered HTTP 404", url)))
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        self.requested.lock().unwrap().push(url.to_string());
        self.files
            .get(url)
            .cloned()
            .ok_or_else(|| Error::Plugin(format!("{} answered HTTP 404", url)))
    }
}

fn md5_hex(bytes: &[u8]) -> String {
    format!("{:x}", md5::compute(bytes))
}

fn arcdps_source() -> MockPluginSource {
    let mut source = MockPluginSource::default();
    source.texts.insert(
        Plugin::ArcDps.checksum_url(),
        format!("{}  x64/d3d9.dll\n", md5_hex(ARCDPS_BODY)),
    );
    source
        .files
        .insert(Plugin::ArcDps.files()[0].remote_url, ARCDPS_BODY.to_vec());
    source
        .files
        .insert(Plugin::ArcDps.files()[1].remote_url, TEMPLATES_BODY.to_vec());
    source
}

fn game_folder() -> (TempDir, String) {
    let dir = tempfile::tempdir().unwrap();
    let folder = dir.path().join("Guild Wars 2");
    fs::create_dir_all(folder.join("bin64")).unwrap();
    (dir, folder.to_string_lossy().into_owned())
}

#[test]
fn test_folder_must_be_set() {
    assert!(matches!(
        verify_installation_folder(None),
        Err(Error::InstallFolder(_))
    ));
    let err = verify_installation_folder(Some("  ")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "You need to set your GW2 installation folder first."
    );
}

#[test]
fn test_folder_must_be_the_game_folder() {
    let err = verify_installation_folder(Some("C:/Games/Other")).unwrap_err();
    assert_eq!(err.to_string(), "You didn't set the folder for Guild Wars 2");
    assert!(verify_installation_folder(Some("C:/Program Files/Guild Wars 2")).is_ok());
}

#[test]
fn test_checksum_formats() {
    let digest = "D41D8CD98F00B204E9800998ECF8427E";
    assert_eq!(
        ChecksumFormat::FirstToken.parse(&format!("{} d3d9.dll", digest)),
        Some(digest.to_ascii_lowercase())
    );
    assert_eq!(
        ChecksumFormat::Leading32.parse(&format!("{}d3d9_arcdps_mechanics.dll", digest)),
        Some(digest.to_ascii_lowercase())
    );
    assert_eq!(ChecksumFormat::FirstToken.parse("not-a-digest file"), None);
    assert_eq!(ChecksumFormat::Leading32.parse("short"), None);
}

#[test]
fn test_file_md5_spans_multiple_chunks() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("big.dll");
    let content = vec![7u8; 4096 * 3 + 17];
    fs::write(&path, &content).unwrap();

    assert_eq!(file_md5(&path).unwrap(), md5_hex(&content));
}

#[tokio::test]
async fn test_missing_plugin_is_installed() {
    let (_dir, folder) = game_folder();
    let source = Arc::new(arcdps_source());
    let updater = PluginUpdater::new(source.clone());

    let outcome = updater.update(Plugin::ArcDps, Some(&folder)).await.unwrap();

    assert_eq!(outcome, UpdateOutcome::Installed);
    let bin = std::path::Path::new(&folder).join("bin64");
    assert_eq!(fs::read(bin.join("d3d9.dll")).unwrap(), ARCDPS_BODY);
    assert_eq!(
        fs::read(bin.join("d3d9_arcdps_buildtemplates.dll")).unwrap(),
        TEMPLATES_BODY
    );
    assert!(!bin.join("d3d9.dll.partial").exists());
    // No checksum lookup when nothing is installed.
    assert_eq!(source.requested.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_matching_checksum_is_already_current() {
    let (_dir, folder) = game_folder();
    let bin = std::path::Path::new(&folder).join("bin64");
    fs::write(bin.join("d3d9.dll"), ARCDPS_BODY).unwrap();
    let source = Arc::new(arcdps_source());
    let updater = PluginUpdater::new(source.clone());

    let outcome = updater.update(Plugin::ArcDps, Some(&folder)).await.unwrap();

    assert_eq!(outcome, UpdateOutcome::AlreadyCurrent);
    assert!(source.downloads().is_empty());
    assert_eq!(outcome.message(Plugin::ArcDps), "ArcDps was already updated.");
}

#[tokio::test]
async fn test_stale_plugin_is_replaced() {
    let (_dir, folder) = game_folder();
    let bin = std::path::Path::new(&folder).join("bin64");
    fs::write(bin.join("d3d9.dll"), b"arcdps binary v1").unwrap();
    let source = Arc::new(arcdps_source());
    let updater = PluginUpdater::new(source.clone());

    let outcome = updater.update(Plugin::ArcDps, Some(&folder)).await.unwrap();

    assert_eq!(outcome, UpdateOutcome::Updated);
    assert_eq!(fs::read(bin.join("d3d9.dll")).unwrap(), ARCDPS_BODY);
    assert_eq!(source.downloads().len(), 2);
}

#[tokio::test]
async fn test_mechanics_uses_leading_checksum() {
    let (_dir, folder) = game_folder();
    let bin = std::path::Path::new(&folder).join("bin64");
    fs::write(bin.join("d3d9_arcdps_mechanics.dll"), MECHANICS_BODY).unwrap();

    let mut source = MockPluginSource::default();
    source.texts.insert(
        Plugin::Mechanics.checksum_url(),
        format!("{}\r\n", md5_hex(MECHANICS_BODY)),
    );
    let updater = PluginUpdater::new(Arc::new(source));

    let outcome = updater
        .update(Plugin::Mechanics, Some(&folder))
        .await
        .unwrap();
    assert_eq!(outcome, UpdateOutcome::AlreadyCurrent);
}

#[tokio::test]
async fn test_wrong_folder_touches_nothing() {
    let source = Arc::new(arcdps_source());
    let updater = PluginUpdater::new(source.clone());

    let err = updater
        .update(Plugin::ArcDps, Some("/tmp/not-the-game"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InstallFolder(_)));
    assert!(source.requested.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_download_keeps_existing_file() {
    let (_dir, folder) = game_folder();
    let bin = std::path::Path::new(&folder).join("bin64");
    fs::write(bin.join("d3d9.dll"), b"arcdps binary v1").unwrap();
    let mut source = arcdps_source();
    source.files.clear();
    let updater = PluginUpdater::new(Arc::new(source));

    assert!(updater.update(Plugin::ArcDps, Some(&folder)).await.is_err());
    assert_eq!(fs::read(bin.join("d3d9.dll")).unwrap(), b"arcdps binary v1");
}

#[test]
fn test_plugin_parsing() {
    assert_eq!("ArcDps".parse::<Plugin>().unwrap(), Plugin::ArcDps);
    assert_eq!("mechanics".parse::<Plugin>().unwrap(), Plugin::Mechanics);
    assert!("reshade".parse::<Plugin>().is_err());
}
