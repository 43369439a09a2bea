use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info};

use super::addons_model::{Plugin, UpdateOutcome};
use super::addons_traits::PluginSource;
use crate::errors::{Error, Result};

const HASH_CHUNK_SIZE: usize = 4096;

/// Marker every Guild Wars 2 installation path contains.
const GAME_FOLDER_MARKER: &str = "Guild Wars 2";

/// Checks the configured installation folder before touching any file.
pub fn verify_installation_folder(folder: Option<&str>) -> Result<PathBuf> {
    let folder = folder.map(str::trim).unwrap_or_default();
    if folder.is_empty() {
        return Err(Error::InstallFolder(
            "You need to set your GW2 installation folder first.".to_string(),
        ));
    }
    if !folder.contains(GAME_FOLDER_MARKER) {
        return Err(Error::InstallFolder(
            "You didn't set the folder for Guild Wars 2".to_string(),
        ));
    }
    Ok(PathBuf::from(folder))
}

/// Lowercase hex MD5 of a file, read in fixed-size chunks.
pub fn file_md5(path: &Path) -> Result<String> {
    let mut file = fs::File::open(path)?;
    let mut context = md5::Context::new();
    let mut buffer = [0u8; HASH_CHUNK_SIZE];
    loop {
        let read = file.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        context.consume(&buffer[..read]);
    }
    Ok(format!("{:x}", context.compute()))
}

/// Installs or updates plugins by comparing the local primary file against
/// the published checksum.
pub struct PluginUpdater {
    source: Arc<dyn PluginSource>,
}

impl PluginUpdater {
    pub fn new(source: Arc<dyn PluginSource>) -> Self {
        Self { source }
    }

    pub async fn update(&self, plugin: Plugin, install_folder: Option<&str>) -> Result<UpdateOutcome> {
        let folder = verify_installation_folder(install_folder)?;
        let files = plugin.files();
        let primary = files
            .first()
            .map(|file| folder.join(file.local_path))
            .ok_or_else(|| Error::Plugin(format!("{} has no files to install", plugin)))?;

        let outcome = if primary.is_file() {
            let local = file_md5(&primary)?;
            let body = self.source.fetch_text(plugin.checksum_url()).await?;
            let remote = plugin.checksum_format().parse(&body).ok_or_else(|| {
                Error::Plugin(format!("Unrecognized checksum file for {}", plugin))
            })?;
            debug!("[Addons] {} local md5 {} remote md5 {}", plugin, local, remote);

            if local == remote {
                info!("[Addons] {} is already current", plugin);
                return Ok(UpdateOutcome::AlreadyCurrent);
            }
            UpdateOutcome::Updated
        } else {
            UpdateOutcome::Installed
        };

        for file in files {
            let bytes = self.source.fetch_bytes(file.remote_url).await?;
            let target = folder.join(file.local_path);
            write_replacing(&target, &bytes)?;
            debug!("[Addons] Wrote {} ({} bytes)", target.display(), bytes.len());
        }

        info!("[Addons] {}: {:?}", plugin, outcome);
        Ok(outcome)
    }
}

/// Writes next to the target and renames over it, so a failed download never
/// leaves a truncated DLL behind.
fn write_replacing(target: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut partial = target.as_os_str().to_owned();
    partial.push(".partial");
    let partial = PathBuf::from(partial);

    fs::write(&partial, bytes)?;
    fs::rename(&partial, target)?;
    Ok(())
}
