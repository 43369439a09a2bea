//! Plugin definitions and update outcomes.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// A file installed by a plugin, relative to the game installation folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginFile {
    pub local_path: &'static str,
    pub remote_url: &'static str,
}

/// How the published checksum file encodes the MD5 digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumFormat {
    /// `md5sum` output: the digest is the first whitespace-separated token.
    FirstToken,
    /// The digest is the first 32 characters of the file.
    Leading32,
}

impl ChecksumFormat {
    /// Extracts the lowercase hex digest from a checksum file body.
    pub fn parse(&self, body: &str) -> Option<String> {
        let digest = match self {
            ChecksumFormat::FirstToken => body.split_whitespace().next()?,
            ChecksumFormat::Leading32 => body.trim_start().get(..32)?,
        };
        if digest.len() == 32 && digest.chars().all(|c| c.is_ascii_hexdigit()) {
            Some(digest.to_ascii_lowercase())
        } else {
            None
        }
    }
}

/// The plugins this application can install.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Plugin {
    ArcDps,
    Mechanics,
}

const ARCDPS_FILES: &[PluginFile] = &[
    PluginFile {
        local_path: "bin64/d3d9.dll",
        remote_url: "https://www.deltaconnected.com/arcdps/x64/d3d9.dll",
    },
    PluginFile {
        local_path: "bin64/d3d9_arcdps_buildtemplates.dll",
        remote_url:
            "https://www.deltaconnected.com/arcdps/x64/buildtemplates/d3d9_arcdps_buildtemplates.dll",
    },
];

const MECHANICS_FILES: &[PluginFile] = &[PluginFile {
    local_path: "bin64/d3d9_arcdps_mechanics.dll",
    remote_url: "http://martionlabs.com/wp-content/uploads/d3d9_arcdps_mechanics.dll",
}];

impl Plugin {
    pub fn display_name(&self) -> &'static str {
        match self {
            Plugin::ArcDps => "ArcDps",
            Plugin::Mechanics => "ArcDps Mechanics Addon",
        }
    }

    /// Files to download. The first one is hashed to detect updates.
    pub fn files(&self) -> &'static [PluginFile] {
        match self {
            Plugin::ArcDps => ARCDPS_FILES,
            Plugin::Mechanics => MECHANICS_FILES,
        }
    }

    pub fn checksum_url(&self) -> &'static str {
        match self {
            Plugin::ArcDps => "https://www.deltaconnected.com/arcdps/x64/d3d9.dll.md5sum",
            Plugin::Mechanics => {
                "http://martionlabs.com/wp-content/uploads/d3d9_arcdps_mechanics.dll.md5sum"
            }
        }
    }

    pub fn checksum_format(&self) -> ChecksumFormat {
        match self {
            Plugin::ArcDps => ChecksumFormat::FirstToken,
            Plugin::Mechanics => ChecksumFormat::Leading32,
        }
    }
}

impl fmt::Display for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Plugin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "arcdps" => Ok(Plugin::ArcDps),
            "mechanics" | "arcdps-mechanics" => Ok(Plugin::Mechanics),
            other => Err(format!("unknown plugin '{}' (expected arcdps or mechanics)", other)),
        }
    }
}

/// What an update run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateOutcome {
    /// Local file matches the published checksum; nothing downloaded.
    AlreadyCurrent,
    /// Local file differed and every file was replaced.
    Updated,
    /// Plugin was not installed and every file was downloaded.
    Installed,
}

impl UpdateOutcome {
    pub fn message(&self, plugin: Plugin) -> String {
        match self {
            UpdateOutcome::AlreadyCurrent => format!("{} was already updated.", plugin),
            UpdateOutcome::Updated => format!("{} has been updated.", plugin),
            UpdateOutcome::Installed => format!("{} has been installed.", plugin),
        }
    }
}
