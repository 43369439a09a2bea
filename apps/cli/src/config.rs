use std::path::PathBuf;

use raidexplorer_core::updates::DEFAULT_VERSION_URL;
use raidexplorer_gw2_api::DEFAULT_API_BASE_URL;

const APP_DIR_NAME: &str = "raidexplorer";
const CREDENTIALS_FILE: &str = "credentials.json";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub api_base_url: String,
    pub log_format: String,
    pub version_url: String,
}

impl Config {
    /// Reads the process environment after loading a `.env` file, if any.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let data_dir = value("RAIDEXPLORER_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);
        let api_base_url = value("RAIDEXPLORER_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let log_format = value("RAIDEXPLORER_LOG_FORMAT").unwrap_or_else(|| "text".to_string());
        let version_url =
            value("RAIDEXPLORER_VERSION_URL").unwrap_or_else(|| DEFAULT_VERSION_URL.to_string());

        Self {
            data_dir,
            api_base_url,
            log_format,
            version_url,
        }
    }

    pub fn credentials_path(&self) -> PathBuf {
        self.data_dir.join(CREDENTIALS_FILE)
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join(SETTINGS_FILE)
    }
}

fn default_data_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.api_base_url, "https://api.guildwars2.com/v2");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.version_url, DEFAULT_VERSION_URL);
        assert!(config.data_dir.ends_with(APP_DIR_NAME));
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = config_from(&[
            ("RAIDEXPLORER_DATA_DIR", "/tmp/raids"),
            ("RAIDEXPLORER_API_BASE_URL", "http://localhost:9000/v2"),
            ("RAIDEXPLORER_LOG_FORMAT", "json"),
            ("RAIDEXPLORER_VERSION_URL", ""),
        ]);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/raids"));
        assert_eq!(config.api_base_url, "http://localhost:9000/v2");
        assert_eq!(config.log_format, "json");
        assert_eq!(config.version_url, DEFAULT_VERSION_URL);
        assert_eq!(
            config.credentials_path(),
            PathBuf::from("/tmp/raids/credentials.json")
        );
        assert_eq!(config.settings_path(), PathBuf::from("/tmp/raids/settings.json"));
    }
}
