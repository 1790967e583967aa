use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Tab to open at startup: "token", "transfer", or "staking".
    #[serde(default, rename = "initial-tab")]
    pub initial_tab: Option<String>,

    /// UI tick interval in milliseconds.
    #[serde(default, rename = "tick-ms")]
    pub tick_ms: Option<u64>,
}

pub fn load() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };
    toml::from_str::<Config>(&content).unwrap_or_default()
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("DMARKET_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("dmarket").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("dmarket").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "dmarket", "dmarket")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            "initial-tab = \"staking\"\ntick-ms = 100\n",
        )
        .unwrap();
        assert_eq!(config.initial_tab.as_deref(), Some("staking"));
        assert_eq!(config.tick_ms, Some(100));
    }

    #[test]
    fn test_empty_config_is_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.initial_tab.is_none());
        assert!(config.tick_ms.is_none());
    }
}
