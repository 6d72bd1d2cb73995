use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::AmbientError;

const CONFIG_DIR: &str = "ambient";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from the default location, falling back to defaults on
/// any error (missing home, missing file, unreadable file, invalid TOML).
pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };

    load_config_from_path(&path)
}

pub fn load_config_from_path(path: &Path) -> Config {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return Config::default(),
    };

    let mut contents = String::new();
    if file.read_to_string(&mut contents).is_err() {
        return Config::default();
    }

    parse_config_toml(&contents)
}

pub fn parse_config_toml(content: &str) -> Config {
    match toml::from_str::<Config>(content) {
        Ok(config) => config,
        Err(_) => Config::default(),
    }
}

/// Strict load for an explicitly requested config file. Unlike the default
/// lookup, a missing or malformed file here is an error the user should see.
pub fn read_config_file(path: &Path) -> Result<Config, AmbientError> {
    let contents = std::fs::read_to_string(path).map_err(|e| AmbientError::Config {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    toml::from_str::<Config>(&contents).map_err(|e| AmbientError::Config {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod storage_tests;
