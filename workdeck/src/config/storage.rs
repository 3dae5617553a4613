use std::fs;
use std::path::{Path, PathBuf};

use super::errors::ConfigError;
use super::model::ShellConfig;

/// Status describing how the config was loaded from disk.
#[derive(Debug, Clone)]
pub(crate) enum ConfigLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading the config from disk.
#[derive(Debug, Clone)]
pub(crate) struct ConfigLoad {
    config: ShellConfig,
    status: ConfigLoadStatus,
}

impl ConfigLoad {
    fn new(config: ShellConfig, status: ConfigLoadStatus) -> Self {
        Self { config, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (ShellConfig, ConfigLoadStatus) {
        (self.config, self.status)
    }
}

/// Load the config from its default location, degrading to defaults.
pub(crate) fn load_initial_config() -> ShellConfig {
    let path = config_path();
    match load_config_from_path(&path) {
        Ok(load) => {
            let (config, status) = load.into_parts();
            match status {
                ConfigLoadStatus::Loaded => {
                    log::info!("loaded config from {}", path.display());
                },
                ConfigLoadStatus::Missing => {
                    log::debug!(
                        "no config at {}, using defaults",
                        path.display()
                    );
                },
                ConfigLoadStatus::Invalid(message) => {
                    log::warn!(
                        "invalid config at {}, using defaults: {message}",
                        path.display()
                    );
                },
            }
            config
        },
        Err(err) => {
            log::warn!("failed to read config, using defaults: {err}");
            ShellConfig::default()
        },
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigLoad, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ConfigLoad::new(
                ShellConfig::default(),
                ConfigLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    match serde_json::from_str::<ShellConfig>(&data) {
        Ok(config) => Ok(ConfigLoad::new(config, ConfigLoadStatus::Loaded)),
        Err(err) => Ok(ConfigLoad::new(
            ShellConfig::default(),
            ConfigLoadStatus::Invalid(format!("{err}")),
        )),
    }
}

fn config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("workdeck")
            .join("config.json");
    }

    std::env::temp_dir().join("workdeck").join("config.json")
}
