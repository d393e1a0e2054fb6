use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::crypto::password::KdfParams;
use crate::error::LinepassError;

const HOME_DIR: &str = ".linepass";
const CONFIG_FILE: &str = "config.toml";
const STORE_FILE: &str = "store";

/// Overrides the linepass home directory (config file and default store).
pub const HOME_ENV: &str = "LINEPASS_HOME";
/// Overrides the store file path.
pub const STORE_ENV: &str = "LINEPASS_STORE";

const MIN_GENERATED_LEN: usize = 4;

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Store file path; `LINEPASS_STORE` takes precedence.
    pub store: Option<PathBuf>,
    /// Hold an advisory lock on the store while a command runs.
    pub lock: bool,
    pub kdf: KdfConfig,
    pub generator: GeneratorConfig,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct KdfConfig {
    pub m_cost: u32,
    pub t_cost: u32,
    pub p_cost: u32,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub length: usize,
    pub symbols: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: None,
            lock: true,
            kdf: KdfConfig::default(),
            generator: GeneratorConfig::default(),
        }
    }
}

impl Default for KdfConfig {
    fn default() -> Self {
        let kdf = KdfParams::default();
        Self {
            m_cost: kdf.m_cost,
            t_cost: kdf.t_cost,
            p_cost: kdf.p_cost,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: 20,
            symbols: true,
        }
    }
}

impl Config {
    pub fn kdf_params(&self) -> KdfParams {
        KdfParams {
            m_cost: self.kdf.m_cost,
            t_cost: self.kdf.t_cost,
            p_cost: self.kdf.p_cost,
        }
    }

    fn validate(&self) -> Result<(), LinepassError> {
        if self.generator.length < MIN_GENERATED_LEN {
            return Err(LinepassError::Config(format!(
                "generator.length must be at least {}",
                MIN_GENERATED_LEN
            )));
        }
        Ok(())
    }
}

/// Returns the linepass home directory: `LINEPASS_HOME` if set, else `~/.linepass`.
pub fn home_dir() -> Result<PathBuf, LinepassError> {
    if let Some(dir) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(HOME_DIR))
        .ok_or_else(|| LinepassError::Config("Could not determine home directory.".into()))
}

/// Returns the config file path inside a linepass home directory.
pub fn config_path(home: &Path) -> PathBuf {
    home.join(CONFIG_FILE)
}

/// Read the config from `home`. A missing file yields the defaults.
pub fn read(home: &Path) -> Result<Config, LinepassError> {
    let path = config_path(home);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let raw = std::fs::read_to_string(&path)?;
    let config: Config = toml::from_str(&raw).map_err(|e| LinepassError::Config(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Resolve the store file: explicit override, then the config's `store`, then
/// `<home>/store`.
pub fn store_path(env_override: Option<OsString>, home: &Path, config: &Config) -> PathBuf {
    if let Some(path) = env_override.filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    if let Some(path) = &config.store {
        return path.clone();
    }
    home.join(STORE_FILE)
}
