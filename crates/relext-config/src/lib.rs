use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// File locations for one conversion run.
///
/// Every key is optional in the TOML file; missing keys fall back to the
/// conventional names in the working directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Raw text to convert.
    pub input: PathBuf,
    /// Destination of the rendered HTML.
    pub output: PathBuf,
    /// Fragment written before the rendered blocks.
    pub pre: PathBuf,
    /// Fragment written after the rendered blocks.
    pub post: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input.relext"),
            output: PathBuf::from("output.html"),
            pre: PathBuf::from("pre.txt"),
            post: PathBuf::from("post.txt"),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config.expanded()))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/relext");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expands shell variables and tilde in every path, keeping the literal
    /// path when expansion fails.
    fn expanded(self) -> Self {
        let expand = |path: PathBuf| Self::expand_path(&path).unwrap_or(path);
        Self {
            input: expand(self.input),
            output: expand(self.output),
            pre: expand(self.pre),
            post: expand(self.post),
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
