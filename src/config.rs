use crate::errors::ConfigError;
use crate::password::PasswordRequest;

use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use serde::Deserialize;

const DIR_NAME: &str = "make-password";
const FILE_NAME: &str = "config.json";

/// Defaults read from the config file. Every field is optional and falls
/// back to the built-in default when absent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub length: i64,
    pub digits: bool,
    pub specials: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            length: PasswordRequest::DEFAULT_LENGTH,
            digits: true,
            specials: true,
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(DIR_NAME).join(FILE_NAME))
    }

    /// Loads `path` if given, otherwise the default location. Only an
    /// explicitly requested file is required to exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path)?
                .ok_or_else(|| ConfigError::NotFound(path.display().to_string())),
            None => match Self::default_path() {
                Some(path) => Ok(Self::load_from(&path)?.unwrap_or_default()),
                None => {
                    log::debug!("No config directory available, using built-in defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No config file at {}", path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let config: Config = serde_json::from_reader(BufReader::new(file))?;
        log::debug!("Loaded defaults from {}: {:?}", path.display(), config);

        Ok(Some(config))
    }
}
