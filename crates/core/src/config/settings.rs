use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::TsLintOptions;

/// File names searched for, in order, in every directory
pub const CONFIG_FILE_NAMES: [&str; 2] = [".tslint-runner.json", "tslint-runner.json"];

impl TsLintOptions {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let options = serde_json::from_str(&contents).map_err(|e| {
            Error::ConfigError(format!("Failed to parse {}: {e}", path.display()))
        })?;
        debug!("Loaded lint options from {}", path.display());
        Ok(options)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize options: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Walk up from `start_path` and return the first options file found.
    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.is_file() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// Load the nearest options file, or the defaults when there is none.
    pub fn discover(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => Self::load_from_file(&path),
            None => {
                debug!("No options file found above {}", start_path.display());
                Ok(Self::default())
            }
        }
    }
}
