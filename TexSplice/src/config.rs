//! Persistent configuration
//!
//! Read from `config.toml` in the platform config directory
//! (`~/.config/texsplice/` on Linux) or from an explicit path. Every key is
//! optional.
//!
//! ```toml
//! index_file_name = "dds_index.txt"
//! repair_log_name = "dds_repair_log.txt"
//! output_dir_name = "extracted_dds"
//! texconv_path = "C:/Tools/texconv.exe"
//! regenerate_mipmaps = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::extract::ExtractOptions;
use crate::index::DEFAULT_INDEX_NAME;
use crate::mipmap::{DEFAULT_TEXCONV, Texconv};
use crate::repack::{DEFAULT_REPAIR_LOG_NAME, RepackOptions};

const CONFIG_DIR_NAME: &str = "texsplice";
const CONFIG_FILE_NAME: &str = "config.toml";

// Default value functions for serde
fn default_index_file_name() -> String {
    DEFAULT_INDEX_NAME.to_string()
}
fn default_repair_log_name() -> String {
    DEFAULT_REPAIR_LOG_NAME.to_string()
}
fn default_output_dir_name() -> String {
    "extracted_dds".to_string()
}
fn default_texconv_path() -> PathBuf {
    PathBuf::from(DEFAULT_TEXCONV)
}
fn default_true() -> bool {
    true
}

/// Tool configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TexSpliceConfig {
    /// Index file name inside an extraction folder
    #[serde(default = "default_index_file_name")]
    pub index_file_name: String,
    /// Repair log file name inside an extraction folder
    #[serde(default = "default_repair_log_name")]
    pub repair_log_name: String,
    /// Output folder for single-file extraction when none is given
    #[serde(default = "default_output_dir_name")]
    pub output_dir_name: String,
    /// Program used for mipmap regeneration
    #[serde(default = "default_texconv_path")]
    pub texconv_path: PathBuf,
    /// Regenerate mipmaps of replacements whose original had more than one level
    #[serde(default = "default_true")]
    pub regenerate_mipmaps: bool,
}

impl Default for TexSpliceConfig {
    fn default() -> Self {
        Self {
            index_file_name: default_index_file_name(),
            repair_log_name: default_repair_log_name(),
            output_dir_name: default_output_dir_name(),
            texconv_path: default_texconv_path(),
            regenerate_mipmaps: true,
        }
    }
}

impl TexSpliceConfig {
    /// Default location of the config file, if the platform has a config dir.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::InvalidConfig {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load configuration from `path`.
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text, path)
    }

    /// Load `explicit` if given, else the default file if it exists, else
    /// defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => {
                tracing::debug!("Loading config from {}", path.display());
                Self::load_from(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Write this configuration as TOML to `path`, creating parent folders.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let text = toml::to_string_pretty(self).map_err(|e| Error::InvalidConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, text)?;
        Ok(())
    }

    #[must_use]
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            index_name: self.index_file_name.clone(),
        }
    }

    #[must_use]
    pub fn repack_options(&self) -> RepackOptions {
        RepackOptions {
            index_name: self.index_file_name.clone(),
            repair_log_name: self.repair_log_name.clone(),
        }
    }

    /// The configured regenerator, or `None` when regeneration is disabled.
    #[must_use]
    pub fn regenerator(&self) -> Option<Texconv> {
        self.regenerate_mipmaps
            .then(|| Texconv::new(self.texconv_path.clone()))
    }
}
