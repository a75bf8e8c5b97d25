//! Configuration loading and parsing.
//!
//! Parses `tinr.toml` (or an override path provided by the binary). Every
//! field is optional; a missing file or a file that fails to parse yields the
//! defaults, which reproduce the classic TINR look and input limits. Unknown
//! fields are ignored so older binaries tolerate newer files.
//!
//! ```toml
//! [ui]
//! title = "TINR - TIN Reborn"
//! tip = "Type :h to open internal help file"
//!
//! [input]
//! command_len = 25
//! line_len = 1024
//! number_len = 8
//! path_len = 256
//! ```

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "tinr.toml";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct UiConfig {
    #[serde(default = "UiConfig::default_title")]
    pub title: String,
    #[serde(default = "UiConfig::default_tip")]
    pub tip: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: Self::default_title(),
            tip: Self::default_tip(),
        }
    }
}

impl UiConfig {
    fn default_title() -> String {
        "TINR - TIN Reborn".to_string()
    }
    fn default_tip() -> String {
        "Type :h to open internal help file".to_string()
    }
}

/// Maximum characters accepted at each kind of prompt.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct InputConfig {
    #[serde(default = "InputConfig::default_command_len")]
    pub command_len: usize,
    #[serde(default = "InputConfig::default_line_len")]
    pub line_len: usize,
    #[serde(default = "InputConfig::default_number_len")]
    pub number_len: usize,
    #[serde(default = "InputConfig::default_path_len")]
    pub path_len: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            command_len: Self::default_command_len(),
            line_len: Self::default_line_len(),
            number_len: Self::default_number_len(),
            path_len: Self::default_path_len(),
        }
    }
}

impl InputConfig {
    /// Confirmation prompts read a single character.
    pub const CONFIRM_LEN: usize = 1;

    const fn default_command_len() -> usize {
        25
    }
    const fn default_line_len() -> usize {
        1024
    }
    const fn default_number_len() -> usize {
        8
    }
    const fn default_path_len() -> usize {
        256
    }

    /// Raise zero limits to one so every prompt can accept input.
    fn normalized(mut self) -> Self {
        for (name, slot) in [
            ("command_len", &mut self.command_len),
            ("line_len", &mut self.line_len),
            ("number_len", &mut self.number_len),
            ("path_len", &mut self.path_len),
        ] {
            if *slot == 0 {
                info!(target: "config", field = name, "input_limit_raised_to_one");
                *slot = 1;
            }
        }
        self
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub input: InputConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub raw: Option<String>,     // original file string (optional)
    pub source: Option<PathBuf>, // path the file was read from
    pub file: ConfigFile,        // parsed (or default) data
}

/// Best-effort config path: working directory first, then the platform config dir.
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("tinr").join(CONFIG_FILE_NAME);
    }
    local
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(mut file) => {
            file.input = file.input.normalized();
            info!(target: "config", path = %path.display(), "config_loaded");
            Ok(Config {
                raw: Some(content),
                source: Some(path),
                file,
            })
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed");
            Ok(Config::default())
        }
    }
}
