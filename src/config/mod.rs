//! JSON configuration for the demo binaries.
//!
//! Relative paths inside a config file (inputs and outputs alike) are taken
//! relative to the directory holding that config file.

pub mod placement;
pub mod reveal;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Optional report destination shared by the demos.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub json_out: Option<PathBuf>,
}

impl OutputConfig {
    /// `json_out` resolved against the config file's directory.
    pub fn json_out_path(&self, config_path: &Path) -> Option<PathBuf> {
        self.json_out
            .as_deref()
            .map(|path| resolve_relative(config_path, path))
    }
}

/// Resolve `path` against the directory of `config_path` unless absolute.
pub fn resolve_relative(config_path: &Path, path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    }
}
