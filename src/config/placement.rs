use super::{resolve_relative, OutputConfig};
use crate::io::read_json_file;
use crate::resolver::ResolverParams;
use crate::types::{AlignmentFilter, Detection};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct PlacementDemoConfig {
    /// JSON file holding the host's detections (a list or `{"detections": [...]}`).
    pub input: PathBuf,
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub resolver: ResolverParams,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    pub filter: AlignmentFilter,
    pub reference_height: Option<f32>,
    pub infinite_plane: bool,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DetectionFile {
    List(Vec<Detection>),
    Wrapped { detections: Vec<Detection> },
}

pub fn load_config(path: &Path) -> Result<PlacementDemoConfig, String> {
    read_json_file(path).map_err(|e| format!("Config error: {e}"))
}

/// Load detections, resolving `path` relative to the config file's directory.
pub fn load_detections(config_path: &Path, path: &Path) -> Result<Vec<Detection>, String> {
    let resolved = resolve_relative(config_path, path);
    let detections = match read_json_file::<DetectionFile>(&resolved)? {
        DetectionFile::List(list) => list,
        DetectionFile::Wrapped { detections } => detections,
    };
    Ok(detections)
}
