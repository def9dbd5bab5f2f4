use super::OutputConfig;
use crate::io::read_json_file;
use crate::paper::PaperParams;
use crate::reveal::RevealParams;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct RevealDemoConfig {
    pub image_height: f32,
    pub cover_depth: f32,
    #[serde(default = "default_ticks")]
    pub ticks: usize,
    #[serde(default)]
    pub reveal: RevealParams,
    #[serde(default)]
    pub paper: PaperParams,
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_ticks() -> usize {
    60
}

pub fn load_config(path: &Path) -> Result<RevealDemoConfig, String> {
    read_json_file(path).map_err(|e| format!("Config error: {e}"))
}
