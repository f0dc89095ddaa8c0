use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional TOML settings file. Every field may be omitted; command-line
/// flags take precedence over anything set here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub store_endpoint: Option<String>,
    pub class_id: Option<String>,
    pub teacher_id: Option<String>,
    pub batch_cap: Option<usize>,
    pub request_timeout_secs: Option<u64>,
    pub min_latency_ms: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: FileConfig = toml::from_str(&raw)?;
        Ok(config)
    }
}
