use crate::conf::{AnalyzerConfig, ConfigError};
use std::fs;
use std::path::Path;

/// Built-in defaults, overridden key by key by the JSON file at `path`.
pub fn load_config(path: Option<&Path>) -> Result<AnalyzerConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(AnalyzerConfig::default());
    };

    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    serde_json::from_str(&s).map_err(|e| ConfigError::parse(path, e))
}

/// Write `cfg` as pretty JSON, loadable again with [`load_config`].
pub fn export_config(cfg: &AnalyzerConfig, path: &Path) -> Result<(), ConfigError> {
    let s = serde_json::to_string_pretty(cfg).map_err(ConfigError::Serialize)?;
    fs::write(path, s).map_err(|source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}
