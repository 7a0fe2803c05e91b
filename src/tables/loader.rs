use std::fs;
use std::path::Path;

use super::EngineConfig;
use crate::error::{EngineError, Result};

/// Conventional file name written by `roi-engine init`
pub const CONFIG_FILE_NAME: &str = ".roi-engine.toml";

/// Pure function to parse and validate config from a TOML string.
///
/// Omitted sections keep their defaults; a section that is present replaces
/// the default table wholesale, so a partial table fails validation rather
/// than silently mixing with built-in coefficients.
pub fn parse_and_validate_config(contents: &str) -> Result<EngineConfig> {
    let config = toml::from_str::<EngineConfig>(contents)
        .map_err(|e| EngineError::Config(format!("Failed to parse config: {e}")))?;
    config.validate()?;
    Ok(config)
}

/// Read, parse and validate a config file.
pub fn load_config_from_path(path: &Path) -> Result<EngineConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        EngineError::Config(format!("Failed to read {}: {e}", path.display()))
    })?;
    let config = parse_and_validate_config(&contents)?;
    tracing::debug!(path = %path.display(), "loaded engine config");
    Ok(config)
}
