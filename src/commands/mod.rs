pub mod estimate;
pub mod init;
pub mod recommend;

use crate::error::EngineError;
use crate::tables::{load_config_from_path, EngineConfig, CONFIG_FILE_NAME};
use anyhow::Result;
use std::path::Path;

/// Load tables from an explicit path, else from `.roi-engine.toml` in the
/// working directory, else the built-in defaults.
pub fn load_engine_config(explicit: Option<&Path>) -> Result<EngineConfig> {
    if let Some(path) = explicit {
        return load_config_from_path(path).map_err(with_code);
    }

    let local = Path::new(CONFIG_FILE_NAME);
    if crate::io::file_exists(local) {
        tracing::debug!(path = %local.display(), "using local configuration");
        return load_config_from_path(local).map_err(with_code);
    }

    Ok(EngineConfig::default())
}

/// Attach the stable error code to the message shown to the user.
pub fn with_code(err: EngineError) -> anyhow::Error {
    anyhow::anyhow!("{}: {err}", err.code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_code_prefixes_message() {
        let err = with_code(EngineError::invalid("employee_count", "must be positive"));
        assert_eq!(
            err.to_string(),
            "E050: Invalid profile: employee_count: must be positive"
        );
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let err = load_engine_config(Some(Path::new("/no/such/config.toml"))).unwrap_err();
        assert!(err.to_string().starts_with("E020"));
    }
}
