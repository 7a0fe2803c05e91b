use crate::io;
use crate::tables::{EngineConfig, CONFIG_FILE_NAME};
use anyhow::Result;
use std::path::{Path, PathBuf};

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    write_default_config(&config_path, force)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");
    Ok(())
}

/// Write the default tables as TOML, refusing to clobber unless `force`.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let body = EngineConfig::default()
        .to_toml()
        .map_err(super::with_code)?;
    let content = format!("# ROI engine coefficient tables\n\n{body}");

    io::write_file(path, &content)
}
