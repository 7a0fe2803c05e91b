//! Thin file and stream helpers for the command-line shell.

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Path value that selects stdin instead of a file.
pub const STDIN_PATH: &str = "-";

/// Read the whole input, from stdin when `path` is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new(STDIN_PATH) {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read input from stdin")?;
        return Ok(buffer);
    }
    read_file(path)
}

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read '{}'", path.display()))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write '{}'", path.display()))
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}
