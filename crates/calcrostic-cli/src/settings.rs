use anyhow::{Context, Result};
use calcrostic_core::GeneratorConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Location of the per-user config file
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("calcrostic").join("config.json"))
}

/// Load the generator config.
///
/// An explicit path must exist. Without one, the per-user file is used when
/// present and the built-in defaults otherwise.
pub fn load(path: Option<&Path>) -> Result<GeneratorConfig> {
    if let Some(path) = path {
        return read(path);
    }
    match default_path() {
        Some(path) if path.exists() => read(&path),
        _ => Ok(GeneratorConfig::default()),
    }
}

fn read(path: &Path) -> Result<GeneratorConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = serde_json::from_str(&json)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    log::info!("loaded config from {}", path.display());
    Ok(config)
}
