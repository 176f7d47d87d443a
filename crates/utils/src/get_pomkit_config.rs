use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pomkit_core::Config;

pub const CONFIG_DIR: &str = ".pomkit";
pub const CONFIG_FILE: &str = "config.json";

pub fn get_pomkit_dir(root: &Path) -> PathBuf {
    root.join(CONFIG_DIR)
}

pub fn get_pomkit_config_path(root: &Path) -> PathBuf {
    get_pomkit_dir(root).join(CONFIG_FILE)
}

/// Load `.pomkit/config.json` under `root`; a missing file yields the default config.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub async fn get_pomkit_config(root: &Path) -> Result<Config> {
    let path = get_pomkit_config_path(root);
    if !path.is_file() {
        return Ok(Config::default());
    }
    let content = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}
