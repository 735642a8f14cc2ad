use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable that overrides the config file location
pub const CONFIG_ENV_VAR: &str = "BRAIN_SYSTEM_CONFIG";

const APP_DIR_NAME: &str = "brain-system";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolve the config file path: `$BRAIN_SYSTEM_CONFIG`, else the platform config dir
pub fn get_config_path() -> Result<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV_VAR)
        && !path.trim().is_empty()
    {
        return Ok(PathBuf::from(path));
    }

    let base = dirs::config_dir().context("Failed to locate platform config directory")?;
    Ok(base.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}
