use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use calc_core::CalcSettings;

pub fn default_config_path() -> Option<PathBuf> {
    dirs_next::home_dir().map(|h| h.join(".calc").join("settings.toml"))
}

/// `--config` wins; otherwise the default path, if one can be determined.
pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}

/// Load settings. An explicit `--config` must exist; a missing default file
/// just means defaults.
pub fn load_settings(cli_path: &Option<PathBuf>) -> Result<CalcSettings> {
    match resolve_config_path(cli_path) {
        Some(path) if cli_path.is_some() || path.exists() => read(&path),
        _ => {
            tracing::debug!("no settings file, using defaults");
            Ok(CalcSettings::default())
        }
    }
}

fn read(path: &Path) -> Result<CalcSettings> {
    CalcSettings::load(path).with_context(|| format!("Load settings from {}", path.display()))
}
