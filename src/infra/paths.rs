// src/infra/paths.rs — Config and data path management
//
// All paths respect the HAQOOQ_HOME environment variable for isolation.
// When HAQOOQ_HOME is set, config and data live under that directory.
// When unset, config uses ~/.haqooq/ and data uses XDG_DATA_HOME/haqooq.

use directories::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

/// Returns the HAQOOQ_HOME override, if set.
fn haqooq_home() -> Option<PathBuf> {
    std::env::var_os("HAQOOQ_HOME").map(PathBuf::from)
}

/// Home directory, falling back to the working directory on hosts without one.
pub fn dirs_home() -> PathBuf {
    BaseDirs::new()
        .map(|b| b.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Configuration directory: $HAQOOQ_HOME/ or ~/.haqooq/
pub fn config_dir() -> PathBuf {
    if let Some(home) = haqooq_home() {
        return home;
    }
    dirs_home().join(".haqooq")
}

/// Data directory: $HAQOOQ_HOME/data/ or ~/.local/share/haqooq/
pub fn data_dir() -> PathBuf {
    if let Some(home) = haqooq_home() {
        return home.join("data");
    }
    ProjectDirs::from("", "", "haqooq")
        .map(|p| p.data_local_dir().to_path_buf())
        .unwrap_or_else(|| config_dir().join("data"))
}

/// Config file path
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Durable preferences (the disclaimer flag lives here)
pub fn prefs_file_path() -> PathBuf {
    config_dir().join("prefs.json")
}

/// Log file used while the full-screen view owns the terminal
pub fn log_file_path() -> PathBuf {
    data_dir().join("haqooq.log")
}

/// Ensure all required directories exist
pub async fn ensure_dirs() -> anyhow::Result<()> {
    for dir in [config_dir(), data_dir()] {
        tokio::fs::create_dir_all(&dir).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_live_under_their_dirs() {
        assert!(config_file_path().starts_with(config_dir()));
        assert!(prefs_file_path().starts_with(config_dir()));
        assert!(log_file_path().starts_with(data_dir()));
        assert_eq!(prefs_file_path().file_name().unwrap(), "prefs.json");
    }
}
