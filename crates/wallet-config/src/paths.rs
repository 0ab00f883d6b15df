//! Per-user directories of the wallet shell
//!
//! Both directories are `wallet-shell/` below the platform base that `dirs`
//! reports (XDG on Linux, `Library/` on macOS, `%APPDATA%` on Windows).

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "wallet-shell";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Join the app name onto `base` and make sure the directory exists
fn ensure_app_dir(base: Option<PathBuf>, purpose: &str) -> Result<PathBuf> {
    let dir = base
        .with_context(|| format!("No {} directory on this platform", purpose))?
        .join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create {} directory {}", purpose, dir.display()))?;
    Ok(dir)
}

pub fn config_dir() -> Result<PathBuf> {
    ensure_app_dir(dirs::config_dir(), "config")
}

/// Holds the release-build log files
pub fn cache_dir() -> Result<PathBuf> {
    ensure_app_dir(dirs::cache_dir(), "cache")
}

pub fn app_config_path() -> Result<PathBuf> {
    config_dir().map(|dir| config_file_in(&dir))
}

fn config_file_in(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_dir_is_created_under_base() {
        let base = std::env::temp_dir().join(format!("wallet-shell-paths-{}", std::process::id()));
        let dir = ensure_app_dir(Some(base.clone()), "test").unwrap();
        assert!(dir.is_dir());
        assert_eq!(dir, base.join(APP_NAME));
        std::fs::remove_dir_all(&base).unwrap();
    }

    #[test]
    fn test_missing_base_is_an_error() {
        let err = ensure_app_dir(None, "cache").unwrap_err();
        assert_eq!(err.to_string(), "No cache directory on this platform");
    }

    #[test]
    fn test_config_file_in() {
        let path = config_file_in(Path::new("/etc/wallet-shell"));
        assert_eq!(path, PathBuf::from("/etc/wallet-shell/config.toml"));
    }
}
