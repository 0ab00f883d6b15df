use std::{env, path::PathBuf};

const CONFIG_FILE: &str = ".wallet-shell.toml";

/// Load config file content
///
/// Searches in order:
/// 1. `.wallet-shell.toml` in the current working directory
/// 2. `config.toml` in the application config directory
/// 3. `.wallet-shell.toml` in the home directory
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    candidate_paths().into_iter().find_map(|path| {
        let content = std::fs::read_to_string(&path).ok()?;
        log::debug!("Loaded config from {}", path.display());
        Some(content)
    })
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];

    match crate::app_config_path() {
        Ok(path) => paths.push(path),
        Err(e) => log::debug!("No config directory available: {:#}", e),
    }

    if let Some(home_config) = get_home_config_path() {
        paths.push(home_config);
    }

    paths
}

/// Returns ~/.wallet-shell.toml if HOME environment variable is set.
fn get_home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cwd_is_searched_first() {
        let paths = candidate_paths();
        assert_eq!(paths.first(), Some(&PathBuf::from(CONFIG_FILE)));
    }

    #[test]
    fn test_home_config_file_name() {
        if let Some(path) = get_home_config_path() {
            assert!(path.ends_with(CONFIG_FILE));
        }
    }
}
