use std::path::PathBuf;

/// Environment variable that redirects the config directory (used by tests)
pub const CONFIG_DIR_ENV: &str = "ROLECALL_CONFIG_DIR";

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Get the config directory path (~/.config/rolecall unless overridden)
pub fn get_config_dir() -> PathBuf {
    match std::env::var_os(CONFIG_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => get_home_dir().join(".config").join("rolecall"),
    }
}

/// Get the config file path
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Get the default preference storage path
pub fn get_storage_path() -> PathBuf {
    get_config_dir().join("preferences.json")
}

/// Get the directory log files are written to
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(get_home_dir)
        .join("rolecall")
}

/// Expand a path string, handling ~ and relative paths
///
/// Relative paths are resolved against the config directory.
pub fn expand_path(path: &std::path::Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    if path.is_absolute() {
        path.to_path_buf()
    } else if let Some(rest) = path_str.strip_prefix("~/") {
        get_home_dir().join(rest)
    } else if path_str == "~" {
        get_home_dir()
    } else {
        get_config_dir().join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_expand_path_absolute() {
        assert_eq!(expand_path(Path::new("/tmp/prefs.json")), PathBuf::from("/tmp/prefs.json"));
    }

    #[test]
    fn test_expand_path_tilde() {
        assert_eq!(
            expand_path(Path::new("~/prefs.json")),
            get_home_dir().join("prefs.json")
        );
        assert_eq!(expand_path(Path::new("~")), get_home_dir());
    }

    #[test]
    fn test_storage_path_is_in_config_dir() {
        assert_eq!(get_storage_path().parent(), Some(get_config_dir().as_path()));
    }
}
