//! Path handling for the Zellij plugin sandbox.
//!
//! Inside the sandbox `/host` is the cwd of the last focused terminal, which is
//! normally the user's home directory.

use std::path::PathBuf;

/// Directory for files the plugin writes: `/host/.local/share/zellij/popcorn`.
///
/// Only trace exports land here; the watched list itself lives in memory.
///
/// # Examples
///
/// ```
/// use popcorn::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/popcorn"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("popcorn")
}

/// Maps `~` to `/host` so user-supplied paths resolve inside the sandbox.
///
/// # Examples
///
/// ```
/// use popcorn::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/popcorn.toml"), "/etc/popcorn.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        format!("/host/{rest}")
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_leading_tilde_is_expanded() {
        assert_eq!(expand_tilde("~user/theme.toml"), "~user/theme.toml");
        assert_eq!(expand_tilde("themes/~/x.toml"), "themes/~/x.toml");
    }

    #[test]
    fn data_dir_is_inside_host_mount() {
        assert!(get_data_dir().starts_with("/host"));
    }
}
