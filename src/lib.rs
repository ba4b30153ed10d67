//! Popcorn: a Zellij plugin for searching movies and keeping a watched list.
//!
//! Type a title, browse OMDb matches, open one to read its details, rate it
//! from 1 to 10 and add it to the list of movies you watched. The list shows
//! running averages of IMDb rating, your rating and runtime.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (plugin.rs)                     │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Search and detail controllers                    │
//! │  - Event handling, action emission                  │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ API Layer     │
//! │ (ui/)         │   │ (storage/)    │   │ (api/)        │
//! │ - Rendering   │   │ - Watched list│   │ - OMDb URLs   │
//! │ - Theming     │   │ - Summary     │   │ - Decoding    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Movie types, user rating                         │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The application layer never performs I/O. It returns [`Action`]s and the
//! shim turns them into `web_request` calls; responses come back as
//! [`Event`]s tagged with the [`app::RequestToken`] they were issued under, so
//! a response to a superseded request is dropped instead of applied.
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/popcorn.wasm" {
//!         api_key "your-omdb-key"
//!         min_query_len "3"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use popcorn::{handle_event, initialize, Action, Config, Event};
//!
//! let config = Config {
//!     api_key: Some("k".to_string()),
//!     ..Default::default()
//! };
//! let mut state = initialize(&config);
//!
//! let mut actions = Vec::new();
//! for c in "frozen".chars() {
//!     let (_, emitted) = handle_event(&mut state, &Event::Char(c))?;
//!     actions.extend(emitted);
//! }
//! assert!(matches!(actions.last(), Some(Action::FetchSearch { .. })));
//! # Ok::<(), popcorn::PopcornError>(())
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, Pane};
pub use domain::{PopcornError, Result};
pub use ui::Theme;

use api::{OmdbEndpoint, DEFAULT_API_URL};
use app::DEFAULT_MIN_QUERY_LEN;
use infrastructure::expand_tilde;
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// ```kdl
/// plugin location="file:/path/to/popcorn.wasm" {
///     api_key "your-omdb-key"
///     api_url "https://www.omdbapi.com/"
///     min_query_len "3"
///     theme "catppuccin-mocha"
///     theme_file "~/.config/popcorn/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// OMDb API key. Without one every search fails with the error banner.
    pub api_key: Option<String>,

    /// Base URL of the movie API. Default: [`DEFAULT_API_URL`].
    pub api_url: String,

    /// Shortest query that triggers a search. Default: 3
    pub min_query_len: usize,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file, already mapped into the `/host`
    /// sandbox. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values count as unset. An unparsable or zero `min_query_len`
    /// falls back to the default.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use popcorn::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_key".to_string(), "f84fc31d".to_string());
    /// map.insert("min_query_len".to_string(), "2".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.api_key.as_deref(), Some("f84fc31d"));
    /// assert_eq!(config.min_query_len, 2);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let min_query_len = get("min_query_len")
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_MIN_QUERY_LEN);

        Self {
            api_key: get("api_key"),
            api_url: get("api_url").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            min_query_len,
            theme_name: get("theme"),
            theme_file: get("theme_file").map(|path| expand_tilde(&path)),
            trace_level: get("trace_level"),
        }
    }
}

/// Builds the initial [`AppState`]: endpoint from the API settings, theme
/// from `theme_file`, then `theme`, then the default.
///
/// Theme failures are logged and fall back to the default theme.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        api_url = %config.api_url,
        has_api_key = config.api_key.is_some(),
        min_query_len = config.min_query_len,
        "initializing popcorn plugin"
    );

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let endpoint = OmdbEndpoint::new(config.api_url.clone(), config.api_key.clone());
    AppState::new(endpoint, config.min_query_len, theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_configuration_uses_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn unparsable_min_query_len_falls_back() {
        let config = Config::from_zellij(&map(&[("min_query_len", "three")]));
        assert_eq!(config.min_query_len, DEFAULT_MIN_QUERY_LEN);
    }

    #[test]
    fn zero_min_query_len_falls_back() {
        let config = Config::from_zellij(&map(&[("min_query_len", "0")]));
        assert_eq!(config.min_query_len, DEFAULT_MIN_QUERY_LEN);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = Config::from_zellij(&map(&[("api_key", "  "), ("api_url", "")]));
        assert_eq!(config.api_key, None);
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn theme_file_is_mapped_into_sandbox() {
        let config = Config::from_zellij(&map(&[("theme_file", "~/themes/night.toml")]));
        assert_eq!(config.theme_file.as_deref(), Some("/host/themes/night.toml"));
    }

    #[test]
    fn initialize_resolves_named_theme() {
        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            ..Default::default()
        };
        assert_eq!(initialize(&config).theme.name, "catppuccin-latte");
    }

    #[test]
    fn initialize_falls_back_on_unknown_theme() {
        let config = Config {
            theme_name: Some("solarized".to_string()),
            ..Default::default()
        };
        assert_eq!(initialize(&config).theme, Theme::default());
    }

    #[test]
    fn theme_file_wins_over_theme_name() {
        let mut custom = Theme::default();
        custom.name = "popcorn-night".to_string();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(toml::to_string(&custom).unwrap().as_bytes())
            .unwrap();

        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            theme_file: Some(file.path().to_string_lossy().into_owned()),
            ..Default::default()
        };
        assert_eq!(initialize(&config).theme.name, "popcorn-night");
    }

    #[test]
    fn unreadable_theme_file_falls_back_to_default() {
        let config = Config {
            theme_file: Some("/nonexistent/popcorn/theme.toml".to_string()),
            ..Default::default()
        };
        assert_eq!(initialize(&config).theme, Theme::default());
    }
}
