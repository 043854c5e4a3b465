use crate::error::ConfigError;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Pattern recognising a whole-string markdown link `[title](url)`.
///
/// Group 1 is the title, group 2 the URL.
pub const DEFAULT_LINK_REGEX: &str = r"^\[([^\[\]]*)\]\((https?://[^\s]+)\)$";

// ── Persisted settings ────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Comma or newline separated substrings; matching URLs skip title fetching
    #[serde(default)]
    pub website_blacklist: String,
    /// Titles longer than this are cut and suffixed with "..." (0 = unlimited)
    #[serde(default)]
    pub maximum_title_length: usize,
    /// Prefix converted links with a favicon image
    #[serde(default)]
    pub insert_favicons: bool,
    /// Pasting a URL over a selection links the selection instead of fetching
    #[serde(default)]
    pub should_preserve_selection_as_title: bool,
    /// Intercept the host's default paste
    #[serde(default = "default_true")]
    pub enhance_default_paste: bool,
    /// Intercept the host's drop events
    #[serde(default = "default_true")]
    pub enhance_drop_events: bool,
    /// Scrape `<title>` over HTTP instead of asking a rendering host
    #[serde(default = "default_true")]
    pub use_new_scraper: bool,
    /// Search API key
    #[serde(default)]
    pub api_key: String,
    /// Search engine id (`cx`)
    #[serde(default)]
    pub custom_search_engine_id: String,
    /// Markdown link detection pattern, see [`DEFAULT_LINK_REGEX`]
    #[serde(default = "default_link_regex")]
    pub link_regex: String,
}

fn default_true() -> bool {
    true
}

fn default_link_regex() -> String {
    DEFAULT_LINK_REGEX.into()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            website_blacklist: String::new(),
            maximum_title_length: 0,
            insert_favicons: false,
            should_preserve_selection_as_title: false,
            enhance_default_paste: true,
            enhance_drop_events: true,
            use_new_scraper: true,
            api_key: String::new(),
            custom_search_engine_id: String::new(),
            link_regex: default_link_regex(),
        }
    }
}

impl Settings {
    /// `<config dir>/linktitle/config.toml` for the current user.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        ProjectDirs::from("", "", "linktitle")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Read settings from `path`, writing defaults there first if it does not exist.
    pub fn load_or_init(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            return Self::load_from_path(path);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let settings = Self::default();
        settings.save(path)?;
        tracing::info!(path = %path.display(), "wrote default settings");
        Ok(settings)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        toml::from_str(&contents).map_err(|e| ConfigError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let toml_str = toml::to_string_pretty(self).map_err(|e| ConfigError::Save {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        fs::write(path, toml_str)?;
        Ok(())
    }

    /// Apply environment variable overrides to settings
    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("LINKTITLE_API_KEY")
            && !key.is_empty()
        {
            self.api_key = key;
        }

        if let Ok(cx) = std::env::var("LINKTITLE_SEARCH_ENGINE_ID")
            && !cx.is_empty()
        {
            self.custom_search_engine_id = cx;
        }
    }

    /// Both search credentials are present.
    pub fn has_search_credentials(&self) -> bool {
        !self.api_key.trim().is_empty() && !self.custom_search_engine_id.trim().is_empty()
    }
}
