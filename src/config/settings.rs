//! Configuration settings for tubenote.

use crate::error::TubenoteError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable holding the OpenAI API key.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";
/// Environment variable holding the YouTube Data API key.
pub const YOUTUBE_API_KEY_VAR: &str = "YOUTUBE_API_KEY";
/// Environment variable holding the Notion integration token.
pub const NOTION_API_KEY_VAR: &str = "NOTION_API_KEY";
/// Environment variable holding the Notion parent page id.
pub const NOTION_PARENT_ID_VAR: &str = "NOTION_PARENT_ID";

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub youtube: YoutubeSettings,
    pub openai: OpenAISettings,
    pub notion: NotionSettings,
    pub pipeline: PipelineSettings,
    pub prompts: PromptSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// File holding the ids of videos already published.
    pub state_file: String,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Timeout applied to every outgoing HTTP request.
    pub request_timeout_secs: u64,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            state_file: "~/.tubenote/processed.json".to_string(),
            log_level: "info".to_string(),
            request_timeout_secs: crate::openai::DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// YouTube-specific settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct YoutubeSettings {
    /// YouTube Data API key (used when `YOUTUBE_API_KEY` is not set).
    pub api_key: Option<String>,
    /// Base URL of the YouTube Data API.
    pub api_base_url: String,
    /// Items requested per playlist page.
    pub page_size: u32,
    /// Caption languages to try, in order of preference.
    pub transcript_languages: Vec<String>,
}

impl Default for YoutubeSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: "https://www.googleapis.com/youtube/v3".to_string(),
            page_size: 50,
            transcript_languages: vec!["en".to_string()],
        }
    }
}

/// Summarization model settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAISettings {
    /// OpenAI API key (used when `OPENAI_API_KEY` is not set).
    pub api_key: Option<String>,
    /// Chat model used for summaries.
    pub model: String,
    /// Alternative base URL for OpenAI-compatible endpoints.
    pub base_url: Option<String>,
}

impl Default for OpenAISettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gpt-3.5-turbo".to_string(),
            base_url: None,
        }
    }
}

/// Notion publishing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotionSettings {
    /// Integration token (used when `NOTION_API_KEY` is not set).
    pub api_key: Option<String>,
    /// Parent page id (used when `NOTION_PARENT_ID` is not set).
    pub parent_id: Option<String>,
    /// Base URL of the Notion API.
    pub api_base_url: String,
    /// Value sent in the `Notion-Version` header.
    pub version: String,
}

impl Default for NotionSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            parent_id: None,
            api_base_url: "https://api.notion.com/v1".to_string(),
            version: "2022-06-28".to_string(),
        }
    }
}

/// Pipeline behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct PipelineSettings {
    /// End the whole run on the first summarize/publish failure instead of moving on.
    pub stop_on_error: bool,
    /// Instructions used when none are given on the command line.
    pub default_instructions: Option<String>,
}

/// Prompt customization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct PromptSettings {
    /// Directory for custom prompts (overrides defaults).
    pub custom_dir: Option<String>,
}

/// The four secrets a run needs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub openai_api_key: String,
    pub youtube_api_key: String,
    pub notion_api_key: String,
    pub notion_parent_id: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("openai_api_key", &"***")
            .field("youtube_api_key", &"***")
            .field("notion_api_key", &"***")
            .field("notion_parent_id", &self.notion_parent_id)
            .finish()
    }
}

impl Credentials {
    /// Resolve credentials from the process environment, falling back to the settings file.
    pub fn from_env(settings: &Settings) -> crate::error::Result<Self> {
        Self::resolve(settings, |name| std::env::var(name).ok())
    }

    /// Resolve credentials with a custom variable lookup.
    ///
    /// Every missing or blank value is collected so the operator sees all omissions at once.
    pub fn resolve(
        settings: &Settings,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> crate::error::Result<Self> {
        let mut missing = Vec::new();
        let mut take = |name: &str, fallback: &Option<String>| -> String {
            let value = non_blank(lookup(name)).or_else(|| non_blank(fallback.clone()));
            match value {
                Some(v) => v,
                None => {
                    missing.push(name.to_string());
                    String::new()
                }
            }
        };

        let openai_api_key = take(OPENAI_API_KEY_VAR, &settings.openai.api_key);
        let youtube_api_key = take(YOUTUBE_API_KEY_VAR, &settings.youtube.api_key);
        let notion_api_key = take(NOTION_API_KEY_VAR, &settings.notion.api_key);
        let notion_parent_id = take(NOTION_PARENT_ID_VAR, &settings.notion.parent_id);

        if !missing.is_empty() {
            return Err(TubenoteError::MissingConfiguration(missing));
        }

        Ok(Self {
            openai_api_key,
            youtube_api_key,
            notion_api_key,
            notion_parent_id,
        })
    }
}

/// Trimmed value, or `None` when absent or blank.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| TubenoteError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tubenote")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }

    /// Get the expanded processed-set file path.
    pub fn state_file(&self) -> PathBuf {
        Self::expand_path(&self.general.state_file)
    }

    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.general.request_timeout_secs)
    }
}
