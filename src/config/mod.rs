//! Configuration module for tubenote.
//!
//! Handles loading settings, resolving credentials and managing the summary prompt template.

mod prompts;
mod settings;

pub use prompts::{Prompts, SummaryPrompts};
pub use settings::{
    Credentials, GeneralSettings, NotionSettings, OpenAISettings, PipelineSettings,
    PromptSettings, Settings, YoutubeSettings, NOTION_API_KEY_VAR, NOTION_PARENT_ID_VAR,
    OPENAI_API_KEY_VAR, YOUTUBE_API_KEY_VAR,
};
