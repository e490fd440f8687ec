//! tubenote - YouTube summaries into Notion
//!
//! Turns a YouTube video or playlist into Notion pages: captions are fetched for
//! every video, condensed by an LLM following the operator's instructions, and
//! each summary is filed as a child page of a configured Notion page. Videos
//! already published are remembered in a local JSON file and skipped on later runs.
//!
//! # Architecture
//!
//! - `config` - Settings file, credentials and prompt templates
//! - `youtube` - URL resolution, playlist expansion and caption retrieval
//! - `summarizer` - LLM summarization
//! - `notion` - Page publishing
//! - `store` - The persisted set of processed video ids
//! - `orchestrator` - Pipeline coordination
//!
//! # Example
//!
//! ```rust,no_run
//! use tubenote::config::{Credentials, Settings};
//! use tubenote::orchestrator::{Orchestrator, RunRequest};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let credentials = Credentials::from_env(&settings)?;
//!     let orchestrator = Orchestrator::new(&settings, &credentials)?;
//!
//!     let request = RunRequest::new(
//!         "https://www.youtube.com/playlist?list=PL1",
//!         "Summarize the key points as bullets",
//!     );
//!     let report = orchestrator.run(&request).await?;
//!     println!("Published {} pages", report.published());
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod notion;
pub mod openai;
pub mod orchestrator;
pub mod store;
pub mod summarizer;
pub mod youtube;

pub use error::{Result, TubenoteError};
