//! Pipeline orchestrator for tubenote.
//!
//! Resolves the input URL, expands playlists, and for every video not yet
//! processed runs fetch → summarize → publish → record.

use crate::config::{Credentials, Prompts, Settings};
use crate::error::{Result, TubenoteError};
use crate::notion::{NotionClient, PagePublisher};
use crate::openai::create_client;
use crate::store::{JsonFileStore, ProcessedStore};
use crate::summarizer::{OpenAISummarizer, Summarizer};
use crate::youtube::{
    fetch_transcript, resolve_url, watch_url, CaptionTranscriptSource, PlaylistSource,
    ResolvedSource, SourceKind, TranscriptSource, YoutubeDataClient,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Input of one pipeline run.
#[derive(Debug, Clone)]
pub struct RunRequest {
    /// Video or playlist URL.
    pub url: String,
    /// Free-form summarization instructions.
    pub instructions: String,
    /// Maximum number of unprocessed videos to attempt.
    pub limit: Option<usize>,
    /// Only report what would be processed.
    pub dry_run: bool,
}

impl RunRequest {
    pub fn new(url: impl Into<String>, instructions: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            instructions: instructions.into(),
            limit: None,
            dry_run: false,
        }
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// What happened to one video during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoOutcome {
    /// Already in the processed set; nothing was done.
    AlreadyProcessed,
    /// No usable transcript; not recorded, will be retried next run.
    NoTranscript,
    /// Summary published and the video recorded.
    Published { page_id: String },
    /// Summarizing or publishing failed; not recorded.
    Failed { error: String },
    /// Dry run: the video would have been processed.
    Pending,
}

/// Result of a run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// What the input URL resolved to.
    pub source: ResolvedSource,
    /// Per-video outcomes, in processing order.
    pub outcomes: Vec<(String, VideoOutcome)>,
}

impl RunReport {
    fn count(&self, pred: impl Fn(&VideoOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, o)| pred(o)).count()
    }

    pub fn published(&self) -> usize {
        self.count(|o| matches!(o, VideoOutcome::Published { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, VideoOutcome::AlreadyProcessed))
    }

    pub fn no_transcript(&self) -> usize {
        self.count(|o| matches!(o, VideoOutcome::NoTranscript))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, VideoOutcome::Failed { .. }))
    }

    pub fn pending(&self) -> usize {
        self.count(|o| matches!(o, VideoOutcome::Pending))
    }
}

/// The main orchestrator for the tubenote pipeline.
pub struct Orchestrator {
    playlists: Arc<dyn PlaylistSource>,
    transcripts: Arc<dyn TranscriptSource>,
    summarizer: Arc<dyn Summarizer>,
    publisher: Arc<dyn PagePublisher>,
    store: Arc<dyn ProcessedStore>,
    stop_on_error: bool,
}

impl Orchestrator {
    /// Create an orchestrator talking to the real services.
    pub fn new(settings: &Settings, credentials: &Credentials) -> Result<Self> {
        let timeout = settings.request_timeout();

        let playlists = YoutubeDataClient::new(&credentials.youtube_api_key, timeout)?
            .with_base_url(&settings.youtube.api_base_url)
            .with_page_size(settings.youtube.page_size);

        let transcripts =
            CaptionTranscriptSource::new(settings.youtube.transcript_languages.clone())?;

        let prompts = Prompts::load(settings.prompts.custom_dir.as_deref())?;
        let client = create_client(
            &credentials.openai_api_key,
            settings.openai.base_url.as_deref(),
            timeout,
        )?;
        let summarizer =
            OpenAISummarizer::new(client, &settings.openai.model).with_prompts(prompts);

        let publisher = NotionClient::new(
            &credentials.notion_api_key,
            &credentials.notion_parent_id,
            timeout,
        )?
        .with_base_url(&settings.notion.api_base_url)
        .with_version(&settings.notion.version);

        let store = JsonFileStore::open(settings.state_file())?;
        info!(
            path = %store.path().display(),
            processed = store.len(),
            model = %settings.openai.model,
            "Orchestrator ready"
        );

        Ok(Self::with_components(
            Arc::new(playlists),
            Arc::new(transcripts),
            Arc::new(summarizer),
            Arc::new(publisher),
            Arc::new(store),
        )
        .stop_on_error(settings.pipeline.stop_on_error))
    }

    /// Create an orchestrator with custom components.
    pub fn with_components(
        playlists: Arc<dyn PlaylistSource>,
        transcripts: Arc<dyn TranscriptSource>,
        summarizer: Arc<dyn Summarizer>,
        publisher: Arc<dyn PagePublisher>,
        store: Arc<dyn ProcessedStore>,
    ) -> Self {
        Self {
            playlists,
            transcripts,
            summarizer,
            publisher,
            store,
            stop_on_error: false,
        }
    }

    /// End the run on the first summarize/publish failure instead of moving to the next video.
    pub fn stop_on_error(mut self, stop: bool) -> Self {
        self.stop_on_error = stop;
        self
    }

    /// Get a reference to the processed store.
    pub fn store(&self) -> Arc<dyn ProcessedStore> {
        self.store.clone()
    }

    /// Run the pipeline.
    pub async fn run(&self, request: &RunRequest) -> Result<RunReport> {
        self.run_with(request, |_, _, _, _| {}).await
    }

    /// Run the pipeline, calling `observer(position, total, video_id, outcome)` after each video.
    #[instrument(skip(self, request, observer), fields(url = %request.url))]
    pub async fn run_with<F>(&self, request: &RunRequest, mut observer: F) -> Result<RunReport>
    where
        F: FnMut(usize, usize, &str, &VideoOutcome) + Send,
    {
        let source = resolve_url(&request.url)?;
        info!(id = %source.id, kind = %source.kind, "Resolved input");

        let videos = self.expand(&source).await?;
        let total = videos.len();

        let mut outcomes = Vec::with_capacity(total);
        let mut attempted = 0usize;

        for (i, video_id) in videos.into_iter().enumerate() {
            if self.store.contains(&video_id) {
                info!(video_id = %video_id, "Skipping, already processed");
                observer(i + 1, total, &video_id, &VideoOutcome::AlreadyProcessed);
                outcomes.push((video_id, VideoOutcome::AlreadyProcessed));
                continue;
            }

            if request.limit.is_some_and(|limit| attempted >= limit) {
                info!(limit = ?request.limit, "Video limit reached");
                break;
            }
            attempted += 1;

            let outcome = if request.dry_run {
                VideoOutcome::Pending
            } else {
                match self.process_video(&video_id, &request.instructions).await {
                    Ok(outcome) => outcome,
                    Err(e) if !self.stop_on_error && e.is_per_video() => {
                        warn!(
                            video_id = %video_id,
                            error = %e,
                            "Failed to process video, moving on"
                        );
                        VideoOutcome::Failed {
                            error: e.to_string(),
                        }
                    }
                    Err(e) => return Err(e),
                }
            };

            if matches!(outcome, VideoOutcome::Published { .. }) {
                self.store.record(&video_id)?;
            }

            observer(i + 1, total, &video_id, &outcome);
            outcomes.push((video_id, outcome));
        }

        let report = RunReport { source, outcomes };
        info!(
            published = report.published(),
            skipped = report.skipped(),
            no_transcript = report.no_transcript(),
            failed = report.failed(),
            "Run complete"
        );
        Ok(report)
    }

    /// Turn the resolved source into the ordered list of video ids.
    async fn expand(&self, source: &ResolvedSource) -> Result<Vec<String>> {
        match source.kind {
            SourceKind::Video => Ok(vec![source.id.clone()]),
            SourceKind::Playlist => self.playlists.playlist_videos(&source.id).await,
        }
    }

    /// Fetch, summarize and publish one video. Recording is left to the caller.
    #[instrument(skip(self, instructions))]
    async fn process_video(&self, video_id: &str, instructions: &str) -> Result<VideoOutcome> {
        let Some(transcript) = fetch_transcript(self.transcripts.as_ref(), video_id).await else {
            return Ok(VideoOutcome::NoTranscript);
        };

        info!(video_id, model = self.summarizer.model(), "Summarizing");
        let summary = self
            .summarizer
            .summarize(&transcript.text(), instructions)
            .await?;

        let title = watch_url(video_id);
        let page = self.publisher.create_page(&title, &summary).await?;
        info!(video_id, page_id = %page.id, "Created Notion page");

        Ok(VideoOutcome::Published { page_id: page.id })
    }
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("processed", &self.store.len())
            .field("stop_on_error", &self.stop_on_error)
            .finish_non_exhaustive()
    }
}

/// Reject instructions that are blank after trimming.
pub fn validate_instructions(instructions: &str) -> Result<String> {
    let trimmed = instructions.trim();
    if trimmed.is_empty() {
        return Err(TubenoteError::InvalidInput(
            "Summarization instructions must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}
