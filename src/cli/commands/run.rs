//! Run command implementation.

use crate::cli::preflight;
use crate::cli::Output;
use crate::config::Settings;
use crate::orchestrator::{validate_instructions, Orchestrator, RunRequest};
use anyhow::{Context, Result};

/// Run the run command.
pub async fn run_pipeline(
    url: Option<String>,
    instructions: Option<String>,
    instructions_file: Option<String>,
    limit: Option<usize>,
    dry_run: bool,
    settings: Settings,
) -> Result<()> {
    // Pre-flight checks
    let credentials = match preflight::check(&settings) {
        Ok(c) => c,
        Err(e) => {
            Output::error(&e.to_string());
            Output::info("Set them in the environment or a .env file, or run 'tubenote doctor'.");
            return Err(e.into());
        }
    };

    let url = match url {
        Some(u) => u.trim().to_string(),
        None => Output::prompt("Enter the YouTube video or playlist URL:")?,
    };

    let instructions = match (instructions, instructions_file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(Settings::expand_path(&path))
            .with_context(|| format!("Failed to read instructions from {}", path))?,
        (None, None) => {
            let default = settings.pipeline.default_instructions.as_deref();
            let question = match default {
                Some(d) => format!("Enter summarization instructions [{}]:", d),
                None => "Enter summarization instructions:".to_string(),
            };
            or_default(Output::prompt(&question)?, default)
        }
    };
    let instructions = validate_instructions(&instructions)?;

    let orchestrator = Orchestrator::new(&settings, &credentials)?;
    let request = RunRequest::new(url, instructions)
        .with_limit(limit)
        .dry_run(dry_run);

    Output::info(&format!("Processing: {}", request.url));
    if dry_run {
        Output::warning("Dry run: nothing will be summarized or published");
    }
    println!();

    let spinner = Output::spinner("Resolving input...");
    let result = orchestrator
        .run_with(&request, |pos, total, id, outcome| {
            spinner.suspend(|| Output::video_outcome(pos, total, id, outcome));
            if let Some(msg) = next_step_message(pos, total) {
                spinner.set_message(msg);
            }
        })
        .await;
    spinner.finish_and_clear();

    let report = match result {
        Ok(r) => r,
        Err(e) => {
            Output::error(&format!("Run aborted: {}", e));
            return Err(e.into());
        }
    };

    if report.outcomes.is_empty() {
        Output::warning("No videos found");
        return Ok(());
    }

    println!();
    Output::header("Summary");
    Output::kv("Source", &format!("{} {}", report.source.kind, report.source.id));
    Output::kv("Published", &report.published().to_string());
    Output::kv("Already processed", &report.skipped().to_string());
    Output::kv("No transcript", &report.no_transcript().to_string());
    if dry_run {
        Output::kv("Would process", &report.pending().to_string());
    }
    if report.failed() > 0 {
        Output::kv("Failed", &report.failed().to_string());
        Output::warning("Failed videos were not recorded and will be retried on the next run.");
    }

    Ok(())
}

/// Spinner text shown while the video after `position` is worked on.
fn next_step_message(position: usize, total: usize) -> Option<String> {
    if position >= total {
        return None;
    }
    Some(format!("Processing video {} of {}...", position + 1, total))
}

/// Use `default` when the operator just pressed enter.
fn or_default(answer: String, default: Option<&str>) -> String {
    match default {
        Some(d) if answer.trim().is_empty() => d.to_string(),
        _ => answer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_answer_takes_default() {
        assert_eq!(or_default(String::new(), Some("Be brief")), "Be brief");
        assert_eq!(or_default("Key points".into(), Some("Be brief")), "Key points");
        assert_eq!(or_default(String::new(), None), "");
    }

    #[test]
    fn test_next_step_message() {
        assert_eq!(next_step_message(1, 3).as_deref(), Some("Processing video 2 of 3..."));
        assert_eq!(next_step_message(3, 3), None);
    }
}
