//! CLI output formatting utilities.

use crate::orchestrator::VideoOutcome;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};

/// Output helper for CLI formatting.
pub struct Output;

impl Output {
    /// Print an info message.
    pub fn info(msg: &str) {
        println!("{} {}", style(">>").cyan().bold(), msg);
    }

    /// Print a success message.
    pub fn success(msg: &str) {
        println!("{} {}", style(">>").green().bold(), msg);
    }

    /// Print a warning message.
    pub fn warning(msg: &str) {
        eprintln!("{} {}", style(">>").yellow().bold(), msg);
    }

    /// Print an error message.
    pub fn error(msg: &str) {
        eprintln!("{} {}", style(">>").red().bold(), msg);
    }

    /// Print a header.
    pub fn header(msg: &str) {
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a key-value pair.
    pub fn kv(key: &str, value: &str) {
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(msg: &str) {
        println!("  {} {}", style("*").cyan(), msg);
    }

    /// Print the outcome of one video as `[pos/total] id status`.
    pub fn video_outcome(position: usize, total: usize, video_id: &str, outcome: &VideoOutcome) {
        let progress = style(format!("[{}/{}]", position, total)).dim();
        match outcome {
            VideoOutcome::Published { page_id } => println!(
                "{} {} {} {}",
                progress,
                style(video_id).bold(),
                style("published").green(),
                style(page_id).dim()
            ),
            VideoOutcome::AlreadyProcessed => println!(
                "{} {} {}",
                progress,
                style(video_id).bold(),
                style("already processed").dim()
            ),
            VideoOutcome::NoTranscript => println!(
                "{} {} {}",
                progress,
                style(video_id).bold(),
                style("no transcript").yellow()
            ),
            VideoOutcome::Failed { error } => println!(
                "{} {} {} {}",
                progress,
                style(video_id).bold(),
                style("failed:").red(),
                error
            ),
            VideoOutcome::Pending => println!(
                "{} {} {}",
                progress,
                style(video_id).bold(),
                style("would process").cyan()
            ),
        }
    }

    /// Ask the operator for a line of input on stdin.
    pub fn prompt(message: &str) -> io::Result<String> {
        let stdin = io::stdin();
        prompt_from(&mut stdin.lock(), message)
    }

    /// Create a spinner.
    pub fn spinner(msg: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        if let Ok(s) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(s);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }
}

/// Print `message` and read one trimmed line from `reader`.
fn prompt_from<R: BufRead>(reader: &mut R, message: &str) -> io::Result<String> {
    print!("{} {} ", style("?").cyan(), message);
    io::stdout().flush()?;

    let mut input = String::new();
    reader.read_line(&mut input)?;
    Ok(input.trim().to_string())
}
