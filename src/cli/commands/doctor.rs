//! Doctor command - verify credentials and configuration.

use crate::cli::Output;
use crate::config::{
    Settings, NOTION_API_KEY_VAR, NOTION_PARENT_ID_VAR, OPENAI_API_KEY_VAR, YOUTUBE_API_KEY_VAR,
};
use crate::store::{JsonFileStore, ProcessedStore};
use console::style;

/// Check result for a single item.
#[derive(Debug)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum CheckStatus {
    Ok,
    Warning,
    Error,
}

impl CheckResult {
    fn ok(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Ok,
            message: message.to_string(),
            hint: None,
        }
    }

    fn warning(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Warning,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn error(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Error,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn print(&self) {
        let icon = match self.status {
            CheckStatus::Ok => style("✓").green(),
            CheckStatus::Warning => style("!").yellow(),
            CheckStatus::Error => style("✗").red(),
        };

        println!("  {} {} - {}", icon, style(&self.name).bold(), self.message);

        if let Some(hint) = &self.hint {
            println!("    {} {}", style("→").dim(), style(hint).dim());
        }
    }
}

/// Run all diagnostic checks.
pub fn run_doctor(settings: &Settings, config_path: &std::path::Path) -> anyhow::Result<()> {
    Output::header("tubenote doctor");
    println!();

    let mut checks = Vec::new();

    println!("{}", style("Credentials").bold());
    let secret = |name: &str, file_value: &Option<String>| {
        check_secret(name, std::env::var(name).ok(), file_value.as_deref())
    };
    let credential_checks = vec![
        secret(OPENAI_API_KEY_VAR, &settings.openai.api_key),
        secret(YOUTUBE_API_KEY_VAR, &settings.youtube.api_key),
        secret(NOTION_API_KEY_VAR, &settings.notion.api_key),
        check_parent_id(
            std::env::var(NOTION_PARENT_ID_VAR).ok(),
            settings.notion.parent_id.as_deref(),
        ),
    ];
    for check in &credential_checks {
        check.print();
    }
    checks.extend(credential_checks);

    println!();

    println!("{}", style("Files").bold());
    let file_checks = vec![check_state_file(settings), check_config_file(config_path)];
    for check in &file_checks {
        check.print();
    }
    checks.extend(file_checks);

    println!();

    let errors = checks.iter().filter(|c| c.status == CheckStatus::Error).count();
    let warnings = checks.iter().filter(|c| c.status == CheckStatus::Warning).count();

    if errors > 0 {
        Output::error(&format!(
            "{} error(s) found. Please fix them before running tubenote.",
            errors
        ));
        anyhow::bail!("{} doctor check(s) failed", errors);
    } else if warnings > 0 {
        Output::warning(&format!("All checks passed with {} warning(s).", warnings));
    } else {
        Output::success("All checks passed! tubenote is ready to use.");
    }

    Ok(())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Mask all but the edges of a secret.
fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 12 {
        return "***".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

fn check_secret(name: &str, env_value: Option<String>, file_value: Option<&str>) -> CheckResult {
    if let Some(v) = non_blank(env_value.as_deref()) {
        return CheckResult::ok(name, &format!("set in environment ({})", mask(v)));
    }
    match non_blank(file_value) {
        Some(v) => CheckResult::ok(name, &format!("set in config file ({})", mask(v))),
        None => CheckResult::error(
            name,
            "not set",
            &format!("Set with: export {}='...' (or add it to .env)", name),
        ),
    }
}

fn check_parent_id(env_value: Option<String>, file_value: Option<&str>) -> CheckResult {
    let name = NOTION_PARENT_ID_VAR;
    match non_blank(env_value.as_deref()).or(non_blank(file_value)) {
        Some(id) => CheckResult::ok(name, id),
        None => CheckResult::error(
            name,
            "not set",
            "Share a Notion page with your integration and export its id",
        ),
    }
}

fn check_state_file(settings: &Settings) -> CheckResult {
    let path = settings.state_file();
    if !path.exists() {
        return CheckResult::warning(
            "State file",
            &format!("{} (not created yet)", path.display()),
            "Created after the first published video",
        );
    }
    match JsonFileStore::open(&path) {
        Ok(store) => CheckResult::ok(
            "State file",
            &format!("{} ({} videos)", path.display(), store.len()),
        ),
        Err(e) => CheckResult::error(
            "State file",
            &format!("{} is unreadable: {}", path.display(), e),
            "Fix or remove the file; it must be a JSON array of video ids",
        ),
    }
}

fn check_config_file(path: &std::path::Path) -> CheckResult {
    if path.exists() {
        CheckResult::ok("Config file", &path.display().to_string())
    } else {
        CheckResult::warning(
            "Config file",
            "using defaults",
            "Create with: tubenote config init",
        )
    }
}
