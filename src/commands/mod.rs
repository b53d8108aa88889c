//! CLI command implementations

mod board;
mod config;
mod ls;
mod projects;

pub use board::cmd_board;
pub use config::{cmd_config_path, cmd_config_show};
pub use ls::{cmd_ls, filter_issues};
pub use projects::cmd_projects;

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::error::Result;
use crate::types::{Issue, IssueStatus};

/// Pretty-print a value as JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format an issue for single-line display
pub fn format_issue_line(issue: &Issue) -> String {
    let id_padded = format!("{:12}", issue.id);
    let status_str = format!("[{}]", issue.status);
    let number = issue
        .number
        .map(|n| format!("#{n} "))
        .unwrap_or_default();
    let labels = if issue.labels.is_empty() {
        String::new()
    } else {
        format!(" ({})", issue.labels.join(", "))
    };

    let colored_status = match issue.status {
        IssueStatus::Todo => status_str.yellow().to_string(),
        IssueStatus::InProgress => status_str.cyan().to_string(),
        IssueStatus::Done => status_str.green().to_string(),
    };

    format!(
        "{} {} {}{}{}",
        id_padded.cyan(),
        colored_status,
        number,
        issue.title,
        labels.dimmed()
    )
}
