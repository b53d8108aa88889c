use crate::commands::{format_issue_line, print_json};
use crate::error::{KanbanError, Result};
use crate::sample::{sample_issues, sample_projects};
use crate::store::IssueStore;
use crate::types::{Issue, IssueStatus};

/// Issues matching the optional status and project filters, in board order.
///
/// An unknown project id is an error rather than an empty list.
pub fn filter_issues(
    store: &IssueStore,
    status: Option<IssueStatus>,
    project: Option<&str>,
) -> Result<Vec<Issue>> {
    if let Some(project) = project
        && !sample_projects().iter().any(|p| p.id == project)
    {
        return Err(KanbanError::ProjectNotFound(project.to_string()));
    }

    let issues = match status {
        Some(status) => store.list_by_status_in(project, status),
        None => store
            .issues()
            .iter()
            .filter(|i| project.is_none_or(|p| i.in_project(p)))
            .collect(),
    };
    Ok(issues.into_iter().cloned().collect())
}

/// List the sample issues
pub fn cmd_ls(status: Option<IssueStatus>, project: Option<&str>, output_json: bool) -> Result<()> {
    let store = IssueStore::with_issues(sample_issues());
    let issues = filter_issues(&store, status, project)?;

    if output_json {
        return print_json(&issues);
    }

    if issues.is_empty() {
        println!("No issues found.");
        return Ok(());
    }

    for issue in &issues {
        println!("{}", format_issue_line(issue));
    }

    Ok(())
}
