//! Read-only projection of one issue for the detail panel

use url::Url;

use crate::types::{Issue, IssueStatus};

/// An assignee with the initial shown in place of an avatar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssigneeView {
    pub name: String,
    pub initial: char,
}

/// Everything the detail panel shows, already formatted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueDetail {
    pub id: String,
    pub title: String,
    /// Only set for well-formed http(s) links
    pub url: Option<String>,
    pub status: IssueStatus,
    pub status_label: &'static str,
    pub description: Option<String>,
    pub labels: Vec<String>,
    pub assignees: Vec<AssigneeView>,
    /// "Issue #123"
    pub github: Option<String>,
    pub created: String,
    pub updated: String,
}

impl IssueDetail {
    pub fn from_issue(issue: &Issue) -> Self {
        Self {
            id: issue.id.clone(),
            title: issue.title.clone(),
            url: issue.url.as_deref().and_then(web_link),
            status: issue.status,
            status_label: issue.status.label(),
            description: issue
                .description
                .as_ref()
                .filter(|d| !d.trim().is_empty())
                .cloned(),
            labels: issue.labels.clone(),
            assignees: issue
                .assignees
                .iter()
                .map(|name| AssigneeView {
                    name: name.clone(),
                    initial: name
                        .chars()
                        .next()
                        .map(|c| c.to_ascii_uppercase())
                        .unwrap_or('?'),
                })
                .collect(),
            github: issue.number.map(|n| format!("Issue #{n}")),
            created: issue.created_at.strftime("%Y-%m-%d").to_string(),
            updated: issue.updated_at.strftime("%Y-%m-%d").to_string(),
        }
    }
}

fn web_link(raw: &str) -> Option<String> {
    let url = Url::parse(raw).ok()?;
    matches!(url.scheme(), "http" | "https").then(|| url.to_string())
}

/// The detail panel is open exactly when an issue is selected
pub fn detail_for(selected: Option<&Issue>) -> Option<IssueDetail> {
    selected.map(IssueDetail::from_issue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_issues;

    #[test]
    fn test_detail_projection() {
        let issue = &sample_issues()[2];
        let detail = IssueDetail::from_issue(issue);
        assert_eq!(detail.title, "Add dark mode support");
        assert_eq!(detail.status_label, "In Progress");
        assert_eq!(detail.github.as_deref(), Some("Issue #125"));
        assert_eq!(detail.created, "2024-01-17");
        assert_eq!(detail.updated, "2024-01-17");
        assert_eq!(detail.assignees[1].name, "sarah.ui");
        assert_eq!(detail.assignees[1].initial, 'S');
        assert_eq!(
            detail.url.as_deref(),
            Some("https://github.com/myorg/ui-components/issues/125")
        );
    }

    #[test]
    fn test_detail_drops_non_web_links() {
        let mut issue = sample_issues().remove(0);
        issue.url = Some("javascript:alert(1)".to_string());
        assert!(IssueDetail::from_issue(&issue).url.is_none());
        issue.url = Some("not a url".to_string());
        assert!(IssueDetail::from_issue(&issue).url.is_none());
    }

    #[test]
    fn test_detail_open_only_with_selection() {
        assert!(detail_for(None).is_none());
        let issues = sample_issues();
        assert!(detail_for(issues.first()).is_some());
    }
}
