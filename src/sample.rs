//! Built-in sample data
//!
//! The board starts from this fixed set on every launch; nothing is persisted.

use jiff::Timestamp;

use crate::types::{Issue, IssueStatus, Project};

pub const DEFAULT_PROJECT_ID: &str = "project_1";

/// The two demo repositories available in the project selector
pub fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            id: "project_1".to_string(),
            name: "React UI Components".to_string(),
            description: Some("A collection of reusable React components".to_string()),
            owner: "myorg".to_string(),
            repo: "ui-components".to_string(),
        },
        Project {
            id: "project_2".to_string(),
            name: "API Backend".to_string(),
            description: Some("Node.js backend API".to_string()),
            owner: "myorg".to_string(),
            repo: "api-backend".to_string(),
        },
    ]
}

struct SampleIssue {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    status: IssueStatus,
    labels: &'static [&'static str],
    assignees: &'static [&'static str],
    number: u64,
    created: i64,
    updated: i64,
}

// Timestamps are Unix seconds (January 2024, UTC).
const SAMPLE_ISSUES: [SampleIssue; 5] = [
    SampleIssue {
        id: "issue_1",
        title: "Implement user authentication",
        description: "Add login and registration functionality with JWT tokens",
        status: IssueStatus::Todo,
        labels: &["feature", "authentication"],
        assignees: &["john.doe"],
        number: 123,
        created: 1_705_312_800,
        updated: 1_705_312_800,
    },
    SampleIssue {
        id: "issue_2",
        title: "Fix responsive design issues",
        description: "Mobile layout breaks on certain screen sizes",
        status: IssueStatus::InProgress,
        labels: &["bug", "css"],
        assignees: &["jane.smith"],
        number: 124,
        created: 1_705_397_400,
        updated: 1_705_416_300,
    },
    SampleIssue {
        id: "issue_3",
        title: "Add dark mode support",
        description: "Implement theme switching between light and dark modes",
        status: IssueStatus::InProgress,
        labels: &["feature", "ui"],
        assignees: &["alex.dev", "sarah.ui"],
        number: 125,
        created: 1_705_490_100,
        updated: 1_705_508_400,
    },
    SampleIssue {
        id: "issue_4",
        title: "Update documentation",
        description: "Add comprehensive API documentation and examples",
        status: IssueStatus::Done,
        labels: &["documentation"],
        assignees: &["mike.docs"],
        number: 126,
        created: 1_705_564_800,
        updated: 1_705_599_000,
    },
    SampleIssue {
        id: "issue_5",
        title: "Optimize bundle size",
        description: "Reduce JavaScript bundle size by removing unused dependencies",
        status: IssueStatus::Done,
        labels: &["performance", "optimization"],
        assignees: &["performance.team"],
        number: 127,
        created: 1_705_671_900,
        updated: 1_705_687_200,
    },
];

/// The five demo issues, all in the first project
pub fn sample_issues() -> Vec<Issue> {
    SAMPLE_ISSUES
        .iter()
        .map(|s| Issue {
            id: s.id.to_string(),
            title: s.title.to_string(),
            description: Some(s.description.to_string()),
            status: s.status,
            labels: s.labels.iter().map(|l| l.to_string()).collect(),
            assignees: s.assignees.iter().map(|a| a.to_string()).collect(),
            url: Some(format!(
                "https://github.com/myorg/ui-components/issues/{}",
                s.number
            )),
            number: Some(s.number),
            created_at: Timestamp::constant(s.created, 0),
            updated_at: Timestamp::constant(s.updated, 0),
            project_id: Some(DEFAULT_PROJECT_ID.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_timestamps() {
        let issues = sample_issues();
        assert_eq!(issues[0].created_at.to_string(), "2024-01-15T10:00:00Z");
        assert_eq!(issues[1].updated_at.to_string(), "2024-01-16T14:45:00Z");
        assert_eq!(issues[4].updated_at.to_string(), "2024-01-19T18:00:00Z");
    }

    #[test]
    fn test_sample_invariants() {
        let issues = sample_issues();
        assert_eq!(issues.len(), 5);
        for issue in &issues {
            assert!(issue.updated_at >= issue.created_at);
            assert!(issue.in_project(DEFAULT_PROJECT_ID));
        }
        assert_eq!(
            issues[2].url.as_deref(),
            Some("https://github.com/myorg/ui-components/issues/125")
        );
    }

    #[test]
    fn test_sample_projects() {
        let projects = sample_projects();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].id, DEFAULT_PROJECT_ID);
        assert_eq!(projects[1].slug(), "myorg/api-backend");
    }
}
