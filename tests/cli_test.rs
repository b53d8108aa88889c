mod common;

use common::KanbanTest;

// ============================================================================
// ls
// ============================================================================

#[test]
fn test_ls_lists_all_sample_issues() {
    let kanban = KanbanTest::new();

    let output = kanban.run_success(&["ls"]);
    for id in ["issue_1", "issue_2", "issue_3", "issue_4", "issue_5"] {
        assert!(output.contains(id), "missing {id} in:\n{output}");
    }
    assert!(output.contains("Implement user authentication"));
}

#[test]
fn test_ls_status_filter() {
    let kanban = KanbanTest::new();

    let output = kanban.run_success(&["ls", "--status", "done"]);
    assert!(output.contains("issue_4"));
    assert!(output.contains("issue_5"));
    assert!(!output.contains("issue_1"));
    assert!(!output.contains("issue_2"));
}

#[test]
fn test_ls_json() {
    let kanban = KanbanTest::new();

    let output = kanban.run_success(&["ls", "--status", "in_progress", "--json"]);
    let issues: serde_json::Value = serde_json::from_str(&output).unwrap();
    let issues = issues.as_array().unwrap();
    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0]["id"], "issue_2");
    assert_eq!(issues[0]["status"], "in_progress");
    assert_eq!(issues[0]["number"], 124);
    assert_eq!(issues[1]["assignees"][1], "sarah.ui");
}

#[test]
fn test_ls_project_without_issues() {
    let kanban = KanbanTest::new();

    let output = kanban.run_success(&["ls", "--project", "project_2"]);
    assert!(output.contains("No issues found."));
}

#[test]
fn test_ls_unknown_project_fails() {
    let kanban = KanbanTest::new();

    let stderr = kanban.run_failure(&["ls", "--project", "project_9"]);
    assert!(stderr.contains("project 'project_9' not found"));
}

#[test]
fn test_ls_invalid_status_fails() {
    let kanban = KanbanTest::new();

    let stderr = kanban.run_failure(&["ls", "--status", "blocked"]);
    assert!(stderr.contains("Invalid status"));
}

// ============================================================================
// projects
// ============================================================================

#[test]
fn test_projects_table() {
    let kanban = KanbanTest::new();

    let output = kanban.run_success(&["projects"]);
    assert!(output.contains("React UI Components"));
    assert!(output.contains("myorg/ui-components"));
    assert!(output.contains("API Backend"));
    assert!(output.contains("project_1 *"));
}

#[test]
fn test_projects_json() {
    let kanban = KanbanTest::new();

    let output = kanban.run_success(&["projects", "--json"]);
    let projects: serde_json::Value = serde_json::from_str(&output).unwrap();
    let projects = projects.as_array().unwrap();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[1]["id"], "project_2");
    assert_eq!(projects[1]["repo"], "api-backend");
}

// ============================================================================
// logging
// ============================================================================

#[test]
fn test_commands_log_to_configured_file() {
    let kanban = KanbanTest::new();

    kanban.run_success(&["ls"]);
    assert!(kanban.log_path().exists());
    assert!(kanban.read_log().contains("logging initialized"));
}
