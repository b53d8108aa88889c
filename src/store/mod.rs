//! In-memory issue store
//!
//! An ordered collection of issues that acts as the single source of truth
//! for board state. The store itself is synchronous and knows nothing about
//! syncing; [`crate::board::BoardController`] owns it behind a mutex and is
//! the only writer.

use jiff::Timestamp;
use rand::Rng;

use crate::error::{KanbanError, Result};
use crate::types::{Issue, IssueStatus};

const ID_PREFIX: &str = "issue_";

/// Ordered, in-memory collection of issues
#[derive(Debug, Clone, Default)]
pub struct IssueStore {
    issues: Vec<Issue>,
}

impl IssueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the given issues, keeping their order
    pub fn with_issues(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// All issues in collection order
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn get(&self, id: &str) -> Option<&Issue> {
        self.issues.iter().find(|i| i.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Issues with the given status, in collection order
    pub fn list_by_status(&self, status: IssueStatus) -> Vec<&Issue> {
        self.issues.iter().filter(|i| i.status == status).collect()
    }

    /// Issues with the given status that belong to `project_id`.
    ///
    /// `None` means no project scoping and behaves like [`Self::list_by_status`].
    pub fn list_by_status_in(&self, project_id: Option<&str>, status: IssueStatus) -> Vec<&Issue> {
        match project_id {
            Some(project) => self
                .issues
                .iter()
                .filter(|i| i.status == status && i.in_project(project))
                .collect(),
            None => self.list_by_status(status),
        }
    }

    /// The issue number for the next created issue: one past the highest
    /// number on the board, or 1 for an empty board.
    pub fn next_number(&self) -> u64 {
        self.issues
            .iter()
            .filter_map(|i| i.number)
            .max()
            .map(|n| n + 1)
            .unwrap_or(1)
    }

    /// Generate an id that is not used by any issue in the store
    pub fn generate_id(&self) -> Result<String> {
        const RETRIES_PER_LENGTH: u32 = 40;

        for length in 8..=16 {
            for _ in 0..RETRIES_PER_LENGTH {
                let candidate = format!("{ID_PREFIX}{}", generate_hash(length));
                if !self.contains(&candidate) {
                    return Ok(candidate);
                }
            }
        }

        Err(KanbanError::Other(
            "could not generate a unique issue id".to_string(),
        ))
    }

    /// Insert an issue at the front of the collection.
    ///
    /// Ids are never reused, so inserting an id that already exists is an error.
    pub fn prepend(&mut self, issue: Issue) -> Result<()> {
        if self.contains(&issue.id) {
            return Err(KanbanError::Other(format!(
                "issue id '{}' already exists",
                issue.id
            )));
        }
        self.issues.insert(0, issue);
        Ok(())
    }

    /// Set an issue's status and refresh its `updated_at`.
    ///
    /// Returns the previous status when a change was made, and `None` when the
    /// issue does not exist or already has `status`.
    pub fn set_status(
        &mut self,
        id: &str,
        status: IssueStatus,
        now: Timestamp,
    ) -> Option<IssueStatus> {
        let issue = self.issues.iter_mut().find(|i| i.id == id)?;
        if issue.status == status {
            return None;
        }
        let previous = issue.status;
        issue.status = status;
        issue.touch(now);
        Some(previous)
    }

    /// Put an issue's status back to `status` without touching `updated_at`.
    ///
    /// Returns whether the issue exists.
    pub fn revert_status(&mut self, id: &str, status: IssueStatus) -> bool {
        match self.issues.iter_mut().find(|i| i.id == id) {
            Some(issue) => {
                issue.status = status;
                true
            }
            None => false,
        }
    }
}

/// Random lowercase hex string of `length` characters
fn generate_hash(length: usize) -> String {
    let num_bytes = length.div_ceil(2);
    let mut buf = vec![0u8; num_bytes];
    rand::rng().fill(&mut buf[..]);
    let hex: String = buf.iter().map(|b| format!("{b:02x}")).collect();
    hex[..length].to_string()
}
