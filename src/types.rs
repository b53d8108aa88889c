use std::fmt;
use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::error::KanbanError;

/// Status of an issue on the board. Each status is one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl IssueStatus {
    /// All statuses in column order
    pub const ALL: [IssueStatus; 3] = [
        IssueStatus::Todo,
        IssueStatus::InProgress,
        IssueStatus::Done,
    ];

    /// Human-readable label ("To Do", "In Progress", "Done")
    pub fn label(self) -> &'static str {
        match self {
            IssueStatus::Todo => "To Do",
            IssueStatus::InProgress => "In Progress",
            IssueStatus::Done => "Done",
        }
    }

    /// Column index of this status
    pub fn index(self) -> usize {
        match self {
            IssueStatus::Todo => 0,
            IssueStatus::InProgress => 1,
            IssueStatus::Done => 2,
        }
    }

    /// Status for a column index, if it exists
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next status (wrapping)
    pub fn next(self) -> Self {
        match self {
            IssueStatus::Todo => IssueStatus::InProgress,
            IssueStatus::InProgress => IssueStatus::Done,
            IssueStatus::Done => IssueStatus::Todo,
        }
    }

    /// Previous status (wrapping)
    pub fn prev(self) -> Self {
        match self {
            IssueStatus::Todo => IssueStatus::Done,
            IssueStatus::InProgress => IssueStatus::Todo,
            IssueStatus::Done => IssueStatus::InProgress,
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueStatus::Todo => write!(f, "todo"),
            IssueStatus::InProgress => write!(f, "in_progress"),
            IssueStatus::Done => write!(f, "done"),
        }
    }
}

impl FromStr for IssueStatus {
    type Err = KanbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "todo" => Ok(IssueStatus::Todo),
            "in_progress" | "in-progress" => Ok(IssueStatus::InProgress),
            "done" => Ok(IssueStatus::Done),
            _ => Err(KanbanError::InvalidStatus(s.to_string())),
        }
    }
}

pub const VALID_STATUSES: &[&str] = &["todo", "in_progress", "done"];

/// A single issue shown as a card on the board
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub status: IssueStatus,

    #[serde(default)]
    pub labels: Vec<String>,

    #[serde(default)]
    pub assignees: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u64>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl Issue {
    /// Whether this issue belongs to the given project
    pub fn in_project(&self, project_id: &str) -> bool {
        self.project_id.as_deref() == Some(project_id)
    }

    /// Advance `updated_at`, never moving it behind `created_at` or its
    /// previous value.
    pub fn touch(&mut self, now: Timestamp) {
        self.updated_at = now.max(self.updated_at).max(self.created_at);
    }
}

/// Fields collected by the create form. The controller fills in the id,
/// timestamps and issue number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueDraft {
    pub title: String,
    pub description: Option<String>,
    pub status: IssueStatus,
    pub labels: Vec<String>,
    pub assignees: Vec<String>,
    pub url: Option<String>,
}

impl IssueDraft {
    /// Create a draft with just a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// A GitHub repository the board can be pointed at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub owner: String,
    pub repo: String,
}

impl Project {
    /// `owner/repo` slug
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// A signed-in user as reported by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

impl User {
    /// Display name, falling back to the email address
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }

    /// Uppercased first character of the display name, for avatar fallbacks
    pub fn initial(&self) -> char {
        self.name()
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}
