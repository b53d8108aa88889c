//! Create-issue form state

use crate::types::{IssueDraft, IssueStatus};

/// Which input currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Description,
    Status,
    Labels,
    Assignees,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Title,
        FormField::Description,
        FormField::Status,
        FormField::Labels,
        FormField::Assignees,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title *",
            FormField::Description => "Description",
            FormField::Status => "Status",
            FormField::Labels => "Labels",
            FormField::Assignees => "Assignees",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Title => "Enter issue title",
            FormField::Description => "Describe the issue...",
            FormField::Status => "",
            FormField::Labels => "bug, enhancement, feature (comma separated)",
            FormField::Assignees => "username1, username2 (comma separated)",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Free-text fields of the create form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateForm {
    pub title: String,
    pub description: String,
    pub status: IssueStatus,
    pub labels: String,
    pub assignees: String,
    pub focused: FormField,
}

impl CreateForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the form would produce a draft
    pub fn can_submit(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Text buffer for the focused field, if it is a text field
    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focused {
            FormField::Title => Some(&mut self.title),
            FormField::Description => Some(&mut self.description),
            FormField::Labels => Some(&mut self.labels),
            FormField::Assignees => Some(&mut self.assignees),
            FormField::Status => None,
        }
    }

    /// Build a draft and clear the form.
    ///
    /// Returns `None`, leaving the fields untouched, when the title is blank.
    pub fn submit(&mut self) -> Option<IssueDraft> {
        let draft = self.to_draft()?;
        self.clear();
        Some(draft)
    }

    /// Build a draft without clearing the form
    pub fn to_draft(&self) -> Option<IssueDraft> {
        let title = self.title.trim();
        if title.is_empty() {
            return None;
        }

        let description = self.description.trim();
        Some(IssueDraft {
            title: title.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            status: self.status,
            labels: normalize_list(&self.labels),
            assignees: normalize_list(&self.assignees),
            url: None,
        })
    }

    /// Reset every field; status goes back to todo
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Split comma separated input into trimmed, non-empty entries.
///
/// Order and duplicates are kept.
pub fn normalize_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_list() {
        assert_eq!(normalize_list(" a , b ,, "), vec!["a", "b"]);
        assert_eq!(normalize_list("x, x,y"), vec!["x", "x", "y"]);
        assert!(normalize_list("  ,  ,").is_empty());
        assert!(normalize_list("").is_empty());
    }

    #[test]
    fn test_submit_blank_title_keeps_fields() {
        let mut form = CreateForm {
            title: "   ".to_string(),
            labels: "a".to_string(),
            ..Default::default()
        };
        assert!(form.submit().is_none());
        assert_eq!(form.labels, "a");
    }

    #[test]
    fn test_submit_normalizes_and_clears() {
        let mut form = CreateForm {
            title: "  Fix bug ".to_string(),
            description: "   ".to_string(),
            status: IssueStatus::Done,
            labels: " a , b ,, ".to_string(),
            assignees: "jane, ".to_string(),
            focused: FormField::Labels,
        };

        let draft = form.submit().unwrap();
        assert_eq!(draft.title, "Fix bug");
        assert_eq!(draft.description, None);
        assert_eq!(draft.status, IssueStatus::Done);
        assert_eq!(draft.labels, vec!["a", "b"]);
        assert_eq!(draft.assignees, vec!["jane"]);

        assert_eq!(form, CreateForm::default());
        assert_eq!(form.status, IssueStatus::Todo);
    }

    #[test]
    fn test_field_cycle() {
        assert_eq!(FormField::Title.next(), FormField::Description);
        assert_eq!(FormField::Assignees.next(), FormField::Title);
        assert_eq!(FormField::Title.prev(), FormField::Assignees);
    }

    #[test]
    fn test_status_field_has_no_text() {
        let mut form = CreateForm {
            focused: FormField::Status,
            ..Default::default()
        };
        assert!(form.focused_text_mut().is_none());
    }
}
