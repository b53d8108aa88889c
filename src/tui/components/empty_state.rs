//! Placeholders shown instead of issue cards

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::IssueStatus;

/// Cards drawn in each column while the board is refreshing
pub const SKELETON_CARDS: usize = 3;

/// Text shown in an empty column
pub fn column_empty_text(status: IssueStatus) -> String {
    format!("No issues in {}", status.label().to_lowercase())
}

/// Type of full-screen empty state to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyStateKind {
    /// No project is selected
    #[default]
    NoProject,
    /// Waiting on the identity provider
    Connecting,
}

/// Props for the EmptyState component
#[derive(Default, Props)]
pub struct EmptyStateProps {
    pub kind: EmptyStateKind,
}

/// Centered message filling the board area
#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let (icon, title, message) = match props.kind {
        EmptyStateKind::NoProject => (
            "i",
            "No Project Selected",
            "Press 'p' to pick a project.",
        ),
        EmptyStateKind::Connecting => (
            "~",
            "Loading GitHub Projects Kanban",
            "Connecting to your workspace...",
        ),
    };

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 2,
        ) {
            View(
                width: 5,
                height: 3,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: theme.border,
                margin_bottom: 1,
            ) {
                Text(content: icon, color: theme.text_dimmed)
            }
            Text(content: title, color: theme.text, weight: Weight::Bold)
            View(margin_top: 1, max_width: 60) {
                Text(content: message, color: theme.text_dimmed)
            }
        }
    }
}

/// Grey placeholder cards shown while a column is loading
#[component]
pub fn LoadingSkeleton() -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(width: 100pct, flex_direction: FlexDirection::Column) {
            #((0..SKELETON_CARDS).map(|_| element! {
                View(
                    width: 100pct,
                    margin_top: 1,
                    flex_direction: FlexDirection::Column,
                    border_style: BorderStyle::Round,
                    border_color: theme.border,
                    padding_left: 1,
                    padding_right: 1,
                ) {
                    Text(content: "░░░░░░░░░░░░", color: theme.text_dimmed)
                    Text(content: "░░░░░░", color: theme.text_dimmed)
                }
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_empty_text() {
        assert_eq!(column_empty_text(IssueStatus::Todo), "No issues in to do");
        assert_eq!(
            column_empty_text(IssueStatus::InProgress),
            "No issues in in progress"
        );
        assert_eq!(column_empty_text(IssueStatus::Done), "No issues in done");
    }

    #[test]
    fn test_empty_state_kind_default() {
        assert_eq!(EmptyStateKind::default(), EmptyStateKind::NoProject);
    }
}
