//! Drag and drop between columns.
//!
//! Cards are drag sources keyed by issue id and columns are drop targets
//! keyed by status. The [`DragCoordinator`] tracks one gesture at a time and
//! turns a release over a target into a [`DropResult`].

use crate::types::{Issue, IssueStatus};

/// Something that can be picked up
pub trait DragSource {
    fn drag_id(&self) -> &str;
}

/// Something a dragged item can be released over
pub trait DropTarget {
    fn drop_id(&self) -> IssueStatus;
}

impl DragSource for Issue {
    fn drag_id(&self) -> &str {
        &self.id
    }
}

impl DropTarget for IssueStatus {
    fn drop_id(&self) -> IssueStatus {
        *self
    }
}

/// A finished gesture: which issue landed in which column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropResult {
    pub issue_id: String,
    pub status: IssueStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveDrag {
    issue_id: String,
    over: Option<IssueStatus>,
}

/// Tracks the drag gesture in progress, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragCoordinator {
    active: Option<ActiveDrag>,
}

impl DragCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start dragging `source`, replacing any gesture in progress
    pub fn begin(&mut self, source: &impl DragSource) {
        self.active = Some(ActiveDrag {
            issue_id: source.drag_id().to_string(),
            over: None,
        });
    }

    /// Move the pointer over `target`. Ignored when nothing is being dragged.
    pub fn hover(&mut self, target: &impl DropTarget) {
        if let Some(active) = self.active.as_mut() {
            active.over = Some(target.drop_id());
        }
    }

    /// Move the pointer off every target
    pub fn leave(&mut self) {
        if let Some(active) = self.active.as_mut() {
            active.over = None;
        }
    }

    /// End the gesture. Yields a drop only when released over a target.
    pub fn release(&mut self) -> Option<DropResult> {
        let active = self.active.take()?;
        let status = active.over?;
        Some(DropResult {
            issue_id: active.issue_id,
            status,
        })
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Id of the item being dragged
    pub fn dragging(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.issue_id.as_str())
    }

    /// Whether a drag is currently hovering over `target`
    pub fn is_over(&self, target: &impl DropTarget) -> bool {
        self.active
            .as_ref()
            .and_then(|a| a.over)
            .is_some_and(|s| s == target.drop_id())
    }

    pub fn over(&self) -> Option<IssueStatus> {
        self.active.as_ref().and_then(|a| a.over)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_issues;

    #[test]
    fn test_release_over_target() {
        let issue = sample_issues().remove(0);
        let mut dnd = DragCoordinator::new();
        dnd.begin(&issue);
        dnd.hover(&IssueStatus::Done);
        assert!(dnd.is_over(&IssueStatus::Done));
        assert!(!dnd.is_over(&IssueStatus::Todo));

        let result = dnd.release().unwrap();
        assert_eq!(result.issue_id, "issue_1");
        assert_eq!(result.status, IssueStatus::Done);
        assert!(!dnd.is_dragging());
    }

    #[test]
    fn test_release_without_target_yields_nothing() {
        let issue = sample_issues().remove(0);
        let mut dnd = DragCoordinator::new();
        dnd.begin(&issue);
        assert!(dnd.release().is_none());

        dnd.begin(&issue);
        dnd.hover(&IssueStatus::Done);
        dnd.leave();
        assert!(dnd.release().is_none());
    }

    #[test]
    fn test_hover_without_drag_is_ignored() {
        let mut dnd = DragCoordinator::new();
        dnd.hover(&IssueStatus::Done);
        assert!(!dnd.is_over(&IssueStatus::Done));
        assert!(dnd.release().is_none());
    }

    #[test]
    fn test_cancel() {
        let issue = sample_issues().remove(1);
        let mut dnd = DragCoordinator::new();
        dnd.begin(&issue);
        assert_eq!(dnd.dragging(), Some("issue_2"));
        dnd.cancel();
        assert!(dnd.dragging().is_none());
    }
}
