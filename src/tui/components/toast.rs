//! Toast notifications for sync outcomes and clipboard actions

use std::time::{Duration, Instant};

use iocraft::prelude::*;

use crate::board::{CreateOutcome, MoveOutcome};
use crate::error::Result;
use crate::types::IssueStatus;

/// How long a toast stays on screen
pub const TOAST_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub shown_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    fn marker(self) -> &'static str {
        match self {
            ToastLevel::Success => "✓",
            ToastLevel::Warning => "!",
            ToastLevel::Error => "✗",
        }
    }
}

impl Toast {
    fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            message: message.into(),
            level,
            shown_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Error)
    }

    /// Toast for a finished move. Moves that changed nothing, or were
    /// overtaken by a newer move, stay silent.
    pub fn for_move(outcome: &MoveOutcome, status: IssueStatus) -> Option<Self> {
        match outcome {
            MoveOutcome::Synced => Some(Self::success(format!("Moved to {}", status.label()))),
            MoveOutcome::Reverted { error } => Some(Self::error(format!("Move reverted: {error}"))),
            MoveOutcome::Unchanged | MoveOutcome::Superseded => None,
        }
    }

    /// Toast for a finished create
    pub fn for_create(result: &Result<CreateOutcome>) -> Self {
        match result {
            Ok(CreateOutcome::Synced(issue)) => match issue.number {
                Some(number) => Self::success(format!("Created #{number}")),
                None => Self::success("Created issue"),
            },
            Ok(CreateOutcome::Failed { error, .. }) => {
                Self::error(format!("Created locally, sync failed: {error}"))
            }
            Ok(CreateOutcome::Rejected) => Self::warning("Title is required"),
            Err(e) => Self::error(format!("Create failed: {e}")),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= TOAST_TTL
    }

    pub fn color(&self) -> Color {
        match self.level {
            ToastLevel::Success => Color::Green,
            ToastLevel::Warning => Color::Yellow,
            ToastLevel::Error => Color::Red,
        }
    }

    /// Message with its level marker, as rendered
    pub fn text(&self) -> String {
        format!("{} {}", self.level.marker(), self.message)
    }
}

#[derive(Default, Props)]
pub struct ToastNotificationProps {
    pub toast: Option<Toast>,
}

/// Toast bar rendered above the footer
#[component]
pub fn ToastNotification(props: &ToastNotificationProps) -> impl Into<AnyElement<'static>> {
    element! {
        View() {
            #(props.toast.as_ref().map(|t| element! {
                View(
                    width: 100pct,
                    height: 3,
                    align_items: AlignItems::Center,
                    justify_content: JustifyContent::Center,
                    background_color: Color::Black,
                    border_edges: Edges::Top,
                    border_style: BorderStyle::Single,
                    border_color: t.color(),
                ) {
                    Text(content: t.text(), color: t.color())
                }
            }))
        }
    }
}
