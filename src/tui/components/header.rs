//! App header bar component
//!
//! Shows the app title, the selected project, the sync badge and who is
//! signed in.

use iocraft::prelude::*;

use crate::board::SyncState;
use crate::tui::theme::theme;

/// Props for the Header component
#[derive(Default, Props)]
pub struct HeaderProps {
    /// Selected project name
    pub project: Option<String>,

    /// Sync indicator state
    pub sync: SyncState,

    /// Display name of the signed-in user
    pub user_name: Option<String>,

    /// Email of the signed-in user
    pub user_email: Option<String>,
}

/// App header bar
#[component]
pub fn Header(props: &HeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let left_text = match props.project.as_deref() {
        Some(project) => format!("GitHub Projects Kanban - Sync Board - {project}"),
        None => "GitHub Projects Kanban - Sync Board".to_string(),
    };

    let user_text = match (props.user_name.as_deref(), props.user_email.as_deref()) {
        (Some(name), Some(email)) if name != email => Some(format!("{name} <{email}>")),
        (Some(name), _) => Some(name.to_string()),
        (None, Some(email)) => Some(email.to_string()),
        (None, None) => None,
    };

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.highlight,
        ) {
            Text(
                content: left_text,
                color: theme.highlight_text,
                weight: Weight::Bold,
            )
            View(flex_direction: FlexDirection::Row, gap: 2) {
                SyncBadge(state: props.sync.clone())
                #(user_text.map(|text| element! {
                    Text(content: text, color: theme.highlight_text)
                }))
            }
        }
    }
}

/// Props for the SyncBadge component
#[derive(Default, Props)]
pub struct SyncBadgeProps {
    pub state: SyncState,
}

/// Sync status indicator
#[component]
pub fn SyncBadge(props: &SyncBadgeProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let (marker, color) = match &props.state {
        SyncState::Idle { .. } => ("●", theme.sync_ok),
        SyncState::Syncing => ("◌", theme.sync_busy),
        SyncState::Error(_) => ("!", theme.sync_error),
    };

    element! {
        View(flex_direction: FlexDirection::Row, gap: 1) {
            Text(content: marker, color: color, weight: Weight::Bold)
            Text(content: props.state.label(), color: color)
        }
    }
}
