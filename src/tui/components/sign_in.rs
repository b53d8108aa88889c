//! Sign-in screen shown when nobody is signed in

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Feature list on the sign-in card
pub const FEATURES: [&str; 4] = [
    "Real-time bidirectional sync",
    "Drag & drop issue management",
    "GitHub OAuth integration",
    "Visual sync status indicators",
];

/// Props for the SignIn component
#[derive(Default, Props)]
pub struct SignInProps {
    /// Message from the last failed attempt
    pub error: Option<String>,
}

#[component]
pub fn SignIn(props: &SignInProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            height: 100pct,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
        ) {
            View(
                width: 50,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: theme.border_focused,
                padding: 1,
            ) {
                Text(content: "GitHub Projects Kanban Sync Board", color: theme.text, weight: Weight::Bold)
                View(margin_top: 1) {
                    Text(
                        content: "Manage GitHub issues on a kanban board",
                        color: theme.text_dimmed,
                    )
                }
                View(
                    margin_top: 1,
                    flex_direction: FlexDirection::Column,
                    width: 100pct,
                ) {
                    #(FEATURES.iter().map(|feature| element! {
                        Text(content: format!("  • {feature}"), color: theme.text)
                    }))
                }
                View(
                    margin_top: 1,
                    border_style: BorderStyle::Round,
                    border_color: theme.highlight,
                    padding_left: 2,
                    padding_right: 2,
                ) {
                    Text(
                        content: "Sign in with GitHub",
                        color: theme.text,
                        weight: Weight::Bold,
                    )
                }
                #(props.error.clone().map(|error| element! {
                    View(margin_top: 1) {
                        Text(content: error, color: theme.sync_error)
                    }
                }))
            }
        }
    }
}
