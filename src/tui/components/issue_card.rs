//! Issue card component for kanban board columns

use iocraft::prelude::*;

use crate::tui::text::{truncate, wrap_lines};
use crate::tui::theme::theme;
use crate::types::Issue;

/// Most labels a card shows before collapsing the rest into "+N"
pub const MAX_CARD_LABELS: usize = 3;

/// Split labels into the chips shown on a card and the overflow marker
pub fn label_chips(labels: &[String]) -> (Vec<String>, Option<String>) {
    let shown = labels.iter().take(MAX_CARD_LABELS).cloned().collect();
    let hidden = labels.len().saturating_sub(MAX_CARD_LABELS);
    (shown, (hidden > 0).then(|| format!("+{hidden}")))
}

/// Footer line of a card: "#123  2 assignees  ↗"
pub fn card_meta(issue: &Issue) -> String {
    let mut parts = Vec::new();
    if let Some(number) = issue.number {
        parts.push(format!("#{number}"));
    }
    match issue.assignees.len() {
        0 => {}
        1 => parts.push("1 assignee".to_string()),
        n => parts.push(format!("{n} assignees")),
    }
    if issue.url.is_some() {
        parts.push("↗".to_string());
    }
    parts.join("  ")
}

/// Props for the IssueCard component
#[derive(Default, Props)]
pub struct IssueCardProps {
    pub issue: Issue,
    pub is_selected: bool,
    /// Card is picked up and waiting to be dropped
    pub is_dragging: bool,
    /// Available width for the card content (in characters)
    pub width: Option<u32>,
}

/// Compact issue card
///
/// ```text
/// ╭──────────────────────╮
/// │ Fix responsive design│
/// │ Mobile layout breaks │
/// │ on certain screen... │
/// │ bug css              │
/// │ #124  1 assignee  ↗  │
/// ╰──────────────────────╯
/// ```
#[component]
pub fn IssueCard(props: &IssueCardProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let issue = &props.issue;

    let border_color = if props.is_dragging {
        theme.drop_target
    } else if props.is_selected {
        theme.border_focused
    } else {
        theme.border
    };
    let bg_color = props.is_selected.then_some(theme.highlight);
    let text_color = if props.is_selected {
        theme.highlight_text
    } else {
        theme.text
    };
    let dim_color = if props.is_selected {
        theme.highlight_text
    } else {
        theme.text_dimmed
    };

    // Round border plus one column of padding on each side
    let text_width = (props.width.unwrap_or(24).saturating_sub(4) as usize).max(8);

    let prefix = if props.is_dragging { "⇄ " } else { "" };
    let title = truncate(&format!("{prefix}{}", issue.title), text_width);
    let description = issue
        .description
        .as_deref()
        .map(|d| wrap_lines(d, text_width, 2))
        .unwrap_or_default();
    let (labels, overflow) = label_chips(&issue.labels);
    let meta = card_meta(issue);

    element! {
        View(
            width: 100pct,
            min_height: 3,
            flex_direction: FlexDirection::Column,
            border_style: if props.is_dragging { BorderStyle::Double } else { BorderStyle::Round },
            border_color: border_color,
            background_color: bg_color,
            padding_left: 1,
            padding_right: 1,
        ) {
            Text(content: title, color: text_color, weight: Weight::Bold)
            #(description.into_iter().map(|line| element! {
                Text(content: line, color: dim_color)
            }))
            #((!labels.is_empty()).then(|| element! {
                View(flex_direction: FlexDirection::Row, flex_wrap: FlexWrap::Wrap, column_gap: 1) {
                    #(labels.iter().map(|label| element! {
                        Text(
                            content: label.clone(),
                            color: if props.is_selected { theme.highlight_text } else { theme.label },
                        )
                    }))
                    #(overflow.clone().map(|more| element! {
                        Text(content: more, color: dim_color)
                    }))
                }
            }))
            #((!meta.is_empty()).then(|| element! {
                Text(content: meta.clone(), color: if props.is_selected { theme.highlight_text } else { theme.id_color })
            }))
        }
    }
}
