//! Read-only detail panel for the selected issue

use iocraft::prelude::*;

use crate::detail::IssueDetail;
use crate::tui::theme::theme;

/// Props for the IssueDetailPanel component
#[derive(Default, Props)]
pub struct IssueDetailPanelProps {
    pub detail: Option<IssueDetail>,
}

/// Side panel listing every field of one issue
#[component]
pub fn IssueDetailPanel(props: &IssueDetailPanelProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let Some(detail) = props.detail.clone() else {
        return element! { View() };
    };

    let status_color = theme.status_color(detail.status);
    let section = |title: &str| {
        element! {
            View(margin_top: 1) {
                Text(content: title.to_string(), color: theme.text_dimmed, weight: Weight::Bold)
            }
        }
    };

    element! {
        View(
            width: 40pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            flex_shrink: 0.0,
            border_style: BorderStyle::Round,
            border_color: theme.border_focused,
            padding_left: 1,
            padding_right: 1,
            overflow: Overflow::Hidden,
        ) {
            Text(content: detail.title.clone(), color: theme.text, weight: Weight::Bold)
            #(detail.url.clone().map(|url| element! {
                Text(content: url, color: theme.id_color)
            }))

            #(Some(section("Status")))
            Text(content: detail.status_label, color: status_color)

            #(detail.description.clone().map(|description| element! {
                View(flex_direction: FlexDirection::Column) {
                    #(Some(section("Description")))
                    Text(content: description, color: theme.text)
                }
            }))

            #((!detail.labels.is_empty()).then(|| element! {
                View(flex_direction: FlexDirection::Column) {
                    #(Some(section("Labels")))
                    Text(content: detail.labels.join(", "), color: theme.label)
                }
            }))

            #((!detail.assignees.is_empty()).then(|| element! {
                View(flex_direction: FlexDirection::Column) {
                    #(Some(section("Assignees")))
                    #(detail.assignees.iter().map(|a| element! {
                        View(flex_direction: FlexDirection::Row, gap: 1) {
                            Text(content: format!("({})", a.initial), color: theme.highlight, weight: Weight::Bold)
                            Text(content: a.name.clone(), color: theme.text)
                        }
                    }))
                }
            }))

            #(detail.github.clone().map(|github| element! {
                View(flex_direction: FlexDirection::Column) {
                    #(Some(section("GitHub")))
                    Text(content: github, color: theme.id_color)
                }
            }))

            #(Some(section("Timeline")))
            Text(content: format!("Created  {}", detail.created), color: theme.text)
            Text(content: format!("Updated  {}", detail.updated), color: theme.text)
        }
    }
}
