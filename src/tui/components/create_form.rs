//! Create-issue dialog
//!
//! Purely presentational: the board reducer owns the [`CreateForm`] and
//! routes keys into it.

use iocraft::prelude::*;

use crate::form::{CreateForm, FormField};
use crate::tui::theme::theme;
use crate::types::IssueStatus;

/// Dims the board behind the dialog
const BACKDROP: Color = Color::Rgb {
    r: 30,
    g: 30,
    b: 30,
};

/// Props for the CreateFormModal component
#[derive(Default, Props)]
pub struct CreateFormModalProps {
    pub form: CreateForm,
    /// Project new issues are added to
    pub project: Option<String>,
}

/// Text shown inside a field box: the value with a cursor when focused,
/// otherwise the value or its placeholder.
pub fn field_display(form: &CreateForm, field: FormField) -> (String, bool) {
    let value = match field {
        FormField::Title => &form.title,
        FormField::Description => &form.description,
        FormField::Labels => &form.labels,
        FormField::Assignees => &form.assignees,
        FormField::Status => return (status_picker(form.status), false),
    };

    if form.focused == field {
        (format!("{value}_"), false)
    } else if value.is_empty() {
        (field.placeholder().to_string(), true)
    } else {
        (value.clone(), false)
    }
}

/// "< In Progress >" style picker text
fn status_picker(status: IssueStatus) -> String {
    format!("< {} >", status.label())
}

#[component]
pub fn CreateFormModal(props: &CreateFormModalProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let form = props.form.clone();

    let subtitle = match props.project.as_deref() {
        Some(project) => format!("Adds the issue to {project}"),
        None => "No project selected".to_string(),
    };

    element! {
        View(
            width: 100pct,
            height: 100pct,
            position: Position::Absolute,
            top: 0,
            left: 0,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            background_color: BACKDROP,
        ) {
            View(
                width: 70pct,
                flex_direction: FlexDirection::Column,
                border_style: BorderStyle::Round,
                border_color: theme.border_focused,
                background_color: theme.background,
            ) {
                View(
                    width: 100pct,
                    padding_left: 1,
                    flex_direction: FlexDirection::Column,
                    border_edges: Edges::Bottom,
                    border_style: BorderStyle::Single,
                    border_color: theme.border,
                ) {
                    Text(content: "Create New Issue", color: theme.text, weight: Weight::Bold)
                    Text(content: subtitle, color: theme.text_dimmed)
                }

                View(
                    width: 100pct,
                    padding: 1,
                    flex_direction: FlexDirection::Column,
                    gap: 1,
                ) {
                    #(FormField::ALL.into_iter().map(|field| {
                        let focused = form.focused == field;
                        let (content, is_placeholder) = field_display(&form, field);
                        let value_color = if field == FormField::Status {
                            theme.status_color(form.status)
                        } else if is_placeholder {
                            theme.text_dimmed
                        } else {
                            theme.text
                        };

                        element! {
                            View(flex_direction: FlexDirection::Column) {
                                Text(
                                    content: field.label(),
                                    color: if focused { theme.border_focused } else { theme.text_dimmed },
                                )
                                View(
                                    border_style: BorderStyle::Round,
                                    border_color: if focused { theme.border_focused } else { theme.border },
                                    padding_left: 1,
                                    padding_right: 1,
                                    width: 100pct,
                                ) {
                                    Text(content: content, color: value_color)
                                }
                            }
                        }
                    }))
                }

                View(width: 100pct, padding_left: 1, padding_bottom: 1) {
                    Text(
                        content: if form.can_submit() {
                            "Enter to create, Esc to cancel"
                        } else {
                            "A title is required"
                        },
                        color: if form.can_submit() { theme.text_dimmed } else { theme.status_todo },
                    )
                }
            }
        }
    }
}
