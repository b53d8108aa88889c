//! Bottom bar: the keys that work in the current mode, plus an optional
//! hint on the right.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// One key and what it does
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    pub key: String,
    pub action: String,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

#[derive(Default, Props)]
pub struct FooterProps {
    pub shortcuts: Vec<Shortcut>,
    /// Right-aligned status text, e.g. while a card is being moved
    pub hint: Option<String>,
}

#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_shrink: 0.0,
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.border,
        ) {
            View(flex_direction: FlexDirection::Row, flex_wrap: FlexWrap::Wrap, column_gap: 2) {
                #(props.shortcuts.iter().map(|shortcut| element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(content: shortcut.key.clone(), color: theme.highlight, weight: Weight::Bold)
                        Text(content: format!(" {}", shortcut.action), color: theme.text)
                    }
                }))
            }
            #(props.hint.clone().map(|hint| element! {
                Text(content: hint, color: theme.drop_target, weight: Weight::Bold)
            }))
        }
    }
}

const NAVIGATION: &[(&str, &str)] = &[
    ("h/l", "Column"),
    ("j/k", "Up/Down"),
    ("g/G", "Top/Bottom"),
];

const BOARD: &[(&str, &str)] = &[
    ("Space", "Pick Up"),
    ("s/S", "Move Right/Left"),
    ("Enter", "Details"),
    ("n", "New"),
    ("r", "Refresh"),
    ("p/P", "Project"),
    ("y", "Copy ID"),
    ("o", "Sign Out"),
    ("q", "Quit"),
];

const DRAG: &[(&str, &str)] = &[
    ("h/l", "Choose Column"),
    ("Space", "Drop"),
    ("Esc", "Cancel"),
];

const DETAIL: &[(&str, &str)] = &[
    ("j/k", "Next/Prev Issue"),
    ("y", "Copy ID"),
    ("Esc", "Close"),
    ("q", "Quit"),
];

const CREATE_FORM: &[(&str, &str)] = &[
    ("Tab", "Next Field"),
    ("S-Tab", "Prev Field"),
    ("h/l", "Status"),
    ("Enter", "Create"),
    ("Esc", "Cancel"),
];

const SIGN_IN: &[(&str, &str)] = &[("Enter", "Sign In"), ("q", "Quit")];

fn from_tables(tables: &[&[(&str, &str)]]) -> Vec<Shortcut> {
    tables
        .iter()
        .flat_map(|table| table.iter())
        .map(|(key, action)| Shortcut::new(*key, *action))
        .collect()
}

/// Shortcuts for the kanban board
pub fn board_shortcuts() -> Vec<Shortcut> {
    from_tables(&[NAVIGATION, BOARD])
}

/// Shortcuts while a card is picked up
pub fn drag_shortcuts() -> Vec<Shortcut> {
    from_tables(&[DRAG])
}

/// Shortcuts while the detail panel is open
pub fn detail_shortcuts() -> Vec<Shortcut> {
    from_tables(&[DETAIL])
}

pub fn create_shortcuts() -> Vec<Shortcut> {
    from_tables(&[CREATE_FORM])
}

pub fn sign_in_shortcuts() -> Vec<Shortcut> {
    from_tables(&[SIGN_IN])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_shortcuts_cover_keys() {
        let keys: Vec<String> = board_shortcuts().into_iter().map(|s| s.key).collect();
        for key in ["h/l", "j/k", "Space", "Enter", "n", "r", "p/P", "y", "o", "q"] {
            assert!(keys.iter().any(|k| k == key), "missing {key}");
        }
    }

    #[test]
    fn test_create_shortcuts() {
        let shortcuts = create_shortcuts();
        assert_eq!(shortcuts.first().map(|s| s.key.as_str()), Some("Tab"));
        assert!(shortcuts.iter().any(|s| s.action == "Cancel"));
    }

    #[test]
    fn test_board_shortcuts_start_with_navigation() {
        let keys: Vec<String> = board_shortcuts().into_iter().map(|s| s.key).collect();
        assert_eq!(&keys[..3], ["h/l", "j/k", "g/G"]);
        assert_eq!(keys.last().map(String::as_str), Some("q"));
    }

    #[test]
    fn test_drag_shortcuts_have_no_quit() {
        let shortcuts = drag_shortcuts();
        assert_eq!(shortcuts.len(), 3);
        assert!(shortcuts.iter().all(|s| s.key != "q"));
    }
}
