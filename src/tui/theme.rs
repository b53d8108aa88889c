//! Theme system for TUI colors and styles
//!
//! Status colors match the CLI output of `kanban-sync ls`.

use iocraft::prelude::Color;

use crate::types::IssueStatus;

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Status colors
    pub status_todo: Color,
    pub status_in_progress: Color,
    pub status_done: Color,

    // Sync indicator
    pub sync_ok: Color,
    pub sync_busy: Color,
    pub sync_error: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub drop_target: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub highlight_text: Color,
    pub label: Color,
    pub id_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        let grey = Color::Rgb {
            r: 120,
            g: 120,
            b: 120,
        };

        Self {
            status_todo: Color::Yellow,
            status_in_progress: Color::Cyan,
            status_done: Color::Green,

            sync_ok: Color::Green,
            sync_busy: Color::Blue,
            sync_error: Color::Red,

            border: grey,
            border_focused: Color::Blue,
            drop_target: Color::Magenta,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: grey,
            highlight: Color::Blue,
            highlight_text: Color::White,
            label: Color::Magenta,
            id_color: Color::Cyan,
        }
    }
}

impl Theme {
    /// Get the color for an issue status
    pub fn status_color(&self, status: IssueStatus) -> Color {
        match status {
            IssueStatus::Todo => self.status_todo,
            IssueStatus::InProgress => self.status_in_progress,
            IssueStatus::Done => self.status_done,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
