//! Keyboard mapping for the kanban board
//!
//! Keys map to [`BoardAction`]s according to the active [`InputMode`]. The
//! mapping is a pure function so it can be tested without a terminal.

use iocraft::prelude::{KeyCode, KeyModifiers};

use super::model::{BoardAction, FormInput, InputMode};

/// Convert a key event to a BoardAction (pure function)
///
/// Returns `None` if the key doesn't map to any action in `mode`.
pub fn key_to_action(code: KeyCode, modifiers: KeyModifiers, mode: InputMode) -> Option<BoardAction> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('q') => Some(BoardAction::Quit),
            KeyCode::Char('s') if mode == InputMode::Form => {
                Some(BoardAction::Form(FormInput::Submit))
            }
            _ => None,
        };
    }

    match mode {
        InputMode::Form => form_key_to_action(code).map(BoardAction::Form),
        InputMode::Dragging => drag_key_to_action(code),
        InputMode::Detail => detail_key_to_action(code),
        InputMode::Board => board_key_to_action(code),
    }
}

fn board_key_to_action(code: KeyCode) -> Option<BoardAction> {
    match code {
        // Navigation
        KeyCode::Char('h') | KeyCode::Left => Some(BoardAction::MoveLeft),
        KeyCode::Char('l') | KeyCode::Right => Some(BoardAction::MoveRight),
        KeyCode::Char('j') | KeyCode::Down => Some(BoardAction::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(BoardAction::MoveUp),
        KeyCode::Char('g') | KeyCode::Home => Some(BoardAction::GoToTop),
        KeyCode::Char('G') | KeyCode::End => Some(BoardAction::GoToBottom),

        // Moving issues
        KeyCode::Char(' ') => Some(BoardAction::PickUp),
        KeyCode::Char('s') => Some(BoardAction::MoveIssueRight),
        KeyCode::Char('S') => Some(BoardAction::MoveIssueLeft),

        // Panels
        KeyCode::Enter => Some(BoardAction::ToggleDetail),
        KeyCode::Char('n') => Some(BoardAction::CreateNew),

        // Projects
        KeyCode::Char('p') => Some(BoardAction::NextProject),
        KeyCode::Char('P') => Some(BoardAction::PrevProject),

        // App
        KeyCode::Char('y') => Some(BoardAction::CopyIssueId),
        KeyCode::Char('r') => Some(BoardAction::Refresh),
        KeyCode::Char('o') => Some(BoardAction::SignOut),
        KeyCode::Char('q') => Some(BoardAction::Quit),

        _ => None,
    }
}

/// While a card is picked up only column moves, drop and cancel apply
fn drag_key_to_action(code: KeyCode) -> Option<BoardAction> {
    match code {
        KeyCode::Char('h') | KeyCode::Left => Some(BoardAction::MoveLeft),
        KeyCode::Char('l') | KeyCode::Right => Some(BoardAction::MoveRight),
        KeyCode::Char(' ') | KeyCode::Enter => Some(BoardAction::Drop),
        KeyCode::Esc => Some(BoardAction::CancelDrag),
        KeyCode::Char('q') => Some(BoardAction::Quit),
        _ => None,
    }
}

fn detail_key_to_action(code: KeyCode) -> Option<BoardAction> {
    match code {
        KeyCode::Esc | KeyCode::Enter => Some(BoardAction::CloseDetail),
        KeyCode::Char('j') | KeyCode::Down => Some(BoardAction::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(BoardAction::MoveUp),
        KeyCode::Char('y') => Some(BoardAction::CopyIssueId),
        KeyCode::Char('q') => Some(BoardAction::Quit),
        _ => None,
    }
}

fn form_key_to_action(code: KeyCode) -> Option<FormInput> {
    match code {
        KeyCode::Esc => Some(FormInput::Cancel),
        KeyCode::Enter => Some(FormInput::Submit),
        KeyCode::Tab | KeyCode::Down => Some(FormInput::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(FormInput::PrevField),
        KeyCode::Left => Some(FormInput::StatusPrev),
        KeyCode::Right => Some(FormInput::StatusNext),
        KeyCode::Backspace => Some(FormInput::Backspace),
        KeyCode::Char(c) => Some(FormInput::Char(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(c: char) -> Option<BoardAction> {
        key_to_action(KeyCode::Char(c), KeyModifiers::NONE, InputMode::Board)
    }

    #[test]
    fn test_board_keys() {
        assert_eq!(key('h'), Some(BoardAction::MoveLeft));
        assert_eq!(key('j'), Some(BoardAction::MoveDown));
        assert_eq!(key('G'), Some(BoardAction::GoToBottom));
        assert_eq!(key(' '), Some(BoardAction::PickUp));
        assert_eq!(key('n'), Some(BoardAction::CreateNew));
        assert_eq!(key('P'), Some(BoardAction::PrevProject));
        assert_eq!(key('o'), Some(BoardAction::SignOut));
        assert_eq!(key('x'), None);
    }

    #[test]
    fn test_ctrl_q_quits_everywhere() {
        for mode in [
            InputMode::Board,
            InputMode::Dragging,
            InputMode::Detail,
            InputMode::Form,
        ] {
            assert_eq!(
                key_to_action(KeyCode::Char('q'), KeyModifiers::CONTROL, mode),
                Some(BoardAction::Quit)
            );
        }
    }

    #[test]
    fn test_drag_mode_ignores_row_keys() {
        let drag = |code| key_to_action(code, KeyModifiers::NONE, InputMode::Dragging);
        assert_eq!(drag(KeyCode::Char('j')), None);
        assert_eq!(drag(KeyCode::Char(' ')), Some(BoardAction::Drop));
        assert_eq!(drag(KeyCode::Esc), Some(BoardAction::CancelDrag));
    }

    #[test]
    fn test_form_mode_types_letters() {
        let form = |code| key_to_action(code, KeyModifiers::NONE, InputMode::Form);
        assert_eq!(
            form(KeyCode::Char('q')),
            Some(BoardAction::Form(FormInput::Char('q')))
        );
        assert_eq!(form(KeyCode::Tab), Some(BoardAction::Form(FormInput::NextField)));
        assert_eq!(form(KeyCode::Esc), Some(BoardAction::Form(FormInput::Cancel)));
        assert_eq!(
            key_to_action(KeyCode::Char('s'), KeyModifiers::CONTROL, InputMode::Form),
            Some(BoardAction::Form(FormInput::Submit))
        );
    }
}
