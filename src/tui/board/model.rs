//! KanbanBoard model types for testable state management
//!
//! State ([`BoardState`]) is separate from the view ([`BoardViewModel`]) so
//! the board can be tested without the iocraft runtime. The reducer never
//! touches the controller; it returns a [`BoardEffect`] for the component to
//! run instead.

use crate::board::{BoardSnapshot, SyncState};
use crate::detail::{IssueDetail, detail_for};
use crate::dnd::DragCoordinator;
use crate::form::{CreateForm, FormField};
use crate::projects::ProjectSelector;
use crate::tui::components::empty_state::{EmptyStateKind, column_empty_text};
use crate::tui::components::footer::{
    Shortcut, board_shortcuts, create_shortcuts, detail_shortcuts, drag_shortcuts,
};
use crate::types::{Issue, IssueDraft, IssueStatus};

/// The columns in order
pub const COLUMNS: [IssueStatus; 3] = IssueStatus::ALL;

/// Which set of keys is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Board,
    /// A card is picked up
    Dragging,
    /// The detail panel is open
    Detail,
    /// The create form has focus
    Form,
}

/// Raw state that changes during user interaction
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    /// Latest snapshot published by the controller
    pub snapshot: BoardSnapshot,
    pub projects: ProjectSelector,
    /// Index of the selected column (0-2)
    pub current_column: usize,
    /// Index of the selected row within the column
    pub current_row: usize,
    /// Scroll offset for each column (index of first visible card)
    pub column_scroll_offsets: [usize; 3],
    pub drag: DragCoordinator,
    pub detail_open: bool,
    /// Open create form, if any
    pub form: Option<CreateForm>,
    /// Issue the cursor should land on once it shows up in a snapshot
    pub follow: Option<String>,
}

impl BoardState {
    pub fn new(snapshot: BoardSnapshot, projects: ProjectSelector) -> Self {
        let mut snapshot = snapshot;
        snapshot.project_id = projects.selected_id().map(String::from);
        Self {
            snapshot,
            projects,
            ..Default::default()
        }
    }

    pub fn input_mode(&self) -> InputMode {
        if self.form.is_some() {
            InputMode::Form
        } else if self.drag.is_dragging() {
            InputMode::Dragging
        } else if self.detail_open {
            InputMode::Detail
        } else {
            InputMode::Board
        }
    }

    /// Issues shown in a column, in board order
    pub fn column_issues(&self, col: usize) -> Vec<&Issue> {
        COLUMNS
            .get(col)
            .map(|status| self.snapshot.column(*status))
            .unwrap_or_default()
    }

    /// Issue under the cursor
    pub fn selected_issue(&self) -> Option<&Issue> {
        self.column_issues(self.current_column)
            .get(self.current_row)
            .copied()
    }
}

/// Keys routed to the create form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormInput {
    Char(char),
    Backspace,
    NextField,
    PrevField,
    StatusNext,
    StatusPrev,
    Submit,
    Cancel,
}

/// All possible actions on the board
#[derive(Debug, Clone, PartialEq)]
pub enum BoardAction {
    // Navigation
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    GoToTop,
    GoToBottom,

    // Drag and drop
    /// Pick up the selected card
    PickUp,
    /// Drop the picked up card on the current column
    Drop,
    CancelDrag,

    /// Move the selected issue one column right
    MoveIssueRight,
    /// Move the selected issue one column left
    MoveIssueLeft,

    // Detail panel
    ToggleDetail,
    CloseDetail,

    // Create form
    CreateNew,
    Form(FormInput),

    // Projects
    NextProject,
    PrevProject,

    CopyIssueId,
    Refresh,
    SignOut,
    Quit,

    /// The controller published a new snapshot
    SnapshotChanged(BoardSnapshot),
}

/// Side effects requested by the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEffect {
    MoveIssue { issue_id: String, status: IssueStatus },
    CreateIssue(IssueDraft),
    SelectProject(Option<String>),
    CopyToClipboard(String),
    Refresh,
    SignOut,
    Quit,
}

/// Computed view model for rendering
#[derive(Debug, Clone)]
pub struct BoardViewModel {
    pub columns: Vec<ColumnViewModel>,
    pub selected_issue: Option<Issue>,
    /// Detail panel content when the panel is open
    pub detail: Option<IssueDetail>,
    pub project_name: Option<String>,
    pub sync: SyncState,
    pub empty_state: Option<EmptyStateKind>,
    pub shortcuts: Vec<Shortcut>,
    /// Footer status while a card is picked up
    pub hint: Option<String>,
    pub form: Option<CreateForm>,
    pub mode: InputMode,
}

/// View model for a single column
#[derive(Debug, Clone)]
pub struct ColumnViewModel {
    pub status: IssueStatus,
    pub title: &'static str,
    pub is_active: bool,
    /// A picked up card is hovering over this column
    pub is_drop_target: bool,
    pub issue_count: usize,
    /// Cards inside the scroll window
    pub cards: Vec<CardViewModel>,
    /// Set when the column has no issues
    pub empty_text: Option<String>,
    /// Draw placeholder cards instead of issues
    pub show_skeleton: bool,
    pub hidden_above: usize,
    pub hidden_below: usize,
}

/// View model for a single issue card
#[derive(Debug, Clone)]
pub struct CardViewModel {
    pub issue: Issue,
    pub is_selected: bool,
    pub is_dragging: bool,
}

// ============================================================================
// Pure Functions
// ============================================================================

/// Pure function: compute view model from state.
///
/// `column_height` is the number of cards that fit in a column.
pub fn compute_board_view_model(state: &BoardState, column_height: usize) -> BoardViewModel {
    let mode = state.input_mode();
    let dragging = state.drag.dragging();
    let loading = state.snapshot.loading;

    let columns = COLUMNS
        .iter()
        .enumerate()
        .map(|(col, status)| {
            let issues = state.column_issues(col);
            let total = issues.len();
            let is_active = col == state.current_column;
            // Placeholders replace the cards while loading
            let (start, end) = if loading {
                (0, 0)
            } else {
                let start = state.column_scroll_offsets[col].min(total);
                (start, (start + column_height).min(total))
            };

            let cards = issues[start..end]
                .iter()
                .enumerate()
                .map(|(offset, issue)| CardViewModel {
                    is_selected: is_active && start + offset == state.current_row,
                    is_dragging: dragging == Some(issue.id.as_str()),
                    issue: (*issue).clone(),
                })
                .collect();

            ColumnViewModel {
                status: *status,
                title: status.label(),
                is_active,
                is_drop_target: state.drag.is_over(status),
                issue_count: total,
                cards,
                empty_text: (total == 0 && !loading).then(|| column_empty_text(*status)),
                show_skeleton: loading,
                hidden_above: start,
                hidden_below: if loading { 0 } else { total - end },
            }
        })
        .collect();

    let selected_issue = state.selected_issue().cloned();
    let detail = if state.detail_open {
        detail_for(selected_issue.as_ref())
    } else {
        None
    };

    let empty_state = state
        .projects
        .selected()
        .is_none()
        .then_some(EmptyStateKind::NoProject);

    let shortcuts = match mode {
        InputMode::Board => board_shortcuts(),
        InputMode::Dragging => drag_shortcuts(),
        InputMode::Detail => detail_shortcuts(),
        InputMode::Form => create_shortcuts(),
    };

    let hint = dragging.map(|id| match state.drag.over() {
        Some(status) => format!("Moving {id} to {}", status.label()),
        None => format!("Moving {id}"),
    });

    BoardViewModel {
        columns,
        selected_issue,
        detail,
        project_name: state.projects.selected().map(|p| p.name.clone()),
        sync: state.snapshot.sync.clone(),
        empty_state,
        shortcuts,
        hint,
        form: state.form.clone(),
        mode,
    }
}

/// Adjust scroll offset to keep the selected row vertically centered.
///
/// Clamps to `0..=total_items - column_height` near the ends.
fn adjust_column_scroll(selected_row: usize, column_height: usize, total_items: usize) -> usize {
    if column_height == 0 || total_items == 0 {
        return 0;
    }

    let ideal_offset = selected_row.saturating_sub(column_height / 2);
    let max_offset = total_items.saturating_sub(column_height);
    ideal_offset.min(max_offset)
}

fn column_len(state: &BoardState, col: usize) -> usize {
    state.column_issues(col).len()
}

/// Clamp the row to the current column and re-center its scroll window
fn settle_cursor(state: &mut BoardState, column_height: usize) {
    let col = state.current_column;
    let total = column_len(state, col);
    state.current_row = state.current_row.min(total.saturating_sub(1));
    state.column_scroll_offsets[col] =
        adjust_column_scroll(state.current_row, column_height, total);
}

/// Put the cursor on `id` if it is visible. Returns whether it was found.
fn focus_issue(state: &mut BoardState, id: &str, column_height: usize) -> bool {
    let found = (0..COLUMNS.len()).find_map(|col| {
        state
            .column_issues(col)
            .iter()
            .position(|issue| issue.id == id)
            .map(|row| (col, row))
    });

    match found {
        Some((col, row)) => {
            state.current_column = col;
            state.current_row = row;
            settle_cursor(state, column_height);
            true
        }
        None => false,
    }
}

/// Column index for a move one step left or right, if there is one
fn neighbour_column(col: usize, right: bool) -> Option<usize> {
    if right {
        (col + 1 < COLUMNS.len()).then_some(col + 1)
    } else {
        col.checked_sub(1)
    }
}

fn select_project(state: &mut BoardState) -> Option<BoardEffect> {
    let project_id = state.projects.selected_id().map(String::from);
    state.snapshot.project_id = project_id.clone();
    state.current_column = 0;
    state.current_row = 0;
    state.column_scroll_offsets = [0; 3];
    state.drag.cancel();
    state.detail_open = false;
    state.follow = None;
    Some(BoardEffect::SelectProject(project_id))
}

fn reduce_form(state: &mut BoardState, input: FormInput) -> Option<BoardEffect> {
    let form = state.form.as_mut()?;

    match input {
        FormInput::Char(c) => {
            if form.focused == FormField::Status {
                match c {
                    'h' => form.status = form.status.prev(),
                    'l' | ' ' => form.status = form.status.next(),
                    _ => {}
                }
            } else if let Some(text) = form.focused_text_mut() {
                text.push(c);
            }
        }
        FormInput::Backspace => {
            if let Some(text) = form.focused_text_mut() {
                text.pop();
            }
        }
        FormInput::NextField => form.focused = form.focused.next(),
        FormInput::PrevField => form.focused = form.focused.prev(),
        FormInput::StatusNext if form.focused == FormField::Status => {
            form.status = form.status.next();
        }
        FormInput::StatusPrev if form.focused == FormField::Status => {
            form.status = form.status.prev();
        }
        FormInput::StatusNext | FormInput::StatusPrev => {}
        FormInput::Submit => {
            let draft = form.submit()?;
            state.form = None;
            return Some(BoardEffect::CreateIssue(draft));
        }
        FormInput::Cancel => state.form = None,
    }

    None
}

/// Pure function: apply an action to the state (reducer pattern).
///
/// Returns the new state and the side effect the component should run, if
/// any. `column_height` is the number of cards that fit in a column.
pub fn reduce_board_state(
    mut state: BoardState,
    action: BoardAction,
    column_height: usize,
) -> (BoardState, Option<BoardEffect>) {
    let effect = match action {
        BoardAction::MoveLeft | BoardAction::MoveRight => {
            let right = action == BoardAction::MoveRight;
            if let Some(col) = neighbour_column(state.current_column, right) {
                state.current_column = col;
                if let Some(status) = COLUMNS.get(col) {
                    state.drag.hover(status);
                }
                settle_cursor(&mut state, column_height);
            }
            None
        }
        BoardAction::MoveUp => {
            state.current_row = state.current_row.saturating_sub(1);
            settle_cursor(&mut state, column_height);
            None
        }
        BoardAction::MoveDown => {
            state.current_row += 1;
            settle_cursor(&mut state, column_height);
            None
        }
        BoardAction::GoToTop => {
            state.current_row = 0;
            settle_cursor(&mut state, column_height);
            None
        }
        BoardAction::GoToBottom => {
            state.current_row = usize::MAX;
            settle_cursor(&mut state, column_height);
            None
        }

        BoardAction::PickUp => {
            if let Some(issue) = state.selected_issue().cloned() {
                state.drag.begin(&issue);
                state.drag.hover(&issue.status);
                state.detail_open = false;
            }
            None
        }
        BoardAction::Drop => {
            let dropped = state.drag.release();
            dropped.and_then(|result| {
                let unchanged = state
                    .snapshot
                    .get(&result.issue_id)
                    .is_none_or(|issue| issue.status == result.status);
                if !focus_issue(&mut state, &result.issue_id, column_height) || !unchanged {
                    state.follow = Some(result.issue_id.clone());
                }
                (!unchanged).then_some(BoardEffect::MoveIssue {
                    issue_id: result.issue_id,
                    status: result.status,
                })
            })
        }
        BoardAction::CancelDrag => {
            if let Some(id) = state.drag.dragging().map(String::from) {
                state.drag.cancel();
                focus_issue(&mut state, &id, column_height);
            }
            None
        }

        BoardAction::MoveIssueRight | BoardAction::MoveIssueLeft => {
            let right = action == BoardAction::MoveIssueRight;
            state.selected_issue().cloned().and_then(|issue| {
                let col = neighbour_column(issue.status.index(), right)?;
                let status = IssueStatus::from_index(col)?;
                state.follow = Some(issue.id.clone());
                Some(BoardEffect::MoveIssue {
                    issue_id: issue.id,
                    status,
                })
            })
        }

        BoardAction::ToggleDetail => {
            state.detail_open = !state.detail_open && state.selected_issue().is_some();
            None
        }
        BoardAction::CloseDetail => {
            state.detail_open = false;
            None
        }

        BoardAction::CreateNew => {
            state.drag.cancel();
            state.form = Some(CreateForm::new());
            None
        }
        BoardAction::Form(input) => reduce_form(&mut state, input),

        BoardAction::NextProject => {
            state.projects.cycle_next();
            select_project(&mut state)
        }
        BoardAction::PrevProject => {
            state.projects.cycle_prev();
            select_project(&mut state)
        }

        BoardAction::CopyIssueId => state
            .selected_issue()
            .map(|issue| BoardEffect::CopyToClipboard(issue.id.clone())),
        BoardAction::Refresh => Some(BoardEffect::Refresh),
        BoardAction::SignOut => Some(BoardEffect::SignOut),
        BoardAction::Quit => Some(BoardEffect::Quit),

        BoardAction::SnapshotChanged(snapshot) => {
            let selected = state.selected_issue().map(|issue| issue.id.clone());
            state.snapshot = snapshot;
            state.snapshot.project_id = state.projects.selected_id().map(String::from);

            if let Some(id) = state.drag.dragging().map(String::from)
                && state.snapshot.get(&id).is_none()
            {
                state.drag.cancel();
            }

            // Land on a followed issue once it has moved, otherwise stay on
            // the issue that was selected before.
            let followed = state
                .follow
                .clone()
                .is_some_and(|id| focus_issue(&mut state, &id, column_height));
            if followed {
                state.follow = None;
            } else if !selected.is_some_and(|id| focus_issue(&mut state, &id, column_height)) {
                settle_cursor(&mut state, column_height);
            }
            None
        }
    };

    (state, effect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{sample_issues, sample_projects};

    fn board() -> BoardState {
        BoardState::new(
            BoardSnapshot {
                issues: sample_issues(),
                ..Default::default()
            },
            ProjectSelector::new(sample_projects()),
        )
    }

    fn apply(state: BoardState, actions: &[BoardAction]) -> BoardState {
        actions
            .iter()
            .cloned()
            .fold(state, |s, a| reduce_board_state(s, a, 5).0)
    }

    #[test]
    fn test_adjust_column_scroll_centers() {
        assert_eq!(adjust_column_scroll(0, 4, 10), 0);
        assert_eq!(adjust_column_scroll(5, 4, 10), 3);
        assert_eq!(adjust_column_scroll(9, 4, 10), 6);
        assert_eq!(adjust_column_scroll(3, 0, 10), 0);
        assert_eq!(adjust_column_scroll(0, 4, 0), 0);
    }

    #[test]
    fn test_navigation_clamps() {
        let state = apply(board(), &[BoardAction::MoveLeft, BoardAction::MoveDown]);
        assert_eq!(state.current_column, 0);
        assert_eq!(state.current_row, 0);

        let state = apply(
            state,
            &[BoardAction::MoveRight, BoardAction::GoToBottom],
        );
        assert_eq!(state.current_column, 1);
        assert_eq!(state.current_row, 1);
        assert_eq!(state.selected_issue().unwrap().id, "issue_3");

        let state = apply(state, &[BoardAction::MoveRight, BoardAction::MoveRight]);
        assert_eq!(state.current_column, 2);
    }

    #[test]
    fn test_pick_up_and_drop_emits_move() {
        let state = apply(board(), &[BoardAction::PickUp]);
        assert_eq!(state.input_mode(), InputMode::Dragging);
        assert!(state.drag.is_over(&IssueStatus::Todo));

        let state = apply(state, &[BoardAction::MoveRight, BoardAction::MoveRight]);
        assert!(state.drag.is_over(&IssueStatus::Done));

        let (state, effect) = reduce_board_state(state, BoardAction::Drop, 5);
        assert_eq!(
            effect,
            Some(BoardEffect::MoveIssue {
                issue_id: "issue_1".to_string(),
                status: IssueStatus::Done,
            })
        );
        assert!(!state.drag.is_dragging());
        assert_eq!(state.follow.as_deref(), Some("issue_1"));
    }

    #[test]
    fn test_drag_hint_names_target_column() {
        assert!(compute_board_view_model(&board(), 5).hint.is_none());

        let state = apply(board(), &[BoardAction::PickUp, BoardAction::MoveRight]);
        let vm = compute_board_view_model(&state, 5);
        assert_eq!(vm.hint.as_deref(), Some("Moving issue_1 to In Progress"));
        assert_eq!(vm.mode, InputMode::Dragging);
    }

    #[test]
    fn test_drop_on_own_column_is_noop() {
        let state = apply(board(), &[BoardAction::PickUp]);
        let (state, effect) = reduce_board_state(state, BoardAction::Drop, 5);
        assert!(effect.is_none());
        assert!(state.follow.is_none());
    }

    #[test]
    fn test_cancel_drag_returns_to_card() {
        let state = apply(
            board(),
            &[
                BoardAction::PickUp,
                BoardAction::MoveRight,
                BoardAction::CancelDrag,
            ],
        );
        assert!(!state.drag.is_dragging());
        assert_eq!(state.current_column, 0);
        assert_eq!(state.selected_issue().unwrap().id, "issue_1");
    }

    #[test]
    fn test_snapshot_follows_moved_issue() {
        let state = apply(board(), &[BoardAction::MoveIssueRight]);
        assert_eq!(state.follow.as_deref(), Some("issue_1"));

        let mut snapshot = state.snapshot.clone();
        snapshot.issues[0].status = IssueStatus::InProgress;
        let state = apply(state, &[BoardAction::SnapshotChanged(snapshot)]);
        assert_eq!(state.current_column, 1);
        assert_eq!(state.selected_issue().unwrap().id, "issue_1");
        assert!(state.follow.is_none());
    }

    #[test]
    fn test_move_issue_left_at_first_column_is_noop() {
        let (_, effect) = reduce_board_state(board(), BoardAction::MoveIssueLeft, 5);
        assert!(effect.is_none());
    }

    #[test]
    fn test_project_switch_scopes_columns() {
        let (state, effect) = reduce_board_state(board(), BoardAction::NextProject, 5);
        assert_eq!(
            effect,
            Some(BoardEffect::SelectProject(Some("project_2".to_string())))
        );
        assert!(state.column_issues(0).is_empty());
        assert!(state.selected_issue().is_none());

        let vm = compute_board_view_model(&state, 5);
        assert_eq!(vm.project_name.as_deref(), Some("API Backend"));
        assert_eq!(
            vm.columns[0].empty_text.as_deref(),
            Some("No issues in to do")
        );
    }

    #[test]
    fn test_create_form_flow() {
        let state = apply(board(), &[BoardAction::CreateNew]);
        assert_eq!(state.input_mode(), InputMode::Form);

        // Blank title keeps the form open
        let (state, effect) =
            reduce_board_state(state, BoardAction::Form(FormInput::Submit), 5);
        assert!(effect.is_none());
        assert!(state.form.is_some());

        let mut actions: Vec<BoardAction> = "Hi"
            .chars()
            .map(|c| BoardAction::Form(FormInput::Char(c)))
            .collect();
        actions.push(BoardAction::Form(FormInput::NextField));
        actions.push(BoardAction::Form(FormInput::NextField));
        actions.push(BoardAction::Form(FormInput::Char('l')));
        let state = apply(state, &actions);
        assert_eq!(
            state.form.as_ref().unwrap().status,
            IssueStatus::InProgress
        );

        let (state, effect) =
            reduce_board_state(state, BoardAction::Form(FormInput::Submit), 5);
        let Some(BoardEffect::CreateIssue(draft)) = effect else {
            panic!("expected a create effect");
        };
        assert_eq!(draft.title, "Hi");
        assert_eq!(draft.status, IssueStatus::InProgress);
        assert!(state.form.is_none());
    }

    #[test]
    fn test_detail_toggle_needs_selection() {
        let state = apply(board(), &[BoardAction::ToggleDetail]);
        assert!(state.detail_open);
        let vm = compute_board_view_model(&state, 5);
        assert_eq!(vm.detail.unwrap().title, "Implement user authentication");

        let state = apply(state, &[BoardAction::CloseDetail, BoardAction::NextProject]);
        let state = apply(state, &[BoardAction::ToggleDetail]);
        assert!(!state.detail_open);
    }

    #[test]
    fn test_copy_and_app_effects() {
        let (_, effect) = reduce_board_state(board(), BoardAction::CopyIssueId, 5);
        assert_eq!(effect, Some(BoardEffect::CopyToClipboard("issue_1".to_string())));
        let (_, effect) = reduce_board_state(board(), BoardAction::Quit, 5);
        assert_eq!(effect, Some(BoardEffect::Quit));
    }

    #[test]
    fn test_view_model_scroll_window() {
        let mut state = board();
        state.current_column = 1;
        state.current_row = 1;
        let vm = compute_board_view_model(&state, 1);
        let column = &vm.columns[1];
        assert_eq!(column.issue_count, 2);
        assert_eq!(column.cards.len(), 1);
        assert_eq!(column.hidden_above, 0);
        assert_eq!(column.hidden_below, 1);

        let state = apply(state, &[BoardAction::GoToBottom]);
        let (state, _) = reduce_board_state(state, BoardAction::GoToBottom, 1);
        let vm = compute_board_view_model(&state, 1);
        assert_eq!(vm.columns[1].hidden_above, 1);
        assert!(vm.columns[1].cards[0].is_selected);
    }

    #[test]
    fn test_loading_shows_skeleton() {
        let mut state = board();
        state.snapshot.loading = true;
        let vm = compute_board_view_model(&state, 5);
        assert!(vm.columns.iter().all(|c| c.show_skeleton && c.empty_text.is_none()));
        assert!(vm.columns.iter().all(|c| c.cards.is_empty() && c.hidden_below == 0));
        assert_eq!(vm.columns[1].issue_count, 2);
    }
}
