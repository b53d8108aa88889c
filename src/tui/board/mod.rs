//! Kanban board view
//!
//! Shows the selected project's issues in To Do, In Progress and Done
//! columns. Keys go through [`handlers::key_to_action`] and
//! [`model::reduce_board_state`]; the effects the reducer asks for are run
//! against the [`BoardController`] on an async handler, and every snapshot
//! the controller publishes is fed back in as an action.

pub mod handlers;
pub mod model;

use std::time::Duration;

use clipboard_rs::{Clipboard, ClipboardContext};
use iocraft::prelude::*;

use crate::auth::{AuthProvider, LocalAuthProvider};
use crate::board::{BoardController, SimulatedSync};
use crate::projects::ProjectSelector;
use crate::sample::sample_projects;
use crate::tui::components::{
    CreateFormModal, EmptyState, Footer, Header, IssueCard, IssueDetailPanel, LoadingSkeleton,
    Toast, ToastNotification,
};
use crate::tui::theme::theme;
use crate::types::User;

use handlers::key_to_action;
use model::{BoardAction, BoardEffect, BoardState, compute_board_view_model, reduce_board_state};

/// Rows a card takes including its border
const CARD_HEIGHT: u16 = 7;

/// Header, column titles and footer
const BOARD_CHROME: u16 = 5;

/// Props for the KanbanBoard component
#[derive(Default, Props)]
pub struct KanbanBoardProps {
    pub controller: Option<BoardController<SimulatedSync>>,
    pub auth: Option<LocalAuthProvider>,
    /// Signed-in user shown in the header
    pub user: Option<User>,
}

/// Run an action through the reducer and store the result
fn dispatch(
    state: &mut State<BoardState>,
    action: BoardAction,
    column_height: usize,
) -> Option<BoardEffect> {
    let current = state.read().clone();
    let (next, effect) = reduce_board_state(current, action, column_height);
    state.set(next);
    effect
}

fn copy_to_clipboard(text: &str) -> Toast {
    match ClipboardContext::new().and_then(|ctx| ctx.set_text(text.to_string())) {
        Ok(()) => Toast::success(format!("Copied {text}")),
        Err(e) => {
            tracing::warn!(error = %e, "clipboard unavailable");
            Toast::warning("Clipboard unavailable")
        }
    }
}

#[component]
pub fn KanbanBoard<'a>(props: &KanbanBoardProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let controller = props.controller.clone();
    let auth = props.auth.clone();

    let mut state: State<BoardState> = hooks.use_state({
        let snapshot = controller
            .as_ref()
            .map(|c| c.snapshot())
            .unwrap_or_default();
        move || BoardState::new(snapshot, ProjectSelector::new(sample_projects()))
    });
    let mut toast: State<Option<Toast>> = hooks.use_state(|| None);
    let mut should_exit = hooks.use_state(|| false);

    let cards_per_column =
        (height.saturating_sub(BOARD_CHROME) / CARD_HEIGHT).max(1) as usize;
    let mut column_height = hooks.use_state(|| cards_per_column);
    if column_height.get() != cards_per_column {
        column_height.set(cards_per_column);
    }

    // Make the controller agree with the initially selected project
    let mut project_synced = hooks.use_state(|| false);
    if !project_synced.get() {
        project_synced.set(true);
        if let Some(controller) = controller.as_ref() {
            let project = state.read().projects.selected_id().map(String::from);
            controller.set_project(project);
        }
    }

    // Feed controller snapshots back into the reducer
    hooks.use_future({
        let controller = controller.clone();
        async move {
            let Some(controller) = controller else {
                return;
            };
            let mut rx = controller.subscribe();
            while rx.changed().await.is_ok() {
                let snapshot = rx.borrow_and_update().clone();
                dispatch(
                    &mut state,
                    BoardAction::SnapshotChanged(snapshot),
                    column_height.get(),
                );
            }
        }
    });

    // Expire toasts
    hooks.use_future(async move {
        loop {
            tokio::time::sleep(Duration::from_millis(500)).await;
            let expired = toast.read().as_ref().is_some_and(|t| t.is_expired());
            if expired {
                toast.set(None);
            }
        }
    });

    let effect_handler: Handler<BoardEffect> = hooks.use_async_handler({
        let controller = controller.clone();
        let auth = auth.clone();

        move |effect: BoardEffect| {
            let controller = controller.clone();
            let auth = auth.clone();
            let mut toast = toast;
            let mut should_exit = should_exit;

            async move {
                match effect {
                    BoardEffect::MoveIssue { issue_id, status } => {
                        let Some(controller) = controller else { return };
                        let outcome = controller.move_issue(&issue_id, status).await;
                        if let Some(message) = Toast::for_move(&outcome, status) {
                            toast.set(Some(message));
                        }
                    }
                    BoardEffect::CreateIssue(draft) => {
                        let Some(controller) = controller else { return };
                        let result = controller.create_issue(draft).await;
                        toast.set(Some(Toast::for_create(&result)));
                    }
                    BoardEffect::SelectProject(project_id) => {
                        if let Some(controller) = controller {
                            controller.set_project(project_id);
                        }
                    }
                    BoardEffect::CopyToClipboard(text) => {
                        toast.set(Some(copy_to_clipboard(&text)));
                    }
                    BoardEffect::Refresh => {
                        let Some(controller) = controller else { return };
                        if let Err(e) = controller.refresh().await {
                            toast.set(Some(Toast::error(format!("Refresh failed: {e}"))));
                        }
                    }
                    BoardEffect::SignOut => {
                        if let Some(auth) = auth
                            && let Err(e) = auth.logout().await
                        {
                            toast.set(Some(Toast::error(format!("Sign out failed: {e}"))));
                        }
                    }
                    BoardEffect::Quit => should_exit.set(true),
                }
            }
        }
    });

    hooks.use_terminal_events({
        let effect_handler = effect_handler.clone();
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let mode = state.read().input_mode();
                if let Some(action) = key_to_action(code, modifiers, mode)
                    && let Some(effect) = dispatch(&mut state, action, column_height.get())
                {
                    effect_handler(effect);
                }
            }
            _ => {}
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let theme = theme();
    let view = compute_board_view_model(&state.read(), cards_per_column);
    let board_percent: u32 = if view.detail.is_some() { 60 } else { 100 };
    let card_width = width as u32 * board_percent / 100 / view.columns.len().max(1) as u32;

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
            position: Position::Relative,
        ) {
            Header(
                project: view.project_name.clone(),
                sync: view.sync.clone(),
                user_name: props.user.as_ref().map(|u| u.name().to_string()),
                user_email: props.user.as_ref().map(|u| u.email.clone()),
            )

            #(if let Some(kind) = view.empty_state {
                Some(element! {
                    View(flex_grow: 1.0, width: 100pct) {
                        EmptyState(kind)
                    }
                })
            } else {
                Some(element! {
                    View(
                        flex_grow: 1.0,
                        width: 100pct,
                        flex_direction: FlexDirection::Row,
                        overflow: Overflow::Hidden,
                    ) {
                        #(view.columns.iter().map(|column| {
                            let status_color = theme.status_color(column.status);
                            let border_color = if column.is_drop_target {
                                theme.drop_target
                            } else if column.is_active {
                                theme.border_focused
                            } else {
                                theme.border
                            };

                            element! {
                                View(
                                    flex_grow: 1.0,
                                    flex_shrink: 0.0,
                                    height: 100pct,
                                    flex_direction: FlexDirection::Column,
                                    padding_left: 1,
                                    padding_right: 1,
                                    border_edges: Edges::Right,
                                    border_style: BorderStyle::Single,
                                    border_color: theme.border,
                                    overflow: Overflow::Hidden,
                                ) {
                                    View(
                                        width: 100pct,
                                        flex_direction: FlexDirection::Row,
                                        justify_content: JustifyContent::SpaceBetween,
                                        border_edges: Edges::Bottom,
                                        border_style: BorderStyle::Single,
                                        border_color: border_color,
                                    ) {
                                        Text(
                                            content: column.title,
                                            color: if column.is_active { status_color } else { theme.text_dimmed },
                                            weight: if column.is_active { Weight::Bold } else { Weight::Normal },
                                        )
                                        Text(
                                            content: column.issue_count.to_string(),
                                            color: theme.text_dimmed,
                                        )
                                    }

                                    #(column.show_skeleton.then(|| element! { LoadingSkeleton }))

                                    #(column.empty_text.clone().map(|text| element! {
                                        View(margin_top: 1, justify_content: JustifyContent::Center) {
                                            Text(content: text, color: theme.text_dimmed)
                                        }
                                    }))

                                    #((column.hidden_above > 0).then(|| element! {
                                        Text(
                                            content: format!("  {} more above", column.hidden_above),
                                            color: theme.text_dimmed,
                                        )
                                    }))

                                    #(column.cards.iter().map(|card| element! {
                                        View(margin_top: 1) {
                                            IssueCard(
                                                issue: card.issue.clone(),
                                                is_selected: card.is_selected,
                                                is_dragging: card.is_dragging,
                                                width: Some(card_width),
                                            )
                                        }
                                    }))

                                    View(flex_grow: 1.0)

                                    #((column.hidden_below > 0).then(|| element! {
                                        Text(
                                            content: format!("  {} more below", column.hidden_below),
                                            color: theme.text_dimmed,
                                        )
                                    }))
                                }
                            }
                        }))

                        #(view.detail.clone().map(|detail| element! {
                            IssueDetailPanel(detail: Some(detail))
                        }))
                    }
                })
            })

            #({
                let current = toast.read().clone();
                current.map(|t| element! {
                    ToastNotification(toast: Some(t))
                })
            })

            Footer(shortcuts: view.shortcuts.clone(), hint: view.hint.clone())

            #(view.form.clone().map(|form| element! {
                CreateFormModal(form, project: view.project_name.clone())
            }))
        }
    }
}
