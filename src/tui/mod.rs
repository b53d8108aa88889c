//! Terminal UI
//!
//! [`App`] follows the identity provider: a loading screen while the session
//! is being restored, the sign-in screen when nobody is signed in, and the
//! [`KanbanBoard`] otherwise.

pub mod board;
pub mod components;
pub mod text;
pub mod theme;

use iocraft::prelude::*;

use crate::auth::{AuthProvider, AuthState, LocalAuthProvider, Screen};
use crate::board::{BoardController, SimulatedSync};
use components::{EmptyState, EmptyStateKind, Footer, SignIn, sign_in_shortcuts};
use theme::theme;

pub use board::{KanbanBoard, KanbanBoardProps};
pub use theme::Theme;

/// Props for the App component
#[derive(Default, Props)]
pub struct AppProps {
    pub controller: Option<BoardController<SimulatedSync>>,
    pub auth: Option<LocalAuthProvider>,
}

#[component]
pub fn App<'a>(props: &AppProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let auth = props.auth.clone();
    let mut auth_state: State<AuthState> = hooks.use_state({
        let initial = auth.as_ref().map(|a| a.state()).unwrap_or_else(AuthState::loading);
        move || initial
    });
    let mut sign_in_error: State<Option<String>> = hooks.use_state(|| None);
    let mut should_exit = hooks.use_state(|| false);

    // Restore the session, then track every auth change
    hooks.use_future({
        let auth = auth.clone();
        async move {
            let Some(auth) = auth else {
                return;
            };
            let mut rx = auth.subscribe();
            auth.restore().await;
            loop {
                let current = rx.borrow_and_update().clone();
                auth_state.set(current);
                if rx.changed().await.is_err() {
                    break;
                }
            }
        }
    });

    let login_handler: Handler<()> = hooks.use_async_handler({
        let auth = auth.clone();
        move |()| {
            let auth = auth.clone();
            let mut sign_in_error = sign_in_error;
            async move {
                let Some(auth) = auth else { return };
                sign_in_error.set(None);
                if let Err(e) = auth.login().await {
                    tracing::error!(error = %e, "sign in failed");
                    sign_in_error.set(Some(e.to_string()));
                }
            }
        }
    });

    let screen = Screen::from(&*auth_state.read());

    hooks.use_terminal_events({
        let login_handler = login_handler.clone();
        move |event| {
            // The board handles its own keys
            if screen == Screen::Board {
                return;
            }
            match event {
                TerminalEvent::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                }) if kind != KeyEventKind::Release => match code {
                    KeyCode::Char('q') => should_exit.set(true),
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        should_exit.set(true)
                    }
                    KeyCode::Enter if screen == Screen::SignIn => login_handler(()),
                    _ => {}
                },
                _ => {}
            }
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let theme = theme();
    let user = auth_state.read().user.clone();

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            #(Some(match screen {
                Screen::Board => element! {
                    View(width: 100pct, height: 100pct) {
                        KanbanBoard(
                            controller: props.controller.clone(),
                            auth: auth.clone(),
                            user: user.clone(),
                        )
                    }
                },
                Screen::Loading => element! {
                    View(width: 100pct, height: 100pct) {
                        EmptyState(kind: EmptyStateKind::Connecting)
                    }
                },
                Screen::SignIn => element! {
                    View(width: 100pct, height: 100pct, flex_direction: FlexDirection::Column) {
                        View(flex_grow: 1.0, width: 100pct) {
                            SignIn(error: sign_in_error.read().clone())
                        }
                        Footer(shortcuts: sign_in_shortcuts())
                    }
                },
            }))
        }
    }
}
