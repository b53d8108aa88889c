//! Kanban board command (`kanban-sync board`)

use iocraft::prelude::*;

use crate::auth::LocalAuthProvider;
use crate::board::{BoardController, SimulatedSync};
use crate::config::Config;
use crate::error::{KanbanError, Result};
use crate::sample::{DEFAULT_PROJECT_ID, sample_issues};
use crate::store::IssueStore;
use crate::tui::App;

/// Launch the kanban board TUI
pub async fn cmd_board(config: &Config) -> Result<()> {
    let backend = SimulatedSync::from_config(&config.sync);
    tracing::info!(policy = %backend.policy(), "starting board");

    let controller = BoardController::new(IssueStore::with_issues(sample_issues()), backend)
        .with_project(DEFAULT_PROJECT_ID);
    let auth = LocalAuthProvider::new(config.auth.clone());

    element!(App(controller: Some(controller), auth: Some(auth)))
        .fullscreen()
        .await
        .map_err(|e| KanbanError::Other(format!("TUI error: {e}")))
}
