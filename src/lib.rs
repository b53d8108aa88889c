pub mod auth;
pub mod board;
pub mod cli;
pub mod commands;
pub mod config;
pub mod detail;
pub mod dnd;
pub mod error;
pub mod form;
pub mod logging;
pub mod projects;
pub mod sample;
pub mod store;
pub mod tui;
pub mod types;

pub use board::{BoardController, BoardSnapshot, CreateOutcome, MoveOutcome, SimulatedSync};
pub use config::Config;
pub use error::{KanbanError, Result};
pub use types::{Issue, IssueDraft, IssueStatus, Project, User};
