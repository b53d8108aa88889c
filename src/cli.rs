use clap::{Parser, Subcommand};

use crate::types::{IssueStatus, VALID_STATUSES};

#[derive(Parser, Debug)]
#[command(name = "kanban-sync")]
#[command(about = "Terminal kanban board with simulated GitHub Projects sync")]
#[command(version)]
pub struct Cli {
    /// Defaults to `board`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive board
    #[command(visible_alias = "b")]
    Board,

    /// List the sample issues
    Ls {
        /// Only issues with this status (todo, in_progress, done)
        #[arg(long, value_parser = parse_status)]
        status: Option<IssueStatus>,

        /// Only issues in this project (id, e.g. project_1)
        #[arg(long)]
        project: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the sample projects
    Projects {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
}

fn parse_status(s: &str) -> Result<IssueStatus, String> {
    s.parse().map_err(|_| {
        format!(
            "Invalid status. Must be one of: {}",
            VALID_STATUSES.join(", ")
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_board() {
        let cli = Cli::try_parse_from(["kanban-sync"]).unwrap();
        assert!(cli.command.is_none());
        let cli = Cli::try_parse_from(["kanban-sync", "board"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Board));
    }

    #[test]
    fn test_ls_flags() {
        let cli =
            Cli::try_parse_from(["kanban-sync", "ls", "--status", "in_progress", "--json"])
                .unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Ls {
                status: Some(IssueStatus::InProgress),
                project: None,
                json: true,
            })
        );
    }

    #[test]
    fn test_ls_rejects_unknown_status() {
        assert!(Cli::try_parse_from(["kanban-sync", "ls", "--status", "blocked"]).is_err());
    }

    #[test]
    fn test_config_subcommands() {
        let cli = Cli::try_parse_from(["kanban-sync", "config", "path"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Path
            })
        );
    }
}
