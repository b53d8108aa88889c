use clap::Parser;
use std::process::ExitCode;

use kanban_sync::cli::{Cli, Commands, ConfigAction};
use kanban_sync::commands::{cmd_board, cmd_config_path, cmd_config_show, cmd_ls, cmd_projects};
use kanban_sync::config::Config;
use kanban_sync::logging;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match Config::load() {
        Ok(config) => {
            if let Err(e) = logging::init(&config) {
                eprintln!("Warning: logging disabled: {e}");
            }
            run(cli.command.unwrap_or(Commands::Board), &config).await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands, config: &Config) -> kanban_sync::Result<()> {
    match command {
        Commands::Board => cmd_board(config).await,
        Commands::Ls {
            status,
            project,
            json,
        } => cmd_ls(status, project.as_deref(), json),
        Commands::Projects { json } => cmd_projects(json),
        Commands::Config { action } => match action {
            ConfigAction::Show => cmd_config_show(config),
            ConfigAction::Path => cmd_config_path(),
        },
    }
}
