use clap::Parser;
use std::process::ExitCode;

use snackq::cli::{Cli, Commands, ConfigAction, generate_completions};
use snackq::commands::{
    cmd_add, cmd_config_show, cmd_edit, cmd_login, cmd_logout, cmd_ls, cmd_queue, cmd_rm,
    cmd_watch, cmd_whoami,
};
use snackq::config::Config;
use snackq::logging::{LogTarget, init_logging};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Queue);

    // The TUI sets up its own file logging
    if !matches!(command, Commands::Queue) {
        let log = Config::load().map(|c| c.log).unwrap_or_default();
        if let Err(e) = init_logging(&log, LogTarget::Stderr) {
            eprintln!("{}", e);
        }
    }

    let result = match command {
        Commands::Queue => cmd_queue().await,
        Commands::Ls { json } => cmd_ls(json).await,
        Commands::Add {
            name,
            origin,
            issue,
            json,
        } => cmd_add(&name, &origin, &issue, json).await,
        Commands::Edit {
            id,
            name,
            origin,
            issue,
        } => cmd_edit(&id, name.as_deref(), origin.as_deref(), issue.as_deref()).await,
        Commands::Rm { id } => cmd_rm(&id).await,
        Commands::Watch => cmd_watch().await,
        Commands::Login { email } => cmd_login(&email),
        Commands::Logout => cmd_logout(),
        Commands::Whoami { json } => cmd_whoami(json),
        Commands::Config { action } => match action {
            ConfigAction::Show { json } => cmd_config_show(json),
        },
        Commands::Completions { shell } => {
            generate_completions(shell);
            Ok(())
        }
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
