use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;

#[derive(Parser)]
#[command(name = "snackq")]
#[command(about = "Snack request ticket queue")]
#[command(version)]
pub struct Cli {
    /// Defaults to `queue` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive queue
    #[command(visible_alias = "q")]
    Queue,

    /// List open tickets, oldest first
    Ls {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a snack request
    Add {
        /// Snack name
        name: String,

        /// Where the request came from (e.g. a room or desk)
        #[arg(short, long, default_value = "")]
        origin: String,

        /// Free-text description of the issue
        #[arg(short, long, default_value = "")]
        issue: String,

        /// Output the new ticket id as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change fields of an existing ticket
    Edit {
        /// Ticket ID
        id: String,

        /// New snack name
        #[arg(short, long)]
        name: Option<String>,

        /// New origin
        #[arg(short, long)]
        origin: Option<String>,

        /// New issue text
        #[arg(short, long)]
        issue: Option<String>,
    },

    /// Delete a ticket
    #[command(visible_alias = "delete")]
    Rm {
        /// Ticket ID
        id: String,
    },

    /// Print the queue every time it changes (Ctrl-C to stop)
    Watch,

    /// Sign in as an operator
    Login {
        /// Operator email address
        email: String,
    },

    /// Sign out
    Logout,

    /// Show the signed-in operator
    Whoami {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "snackq", &mut io::stdout());
}
