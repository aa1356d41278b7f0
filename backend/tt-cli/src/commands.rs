use crate::document_commands::DocumentCommands;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and remember the session on this device
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show who is signed in
    Whoami,
    /// Search clients and properties on the server
    Search {
        query: String,
    },
    /// Filter the local client directory
    Clients {
        /// Matches client name or property address; omit to list everything
        query: Option<String>,
    },
    /// Filter the local meeting schedule
    Meetings {
        /// Matches subject or client name; omit to list everything
        query: Option<String>,
    },
    /// Documents awaiting or carrying a signature
    Documents {
        #[command(subcommand)]
        action: DocumentCommands,
    },
}
