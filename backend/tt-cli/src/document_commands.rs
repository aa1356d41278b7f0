use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum DocumentCommands {
    /// List all documents
    List,
    /// List documents still waiting for a signature
    Pending,
    /// List signed documents
    Signed,
    /// Show one document
    Show {
        id: String,
    },
    /// Sign a pending document
    Sign {
        id: String,
    },
}
