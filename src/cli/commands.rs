use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "jotter")]
#[command(version, about = "A small client-notes tool")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new note
    Add {
        /// Note title (may be omitted for an untitled note)
        title: Option<String>,

        /// Note message
        #[arg(long, short = 'm')]
        message: Option<String>,

        /// Category to tag the note with (by name)
        #[arg(long, short = 'c')]
        category: Option<String>,

        /// Client to tag the note with (by full name)
        #[arg(long)]
        client: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all notes
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single note
    Show {
        /// Note id (full value or a decimal prefix)
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit a note; omitted fields keep their current values
    Edit {
        /// Note id (full value or a decimal prefix)
        id: String,

        /// New title
        title: Option<String>,

        /// New message
        #[arg(long, short = 'm')]
        message: Option<String>,

        /// New category (by name)
        #[arg(long, short = 'c')]
        category: Option<String>,

        /// New client (by full name)
        #[arg(long)]
        client: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a note
    Delete {
        /// Note id (full value or a decimal prefix)
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// List the available categories
    Categories {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the available clients
    Clients {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
