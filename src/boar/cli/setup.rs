use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "boar", bin_name = "boar", version)]
#[command(about = "BOAR - Book Of All References", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Disable colors and styling of output
    #[arg(short = 'c', long, global = true, help_heading = "Options")]
    pub nocolor: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Show the book, or a single category
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Category id or short name, or the "show all" word
        category: Option<String>,
    },

    /// Show only the categories
    #[command(alias = "lscat", display_order = 2)]
    Categories,

    /// Add a category
    #[command(name = "add-category", alias = "addcat", display_order = 10)]
    AddCategory {
        /// Category name (words are joined with spaces)
        #[arg(num_args = 0..)]
        name: Vec<String>,

        /// Short name, derived from the name when omitted
        #[arg(short, long)]
        short: Option<String>,
    },

    /// Add an item to a category
    #[command(display_order = 11)]
    Add {
        /// Category id or short name
        category: Option<String>,

        /// Item name (words are joined with spaces)
        #[arg(num_args = 0..)]
        name: Vec<String>,

        /// Item description
        #[arg(short, long)]
        desc: Option<String>,

        /// Item link
        #[arg(short, long)]
        link: Option<String>,
    },

    /// Remove a category and all its items
    #[command(name = "remove-category", alias = "rmcat", display_order = 12)]
    RemoveCategory {
        /// Category id or short name
        category: Option<String>,
    },

    /// Remove an item (e.g. 2.3, "temp 1", temp "Some item")
    #[command(alias = "rm", display_order = 13)]
    Remove {
        #[arg(num_args = 0..)]
        refs: Vec<String>,
    },

    /// Rename a category or change its short name
    #[command(name = "edit-category", alias = "editcat", display_order = 14)]
    EditCategory {
        /// Category id or short name
        category: Option<String>,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New short name
        #[arg(short, long)]
        short: Option<String>,
    },

    /// Edit an item (e.g. 2.3, "temp 1", temp "Some item")
    #[command(display_order = 15)]
    Edit {
        #[arg(num_args = 0..)]
        refs: Vec<String>,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New description (the "clear" word removes it)
        #[arg(short, long)]
        desc: Option<String>,

        /// New link (the "clear" word removes it)
        #[arg(short, long)]
        link: Option<String>,
    },

    /// Revert the last change, or the last DEPTH changes
    #[command(display_order = 20)]
    Undo { depth: Option<String> },

    /// Show the stored versions available to undo
    #[command(display_order = 21)]
    History,

    /// Export the book to an HTML page
    #[command(display_order = 22)]
    Export {
        /// light or dark, defaults to the configured theme
        theme: Option<String>,
    },

    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (e.g. history-length)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Restore the default book and configuration
    #[command(display_order = 31)]
    Reset {
        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Create the data directory and default files
    #[command(display_order = 32)]
    Init,
}
