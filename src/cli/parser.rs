use clap::{Parser, Subcommand};

/// Command-line interface definition for pcdeath
/// CLI checklist to track what to reinstall after formatting a PC
#[derive(Parser)]
#[command(
    name = "pcdeath",
    version = env!("CARGO_PKG_VERSION"),
    about = "PC DEATH: track programs, drivers and extensions to reinstall, grouped and prioritized",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal operation log
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage groups
    Group {
        #[command(subcommand)]
        action: GroupAction,
    },

    /// Manage items inside a group
    Item {
        #[command(subcommand)]
        action: ItemAction,
    },

    /// Set an item status, or cycle none → done → skip → none when omitted
    Status {
        /// Item id
        item: String,

        /// New status: none, done, skip
        status: Option<String>,
    },

    /// Move an item to another group (appended at the end)
    Move {
        /// Item id to move
        item: String,

        /// Target group id
        #[arg(long = "group", conflicts_with = "onto", required_unless_present = "onto")]
        group: Option<String>,

        /// Drop onto another item: the item lands in that item's group
        #[arg(long = "onto", value_name = "ITEM")]
        onto: Option<String>,
    },

    /// List groups and items with their status
    List {
        /// Show only this group
        #[arg(long, short)]
        group: Option<String>,

        /// Case-insensitive search on item names
        #[arg(long, short)]
        search: Option<String>,

        /// Show only items with this priority (HIGH, MEDIUM, LOW)
        #[arg(long, short)]
        priority: Option<String>,
    },

    /// Export groups and items to a JSON file
    Export {
        /// Output file path (default from config: pc-death-red-death.json)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Replace groups and items with the content of a JSON file
    Import {
        /// File previously produced by `export` (current or old format)
        file: String,
    },

    /// Empty every list and clear all statuses
    Clear {
        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show or set the interface language (pt, en)
    Lang {
        /// Language code
        code: Option<String>,
    },

    /// Create a backup copy of the database
    Backup {
        /// Destination file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup (zip)
        #[arg(long)]
        compress: bool,
    },
}

#[derive(Subcommand)]
pub enum GroupAction {
    /// Create a new group
    Add {
        /// Group name
        name: String,

        /// Icon: folder, package, wrench, cpu, monitor, hard-drive, puzzle
        #[arg(long)]
        icon: Option<String>,
    },

    /// Delete a user group and all of its items
    Del {
        /// Group id
        id: String,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List groups with their ids
    List,
}

#[derive(Subcommand)]
pub enum ItemAction {
    /// Add an item to a group
    Add {
        /// Group id (programs, drivers, extensions or a custom group id)
        group: String,

        /// Item name
        name: String,

        /// Download link
        #[arg(long, default_value = "")]
        link: String,

        /// Priority: HIGH, MEDIUM, LOW (default from config)
        #[arg(long, short)]
        priority: Option<String>,
    },

    /// Edit an item; omitted fields keep their value
    Edit {
        /// Group id
        group: String,

        /// Item id
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        link: Option<String>,

        #[arg(long, short)]
        priority: Option<String>,
    },

    /// Delete an item
    Del {
        /// Group id
        group: String,

        /// Item id
        id: String,
    },
}
