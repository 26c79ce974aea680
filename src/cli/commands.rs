use clap::{Parser, Subcommand};

const VERSION: &str = env!("GIT_VERSION");

#[derive(Parser)]
#[command(
    name = "taskdeck",
    version = VERSION,
    about = "CLI client for a spreadsheet-backed task list",
    after_help = "\
NOTE:
  Run `taskdeck init --url <endpoint>` before any other command. The
  endpoint is a web-app URL that answers JSONP reads and form POSTs.

EXIT CODES:
  0  Success
  1  Error (transport, invalid page, not found, validation)

BEHAVIOR NOTES:
  Success is only reported once the endpoint confirmed the write.
  `--sheet` overrides the configured sheet for one invocation;
  `sheet use <name>` makes the selection stick."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use this sheet instead of the configured one
    #[arg(long, global = true)]
    pub sheet: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Point taskdeck at an endpoint and write the config file
    Init {
        /// Web-app endpoint URL
        #[arg(long)]
        url: String,

        /// Tasks shown per page
        #[arg(long, default_value_t = crate::config::DEFAULT_PAGE_SIZE)]
        page_size: usize,
    },

    /// List tasks, one page at a time
    List {
        /// Keep only tasks whose title or description contains this
        /// (case-insensitive)
        #[arg(long, default_value = "")]
        search: String,

        /// Keep only tasks with this priority (low|medium|high)
        #[arg(long)]
        priority: Option<String>,

        /// Page to show (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Emit an HTML fragment instead of text
        #[arg(long)]
        html: bool,
    },

    /// Create a task
    Add {
        /// Task title
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// low|medium|high
        #[arg(long, default_value = "medium")]
        priority: String,
        #[arg(long)]
        deadline: Option<String>,
    },

    /// Update a task; omitted fields keep their current value
    Edit {
        /// Task id
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// low|medium|high
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        deadline: Option<String>,
    },

    /// Delete a task
    Delete {
        /// Task id
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show one task
    Show {
        /// Task id
        id: String,
    },

    /// Sheet (partition) management
    #[command(subcommand)]
    Sheet(SheetCommands),
}

#[derive(Subcommand)]
pub enum SheetCommands {
    /// List sheets on the endpoint
    List,
    /// Create a sheet
    Create {
        /// Sheet name
        name: String,
    },
    /// Select the sheet used by subsequent commands
    Use {
        /// Sheet name (must exist on the endpoint)
        name: String,
    },
}
