use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rtracker
/// Terminal frontend for a habit, task and project tracking API
#[derive(Parser)]
#[command(
    name = "rtracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track habits, events, tasks and projects against a remote tracker API",
    long_about = None
)]
pub struct Cli {
    /// Override the API base URL (e.g. http://localhost:8080/api/v1)
    #[arg(global = true, long = "api")]
    pub api: Option<String>,

    /// Override the session file holding the bearer token
    #[arg(global = true, long = "session")]
    pub session: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and store the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account and store the session token
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Monthly habit grid and habit management
    Habits {
        #[command(subcommand)]
        action: HabitAction,
    },

    /// Date-range events shown on the habit grid
    Events {
        #[command(subcommand)]
        action: EventAction,
    },

    /// Tasks
    Tasks {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// Projects
    Projects {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Users (admin)
    Users {
        #[command(subcommand)]
        action: UserAction,
    },
}

#[derive(Subcommand)]
pub enum HabitAction {
    /// Show the habit grid of a month
    Grid {
        /// Month to show (YYYY-MM), default: current month
        #[arg(long)]
        month: Option<String>,

        #[arg(long, conflicts_with = "next", help = "Show the month before")]
        prev: bool,

        #[arg(long, help = "Show the month after")]
        next: bool,
    },

    /// Create a habit
    Add {
        name: String,

        #[arg(long)]
        description: Option<String>,

        #[arg(long, help = "daily, weekly, monthly or custom")]
        repeat: Option<String>,
    },

    /// Rename or describe a habit
    Edit {
        /// Habit id or name
        habit: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        repeat: Option<String>,
    },

    /// Delete a habit
    Delete {
        /// Habit id or name
        habit: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Flip the check mark of a habit on a day
    Toggle {
        /// Habit id or name
        habit: String,

        /// Day (YYYY-MM-DD)
        date: String,
    },
}

#[derive(Subcommand)]
pub enum EventAction {
    /// List the events of a month
    List {
        #[arg(long)]
        month: Option<String>,
    },

    /// Create an event; the form is prefilled from the event covering `--day`
    Add(EventArgs),

    /// Replace an existing event
    Update {
        id: String,

        #[command(flatten)]
        form: EventArgs,
    },

    /// Delete an event
    Delete { id: String },
}

#[derive(Args)]
pub struct EventArgs {
    /// First day (YYYY-MM-DD)
    #[arg(long)]
    pub day: String,

    /// Last day (YYYY-MM-DD), default: same as --day
    #[arg(long)]
    pub to: Option<String>,

    /// Event name; an existing name is matched case-insensitively
    #[arg(long)]
    pub name: Option<String>,

    /// Palette color (#rrggbb or 1-10)
    #[arg(long)]
    pub color: Option<String>,

    #[arg(long)]
    pub note: Option<String>,

    /// Habits (id or name) disabled during the event
    #[arg(long = "disable", num_args = 1..)]
    pub disable: Vec<String>,
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// List tasks
    List {
        #[arg(long, help = "Filter by status (not-started, in-progress, done)")]
        status: Option<String>,

        #[arg(long, help = "Filter by project id")]
        project: Option<String>,
    },

    /// Create a task
    Add {
        #[arg(long)]
        title: String,

        #[command(flatten)]
        fields: TaskFields,
    },

    /// Update a task
    Update {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[command(flatten)]
        fields: TaskFields,
    },

    /// Delete a task
    Delete { id: String },

    /// Totals, completed, due today and overdue
    Stats,
}

#[derive(Args)]
pub struct TaskFields {
    #[arg(long)]
    pub description: Option<String>,

    #[arg(long, help = "not-started, in-progress or done")]
    pub status: Option<String>,

    #[arg(long, help = "low, medium or high")]
    pub priority: Option<String>,

    #[arg(long = "project")]
    pub project_id: Option<String>,

    #[arg(long = "assign")]
    pub assigned_to: Option<String>,

    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    pub due: Option<String>,
}

#[derive(Subcommand)]
pub enum ProjectAction {
    List,
    Show {
        id: String,
    },
    Add {
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    Delete {
        id: String,
    },
}

#[derive(Subcommand)]
pub enum UserAction {
    List,
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, help = "admin or user")]
        role: Option<String>,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        role: Option<String>,
    },
    Delete {
        id: String,
    },
}
