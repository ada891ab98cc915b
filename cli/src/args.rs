use clap::{Parser, Subcommand};
use remotehub_cli::OutputFormat;
use std::path::PathBuf;

// Macro to create the version string at compile time
macro_rules! version_string {
    () => {
        concat!(
            env!("CARGO_PKG_VERSION"),
            "\nCommit: ",
            env!("GIT_COMMIT_HASH"),
            " (",
            env!("GIT_BRANCH"),
            ")\nBuilt: ",
            env!("BUILD_DATE")
        )
    };
}

/// hub - Terminal client for RemoteHub
#[derive(Parser, Debug)]
#[command(name = "hub")]
#[command(version = version_string!())]
#[command(about = "Manage RemoteHub teams and tasks from the terminal", long_about = None)]
pub struct Cli {
    /// API base URL (e.g., http://localhost:8085/api/v1)
    #[arg(short = 'u', long = "url", global = true)]
    pub url: Option<String>,

    /// Configuration file path
    #[arg(long = "config", global = true, default_value = "~/.remotehub/config.toml")]
    pub config: PathBuf,

    /// Output format
    #[arg(long = "format", global = true)]
    pub format: Option<OutputFormat>,

    /// Enable JSON output (shorthand for --format=json)
    #[arg(long = "json", global = true, conflicts_with = "format")]
    pub json: bool,

    /// Disable colored output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// HTTP request timeout in seconds (default: 30)
    #[arg(long = "timeout", value_name = "SECONDS", global = true)]
    pub timeout: Option<u64>,

    /// Connection timeout in seconds (TCP + TLS handshake, default: 10)
    #[arg(long = "connection-timeout", value_name = "SECONDS", global = true)]
    pub connection_timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in and store the session
    Login {
        /// Username (prompted when omitted)
        username: Option<String>,

        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Sign out and delete the stored session
    Logout,

    /// Show the signed-in user's profile
    Whoami,

    /// Create a new account
    Register,

    /// Request a password reset link by email
    ForgotPassword {
        /// Account email address
        email: String,
    },

    /// Reset a password with an emailed token
    ResetPassword {
        /// Reset token from the email
        token: String,

        /// New password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Show dashboard statistics and recent tasks
    Dashboard,

    /// Manage teams
    Teams {
        #[command(subcommand)]
        command: TeamsCommand,
    },

    /// Manage tasks
    Tasks {
        #[command(subcommand)]
        command: TasksCommand,
    },

    /// Browse users and manage your profile
    Users {
        #[command(subcommand)]
        command: UsersCommand,
    },

    /// Administrator-only operations
    Admin {
        #[command(subcommand)]
        command: AdminCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum TeamsCommand {
    /// List every team
    #[command(alias = "ls")]
    List,

    /// Show one team with its members and tasks
    Show {
        /// Team id
        id: i64,
    },

    /// Create a team
    Create {
        /// Team name
        name: String,

        /// Team description
        #[arg(long)]
        description: Option<String>,
    },

    /// Update a team's name and description
    Update {
        /// Team id
        id: i64,

        /// New team name
        #[arg(long)]
        name: String,

        /// New team description
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a team
    Delete {
        /// Team id
        id: i64,
    },

    /// Add a user to a team
    AddMember {
        /// Team id
        team_id: i64,

        /// User id
        user_id: i64,
    },

    /// Remove a user from a team
    RemoveMember {
        /// Team id
        team_id: i64,

        /// User id
        user_id: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum TasksCommand {
    /// List tasks
    #[command(alias = "ls")]
    List {
        /// Show at most this many tasks
        #[arg(long)]
        limit: Option<u32>,

        /// Only tasks belonging to this team
        #[arg(long)]
        team: Option<i64>,

        /// Only uncompleted tasks assigned to this user
        #[arg(long, conflicts_with = "team")]
        user: Option<i64>,

        /// Only uncompleted tasks (with --team)
        #[arg(long)]
        active: bool,
    },

    /// List your own uncompleted tasks
    Mine,

    /// Show one task in detail
    Show {
        /// Task id
        id: i64,
    },

    /// Create a task inside a team
    Create {
        /// Task title
        title: String,

        /// Team the task belongs to
        #[arg(long)]
        team: i64,

        /// Task description
        #[arg(long)]
        description: Option<String>,

        /// Priority: low, medium, high
        #[arg(long)]
        priority: Option<String>,

        /// Deadline as an ISO date-time
        #[arg(long)]
        deadline: Option<String>,

        /// User id to assign the task to
        #[arg(long)]
        assignee: Option<i64>,
    },

    /// Update a task's fields
    Update {
        /// Task id
        id: i64,

        /// New title
        #[arg(long)]
        title: String,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// Priority: low, medium, high
        #[arg(long)]
        priority: Option<String>,

        /// Deadline as an ISO date-time
        #[arg(long)]
        deadline: Option<String>,

        /// User id to assign the task to
        #[arg(long)]
        assignee: Option<i64>,
    },

    /// Delete a task
    Delete {
        /// Task id
        id: i64,
    },

    /// Assign a task to a user
    Assign {
        /// Task id
        id: i64,

        /// User id
        user_id: i64,
    },

    /// Mark a task as completed
    Complete {
        /// Task id
        id: i64,
    },

    /// Certify a completed task
    Certify {
        /// Task id
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum UsersCommand {
    /// List every user
    #[command(alias = "ls")]
    List,

    /// Show one user
    Show {
        /// User id
        id: i64,
    },

    /// Show your own profile
    Me,

    /// Update your own profile
    Update {
        /// New email address
        #[arg(long)]
        email: Option<String>,

        /// New first name
        #[arg(long)]
        first_name: Option<String>,

        /// New last name
        #[arg(long)]
        last_name: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum AdminCommand {
    /// List every user, including inactive accounts
    Users,

    /// Permanently delete a user account
    DeleteUser {
        /// User id
        id: i64,
    },

    /// Add a user to a team on their behalf
    AddMember {
        /// Team id
        team_id: i64,

        /// User id
        user_id: i64,
    },
}
