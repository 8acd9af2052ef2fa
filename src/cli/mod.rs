//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod auth;
pub mod company;
pub mod completions;
pub mod context;
pub mod dashboard;
pub mod handlers;
pub mod job;
pub mod status;

pub use args::{JobFilterArgs, OutputFormat, PaginationArgs, RoleArg};
pub use context::CommandContext;

use crate::client::models::JobStatus;
use args::parse_status;

/// jobtrack - command-line client for the Job Tracker API
#[derive(Parser, Debug)]
#[command(name = "jobtrack")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "JOBTRACK_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "JOBTRACK_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the API base URL (default http://localhost:5000)
    #[arg(long, global = true, env = "JOBTRACK_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "JOBTRACK_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and store the session
    Login {
        /// Account email (prompted if omitted)
        #[arg(long, short = 'e')]
        email: Option<String>,

        /// Account password (prompted if omitted)
        #[arg(long, env = "JOBTRACK_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Create an account and sign in
    Register {
        /// Account email (prompted if omitted)
        #[arg(long, short = 'e')]
        email: Option<String>,

        /// Account password (prompted if omitted)
        #[arg(long, env = "JOBTRACK_PASSWORD", hide_env_values = true)]
        password: Option<String>,

        /// Account role
        #[arg(long, value_enum, default_value = "user")]
        role: RoleArg,
    },

    /// Forget the stored session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Show configuration, session and API status
    Status,

    /// Summary of your applications
    Dashboard,

    /// Manage companies
    #[command(subcommand)]
    Company(CompanyCommands),

    /// Manage job applications
    #[command(subcommand)]
    Job(JobCommands),

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   jobtrack completion bash > /etc/bash_completion.d/jobtrack
  zsh:    jobtrack completion zsh > \"${fpath[1]}/_jobtrack\"
  fish:   jobtrack completion fish > ~/.config/fish/completions/jobtrack.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Display version information
    Version,
}

/// Company subcommands
#[derive(Subcommand, Debug)]
pub enum CompanyCommands {
    /// List companies
    List,

    /// Create a company
    Create {
        /// Company name
        name: String,

        /// Location
        #[arg(long, short = 'l')]
        location: Option<String>,

        /// Website
        #[arg(long, short = 'w')]
        website: Option<String>,
    },
}

/// Job subcommands
#[derive(Subcommand, Debug)]
pub enum JobCommands {
    /// List job applications
    List {
        #[command(flatten)]
        filters: JobFilterArgs,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Record a new application (starts as 'applied')
    Create {
        /// Position title
        #[arg(long, short = 't')]
        title: String,

        /// Company ID or name
        #[arg(long, short = 'c')]
        company: String,
    },

    /// Move a job to a new status
    Move {
        /// Job ID
        id: i64,

        /// Target status (interview, offer, rejected)
        #[arg(value_parser = parse_status)]
        status: JobStatus,
    },

    /// Show which statuses a job can move to
    Transitions {
        /// Current status
        #[arg(value_parser = parse_status)]
        status: JobStatus,
    },
}
