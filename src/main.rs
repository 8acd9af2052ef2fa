//! jobtrack - command-line client for the Job Tracker API

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;

use cli::args::GlobalOptions;
use cli::{Cli, Commands, CompanyCommands, JobCommands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Login { email, password } => cli::auth::login(&opts, email, password).await,
        Commands::Register {
            email,
            password,
            role,
        } => cli::auth::register(&opts, email, password, role).await,
        Commands::Logout => cli::auth::logout(&opts).await,
        Commands::Whoami => cli::auth::whoami(&opts).await,
        Commands::Status => cli::status::run(&opts).await,
        Commands::Dashboard => cli::dashboard::run(&opts).await,
        Commands::Company(company_cmd) => match company_cmd {
            CompanyCommands::List => cli::company::list(&opts).await,
            CompanyCommands::Create {
                name,
                location,
                website,
            } => cli::company::create(&opts, name, location, website).await,
        },
        Commands::Job(job_cmd) => match job_cmd {
            JobCommands::List {
                filters,
                pagination,
            } => cli::job::list(&opts, &filters, &pagination).await,
            JobCommands::Create { title, company } => {
                cli::job::create(&opts, title, company).await
            }
            JobCommands::Move { id, status } => cli::job::move_to(&opts, id, status).await,
            JobCommands::Transitions { status } => cli::job::transitions(&opts, status),
        },
        Commands::Completion { shell } => cli::completions::run(shell),
        Commands::Version => {
            println!("jobtrack version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Log to stderr. `--debug` turns on this crate's debug output; otherwise
/// `RUST_LOG` decides, defaulting to warnings only.
fn init_logging(debug: bool) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if debug {
        builder.filter_module("jobtrack", log::LevelFilter::Debug);
    }
    let _ = builder.try_init();
}
