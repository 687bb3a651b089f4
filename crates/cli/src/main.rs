//! ARMOR CLI - Command-line interface for the ARMOR profile server
//!
//! Usage:
//!   armor                              - Start interactive mode
//!   armor login                        - Verify and store the server password
//!   armor logout                       - Forget the stored password
//!   armor status                       - Show server and session
//!   armor profile list|create|show|delete
//!   armor section get <id> <section>
//!   armor section set <id> <section> --data <json> | --file <path>

use clap::{Parser, Subcommand};
use cli::commands::{LoginCommand, LogoutCommand, ProfileCommand, SectionCommand, StatusCommand};
use cli::context::{AppContext, GlobalArgs};
use cli::interactive::{report_error, InteractiveCli};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "armor")]
#[command(about = "ARMOR - Threat-model profile client")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    global: GlobalArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify a password against the server and store it
    Login(LoginCommand),
    /// Forget the stored password
    Logout,
    /// Show server and session state
    Status,
    /// Manage profiles
    Profile(ProfileCommand),
    /// Read and write profile sections
    Section(SectionCommand),
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = AppContext::from_args(&cli.global)?;

    match cli.command {
        Some(Commands::Login(cmd)) => cmd.run(&ctx).await,
        Some(Commands::Logout) => LogoutCommand.run(&ctx),
        Some(Commands::Status) => StatusCommand.run(&ctx),
        Some(Commands::Profile(cmd)) => cmd.run(&ctx).await,
        Some(Commands::Section(cmd)) => cmd.run(&ctx).await,
        None => {
            // No subcommand - start interactive mode
            let mut interactive = InteractiveCli::new(ctx);
            interactive.run().await
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.global.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli).await {
        report_error(&err);
        std::process::exit(1);
    }
}
