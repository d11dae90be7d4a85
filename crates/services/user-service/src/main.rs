//! User Service - command-line front end for user management.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use domain::Locale;
use user_service_lib::{config::UserServiceConfig, Command};

#[derive(Parser)]
#[command(name = "user-service")]
#[command(about = "User registration and deletion")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Login of the caller performing the operation
    #[arg(long, global = true)]
    actor: Option<String>,

    /// Language of error messages (en, ru)
    #[arg(long, global = true)]
    locale: Option<Locale>,

    /// JSON file with users to pre-load
    #[arg(long, global = true)]
    seed: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new user
    Register {
        #[arg(long)]
        login: String,
        #[arg(long)]
        password: String,
    },
    /// Delete a user (administrator only)
    Delete {
        #[arg(long)]
        login: String,
    },
}

fn main() {
    let cli = Cli::parse();

    common::init_tracing(cli.verbose);

    let config = match UserServiceConfig::from_env() {
        Ok(config) => config.with_overrides(cli.actor, cli.locale, cli.seed),
        Err(e) => {
            eprintln!("{}", e.to_json(cli.locale.unwrap_or_default()));
            std::process::exit(e.exit_code());
        }
    };
    tracing::debug!("Configuration loaded: {:?}", config);

    let command = match cli.command {
        Commands::Register { login, password } => Command::Register { login, password },
        Commands::Delete { login } => Command::Delete { login },
    };

    match user_service_lib::run(command, &config) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::debug!("Command failed: {}", e);
            eprintln!("{}", e.to_json(config.locale));
            std::process::exit(e.exit_code());
        }
    }
}
