//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags};
use crate::commands;

/// Bootstrap Python virtual environments for data-science projects
#[derive(Parser)]
#[command(
    name = "venvup",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    // NO_COLOR is honored by OutputContext::new directly; its conventional
    // value "1" is not a valid bool for clap's env parsing.
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create the environment, upgrade pip, and install the package set
    Up(commands::up::UpArgs),

    /// Show environment status
    Status(commands::EnvDirArgs),

    /// Diagnose interpreter and package issues
    Doctor(commands::EnvDirArgs),

    /// Remove the environment
    Clean(commands::CleanArgs),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            no_color,
            quiet,
            json,
            command,
        } = self;
        let app = AppContext::new(&AppFlags {
            no_color,
            quiet,
            json,
        });
        match command {
            Command::Version => {
                commands::version::run(json);
                Ok(())
            }
            Command::Up(args) => commands::up::run(&args, &app).await,
            Command::Status(args) => commands::status::run(&args, &app).await,
            Command::Doctor(args) => commands::doctor::run(&args, &app).await,
            Command::Clean(args) => commands::clean::run(&args, &app),
        }
    }
}
