//! Command implementations

pub mod clean;
pub mod doctor;
pub mod status;
pub mod up;
pub mod version;

use clap::Args;

use crate::domain::env::DEFAULT_ENV_DIR;

/// Environment directory argument shared by read-only commands.
#[derive(Args)]
pub struct EnvDirArgs {
    /// Environment directory
    #[arg(long, default_value = DEFAULT_ENV_DIR)]
    pub dir: String,
}

/// Arguments for the clean command.
#[derive(Args)]
pub struct CleanArgs {
    /// Environment directory
    #[arg(long, default_value = DEFAULT_ENV_DIR)]
    pub dir: String,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub force: bool,
}
