//! `venvup up` — create the environment, upgrade pip, install packages.

use std::path::Path;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::bootstrap::{self as service, UpOptions, UpOutcome};
use crate::domain::env::{self, DEFAULT_ENV_DIR};
use crate::output::OutputContext;

/// Arguments for the up command.
#[derive(Args, Default)]
pub struct UpArgs {
    /// Environment directory
    #[arg(long, default_value = DEFAULT_ENV_DIR)]
    pub dir: String,

    /// Host interpreter to create the environment with
    #[arg(long)]
    pub python: Option<String>,

    /// Additional packages to install alongside the default set
    #[arg(long = "with", value_name = "PACKAGE")]
    pub extra: Vec<String>,
}

/// Run `venvup up`.
///
/// # Errors
///
/// Returns an error if interpreter discovery, environment creation, the
/// installer upgrade, or package installation fails.
pub async fn run(args: &UpArgs, app: &AppContext) -> Result<()> {
    let mut packages: Vec<String> = env::DEFAULT_PACKAGES
        .iter()
        .map(|p| (*p).to_string())
        .collect();
    packages.extend(args.extra.iter().cloned());

    let reporter = app.terminal_reporter();
    let dir = Path::new(&args.dir);

    let outcome = service::bootstrap_env(
        &app.provisioner,
        &reporter,
        UpOptions {
            dir,
            interpreter: args.python.as_deref(),
            packages: &packages,
        },
    )
    .await?;

    if app.is_json() {
        let created = matches!(outcome, UpOutcome::Created { .. });
        let obj = serde_json::json!({
            "created": created,
            "env_dir": args.dir,
            "packages": packages,
        });
        println!("{}", serde_json::to_string_pretty(&obj)?);
        return Ok(());
    }

    match outcome {
        UpOutcome::Created { env_dir } => {
            print_success_message(&env_dir, &app.output);
        }
        UpOutcome::AlreadyExists { env_dir } => {
            app.output.info("Environment already existed; packages refreshed.");
            print_success_message(&env_dir, &app.output);
        }
    }

    Ok(())
}

/// Print activation and follow-up hints after the environment is ready.
fn print_success_message(env_dir: &Path, ctx: &OutputContext) {
    if ctx.quiet {
        return;
    }
    ctx.kv("Activate", &env::activation_hint(env_dir));
    ctx.kv("Status", "venvup status");
    ctx.kv("Diagnose", "venvup doctor");
}
