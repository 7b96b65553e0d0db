//! `venvup status` — show environment status.

use std::path::Path;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::status as service;
use crate::commands::EnvDirArgs;

/// Run `venvup status`.
///
/// # Errors
///
/// Returns an error if a status probe cannot be executed.
pub async fn run(args: &EnvDirArgs, app: &AppContext) -> Result<()> {
    let status = service::env_status(&app.provisioner, Path::new(&args.dir)).await?;

    if app.is_json() {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    let ctx = &app.output;
    if !status.exists {
        ctx.info(&format!(
            "No environment found at '{}'. Run 'venvup up' to create one.",
            status.env_dir
        ));
        return Ok(());
    }

    ctx.header("Environment");
    ctx.kv("Directory", &status.env_dir);
    ctx.kv(
        "Python",
        status.python_version.as_deref().unwrap_or("unknown"),
    );
    ctx.kv("pip", status.pip_version.as_deref().unwrap_or("unknown"));
    if let Some(count) = status.package_count {
        ctx.kv("Packages", &count.to_string());
    }

    Ok(())
}
