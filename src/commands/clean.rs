//! `venvup clean [--force]` — remove the environment.

use std::path::Path;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::VenvLifecycle as _;
use crate::commands::CleanArgs;

/// Run `venvup clean [--force]`.
///
/// # Errors
///
/// Returns an error if the environment directory cannot be removed or the
/// confirmation prompt fails.
pub fn run(args: &CleanArgs, app: &AppContext) -> Result<()> {
    let dir = Path::new(&args.dir);
    let ctx = &app.output;

    if !dir.exists() {
        if app.is_json() {
            return print_json(&args.dir, false, false);
        }
        ctx.info(&format!("Nothing to remove at '{}'.", args.dir));
        return Ok(());
    }

    if !args.force {
        ctx.warn(&format!(
            "This will remove '{}' and every package installed in it.",
            args.dir
        ));
        if !app.confirm("Continue?", false)? {
            if app.is_json() {
                return print_json(&args.dir, false, true);
            }
            ctx.info("Cancelled.");
            return Ok(());
        }
    }

    app.provisioner.remove(dir)?;
    if app.is_json() {
        return print_json(&args.dir, true, false);
    }
    ctx.success("Environment removed.");
    ctx.kv("Recreate", "venvup up");
    Ok(())
}

fn print_json(env_dir: &str, removed: bool, cancelled: bool) -> Result<()> {
    let obj = serde_json::json!({
        "removed": removed,
        "cancelled": cancelled,
        "env_dir": env_dir,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
