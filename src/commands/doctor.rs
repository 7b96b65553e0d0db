//! `venvup doctor` — interpreter and package diagnostics.

use std::path::Path;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::doctor as service;
use crate::commands::EnvDirArgs;
use crate::domain::env::EXPECTED_PYTHON;
use crate::domain::health::{DoctorChecks, collect_issues};
use crate::output::OutputContext;

/// Run `venvup doctor`.
///
/// # Errors
///
/// Returns an error if a probe cannot be executed, or if any actionable
/// issue is found (so scripted callers get a nonzero exit).
pub async fn run(args: &EnvDirArgs, app: &AppContext) -> Result<()> {
    let checks = service::run_checks(&app.provisioner, Path::new(&args.dir)).await?;
    let issues = collect_issues(&checks);

    if app.is_json() {
        let obj = serde_json::json!({
            "checks": checks,
            "issues": issues,
        });
        println!("{}", serde_json::to_string_pretty(&obj)?);
    } else {
        print_report(&checks, &issues, &app.output);
    }

    if issues.is_empty() {
        Ok(())
    } else {
        anyhow::bail!("{} issue(s) found", issues.len())
    }
}

fn print_report(checks: &DoctorChecks, issues: &[String], ctx: &OutputContext) {
    ctx.header("Interpreter");
    if checks.interpreter.found {
        let name = checks.interpreter.name.as_deref().unwrap_or("python");
        let version = checks.interpreter.version.as_deref().unwrap_or("unknown");
        ctx.success(&format!("{name} {version}"));
        if !checks.interpreter.version_ok {
            ctx.warn(&format!(
                "Python {}.{} expected; other versions are untested",
                EXPECTED_PYTHON.0, EXPECTED_PYTHON.1
            ));
        }
    } else {
        ctx.error("no Python interpreter on PATH");
    }

    ctx.header("Environment");
    if checks.environment.exists {
        let pip = checks.environment.pip_version.as_deref().unwrap_or("unknown");
        ctx.success(&format!("environment present (pip {pip})"));
    } else {
        ctx.error("no environment found");
    }

    ctx.header("Packages");
    for package in &checks.packages {
        if package.installed {
            ctx.success(&package.name);
        } else {
            ctx.error(&format!("{} NOT installed", package.name));
        }
    }

    if !issues.is_empty() {
        ctx.header("Issues");
        for issue in issues {
            ctx.error(issue);
        }
    }
}
