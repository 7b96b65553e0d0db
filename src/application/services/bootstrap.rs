//! Application service — environment bootstrap use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use std::path::{Path, PathBuf};
use std::process::Output;

use anyhow::{Context, Result};

use crate::application::ports::{EnvProvisioner, ProgressReporter};
use crate::domain::env;
use crate::domain::error::{EnvError, PackageError};

/// Inputs to the `bootstrap_env` use-case.
pub struct UpOptions<'a> {
    /// Environment directory, relative to the invocation location.
    pub dir: &'a Path,
    /// Host interpreter override. `None` means discover `python3`/`python`.
    pub interpreter: Option<&'a str>,
    /// Packages to install after the installer upgrade.
    pub packages: &'a [String],
}

/// Outcome of the `bootstrap_env` use-case.
#[derive(Debug)]
pub enum UpOutcome {
    /// Environment was freshly created, then upgraded and populated.
    Created { env_dir: PathBuf },
    /// Environment already existed; creation was skipped, the installer
    /// upgrade and package installation still ran.
    AlreadyExists { env_dir: PathBuf },
}

/// Bootstrap the environment: create (if needed), upgrade pip, install the
/// package set. Steps run strictly in order; the first failure aborts.
///
/// Accepts port trait bounds so the caller can inject real or mock
/// implementations. The service never touches `OutputContext` or any
/// presentation type.
///
/// # Errors
///
/// Returns an error if a package name is invalid, no interpreter can be
/// found, or any step's command fails.
pub async fn bootstrap_env(
    provisioner: &impl EnvProvisioner,
    reporter: &impl ProgressReporter,
    opts: UpOptions<'_>,
) -> Result<UpOutcome> {
    // Reject malformed names before any process is spawned.
    env::validate_packages(opts.packages)?;

    let interpreter = resolve_interpreter(provisioner, opts.interpreter).await?;

    // Step 1: create the environment, unless its interpreter already exists.
    let (env_python, existed) = match provisioner.find_env_interpreter(opts.dir) {
        Some(python) => (python, true),
        None => {
            reporter.step(&format!(
                "creating virtual environment at {}...",
                opts.dir.display()
            ));
            let out = provisioner
                .create(&interpreter, opts.dir)
                .await
                .context("creating virtual environment")?;
            ensure_step(&out, |stderr| EnvError::CreateFailed(stderr).into())?;

            let python = provisioner
                .find_env_interpreter(opts.dir)
                .ok_or_else(|| EnvError::CreateFailed(
                    "environment created but no interpreter found inside it".to_string(),
                ))?;
            (python, false)
        }
    };
    if existed {
        reporter.step("environment exists, reusing it...");
    }

    // Step 2 (activation): every remaining command runs through the
    // environment's own interpreter instead of the host one.

    // Step 3: upgrade the installer.
    reporter.step("upgrading pip...");
    let out = provisioner
        .upgrade_pip(&env_python)
        .await
        .context("upgrading pip")?;
    ensure_step(&out, |stderr| PackageError::UpgradeFailed(stderr).into())?;

    // Step 4: install the package set in a single invocation. No partial
    // success: one failing package fails the whole step.
    reporter.step(&format!("installing {}...", opts.packages.join(" ")));
    let out = provisioner
        .install(&env_python, opts.packages)
        .await
        .context("installing packages")?;
    ensure_step(&out, |stderr| PackageError::InstallFailed(stderr).into())?;

    reporter.success("environment ready");

    let env_dir = opts.dir.to_path_buf();
    if existed {
        Ok(UpOutcome::AlreadyExists { env_dir })
    } else {
        Ok(UpOutcome::Created { env_dir })
    }
}

/// Resolve the host interpreter: honor an explicit override (verifying it
/// answers `--version`), otherwise discover `python3`/`python` on PATH.
async fn resolve_interpreter(
    provisioner: &impl EnvProvisioner,
    requested: Option<&str>,
) -> Result<String> {
    if let Some(name) = requested {
        let out = provisioner.version(name).await;
        match out {
            Ok(ref o) if o.status.success() => Ok(name.to_string()),
            _ => Err(EnvError::InterpreterNotFound)
                .with_context(|| format!("requested interpreter '{name}' did not respond")),
        }
    } else {
        match provisioner.discover().await {
            Some(name) => Ok(name),
            None => Err(EnvError::InterpreterNotFound.into()),
        }
    }
}

/// Map a failed command `Output` to a domain error carrying its stderr.
fn ensure_step(
    out: &Output,
    to_error: impl FnOnce(String) -> anyhow::Error,
) -> Result<()> {
    if out.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&out.stderr).trim().to_string();
        Err(to_error(stderr))
    }
}
