//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};
use std::process::Output;

use anyhow::Result;

// ── Environment Port Traits ───────────────────────────────────────────────────

/// Virtual-environment lifecycle: create, probe, remove.
#[allow(async_fn_in_trait)]
pub trait VenvLifecycle {
    /// Create a virtual environment at `dir` using the host `interpreter`.
    async fn create(&self, interpreter: &str, dir: &Path) -> Result<Output>;

    /// Locate the environment's own interpreter, if the environment exists.
    /// Probes both the Unix (`bin/`) and Windows (`Scripts/`) layouts.
    fn find_env_interpreter(&self, dir: &Path) -> Option<PathBuf>;

    /// Remove the environment directory and everything under it.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be removed.
    fn remove(&self, dir: &Path) -> Result<()>;
}

/// Package-installer operations, all routed through the environment's own
/// interpreter (`python -m pip ...`).
#[allow(async_fn_in_trait)]
pub trait PipManager {
    /// Upgrade pip inside the environment.
    async fn upgrade_pip(&self, env_python: &Path) -> Result<Output>;
    /// Install the given packages in a single invocation.
    async fn install(&self, env_python: &Path, packages: &[String]) -> Result<Output>;
    /// Query the pip version inside the environment.
    async fn pip_version(&self, env_python: &Path) -> Result<Output>;
    /// List installed distributions as JSON (`pip list --format json`).
    async fn list_installed(&self, env_python: &Path) -> Result<Output>;
    /// Check that `module` imports inside the environment.
    async fn check_import(&self, env_python: &Path, module: &str) -> Result<Output>;
}

/// Host interpreter inspection.
#[allow(async_fn_in_trait)]
pub trait InterpreterInspector {
    /// Query an interpreter's version (`<interpreter> --version`).
    async fn version(&self, interpreter: &str) -> Result<Output>;

    /// Discover a working host interpreter, in preference order.
    /// Returns the name that answered `--version`, or `None`.
    async fn discover(&self) -> Option<String>;
}

/// Composite trait — any type implementing all three sub-traits is an
/// `EnvProvisioner`.
pub trait EnvProvisioner: VenvLifecycle + PipManager + InterpreterInspector {}

/// Blanket implementation: any type implementing all three sub-traits is an
/// `EnvProvisioner`.
impl<T> EnvProvisioner for T where T: VenvLifecycle + PipManager + InterpreterInspector {}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
