//! Infrastructure implementation of the environment provisioner ports.
//!
//! `PythonProvisioner<R>` routes every python/pip invocation through a
//! `CommandRunner`. Quick queries (`--version`, import checks, `pip list`)
//! and slow operations (venv creation, pip installs) use separate runners
//! with separate timeouts.

use std::path::{Path, PathBuf};
use std::process::Output;

use anyhow::{Context, Result};

use crate::application::ports::{InterpreterInspector, PipManager, VenvLifecycle};
use crate::command_runner::{
    CommandRunner, DEFAULT_CMD_TIMEOUT, DEFAULT_INSTALL_TIMEOUT, TokioCommandRunner,
};
use crate::domain::env;

/// Infrastructure adapter that routes all python/pip calls through a
/// `CommandRunner`.
///
/// Generic over `R: CommandRunner` so that tests can inject a mock runner
/// without spawning real processes.
pub struct PythonProvisioner<R: CommandRunner> {
    cmd_runner: R,
    install_runner: R,
}

impl<R: CommandRunner> PythonProvisioner<R> {
    /// Create a new provisioner with explicit runner instances.
    pub fn new(cmd_runner: R, install_runner: R) -> Self {
        Self {
            cmd_runner,
            install_runner,
        }
    }
}

impl PythonProvisioner<TokioCommandRunner> {
    /// Convenience constructor for production use.
    #[must_use]
    pub fn default_runner() -> Self {
        Self {
            cmd_runner: TokioCommandRunner::new(DEFAULT_CMD_TIMEOUT),
            install_runner: TokioCommandRunner::new(DEFAULT_INSTALL_TIMEOUT),
        }
    }
}

impl<R: CommandRunner> VenvLifecycle for PythonProvisioner<R> {
    async fn create(&self, interpreter: &str, dir: &Path) -> Result<Output> {
        let dir_arg = dir.display().to_string();
        self.install_runner
            .run(interpreter, &["-m", "venv", &dir_arg])
            .await
            .context("python -m venv")
    }

    fn find_env_interpreter(&self, dir: &Path) -> Option<PathBuf> {
        env::interpreter_candidates(dir)
            .into_iter()
            .find(|candidate| candidate.exists())
    }

    fn remove(&self, dir: &Path) -> Result<()> {
        if dir.exists() {
            std::fs::remove_dir_all(dir)
                .with_context(|| format!("removing {}", dir.display()))?;
        }
        Ok(())
    }
}

impl<R: CommandRunner> PipManager for PythonProvisioner<R> {
    async fn upgrade_pip(&self, env_python: &Path) -> Result<Output> {
        let python = env_python.display().to_string();
        self.install_runner
            .run(&python, &["-m", "pip", "install", "--upgrade", "pip"])
            .await
            .context("pip install --upgrade pip")
    }

    async fn install(&self, env_python: &Path, packages: &[String]) -> Result<Output> {
        let python = env_python.display().to_string();
        let mut args = vec!["-m", "pip", "install"];
        args.extend(packages.iter().map(String::as_str));
        self.install_runner
            .run(&python, &args)
            .await
            .context("pip install")
    }

    async fn pip_version(&self, env_python: &Path) -> Result<Output> {
        let python = env_python.display().to_string();
        self.cmd_runner
            .run(&python, &["-m", "pip", "--version"])
            .await
            .context("pip --version")
    }

    async fn list_installed(&self, env_python: &Path) -> Result<Output> {
        let python = env_python.display().to_string();
        self.cmd_runner
            .run(
                &python,
                &["-m", "pip", "list", "--format", "json", "--disable-pip-version-check"],
            )
            .await
            .context("pip list")
    }

    async fn check_import(&self, env_python: &Path, module: &str) -> Result<Output> {
        let python = env_python.display().to_string();
        let stmt = format!("import {module}");
        self.cmd_runner
            .run(&python, &["-c", &stmt])
            .await
            .context("import check")
    }
}

impl<R: CommandRunner> InterpreterInspector for PythonProvisioner<R> {
    async fn version(&self, interpreter: &str) -> Result<Output> {
        self.cmd_runner
            .run(interpreter, &["--version"])
            .await
            .context("python --version")
    }

    async fn discover(&self) -> Option<String> {
        for name in env::INTERPRETER_CANDIDATES {
            if let Ok(out) = self.cmd_runner.run(name, &["--version"]).await {
                if out.status.success() {
                    return Some((*name).to_string());
                }
            }
        }
        None
    }
}
