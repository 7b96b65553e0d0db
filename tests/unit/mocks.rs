//! Shared mock infrastructure for unit tests.
//!
//! Provides a canned [`EnvProvisioner`] implementation and output helpers so
//! each test file doesn't have to re-define the same boilerplate.

#![allow(clippy::expect_used)]

use std::cell::{Cell, RefCell};
use std::os::unix::process::ExitStatusExt;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Output};

use anyhow::Result;
use venvup::application::ports::{
    InterpreterInspector, PipManager, ProgressReporter, VenvLifecycle,
};

// ── Output helpers ────────────────────────────────────────────────────────────

pub fn ok_output(stdout: &[u8]) -> Output {
    Output {
        status: ExitStatus::from_raw(0),
        stdout: stdout.to_vec(),
        stderr: Vec::new(),
    }
}

pub fn err_output(stderr: &[u8]) -> Output {
    Output {
        status: ExitStatus::from_raw(1 << 8),
        stdout: Vec::new(),
        stderr: stderr.to_vec(),
    }
}

// ── Reporter double ───────────────────────────────────────────────────────────

/// No-op reporter for service tests that don't assert on progress output.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn step(&self, _: &str) {}
    fn success(&self, _: &str) {}
    fn warn(&self, _: &str) {}
}

// ── Mock provisioner ──────────────────────────────────────────────────────────

/// Scripted provisioner: canned answers, call recording, per-step failure
/// injection. `Cell`/`RefCell` are fine here — service tests run on a
/// single-threaded runtime and the mock methods never hold a borrow across
/// an await point.
pub struct MockProvisioner {
    /// Whether the environment (its interpreter) currently exists.
    pub env_exists: Cell<bool>,
    /// Interpreter that answers discovery and `--version`, if any.
    pub interpreter: Option<&'static str>,
    /// Version line the interpreter reports.
    pub python_version: &'static str,
    /// Step to fail: `"create"`, `"upgrade"`, or `"install"`.
    pub fail_step: Option<&'static str>,
    /// Modules whose import check succeeds.
    pub importable: &'static [&'static str],
    /// Canned `pip list --format json` payload.
    pub pip_list_json: &'static str,
    /// Recorded operation names, in call order.
    pub calls: RefCell<Vec<String>>,
}

impl Default for MockProvisioner {
    fn default() -> Self {
        Self {
            env_exists: Cell::new(false),
            interpreter: Some("python3"),
            python_version: "Python 3.11.4",
            fail_step: None,
            importable: &["pandas", "numpy", "matplotlib"],
            pip_list_json: r#"[{"name":"pip","version":"24.0"}]"#,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl MockProvisioner {
    pub fn with_env(self) -> Self {
        self.env_exists.set(true);
        self
    }

    pub fn failing_at(step: &'static str) -> Self {
        Self {
            fail_step: Some(step),
            ..Self::default()
        }
    }

    pub fn recorded(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.borrow_mut().push(call.into());
    }

    fn step_result(&self, step: &str) -> Output {
        if self.fail_step == Some(step) {
            err_output(format!("{step} exploded").as_bytes())
        } else {
            ok_output(b"")
        }
    }
}

impl VenvLifecycle for MockProvisioner {
    async fn create(&self, interpreter: &str, dir: &Path) -> Result<Output> {
        self.record(format!("create {interpreter} {}", dir.display()));
        let out = self.step_result("create");
        if out.status.success() {
            self.env_exists.set(true);
        }
        Ok(out)
    }

    fn find_env_interpreter(&self, dir: &Path) -> Option<PathBuf> {
        if self.env_exists.get() {
            Some(dir.join("bin").join("python"))
        } else {
            None
        }
    }

    fn remove(&self, dir: &Path) -> Result<()> {
        self.record(format!("remove {}", dir.display()));
        self.env_exists.set(false);
        Ok(())
    }
}

impl PipManager for MockProvisioner {
    async fn upgrade_pip(&self, _env_python: &Path) -> Result<Output> {
        self.record("upgrade");
        Ok(self.step_result("upgrade"))
    }

    async fn install(&self, _env_python: &Path, packages: &[String]) -> Result<Output> {
        self.record(format!("install {}", packages.join(" ")));
        Ok(self.step_result("install"))
    }

    async fn pip_version(&self, _env_python: &Path) -> Result<Output> {
        Ok(ok_output(b"pip 24.0 from /venv/lib/python3.11/site-packages/pip (python 3.11)"))
    }

    async fn list_installed(&self, _env_python: &Path) -> Result<Output> {
        Ok(ok_output(self.pip_list_json.as_bytes()))
    }

    async fn check_import(&self, _env_python: &Path, module: &str) -> Result<Output> {
        self.record(format!("import {module}"));
        if self.importable.contains(&module) {
            Ok(ok_output(b""))
        } else {
            Ok(err_output(format!("ModuleNotFoundError: No module named '{module}'").as_bytes()))
        }
    }
}

impl InterpreterInspector for MockProvisioner {
    async fn version(&self, interpreter: &str) -> Result<Output> {
        self.record(format!("version {interpreter}"));
        if self.interpreter == Some(interpreter)
            || self.env_exists.get() && interpreter.ends_with("python")
        {
            Ok(ok_output(self.python_version.as_bytes()))
        } else {
            Ok(err_output(b"not found"))
        }
    }

    async fn discover(&self) -> Option<String> {
        self.record("discover");
        self.interpreter.map(str::to_owned)
    }
}
