//! Pure environment-layout and package-name rules — no I/O, no async.
//!
//! All functions in this module are synchronous and take data in, returning
//! data out. Zero imports from `tokio`, `std::fs`, `crate::infra`,
//! `crate::commands`, or `crate::application`.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use semver::Version;

use crate::domain::error::PackageError;

/// Default environment directory, relative to the invocation location.
pub const DEFAULT_ENV_DIR: &str = "venv";

/// Default package set installed by `venvup up`.
pub const DEFAULT_PACKAGES: &[&str] = &["pandas", "numpy", "matplotlib"];

/// Interpreter names probed on PATH, in preference order.
pub const INTERPRETER_CANDIDATES: &[&str] = &["python3", "python"];

/// Python version the bootstrapped projects target. Other 3.x versions
/// work but `doctor` flags them as a warning.
pub const EXPECTED_PYTHON: (u64, u64) = (3, 11);

/// PEP-508-style distribution name, checked before any path or argument
/// interpolation so a malformed name never reaches a spawned process.
pub static PACKAGE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Safety: this is a compile-time constant pattern — cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9._-]*[A-Za-z0-9])?$").expect("valid regex")
});

/// Validate a single package name against [`PACKAGE_NAME_RE`].
///
/// # Errors
///
/// Returns [`PackageError::InvalidName`] if the name does not match.
pub fn validate_package_name(name: &str) -> Result<(), PackageError> {
    if PACKAGE_NAME_RE.is_match(name) {
        Ok(())
    } else {
        Err(PackageError::InvalidName(name.to_string()))
    }
}

/// Validate a full package list, collecting the first offending name.
///
/// # Errors
///
/// Returns [`PackageError::InvalidName`] for the first invalid name.
pub fn validate_packages(packages: &[String]) -> Result<(), PackageError> {
    for name in packages {
        validate_package_name(name)?;
    }
    Ok(())
}

/// Candidate interpreter paths inside an environment directory.
///
/// Unix venvs place the interpreter under `bin/`, Windows venvs under
/// `Scripts/`. Both are returned so callers can probe whichever exists.
#[must_use]
pub fn interpreter_candidates(dir: &Path) -> [PathBuf; 2] {
    [
        dir.join("bin").join("python"),
        dir.join("Scripts").join("python.exe"),
    ]
}

/// Shell command a user runs to activate the environment in their session.
#[must_use]
pub fn activation_hint(dir: &Path) -> String {
    if cfg!(windows) {
        format!("{}\\Scripts\\activate", dir.display())
    } else {
        format!("source {}/bin/activate", dir.display())
    }
}

/// Module name used to import a distribution, for `doctor` import checks.
///
/// Most distributions import under their own name with `-` mapped to `_`;
/// the exceptions are the handful of renamed distributions the original
/// environment used.
#[must_use]
pub fn import_name(package: &str) -> String {
    match package {
        "python-dotenv" => "dotenv".to_string(),
        other => other.replace('-', "_"),
    }
}

/// Parse a `<tool> <version> ...` line (e.g. `Python 3.11.4`, `pip 24.0
/// from /...`) into a semver version. Two-component versions are padded
/// with a zero patch.
#[must_use]
pub fn parse_tool_version(line: &str) -> Option<Version> {
    let raw = line.split_whitespace().nth(1)?;
    let dots = raw.bytes().filter(|&b| b == b'.').count();
    let padded = match dots {
        0 => format!("{raw}.0.0"),
        1 => format!("{raw}.0"),
        _ => raw.to_string(),
    };
    Version::parse(&padded).ok()
}

// ── Unit tests ────────────────────────────────────────────────────────────────
