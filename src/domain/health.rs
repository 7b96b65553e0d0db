//! Health check domain types and pure diagnostic functions.
//!
//! This module is intentionally free of I/O, async, and external layer imports.
//! All functions take data in and return data out.

use serde::Serialize;

use crate::domain::env::EXPECTED_PYTHON;

// ── Types ─────────────────────────────────────────────────────────────────────

/// All check categories returned by the doctor command.
#[derive(Debug, Serialize)]
pub struct DoctorChecks {
    /// Host interpreter checks.
    pub interpreter: InterpreterChecks,
    /// Environment checks.
    pub environment: EnvironmentChecks,
    /// Per-package import checks inside the environment.
    pub packages: Vec<PackageCheck>,
}

/// Host interpreter checks — presence and version.
#[derive(Debug, Serialize)]
pub struct InterpreterChecks {
    /// Whether `python3` (or `python`) is on PATH.
    pub found: bool,
    /// Interpreter name that answered (e.g. `"python3"`), if found.
    pub name: Option<String>,
    /// Installed version string (e.g. `"3.11.4"`), if found.
    pub version: Option<String>,
    /// Whether the version matches the expected minor release.
    pub version_ok: bool,
}

/// Environment checks — directory presence and installer version.
#[derive(Debug, Default, Serialize)]
pub struct EnvironmentChecks {
    /// Whether the environment interpreter exists.
    pub exists: bool,
    /// pip version inside the environment, if resolvable.
    pub pip_version: Option<String>,
}

/// Import check result for a single package.
#[derive(Debug, Serialize)]
pub struct PackageCheck {
    /// Distribution name (e.g. `"pandas"`).
    pub name: String,
    /// Whether the package imports inside the environment.
    pub installed: bool,
}

// ── Pure functions ────────────────────────────────────────────────────────────

/// Collect actionable issues from check results.
///
/// Returns a list of human-readable issue strings for any failing checks.
/// A version mismatch on a present interpreter is a **warning only** and is
/// NOT included in the returned issues list.
#[must_use]
pub fn collect_issues(checks: &DoctorChecks) -> Vec<String> {
    let mut issues = Vec::new();
    if !checks.interpreter.found {
        issues.push("No Python interpreter found on PATH".to_string());
    }
    if checks.interpreter.found && !checks.environment.exists {
        issues.push("No environment found. Run 'venvup up' to create one.".to_string());
    }
    // Without an environment the pip remediation cannot work; the
    // 'venvup up' hint above already covers that case.
    if checks.environment.exists {
        let missing = missing_packages(checks);
        if !missing.is_empty() {
            issues.push(format!(
                "Missing packages: {}. Fix: pip install {}",
                missing.join(", "),
                missing.join(" "),
            ));
        }
    }
    issues
}

/// Names of packages whose import check failed.
#[must_use]
pub fn missing_packages(checks: &DoctorChecks) -> Vec<String> {
    checks
        .packages
        .iter()
        .filter(|p| !p.installed)
        .map(|p| p.name.clone())
        .collect()
}

/// Whether a parsed interpreter version matches the expected minor release.
#[must_use]
pub fn version_matches_expected(version: &semver::Version) -> bool {
    (version.major, version.minor) == EXPECTED_PYTHON
}

// ── Unit tests ────────────────────────────────────────────────────────────────
