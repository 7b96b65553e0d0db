//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All error types implement `thiserror::Error` and convert to
//! `anyhow::Error` via the `?` operator.

use thiserror::Error;

// ── Environment errors ────────────────────────────────────────────────────────

/// Errors related to virtual-environment lifecycle.
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("No Python interpreter found. Install Python 3 and ensure 'python3' is on PATH.")]
    InterpreterNotFound,

    #[error("Environment creation failed:\n{0}")]
    CreateFailed(String),
}

// ── Package errors ────────────────────────────────────────────────────────────

/// Errors related to package installation.
#[derive(Debug, Error)]
pub enum PackageError {
    #[error("Invalid package name '{0}': must match ^[A-Za-z0-9]([A-Za-z0-9._-]*[A-Za-z0-9])?$")]
    InvalidName(String),

    #[error("Installer upgrade failed:\n{0}")]
    UpgradeFailed(String),

    #[error("Package installation failed:\n{0}")]
    InstallFailed(String),
}
