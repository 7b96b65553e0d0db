//! Application service — environment diagnostics use-case.
//!
//! Reimplements the original project's `check_env` checks through the port
//! traits: host interpreter presence and version, environment presence, and
//! per-package import checks.

use std::path::Path;

use anyhow::Result;

use crate::application::ports::EnvProvisioner;
use crate::domain::env::{self, DEFAULT_PACKAGES};
use crate::domain::health::{
    DoctorChecks, EnvironmentChecks, InterpreterChecks, PackageCheck, version_matches_expected,
};

/// Run all diagnostics and assemble the check report.
///
/// Never fails on an unhealthy system — failing checks are recorded in the
/// returned report, not raised as errors.
///
/// # Errors
///
/// Returns an error only if a probe itself cannot be executed.
pub async fn run_checks(provisioner: &impl EnvProvisioner, dir: &Path) -> Result<DoctorChecks> {
    let interpreter = check_interpreter(provisioner).await;
    let env_python = provisioner.find_env_interpreter(dir);

    let environment = match env_python {
        Some(ref python) => {
            let pip_version = match provisioner.pip_version(python).await {
                Ok(out) if out.status.success() => {
                    env::parse_tool_version(&String::from_utf8_lossy(&out.stdout))
                        .map(|v| v.to_string())
                }
                _ => None,
            };
            EnvironmentChecks {
                exists: true,
                pip_version,
            }
        }
        None => EnvironmentChecks::default(),
    };

    let mut packages = Vec::with_capacity(DEFAULT_PACKAGES.len());
    for name in DEFAULT_PACKAGES {
        let installed = match env_python {
            Some(ref python) => provisioner
                .check_import(python, &env::import_name(name))
                .await
                .map(|out| out.status.success())
                .unwrap_or(false),
            None => false,
        };
        packages.push(PackageCheck {
            name: (*name).to_string(),
            installed,
        });
    }

    Ok(DoctorChecks {
        interpreter,
        environment,
        packages,
    })
}

async fn check_interpreter(provisioner: &impl EnvProvisioner) -> InterpreterChecks {
    let Some(name) = provisioner.discover().await else {
        return InterpreterChecks {
            found: false,
            name: None,
            version: None,
            version_ok: false,
        };
    };

    let version = match provisioner.version(&name).await {
        Ok(out) if out.status.success() => {
            // `python --version` historically printed to stderr; accept both.
            let text = if out.stdout.is_empty() {
                String::from_utf8_lossy(&out.stderr).to_string()
            } else {
                String::from_utf8_lossy(&out.stdout).to_string()
            };
            env::parse_tool_version(&text)
        }
        _ => None,
    };

    let version_ok = version.as_ref().is_some_and(version_matches_expected);
    InterpreterChecks {
        found: true,
        name: Some(name),
        version: version.map(|v| v.to_string()),
        version_ok,
    }
}
