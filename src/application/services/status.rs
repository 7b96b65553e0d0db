//! Application service — environment status use-case.

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::application::ports::EnvProvisioner;
use crate::domain::env;

/// Snapshot of the environment, assembled live from the filesystem and the
/// environment's own interpreter. There is no state file — the environment
/// directory is the only persisted artifact.
#[derive(Debug, Serialize)]
pub struct EnvStatus {
    /// Whether the environment exists (its interpreter was found).
    pub exists: bool,
    /// Environment directory as given.
    pub env_dir: String,
    /// Interpreter version inside the environment, if resolvable.
    pub python_version: Option<String>,
    /// pip version inside the environment, if resolvable.
    pub pip_version: Option<String>,
    /// Number of installed distributions (`pip list`), if resolvable.
    pub package_count: Option<usize>,
}

/// One row of `pip list --format json` output.
#[derive(Debug, Deserialize)]
struct PipListEntry {
    #[allow(dead_code)] // name is part of the pip schema; only the count is reported
    name: String,
}

/// Assemble the environment status report.
///
/// # Errors
///
/// Returns an error only if a probe itself cannot be executed.
pub async fn env_status(provisioner: &impl EnvProvisioner, dir: &Path) -> Result<EnvStatus> {
    let Some(python) = provisioner.find_env_interpreter(dir) else {
        return Ok(EnvStatus {
            exists: false,
            env_dir: dir.display().to_string(),
            python_version: None,
            pip_version: None,
            package_count: None,
        });
    };

    let python_version = match provisioner.version(&python.display().to_string()).await {
        Ok(out) if out.status.success() => {
            let text = if out.stdout.is_empty() {
                String::from_utf8_lossy(&out.stderr).to_string()
            } else {
                String::from_utf8_lossy(&out.stdout).to_string()
            };
            env::parse_tool_version(&text).map(|v| v.to_string())
        }
        _ => None,
    };

    let pip_version = match provisioner.pip_version(&python).await {
        Ok(out) if out.status.success() => {
            env::parse_tool_version(&String::from_utf8_lossy(&out.stdout)).map(|v| v.to_string())
        }
        _ => None,
    };

    let package_count = match provisioner.list_installed(&python).await {
        Ok(out) if out.status.success() => {
            serde_json::from_slice::<Vec<PipListEntry>>(&out.stdout)
                .ok()
                .map(|entries| entries.len())
        }
        _ => None,
    };

    Ok(EnvStatus {
        exists: true,
        env_dir: dir.display().to_string(),
        python_version,
        pip_version,
        package_count,
    })
}
