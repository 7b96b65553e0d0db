//! Unit tests for the doctor service — mocked provisioner, no I/O.

#![allow(clippy::expect_used)]

use std::path::Path;

use venvup::application::services::doctor::run_checks;
use venvup::domain::health::collect_issues;

use crate::mocks::MockProvisioner;

#[tokio::test]
async fn test_healthy_environment_reports_no_issues() {
    let mock = MockProvisioner::default().with_env();

    let checks = run_checks(&mock, Path::new("venv")).await.expect("checks run");

    assert!(checks.interpreter.found);
    assert_eq!(checks.interpreter.version.as_deref(), Some("3.11.4"));
    assert!(checks.interpreter.version_ok);
    assert!(checks.environment.exists);
    assert_eq!(checks.environment.pip_version.as_deref(), Some("24.0.0"));
    assert!(checks.packages.iter().all(|p| p.installed));
    assert!(collect_issues(&checks).is_empty());
}

#[tokio::test]
async fn test_missing_package_reported_with_remediation() {
    let mock = MockProvisioner {
        importable: &["pandas", "numpy"],
        ..MockProvisioner::default()
    }
    .with_env();

    let checks = run_checks(&mock, Path::new("venv")).await.expect("checks run");

    let matplotlib = checks
        .packages
        .iter()
        .find(|p| p.name == "matplotlib")
        .expect("matplotlib checked");
    assert!(!matplotlib.installed);

    let issues = collect_issues(&checks);
    assert_eq!(issues.len(), 1);
    assert!(issues[0].contains("pip install matplotlib"), "{issues:?}");
}

#[tokio::test]
async fn test_missing_environment_fails_all_package_checks() {
    let mock = MockProvisioner::default();

    let checks = run_checks(&mock, Path::new("venv")).await.expect("checks run");

    assert!(!checks.environment.exists);
    assert!(checks.environment.pip_version.is_none());
    assert!(checks.packages.iter().all(|p| !p.installed));
    let issues = collect_issues(&checks);
    assert!(
        issues.iter().any(|i| i.contains("venvup up")),
        "missing remediation hint"
    );
    // The pip remediation is useless without an environment to run it in.
    assert!(!issues.iter().any(|i| i.contains("pip install")), "{issues:?}");
    // No import probes without an environment interpreter.
    assert!(!mock.recorded().iter().any(|c| c.starts_with("import")));
}

#[tokio::test]
async fn test_wrong_minor_version_is_flagged_but_not_an_issue() {
    let mock = MockProvisioner {
        python_version: "Python 3.12.1",
        ..MockProvisioner::default()
    }
    .with_env();

    let checks = run_checks(&mock, Path::new("venv")).await.expect("checks run");

    assert!(checks.interpreter.found);
    assert!(!checks.interpreter.version_ok);
    assert!(collect_issues(&checks).is_empty());
}

#[tokio::test]
async fn test_no_interpreter_is_an_issue() {
    let mock = MockProvisioner {
        interpreter: None,
        ..MockProvisioner::default()
    };

    let checks = run_checks(&mock, Path::new("venv")).await.expect("checks run");

    assert!(!checks.interpreter.found);
    assert!(
        collect_issues(&checks)
            .iter()
            .any(|i| i.contains("No Python interpreter")),
        "missing interpreter issue"
    );
}
