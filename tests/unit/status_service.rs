//! Unit tests for the status service — mocked provisioner, no I/O.

#![allow(clippy::expect_used)]

use std::path::Path;

use venvup::application::services::status::env_status;

use crate::mocks::MockProvisioner;

#[tokio::test]
async fn test_existing_environment_reports_versions_and_count() {
    let mock = MockProvisioner {
        pip_list_json: r#"[{"name":"pip","version":"24.0"},{"name":"pandas","version":"2.2.0"},{"name":"numpy","version":"1.26.4"}]"#,
        ..MockProvisioner::default()
    }
    .with_env();

    let status = env_status(&mock, Path::new("venv")).await.expect("status runs");

    assert!(status.exists);
    assert_eq!(status.env_dir, "venv");
    assert_eq!(status.python_version.as_deref(), Some("3.11.4"));
    assert_eq!(status.pip_version.as_deref(), Some("24.0.0"));
    assert_eq!(status.package_count, Some(3));
}

#[tokio::test]
async fn test_missing_environment_reports_exists_false() {
    let mock = MockProvisioner::default();

    let status = env_status(&mock, Path::new("venv")).await.expect("status runs");

    assert!(!status.exists);
    assert!(status.python_version.is_none());
    assert!(status.pip_version.is_none());
    assert!(status.package_count.is_none());
}

#[tokio::test]
async fn test_status_serializes_to_json() {
    let mock = MockProvisioner::default().with_env();

    let status = env_status(&mock, Path::new("venv")).await.expect("status runs");
    let json = serde_json::to_value(&status).expect("serializes");

    assert_eq!(json["exists"], true);
    assert_eq!(json["env_dir"], "venv");
    assert!(json["python_version"].is_string());
}
