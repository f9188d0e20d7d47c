//! End-to-end tests for `assetprep doctor` command.

mod fixtures;
use fixtures::*;

#[test]
fn test_doctor_json_reports_missing_tools() {
    let config_dir = temp_config_dir();

    let set = isolated_command(
        &[
            "config",
            "set",
            "--convert-bin",
            "assetprep-no-such-convert",
            "--mogrify-bin",
            "assetprep-no-such-mogrify",
        ],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");
    assert_eq!(set.status.code(), Some(0));

    let output = isolated_command(&["doctor", "--json"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(1),
        "Missing tools should exit with code 1"
    );

    let result: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    assert_eq!(result["status"], "missing_dependencies");
    assert_eq!(result["failed"], 2);
    assert_eq!(result["unknown"], 1);

    let dependencies = result["dependencies"]
        .as_array()
        .expect("dependencies should be an array");
    assert_eq!(dependencies.len(), 3);
    assert_eq!(dependencies[0]["status"], "missing");
    assert!(dependencies[0]["installation_hint"].is_string());
    assert_eq!(dependencies[2]["name"], "Material Icons");
    assert_eq!(dependencies[2]["status"], "unknown");
}

#[test]
fn test_doctor_detects_checkout() {
    let config_dir = temp_config_dir();
    let (base, _temp) = create_material_icons_checkout();

    let set = isolated_command(
        &[
            "config",
            "set",
            "--material-icons",
            base.to_str().unwrap(),
            "--convert-bin",
            "assetprep-no-such-convert",
        ],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");
    assert_eq!(set.status.code(), Some(0));

    let output = isolated_command(&["doctor", "--json"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    let result: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    let dependencies = result["dependencies"]
        .as_array()
        .expect("dependencies should be an array");
    assert_eq!(dependencies[2]["status"], "available");
}
