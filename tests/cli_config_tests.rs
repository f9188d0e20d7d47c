//! End-to-end tests for `assetprep config` commands.

use std::fs;

mod fixtures;
use fixtures::*;

#[test]
fn test_config_show_defaults() {
    let config_dir = temp_config_dir();

    let output = isolated_command(&["config", "show"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Material Icons: (not configured)"));
    assert!(stdout.contains("Output Root: res/images"));
    assert!(stdout.contains("Density: 576"));
}

#[test]
fn test_config_show_json() {
    let config_dir = temp_config_dir();

    let output = isolated_command(&["config", "show", "--json"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let result: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    assert_eq!(result["paths"]["output_root"], "res/images");
    assert!(result["paths"].get("material_icons").is_none());
    assert_eq!(result["tools"]["convert"], "convert");
    assert_eq!(result["tools"]["mogrify"], "mogrify");
    assert_eq!(result["tools"]["density"], 576);
    assert!(result["config_file"]
        .as_str()
        .expect("config_file should be a string")
        .ends_with("config.toml"));
}

#[test]
fn test_config_set_persists() {
    let config_dir = temp_config_dir();
    let (base, _temp) = create_material_icons_checkout();

    let output = isolated_command(
        &[
            "config",
            "set",
            "--material-icons",
            base.to_str().unwrap(),
            "--density",
            "288",
            "--convert-bin",
            "magick-convert",
        ],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(config_dir.path().join("config.toml").exists());

    let show = isolated_command(&["config", "show", "--json"], config_dir.path())
        .output()
        .expect("Failed to execute command");
    let result: serde_json::Value =
        serde_json::from_slice(&show.stdout).expect("Should parse JSON output");

    assert_eq!(result["paths"]["material_icons"], base.to_str().unwrap());
    assert_eq!(result["tools"]["density"], 288);
    assert_eq!(result["tools"]["convert"], "magick-convert");
    assert_eq!(result["tools"]["mogrify"], "mogrify");
}

#[test]
fn test_config_set_requires_an_option() {
    let config_dir = temp_config_dir();

    let output = isolated_command(&["config", "set"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(!config_dir.path().join("config.toml").exists());
}

#[test]
fn test_config_set_rejects_missing_icons_dir() {
    let config_dir = temp_config_dir();
    let missing = config_dir.path().join("nowhere");

    let output = isolated_command(
        &["config", "set", "--material-icons", missing.to_str().unwrap()],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_config_set_rejects_zero_density() {
    let config_dir = temp_config_dir();

    let output = isolated_command(&["config", "set", "--density", "0"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_config_show_invalid_file() {
    let config_dir = temp_config_dir();
    fs::write(config_dir.path().join("config.toml"), "[tools]\ndensity = \"high\"\n")
        .expect("Failed to write config");

    let output = isolated_command(&["config", "show"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(1),
        "Unparseable config should exit with code 1 (validation error)"
    );
}

#[test]
fn test_moved_checkout_keeps_saved_settings() {
    let config_dir = temp_config_dir();
    let (stale, stale_temp) = create_material_icons_checkout();
    let (fresh, _fresh_temp) = create_material_icons_checkout();

    let set = isolated_command(
        &[
            "config",
            "set",
            "--material-icons",
            stale.to_str().unwrap(),
            "--density",
            "288",
        ],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");
    assert_eq!(set.status.code(), Some(0));

    fs::remove_dir_all(&stale).expect("Failed to remove checkout");

    // An explicit base directory works despite the stale configured one
    let dry_run = isolated_command(
        &["md-icons", fresh.to_str().unwrap(), "--dry-run"],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");
    assert_eq!(
        dry_run.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&dry_run.stderr)
    );
    assert!(String::from_utf8_lossy(&dry_run.stdout).contains("-density 288 "));

    // Doctor reports the checkout as missing rather than unconfigured
    let doctor = isolated_command(&["doctor", "--json"], config_dir.path())
        .output()
        .expect("Failed to execute command");
    let report: serde_json::Value =
        serde_json::from_slice(&doctor.stdout).expect("Should parse JSON output");
    let material_icons = report["dependencies"]
        .as_array()
        .expect("dependencies should be an array")
        .iter()
        .find(|dep| dep["name"] == "Material Icons")
        .expect("Material Icons check should be reported");
    assert_eq!(material_icons["status"], "missing");
    assert_eq!(doctor.status.code(), Some(1));

    // Setting another value keeps everything else that was saved
    let update = isolated_command(&["config", "set", "--output-root", "out"], config_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(
        update.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&update.stderr)
    );

    let show = isolated_command(&["config", "show", "--json"], config_dir.path())
        .output()
        .expect("Failed to execute command");
    let result: serde_json::Value =
        serde_json::from_slice(&show.stdout).expect("Should parse JSON output");
    assert_eq!(result["paths"]["output_root"], "out");
    assert_eq!(result["paths"]["material_icons"], stale.to_str().unwrap());
    assert_eq!(result["tools"]["density"], 288);

    drop(stale_temp);
}
