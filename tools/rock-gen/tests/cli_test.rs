//! Tests for the rock-o-matic binary

use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn rock_o_matic(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rock-o-matic"))
        .args(args)
        .output()
        .expect("Failed to run rock-o-matic")
}

fn generate_json(args: &[&str]) -> serde_json::Value {
    let mut full = vec!["generate", "--json"];
    full.extend_from_slice(args);

    let output = rock_o_matic(&full);
    assert!(
        output.status.success(),
        "rock-o-matic failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("Output is not JSON")
}

fn object_names(report: &serde_json::Value) -> Vec<String> {
    report["objects"]
        .as_array()
        .expect("objects should be an array")
        .iter()
        .map(|obj| obj["name"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[test]
fn test_generate_json() {
    let report = generate_json(&[
        "--recipe",
        "toon",
        "--base",
        "icosphere",
        "--size",
        "2.5",
        "--scale-direction",
        "1,1,1",
        "--scale-factor",
        "1",
        "--seed",
        "3",
    ]);

    assert_eq!(report["seed"], 3);
    assert_eq!(object_names(&report), ["Rock"]);
    assert_eq!(report["rock"]["recipe"], "toon");
    assert_eq!(report["rock"]["params"]["size"], 2.5);
    assert_eq!(report["objects"][0]["operations"].as_array().map(Vec::len), Some(4));
}

#[test]
fn test_repeat_keeps_one_rock() {
    let report = generate_json(&["--low-poly", "--repeat", "4", "--seed", "1"]);

    assert_eq!(object_names(&report), ["Rock", "Rock_LowPoly"]);
    assert_eq!(report["objects"][1]["hidden"], true);
}

#[test]
fn test_same_seed_same_output() {
    let a = generate_json(&["--recipe", "eroded", "--seed", "42"]);
    let b = generate_json(&["--recipe", "eroded", "--seed", "42"]);
    assert_eq!(a, b);
}

#[test]
fn test_config_file_and_override() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config_path = dir.path().join("rock.toml");
    std::fs::write(
        &config_path,
        "seed = 5\n\n[rock]\nrecipe = \"boulder\"\nsize = 4.0\n\n[generator]\nprefix = \"Pebble\"\n",
    )
    .expect("Failed to write config");

    let report = generate_json(&["--config", config_path.to_str().unwrap(), "--size", "2"]);

    assert_eq!(report["seed"], 5);
    assert_eq!(report["rock"]["recipe"], "boulder");
    assert_eq!(report["rock"]["params"]["size"], 2.0);
    assert_eq!(object_names(&report), ["Pebble"]);
}

#[test]
fn test_no_low_poly_overrides_config() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config_path = dir.path().join("rock.toml");
    std::fs::write(&config_path, "[rock]\nlow_poly = true\n").expect("Failed to write config");
    let config = config_path.to_str().unwrap();

    let report = generate_json(&["--config", config, "--seed", "2"]);
    assert_eq!(object_names(&report), ["Rock", "Rock_LowPoly"]);

    let report = generate_json(&["--config", config, "--seed", "2", "--no-low-poly"]);
    assert_eq!(object_names(&report), ["Rock"]);
    assert!(report["rock"]["low_poly"].is_null());
}

#[test]
fn test_empty_prefix_config_fails() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config_path = dir.path().join("rock.toml");
    std::fs::write(&config_path, "[generator]\nprefix = \"\"\ncleanup = \"prefix\"\n")
        .expect("Failed to write config");

    let output = rock_o_matic(&["generate", "--config", config_path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("prefix must not be empty"));
}

#[test]
fn test_obj_export() {
    let dir = tempdir().expect("Failed to create temp dir");
    let obj_path = dir.path().join("rock.obj");

    generate_json(&["--base", "cube", "--seed", "9", "--obj", obj_path.to_str().unwrap()]);
    verify_obj(&obj_path, 8, 12);
}

#[test]
fn test_unknown_recipe_fails() {
    let output = rock_o_matic(&["generate", "--recipe", "granite"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("granite"));
}

#[test]
fn test_recipes_lists_everything() {
    let output = rock_o_matic(&["recipes"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for id in ["generic", "eroded", "boulder", "toon", "cube", "icosphere", "uv_sphere"] {
        assert!(stdout.contains(id), "missing {}", id);
    }
}

fn verify_obj(path: &Path, vertices: usize, faces: usize) {
    let text = std::fs::read_to_string(path).expect("Failed to read OBJ");
    assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), vertices);
    assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), faces);
    assert!(text.lines().any(|l| l == "o Rock"));
}
