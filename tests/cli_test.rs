//! End-to-end tests for the cb9 binary (stdout is a pipe here)

mod common;

use common::TestEnv;
use predicates::prelude::*;

// ===================
// Color gate tests
// ===================

#[test]
fn test_piped_output_is_plain() {
    let env = TestEnv::new();
    env.cmd()
        .args(["style", "hi", "--fg", "red"])
        .assert()
        .success()
        .stdout("hi\n");
}

#[test]
fn test_color_always_forces_escapes() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--color", "always", "style", "hi", "--fg", "red"])
        .assert()
        .success()
        .stdout("\x1b[31mhi\x1b[0m\n");
}

#[test]
fn test_config_color_mode_and_flag_override() {
    let env = TestEnv::new();
    env.write_config("color = \"always\"\n");

    env.cmd()
        .args(["style", "hi", "--fg", "green"])
        .assert()
        .success()
        .stdout("\x1b[32mhi\x1b[0m\n");

    env.cmd()
        .args(["--color", "never", "style", "hi", "--fg", "green"])
        .assert()
        .success()
        .stdout("hi\n");
}

// ===================
// Theme tests
// ===================

#[test]
fn test_themes_lists_all_and_marks_active() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--theme", "ocean", "themes"])
        .assert()
        .success()
        .stdout("  default\n* ocean\n  forest\n  sunset\n  mono\n");
}

#[test]
fn test_unknown_theme_fails() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--theme", "neon", "themes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown theme: neon"));
}

#[test]
fn test_role_uses_config_theme_and_overrides() {
    let env = TestEnv::new();
    env.write_config(
        "color = \"always\"\ntheme = \"forest\"\n\n[colors]\nwarning = \"#FF0000\"\n",
    );

    env.cmd()
        .args(["role", "success", "ok"])
        .assert()
        .success()
        .stdout("\x1b[92mok\x1b[0m\n");

    env.cmd()
        .args(["role", "warning", "careful"])
        .assert()
        .success()
        .stdout("\x1b[38;2;255;0;0mcareful\x1b[0m\n");
}

#[test]
fn test_unknown_role_fails() {
    let env = TestEnv::new();
    env.cmd()
        .args(["role", "bogus", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown theme role: bogus"));
}

// ===================
// Layout tests
// ===================

#[test]
fn test_banner_defaults_to_80_columns_when_piped() {
    let env = TestEnv::new();
    let rule = "-".repeat(80);
    env.cmd()
        .args(["banner", "Hello"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!("{rule}\n")))
        .stdout(predicate::str::ends_with(format!("{rule}\n")));
}

#[test]
fn test_banner_with_width_and_rule() {
    let env = TestEnv::new();
    env.cmd()
        .args(["banner", "Hi", "--width", "6", "--rule", "="])
        .assert()
        .success()
        .stdout("======\n  Hi  \n======\n");
}

#[test]
fn test_header_plain() {
    let env = TestEnv::new();
    env.cmd()
        .args(["header", "Demo", "v3.9", "--subtitle", "beta", "-w", "8"])
        .assert()
        .success()
        .stdout("--------\n  Demo v3.9 [beta]\n--------\n");
}

#[test]
fn test_header_without_version_uses_default() {
    let env = TestEnv::new();
    env.cmd()
        .args(["header", "Demo", "-w", "8"])
        .assert()
        .success()
        .stdout("--------\n  Demo v1.0\n--------\n");
}

#[test]
fn test_local_auto_overrides_global_always() {
    let env = TestEnv::new();
    let global = env.path.join("xdg").join("cb9");
    std::fs::create_dir_all(&global).unwrap();
    std::fs::write(global.join("config.toml"), "color = \"always\"\n").unwrap();
    env.write_config("color = \"auto\"\n");

    // auto hands control back to the probe, and stdout is a pipe
    env.cmd()
        .args(["style", "hi", "--fg", "red"])
        .assert()
        .success()
        .stdout("hi\n");
}

#[test]
fn test_preview_plain_has_no_escapes() {
    let env = TestEnv::new();
    env.cmd()
        .arg("preview")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bright Colors"))
        .stdout(predicate::str::contains("\x1b").not());
}

// ===================
// Argument validation tests
// ===================

#[test]
fn test_out_of_range_index_is_rejected() {
    let env = TestEnv::new();
    env.cmd()
        .args(["style", "x", "--fg", "256"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"));
}

#[test]
fn test_invalid_config_reports_error() {
    let env = TestEnv::new();
    env.write_config("color = [");
    env.cmd()
        .arg("themes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}
