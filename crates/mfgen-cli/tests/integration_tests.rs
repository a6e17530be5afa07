//! Integration tests for mfgen-cli.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn mfgen() -> Command {
    Command::cargo_bin("mfgen").unwrap()
}

#[test]
fn help_flag() {
    mfgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag() {
    mfgen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn create_command_help() {
    mfgen()
        .args(["create", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--remote"))
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--skip-install"));
}

#[test]
fn create_full_workspace() {
    let temp = TempDir::new().unwrap();

    mfgen()
        .current_dir(temp.path())
        .args([
            "create",
            "shop",
            "--port",
            "3000",
            "--remote",
            "cart:3001",
            "--remote",
            "catalog:3002",
            "--yes",
            "--skip-install",
        ])
        .assert()
        .success();

    let shop = temp.path().join("shop");
    for file in [
        "package.json",
        "webpack.config.js",
        "tsconfig.json",
        "public/index.html",
        "src/index.tsx",
        "src/declarations.d.ts",
        "src/styles/main.scss",
        "cart/package.json",
        "cart/webpack.config.js",
        "cart/src/App.tsx",
        "cart/src/bootstrap.tsx",
        "catalog/webpack.config.js",
    ] {
        assert!(shop.join(file).exists(), "missing {file}");
    }

    // The host's remote entries and each microfrontend's dev-server port
    // must agree.
    let host = fs::read_to_string(shop.join("webpack.config.js")).unwrap();
    assert!(host.contains("'cart': 'cart@http://localhost:3001/remoteEntry.js',"));
    assert!(host.contains("'catalog': 'catalog@http://localhost:3002/remoteEntry.js',"));

    let cart = fs::read_to_string(shop.join("cart/webpack.config.js")).unwrap();
    assert!(cart.contains("port: 3001"));
    assert!(cart.contains("filename: 'remoteEntry.js'"));

    // The workspace manifest wires up start:all.
    let manifest = fs::read_to_string(shop.join("package.json")).unwrap();
    assert!(manifest.contains("start:all"));
}

#[test]
fn create_host_only_workspace() {
    let temp = TempDir::new().unwrap();

    mfgen()
        .current_dir(temp.path())
        .args(["create", "solo", "--yes", "--skip-install"])
        .assert()
        .success();

    let config = fs::read_to_string(temp.path().join("solo/webpack.config.js")).unwrap();
    assert!(config.contains("port: 3000"));
    assert!(!config.contains("remoteEntry.js"));
}

#[test]
fn duplicate_port_is_rejected() {
    let temp = TempDir::new().unwrap();

    mfgen()
        .current_dir(temp.path())
        .args([
            "create",
            "shop",
            "--port",
            "3000",
            "--remote",
            "cart:3000",
            "--yes",
            "--skip-install",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("3000"));

    assert!(!temp.path().join("shop").exists());
}

#[test]
fn duplicate_remote_name_is_rejected() {
    let temp = TempDir::new().unwrap();

    mfgen()
        .current_dir(temp.path())
        .args([
            "create",
            "shop",
            "--remote",
            "cart:3001",
            "--remote",
            "cart:3002",
            "--yes",
            "--skip-install",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cart"));
}

#[test]
fn invalid_workspace_name_is_rejected() {
    let temp = TempDir::new().unwrap();

    mfgen()
        .current_dir(temp.path())
        .args(["create", ".hidden", "--yes", "--skip-install"])
        .assert()
        .code(2);
}

#[test]
fn populated_target_directory_is_rejected() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("shop")).unwrap();
    fs::write(temp.path().join("shop/keep.txt"), "precious").unwrap();

    mfgen()
        .current_dir(temp.path())
        .args(["create", "shop", "--yes", "--skip-install"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    // The pre-existing file is untouched.
    assert_eq!(
        fs::read_to_string(temp.path().join("shop/keep.txt")).unwrap(),
        "precious"
    );
}

#[test]
fn dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();

    mfgen()
        .current_dir(temp.path())
        .args([
            "create",
            "shop",
            "--remote",
            "cart:3001",
            "--dry-run",
            "--skip-install",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!temp.path().join("shop").exists());
}

#[test]
fn dry_run_without_remote_flags_reads_no_input() {
    let temp = TempDir::new().unwrap();

    // No --yes and no --remote: the command must still complete without
    // waiting for prompt or confirmation input.
    mfgen()
        .current_dir(temp.path())
        .args(["create", "shop", "--dry-run", "--skip-install"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!temp.path().join("shop").exists());
}

#[test]
fn json_output_format_emits_json_lines() {
    let temp = TempDir::new().unwrap();

    let output = mfgen()
        .current_dir(temp.path())
        .args([
            "create",
            "shop",
            "--remote",
            "cart:3001",
            "--dry-run",
            "--skip-install",
            "--output-format",
            "json",
        ])
        .assert()
        .success()
        .get_output()
        .clone();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut saw_dry_run = false;
    for line in stdout.lines().filter(|l| !l.is_empty()) {
        let value: serde_json::Value =
            serde_json::from_str(line).unwrap_or_else(|_| panic!("not JSON: {line}"));
        assert!(value["level"].is_string(), "missing level in {line}");
        if value["message"]
            .as_str()
            .is_some_and(|m| m.contains("Dry run"))
        {
            saw_dry_run = true;
        }
    }
    assert!(saw_dry_run, "dry-run summary missing from JSON output");
}

#[test]
fn identical_invocations_produce_identical_trees() {
    let temp_a = TempDir::new().unwrap();
    let temp_b = TempDir::new().unwrap();

    for temp in [&temp_a, &temp_b] {
        mfgen()
            .current_dir(temp.path())
            .args([
                "create",
                "shop",
                "--remote",
                "cart:3001",
                "--yes",
                "--skip-install",
            ])
            .assert()
            .success();
    }

    for file in ["package.json", "webpack.config.js", "cart/webpack.config.js"] {
        let a = fs::read_to_string(temp_a.path().join("shop").join(file)).unwrap();
        let b = fs::read_to_string(temp_b.path().join("shop").join(file)).unwrap();
        assert_eq!(a, b, "{file} differs between runs");
    }
}

#[test]
fn config_list_prints_defaults() {
    mfgen()
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("host_port"));
}

#[test]
fn config_get_unknown_key_fails_with_config_exit_code() {
    mfgen()
        .args(["config", "get", "does.not.exist"])
        .assert()
        .code(4);
}

#[test]
fn completions_bash_generates_script() {
    mfgen()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mfgen"));
}
