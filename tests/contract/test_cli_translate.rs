// Contract test for the `pkgtrans` command line

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use assert_cmd::Command;
use predicates::prelude::*;

const TABLE: &str = r#"[
    {
        "ubuntu": {"name": "build-essential", "repo": "main"},
        "archlinux": {"name": "base-devel", "repo": "core", "AUR": false}
    },
    {
        "ubuntu": {"name": "spotify-client", "repo": "spotify"},
        "archlinux": {"name": "spotify", "repo": "aur", "AUR": true},
        "nix": {"name": "spotify", "repo": "nixpkgs"}
    }
]"#;

fn write_table(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("translations.json");
    fs::write(&path, content).unwrap();
    path
}

/// A command isolated from the user's config file and environment
fn pkgtrans(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pkgtrans").unwrap();
    cmd.env("XDG_CONFIG_HOME", dir.path())
        .env("HOME", dir.path())
        .env_remove("PKGTRANS_TABLE")
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn test_translate_single_package() {
    let temp_dir = TempDir::new().unwrap();
    let table = write_table(&temp_dir, TABLE);

    pkgtrans(&temp_dir)
        .args(["ubuntu", "build-essential build-essential curl", "--table"])
        .arg(&table)
        .assert()
        .success()
        .stdout(predicate::str::contains("====== Command for ARCHLINUX ======"))
        .stdout(predicate::str::contains(" # pacman -S base-devel\n"))
        .stdout(predicate::str::contains("No known translation for package 'curl'. Skipping."))
        .stdout(predicate::str::contains("UBUNTU").not());
}

#[test]
fn test_translate_routes_aur_packages() {
    let temp_dir = TempDir::new().unwrap();
    let table = write_table(&temp_dir, TABLE);

    pkgtrans(&temp_dir)
        .args(["ubuntu", "build-essential spotify-client", "--table"])
        .arg(&table)
        .assert()
        .success()
        .stdout(predicate::str::contains(" # pacman -S base-devel\n # yay -S spotify\n"))
        .stdout(predicate::str::contains(" # nix-env -i spotify\n"));
}

#[test]
fn test_table_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    let table = write_table(&temp_dir, TABLE);

    pkgtrans(&temp_dir)
        .env("PKGTRANS_TABLE", &table)
        .args(["archlinux", "base-devel"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" # apt install build-essential"));
}

#[test]
fn test_table_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let table = write_table(&temp_dir, TABLE);
    let config_dir = temp_dir.path().join("pkgtrans");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        format!("table = {:?}\n", table.display().to_string()),
    )
    .unwrap();

    pkgtrans(&temp_dir)
        .args(["archlinux", "base-devel"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" # apt install build-essential"));
}

#[test]
fn test_invalid_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join("pkgtrans");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "verbose = \"yes please\"\n").unwrap();

    pkgtrans(&temp_dir)
        .args(["ubuntu", "make"])
        .assert()
        .code(78)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let table = write_table(&temp_dir, TABLE);

    let output = pkgtrans(&temp_dir)
        .args(["ubuntu", "spotify-client curl", "--json", "--table"])
        .arg(&table)
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["source"], "ubuntu");
    assert_eq!(value["plans"][0]["auxiliary_command"], "yay -S spotify");
    assert_eq!(value["plans"][1]["command"], "nix-env -i spotify");
    assert_eq!(value["unresolved"], serde_json::json!(["curl"]));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("No known translation for package 'curl'. Skipping."));
}

#[test]
fn test_json_output_with_verbose_diagnostics() {
    let temp_dir = TempDir::new().unwrap();
    let table = write_table(&temp_dir, TABLE);

    let output = pkgtrans(&temp_dir)
        .args(["-v", "ubuntu", "build-essential", "--json", "--table"])
        .arg(&table)
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["plans"][0]["command"], "pacman -S base-devel");
    assert!(String::from_utf8(output.stderr).unwrap().contains("Translating build-essential"));
}

const TABLE_WITHOUT_UBUNTU_ENTRY: &str = r#"[
    {
        "ubuntu": {"name": "build-essential", "repo": "main"},
        "archlinux": {"name": "base-devel", "repo": "core", "AUR": false}
    },
    {
        "archlinux": {"name": "yay", "repo": "aur", "AUR": true}
    }
]"#;

#[test]
fn test_record_without_source_entry_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let table = write_table(&temp_dir, TABLE_WITHOUT_UBUNTU_ENTRY);

    pkgtrans(&temp_dir)
        .args(["ubuntu", "build-essential", "--table"])
        .arg(&table)
        .assert()
        .success()
        .stdout(predicate::str::contains("Translation record #1 has no 'ubuntu' entry. Skipping."))
        .stdout(predicate::str::contains(" # pacman -S base-devel\n"))
        .stdout(predicate::str::contains("yay").not());
}

#[test]
fn test_record_without_source_entry_is_reported_on_stderr_for_json() {
    let temp_dir = TempDir::new().unwrap();
    let table = write_table(&temp_dir, TABLE_WITHOUT_UBUNTU_ENTRY);

    let output = pkgtrans(&temp_dir)
        .args(["ubuntu", "build-essential", "--json", "--table"])
        .arg(&table)
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["plans"].as_array().unwrap().len(), 1);
    assert!(String::from_utf8(output.stderr).unwrap().contains("has no 'ubuntu' entry"));
}

#[test]
fn test_verbose_shows_debug_diagnostics() {
    let temp_dir = TempDir::new().unwrap();
    let table = write_table(&temp_dir, TABLE);

    pkgtrans(&temp_dir)
        .args(["-v", "ubuntu", "build-essential", "--table"])
        .arg(&table)
        .assert()
        .success()
        .stdout(predicate::str::contains("Translating build-essential"))
        .stdout(predicate::str::contains("Translation index built"));
}

#[test]
fn test_quiet_hides_debug_diagnostics() {
    let temp_dir = TempDir::new().unwrap();
    let table = write_table(&temp_dir, TABLE);

    pkgtrans(&temp_dir)
        .args(["ubuntu", "build-essential", "--table"])
        .arg(&table)
        .assert()
        .success()
        .stdout(predicate::str::contains("Translating build-essential").not());
}

#[test]
fn test_empty_package_list_prints_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let table = write_table(&temp_dir, TABLE);

    pkgtrans(&temp_dir)
        .args(["ubuntu", "", "--table"])
        .arg(&table)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_unknown_packages_do_not_fail() {
    let temp_dir = TempDir::new().unwrap();
    let table = write_table(&temp_dir, TABLE);

    pkgtrans(&temp_dir)
        .args(["ubuntu", "foo bar", "--table"])
        .arg(&table)
        .assert()
        .success()
        .stdout(predicate::str::contains("'foo'"))
        .stdout(predicate::str::contains("'bar'"))
        .stdout(predicate::str::contains("Command for").not());
}

#[test]
fn test_unknown_source_ecosystem() {
    let temp_dir = TempDir::new().unwrap();
    let table = write_table(&temp_dir, TABLE);

    pkgtrans(&temp_dir)
        .args(["fedora", "make", "--table"])
        .arg(&table)
        .assert()
        .code(64)
        .stderr(predicate::str::contains("Unsupported source ecosystem 'fedora'"))
        .stderr(predicate::str::contains("ubuntu, archlinux, nix"));
}

#[test]
fn test_malformed_table() {
    let temp_dir = TempDir::new().unwrap();
    let table = write_table(&temp_dir, "[{\"ubuntu\": ");

    pkgtrans(&temp_dir)
        .args(["ubuntu", "make", "--table"])
        .arg(&table)
        .assert()
        .code(65)
        .stdout(predicate::str::contains("Invalid JSON"))
        .stderr(predicate::str::contains("Invalid JSON in translation table"));
}

#[test]
fn test_missing_table() {
    let temp_dir = TempDir::new().unwrap();

    pkgtrans(&temp_dir)
        .args(["ubuntu", "make", "--table"])
        .arg(temp_dir.path().join("nope.json"))
        .assert()
        .code(65)
        .stderr(predicate::str::contains("Failed to read translation table"));
}

#[test]
fn test_missing_package_list() {
    let temp_dir = TempDir::new().unwrap();

    pkgtrans(&temp_dir)
        .arg("ubuntu")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<package-list>"));
}
