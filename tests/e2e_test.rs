/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

// Exit code tests for CLI
mod exit_code_tests {
    use assert_cmd::cargo::cargo_bin_cmd;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("bomsource").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("bomsource").arg("--version").assert().code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("bomsource")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Unknown subcommand
    #[test]
    fn test_exit_code_unknown_subcommand() {
        cargo_bin_cmd!("bomsource").arg("frobnicate").assert().code(2);
    }

    /// Exit code 3: Application error - project file does not exist
    #[test]
    fn test_exit_code_missing_project_file() {
        let dir = tempfile::tempdir().unwrap();
        cargo_bin_cmd!("bomsource")
            .current_dir(dir.path())
            .args(["-p", "missing.json", "totals"])
            .assert()
            .code(3);
    }
}

fn project_arg(dir: &TempDir) -> String {
    dir.path().join("bom.json").to_string_lossy().into_owned()
}

#[test]
fn test_e2e_init_creates_project_file() {
    let dir = tempfile::tempdir().unwrap();
    let project = project_arg(&dir);

    cargo_bin_cmd!("bomsource")
        .args(["-p", &project, "init", "--name", "amp-board"])
        .assert()
        .code(0);

    assert!(dir.path().join("bom.json").exists());

    // A second init must refuse to clobber the existing file
    cargo_bin_cmd!("bomsource")
        .args(["-p", &project, "init", "--name", "amp-board"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_e2e_add_list_totals_workflow() {
    let dir = tempfile::tempdir().unwrap();
    let project = project_arg(&dir);

    cargo_bin_cmd!("bomsource")
        .args(["-p", &project, "init", "--name", "amp-board"])
        .assert()
        .code(0);

    cargo_bin_cmd!("bomsource")
        .args([
            "-p",
            &project,
            "add",
            "--mouser",
            "595-NE555P",
            "--jlcpcb",
            "C7593",
            "--description",
            "Timer IC",
            "--quantity",
            "25",
        ])
        .assert()
        .code(0);

    cargo_bin_cmd!("bomsource")
        .args(["-p", &project, "list"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Timer IC"))
        .stdout(predicate::str::contains("595-NE555P"))
        .stdout(predicate::str::contains("x25"));

    // No refresh has run, so every vendor cell is unknown and totals are zero
    cargo_bin_cmd!("bomsource")
        .args(["-p", &project, "totals"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("MOUSER: 0.00"))
        .stdout(predicate::str::contains("HYBRID"));
}

#[test]
fn test_e2e_add_requires_part_number() {
    let dir = tempfile::tempdir().unwrap();
    let project = project_arg(&dir);

    cargo_bin_cmd!("bomsource")
        .args(["-p", &project, "init", "--name", "amp-board"])
        .assert()
        .code(0);

    cargo_bin_cmd!("bomsource")
        .args(["-p", &project, "add", "--description", "no part numbers"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("part number"));
}

#[test]
fn test_e2e_remove_by_id_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let project = project_arg(&dir);

    cargo_bin_cmd!("bomsource")
        .args(["-p", &project, "init", "--name", "amp-board"])
        .assert()
        .code(0);

    cargo_bin_cmd!("bomsource")
        .args(["-p", &project, "add", "--mouser", "595-NE555P"])
        .assert()
        .code(0);

    // Read the generated id back out of the project file
    let raw = std::fs::read_to_string(dir.path().join("bom.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let id = parsed["components"][0]["id"].as_str().unwrap().to_string();

    cargo_bin_cmd!("bomsource")
        .args(["-p", &project, "remove", &id[..8]])
        .assert()
        .code(0);

    cargo_bin_cmd!("bomsource")
        .args(["-p", &project, "remove", "deadbeef"])
        .assert()
        .code(3);
}
