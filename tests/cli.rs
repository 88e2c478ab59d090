use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("kommit").unwrap()
}

#[test]
fn help_lists_dispatch_flags() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--copy"))
        .stdout(contains("--run"))
        .stdout(contains("--dry-run"));
}

#[test]
fn version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn types_in_display_order() {
    cmd().arg("types").assert().success().stdout(
        "  - feat\n  - fix\n  - test\n  - chore\n  - refactor\n  - docs\n  - style\n  - perf\n  - build\n  - ci\n  - revert\n",
    );
}

#[test]
fn completion_for_bash() {
    cmd()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(contains("kommit"));
}

#[test]
fn unknown_shell_is_rejected() {
    cmd().args(["completion", "cmd.exe"]).assert().failure();
}

#[test]
fn copy_and_run_conflict() {
    cmd().args(["--copy", "--run"]).assert().failure();
}

#[test]
fn no_terminal_aborts_without_committing() {
    let temp_dir = TempDir::new().unwrap();

    cmd()
        .current_dir(temp_dir.path())
        .arg("--run")
        .assert()
        .code(1)
        .stderr(contains("Prompt failed"))
        .stdout(contains("Committed").not());
}
