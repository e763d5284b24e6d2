use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn boar(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("boar").unwrap();
    cmd.env("BOAR_HOME", home).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_first_run_creates_defaults_and_lists_template() {
    let temp = tempfile::tempdir().unwrap();
    let home = temp.path().join("data");

    boar(&home)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("BOAR - Book Of All References\n"))
        .stdout(predicate::str::contains("1   Template Category  (temp)"))
        .stdout(predicate::str::contains("link: https://example.com"));

    assert!(home.join("book").is_file());
    assert!(home.join("conf").is_file());
    assert!(home.join("history").is_dir());
}

#[test]
fn test_init_reports_once() {
    let temp = tempfile::tempdir().unwrap();

    boar(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    boar(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already set up"));
}

#[test]
fn test_add_edit_remove_undo_roundtrip() {
    let temp = tempfile::tempdir().unwrap();
    let home = temp.path();

    boar(home)
        .args(["addcat", "Command", "Line"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(comm)"));

    boar(home)
        .args(["add", "comm", "ripgrep", "--desc", "fast grep", "--link", "https://rg.dev"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2.1"));

    boar(home)
        .args(["ls", "comm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2.1  - ripgrep [L] : fast grep"))
        .stdout(predicate::str::contains("link: https://rg.dev"))
        .stdout(predicate::str::contains("Template Category").not());

    boar(home)
        .args(["edit", "2.1", "--desc", "cl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fast grep -> None"));

    boar(home)
        .args(["rm", "comm", "ripgrep"])
        .assert()
        .success();

    boar(home)
        .args(["history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tome4"));

    boar(home).args(["undo", "2"]).assert().success();

    boar(home)
        .args(["ls", "comm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ripgrep [L] : fast grep"));
}

#[test]
fn test_prompts_read_from_stdin() {
    let temp = tempfile::tempdir().unwrap();
    let home = temp.path();

    boar(home)
        .arg("add")
        .write_stdin("temp\nfd\nfind files\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Item name: "))
        .stdout(predicate::str::contains("1.3"));

    boar(home)
        .args(["ls", "temp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.3  - fd : find files"));
}

#[test]
fn test_blank_prompt_aborts_cleanly() {
    let temp = tempfile::tempdir().unwrap();

    boar(temp.path())
        .arg("addcat")
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted"));
}

#[test]
fn test_no_changes_exits_zero() {
    let temp = tempfile::tempdir().unwrap();

    boar(temp.path())
        .args(["edit", "temp.1", "--name", "Template entry 1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes made"));
}

#[test]
fn test_errors_exit_one() {
    let temp = tempfile::tempdir().unwrap();
    let home = temp.path();

    boar(home)
        .args(["ls", "nope"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("nope"));

    boar(home)
        .args(["addcat", "template", "category"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    boar(home)
        .args(["undo", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tome2"));

    boar(home)
        .args(["undo", "zero"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive integer"));
}

#[test]
fn test_export_writes_html() {
    let temp = tempfile::tempdir().unwrap();
    let home = temp.path();

    boar(home)
        .args(["export", "dark"])
        .assert()
        .success()
        .stdout(predicate::str::contains("boar.html"));

    let html = std::fs::read_to_string(home.join("boar.html")).unwrap();
    assert!(html.contains("#111"));
    assert!(html.contains("Template entry 1"));

    boar(home)
        .args(["export", "sepia"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sepia"));
}

#[test]
fn test_config_changes_listing() {
    let temp = tempfile::tempdir().unwrap();
    let home = temp.path();

    boar(home)
        .args(["config", "max-display", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("15 -> 1"));

    // Over the limit only categories are shown, the show-all word forces items.
    boar(home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Template entry 1").not());
    boar(home)
        .args(["ls", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Template entry 1"));

    boar(home)
        .args(["config", "history-length", "-3"])
        .assert()
        .failure();
    boar(home)
        .args(["config", "colour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("colour"));
}

#[test]
fn test_reset_with_yes() {
    let temp = tempfile::tempdir().unwrap();
    let home = temp.path();

    boar(home).args(["rmcat", "temp"]).assert().success();
    boar(home)
        .assert()
        .success()
        .stdout(predicate::str::contains("No items to show."));

    boar(home)
        .arg("reset")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted"));

    boar(home).args(["reset", "-y"]).assert().success();
    boar(home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Template Category"));

    // The emptied book is still one undo away.
    boar(home).arg("undo").assert().success();
    boar(home)
        .assert()
        .success()
        .stdout(predicate::str::contains("No items to show."));
}

#[test]
fn test_nocolor_flag_accepted_anywhere() {
    let temp = tempfile::tempdir().unwrap();

    boar(temp.path())
        .args(["-c", "lscat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());
    boar(temp.path())
        .args(["lscat", "--nocolor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(temp)"));
}
