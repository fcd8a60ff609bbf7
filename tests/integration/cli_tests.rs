//! Command-line tests against the shellcfg binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// Binary isolated from the real home and settings directories
fn shellcfg(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("shellcfg").unwrap();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("SHELLCFG_LOG");
    cmd
}

fn setup(content: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".bashrc");
    fs::write(&rc_file, content).unwrap();
    (dir, rc_file)
}

fn backups_of(rc_file: &Path) -> usize {
    let prefix = format!(
        "{}.backup.",
        rc_file.file_name().unwrap().to_string_lossy()
    );
    fs::read_dir(rc_file.parent().unwrap())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().starts_with(&prefix))
        .count()
}

#[test]
fn test_list_command() {
    let (dir, rc_file) = setup("alias ll='ls -la'\nalias gs='git status'\nexport EDITOR=nvim\n");

    shellcfg(dir.path())
        .args(["--file", rc_file.to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ll"))
        .stdout(predicate::str::contains("gs"))
        .stdout(predicate::str::contains("EDITOR"));
}

#[test]
fn test_list_alias_only() {
    let (dir, rc_file) = setup("alias ll='ls -la'\nexport EDITOR=nvim\n");

    shellcfg(dir.path())
        .args(["--file", rc_file.to_str().unwrap(), "list", "alias"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ll"))
        .stdout(predicate::str::contains("EDITOR").not());
}

#[test]
fn test_list_json() {
    let (dir, rc_file) = setup("export B=2 # note\n");

    let output = shellcfg(dir.path())
        .args(["-f", rc_file.to_str().unwrap(), "ls", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["kind"], "Variable");
    assert_eq!(json[0]["name"], "B");
    assert_eq!(json[0]["comment"], "note");
    assert_eq!(json[0]["is_export"], true);
}

#[test]
fn test_missing_file_fails() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join(".bashrc");

    shellcfg(dir.path())
        .args(["-f", missing.to_str().unwrap(), "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_add_var_appends_and_backs_up() {
    let (dir, rc_file) = setup("alias ll='ls -la'");

    shellcfg(dir.path())
        .args(["-f", rc_file.to_str().unwrap(), "add", "var", "EDITOR=nvim", "--export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added var 'EDITOR' at line 2"));

    assert_eq!(
        fs::read_to_string(&rc_file).unwrap(),
        "alias ll='ls -la'\nexport EDITOR=\"nvim\"\n"
    );
    assert_eq!(backups_of(&rc_file), 1);
}

#[test]
fn test_add_alias_after_line_without_backup() {
    let (dir, rc_file) = setup("A=1\nB=2\n");

    shellcfg(dir.path())
        .args([
            "-f",
            rc_file.to_str().unwrap(),
            "--no-backup",
            "add",
            "alias",
            "gs=git status",
            "--after",
            "0",
            "--comment",
            "short",
        ])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&rc_file).unwrap(),
        "alias gs='git status'  # short\nA=1\nB=2\n"
    );
    assert_eq!(backups_of(&rc_file), 0);
}

#[test]
fn test_add_duplicate_with_yes() {
    let (dir, rc_file) = setup("alias ll='ls -la'\n");

    shellcfg(dir.path())
        .args(["-f", rc_file.to_str().unwrap(), "-y", "--no-backup", "add", "a", "ll=ls -l"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists at line 1"));

    assert_eq!(
        fs::read_to_string(&rc_file).unwrap(),
        "alias ll='ls -la'\nalias ll='ls -l'\n"
    );
}

#[test]
fn test_add_invalid_definition() {
    let (dir, rc_file) = setup("");

    shellcfg(dir.path())
        .args(["-f", rc_file.to_str().unwrap(), "add", "var", "NOEQUALS"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expected NAME=VALUE"));
}

#[test]
fn test_add_function_with_body() {
    let (dir, rc_file) = setup("A=1\n");

    shellcfg(dir.path())
        .args([
            "-f",
            rc_file.to_str().unwrap(),
            "--no-backup",
            "add",
            "func",
            "greet",
            "--body",
            "  echo hello",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("at line 2-4"));

    assert_eq!(
        fs::read_to_string(&rc_file).unwrap(),
        "A=1\ngreet() {\n  echo hello\n}\n"
    );
}

#[test]
fn test_update_value() {
    let (dir, rc_file) = setup("export EDITOR=vim\nalias ll='ls -la'\n");

    shellcfg(dir.path())
        .args(["-f", rc_file.to_str().unwrap(), "--no-backup", "update", "1", "--value", "nvim"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated var 'EDITOR'"));

    assert_eq!(
        fs::read_to_string(&rc_file).unwrap(),
        "export EDITOR=\"nvim\"\nalias ll='ls -la'\n"
    );
}

#[test]
fn test_update_function_keeps_body() {
    let (dir, rc_file) = setup("greet() {\n  echo hi\n}\nA=1\n");

    shellcfg(dir.path())
        .args(["-f", rc_file.to_str().unwrap(), "--no-backup", "update", "2", "--name", "hello"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&rc_file).unwrap(),
        "hello() {\n  echo hi\n}\nA=1\n"
    );
}

#[test]
fn test_update_without_changes() {
    let (dir, rc_file) = setup("A=\"1\"\n");

    shellcfg(dir.path())
        .args(["-f", rc_file.to_str().unwrap(), "update", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes made."));
    assert_eq!(backups_of(&rc_file), 0);
}

#[test]
fn test_update_unknown_line() {
    let (dir, rc_file) = setup("# only a comment\n");

    shellcfg(dir.path())
        .args(["-f", rc_file.to_str().unwrap(), "update", "1", "--value", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No statement at line 1"));
}

#[test]
fn test_update_conditional_line_refused() {
    let original = "if [ -d /opt ]; then A=1; fi\n";
    let (dir, rc_file) = setup(original);

    shellcfg(dir.path())
        .args(["-f", rc_file.to_str().unwrap(), "-y", "update", "1", "--comment", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("conditional"));

    assert_eq!(fs::read_to_string(&rc_file).unwrap(), original);
    assert_eq!(backups_of(&rc_file), 0);
}

#[test]
fn test_remove_function_span_and_line() {
    let (dir, rc_file) = setup("A=1\nf() {\n  :\n}\nB=2\n");

    shellcfg(dir.path())
        .args(["-f", rc_file.to_str().unwrap(), "-y", "rm", "1", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 2 statement(s)"));

    assert_eq!(fs::read_to_string(&rc_file).unwrap(), "B=2\n");
    assert_eq!(backups_of(&rc_file), 1);
}

#[test]
fn test_remove_nothing() {
    let (dir, rc_file) = setup("A=1\n");

    shellcfg(dir.path())
        .args(["-f", rc_file.to_str().unwrap(), "-y", "rm", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to remove"));
    assert_eq!(fs::read_to_string(&rc_file).unwrap(), "A=1\n");
}

#[test]
fn test_info_shows_path_entries() {
    let (dir, rc_file) = setup("export PATH=/usr/local/bin:/usr/bin # dirs\n");

    shellcfg(dir.path())
        .args(["-f", rc_file.to_str().unwrap(), "info", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PATH"))
        .stdout(predicate::str::contains("/usr/local/bin"))
        .stdout(predicate::str::contains("dirs"));
}

#[test]
fn test_search_current_file() {
    let (dir, rc_file) = setup("alias ll='ls -la' # Long listing\nexport EDITOR=nvim\n");

    shellcfg(dir.path())
        .args(["-f", rc_file.to_str().unwrap(), "search", "LONG"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ll"))
        .stdout(predicate::str::contains("EDITOR").not())
        .stdout(predicate::str::contains("1 match(es)"));
}

#[test]
fn test_search_all_files() {
    let (dir, _rc_file) = setup("alias g='git'\n");
    fs::write(dir.path().join(".zshrc"), "alias gst='git status'\n").unwrap();

    shellcfg(dir.path())
        .args(["search", "git", "--all", "-k", "alias"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".bashrc"))
        .stdout(predicate::str::contains(".zshrc"))
        .stdout(predicate::str::contains("2 match(es)"));
}

#[test]
fn test_shells_command() {
    let (dir, _rc_file) = setup("A=1\nB=2\n");

    shellcfg(dir.path())
        .arg("shells")
        .assert()
        .success()
        .stdout(predicate::str::contains("bash"))
        .stdout(predicate::str::contains("zsh"))
        .stdout(predicate::str::contains("fish"))
        .stdout(predicate::str::contains("~/.bashrc"))
        .stdout(predicate::str::contains("Total: 2 statement(s)"));
}

#[test]
fn test_file_create_and_delete() {
    let dir = tempdir().unwrap();
    let fish = dir.path().join(".config/fish/config.fish");

    shellcfg(dir.path())
        .args(["file", "create", fish.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created fish configuration file"));
    assert_eq!(
        fs::read_to_string(&fish).unwrap(),
        "# Configuration file created by shellcfg\n"
    );

    shellcfg(dir.path())
        .args(["-y", "--no-backup", "file", "delete", fish.to_str().unwrap()])
        .assert()
        .success();
    assert!(!fish.exists());
}

#[test]
fn test_backup_commands() {
    let (dir, rc_file) = setup("A=2\n");
    let file = rc_file.to_str().unwrap();
    fs::write(format!("{}.backup.1000", file), "A=1\n").unwrap();
    fs::write(format!("{}.backup.2000", file), "A=0\n").unwrap();

    shellcfg(dir.path())
        .args(["-f", file, "backup", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1000"))
        .stdout(predicate::str::contains("2000"))
        .stdout(predicate::str::contains("Total: 2 backup(s)"));

    shellcfg(dir.path())
        .args(["-f", file, "-y", "backup", "restore", "1000"])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&rc_file).unwrap(), "A=1\n");
    // Restoring backs up the replaced content first
    assert_eq!(backups_of(&rc_file), 3);

    shellcfg(dir.path())
        .args(["-f", file, "backup", "clean", "--keep", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 2 old backup(s)"));
    assert_eq!(backups_of(&rc_file), 1);
}

#[test]
fn test_backup_restore_unknown() {
    let (dir, rc_file) = setup("A=1\n");

    shellcfg(dir.path())
        .args(["-f", rc_file.to_str().unwrap(), "-y", "backup", "restore", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Backup not found: 42"));
}

#[test]
fn test_auto_backup_disabled_in_settings() {
    let (dir, rc_file) = setup("A=1\n");
    let settings = dir.path().join(".config/shellcfg");
    fs::create_dir_all(&settings).unwrap();
    fs::write(settings.join("config.toml"), "[backup]\nauto = false\n").unwrap();

    shellcfg(dir.path())
        .args(["-f", rc_file.to_str().unwrap(), "add", "export", "A"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&rc_file).unwrap(), "A=1\nexport A\n");
    assert_eq!(backups_of(&rc_file), 0);
}

#[test]
fn test_config_init_and_show() {
    let dir = tempdir().unwrap();

    shellcfg(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("using defaults"))
        .stdout(predicate::str::contains("max_count = 20"));

    shellcfg(dir.path())
        .args(["config", "--init"])
        .assert()
        .success();
    assert!(dir.path().join(".config/shellcfg/config.toml").exists());
}
