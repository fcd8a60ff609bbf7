//! Edit then re-parse flows through FileEditor

use std::fs;
use std::path::Path;

use shellcfg::parser::StatementParser;
use shellcfg::{EditError, FileEditor, ShellDialect, Statement, StatementKind};
use tempfile::tempdir;

fn reparse(path: &Path) -> Vec<Statement> {
    let outcome = StatementParser::new().parse_file(path);
    assert!(outcome.error.is_none());
    outcome.statements
}

#[test]
fn test_create_append_update_delete_cycle() {
    let dir = tempdir().unwrap();
    let rc = dir.path().join(".zshrc");
    let editor = FileEditor::new();

    editor.create_file(&rc, ShellDialect::Zsh).unwrap();
    assert!(reparse(&rc).is_empty());

    editor
        .append(&Statement::variable("EDITOR", "vim").with_export(true), &rc)
        .unwrap();
    editor
        .append(
            &Statement::alias("ll", "ls -la").with_comment(Some("long".into())),
            &rc,
        )
        .unwrap();

    let statements = reparse(&rc);
    assert_eq!(statements.len(), 2);
    assert_eq!(statements[0].line_number, 2);
    assert_eq!(statements[1].comment.as_deref(), Some("long"));

    let replacement = Statement::variable("EDITOR", "nvim").with_export(true);
    editor.update(statements[0].line_number, &rc, &replacement).unwrap();
    assert_eq!(reparse(&rc)[0].value, "nvim");

    editor.delete(statements[1].line_number, &rc).unwrap();
    let statements = reparse(&rc);
    assert_eq!(statements.len(), 1);
    assert_eq!(statements[0].name, "EDITOR");

    editor.delete_file(&rc).unwrap();
    assert!(!rc.exists());
}

#[test]
fn test_unrelated_lines_untouched() {
    let dir = tempdir().unwrap();
    let rc = dir.path().join(".bashrc");
    let original = "# header\n\nif [ -f ~/.x ]; then\n  . ~/.x\nfi\nA=1\n\tcomplete -F _git g\n";
    fs::write(&rc, original).unwrap();

    FileEditor::new()
        .update(6, &rc, &Statement::variable("A", "2"))
        .unwrap();

    let expected = original.replace("A=1", "A=\"2\"");
    assert_eq!(fs::read_to_string(&rc).unwrap(), expected);
}

#[test]
fn test_remove_whole_function_with_delete_many() {
    let dir = tempdir().unwrap();
    let rc = dir.path().join(".bashrc");
    fs::write(&rc, "A=1\nmkcd() {\n  mkdir -p \"$1\"\n  cd \"$1\"\n}\nB=2\n").unwrap();

    let func = reparse(&rc)
        .into_iter()
        .find(|s| s.kind == StatementKind::Function)
        .unwrap();
    assert_eq!((func.line_number, func.end_line_number), (2, 5));

    FileEditor::new()
        .delete_many(func.line_number..=func.end_line_number, &rc)
        .unwrap();
    assert_eq!(fs::read_to_string(&rc).unwrap(), "A=1\nB=2\n");
}

#[test]
fn test_insert_then_line_numbers_shift() {
    let dir = tempdir().unwrap();
    let rc = dir.path().join(".bashrc");
    fs::write(&rc, "A=1\nB=2\n").unwrap();

    FileEditor::new()
        .insert(&Statement::source("~/.aliases"), &rc, 1)
        .unwrap();

    let statements = reparse(&rc);
    assert_eq!(statements[1].kind, StatementKind::Source);
    assert_eq!(statements[1].line_number, 2);
    assert_eq!(statements[2].name, "B");
    assert_eq!(statements[2].line_number, 3);
}

#[test]
fn test_stale_line_number_is_rejected() {
    let dir = tempdir().unwrap();
    let rc = dir.path().join(".bashrc");
    fs::write(&rc, "A=1").unwrap();

    let err = FileEditor::new().delete(5, &rc).unwrap_err();
    match err {
        EditError::InvalidLineNumber { line, line_count } => {
            assert_eq!(line, 5);
            assert_eq!(line_count, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_backup_keeps_original_content() {
    let dir = tempdir().unwrap();
    let rc = dir.path().join(".bashrc");
    fs::write(&rc, "A=1\n").unwrap();

    let editor = FileEditor::new();
    let backup = editor.backup(&rc).unwrap();
    editor.delete(1, &rc).unwrap();

    assert_eq!(fs::read_to_string(&backup).unwrap(), "A=1\n");
    assert_eq!(fs::read_to_string(&rc).unwrap(), "");
}
