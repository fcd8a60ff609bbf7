//! Parser behavior on whole configuration files

use shellcfg::editor::render;
use shellcfg::parser::StatementParser;
use shellcfg::{Statement, StatementKind};

fn parse(content: &str) -> Vec<Statement> {
    StatementParser::new().parse(content).statements
}

#[test]
fn test_four_line_scenario() {
    let statements = parse("A=1\nexport B=2 # note\nalias ll='ls -la'\n# comment\n");

    let summary: Vec<(StatementKind, &str, &str, usize)> = statements
        .iter()
        .map(|s| (s.kind, s.name.as_str(), s.value.as_str(), s.line_number))
        .collect();
    assert_eq!(
        summary,
        vec![
            (StatementKind::Variable, "A", "1", 1),
            (StatementKind::Variable, "B", "2", 2),
            (StatementKind::Alias, "ll", "ls -la", 3),
        ]
    );
    assert!(statements[1].is_export);
    assert_eq!(statements[1].comment.as_deref(), Some("note"));
}

#[test]
fn test_well_formed_lines_round_trip() {
    let lines = [
        r#"EDITOR="nvim""#,
        r#"export PATH="/usr/local/bin:$PATH""#,
        "alias gs='git status'",
        "source ~/.bash_aliases",
        "export HISTSIZE",
        r#"MSG="say \"hi\"""#,
        "alias ll='ls -la'  # long listing",
    ];

    for line in lines {
        let statements = parse(line);
        assert_eq!(statements.len(), 1, "line: {}", line);
        assert_eq!(render(&statements[0]), line);
    }
}

#[test]
fn test_hash_inside_quotes_is_not_a_comment() {
    let statements = parse("COLOR=\"#ff0000\"\nURL='http://x/#frag' # anchor\n");
    assert_eq!(statements[0].value, "#ff0000");
    assert!(statements[0].comment.is_none());
    assert_eq!(statements[1].value, "http://x/#frag");
    assert_eq!(statements[1].comment.as_deref(), Some("anchor"));
}

#[test]
fn test_first_equals_wins() {
    let statements = parse("OPTS=--color=auto\nalias grep='grep --color=auto'\n");
    assert_eq!(statements[0].name, "OPTS");
    assert_eq!(statements[0].value, "--color=auto");
    assert_eq!(statements[1].value, "grep --color=auto");
}

#[test]
fn test_invalid_names_are_skipped() {
    let statements = parse("1A=2\n=oops\nalias 9x='y'\nexport 5\n_ok=1\n");
    assert_eq!(statements.len(), 1);
    assert_eq!(statements[0].name, "_ok");
    assert_eq!(statements[0].line_number, 5);
}

#[test]
fn test_function_forms() {
    let content = "\
one() { echo hi; }
function two {
  echo two
}
three()
{
  echo three
}
after=1
";
    let statements = parse(content);
    let spans: Vec<(&str, usize, usize)> = statements
        .iter()
        .map(|s| (s.name.as_str(), s.line_number, s.end_line_number))
        .collect();
    assert_eq!(
        spans,
        vec![("one", 1, 1), ("two", 2, 4), ("three", 5, 8), ("after", 9, 9)]
    );
    assert_eq!(statements[0].value, "function (line 1)");
    assert_eq!(statements[1].value, "function (lines 2-4)");
    assert_eq!(statements[2].body.as_deref(), Some("  echo three"));
}

#[test]
fn test_nested_braces_in_function() {
    let content = "f() {\n  if true; then\n    x() { :; }\n  fi\n  echo \"}\"\n}\nZ=1\n";
    let statements = parse(content);
    assert_eq!(statements[0].end_line_number, 6);
    assert_eq!(statements[1].name, "Z");
}

#[test]
fn test_conditional_flag() {
    let statements = parse("if true; then A=1; fi\nB=2\n");
    assert!(statements[0].is_conditional);
    assert!(!statements[1].is_conditional);
}

#[test]
fn test_export_without_assignment() {
    let statements = parse("export FOO\n");
    assert_eq!(statements.len(), 1);
    assert_eq!(statements[0].kind, StatementKind::Export);
    assert_eq!(statements[0].name, "FOO");
    assert!(statements[0].value.is_empty());
}

#[test]
fn test_source_forms() {
    let statements = parse("source ~/.aliases\n. \"$HOME/.env\"\n");
    assert_eq!(statements[0].kind, StatementKind::Source);
    assert_eq!(statements[0].name, "~/.aliases");
    assert_eq!(statements[1].value, "$HOME/.env");
}

#[test]
fn test_path_heuristics() {
    let statements = parse("export PATH=/usr/bin:/bin\nGOPATH=~/go\nNAME=bob\n");
    assert_eq!(
        statements[0].path_components(),
        Some(vec!["/usr/bin".to_string(), "/bin".to_string()])
    );
    assert!(statements[1].is_path_value());
    assert!(!statements[2].is_path_value());
    assert!(statements[2].path_components().is_none());
}
