//! Unit tests for the ANSI/SGR interpreter public API

use tpulse::ansi::{line_text, parse_line, parse_lines, AttributeState, Color, NamedColor, Run};

use crate::helpers::load_fixture;

fn styled(text: &str, fg: Option<Color>, bg: Option<Color>) -> Run {
    Run {
        fg,
        bg,
        ..Run::plain(text)
    }
}

#[test]
fn pane_fixture_parses_into_styled_lines() {
    let doc = parse_lines(&load_fixture("pane.txt"));

    assert_eq!(doc.len(), 4, "trailing newline yields a trailing empty line");
    assert_eq!(
        doc[0],
        vec![
            Run {
                bold: true,
                ..styled("README.md", Some(NamedColor::Blue.into()), None)
            },
            Run::plain("  "),
            styled("src", Some(NamedColor::Green.into()), None),
        ]
    );
    assert_eq!(
        doc[1],
        vec![
            styled("warn:", Some(Color::Hex(255, 102, 0)), None),
            Run::plain(" disk 91%"),
        ]
    );
    assert_eq!(
        doc[2],
        vec![styled(
            " NORMAL ",
            Some(Color::DefaultBackground),
            Some(Color::DefaultForeground)
        )]
    );
    assert!(doc[3].is_empty());
}

#[test]
fn pane_fixture_wire_format() {
    let doc = parse_lines(&load_fixture("pane.txt"));
    insta::assert_json_snapshot!(doc[0], @r###"
    [
      {
        "t": "README.md",
        "fg": "blue",
        "b": true
      },
      {
        "t": "  "
      },
      {
        "t": "src",
        "fg": "green"
      }
    ]
    "###);
}

#[test]
fn text_survives_with_escapes_removed() {
    let doc = parse_lines(&load_fixture("pane.txt"));
    let texts: Vec<String> = doc.iter().map(line_text).collect();
    assert_eq!(texts, vec!["README.md  src", "warn: disk 91%", " NORMAL ", ""]);
}

#[test]
fn separate_calls_do_not_share_state() {
    let first = parse_lines("\x1b[35mopen");
    let second = parse_lines("plain");
    assert_eq!(first[0][0].fg, Some(Color::Named(NamedColor::Magenta)));
    assert_eq!(second, vec![vec![Run::plain("plain")]]);
}

#[test]
fn parse_line_threads_caller_state() {
    let mut state = AttributeState::new();
    parse_line("\x1b[4;44m", &mut state);
    assert!(state.underline);
    assert_eq!(state.bg, Some(Color::Named(NamedColor::Blue)));

    let line = parse_line("x", &mut state);
    assert!(line[0].underline);
}

#[test]
fn unknown_escapes_stay_literal() {
    let doc = parse_lines("a\x1b[?25lb");
    assert_eq!(line_text(&doc[0]), "a\x1b[?25lb");
}

#[test]
fn run_json_uses_short_keys_and_omits_defaults() {
    let run = Run {
        italic: true,
        dim: true,
        ..styled("x", Some(Color::Hex(0, 128, 255)), None)
    };
    let json = serde_json::to_string(&run).unwrap();
    assert_eq!(json, r##"{"t":"x","fg":"#0080ff","d":true,"i":true}"##);
}
