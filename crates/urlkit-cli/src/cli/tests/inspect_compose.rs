//! Tests for inspect, compose and tour.

use super::parse;
use crate::cli::commands::parse_query_arg;
use crate::cli::CliCommand;

#[test]
fn cli_parse_inspect() {
    match parse(&["urlkit", "inspect", "https://example.com/a?b=c"]) {
        CliCommand::Inspect { url, base, json } => {
            assert_eq!(url, "https://example.com/a?b=c");
            assert!(base.is_none());
            assert!(!json);
        }
        _ => panic!("expected Inspect"),
    }
}

#[test]
fn cli_parse_inspect_with_base() {
    match parse(&[
        "urlkit",
        "inspect",
        "search",
        "--base",
        "https://itunes.apple.com",
        "--json",
    ]) {
        CliCommand::Inspect { url, base, json } => {
            assert_eq!(url, "search");
            assert_eq!(base.as_deref(), Some("https://itunes.apple.com"));
            assert!(json);
        }
        _ => panic!("expected Inspect"),
    }
}

#[test]
fn cli_parse_compose_repeated_query() {
    match parse(&[
        "urlkit",
        "compose",
        "https://itunes.apple.com/search",
        "-q",
        "term=crowded house",
        "--query",
        "emoji=😻",
    ]) {
        CliCommand::Compose { url, query, json } => {
            assert_eq!(url, "https://itunes.apple.com/search");
            assert_eq!(query, vec!["term=crowded house", "emoji=😻"]);
            assert!(!json);
        }
        _ => panic!("expected Compose"),
    }
}

#[test]
fn query_arg_splits_on_first_equals() {
    let item = parse_query_arg("expr=a=b");
    assert_eq!(item.name, "expr");
    assert_eq!(item.value.as_deref(), Some("a=b"));
    assert!(parse_query_arg("flag").value.is_none());
    assert_eq!(parse_query_arg("empty=").value.as_deref(), Some(""));
}

#[test]
fn cli_parse_tour() {
    match parse(&["urlkit", "tour"]) {
        CliCommand::Tour => {}
        _ => panic!("expected Tour"),
    }
}
