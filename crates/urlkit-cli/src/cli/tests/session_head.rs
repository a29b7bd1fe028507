//! Tests for session, head, completions and manpage.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_session_defaults() {
    match parse(&["urlkit", "session"]) {
        CliCommand::Session { args } => {
            assert!(!args.ephemeral);
            assert!(!args.no_cellular);
            assert!(args.memory_capacity.is_none());
            assert!(args.disk_capacity.is_none());
        }
        _ => panic!("expected Session"),
    }
}

#[test]
fn cli_parse_session_ephemeral_with_cache() {
    match parse(&[
        "urlkit",
        "session",
        "--ephemeral",
        "--memory-capacity",
        "512000",
        "--disk-capacity",
        "10000000",
    ]) {
        CliCommand::Session { args } => {
            assert!(args.ephemeral);
            assert_eq!(args.memory_capacity, Some(512_000));
            assert_eq!(args.disk_capacity, Some(10_000_000));
        }
        _ => panic!("expected Session"),
    }
}

#[test]
fn cli_parse_head_no_cellular() {
    match parse(&[
        "urlkit",
        "head",
        "https://example.com/",
        "--no-cellular",
        "--interface",
        "wwan0",
    ]) {
        CliCommand::Head { url, args } => {
            assert_eq!(url, "https://example.com/");
            assert!(args.no_cellular);
            assert_eq!(args.interface.as_deref(), Some("wwan0"));
        }
        _ => panic!("expected Head"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["urlkit", "completions", "bash"]) {
        CliCommand::Completions { shell } => {
            assert_eq!(shell, clap_complete::Shell::Bash)
        }
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_manpage() {
    match parse(&["urlkit", "manpage", "--out-dir", "/tmp/man"]) {
        CliCommand::Manpage { out_dir } => {
            assert_eq!(out_dir.as_deref(), Some(std::path::Path::new("/tmp/man")))
        }
        _ => panic!("expected Manpage"),
    }
}

#[test]
fn cli_rejects_bad_capacity() {
    assert!(Cli::try_parse_from(["urlkit", "session", "--disk-capacity", "lots"]).is_err());
}
