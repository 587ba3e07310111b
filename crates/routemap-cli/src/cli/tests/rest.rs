//! Tests for candidates, url, check, completions, man.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;

#[test]
fn cli_parse_candidates() {
    match parse(&["routemap", "candidates", "/about"]) {
        CliCommand::Candidates { path } => assert_eq!(path, "/about"),
        _ => panic!("expected Candidates"),
    }
}

#[test]
fn cli_parse_url() {
    match parse(&["routemap", "url", "not a url"]) {
        CliCommand::Url { candidate } => assert_eq!(candidate, "not a url"),
        _ => panic!("expected Url"),
    }
}

#[test]
fn cli_parse_check() {
    match parse(&["routemap", "check", "--registry", "content.json"]) {
        CliCommand::Check { registry } => {
            assert_eq!(registry.unwrap().to_str(), Some("content.json"));
        }
        _ => panic!("expected Check"),
    }
    match parse(&["routemap", "check"]) {
        CliCommand::Check { registry } => assert!(registry.is_none()),
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["routemap", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
    assert!(Cli::try_parse_from(["routemap", "completions", "cmd.exe"]).is_err());
}

#[test]
fn cli_parse_man() {
    assert!(matches!(parse(&["routemap", "man"]), CliCommand::Man));
}

#[test]
fn cli_unknown_subcommand_rejected() {
    assert!(Cli::try_parse_from(["routemap", "render", "/"]).is_err());
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}
