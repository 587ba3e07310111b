//! Tests for the resolve subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_resolve() {
    match parse(&["routemap", "resolve", "/blog/post-1/"]) {
        CliCommand::Resolve {
            path,
            registry,
            json,
        } => {
            assert_eq!(path, "/blog/post-1/");
            assert!(registry.is_none());
            assert!(!json);
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_resolve_registry_and_json() {
    match parse(&[
        "routemap",
        "resolve",
        ".",
        "--registry",
        "public/content.json",
        "--json",
    ]) {
        CliCommand::Resolve {
            path,
            registry,
            json,
        } => {
            assert_eq!(path, ".");
            assert_eq!(registry.as_deref(), Some(Path::new("public/content.json")));
            assert!(json);
        }
        _ => panic!("expected Resolve with --registry and --json"),
    }
}

#[test]
fn cli_parse_resolve_empty_path() {
    match parse(&["routemap", "resolve", ""]) {
        CliCommand::Resolve { path, .. } => assert_eq!(path, ""),
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_resolve_requires_path() {
    assert!(Cli::try_parse_from(["routemap", "resolve"]).is_err());
}
