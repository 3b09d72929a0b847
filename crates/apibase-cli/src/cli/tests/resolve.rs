//! Tests for resolve, api-url and media-url.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_resolve_defaults() {
    match parse(&["apibase", "resolve"]) {
        CliCommand::Resolve { env } => assert!(env.is_empty()),
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_resolve_host_and_override() {
    match parse(&[
        "apibase",
        "resolve",
        "--host",
        "192.168.1.20",
        "--override",
        "https://example.com/",
    ]) {
        CliCommand::Resolve { env } => {
            assert_eq!(env.host.as_deref(), Some("192.168.1.20"));
            assert_eq!(env.override_url.as_deref(), Some("https://example.com/"));
            assert!(env.origin.is_none());
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_host_conflicts_with_origin() {
    let res = Cli::try_parse_from([
        "apibase",
        "resolve",
        "--host",
        "localhost",
        "--origin",
        "http://localhost:3000",
    ]);
    assert!(res.is_err());
}

#[test]
fn cli_parse_api_url() {
    match parse(&["apibase", "api-url", "/users", "--host", "localhost"]) {
        CliCommand::ApiUrl { endpoint, env } => {
            assert_eq!(endpoint, "/users");
            assert_eq!(env.host.as_deref(), Some("localhost"));
        }
        _ => panic!("expected ApiUrl"),
    }
}

#[test]
fn cli_parse_media_url_with_origin() {
    match parse(&[
        "apibase",
        "media-url",
        "img/a.png",
        "--origin",
        "http://192.168.0.4:3000",
    ]) {
        CliCommand::MediaUrl { path, env } => {
            assert_eq!(path, "img/a.png");
            assert_eq!(env.origin.as_deref(), Some("http://192.168.0.4:3000"));
        }
        _ => panic!("expected MediaUrl"),
    }
}

#[test]
fn cli_parse_global_config() {
    let cli = Cli::try_parse_from(["apibase", "resolve", "--config", "/tmp/apibase.toml"]).unwrap();
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/tmp/apibase.toml"))
    );
}

#[test]
fn resolve_help_explains_hostname_source() {
    use clap::CommandFactory;
    let cmd = Cli::command();
    let resolve = cmd.find_subcommand("resolve").unwrap();
    let long = resolve.get_long_about().unwrap().to_string();
    assert!(long.contains("HOSTNAME"));
    assert!(long.contains("--host"));
}
