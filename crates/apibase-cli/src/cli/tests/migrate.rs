//! Tests for migrate, bundler-config, completions and man.

use super::parse;
use crate::cli::commands::run_migrate;
use crate::cli::CliCommand;
use apibase_core::config::ApibaseConfig;
use std::fs;
use std::path::{Path, PathBuf};

#[test]
fn cli_parse_migrate_defaults() {
    match parse(&["apibase", "migrate"]) {
        CliCommand::Migrate {
            src_dir,
            dry_run,
            files,
        } => {
            assert!(src_dir.is_none());
            assert!(!dry_run);
            assert!(files.is_empty());
        }
        _ => panic!("expected Migrate"),
    }
}

#[test]
fn cli_parse_migrate_files_and_flags() {
    match parse(&[
        "apibase",
        "migrate",
        "--src-dir",
        "frontend/my-app/src",
        "--dry-run",
        "pages/HomePage.tsx",
        "pages/Map.tsx",
    ]) {
        CliCommand::Migrate {
            src_dir,
            dry_run,
            files,
        } => {
            assert_eq!(src_dir.as_deref(), Some(Path::new("frontend/my-app/src")));
            assert!(dry_run);
            assert_eq!(
                files,
                vec![
                    PathBuf::from("pages/HomePage.tsx"),
                    PathBuf::from("pages/Map.tsx")
                ]
            );
        }
        _ => panic!("expected Migrate"),
    }
}

#[test]
fn cli_parse_bundler_config() {
    match parse(&["apibase", "bundler-config"]) {
        CliCommand::BundlerConfig => {}
        _ => panic!("expected BundlerConfig"),
    }
}

#[test]
fn cli_parse_completions_and_man() {
    match parse(&["apibase", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Bash),
        _ => panic!("expected Completions"),
    }
    match parse(&["apibase", "man"]) {
        CliCommand::Man => {}
        _ => panic!("expected Man"),
    }
}

#[test]
fn run_migrate_uses_explicit_files() {
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("Pins.tsx");
    fs::write(
        &page,
        "import React from 'react';\nfetch(\"https://caps-em1t.onrender.com/api/pins/\");\n",
    )
    .unwrap();

    let cfg = ApibaseConfig::default();
    run_migrate(&cfg, Some(dir.path()), &[PathBuf::from("Pins.tsx")], false).unwrap();

    let out = fs::read_to_string(&page).unwrap();
    assert!(out.contains("fetch(`${API_BASE_URL}/api/pins/`)"));
    assert!(out.contains("import { API_BASE_URL } from '../utils/apiConfig';"));
}

#[test]
fn run_migrate_missing_src_dir_errors() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = ApibaseConfig::default();
    let missing = dir.path().join("nope");
    assert!(run_migrate(&cfg, Some(missing.as_path()), &[], true).is_err());
}
