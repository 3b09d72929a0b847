//! Error type for legacy URL migration.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RewriteError {
    /// Rule patterns failed to compile (bad legacy origin or constant name).
    #[error("invalid rewrite rule: {0}")]
    Rule(#[from] regex::Error),
    #[error("source directory not found: {}", .0.display())]
    MissingSrcDir(PathBuf),
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
