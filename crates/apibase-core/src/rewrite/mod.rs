//! One-shot migration of hardcoded backend URLs in frontend sources.
//!
//! Each target file is scanned for the legacy origin in four literal shapes
//! and rewritten to reference the resolver constant (`API_BASE_URL` by
//! default). When anything changed and the constant is not yet imported, an
//! import is added after the leading import block. Files are only written when
//! a replacement happened, so running the migration twice is a no-op.

mod batch;
mod error;
mod import;
mod rules;

pub use batch::{BatchReport, FileOutcome, FileReport, Migration, SourceRewrite};
pub use error::RewriteError;
pub use import::ImportSpec;
pub use rules::RewriteRules;
