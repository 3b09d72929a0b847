//! CLI command handlers. Each command is in its own file.

mod bundler;
mod completions;
mod migrate;
mod resolve;
mod urls;

pub use bundler::run_bundler_config;
pub use completions::{run_completions, run_man};
pub use migrate::run_migrate;
pub use resolve::run_resolve;
pub use urls::{run_api_url, run_media_url};

pub(crate) use resolve::base_url_for;
