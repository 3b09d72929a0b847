//! CLI for apibase.

mod commands;

use anyhow::Result;
use apibase_core::config::{self, ApibaseConfig};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::{Path, PathBuf};

use commands::{
    run_api_url, run_bundler_config, run_completions, run_man, run_media_url, run_migrate,
    run_resolve,
};

/// Top-level CLI for apibase.
#[derive(Debug, Parser)]
#[command(name = "apibase")]
#[command(about = "apibase: backend base-URL resolution and legacy URL migration", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/apibase/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Environment the frontend is assumed to run in. With none of these set, the
/// process environment (`HOSTNAME` and the override variable) is used.
#[derive(Debug, Clone, Default, Args)]
pub struct EnvArgs {
    /// Hostname the frontend is served from (e.g. localhost, 192.168.1.20).
    #[arg(long, conflicts_with = "origin")]
    pub host: Option<String>,

    /// Page origin to take the hostname from (e.g. http://192.168.1.20:3000).
    #[arg(long)]
    pub origin: Option<String>,

    /// Base URL override; takes precedence over any hostname.
    #[arg(long = "override", value_name = "URL")]
    pub override_url: Option<String>,
}

impl EnvArgs {
    pub fn is_empty(&self) -> bool {
        self.host.is_none() && self.origin.is_none() && self.override_url.is_none()
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the resolved backend base URL and API root.
    ///
    /// Without --host or --origin the hostname comes from the machine's
    /// HOSTNAME variable, not from a browser page. Containers and CI usually
    /// set HOSTNAME to a random id, which resolves to production. Pass --host
    /// or --origin to resolve for a specific page.
    Resolve {
        #[command(flatten)]
        env: EnvArgs,
    },

    /// Build a full API endpoint URL.
    ApiUrl {
        /// Endpoint path, with or without a leading slash.
        endpoint: String,
        #[command(flatten)]
        env: EnvArgs,
    },

    /// Build a media URL served from the backend host root.
    MediaUrl {
        /// Stored media path; absolute http(s) URLs are printed unchanged.
        path: String,
        #[command(flatten)]
        env: EnvArgs,
    },

    /// Rewrite hardcoded legacy backend URLs to use the resolver constant.
    Migrate {
        /// Directory the target files are relative to (default from config).
        #[arg(long, value_name = "DIR")]
        src_dir: Option<PathBuf>,

        /// Report what would change without writing any file.
        #[arg(long)]
        dry_run: bool,

        /// Files to migrate instead of the configured target list.
        files: Vec<PathBuf>,
    },

    /// Print the bundler dev-server/build configuration as JSON.
    BundlerConfig,

    /// Generate shell completions.
    Completions {
        shell: Shell,
    },

    /// Render the man page to stdout.
    Man,
}

fn load_config(path: Option<&Path>) -> Result<ApibaseConfig> {
    let cfg = match path {
        Some(p) => config::load_from(p)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        // Completions and man output never touch the config file.
        let cfg = || load_config(cli.config.as_deref());

        match cli.command {
            CliCommand::Resolve { ref env } => run_resolve(&cfg()?, env)?,
            CliCommand::ApiUrl {
                ref endpoint,
                ref env,
            } => run_api_url(&cfg()?, env, endpoint)?,
            CliCommand::MediaUrl { ref path, ref env } => run_media_url(&cfg()?, env, path)?,
            CliCommand::Migrate {
                ref src_dir,
                dry_run,
                ref files,
            } => run_migrate(&cfg()?, src_dir.as_deref(), files, dry_run)?,
            CliCommand::BundlerConfig => run_bundler_config(&cfg()?)?,
            CliCommand::Completions { shell } => run_completions(shell, Cli::command())?,
            CliCommand::Man => run_man(Cli::command())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
