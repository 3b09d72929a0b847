//! `apibase api-url` / `apibase media-url` – build URLs on the resolved base.

use anyhow::Result;
use apibase_core::config::ApibaseConfig;

use super::base_url_for;
use crate::cli::EnvArgs;

pub fn run_api_url(cfg: &ApibaseConfig, args: &EnvArgs, endpoint: &str) -> Result<()> {
    let base = base_url_for(args, &cfg.resolver)?;
    println!("{}", base.api_url(endpoint));
    Ok(())
}

pub fn run_media_url(cfg: &ApibaseConfig, args: &EnvArgs, path: &str) -> Result<()> {
    let base = base_url_for(args, &cfg.resolver)?;
    println!("{}", base.media_url(path));
    Ok(())
}
