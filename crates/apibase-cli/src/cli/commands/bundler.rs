//! `apibase bundler-config` – print the dev-server/build declaration as JSON.

use anyhow::Result;
use apibase_core::bundler::BundlerConfig;
use apibase_core::config::ApibaseConfig;

pub fn run_bundler_config(cfg: &ApibaseConfig) -> Result<()> {
    let bundler = BundlerConfig::from_config(cfg);
    println!("{}", bundler.to_json_pretty()?);
    Ok(())
}
