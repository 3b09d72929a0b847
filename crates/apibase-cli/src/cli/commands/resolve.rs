//! `apibase resolve` – print the backend base URL for an environment.

use anyhow::Result;
use apibase_core::config::{ApibaseConfig, ResolverConfig};
use apibase_core::environment::{Environment, DEFAULT_HOSTNAME};
use apibase_core::resolver::{self, BaseUrl};

use crate::cli::EnvArgs;

/// Resolve for the flags given, or for the process environment when none are.
pub(crate) fn base_url_for(args: &EnvArgs, cfg: &ResolverConfig) -> Result<BaseUrl> {
    if args.is_empty() {
        return Ok(resolver::global(cfg).clone());
    }

    let from_process = std::env::var(&cfg.override_var).ok();
    let override_url = args.override_url.as_deref().or(from_process.as_deref());

    let env = match &args.origin {
        Some(origin) => Environment::from_origin(override_url, origin)?,
        None => Environment::new(
            override_url,
            args.host.as_deref().unwrap_or(DEFAULT_HOSTNAME),
        ),
    };
    Ok(resolver::resolve_base_url(&env, cfg))
}

pub fn run_resolve(cfg: &ApibaseConfig, args: &EnvArgs) -> Result<()> {
    let base = base_url_for(args, &cfg.resolver)?;
    println!("base: {base}");
    println!("api:  {}", base.api_root());
    Ok(())
}
