//! Backend base-URL resolution.
//!
//! Picks the backend the frontend should talk to from an [`Environment`]:
//! override value first, then loopback, then LAN, then production.

use std::fmt;
use std::sync::OnceLock;

use crate::config::ResolverConfig;
use crate::environment::{Environment, HostClass, DEFAULT_HOSTNAME};
use crate::url_model;

/// Scheme + host (+ port) prefix of the backend. Never ends with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Wrap `raw`, stripping every trailing slash (`https://x.com//` becomes
    /// `https://x.com`).
    pub fn new(raw: &str) -> Self {
        BaseUrl(raw.trim_end_matches('/').to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `{base}/api`, the root of the API namespace.
    pub fn api_root(&self) -> String {
        format!("{}/api", self.0)
    }

    /// See [`url_model::build_api_url`].
    pub fn api_url(&self, endpoint: &str) -> String {
        url_model::build_api_url(self, endpoint)
    }

    /// See [`url_model::build_media_url`].
    pub fn media_url(&self, path: &str) -> String {
        url_model::build_media_url(self, path)
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Resolve the backend base URL for `env`. First match wins:
///
/// 1. non-empty override, taken verbatim minus trailing `/`
/// 2. `localhost` / `127.0.0.1` → `cfg.local_url`
/// 3. `192.168.*` → `http://{hostname}:{cfg.dev_port}`
/// 4. anything else → `cfg.production_url`
pub fn resolve_base_url(env: &Environment, cfg: &ResolverConfig) -> BaseUrl {
    if let Some(over) = env.override_url() {
        tracing::debug!(override_url = over, "using base url override");
        return BaseUrl::new(over);
    }

    let class = env.host_class();
    tracing::debug!(hostname = env.hostname(), ?class, "resolving base url");
    match class {
        HostClass::Loopback => BaseUrl::new(&cfg.local_url),
        HostClass::PrivateLan => BaseUrl::new(&format!(
            "http://{}:{}",
            env.hostname(),
            cfg.dev_port
        )),
        HostClass::Public => BaseUrl::new(&cfg.production_url),
    }
}

static GLOBAL: OnceLock<BaseUrl> = OnceLock::new();

/// Process-wide base URL, resolved on first call and reused afterwards.
///
/// Reads the override from `cfg.override_var` and the hostname from
/// `HOSTNAME` (default `localhost`). Later calls ignore `cfg`.
///
/// `HOSTNAME` names the machine, not the page a browser would be showing.
/// Containers often set it to an opaque id, which classifies as public and
/// resolves to production. Callers that know the page host should build an
/// [`Environment`] and use [`resolve_base_url`] instead.
pub fn global(cfg: &ResolverConfig) -> &'static BaseUrl {
    GLOBAL.get_or_init(|| {
        let hostname = std::env::var("HOSTNAME")
            .ok()
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOSTNAME.to_string());
        let env = Environment::from_process(&cfg.override_var, hostname);
        let base = resolve_base_url(&env, cfg);
        tracing::info!(base_url = %base, "resolved process base url");
        base
    })
}
