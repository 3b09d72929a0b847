//! Declarative dev-server / build configuration handed to the frontend bundler.
//!
//! Nothing here runs at request time; the bundler consumes the serialized
//! form. The `/api` proxy rule mirrors the resolver's production backend.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::ApibaseConfig;
use crate::resolver::BaseUrl;

const EXTENSIONS: &[&str] = &[".mjs", ".js", ".ts", ".jsx", ".tsx", ".json"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRule {
    /// Request path prefix, e.g. `/api`.
    pub prefix: String,
    pub target: String,
    pub change_origin: bool,
}

impl ProxyRule {
    /// Prefix match on a segment boundary: `/api` matches `/api` and
    /// `/api/users` but not `/apiary`.
    pub fn matches(&self, path: &str) -> bool {
        match path.strip_prefix(self.prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/') || self.prefix.ends_with('/'),
            None => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServer {
    pub port: u16,
    pub fs_strict: bool,
    pub proxy: Vec<ProxyRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildOptions {
    pub out_dir: String,
    pub sourcemap: bool,
    pub target: String,
    pub minify: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveOptions {
    pub alias: BTreeMap<String, String>,
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundlerConfig {
    pub server: DevServer,
    pub build: BuildOptions,
    pub resolve: ResolveOptions,
}

impl BundlerConfig {
    pub fn from_config(cfg: &ApibaseConfig) -> Self {
        let target = cfg
            .dev_server
            .proxy_target
            .as_deref()
            .map(BaseUrl::new)
            .unwrap_or_else(|| BaseUrl::new(&cfg.resolver.production_url));

        let mut alias = BTreeMap::new();
        alias.insert("@".to_string(), "./src".to_string());

        Self {
            server: DevServer {
                port: cfg.dev_server.port,
                fs_strict: false,
                proxy: vec![ProxyRule {
                    prefix: cfg.dev_server.proxy_prefix.clone(),
                    target: target.to_string(),
                    change_origin: true,
                }],
            },
            build: BuildOptions {
                out_dir: cfg.build.out_dir.clone(),
                sourcemap: cfg.build.sourcemap,
                target: cfg.build.target.clone(),
                minify: cfg.build.minify.clone(),
            },
            resolve: ResolveOptions {
                alias,
                extensions: EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            },
        }
    }

    /// First proxy rule that applies to a dev-server request path.
    pub fn proxy_for(&self, path: &str) -> Option<&ProxyRule> {
        self.server.proxy.iter().find(|r| r.matches(path))
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_production_backend() {
        let b = BundlerConfig::from_config(&ApibaseConfig::default());
        assert_eq!(b.server.port, 3000);
        assert!(!b.server.fs_strict);
        assert_eq!(b.server.proxy.len(), 1);
        assert_eq!(b.server.proxy[0].prefix, "/api");
        assert_eq!(
            b.server.proxy[0].target,
            "https://capstone-thesis-w018.onrender.com"
        );
        assert!(b.server.proxy[0].change_origin);
        assert_eq!(b.build.out_dir, "dist");
        assert_eq!(b.build.minify, "terser");
        assert_eq!(b.resolve.alias.get("@").map(String::as_str), Some("./src"));
        assert_eq!(b.resolve.extensions.len(), 6);
    }

    #[test]
    fn explicit_proxy_target_wins() {
        let mut cfg = ApibaseConfig::default();
        cfg.dev_server.proxy_target = Some("https://caps-em1t.onrender.com/".to_string());
        let b = BundlerConfig::from_config(&cfg);
        assert_eq!(b.server.proxy[0].target, "https://caps-em1t.onrender.com");
    }

    #[test]
    fn proxy_prefix_matching() {
        let b = BundlerConfig::from_config(&ApibaseConfig::default());
        assert!(b.proxy_for("/api").is_some());
        assert!(b.proxy_for("/api/users/1").is_some());
        assert!(b.proxy_for("/apiary").is_none());
        assert!(b.proxy_for("/media/a.png").is_none());
    }

    #[test]
    fn json_uses_bundler_field_names() {
        let json = BundlerConfig::from_config(&ApibaseConfig::default())
            .to_json_pretty()
            .unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["server"]["proxy"][0]["changeOrigin"], true);
        assert_eq!(v["build"]["outDir"], "dist");
        assert_eq!(v["server"]["fsStrict"], false);
    }
}
