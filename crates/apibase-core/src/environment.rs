//! Environment descriptor consumed by the base-URL resolver.
//!
//! The resolver never reads process state itself; callers build an
//! [`Environment`] (explicitly, from the process, or from a page origin) and
//! pass it in.

use thiserror::Error;

/// Prefix treated as "private LAN" for dev access from another device.
///
/// Only `192.168.` is recognized. `10.0.0.0/8` and `172.16.0.0/12` hosts
/// classify as [`HostClass::Public`].
pub const LAN_PREFIX: &str = "192.168.";

const LOOPBACK_HOSTS: &[&str] = &["localhost", "127.0.0.1"];

/// Hostname assumed by [`crate::resolver::global`] when `HOSTNAME` is unset.
pub const DEFAULT_HOSTNAME: &str = "localhost";

#[derive(Debug, Error)]
pub enum EnvError {
    #[error("invalid origin {origin:?}: {source}")]
    InvalidOrigin {
        origin: String,
        #[source]
        source: url::ParseError,
    },
    #[error("origin {0:?} has no host")]
    MissingHost(String),
}

/// Where the frontend is being served from, as far as URL resolution cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostClass {
    /// `localhost` or `127.0.0.1`.
    Loopback,
    /// Hostname starting with `192.168.`.
    PrivateLan,
    Public,
}

impl HostClass {
    pub fn classify(hostname: &str) -> Self {
        if LOOPBACK_HOSTS.contains(&hostname) {
            HostClass::Loopback
        } else if hostname.starts_with(LAN_PREFIX) {
            HostClass::PrivateLan
        } else {
            HostClass::Public
        }
    }
}

/// Ambient inputs to resolution: the override value and the current hostname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    override_url: Option<String>,
    hostname: String,
}

impl Environment {
    /// Build from explicit values. An empty override is treated as absent;
    /// any other value, whitespace included, is kept verbatim.
    pub fn new(override_url: Option<&str>, hostname: impl Into<String>) -> Self {
        Self {
            override_url: override_url
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            hostname: hostname.into(),
        }
    }

    /// Read the override from the process environment variable `var`.
    pub fn from_process(var: &str, hostname: impl Into<String>) -> Self {
        let value = std::env::var(var).ok();
        Self::new(value.as_deref(), hostname)
    }

    /// Extract the hostname from a page origin such as `http://192.168.1.20:3000`.
    pub fn from_origin(override_url: Option<&str>, origin: &str) -> Result<Self, EnvError> {
        let parsed = url::Url::parse(origin).map_err(|source| EnvError::InvalidOrigin {
            origin: origin.to_string(),
            source,
        })?;
        let host = parsed
            .host_str()
            .ok_or_else(|| EnvError::MissingHost(origin.to_string()))?;
        Ok(Self::new(override_url, host))
    }

    pub fn override_url(&self) -> Option<&str> {
        self.override_url.as_deref()
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn host_class(&self) -> HostClass {
        HostClass::classify(&self.hostname)
    }
}
