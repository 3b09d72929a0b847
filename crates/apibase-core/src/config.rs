use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Base-URL resolution settings (`[resolver]` in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ResolverConfig {
    /// Environment variable whose non-empty value overrides hostname inference.
    pub override_var: String,
    /// Backend URL used when the frontend is served from loopback.
    pub local_url: String,
    /// Backend port used for LAN access (`http://<lan-host>:<port>`).
    pub dev_port: u16,
    /// Backend URL used for every other hostname.
    pub production_url: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            override_var: "VITE_API_BASE_URL".to_string(),
            local_url: "http://localhost:8000".to_string(),
            dev_port: 8000,
            production_url: "https://capstone-thesis-w018.onrender.com".to_string(),
        }
    }
}

/// Legacy URL migration settings (`[rewrite]` in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RewriteConfig {
    /// Hardcoded backend origin to replace.
    pub legacy_origin: String,
    /// Name of the exported resolver constant the rewritten code references.
    pub constant: String,
    /// Module the constant is imported from, as written in the import statement.
    pub import_module: String,
    /// Source directory the target paths are relative to.
    pub src_dir: PathBuf,
    /// Files to migrate, relative to `src_dir`.
    pub targets: Vec<PathBuf>,
}

const DEFAULT_TARGETS: &[&str] = &[
    "pages/RegisterPage.tsx",
    "pages/HomePage.tsx",
    "pages/ProfilePage.tsx",
    "pages/ResetPassword.tsx",
    "pages/ResidentDashboard.tsx",
    "pages/VisitorDashboard.tsx",
    "pages/VisitorStatus.tsx",
    "pages/Contact.tsx",
    "pages/Map.tsx",
    "pages/UserMapPage.tsx",
    "pages/BookingAmenities.tsx",
    "pages/HouseDetailPage.tsx",
    "pages/HouseSalePage.tsx",
    "pages/AdminUsersPage.tsx",
    "pages/Messenger.tsx",
    "pages/Visitors.tsx",
    "pages/visitorsTracking.tsx",
    "pages/ResidentsApproval.tsx",
    "pages/Pins.tsx",
];

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            legacy_origin: "https://caps-em1t.onrender.com".to_string(),
            constant: "API_BASE_URL".to_string(),
            import_module: "../utils/apiConfig".to_string(),
            src_dir: PathBuf::from("src"),
            targets: DEFAULT_TARGETS.iter().map(PathBuf::from).collect(),
        }
    }
}

/// Bundler dev server settings (`[dev_server]` in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DevServerConfig {
    pub port: u16,
    /// Path prefix forwarded to the backend.
    pub proxy_prefix: String,
    /// Proxy origin; when unset the resolver's production URL is used.
    pub proxy_target: Option<String>,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            proxy_prefix: "/api".to_string(),
            proxy_target: None,
        }
    }
}

/// Bundler output settings (`[build]` in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BuildConfig {
    pub out_dir: String,
    pub sourcemap: bool,
    pub target: String,
    pub minify: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            out_dir: "dist".to_string(),
            sourcemap: true,
            target: "esnext".to_string(),
            minify: "terser".to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/apibase/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApibaseConfig {
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub rewrite: RewriteConfig,
    #[serde(default)]
    pub dev_server: DevServerConfig,
    #[serde(default)]
    pub build: BuildConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("apibase")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ApibaseConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ApibaseConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path. The file must exist.
pub fn load_from(path: &Path) -> Result<ApibaseConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let cfg: ApibaseConfig = toml::from_str(&data)
        .with_context(|| format!("failed to parse config: {}", path.display()))?;
    Ok(cfg)
}
