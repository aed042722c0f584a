//! Server Configuration
//!
//! Read from the process environment after `.env` has been loaded.

use std::path::PathBuf;

use dashboard_core::SiteMeta;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Listen address (`BIND_ADDR`)
    pub bind_addr: String,

    /// Directory holding the compiled WASM frontend (`STATIC_DIR`)
    pub static_dir: PathBuf,

    /// Optional JSON catalog replacing the built-in one (`PRICING_CATALOG`)
    pub catalog_path: Option<PathBuf>,

    /// Site name and public origin (`SITE_NAME`, `SITE_URL`)
    pub site: SiteMeta,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank values fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = SiteMeta::default();

        Self {
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:3000".into()),
            static_dir: get("STATIC_DIR").map_or_else(|| PathBuf::from("static"), PathBuf::from),
            catalog_path: get("PRICING_CATALOG").map(PathBuf::from),
            site: SiteMeta {
                name: get("SITE_NAME").unwrap_or(defaults.name),
                base_url: get("SITE_URL").unwrap_or(defaults.base_url),
            },
        }
    }
}
