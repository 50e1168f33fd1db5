use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding `backend_url`.
pub const ENV_BACKEND_URL: &str = "WINKEL_BACKEND_URL";
/// Environment variable overriding `api_key`.
pub const ENV_API_KEY: &str = "WINKEL_API_KEY";

fn default_lists_table() -> String {
    "Winkelwagens".to_string()
}

fn default_products_table() -> String {
    "Products".to_string()
}

/// Global configuration loaded from `~/.config/winkel/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WinkelConfig {
    /// Base URL of the hosted backend (e.g. `https://abc.supabase.co`); `/rest/v1` is appended.
    #[serde(default)]
    pub backend_url: String,
    /// Project API key, sent both as `apikey` and as a bearer token.
    #[serde(default)]
    pub api_key: String,
    /// Table holding the lists.
    #[serde(default = "default_lists_table")]
    pub lists_table: String,
    /// Table holding the products.
    #[serde(default = "default_products_table")]
    pub products_table: String,
    /// Connect timeout in seconds (None = libcurl default).
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Whole-request timeout in seconds (None = no timeout).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for WinkelConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            api_key: String::new(),
            lists_table: default_lists_table(),
            products_table: default_products_table(),
            connect_timeout_secs: None,
            timeout_secs: None,
        }
    }
}

impl WinkelConfig {
    /// Applies `WINKEL_BACKEND_URL` / `WINKEL_API_KEY` when set and non-empty.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(
            std::env::var(ENV_BACKEND_URL).ok(),
            std::env::var(ENV_API_KEY).ok(),
        );
    }

    fn apply_overrides(&mut self, backend_url: Option<String>, api_key: Option<String>) {
        if let Some(url) = backend_url.filter(|v| !v.trim().is_empty()) {
            self.backend_url = url.trim().to_string();
        }
        if let Some(key) = api_key.filter(|v| !v.trim().is_empty()) {
            self.api_key = key.trim().to_string();
        }
    }

    /// Fails unless both the backend URL and the API key are set.
    pub fn ensure_backend(&self) -> Result<()> {
        if self.backend_url.trim().is_empty() {
            anyhow::bail!(
                "backend_url is not configured; set it in {} or via {}",
                config_path_display(),
                ENV_BACKEND_URL
            );
        }
        if self.api_key.trim().is_empty() {
            anyhow::bail!(
                "api_key is not configured; set it in {} or via {}",
                config_path_display(),
                ENV_API_KEY
            );
        }
        Ok(())
    }
}

fn config_path_display() -> String {
    config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "config.toml".to_string())
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("winkel")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
/// Environment overrides are applied on top.
pub fn load_or_init() -> Result<WinkelConfig> {
    let path = config_path()?;
    let mut cfg = load_or_init_at(&path)?;
    cfg.apply_env_overrides();
    Ok(cfg)
}

/// Like [`load_or_init`] for an explicit path, without environment overrides.
pub fn load_or_init_at(path: &Path) -> Result<WinkelConfig> {
    if !path.exists() {
        let default_cfg = WinkelConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)
            .with_context(|| format!("writing default config to {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: WinkelConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}
