//! Server configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use bazar_pages::StoreProfile;

/// Top-level server configuration, loaded from a TOML file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    pub listen_addr: String,
    /// URL of the product collection document.
    pub products_url: String,
    /// Store identity used across the rendered pages.
    pub store: StoreProfile,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:3000".to_string(),
            products_url: "http://127.0.0.1:8080/products.json".to_string(),
            store: StoreProfile::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from `path`. A missing file falls back to the
    /// defaults; a present but malformed file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = ServerConfig::load(Path::new("/nonexistent/bazar.toml")).unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:3000");
    }

    #[test]
    fn test_parse_partial_config() {
        let config: ServerConfig = toml::from_str(
            r#"
            products_url = "https://example.com/p.json"

            [store]
            name = "فروشگاه تست"
            whatsapp_number = "989123456789"
            "#,
        )
        .unwrap();

        assert_eq!(config.products_url, "https://example.com/p.json");
        assert_eq!(config.store.name, "فروشگاه تست");
        assert_eq!(config.store.whatsapp_number, "989123456789");
        // Unset fields keep their defaults.
        assert_eq!(config.listen_addr, "127.0.0.1:3000");
    }
}
