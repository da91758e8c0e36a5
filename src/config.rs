use crate::i18n::LanguageRegistry;
use anyhow::{bail, Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub bind_address: String,
    pub port: u16,

    // Catalogue
    /// Number of base tools shown on quick-access surfaces
    pub quick_access_count: usize,

    // Locale
    pub default_language: &'static str,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let config = Self {
            bind_address: std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: match std::env::var("PORT") {
                Ok(v) => v.parse().context("PORT must be a valid port number")?,
                Err(_) => 8080,
            },

            quick_access_count: match std::env::var("QUICK_ACCESS_COUNT") {
                Ok(v) => v
                    .parse()
                    .context("QUICK_ACCESS_COUNT must be a positive integer")?,
                Err(_) => 8,
            },

            default_language: LanguageRegistry::get().default_language().code,
        };

        if config.quick_access_count == 0 {
            bail!("QUICK_ACCESS_COUNT must be greater than zero");
        }

        // DEFAULT_LANGUAGE may only confirm the registry default; the
        // fallback bundle is fixed at compile time.
        if let Ok(code) = std::env::var("DEFAULT_LANGUAGE") {
            if code != config.default_language {
                bail!(
                    "DEFAULT_LANGUAGE '{}' does not match the registry default '{}'",
                    code,
                    config.default_language
                );
            }
        }

        Ok(config)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            quick_access_count: 8,
            default_language: LanguageRegistry::get().default_language().code,
        }
    }
}
