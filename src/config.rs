use std::env;
use anyhow::{bail, Context, Result};

pub const DEFAULT_SERVICE_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVICE_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct Config {
    pub service_host: String,
    pub service_port: u16,
    /// Mount `/docs` and `/openapi.json`
    pub docs_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            service_host: DEFAULT_SERVICE_HOST.to_string(),
            service_port: DEFAULT_SERVICE_PORT,
            docs_enabled: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Missing keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let service_host = lookup("SERVICE_HOST")
            .unwrap_or_else(|| DEFAULT_SERVICE_HOST.to_string());
        if service_host.trim().is_empty() {
            bail!("SERVICE_HOST must not be empty");
        }

        let service_port = match lookup("SERVICE_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("SERVICE_PORT must be a valid port number (0-65535), got '{}'", raw))?,
            None => DEFAULT_SERVICE_PORT,
        };

        let docs_enabled = match lookup("SERVICE_DOCS") {
            Some(raw) => parse_flag(&raw)
                .with_context(|| format!("SERVICE_DOCS must be a boolean flag, got '{}'", raw))?,
            None => true,
        };

        Ok(Config {
            service_host,
            service_port,
            docs_enabled,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
        tracing::info!("  API docs: {}", if self.docs_enabled { "enabled" } else { "disabled" });
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("unrecognized flag value '{}'", other),
    }
}
