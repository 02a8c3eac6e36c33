// src/core/config_manager.rs
//! Unified configuration management: defaults, optional config.yaml, then environment

use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::path::Path;
use std::time::Duration;
use tracing::info;

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_NOTICE_TTL_SECS: u64 = 5;
const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub service: ServiceConfig,
    pub server: ServerConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub api_base_url: String,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct UiConfig {
    pub notice_ttl: Duration,
}

/// One environment section of config.yaml; every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
struct EnvironmentSection {
    api_base_url: Option<String>,
    address: Option<String>,
    port: Option<u16>,
    notice_ttl_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: EnvironmentSection,
    #[serde(default)]
    production: EnvironmentSection,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                api_base_url: DEFAULT_API_BASE_URL.to_string(),
            },
            server: ServerConfig {
                address: IpAddr::V4(Ipv4Addr::LOCALHOST),
                port: DEFAULT_PORT,
            },
            ui: UiConfig {
                notice_ttl: Duration::from_secs(DEFAULT_NOTICE_TTL_SECS),
            },
        }
    }
}

impl ConfigManager {
    /// Load all configuration layers from the current directory and process environment
    pub fn load() -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading configuration for environment: {}", environment);

        let mut config = Self::default();

        let section = Self::load_file_section(Path::new(CONFIG_FILE), &environment)?;
        if let Some(section) = section {
            config.apply_section(section)?;
        }

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Override the API base URL (CLI flag)
    pub fn with_api_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.service.api_base_url = normalize_base_url(&url);
        }
        self
    }

    /// Override the listening port (CLI flag)
    pub fn with_port(mut self, port: Option<u16>) -> Self {
        if let Some(port) = port {
            self.server.port = port;
        }
        self
    }

    fn get_environment() -> String {
        std::env::var("AJIPS_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn load_file_section(path: &Path, environment: &str) -> Result<Option<EnvironmentSection>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let file: ConfigFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        info!("Loaded configuration file: {}", path.display());

        Ok(Some(match environment {
            "production" => file.production,
            _ => file.local,
        }))
    }

    fn apply_section(&mut self, section: EnvironmentSection) -> Result<()> {
        if let Some(url) = section.api_base_url {
            self.service.api_base_url = normalize_base_url(&url);
        }
        if let Some(address) = section.address {
            self.server.address = parse_address(&address)?;
        }
        if let Some(port) = section.port {
            self.server.port = port;
        }
        if let Some(secs) = section.notice_ttl_secs {
            self.ui.notice_ttl = Duration::from_secs(secs);
        }
        Ok(())
    }

    fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("AJIPS_API_URL") {
            self.service.api_base_url = normalize_base_url(&url);
        }
        if let Some(address) = lookup("AJIPS_ADDRESS") {
            self.server.address = parse_address(&address)?;
        }
        if let Some(port) = lookup("AJIPS_PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| anyhow::anyhow!("AJIPS_PORT must be a valid port number"))?;
        }
        if let Some(secs) = lookup("AJIPS_NOTICE_TTL_SECS") {
            let secs: u64 = secs
                .parse()
                .map_err(|_| anyhow::anyhow!("AJIPS_NOTICE_TTL_SECS must be a whole number"))?;
            self.ui.notice_ttl = Duration::from_secs(secs);
        }
        Ok(())
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn parse_address(address: &str) -> Result<IpAddr> {
    address
        .parse()
        .with_context(|| format!("Invalid listen address: {}", address))
}
