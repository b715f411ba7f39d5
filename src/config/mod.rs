//! Configuration loading and management

use crate::auth::UserAccount;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Listen address for the HTTP server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind (e.g., "127.0.0.1" or "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// The address string passed to the TCP listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Complete configuration for the storefront service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP listen address
    #[serde(default)]
    pub server: ServerConfig,

    /// Accounts that may request API tokens
    #[serde(default = "default_users")]
    pub users: Vec<UserAccount>,

    /// Whether to load the demo catalog on startup
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            users: default_users(),
            seed_demo_data: default_seed_demo_data(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_seed_demo_data() -> bool {
    true
}

fn default_users() -> Vec<UserAccount> {
    vec![
        UserAccount {
            username: "admin".to_string(),
            password: "admin".to_string(),
            admin: true,
        },
        UserAccount {
            username: "user".to_string(),
            password: "user".to_string(),
            admin: false,
        },
    ]
}
