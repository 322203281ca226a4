/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Application configuration loaded from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";

const PROD_ORIGINS: &[&str] = &[
    "https://www.be-vokal.com",
    "https://be-vokal.com",
    "https://www.simsom.com",
    "https://simsom.com",
    "https://meeno.com",
    "https://www.meeno.com",
    "https://talk.meeno.com",
    "https://my.meeno.com",
];

const DEV_ORIGINS: &[&str] = &["http://localhost:8082", "http://localhost:8081"];

/// Fatal startup errors. The service refuses to start when any is raised.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),
    #[error("ENVIRONMENT must be set to PROD or DEV, got '{0}'")]
    InvalidEnvironment(String),
}

/// Deployment environment. Selects the CORS origin allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentEnvironment {
    Prod,
    Dev,
}

impl DeploymentEnvironment {
    /// Origins permitted to call the API from a browser.
    pub fn allowed_origins(self) -> &'static [&'static str] {
        match self {
            DeploymentEnvironment::Prod => PROD_ORIGINS,
            DeploymentEnvironment::Dev => DEV_ORIGINS,
        }
    }
}

impl FromStr for DeploymentEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PROD" => Ok(DeploymentEnvironment::Prod),
            "DEV" => Ok(DeploymentEnvironment::Dev),
            other => Err(ConfigError::InvalidEnvironment(other.to_string())),
        }
    }
}

impl fmt::Display for DeploymentEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeploymentEnvironment::Prod => write!(f, "PROD"),
            DeploymentEnvironment::Dev => write!(f, "DEV"),
        }
    }
}

/// Configuration for the token service.
#[derive(Clone)]
pub struct Config {
    /// Address to bind the HTTP server (e.g. "0.0.0.0:8000").
    pub listen_addr: String,
    /// LiveKit API key. Emitted as the `iss` claim.
    pub api_key: String,
    /// LiveKit API secret used to sign tokens (HMAC-SHA256).
    pub api_secret: String,
    /// Media server URL handed back to clients.
    pub server_url: String,
    pub environment: DeploymentEnvironment,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("listen_addr", &self.listen_addr)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("server_url", &self.server_url)
            .field("environment", &self.environment)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Required
    /// - `LIVEKIT_API_KEY`
    /// - `LIVEKIT_API_SECRET`
    /// - `LIVEKIT_URL`
    /// - `ENVIRONMENT` (`PROD` or `DEV`)
    ///
    /// # Optional
    /// - `LISTEN_ADDR` (default: `"0.0.0.0:8000"`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// Failures are logged at `error` before being returned.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::parse(lookup).inspect_err(|e| tracing::error!("Invalid configuration: {e}"))
    }

    fn parse<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let api_key = required("LIVEKIT_API_KEY")?;
        let api_secret = required("LIVEKIT_API_SECRET")?;
        let server_url = required("LIVEKIT_URL")?;
        let environment = required("ENVIRONMENT")?.parse()?;

        let listen_addr = lookup("LISTEN_ADDR")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());

        Ok(Self {
            listen_addr,
            api_key,
            api_secret,
            server_url,
            environment,
        })
    }
}
