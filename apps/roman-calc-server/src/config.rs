//! Layered application configuration.
//!
//! Precedence, lowest first:
//! 1. compiled defaults
//! 2. YAML file passed with `--config`
//! 3. `APP__*` environment variables (`__` separates nesting levels)
//! 4. legacy `CONVERTER_URL` variable
//! 5. CLI overrides

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use roman_calculator::ConverterConfig;
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides, e.g. `APP__SERVER__BIND_ADDR`.
pub const ENV_PREFIX: &str = "APP__";

/// Legacy variable that sets `converter.base_url`.
pub const CONVERTER_URL_ENV: &str = "CONVERTER_URL";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub converter: ConverterConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Socket address the HTTP server listens on.
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_owned(),
        }
    }
}

/// Log line encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Log levels: a default filter plus per-target overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub default: String,
    pub modules: BTreeMap<String, String>,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: "info".to_owned(),
            modules: BTreeMap::new(),
            format: LogFormat::Text,
        }
    }
}

impl LoggingConfig {
    /// `EnvFilter` directive string, e.g. `info,roman_calculator=debug`.
    #[must_use]
    pub fn filter_directives(&self) -> String {
        let mut directives = self.default.clone();
        for (target, level) in &self.modules {
            directives.push(',');
            directives.push_str(target);
            directives.push('=');
            directives.push_str(level);
        }
        directives
    }
}

/// Overrides taken from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub verbose: u8,
}

impl AppConfig {
    /// Load configuration from defaults, the optional YAML file and the environment.
    ///
    /// # Errors
    /// Fails if `path` is given but is not a file, or if any layer does not
    /// deserialize into `AppConfig`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        figment = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(
                Env::raw()
                    .only(&[CONVERTER_URL_ENV])
                    .map(|_| "converter.base_url".into()),
            );

        figment
            .extract()
            .context("failed to parse configuration (yaml/env)")
    }

    /// Apply CLI overrides on top of the loaded layers.
    ///
    /// # Errors
    /// Fails if `--port` is given and `server.bind_addr` is not a socket address.
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) -> Result<()> {
        if let Some(port) = overrides.port {
            let mut addr = self.bind_addr()?;
            addr.set_port(port);
            self.server.bind_addr = addr.to_string();
        }

        match overrides.verbose {
            0 => {}
            1 => self.logging.default = "info".to_owned(),
            2 => self.logging.default = "debug".to_owned(),
            _ => self.logging.default = "trace".to_owned(),
        }
        Ok(())
    }

    /// Check values that the layers cannot type-check on their own.
    ///
    /// # Errors
    /// Fails on an unparsable bind address or a converter URL that is not
    /// an absolute http/https URL.
    pub fn validate(&self) -> Result<()> {
        self.bind_addr()?;

        let url = url::Url::parse(&self.converter.base_url)
            .with_context(|| format!("invalid converter.base_url '{}'", self.converter.base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!(
                "invalid converter.base_url '{}': scheme must be http or https",
                self.converter.base_url
            );
        }
        if url.host_str().is_none() {
            bail!(
                "invalid converter.base_url '{}': missing host",
                self.converter.base_url
            );
        }
        Ok(())
    }

    /// Parsed `server.bind_addr`.
    ///
    /// # Errors
    /// Fails if the value is not a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server
            .bind_addr
            .parse()
            .with_context(|| format!("invalid server.bind_addr '{}'", self.server.bind_addr))
    }

    /// Render the effective configuration as YAML.
    ///
    /// # Errors
    /// Fails if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self).context("failed to render configuration as YAML")
    }
}
