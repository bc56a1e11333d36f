//! Profile (region) configuration
//!
//! Resolution order:
//! 1. Environment only: when `CLOUDSTACK_ENDPOINT`, `CLOUDSTACK_KEY` and
//!    `CLOUDSTACK_SECRET` are all set, no file is read.
//! 2. INI files, later ones winning per key:
//!    `~/.cloudstack.ini`, `./cloudstack.ini`, `$CLOUDSTACK_CONFIG`.
//!    The section named after the region is the profile.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};

pub const ENV_PREFIX: &str = "CLOUDSTACK";
pub const DEFAULT_REGION: &str = "cloudstack";
pub const DEFAULT_THEME: &str = "default";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_EXPIRATION_SECS: i64 = 600;

/// HTTP verb used to send requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
}

/// Response encoding requested from the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ResponseFormat {
    #[default]
    Json,
    Xml,
}

impl ResponseFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseFormat::Json => "json",
            ResponseFormat::Xml => "xml",
        }
    }
}

/// TLS server verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TlsVerify {
    Enabled,
    Disabled,
    /// PEM bundle of additional trusted roots.
    CaBundle(PathBuf),
}

/// Resolved endpoint, credentials and presentation settings for one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub endpoint: String,
    pub key: String,
    pub secret: String,
    pub method: HttpMethod,
    pub timeout: Duration,
    pub verify: TlsVerify,
    /// Client certificate (PEM with key) for mutual TLS.
    pub cert: Option<PathBuf>,
    pub response: ResponseFormat,
    pub theme: Option<String>,
    /// Signed request lifetime; `None` sends unexpiring signatures.
    pub expiration: Option<Duration>,
}

/// Raw profile as read from a file section or the environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawProfile {
    pub endpoint: Option<String>,
    pub key: Option<String>,
    pub secret: Option<String>,
    pub method: Option<String>,
    pub timeout: Option<u64>,
    pub verify: Option<String>,
    pub cert: Option<String>,
    pub response: Option<String>,
    pub theme: Option<String>,
    pub expiration: Option<i64>,
}

/// Where profiles are looked up; built from the process environment or by tests.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    /// Candidate INI files in increasing precedence.
    pub paths: Vec<PathBuf>,
    /// Environment variables (full names, e.g. `CLOUDSTACK_KEY`).
    pub env: HashMap<String, String>,
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl ConfigSources {
    /// Sources from the real process environment and working directory.
    pub fn from_env() -> Self {
        let env: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(ENV_PREFIX))
            .collect();

        let mut paths = Vec::new();
        if let Some(dirs) = directories::BaseDirs::new() {
            paths.push(dirs.home_dir().join(".cloudstack.ini"));
        }
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join("cloudstack.ini"));
        }
        if let Some(extra) = env.get("CLOUDSTACK_CONFIG") {
            paths.push(PathBuf::from(shellexpand::tilde(extra).as_ref()));
        }
        Self { paths, env }
    }
}

impl Profile {
    /// Load the profile for `region` from explicit sources.
    pub fn load_from(region: &str, sources: &ConfigSources) -> ApplicationResult<Self> {
        if let Some(raw) = Self::env_profile(sources)? {
            debug!("load: profile from environment");
            return Self::from_raw(region, raw);
        }

        let existing: Vec<&PathBuf> = sources.paths.iter().filter(|p| p.exists()).collect();
        if existing.is_empty() {
            return Err(ApplicationError::ConfigFileNotFound {
                tried: sources.paths.clone(),
            });
        }

        let mut builder = Config::builder();
        for path in existing {
            debug!("load: reading {}", path.display());
            builder = builder.add_source(File::new(&path.to_string_lossy(), FileFormat::Ini));
        }
        let config = builder.build().map_err(config_err)?;

        let raw: RawProfile = match config.get(region) {
            Ok(raw) => raw,
            Err(ConfigError::NotFound(_)) => {
                return Err(ApplicationError::ProfileNotFound(region.to_string()))
            }
            Err(e) => return Err(config_err(e)),
        };
        Self::from_raw(region, raw)
    }

    /// Profile from `CLOUDSTACK_*` variables, if endpoint and both credentials are set.
    fn env_profile(sources: &ConfigSources) -> ApplicationResult<Option<RawProfile>> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .source(Some(sources.env.clone().into_iter().collect())),
            )
            .build()
            .map_err(config_err)?;
        let raw: RawProfile = config.try_deserialize().map_err(config_err)?;

        if raw.endpoint.is_some() && raw.key.is_some() && raw.secret.is_some() {
            Ok(Some(raw))
        } else {
            Ok(None)
        }
    }

    fn from_raw(region: &str, raw: RawProfile) -> ApplicationResult<Self> {
        let required = |value: Option<String>, field: &str| {
            value.filter(|v| !v.is_empty()).ok_or_else(|| ApplicationError::Config {
                message: format!("region '{}' has no '{}'", region, field),
            })
        };

        let method = match raw.method.as_deref().map(str::to_ascii_lowercase).as_deref() {
            None | Some("get") => HttpMethod::Get,
            Some("post") => HttpMethod::Post,
            Some(other) => {
                return Err(ApplicationError::Config {
                    message: format!("unsupported method '{}'", other),
                })
            }
        };

        let response = match raw.response.as_deref().map(str::to_ascii_lowercase).as_deref() {
            None | Some("json") => ResponseFormat::Json,
            Some("xml") => ResponseFormat::Xml,
            Some(other) => {
                return Err(ApplicationError::Config {
                    message: format!("unsupported response format '{}'", other),
                })
            }
        };

        let expiration = raw.expiration.unwrap_or(DEFAULT_EXPIRATION_SECS);

        Ok(Self {
            name: region.to_string(),
            endpoint: required(raw.endpoint, "endpoint")?,
            key: required(raw.key, "key")?,
            secret: required(raw.secret, "secret")?,
            method,
            timeout: Duration::from_secs(raw.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS)),
            verify: parse_verify(raw.verify.as_deref()),
            cert: raw
                .cert
                .map(|c| PathBuf::from(shellexpand::tilde(&c).as_ref())),
            response,
            theme: raw.theme,
            expiration: u64::try_from(expiration).ok().map(Duration::from_secs),
        })
    }
}

/// `verify` is either a boolean or a path to a CA bundle.
fn parse_verify(value: Option<&str>) -> TlsVerify {
    match value.map(str::trim) {
        None => TlsVerify::Enabled,
        Some(v) => match v.to_ascii_lowercase().as_str() {
            "" | "true" | "yes" | "1" | "on" => TlsVerify::Enabled,
            "false" | "no" | "0" | "off" => TlsVerify::Disabled,
            _ => TlsVerify::CaBundle(Path::new(shellexpand::tilde(v).as_ref()).to_path_buf()),
        },
    }
}
