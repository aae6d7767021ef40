// src/config.rs
use std::{
    fmt::{self, Debug},
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
    str::FromStr,
    time::Duration,
};

use thiserror::Error;
use tracing::warn;

use crate::message::DEFAULT_MESSAGE;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 45;
pub const DEFAULT_MAX_MESSAGE_CHARS: usize = 8000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("no API key configured: set LLM_API_KEY or {0}")]
    MissingApiKey(String),
    #[error("LLM_PROVIDER=custom requires {0}")]
    MissingCustomSetting(&'static str),
    #[error("unknown provider '{0}' (expected deepseek, openai, mistral or custom)")]
    UnknownProvider(String),
    #[error("unknown run mode '{0}' (expected listen or handler)")]
    UnknownRunMode(String),
    #[error("invalid value for {name}: '{value}'")]
    Invalid { name: &'static str, value: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderKind {
    DeepSeek,
    OpenAi,
    Mistral,
    Custom,
}

impl ProviderKind {
    pub fn default_base_url(self) -> Option<&'static str> {
        match self {
            ProviderKind::DeepSeek => Some("https://api.deepseek.com"),
            ProviderKind::OpenAi => Some("https://api.openai.com/v1"),
            ProviderKind::Mistral => Some("https://api.mistral.ai/v1"),
            ProviderKind::Custom => None,
        }
    }

    pub fn default_model(self) -> Option<&'static str> {
        match self {
            ProviderKind::DeepSeek => Some("deepseek-chat"),
            ProviderKind::OpenAi => Some("gpt-4o-mini"),
            ProviderKind::Mistral => Some("mistral-small-latest"),
            ProviderKind::Custom => None,
        }
    }

    /// Provider-specific variable consulted when `LLM_API_KEY` is unset.
    pub fn key_var(self) -> &'static str {
        match self {
            ProviderKind::DeepSeek => "DEEPSEEK_API_KEY",
            ProviderKind::OpenAi => "OPENAI_API_KEY",
            ProviderKind::Mistral => "MISTRAL_API_KEY",
            ProviderKind::Custom => "CUSTOM_API_KEY",
        }
    }
}

impl FromStr for ProviderKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deepseek" => Ok(ProviderKind::DeepSeek),
            "openai" => Ok(ProviderKind::OpenAi),
            "mistral" => Ok(ProviderKind::Mistral),
            "custom" => Ok(ProviderKind::Custom),
            other => Err(ConfigError::UnknownProvider(other.to_string())),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::DeepSeek => write!(f, "deepseek"),
            ProviderKind::OpenAi => write!(f, "openai"),
            ProviderKind::Mistral => write!(f, "mistral"),
            ProviderKind::Custom => write!(f, "custom"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunMode {
    /// Bind a local TCP listener and serve.
    Listen,
    /// Build the router for an external host and return without binding.
    Handler,
}

impl FromStr for RunMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "listen" => Ok(RunMode::Listen),
            "handler" => Ok(RunMode::Handler),
            other => Err(ConfigError::UnknownRunMode(other.to_string())),
        }
    }
}

#[derive(Clone)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

impl Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("kind", &self.kind)
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub provider: ProviderConfig,
    pub max_message_chars: usize,
    pub host: IpAddr,
    pub port: u16,
    pub public_dir: PathBuf,
    pub index_file: PathBuf,
    pub run_mode: RunMode,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from any variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let kind = match var("LLM_PROVIDER") {
            Some(raw) => raw.parse()?,
            None => ProviderKind::DeepSeek,
        };

        let api_key = var("LLM_API_KEY")
            .or_else(|| var(kind.key_var()))
            .ok_or_else(|| ConfigError::MissingApiKey(kind.key_var().to_string()))?;

        let base_url = var("LLM_BASE_URL")
            .or_else(|| kind.default_base_url().map(str::to_owned))
            .ok_or(ConfigError::MissingCustomSetting("LLM_BASE_URL"))?;
        let model = var("LLM_MODEL")
            .or_else(|| kind.default_model().map(str::to_owned))
            .ok_or(ConfigError::MissingCustomSetting("LLM_MODEL"))?;

        let timeout_secs = parse_or("LLM_TIMEOUT_SECS", var("LLM_TIMEOUT_SECS"), DEFAULT_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid { name: "LLM_TIMEOUT_SECS", value: "0".into() });
        }

        let max_message_chars =
            parse_or("MAX_MESSAGE_CHARS", var("MAX_MESSAGE_CHARS"), DEFAULT_MAX_MESSAGE_CHARS)?;
        // A request without a message must still fit once the default is filled in.
        if max_message_chars < DEFAULT_MESSAGE.chars().count() {
            return Err(ConfigError::Invalid {
                name: "MAX_MESSAGE_CHARS",
                value: max_message_chars.to_string(),
            });
        }
        let port = parse_or("PORT", var("PORT"), DEFAULT_PORT)?;
        let host = parse_or("HOST", var("HOST"), IpAddr::V4(Ipv4Addr::UNSPECIFIED))?;

        let run_mode = match var("RUN_MODE") {
            Some(raw) => raw.parse()?,
            None if var("NODE_ENV").as_deref() == Some("production") => {
                warn!("NODE_ENV=production without RUN_MODE: handler mode, no listener will be bound");
                RunMode::Handler
            }
            None => RunMode::Listen,
        };

        Ok(Self {
            provider: ProviderConfig {
                kind,
                base_url,
                api_key,
                model,
                timeout: Duration::from_secs(timeout_secs),
            },
            max_message_chars,
            host,
            port,
            public_dir: var("PUBLIC_DIR").unwrap_or_else(|| "public".into()).into(),
            index_file: var("INDEX_FILE").unwrap_or_else(|| "views/index.html".into()).into(),
            run_mode,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T: FromStr>(name: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
