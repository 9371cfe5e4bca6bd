//! Global configuration parsing, validation, and credential loading.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::{AppError, Result};

/// Keyring service name under which the model API key is stored.
pub const KEYRING_SERVICE: &str = "ai-workshop-mcp";

/// Keyring entry holding the model API key.
pub const API_KEY_ENTRY: &str = "azure_openai_api_key";

/// Environment variable holding the model API key.
pub const API_KEY_ENV: &str = "AZURE_OPENAI_API_KEY";

/// Environment variable overriding [`ModelConfig::endpoint`].
pub const ENDPOINT_ENV: &str = "AZURE_OPENAI_ENDPOINT";

/// Environment variable overriding [`ModelConfig::deployment`].
pub const DEPLOYMENT_ENV: &str = "AZURE_OPENAI_DEPLOYMENT";

/// Hosted chat-completion endpoint settings.
///
/// The API key is loaded at runtime via OS keychain or environment
/// variable, never from the TOML file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct ModelConfig {
    /// Base URL of the Azure `OpenAI` resource, e.g. `https://name.openai.azure.com`.
    #[serde(default)]
    pub endpoint: String,
    /// Deployment name addressed under `/openai/deployments/`.
    #[serde(default = "default_deployment")]
    pub deployment: String,
    /// Model identifier sent in the request body.
    #[serde(default = "default_model")]
    pub model: String,
    /// Value of the `api-version` query parameter.
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Per-request timeout enforced by the HTTP client.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// API key (populated at runtime).
    #[serde(skip)]
    pub api_key: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            deployment: default_deployment(),
            model: default_model(),
            api_version: default_api_version(),
            timeout_seconds: default_timeout_seconds(),
            api_key: String::new(),
        }
    }
}

fn default_deployment() -> String {
    "gpt-4".into()
}

fn default_model() -> String {
    "gpt-4".into()
}

fn default_api_version() -> String {
    "2024-02-01".into()
}

fn default_timeout_seconds() -> u64 {
    120
}

fn default_resources_dir() -> PathBuf {
    PathBuf::from("resources")
}

fn default_http_port() -> u16 {
    3000
}

/// Global configuration parsed from `config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct GlobalConfig {
    /// Directory holding the workshop reference documents served as resources.
    #[serde(default = "default_resources_dir")]
    pub resources_dir: PathBuf,
    /// HTTP port for the streamable HTTP transport.
    #[serde(default = "default_http_port")]
    pub http_port: u16,
    /// Language-model endpoint settings.
    #[serde(default)]
    pub model: ModelConfig,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            resources_dir: default_resources_dir(),
            http_port: default_http_port(),
            model: ModelConfig::default(),
        }
    }
}

impl GlobalConfig {
    /// Load and validate configuration from a TOML file path.
    ///
    /// A relative `resources_dir` is resolved against the directory that
    /// contains the configuration file.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the file cannot be read or contains
    /// invalid TOML, or if validation fails.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|err| AppError::Config(format!("failed to read config: {err}")))?;
        let mut config = Self::from_toml_str(&raw)?;

        if config.resources_dir.is_relative() {
            if let Some(parent) = path.parent() {
                config.resources_dir = parent.join(&config.resources_dir);
            }
        }

        Ok(config)
    }

    /// Parse configuration from a TOML string and validate it.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if parsing or validation fails.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `AZURE_OPENAI_ENDPOINT` / `AZURE_OPENAI_DEPLOYMENT` from the
    /// process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| env::var(key).ok());
    }

    /// Apply endpoint overrides from an arbitrary key lookup.
    ///
    /// Empty values are ignored.
    pub fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(endpoint) = lookup(ENDPOINT_ENV).filter(|v| !v.trim().is_empty()) {
            self.model.endpoint = endpoint;
        }
        if let Some(deployment) = lookup(DEPLOYMENT_ENV).filter(|v| !v.trim().is_empty()) {
            self.model.deployment = deployment;
        }
    }

    /// Load the model API key from OS keychain with env-var fallback.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if neither keychain nor env var provide
    /// the key.
    pub async fn load_credentials(&mut self) -> Result<()> {
        let api_key = match keychain_secret(API_KEY_ENTRY).await {
            Some(secret) => secret,
            None => {
                info!(env = API_KEY_ENV, "model API key not in keychain, reading env var");
                env::var(API_KEY_ENV)
                    .ok()
                    .filter(|value| !value.is_empty())
                    .ok_or_else(|| {
                        AppError::Config(format!(
                            "model API key missing: store it in keychain entry \
                             {KEYRING_SERVICE}/{API_KEY_ENTRY} or set {API_KEY_ENV}"
                        ))
                    })?
            }
        };

        self.model.api_key = api_key;
        Ok(())
    }

    /// Confirm the model endpoint is usable once all overrides are applied.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the endpoint is empty or not an
    /// `http(s)` URL.
    pub fn ensure_model_endpoint(&self) -> Result<()> {
        let endpoint = self.model.endpoint.trim();
        if endpoint.is_empty() {
            return Err(AppError::Config(format!(
                "model endpoint not configured; set [model].endpoint or {ENDPOINT_ENV}"
            )));
        }
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(AppError::Config(format!(
                "model endpoint must be an http(s) URL, got '{endpoint}'"
            )));
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.model.timeout_seconds == 0 {
            return Err(AppError::Config(
                "model.timeout_seconds must be greater than zero".into(),
            ));
        }

        if self.model.deployment.trim().is_empty() {
            return Err(AppError::Config("model.deployment must not be empty".into()));
        }

        if self.model.api_version.trim().is_empty() {
            return Err(AppError::Config("model.api_version must not be empty".into()));
        }

        Ok(())
    }
}

/// Read `entry` from the OS keychain; `None` when absent, empty or the
/// keychain is unavailable.
async fn keychain_secret(entry: &'static str) -> Option<String> {
    // keyring is synchronous I/O.
    let lookup = tokio::task::spawn_blocking(move || {
        keyring::Entry::new(KEYRING_SERVICE, entry).and_then(|handle| handle.get_password())
    })
    .await;

    match lookup {
        Ok(Ok(secret)) if !secret.is_empty() => Some(secret),
        Ok(Ok(_)) => {
            debug!(entry, "keychain entry is empty");
            None
        }
        Ok(Err(err)) => {
            debug!(entry, %err, "keychain lookup failed");
            None
        }
        Err(err) => {
            warn!(entry, %err, "keychain lookup task failed");
            None
        }
    }
}
