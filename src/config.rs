use crate::error::ProbeError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Credentials and target address, both taken from the environment.
#[derive(Clone)]
pub struct VaultEnv {
    pub token: String,
    pub addr: String,
}

impl VaultEnv {
    /// Build from any variable source. Unset and empty are both "missing";
    /// the token is checked first.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ProbeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or(ProbeError::MissingEnv(name))
        };

        let token = required(crate::VAULT_TOKEN_VAR)?;
        let addr = required(crate::VAULT_ADDR_VAR)?;
        Ok(Self { token, addr })
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.addr, path)
    }
}

// Hand-written so the token never reaches a log line.
impl std::fmt::Debug for VaultEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultEnv")
            .field("token", &"<redacted>")
            .field("addr", &self.addr)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProbeConfig {
    pub http: HttpConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HttpConfig {
    /// Whole-request timeout in seconds. Unset means wait forever
    pub timeout_seconds: Option<u64>,
    /// Sent as the User-Agent header
    pub user_agent: String,
    /// Honor HTTP_PROXY / HTTPS_PROXY / NO_PROXY from the environment
    pub system_proxy: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: None,
            user_agent: format!("vault-probe/{}", env!("CARGO_PKG_VERSION")),
            system_proxy: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// File that receives one block per API call; unset disables the log
    pub api_log_path: Option<PathBuf>,
}

impl ProbeConfig {
    /// Load settings from `config_path`, or fall back to defaults when no path
    /// was given. A path that was given but cannot be read is an error.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ProbeError> {
        let Some(path) = config_path else {
            debug!("📋 No config file given, using defaults");
            return Ok(Self::default());
        };

        debug!("📋 Loading configuration from {}", path.display());
        let config_str = fs::read_to_string(path).map_err(|source| ProbeError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&config_str)
    }

    pub fn from_toml_str(config_str: &str) -> Result<Self, ProbeError> {
        let config: ProbeConfig = toml::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ProbeError> {
        if self.http.timeout_seconds == Some(0) {
            return Err(ProbeError::Config(
                "http.timeout_seconds must be greater than 0".to_string(),
            ));
        }
        if self.http.user_agent.trim().is_empty() {
            return Err(ProbeError::Config("http.user_agent must not be empty".to_string()));
        }
        if let Some(path) = &self.logging.api_log_path {
            if path.as_os_str().is_empty() {
                return Err(ProbeError::Config("logging.api_log_path must not be empty".to_string()));
            }
        }
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.http.timeout_seconds.map(Duration::from_secs)
    }

    pub fn log_summary(&self) {
        debug!("📋 Configuration Summary:");
        match self.http.timeout_seconds {
            Some(secs) => debug!("   ⏰ Request timeout: {}s", secs),
            None => debug!("   ⏰ Request timeout: none"),
        }
        debug!("   🏷️  User agent: {}", self.http.user_agent);
        if !self.http.system_proxy {
            debug!("   🚫 System proxy disabled");
        }
        if let Some(path) = &self.logging.api_log_path {
            debug!("   📝 API call log: {}", path.display());
        }
    }
}
