use crate::client::JsonSource;
use crate::config::{ProbeConfig, VaultEnv};
use crate::error::ProbeError;
use crate::models::JsonObject;
use async_trait::async_trait;
use serde::de::Error as _;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info, warn};

#[derive(Clone)]
pub struct VaultClient {
    client: reqwest::Client,
    env: VaultEnv,
    api_log_path: Option<PathBuf>,
}

impl VaultClient {
    pub fn new(env: &VaultEnv, config: &ProbeConfig) -> Result<Self, ProbeError> {
        let mut headers = HeaderMap::new();

        let mut token = HeaderValue::from_str(&env.token).map_err(|source| {
            ProbeError::InvalidHeader { name: crate::VAULT_TOKEN_VAR, source }
        })?;
        token.set_sensitive(true);
        headers.insert(HeaderName::from_static(crate::VAULT_TOKEN_HEADER), token);

        let addr = HeaderValue::from_str(&env.addr).map_err(|source| {
            ProbeError::InvalidHeader { name: crate::VAULT_ADDR_VAR, source }
        })?;
        headers.insert(HeaderName::from_static(crate::VAULT_ADDR_HEADER), addr);

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(config.http.user_agent.as_str());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        if !config.http.system_proxy {
            builder = builder.no_proxy();
        }

        let client = builder.build().map_err(|source| ProbeError::Transport {
            url: env.addr.clone(),
            source,
        })?;

        Ok(VaultClient {
            client,
            env: env.clone(),
            api_log_path: config.logging.api_log_path.clone(),
        })
    }

    /// GET `VAULT_ADDR + path` and decode the body as a JSON object.
    ///
    /// The status code is not checked: Vault reports standby, DR and sealed
    /// states on the health endpoint with non-2xx codes and a normal JSON body.
    /// The body is read in full here, so the connection is released before
    /// this returns on every path.
    pub async fn get_object(&self, path: &str) -> Result<JsonObject, ProbeError> {
        let url = self.env.url_for(path);
        info!("🌐 GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ProbeError::Transport { url: url.clone(), source })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| ProbeError::Transport { url: url.clone(), source })?;

        debug!("📨 {} -> {} ({} bytes)", url, status, body.len());
        if !status.is_success() {
            warn!("⚠️ {} answered with status {}", url, status);
        }
        self.log_api_call("GET", &url, status.as_u16(), &body);

        decode_object(&body).map_err(|source| ProbeError::Decode { url, source })
    }

    fn log_api_call(&self, method: &str, url: &str, response_status: u16, response_body: &[u8]) {
        let Some(path) = &self.api_log_path else {
            return;
        };

        let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        let log_entry = format!(
            "\n=== API CALL [{timestamp}] ===\n\
             Method: {method}\n\
             URL: {url}\n\
             Response Status: {response_status}\n\
             Response Body: {response_body}\n\
             ========================================\n",
            response_body = String::from_utf8_lossy(response_body),
        );

        let written = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut file| file.write_all(log_entry.as_bytes()));
        if let Err(e) = written {
            warn!("⚠️ Could not write API log {}: {}", path.display(), e);
        }
    }
}

/// Decode the first JSON value in `body` as an object.
///
/// Anything after that first value is ignored, and a top-level `null` decodes
/// to an empty object so every key reports as not found. An empty body is an
/// EOF error.
pub fn decode_object(body: &[u8]) -> Result<JsonObject, serde_json::Error> {
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Option<JsonObject>>();
    match values.next() {
        Some(Ok(object)) => Ok(object.unwrap_or_default()),
        Some(Err(e)) => Err(e),
        None => Err(serde_json::Error::custom("EOF while parsing a value")),
    }
}

#[async_trait]
impl JsonSource for VaultClient {
    async fn fetch_object(&self, path: &str) -> Result<JsonObject, ProbeError> {
        self.get_object(path).await
    }
}
