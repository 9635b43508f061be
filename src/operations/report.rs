// Walks the endpoint table and writes one report line per requested key
use crate::client::{JsonSource, VaultClient};
use crate::config::{ProbeConfig, VaultEnv};
use crate::error::ProbeError;
use crate::models::{Endpoint, EndpointSpec, KeyPath};
use serde_json::Value;
use std::io::Write;
use tracing::{debug, info, warn};

/// How a resolved value is printed. Strings lose their quotes, the rest uses
/// compact JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn report_line(path: &str, key: &KeyPath, value: Option<&Value>) -> String {
    match value {
        Some(value) => format!("Response from {} ({}): {}", path, key, render_value(value)),
        None => format!("Response from {} ({}): key not found", path, key),
    }
}

/// Print the endpoint table, one `<path>: <key>, <key>` line per endpoint.
pub fn write_endpoint_list<W: Write>(spec: &EndpointSpec, out: &mut W) -> Result<(), ProbeError> {
    for endpoint in spec {
        let keys: Vec<&str> = endpoint.keys.iter().map(|k| k.as_str()).collect();
        writeln!(out, "{}: {}", endpoint.path, keys.join(", "))?;
    }
    Ok(())
}

pub struct ReportRunner<'a, S: JsonSource + ?Sized> {
    source: &'a S,
    spec: &'a EndpointSpec,
}

impl<'a, S: JsonSource + ?Sized> ReportRunner<'a, S> {
    pub fn new(source: &'a S, spec: &'a EndpointSpec) -> Self {
        Self { source, spec }
    }

    /// Process every endpoint in table order. The first fetch or decode error
    /// ends the run; later endpoints are not requested.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<usize, ProbeError> {
        if self.spec.is_empty() {
            warn!("⚠️ Endpoint table is empty, nothing to probe");
            return Ok(0);
        }
        debug!("🚀 Probing {} endpoints for {} keys", self.spec.len(), self.spec.key_count());

        let mut lines = 0;
        for endpoint in self.spec {
            lines += self.run_endpoint(endpoint, out).await?;
        }
        info!("✅ Probe complete: {} endpoints, {} keys", self.spec.len(), lines);
        Ok(lines)
    }

    async fn run_endpoint<W: Write>(&self, endpoint: &Endpoint, out: &mut W) -> Result<usize, ProbeError> {
        let data = self.source.fetch_object(&endpoint.path).await?;

        for key in &endpoint.keys {
            let value = key.resolve(&data);
            if value.is_none() {
                debug!("🔍 {} has no key {}", endpoint.path, key);
            }
            writeln!(out, "{}", report_line(&endpoint.path, key, value))?;
        }
        Ok(endpoint.keys.len())
    }
}

/// Full run: read the environment through `env_lookup`, build the HTTP client
/// and report every endpoint. Nothing is requested if the environment is
/// incomplete.
pub async fn run<F, W>(
    env_lookup: F,
    config: &ProbeConfig,
    spec: &EndpointSpec,
    out: &mut W,
) -> Result<usize, ProbeError>
where
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    let env = VaultEnv::from_lookup(env_lookup)?;
    debug!("🔐 Target: {:?}", env);

    let client = VaultClient::new(&env, config)?;
    ReportRunner::new(&client, spec).run(out).await
}
