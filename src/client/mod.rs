// Client module - Vault HTTP client and the seam the runner fetches through
pub mod api;

pub use api::{VaultClient, decode_object};

use crate::error::ProbeError;
use crate::models::JsonObject;
use async_trait::async_trait;

/// Anything that can turn an endpoint path into a decoded JSON object.
#[async_trait]
pub trait JsonSource: Send + Sync {
    async fn fetch_object(&self, path: &str) -> Result<JsonObject, ProbeError>;
}
