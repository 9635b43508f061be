// Vault probe library
// Fetches a fixed set of Vault endpoints and reports nested fields by dotted key path

pub mod models;
pub mod client;
pub mod operations;
pub mod config;
pub mod error;
pub mod verbosity;

// Re-export commonly used types
pub use models::{Endpoint, EndpointSpec, JsonObject, KeyPath, lookup};
pub use client::{JsonSource, VaultClient};
pub use config::{ProbeConfig, VaultEnv};
pub use error::ProbeError;
pub use operations::{ReportRunner, run};

// Constants
pub const VAULT_TOKEN_VAR: &str = "VAULT_TOKEN";
pub const VAULT_ADDR_VAR: &str = "VAULT_ADDR";
pub const VAULT_TOKEN_HEADER: &str = "x-vault-token";
pub const VAULT_ADDR_HEADER: &str = "x-vault-addr";
pub const HEALTH_PATH: &str = "/v1/sys/health";
pub const AUTOPILOT_CONFIG_PATH: &str = "/v1/sys/storage/raft/autopilot/configuration";
