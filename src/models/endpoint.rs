use crate::models::key_path::KeyPath;

/// One API path and the key paths to pull out of its response, in print order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub path: String,
    pub keys: Vec<KeyPath>,
}

impl Endpoint {
    pub fn new(path: &str, keys: &[&str]) -> Self {
        Self {
            path: path.to_string(),
            keys: keys.iter().map(|k| KeyPath::new(*k)).collect(),
        }
    }
}

/// The fixed table of endpoints a run walks. Built once at startup and handed
/// to the runner; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointSpec {
    endpoints: Vec<Endpoint>,
}

impl EndpointSpec {
    pub fn new(endpoints: Vec<Endpoint>) -> Self {
        Self { endpoints }
    }

    /// Health and autopilot endpoints queried by the `vault-probe` binary.
    pub fn vault_default() -> Self {
        Self::new(vec![
            Endpoint::new(
                crate::HEALTH_PATH,
                &["version", "license.expiry_time", "replication_dr_mode"],
            ),
            Endpoint::new(crate::AUTOPILOT_CONFIG_PATH, &["response.key"]),
        ])
    }

    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Total number of report lines a clean run produces.
    pub fn key_count(&self) -> usize {
        self.endpoints.iter().map(|e| e.keys.len()).sum()
    }
}

impl<'a> IntoIterator for &'a EndpointSpec {
    type Item = &'a Endpoint;
    type IntoIter = std::slice::Iter<'a, Endpoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.endpoints.iter()
    }
}
