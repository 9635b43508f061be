// Dotted key paths and the resolver that walks them through decoded JSON
use serde_json::{Map, Value};
use std::fmt;

/// Top level of every decoded response body.
pub type JsonObject = Map<String, Value>;

/// A dot-separated route through nested JSON objects, e.g. `license.expiry_time`.
///
/// Splitting is literal: there is no escaping, so a key that itself contains a
/// dot can never be addressed. The empty string is one empty segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    dotted: String,
    segments: Vec<String>,
}

impl KeyPath {
    pub fn new(dotted: impl Into<String>) -> Self {
        let dotted = dotted.into();
        let segments = dotted.split('.').map(str::to_string).collect();
        Self { dotted, segments }
    }

    pub fn as_str(&self) -> &str {
        &self.dotted
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Walk `root` one segment at a time.
    ///
    /// Returns `None` when a segment is missing, or when an intermediate value
    /// is not an object. An explicit `null` at the last segment is `Some(&Null)`.
    pub fn resolve<'a>(&self, root: &'a JsonObject) -> Option<&'a Value> {
        let (last, parents) = self.segments.split_last()?;

        let mut current = root;
        for segment in parents {
            match current.get(segment)? {
                Value::Object(nested) => current = nested,
                _ => return None,
            }
        }

        current.get(last)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dotted)
    }
}

impl From<&str> for KeyPath {
    fn from(dotted: &str) -> Self {
        KeyPath::new(dotted)
    }
}

/// Resolve a dotted `path` against `root`. See [`KeyPath::resolve`].
pub fn lookup<'a>(root: &'a JsonObject, path: &str) -> Option<&'a Value> {
    KeyPath::new(path).resolve(root)
}
