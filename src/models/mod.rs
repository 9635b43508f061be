// Models module - key paths, endpoint table and the decoded JSON shape

pub mod key_path;
pub mod endpoint;

// Re-export all models for easier imports
pub use key_path::*;
pub use endpoint::*;
