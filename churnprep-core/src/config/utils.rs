//! Configuration utility functions
//!
//! Helpers for reading override values from an environment-style lookup.

use std::path::PathBuf;

/// Get a path value from the lookup or use the default
pub fn get_path<F>(lookup: &F, key: &str, default: PathBuf) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or(default)
}
