//! Environment-driven settings.
//!
//! Each crate owns an explicit config struct with defaults; this module only
//! resolves individual keys so that every crate reports bad values the same way.

use core::str::FromStr;

/// Resolve a setting through `lookup`, falling back to `default`.
///
/// Missing keys use the default silently; unparsable values log a warning and
/// use the default.
pub fn setting<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr + core::fmt::Debug,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(key, value = %raw, ?default, "ignoring unparsable setting");
                default
            }
        },
    }
}

/// Process environment lookup used by `from_env` constructors.
pub fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
