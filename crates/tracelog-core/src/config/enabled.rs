//! Process-wide "logging enabled" flag
//!
//! Resolved at most once per process. Sources, first match wins:
//! 1. `TRACELOG_ENABLED` environment variable
//! 2. `enabled` key of the user config file
//! 3. build metadata (`debug_assertions`)
//!
//! Any resolution failure (unparsable variable, unreadable or malformed file)
//! resolves to `false`.

use std::env;

use once_cell::sync::OnceCell;

use super::file::FileConfig;
use crate::error::ConfigResult;

/// Environment variable that forces the flag on or off
pub const ENABLED_ENV: &str = "TRACELOG_ENABLED";

static ENABLED: OnceCell<bool> = OnceCell::new();

/// The cached process-wide flag, resolving it on first call
pub fn log_enabled() -> bool {
    *ENABLED.get_or_init(|| {
        let env_value = env::var(ENABLED_ENV).ok();
        resolve_enabled(env_value.as_deref(), FileConfig::load_user)
    })
}

/// Parse the usual boolean spellings
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Resolve the flag from an env value and a lazily loaded config file
pub(crate) fn resolve_enabled<F>(env_value: Option<&str>, load_file: F) -> bool
where
    F: FnOnce() -> ConfigResult<FileConfig>,
{
    if let Some(value) = env_value {
        return parse_bool(value).unwrap_or(false);
    }

    match load_file() {
        Ok(FileConfig { enabled: Some(enabled), .. }) => enabled,
        Ok(_) => cfg!(debug_assertions),
        Err(_) => false,
    }
}
