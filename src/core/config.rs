//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Site address, asset paths and reload ports come from Leptos itself
//! (`[package.metadata.leptos]`, overridable with `LEPTOS_*` variables).

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Compress responses with brotli/gzip (`COMPRESSION`, default on)
    pub compression: bool,

    /// Serve `.br`/`.gz` siblings of static assets when present
    /// (`PRECOMPRESSED_ASSETS`, default on)
    pub precompressed_assets: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            compression: parse_flag("COMPRESSION", lookup("COMPRESSION").as_deref(), true),
            precompressed_assets: parse_flag(
                "PRECOMPRESSED_ASSETS",
                lookup("PRECOMPRESSED_ASSETS").as_deref(),
                true,
            ),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compression: true,
            precompressed_assets: true,
        }
    }
}

fn parse_flag(key: &str, value: Option<&str>, default: bool) -> bool {
    let Some(value) = value else {
        return default;
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        other => {
            tracing::warn!("Ignoring invalid {}={:?}, using {}", key, other, default);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config, Config::default());
        assert!(config.compression);
        assert!(config.precompressed_assets);
    }

    #[test]
    fn test_flags_disable() {
        let config = Config::from_lookup(lookup(&[
            ("COMPRESSION", "false"),
            ("PRECOMPRESSED_ASSETS", "0"),
        ]));
        assert!(!config.compression);
        assert!(!config.precompressed_assets);
    }

    #[test]
    fn test_flags_are_case_insensitive() {
        let config = Config::from_lookup(lookup(&[("COMPRESSION", " OFF ")]));
        assert!(!config.compression);
    }

    #[test]
    fn test_invalid_flag_falls_back_to_default() {
        let config = Config::from_lookup(lookup(&[("COMPRESSION", "maybe")]));
        assert!(config.compression);
    }
}
