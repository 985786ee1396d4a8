//! Deployment settings, read from the environment once per process.
//!
//! | variable                     | default                 |
//! |------------------------------|-------------------------|
//! | `PORTKEY_TELEMETRY_URL`      | [`DEFAULT_TELEMETRY_URL`] |
//! | `PORTKEY_FETCH_TIMEOUT_SECS` | `10`                    |
//! | `PORTKEY_CHART_RENDERER`     | `image` (or `markup`)   |
//! | `PORTKEY_CACHE_TTL_SECS`     | `0` (cache disabled)    |
//!
//! Invalid values are logged and replaced by the default.

use std::time::Duration;

use once_cell::sync::Lazy;

use crate::chart::RendererKind;

pub const DEFAULT_TELEMETRY_URL: &str =
    "https://portkey-2a1ae-default-rtdb.firebaseio.com/playtesting1_analytics.json";
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

pub const TELEMETRY_URL_VAR: &str = "PORTKEY_TELEMETRY_URL";
pub const FETCH_TIMEOUT_VAR: &str = "PORTKEY_FETCH_TIMEOUT_SECS";
pub const CHART_RENDERER_VAR: &str = "PORTKEY_CHART_RENDERER";
pub const CACHE_TTL_VAR: &str = "PORTKEY_CACHE_TTL_SECS";

static GLOBAL: Lazy<DashboardConfig> = Lazy::new(DashboardConfig::from_env);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub telemetry_url: String,
    pub fetch_timeout: Duration,
    pub renderer: RendererKind,
    /// How long a fetched snapshot may be reused. `None` refetches on every render.
    pub cache_ttl: Option<Duration>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            telemetry_url: DEFAULT_TELEMETRY_URL.to_string(),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            renderer: RendererKind::default(),
            cache_ttl: None,
        }
    }
}

impl DashboardConfig {
    /// Process-wide settings, loaded on first use.
    pub fn global() -> &'static DashboardConfig {
        &GLOBAL
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; unset or blank keys keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = read(TELEMETRY_URL_VAR) {
            config.telemetry_url = url.trim().to_string();
        }

        if let Some(raw) = read(FETCH_TIMEOUT_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.fetch_timeout = Duration::from_secs(secs),
                _ => tracing::warn!(
                    "{FETCH_TIMEOUT_VAR}={raw:?} is not a positive number of seconds; using {}s",
                    DEFAULT_FETCH_TIMEOUT.as_secs()
                ),
            }
        }

        if let Some(raw) = read(CHART_RENDERER_VAR) {
            match RendererKind::parse(&raw) {
                Some(kind) => config.renderer = kind,
                None => tracing::warn!(
                    "{CHART_RENDERER_VAR}={raw:?} is not `image` or `markup`; using image"
                ),
            }
        }

        if let Some(raw) = read(CACHE_TTL_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(0) => config.cache_ttl = None,
                Ok(secs) => config.cache_ttl = Some(Duration::from_secs(secs)),
                Err(_) => tracing::warn!(
                    "{CACHE_TTL_VAR}={raw:?} is not a number of seconds; caching disabled"
                ),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> DashboardConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        DashboardConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(config_from(&[]), DashboardConfig::default());
        assert_eq!(DashboardConfig::default().telemetry_url, DEFAULT_TELEMETRY_URL);
    }

    #[test]
    fn reads_every_setting() {
        let config = config_from(&[
            (TELEMETRY_URL_VAR, " http://localhost:9000/data.json "),
            (FETCH_TIMEOUT_VAR, "3"),
            (CHART_RENDERER_VAR, "markup"),
            (CACHE_TTL_VAR, "60"),
        ]);
        assert_eq!(config.telemetry_url, "http://localhost:9000/data.json");
        assert_eq!(config.fetch_timeout, Duration::from_secs(3));
        assert_eq!(config.renderer, RendererKind::Markup);
        assert_eq!(config.cache_ttl, Some(Duration::from_secs(60)));
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = config_from(&[
            (TELEMETRY_URL_VAR, "   "),
            (FETCH_TIMEOUT_VAR, "0"),
            (CHART_RENDERER_VAR, "plotly"),
            (CACHE_TTL_VAR, "soon"),
        ]);
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn zero_ttl_disables_the_cache() {
        let config = config_from(&[(CACHE_TTL_VAR, "0")]);
        assert_eq!(config.cache_ttl, None);
    }
}
