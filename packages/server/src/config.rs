//! Server configuration read from the environment.

/// Largest forecast window accepted over HTTP when `FORECAST_MAX_HOURS` is
/// unset: one week.
pub const DEFAULT_MAX_FORECAST_HOURS: i64 = 168;

/// Startup settings for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind (`BIND_ADDR`).
    pub bind_addr: String,
    /// TCP port (`PORT`).
    pub port: u16,
    /// Seed for reproducible forecasts (`FORECAST_SEED`). When unset every
    /// request draws fresh entropy.
    pub forecast_seed: Option<u64>,
    /// Largest `hours` value the forecast endpoint accepts
    /// (`FORECAST_MAX_HOURS`).
    pub max_forecast_hours: i64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".to_string(),
            port: 8080,
            forecast_seed: None,
            max_forecast_hours: DEFAULT_MAX_FORECAST_HOURS,
        }
    }
}

impl ServerConfig {
    /// Reads the configuration from process environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, falling back to the
    /// defaults for unset or unparsable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            port: parse_var(&lookup, "PORT").unwrap_or(defaults.port),
            forecast_seed: parse_var(&lookup, "FORECAST_SEED"),
            max_forecast_hours: parse_var(&lookup, "FORECAST_MAX_HOURS")
                .filter(|hours: &i64| {
                    if *hours < 0 {
                        log::warn!("Ignoring negative FORECAST_MAX_HOURS={hours}");
                    }
                    *hours >= 0
                })
                .unwrap_or(defaults.max_forecast_hours),
        }
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring unparsable {key}={raw:?}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn config(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: BTreeMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config(&[]), ServerConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let cfg = config(&[
            ("BIND_ADDR", "0.0.0.0"),
            ("PORT", "5000"),
            ("FORECAST_SEED", "42"),
            ("FORECAST_MAX_HOURS", "24"),
        ]);
        assert_eq!(cfg.bind_addr, "0.0.0.0");
        assert_eq!(cfg.port, 5000);
        assert_eq!(cfg.forecast_seed, Some(42));
        assert_eq!(cfg.max_forecast_hours, 24);
    }

    #[test]
    fn bad_values_fall_back() {
        let cfg = config(&[
            ("PORT", "eighty"),
            ("FORECAST_SEED", "-3"),
            ("FORECAST_MAX_HOURS", "-1"),
        ]);
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.forecast_seed, None);
        assert_eq!(cfg.max_forecast_hours, DEFAULT_MAX_FORECAST_HOURS);
    }
}
