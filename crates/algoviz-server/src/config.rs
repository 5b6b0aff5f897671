//! Server configuration read from `ALGOVIZ_*` environment variables.
//!
//! Unset variables fall back to defaults; set-but-unparseable ones are a
//! startup error.

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Largest accepted sort input.
///
/// Every swap, shift and insert step carries a full copy of the array, and
/// the quadratic sorts perform O(n^2) of them, so a trace holds O(n^3)
/// values. Serialized, that is about 4 MB at n = 100, 32 MB at n = 200 and
/// 255 MB at n = 400.
pub const DEFAULT_MAX_ARRAY_LEN: usize = 100;

/// Snapshot values one trace may retain before the server warns at startup
/// that `max_array_len` is set too high.
pub const SNAPSHOT_VALUE_BUDGET: usize = 1_000_000;

pub const DEFAULT_MAX_GRID_CELLS: usize = 250_000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got '{value}'")]
    InvalidValue {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Input-size limits applied before an engine runs.
///
/// Engines run synchronously to completion, so bounding input size is how
/// the transport bounds request latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of elements in a sort request.
    pub max_array_len: usize,
    /// Maximum `rows * cols` of a search grid.
    pub max_grid_cells: usize,
}

impl Limits {
    /// Upper bound on the snapshot values of one sort trace at
    /// `max_array_len`: at most n(n+1)/2 mutating steps, each copying n values.
    pub fn worst_case_snapshot_values(&self) -> usize {
        let n = self.max_array_len;
        (n.saturating_mul(n.saturating_add(1)) / 2).saturating_mul(n)
    }
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_array_len: DEFAULT_MAX_ARRAY_LEN,
            max_grid_cells: DEFAULT_MAX_GRID_CELLS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub limits: Limits,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            limits: Limits::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerConfig::default();

        let host = lookup("ALGOVIZ_HOST").unwrap_or(defaults.host);
        let port = parse_var(&lookup, "ALGOVIZ_PORT", "a port number")?.unwrap_or(defaults.port);
        let max_array_len = parse_var(&lookup, "ALGOVIZ_MAX_ARRAY_LEN", "a positive integer")?
            .unwrap_or(defaults.limits.max_array_len);
        let max_grid_cells = parse_var(&lookup, "ALGOVIZ_MAX_GRID_CELLS", "a positive integer")?
            .unwrap_or(defaults.limits.max_grid_cells);

        Ok(ServerConfig {
            host,
            port,
            limits: Limits {
                max_array_len,
                max_grid_cells,
            },
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, expected: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                var,
                expected,
                value,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoviz_core::{SortAlgorithm, StepRecord};
    use algoviz_engine::sort;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("ALGOVIZ_HOST", "127.0.0.1"),
            ("ALGOVIZ_PORT", "8080"),
            ("ALGOVIZ_MAX_ARRAY_LEN", "64"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.limits.max_array_len, 64);
        assert_eq!(config.limits.max_grid_cells, DEFAULT_MAX_GRID_CELLS);
    }

    #[test]
    fn default_array_limit_stays_within_snapshot_budget() {
        let limits = Limits::default();
        assert!(limits.worst_case_snapshot_values() <= SNAPSHOT_VALUE_BUDGET);

        let n = limits.max_array_len;
        let reversed: Vec<f64> = (0..n).rev().map(|v| v as f64).collect();
        let constant = vec![7.0; n];
        for algorithm in SortAlgorithm::ALL {
            for values in [&reversed, &constant] {
                let trace = sort::run(algorithm, values).unwrap();
                let retained: usize = trace
                    .iter()
                    .filter_map(StepRecord::snapshot)
                    .map(<[f64]>::len)
                    .sum();
                assert!(
                    retained <= limits.worst_case_snapshot_values(),
                    "{} retained {} values",
                    algorithm,
                    retained
                );
            }
        }
    }

    #[test]
    fn raised_array_limit_exceeds_snapshot_budget() {
        let limits = Limits {
            max_array_len: 400,
            ..Limits::default()
        };
        assert!(limits.worst_case_snapshot_values() > SNAPSHOT_VALUE_BUDGET);

        let limits = Limits {
            max_array_len: usize::MAX,
            ..Limits::default()
        };
        assert_eq!(limits.worst_case_snapshot_values(), usize::MAX);
    }

    #[test]
    fn rejects_unparseable_values() {
        let err = ServerConfig::from_lookup(lookup_from(&[("ALGOVIZ_PORT", "http")])).unwrap_err();
        assert_eq!(err.to_string(), "ALGOVIZ_PORT must be a port number, got 'http'");
    }
}
