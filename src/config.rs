//! Runtime configuration from environment variables.
//!
//! - `TETRIS_SEED`: seed for the piece randomizer (default: random per run)
//! - `TETRIS_FRAME_MS`: longest a single input poll may wait (default: 16)
//! - `TETRIS_LOG_PATH`: log file; logging is off when unset
//! - `TETRIS_LOG_LEVEL`: `error`, `warn`, `info`, `debug` or `trace` (default: `info`)
//!
//! Unparseable values fall back to the default.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use tracing::Level;

use crate::types::FRAME_MS;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub frame: Duration,
    pub log_path: Option<PathBuf>,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            frame: Duration::from_millis(FRAME_MS),
            log_path: None,
            log_level: Level::INFO,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup (the environment, or a map in tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("TETRIS_SEED").and_then(|v| v.trim().parse::<u64>().ok());
        let frame = lookup("TETRIS_FRAME_MS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.frame);
        let log_path = lookup("TETRIS_LOG_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        let log_level = lookup("TETRIS_LOG_LEVEL")
            .and_then(|v| v.trim().parse::<Level>().ok())
            .unwrap_or(defaults.log_level);

        Self {
            seed,
            frame,
            log_path,
            log_level,
        }
    }

    /// The configured seed, or a fresh random one
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(Config::from_lookup(lookup(&[])), Config::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = Config::from_lookup(lookup(&[
            ("TETRIS_SEED", "42"),
            ("TETRIS_FRAME_MS", "5"),
            ("TETRIS_LOG_PATH", "/tmp/tetris.log"),
            ("TETRIS_LOG_LEVEL", "debug"),
        ]));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.seed_or_random(), 42);
        assert_eq!(config.frame, Duration::from_millis(5));
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/tetris.log")));
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn zero_frame_budget_is_allowed() {
        let config = Config::from_lookup(lookup(&[("TETRIS_FRAME_MS", "0")]));
        assert_eq!(config.frame, Duration::ZERO);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = Config::from_lookup(lookup(&[
            ("TETRIS_SEED", "abc"),
            ("TETRIS_FRAME_MS", "-1"),
            ("TETRIS_LOG_PATH", "  "),
            ("TETRIS_LOG_LEVEL", "loud"),
        ]));
        assert_eq!(config, Config::default());
    }
}
