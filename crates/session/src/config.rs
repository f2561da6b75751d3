//! Session configuration: JSON file plus `QB_*` environment overrides.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::types::{
    BOARD_HEIGHT, BOARD_WIDTH, INITIAL_FALL_DELAY_MS, LEVEL_SPEED_MULTIPLIER,
    SOFT_DROP_INTERVAL_MS,
};

/// Smallest and largest accepted board side
pub const MIN_BOARD_SIDE: u8 = 4;
pub const MAX_BOARD_SIDE: u8 = 64;

/// Environment variable naming a JSON config file
pub const CONFIG_ENV: &str = "QB_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub board_width: u8,
    pub board_height: u8,
    /// Randomizer seed; `None` derives one from the clock
    pub seed: Option<u32>,
    pub initial_fall_delay_ms: u64,
    pub level_speed_multiplier: f64,
    pub soft_drop_interval_ms: u64,
    pub log_path: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            seed: None,
            initial_fall_delay_ms: INITIAL_FALL_DELAY_MS,
            level_speed_multiplier: LEVEL_SPEED_MULTIPLIER,
            soft_drop_interval_ms: SOFT_DROP_INTERVAL_MS,
            log_path: None,
        }
    }
}

impl SessionConfig {
    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid session config JSON")
    }

    /// Read the file at `path`, or start from defaults when there is none
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                Self::from_json(&text)
                    .with_context(|| format!("failed to parse config {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Load `QB_CONFIG` (if set), apply the `QB_*` overrides and validate
    pub fn from_env() -> Result<Self> {
        let path = env::var_os(CONFIG_ENV)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        let mut config = Self::load(path.as_deref())?;
        config.apply_overrides(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from any key lookup (the environment in production)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        if let Some(v) = get("QB_BOARD_WIDTH") {
            self.board_width = parse("QB_BOARD_WIDTH", &v)?;
        }
        if let Some(v) = get("QB_BOARD_HEIGHT") {
            self.board_height = parse("QB_BOARD_HEIGHT", &v)?;
        }
        if let Some(v) = get("QB_SEED") {
            self.seed = Some(parse("QB_SEED", &v)?);
        }
        if let Some(v) = get("QB_FALL_DELAY_MS") {
            self.initial_fall_delay_ms = parse("QB_FALL_DELAY_MS", &v)?;
        }
        if let Some(v) = get("QB_SPEED_MULTIPLIER") {
            self.level_speed_multiplier = parse("QB_SPEED_MULTIPLIER", &v)?;
        }
        if let Some(v) = get("QB_SOFT_DROP_MS") {
            self.soft_drop_interval_ms = parse("QB_SOFT_DROP_MS", &v)?;
        }
        if let Some(v) = get("QB_LOG_PATH") {
            self.log_path = Some(PathBuf::from(v));
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let sides = MIN_BOARD_SIDE..=MAX_BOARD_SIDE;
        if !sides.contains(&self.board_width) || !sides.contains(&self.board_height) {
            bail!(
                "board size {}x{} outside {}..={}",
                self.board_width,
                self.board_height,
                MIN_BOARD_SIDE,
                MAX_BOARD_SIDE
            );
        }
        let m = self.level_speed_multiplier;
        if !(m > 0.0 && m <= 1.0) {
            bail!("level_speed_multiplier must be in (0, 1], got {m}");
        }
        if self.initial_fall_delay_ms == 0 {
            bail!("initial_fall_delay_ms must be positive");
        }
        if self.soft_drop_interval_ms == 0 {
            bail!("soft_drop_interval_ms must be positive");
        }
        Ok(())
    }

    /// The configured seed, or one taken from the wall clock
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}

fn parse<T>(key: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .parse()
        .with_context(|| format!("invalid value for {key}: {value:?}"))
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
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_classic_rules() {
        let config = SessionConfig::default();
        assert_eq!(config.board_width, 10);
        assert_eq!(config.board_height, 20);
        assert_eq!(config.initial_fall_delay_ms, 1000);
        assert_eq!(config.soft_drop_interval_ms, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SessionConfig::from_json(r#"{"board_width": 12, "seed": 9}"#).unwrap();
        assert_eq!(config.board_width, 12);
        assert_eq!(config.board_height, 20);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.seed_or_clock(), 9);
    }

    #[test]
    fn env_overrides_win() {
        let mut config = SessionConfig::default();
        config
            .apply_overrides(lookup(&[
                ("QB_BOARD_HEIGHT", "24"),
                ("QB_SPEED_MULTIPLIER", "0.5"),
                ("QB_SOFT_DROP_MS", " 30 "),
                ("QB_LOG_PATH", ""),
            ]))
            .unwrap();
        assert_eq!(config.board_height, 24);
        assert_eq!(config.level_speed_multiplier, 0.5);
        assert_eq!(config.soft_drop_interval_ms, 30);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn bad_override_is_an_error() {
        let mut config = SessionConfig::default();
        let err = config
            .apply_overrides(lookup(&[("QB_SEED", "abc")]))
            .unwrap_err();
        assert!(err.to_string().contains("QB_SEED"));
    }

    #[test]
    fn validate_rejects_out_of_range() {
        let cases = [
            SessionConfig { board_width: 3, ..Default::default() },
            SessionConfig { board_height: 65, ..Default::default() },
            SessionConfig { level_speed_multiplier: 0.0, ..Default::default() },
            SessionConfig { level_speed_multiplier: 1.5, ..Default::default() },
            SessionConfig { initial_fall_delay_ms: 0, ..Default::default() },
            SessionConfig { soft_drop_interval_ms: 0, ..Default::default() },
        ];
        for config in cases {
            assert!(config.validate().is_err(), "{config:?}");
        }
    }

    #[test]
    fn load_reports_missing_file() {
        let err = SessionConfig::load(Some(Path::new("/nonexistent/qb.json"))).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/qb.json"));
    }
}
