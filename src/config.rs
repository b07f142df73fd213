use std::path::PathBuf;
use std::str::FromStr;

use crate::constants::{DEFAULT_FPS, DEFAULT_LOG_PATH, DEFAULT_MAP_PATH};

/// Settings for the terminal front end. The simulation reads none of these.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub map_path: PathBuf,
    pub fps: u64,
    pub log_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            map_path: PathBuf::from(DEFAULT_MAP_PATH),
            fps: DEFAULT_FPS,
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
        }
    }
}

impl Config {
    /// Overrides defaults from `SUPERPAC_MAP`, `SUPERPAC_FPS` and `SUPERPAC_LOG`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            map_path: lookup("SUPERPAC_MAP")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.map_path),
            fps: parse_positive(lookup("SUPERPAC_FPS")).unwrap_or(defaults.fps),
            log_path: lookup("SUPERPAC_LOG")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.log_path),
        }
    }
}

fn parse_positive<T>(value: Option<String>) -> Option<T>
where
    T: FromStr + PartialOrd + Default,
{
    value
        .and_then(|v| v.trim().parse::<T>().ok())
        .filter(|v| *v > T::default())
}
