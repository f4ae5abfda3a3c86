//! Runtime configuration read from environment variables.
//!
//! - `BLOCKFALL_GRAVITY_MS`: gravity interval in ms (default 1500)
//! - `BLOCKFALL_FRAME_MS`: frame/poll interval in ms (default 16)
//! - `BLOCKFALL_SEED`: shuffler seed; unset means OS entropy
//! - `BLOCKFALL_LOG_FILE`: append log records to this file
//!
//! Log filtering itself uses the usual `RUST_LOG` variable.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::types::{FRAME_MS, GRAVITY_INTERVAL_MS};

pub const GRAVITY_VAR: &str = "BLOCKFALL_GRAVITY_MS";
pub const FRAME_VAR: &str = "BLOCKFALL_FRAME_MS";
pub const SEED_VAR: &str = "BLOCKFALL_SEED";
pub const LOG_FILE_VAR: &str = "BLOCKFALL_LOG_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub gravity_ms: u32,
    pub frame_ms: u32,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gravity_ms: GRAVITY_INTERVAL_MS,
            frame_ms: FRAME_MS,
            seed: None,
            log_file: None,
        }
    }
}

impl Config {
    /// Read the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Unset or blank variables keep
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(raw) = get(GRAVITY_VAR) {
            config.gravity_ms = parse_positive(GRAVITY_VAR, &raw)?;
        }
        if let Some(raw) = get(FRAME_VAR) {
            config.frame_ms = parse_positive(FRAME_VAR, &raw)?;
        }
        if let Some(raw) = get(SEED_VAR) {
            config.seed = Some(parse(SEED_VAR, &raw)?);
        }
        config.log_file = get(LOG_FILE_VAR).map(PathBuf::from);

        Ok(config)
    }
}

fn parse<T: FromStr>(key: &str, raw: &str) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse()
        .with_context(|| format!("{key}={raw:?} is not a valid number"))
}

fn parse_positive(key: &str, raw: &str) -> Result<u32> {
    let value: u32 = parse(key, raw)?;
    if value == 0 {
        bail!("{key} must be greater than zero");
    }
    Ok(value)
}
