use crate::error::ConfigError;
use crate::store::EventLog;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub buffer: BufferConfig,
}

/// Storage strategy for an `EventLog`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Preallocated slots, power-of-two capacity.
    #[default]
    Ring,
    /// Bounded queue, any non-zero capacity.
    Deque,
}

/// Example in ringlog.toml:
/// ```toml
/// [buffer]
/// strategy = "ring"   # "ring" or "deque"
/// capacity = 256
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferConfig {
    #[serde(default)]
    pub strategy: Strategy,
    /// Maximum retained entries. Must be a power of two for "ring".
    pub capacity: usize,
}

impl BufferConfig {
    pub fn build<P>(&self) -> Result<EventLog<P>, ConfigError> {
        EventLog::new(self.strategy, self.capacity)
    }
}

// ── Defaults ─────────────────────────────────────────────────────────

impl Default for BufferConfig {
    fn default() -> Self {
        Self { strategy: Strategy::Ring, capacity: 1024 }
    }
}

// ── Load ─────────────────────────────────────────────────────────────

impl Config {
    /// Read the config file from its default location, falling back to
    /// defaults if it is missing or malformed.
    pub fn load() -> Self {
        Self::load_or_default(Self::config_path().as_deref())
    }

    /// A missing file is the normal first run and falls back quietly; any
    /// other failure is logged before falling back.
    fn load_or_default(path: Option<&Path>) -> Self {
        let path = match path {
            Some(p) => p,
            None    => return Config::default(),
        };
        match Self::load_from(path) {
            Ok(c)  => c,
            Err(e) => {
                let missing = e
                    .downcast_ref::<io::Error>()
                    .map_or(false, |err| err.kind() == io::ErrorKind::NotFound);
                if !missing {
                    log::warn!("using default config: {:#}", e);
                }
                Config::default()
            }
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ringlog").join("ringlog.toml"))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(text)?;
        Ok(cfg)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
