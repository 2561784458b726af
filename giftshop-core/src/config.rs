use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Input file read when no other path is given.
pub const DEFAULT_INPUT_FILE: &str = "input.txt";

/// Puzzle example used when the input file is missing or empty.
pub const DEFAULT_INPUT: &str = "11-22,95-115,998-1012,1188511880-1188511890,222220-222224,\
1698522-1698528,446443-446449,38593856-38593862,565653-565659,\
824824821-824824827,2121212118-2121212124";

// Default value functions for serde
fn default_input_file() -> String {
    DEFAULT_INPUT_FILE.to_string()
}

fn default_fallback_input() -> String {
    DEFAULT_INPUT.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Path of the range list to scan ("-" reads stdin)
    #[serde(default = "default_input_file")]
    pub input_file: String,
    /// Ranges scanned when the input file is missing or blank
    #[serde(default = "default_fallback_input")]
    pub fallback_input: String,
    /// Spread each range over the rayon thread pool
    #[serde(default)]
    pub parallel: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            input_file: default_input_file(),
            fallback_input: default_fallback_input(),
            parallel: false,
        }
    }
}

impl ScanConfig {
    /// Load config from a YAML file
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {path}"))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse config file {path}"))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: ScanConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Load config with fallback to default
    pub fn load_with_fallback(path: Option<&str>) -> Self {
        match path {
            Some(p) => Self::load_from_file(p).unwrap_or_else(|e| {
                warn!("Failed to load config from {p}, using defaults: {e:#}");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
