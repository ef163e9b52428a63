use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Editing limits enforced by draft validation.
#[derive(Debug, Deserialize, Clone)]
pub struct LimitsConfig {
    /// Maximum title length in Unicode characters. Default: 256.
    #[serde(default = "default_max_title_chars")]
    pub max_title_chars: usize,
    /// Maximum number of content blocks per lesson. Default: 500.
    #[serde(default = "default_max_blocks")]
    pub max_blocks: usize,
    /// Page size used when draining the lesson catalog. Default: 20.
    #[serde(default = "default_catalog_page_size")]
    pub catalog_page_size: u64,
}

fn default_max_title_chars() -> usize {
    256
}
fn default_max_blocks() -> usize {
    500
}
fn default_catalog_page_size() -> u64 {
    20
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_title_chars: default_max_title_chars(),
            max_blocks: default_max_blocks(),
            catalog_page_size: default_catalog_page_size(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EditorConfig {
    #[serde(default)]
    pub limits: LimitsConfig,
}

impl EditorConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            // Load from config/config.toml when present
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., STUDIO__LIMITS__MAX_BLOCKS)
            .add_source(Environment::with_prefix("STUDIO").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
