use std::path::PathBuf;

use eyre::Result;
use log::debug;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TIMEDTEXT_URL: &str = "https://video.google.com/timedtext";
pub const DEFAULT_DEVELOPER: &str = "@lakshitpatidar";
pub const DEFAULT_LISTEN: &str = "127.0.0.1:3000";

/// How caption text entities are decoded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityMode {
    /// Only `&amp;`, `&lt;` and `&gt;`, replaced in that order
    #[default]
    Basic,
    /// Basic replacements followed by full HTML entity decoding
    Html,
}

/// Thresholds and sizes used by the assembler and summarizer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Tuning {
    pub words_per_minute: usize,
    pub paragraph_size: usize,
    /// Segments must be strictly longer than this (in chars)
    pub min_segment_chars: usize,
    /// Summary candidates must be strictly longer than this (in chars)
    pub min_sentence_chars: usize,
    /// Below this many candidates the summary is a plain join
    pub min_sampled_sentences: usize,
    pub summary_head: usize,
    pub summary_tail: usize,
    pub sample_stride: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            words_per_minute: 150,
            paragraph_size: 5,
            min_segment_chars: 2,
            min_sentence_chars: 40,
            min_sampled_sentences: 6,
            summary_head: 3,
            summary_tail: 3,
            sample_stride: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub caption_list_url: String,
    pub transcript_url: String,
    pub developer: String,
    pub listen: String,
    pub request_timeout_secs: Option<u64>,
    pub entity_mode: EntityMode,
    pub default_lang: Option<String>,
    pub tuning: Tuning,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            caption_list_url: DEFAULT_TIMEDTEXT_URL.to_string(),
            transcript_url: DEFAULT_TIMEDTEXT_URL.to_string(),
            developer: DEFAULT_DEVELOPER.to_string(),
            listen: DEFAULT_LISTEN.to_string(),
            request_timeout_secs: None,
            entity_mode: EntityMode::default(),
            default_lang: None,
            tuning: Tuning::default(),
        }
    }
}

impl Config {
    /// Load config from ~/.config/ytsum/config.toml if it exists
    pub fn load() -> Result<Self> {
        let path = config_path();
        if path.exists() {
            debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            debug!("No config file found at {}", path.display());
            Ok(Config::default())
        }
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("ytsum")
        .join("config.toml")
}
