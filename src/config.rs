// src/config.rs
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_CONFIG_PATH: &str = "TOKENIZER_CONFIG_PATH";
pub const DEFAULT_CONFIG_TOML: &str = "config/tokenizer.toml";
pub const DEFAULT_CONFIG_JSON: &str = "config/tokenizer.json";

fn default_mark_negation() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Keep original casing. When false everything except emoticons is lowercased.
    #[serde(default)]
    pub preserve_case: bool,
    /// Resolve `&amp;`, `&#65;` etc. before scanning.
    #[serde(default)]
    pub decode_html_entities: bool,
    /// Append `_NEG` inside negated spans.
    #[serde(default = "default_mark_negation")]
    pub mark_negation: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            preserve_case: false,
            decode_html_entities: false,
            mark_negation: default_mark_negation(),
        }
    }
}

impl TokenizerConfig {
    /// Load from an explicit path. Supports TOML or JSON formats.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading tokenizer config from {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        parse_config(&content, ext.as_str())
            .with_context(|| format!("parsing tokenizer config {}", path.display()))
    }

    /// Load using env var + fallbacks:
    /// 1) $TOKENIZER_CONFIG_PATH
    /// 2) config/tokenizer.toml
    /// 3) config/tokenizer.json
    /// 4) built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if pb.exists() {
                return Self::load_from(&pb);
            }
            return Err(anyhow!("{ENV_CONFIG_PATH} points to non-existent path"));
        }
        let toml_p = PathBuf::from(DEFAULT_CONFIG_TOML);
        if toml_p.exists() {
            return Self::load_from(&toml_p);
        }
        let json_p = PathBuf::from(DEFAULT_CONFIG_JSON);
        if json_p.exists() {
            return Self::load_from(&json_p);
        }
        Ok(Self::default())
    }
}

fn parse_config(s: &str, hint_ext: &str) -> Result<TokenizerConfig> {
    if hint_ext == "json" {
        return Ok(serde_json::from_str(s)?);
    }
    if hint_ext == "toml" {
        return Ok(toml::from_str(s)?);
    }
    // Unknown extension: sniff TOML first, then JSON.
    if let Ok(cfg) = toml::from_str::<TokenizerConfig>(s) {
        return Ok(cfg);
    }
    serde_json::from_str(s).map_err(|_| anyhow!("unsupported tokenizer config format"))
}
