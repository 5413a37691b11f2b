use anyhow::{Context, Result};
use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Endpoints {
    pub openai: String,
    pub anthropic: String,
    pub openrouter: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            openai: "https://api.openai.com".into(),
            anthropic: "https://api.anthropic.com".into(),
            openrouter: "https://openrouter.ai/api".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Remote generation service. When unset, generation runs in-process.
    pub backend_url: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub export_dir: PathBuf,
    pub timeout_secs: u64,
    pub log_level: String,
    /// Key used when the user has not configured one.
    pub default_api_key: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub endpoints: Endpoints,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: None,
            data_dir: None,
            export_dir: PathBuf::from("."),
            timeout_secs: 60,
            log_level: "info".into(),
            default_api_key: None,
            max_tokens: 2000,
            temperature: 0.7,
            endpoints: Endpoints::default(),
        }
    }
}

impl Config {
    /// Reads `explicit` if given, else the per-user config file if present,
    /// else defaults; then applies `METAPROMPT_*` environment overrides.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut cfg = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path().filter(|p| p.is_file()) {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };
        cfg.apply_env(|k| std::env::var(k).ok());
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    }

    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(v) = var("METAPROMPT_BACKEND_URL").filter(|v| !v.is_empty()) {
            self.backend_url = Some(v);
        }
        if let Some(v) = var("METAPROMPT_API_KEY").filter(|v| !v.is_empty()) {
            self.default_api_key = Some(v);
        }
        if let Some(v) = var("METAPROMPT_DATA_DIR").filter(|v| !v.is_empty()) {
            self.data_dir = Some(PathBuf::from(v));
        }
    }

    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .map(|d| d.join("metaprompt"))
                .unwrap_or_else(|| PathBuf::from(".metaprompt"))
        })
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("metaprompt").join("config.toml"))
}
