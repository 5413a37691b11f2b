//! Durable provider/model/theme preferences.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::context::AppContext;
use crate::store::{DynStore, SETTINGS_KEY};

/// Model value that means "use `custom_model` instead".
pub const CUSTOM_MODEL: &str = "custom";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    #[serde(rename = "openai")]
    OpenAi,
    Anthropic,
    #[serde(rename = "openrouter")]
    OpenRouter,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 3] = [ProviderKind::OpenAi, ProviderKind::Anthropic, ProviderKind::OpenRouter];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::OpenRouter => "openrouter",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OpenAI (GPT-4o-mini)",
            ProviderKind::Anthropic => "Anthropic (Claude Haiku)",
            ProviderKind::OpenRouter => "OpenRouter (Multi-model)",
        }
    }

    pub fn key_hint(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "sk-...",
            ProviderKind::Anthropic => "sk-ant-...",
            ProviderKind::OpenRouter => "sk-or-...",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "gpt-4o-mini",
            ProviderKind::Anthropic => "claude-3-haiku-20240307",
            ProviderKind::OpenRouter => "openai/gpt-4o-mini",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" | "open-ai" => Ok(ProviderKind::OpenAi),
            "anthropic" | "claude" => Ok(ProviderKind::Anthropic),
            "openrouter" | "open-router" => Ok(ProviderKind::OpenRouter),
            other => Err(format!("unknown provider: {other}")),
        }
    }
}

pub struct ModelChoice {
    pub value: &'static str,
    pub label: &'static str,
}

pub const OPENROUTER_MODELS: &[ModelChoice] = &[
    ModelChoice { value: "openai/gpt-4o-mini", label: "GPT-4o Mini (OpenAI)" },
    ModelChoice { value: "openai/gpt-4o", label: "GPT-4o (OpenAI)" },
    ModelChoice { value: "anthropic/claude-3.5-sonnet", label: "Claude 3.5 Sonnet" },
    ModelChoice { value: "anthropic/claude-3-haiku", label: "Claude 3 Haiku" },
    ModelChoice { value: "google/gemini-pro-1.5", label: "Gemini Pro 1.5" },
    ModelChoice { value: "google/gemini-flash-1.5", label: "Gemini Flash 1.5" },
    ModelChoice { value: "meta-llama/llama-3.1-70b-instruct", label: "Llama 3.1 70B" },
    ModelChoice { value: "meta-llama/llama-3.1-8b-instruct", label: "Llama 3.1 8B" },
    ModelChoice { value: "mistralai/mistral-large", label: "Mistral Large" },
    ModelChoice { value: "mistralai/mixtral-8x7b-instruct", label: "Mixtral 8x7B" },
    ModelChoice { value: CUSTOM_MODEL, label: "Custom Model..." },
];

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsRecord {
    pub api_key: String,
    pub provider: ProviderKind,
    pub model: String,
    pub custom_model: String,
    pub dark_mode: bool,
}

impl SettingsRecord {
    /// Model to request: `custom_model`, then `model`, else none.
    pub fn resolved_model(&self) -> Option<&str> {
        [self.custom_model.as_str(), self.model.as_str()]
            .into_iter()
            .find(|m| !m.is_empty())
    }

    pub fn api_key(&self) -> Option<&str> {
        Some(self.api_key.as_str()).filter(|k| !k.is_empty())
    }

    /// Switching providers invalidates any previously chosen model.
    pub fn set_provider(&mut self, provider: ProviderKind) {
        if self.provider != provider {
            self.provider = provider;
            self.model.clear();
            self.custom_model.clear();
        }
    }

    /// Quick-pick selection. Choosing `custom` keeps the typed custom model;
    /// anything else replaces it.
    pub fn select_model(&mut self, value: &str) {
        if value == CUSTOM_MODEL {
            self.model = CUSTOM_MODEL.to_string();
        } else {
            self.model = value.to_string();
            self.custom_model.clear();
        }
    }

    pub fn uses_custom_model(&self) -> bool {
        self.model == CUSTOM_MODEL
            || (!self.custom_model.is_empty() && !OPENROUTER_MODELS.iter().any(|m| m.value == self.model))
    }
}

#[derive(Clone)]
pub struct SettingsStore {
    store: DynStore,
}

impl SettingsStore {
    pub fn new(store: DynStore) -> Self {
        Self { store }
    }

    /// Stored record merged over the defaults. Never fails: absent or
    /// malformed payloads give [`SettingsRecord::default`].
    pub fn load(&self) -> SettingsRecord {
        let raw = match self.store.get(SETTINGS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return SettingsRecord::default(),
            Err(e) => {
                warn!(error = %e, "settings: read failed, using defaults");
                return SettingsRecord::default();
            }
        };
        match merge_over_defaults(&raw) {
            Some(record) => record,
            None => {
                warn!("settings: stored payload is not valid, using defaults");
                SettingsRecord::default()
            }
        }
    }

    pub fn save(&self, record: &SettingsRecord) -> Result<()> {
        let json = serde_json::to_string(record)?;
        self.store.set(SETTINGS_KEY, &json).context("write settings")?;
        debug!(provider = %record.provider, "settings saved");
        Ok(())
    }

    /// Applies the theme to the live context first, then persists only the
    /// `darkMode` field on top of whatever is stored.
    pub fn set_dark_mode(&self, ctx: &AppContext, on: bool) -> Result<()> {
        ctx.theme.set_dark(on);
        let mut stored = self.load();
        stored.dark_mode = on;
        self.save(&stored)
    }
}

/// Field-by-field merge: `null`, unknown keys and values of the wrong type
/// fall back to the default for that field only.
fn merge_over_defaults(raw: &str) -> Option<SettingsRecord> {
    let Value::Object(stored) = serde_json::from_str(raw).ok()? else {
        return None;
    };
    let mut record = SettingsRecord::default();
    for (key, value) in stored {
        if value.is_null() {
            continue;
        }
        let applied = match key.as_str() {
            "apiKey" => field::<String>(value).map(|v| record.api_key = v),
            "provider" => field::<ProviderKind>(value).map(|v| record.provider = v),
            "model" => field::<String>(value).map(|v| record.model = v),
            "customModel" => field::<String>(value).map(|v| record.custom_model = v),
            "darkMode" => field::<bool>(value).map(|v| record.dark_mode = v),
            _ => continue,
        };
        if applied.is_none() {
            warn!(field = %key, "settings: ignoring invalid stored value");
        }
    }
    Some(record)
}

fn field<T: DeserializeOwned>(value: Value) -> Option<T> {
    serde_json::from_value(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::store::{KvStore, MemoryStore};
    use std::sync::Arc;

    fn fresh() -> (Arc<MemoryStore>, SettingsStore) {
        let mem = Arc::new(MemoryStore::new());
        let store = SettingsStore::new(mem.clone());
        (mem, store)
    }

    #[test]
    fn defaults_when_nothing_stored() {
        let (_, store) = fresh();
        let s = store.load();
        assert_eq!(s, SettingsRecord::default());
        assert_eq!(s.provider, ProviderKind::OpenAi);
        assert!(s.api_key.is_empty() && s.model.is_empty() && s.custom_model.is_empty());
        assert!(!s.dark_mode);
    }

    #[test]
    fn defaults_on_corrupt_payload() {
        let (mem, store) = fresh();
        for bad in ["nope", "[]", "42", r#"{"provider":"gemini"}"#, r#"{"darkMode":"yes"}"#] {
            mem.set(SETTINGS_KEY, bad).unwrap();
            assert_eq!(store.load(), SettingsRecord::default(), "payload {bad}");
        }
    }

    #[test]
    fn one_bad_field_keeps_the_others() {
        let (mem, store) = fresh();
        mem.set(
            SETTINGS_KEY,
            r#"{"apiKey":"sk-real","provider":"anthropic","model":null,"customModel":"","darkMode":true}"#,
        )
        .unwrap();
        let s = store.load();
        assert_eq!(s.api_key, "sk-real");
        assert_eq!(s.provider, ProviderKind::Anthropic);
        assert_eq!(s.model, "");
        assert!(s.dark_mode);

        mem.set(SETTINGS_KEY, r#"{"apiKey":"sk-ant-1","provider":"gemini","darkMode":"yes","model":42}"#).unwrap();
        let s = store.load();
        assert_eq!(s.api_key, "sk-ant-1");
        assert_eq!(s.provider, ProviderKind::OpenAi);
        assert!(!s.dark_mode);
        assert_eq!(s.model, "");
    }

    #[test]
    fn partial_payload_is_filled_from_defaults() {
        let (mem, store) = fresh();
        mem.set(SETTINGS_KEY, r#"{"provider":"anthropic","darkMode":true,"extra":1}"#).unwrap();
        let s = store.load();
        assert_eq!(s.provider, ProviderKind::Anthropic);
        assert!(s.dark_mode);
        assert_eq!(s.model, "");
    }

    #[test]
    fn save_then_load_round_trips() {
        let (mem, store) = fresh();
        let record = SettingsRecord {
            api_key: "sk-or-123".into(),
            provider: ProviderKind::OpenRouter,
            model: CUSTOM_MODEL.into(),
            custom_model: "foo/bar".into(),
            dark_mode: true,
        };
        store.save(&record).unwrap();
        assert_eq!(store.load(), record);

        let raw = mem.get(SETTINGS_KEY).unwrap().unwrap();
        assert!(raw.contains(r#""customModel":"foo/bar""#));
        assert!(raw.contains(r#""provider":"openrouter""#));
    }

    #[test]
    fn resolved_model_precedence() {
        let cases = [
            ("", "", None),
            ("gpt-4o", "", Some("gpt-4o")),
            ("", "foo/bar", Some("foo/bar")),
            ("custom", "foo/bar", Some("foo/bar")),
            ("gpt-4o", "foo/bar", Some("foo/bar")),
        ];
        for (model, custom, expected) in cases {
            let s = SettingsRecord {
                model: model.into(),
                custom_model: custom.into(),
                ..Default::default()
            };
            assert_eq!(s.resolved_model(), expected, "model={model:?} custom={custom:?}");
        }
    }

    #[test]
    fn changing_provider_clears_models() {
        let mut s = SettingsRecord {
            provider: ProviderKind::OpenRouter,
            model: CUSTOM_MODEL.into(),
            custom_model: "foo/bar".into(),
            ..Default::default()
        };
        s.set_provider(ProviderKind::OpenRouter);
        assert_eq!(s.custom_model, "foo/bar");

        s.set_provider(ProviderKind::Anthropic);
        assert_eq!(s.provider, ProviderKind::Anthropic);
        assert!(s.model.is_empty());
        assert!(s.custom_model.is_empty());
    }

    #[test]
    fn select_model_handles_custom_sentinel() {
        let mut s = SettingsRecord { provider: ProviderKind::OpenRouter, ..Default::default() };
        s.custom_model = "foo/bar".into();
        s.select_model(CUSTOM_MODEL);
        assert_eq!(s.model, CUSTOM_MODEL);
        assert_eq!(s.custom_model, "foo/bar");
        assert!(s.uses_custom_model());

        s.select_model("openai/gpt-4o");
        assert_eq!(s.model, "openai/gpt-4o");
        assert!(s.custom_model.is_empty());
        assert!(!s.uses_custom_model());
    }

    #[test]
    fn dark_mode_applies_immediately_and_persists_only_that_field() {
        let (_, store) = fresh();
        let ctx = AppContext::new(Config::default(), false);

        let mut editing = store.load();
        editing.api_key = "unsaved".into();

        store.set_dark_mode(&ctx, true).unwrap();
        assert!(ctx.theme.is_dark());

        let stored = store.load();
        assert!(stored.dark_mode);
        assert!(stored.api_key.is_empty());
    }

    #[test]
    fn provider_parses_common_spellings() {
        assert_eq!("OpenAI".parse::<ProviderKind>().unwrap(), ProviderKind::OpenAi);
        assert_eq!("open-router".parse::<ProviderKind>().unwrap(), ProviderKind::OpenRouter);
        assert!("gemini".parse::<ProviderKind>().is_err());
    }
}
