use serde::{Deserialize, Deserializer, Serialize};

use crate::settings::{ProviderKind, SettingsRecord};

/// ========================================
/// Generation boundary wire protocol
/// ========================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub task: String,
    #[serde(default)]
    pub inputs: Vec<String>,
    #[serde(default)]
    pub structure: String,
    pub api_key: Option<String>,
    #[serde(default)]
    pub provider: ProviderKind,
    pub model: Option<String>,
}

impl GenerationRequest {
    pub fn new(task: &str, inputs: &[String], structure: &str, settings: &SettingsRecord) -> Self {
        Self {
            task: task.to_string(),
            inputs: inputs.to_vec(),
            structure: structure.to_string(),
            api_key: settings.api_key().map(str::to_string),
            provider: settings.provider,
            model: settings.resolved_model().map(str::to_string),
        }
    }

    /// Copy safe to write to disk or logs.
    pub fn redacted(&self) -> Self {
        Self {
            api_key: self.api_key.as_ref().map(|_| "***".to_string()),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub prompt: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub provider_used: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub model_used: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens_used: Option<u32>,
}

fn null_as_empty<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(de)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::CUSTOM_MODEL;
    use serde_json::json;

    #[test]
    fn request_carries_resolved_model_and_optional_key() {
        let settings = SettingsRecord {
            provider: ProviderKind::OpenRouter,
            model: CUSTOM_MODEL.into(),
            custom_model: "foo/bar".into(),
            ..Default::default()
        };
        let req = GenerationRequest::new("Explain things well", &["DOCUMENT".into()], "", &settings);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "task": "Explain things well",
                "inputs": ["DOCUMENT"],
                "structure": "",
                "api_key": null,
                "provider": "openrouter",
                "model": "foo/bar",
            })
        );
    }

    #[test]
    fn redacted_hides_the_key() {
        let settings = SettingsRecord { api_key: "sk-secret".into(), ..Default::default() };
        let req = GenerationRequest::new("task text here", &[], "", &settings);
        assert_eq!(req.redacted().api_key.as_deref(), Some("***"));
        assert_eq!(req.api_key.as_deref(), Some("sk-secret"));
    }

    #[test]
    fn response_tolerates_missing_metadata() {
        let resp: GenerationResponse = serde_json::from_str(r#"{"prompt":"hi"}"#).unwrap();
        assert_eq!(resp.prompt, "hi");
        assert!(resp.provider_used.is_empty());
        assert_eq!(resp.tokens_used, None);

        let resp: GenerationResponse =
            serde_json::from_str(r#"{"prompt":"hi","provider_used":null,"model_used":"m","tokens_used":null}"#).unwrap();
        assert!(resp.provider_used.is_empty());
        assert_eq!(resp.model_used, "m");
    }
}
