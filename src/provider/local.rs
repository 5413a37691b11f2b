use async_trait::async_trait;
use reqwest::Client;
use tracing::{error, info};

use super::anthropic::Anthropic;
use super::openai::ChatCompletions;
use super::Provider;
use crate::config::Config;
use crate::errors::GenerationError;
use crate::prompt;
use crate::settings::{ProviderKind, CUSTOM_MODEL};
use crate::wire::{GenerationRequest, GenerationResponse};
use crate::wizard::MIN_TASK_CHARS;

pub const FALLBACK_PROVIDER: &str = "fallback";
pub const FALLBACK_MODEL: &str = "template";

/// In-process generation: calls the selected vendor directly and degrades to
/// the template output when no key is available or the vendor call fails.
pub struct LocalProvider {
    openai: ChatCompletions,
    openrouter: ChatCompletions,
    anthropic: Anthropic,
    default_api_key: Option<String>,
    max_tokens: u32,
    temperature: f32,
}

impl LocalProvider {
    pub fn new(client: Client, cfg: &Config) -> Self {
        Self {
            openai: ChatCompletions::new(client.clone(), cfg.endpoints.openai.clone()),
            openrouter: ChatCompletions::openrouter(client.clone(), cfg.endpoints.openrouter.clone()),
            anthropic: Anthropic::new(client, cfg.endpoints.anthropic.clone()),
            default_api_key: cfg.default_api_key.clone().filter(|k| !k.is_empty()),
            max_tokens: cfg.max_tokens,
            temperature: cfg.temperature,
        }
    }

    async fn call(&self, kind: ProviderKind, key: &str, model: &str, user: &str) -> anyhow::Result<String> {
        let system = prompt::system_prompt();
        match kind {
            ProviderKind::Anthropic => self.anthropic.complete(key, model, system, user, self.max_tokens).await,
            ProviderKind::OpenRouter => {
                self.openrouter
                    .complete(key, model, system, user, self.max_tokens, self.temperature)
                    .await
            }
            ProviderKind::OpenAi => {
                self.openai
                    .complete(key, model, system, user, self.max_tokens, self.temperature)
                    .await
            }
        }
    }
}

fn fallback(req: &GenerationRequest, model: &str) -> GenerationResponse {
    GenerationResponse {
        prompt: prompt::fallback_prompt(&req.task, &req.inputs),
        provider_used: FALLBACK_PROVIDER.into(),
        model_used: model.into(),
        tokens_used: None,
    }
}

#[async_trait]
impl Provider for LocalProvider {
    async fn generate(&self, req: &GenerationRequest) -> Result<GenerationResponse, GenerationError> {
        if req.task.trim().chars().count() < MIN_TASK_CHARS {
            return Err(GenerationError::InvalidRequest(format!(
                "Task description must be at least {MIN_TASK_CHARS} characters"
            )));
        }

        let key = req
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .or(self.default_api_key.as_deref());
        let Some(key) = key else {
            info!("no API key available, using template output");
            return Ok(fallback(req, FALLBACK_MODEL));
        };

        let model = req
            .model
            .as_deref()
            .filter(|m| !m.is_empty() && *m != CUSTOM_MODEL)
            .unwrap_or_else(|| req.provider.default_model());

        let user = prompt::user_prompt(req);
        match self.call(req.provider, key, model, &user).await {
            Ok(text) => Ok(GenerationResponse {
                prompt: text,
                provider_used: req.provider.as_str().into(),
                model_used: model.into(),
                tokens_used: None,
            }),
            Err(e) => {
                error!(provider = %req.provider, %model, error = %e, "vendor call failed, using template output");
                Ok(fallback(req, model))
            }
        }
    }
}
