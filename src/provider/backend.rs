use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::errors::GenerationError;
use crate::wire::{GenerationRequest, GenerationResponse};
use super::Provider;

/// Remote generation service speaking the `/api/generate-prompt` contract.
pub struct BackendProvider {
    client: Client,
    base_url: String,
}

impl BackendProvider {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/generate-prompt", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl Provider for BackendProvider {
    async fn generate(&self, req: &GenerationRequest) -> Result<GenerationResponse, GenerationError> {
        let url = self.endpoint();
        debug!(%url, provider = %req.provider, "POST generate-prompt");

        let resp = self.client.post(&url).json(req).send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(GenerationError::Backend { status: status.as_u16(), body: text });
        }

        serde_json::from_str(&text)
            .map_err(|e| GenerationError::InvalidResponse(format!("{e}; body: {text}")))
    }
}
