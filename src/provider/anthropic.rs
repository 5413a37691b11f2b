use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const API_VERSION: &str = "2023-06-01";

pub struct Anthropic {
    client: Client,
    api_base: String,
}

#[derive(Serialize)]
struct MsgRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<Msg<'a>>,
}

#[derive(Serialize)]
struct Msg<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MsgResponse {
    content: Vec<Block>,
}

#[derive(Deserialize)]
struct Block {
    #[serde(default)]
    text: String,
    #[serde(default)]
    r#type: String,
}

impl Anthropic {
    pub fn new(client: Client, api_base: String) -> Self {
        Self { client, api_base }
    }

    pub async fn complete(&self, api_key: &str, model: &str, system: &str, user: &str, max_tokens: u32) -> Result<String> {
        let url = format!("{}/v1/messages", self.api_base.trim_end_matches('/'));
        let body = MsgRequest {
            model,
            max_tokens,
            system,
            messages: vec![Msg { role: "user", content: user }],
        };

        debug!(%url, %model, "anthropic messages request");

        let resp = self
            .client
            .post(&url)
            .header("x-api-key", api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await
            .context("anthropic request failed")?;

        let status = resp.status();
        let text = resp.text().await.context("anthropic read body failed")?;
        if !status.is_success() {
            return Err(anyhow!("anthropic error ({}): {}", status, text));
        }

        let parsed: MsgResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("anthropic response parse error: {}", e))?;

        parsed
            .content
            .into_iter()
            .find(|b| b.r#type == "text" && !b.text.is_empty())
            .map(|b| b.text)
            .ok_or_else(|| anyhow!("anthropic: empty content"))
    }
}
