use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

/// OpenAI-compatible chat completions endpoint. Also used for OpenRouter,
/// which additionally wants attribution headers.
pub struct ChatCompletions {
    client: Client,
    api_base: String,
    extra_headers: &'static [(&'static str, &'static str)],
}

pub const OPENROUTER_HEADERS: &[(&str, &str)] = &[
    ("HTTP-Referer", "https://metaprompt.app"),
    ("X-Title", "MetaPrompt Generator"),
];

#[derive(Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

impl ChatCompletions {
    pub fn new(client: Client, api_base: String) -> Self {
        Self { client, api_base, extra_headers: &[] }
    }

    pub fn openrouter(client: Client, api_base: String) -> Self {
        Self { client, api_base, extra_headers: OPENROUTER_HEADERS }
    }

    pub async fn complete(
        &self,
        api_key: &str,
        model: &str,
        system: &str,
        user: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String> {
        let url = format!("{}/v1/chat/completions", self.api_base.trim_end_matches('/'));
        let body = json!({
            "model": model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user }
            ],
            "max_tokens": max_tokens,
            "temperature": temperature,
        });

        debug!(%url, %model, "chat completion request");

        let mut request = self.client.post(&url).bearer_auth(api_key).json(&body);
        for (name, value) in self.extra_headers {
            request = request.header(*name, *value);
        }
        let resp = request.send().await?;

        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(anyhow!("chat completion error ({}): {}", status, text));
        }

        let parsed: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("failed to parse chat completion: {e}\nRaw: {text}"))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| anyhow!("chat completion returned no content"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{bearer_token, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn returns_first_choice_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(bearer_token("sk-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": { "role": "assistant", "content": "Generated instructions" } }]
            })))
            .mount(&server)
            .await;

        let chat = ChatCompletions::new(Client::new(), server.uri());
        let out = chat.complete("sk-test", "gpt-4o-mini", "sys", "user", 2000, 0.7).await.unwrap();
        assert_eq!(out, "Generated instructions");
    }

    #[tokio::test]
    async fn openrouter_sends_attribution_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("X-Title", "MetaPrompt Generator"))
            .and(header("HTTP-Referer", "https://metaprompt.app"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": { "content": "ok" } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let chat = ChatCompletions::openrouter(Client::new(), server.uri());
        assert_eq!(chat.complete("k", "foo/bar", "s", "u", 10, 0.0).await.unwrap(), "ok");
    }

    #[tokio::test]
    async fn error_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
            .mount(&server)
            .await;

        let chat = ChatCompletions::new(Client::new(), server.uri());
        let err = chat.complete("k", "m", "s", "u", 10, 0.0).await.unwrap_err();
        assert!(err.to_string().contains("401"));
    }
}
