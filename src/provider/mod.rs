use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::config::Config;
use crate::errors::GenerationError;
use crate::wire::{GenerationRequest, GenerationResponse};

pub mod anthropic;
pub mod backend;
pub mod local;
pub mod openai;

/// The generation boundary: one request, one complete response, no retry.
#[async_trait]
pub trait Provider: Send + Sync {
    async fn generate(&self, req: &GenerationRequest) -> Result<GenerationResponse, GenerationError>;
}

pub type DynProvider = Box<dyn Provider + Send + Sync>;

pub fn make_provider(cfg: &Config) -> Result<DynProvider> {
    let client = Client::builder()
        .timeout(Duration::from_secs(cfg.timeout_secs))
        .build()?;

    match &cfg.backend_url {
        Some(url) => Ok(Box::new(backend::BackendProvider::new(client, url.clone()))),
        None => Ok(Box::new(local::LocalProvider::new(client, cfg))),
    }
}
