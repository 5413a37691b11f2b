use crate::wire::{GenerationRequest, GenerationResponse};
use fs_err as fs;
use serde_json::to_string_pretty;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

/// Installs the global subscriber. `RUST_LOG` wins over `level`.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

pub struct SavedPaths {
    pub dir: PathBuf,
    pub request: PathBuf,
    pub response: PathBuf,
}

fn tx_dir(data_dir: &Path, tx: Uuid) -> PathBuf {
    data_dir.join("tx").join(tx.to_string())
}

/// Dumps one generation exchange. The request's API key is redacted first.
pub fn save_exchange(
    data_dir: &Path,
    tx: Uuid,
    req: &GenerationRequest,
    resp: &GenerationResponse,
) -> anyhow::Result<SavedPaths> {
    let dir = tx_dir(data_dir, tx);
    fs::create_dir_all(&dir)?;

    let request = dir.join("generate.request.json");
    fs::write(&request, to_string_pretty(&req.redacted())?)?;

    let response = dir.join("generate.response.json");
    fs::write(&response, to_string_pretty(resp)?)?;

    Ok(SavedPaths { dir, request, response })
}

pub fn print_saved_paths(saved: &SavedPaths) {
    eprintln!("debug: artifacts directory: {}", saved.dir.display());
    eprintln!("debug: request saved at: {}", saved.request.display());
    eprintln!("debug: response saved at: {}", saved.response.display());
    std::io::stderr().flush().ok();
}

pub fn print_json_debug(req: &GenerationRequest, resp: &GenerationResponse) -> anyhow::Result<()> {
    let req_json = to_string_pretty(&req.redacted())?;
    let resp_json = to_string_pretty(resp)?;
    eprintln!("\n===== DEBUG: REQUEST JSON =====\n{}\n", req_json);
    eprintln!("===== DEBUG: RESPONSE JSON =====\n{}\n", resp_json);
    std::io::stderr().flush().ok();
    Ok(())
}
