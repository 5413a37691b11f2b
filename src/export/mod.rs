use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use fs_err as fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub fn file_name(now: DateTime<Utc>) -> String {
    format!("metaprompt-{}.md", now.timestamp_millis())
}

/// Writes the final prompt as markdown into `dir`. Only touches the
/// filesystem; session state is the caller's business.
pub fn write_markdown(dir: &Path, content: &str, now: DateTime<Utc>) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name(now));
    fs::write(&path, content).with_context(|| format!("export to {}", path.display()))?;
    info!(path = %path.display(), bytes = content.len(), "prompt exported");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    #[test]
    fn writes_timestamped_markdown() {
        let dir = tempdir().unwrap();
        let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let path = write_markdown(&dir.path().join("out"), "You are a tutor.", now).unwrap();

        assert_eq!(path.file_name().unwrap(), "metaprompt-1700000000123.md");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "You are a tutor.");
    }

    #[test]
    fn unwritable_target_is_an_error() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();
        assert!(write_markdown(&blocker, "text", Utc::now()).is_err());
    }
}
