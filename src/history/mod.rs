//! Size-bounded log of past generations.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::store::{DynStore, HISTORY_KEY};

pub const MAX_HISTORY: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Milliseconds since the epoch at creation time.
    pub id: i64,
    pub task: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub inputs: Vec<String>,
    pub prompt: String,
    pub provider: String,
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(task: String, inputs: Vec<String>, prompt: String, provider: String, now: DateTime<Utc>) -> Self {
        Self {
            id: now.timestamp_millis(),
            task,
            inputs,
            prompt,
            provider,
            created_at: now,
        }
    }
}

fn null_as_empty<'de, D>(de: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(de)?.unwrap_or_default())
}

#[derive(Clone)]
pub struct HistoryStore {
    store: DynStore,
}

impl HistoryStore {
    pub fn new(store: DynStore) -> Self {
        Self { store }
    }

    /// Stored entries, oldest first. A payload that is not a JSON array
    /// yields an empty log; inside an array only the unreadable entries are
    /// dropped.
    pub fn load(&self) -> Vec<HistoryEntry> {
        let raw = match self.store.get(HISTORY_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = %e, "history: read failed");
                return Vec::new();
            }
        };
        let items = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(items)) => items,
            Ok(_) => {
                warn!("history: stored payload is not a list, ignoring");
                return Vec::new();
            }
            Err(e) => {
                warn!(error = %e, "history: stored payload is not valid, ignoring");
                return Vec::new();
            }
        };
        items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value::<HistoryEntry>(item) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(index, error = %e, "history: skipping unreadable entry");
                    None
                }
            })
            .collect()
    }

    /// Appends `entry` and evicts the oldest entries beyond [`MAX_HISTORY`].
    pub fn save(&self, entry: HistoryEntry) -> Result<()> {
        let mut entries = self.load();
        entries.push(entry);
        if entries.len() > MAX_HISTORY {
            let overflow = entries.len() - MAX_HISTORY;
            entries.drain(..overflow);
        }
        self.write(&entries)
    }

    pub fn delete(&self, id: i64) -> Result<bool> {
        let mut entries = self.load();
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return Ok(false);
        }
        self.write(&entries)?;
        Ok(true)
    }

    pub fn clear(&self) -> Result<()> {
        self.store.remove(HISTORY_KEY).context("clear history")
    }

    pub fn find(&self, id: i64) -> Option<HistoryEntry> {
        self.load().into_iter().find(|e| e.id == id)
    }

    /// Display order for history panels: newest first.
    pub fn recent_first(&self) -> Vec<HistoryEntry> {
        let mut entries = self.load();
        entries.reverse();
        entries
    }

    fn write(&self, entries: &[HistoryEntry]) -> Result<()> {
        let json = serde_json::to_string(entries)?;
        self.store.set(HISTORY_KEY, &json).context("write history")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{KvStore, MemoryStore};
    use chrono::TimeZone;
    use std::sync::Arc;

    fn entry(id: i64) -> HistoryEntry {
        HistoryEntry {
            id,
            task: format!("task {id}"),
            inputs: vec!["DOCUMENT".into()],
            prompt: format!("prompt {id}"),
            provider: "openai".into(),
            created_at: Utc.timestamp_millis_opt(1_700_000_000_000 + id).unwrap(),
        }
    }

    fn fresh() -> (Arc<MemoryStore>, HistoryStore) {
        let mem = Arc::new(MemoryStore::new());
        let history = HistoryStore::new(mem.clone());
        (mem, history)
    }

    #[test]
    fn load_is_empty_when_nothing_stored() {
        let (_, history) = fresh();
        assert!(history.load().is_empty());
    }

    #[test]
    fn load_is_empty_on_corrupt_payload() {
        let (mem, history) = fresh();
        mem.set(HISTORY_KEY, "{not json").unwrap();
        assert!(history.load().is_empty());
        mem.set(HISTORY_KEY, r#"{"id": 1}"#).unwrap();
        assert!(history.load().is_empty());
    }

    #[test]
    fn one_bad_entry_does_not_cost_the_others() {
        let (mem, history) = fresh();
        mem.set(
            HISTORY_KEY,
            r#"[
                {"id":1,"task":"a","inputs":["DOC"],"prompt":"p1","provider":"openai","createdAt":"2024-06-10T06:13:20.000Z"},
                {"id":2,"task":"b","inputs":null,"prompt":"p2","provider":"openai","createdAt":"2024-06-10T06:13:21.000Z"},
                {"id":3,"task":"c","inputs":[],"provider":"openai","createdAt":"2024-06-10T06:13:22.000Z"},
                {"id":4,"task":"d","prompt":"p4","provider":"fallback","createdAt":"2024-06-10T06:13:23.000Z"}
            ]"#,
        )
        .unwrap();

        let loaded = history.load();
        let ids: Vec<i64> = loaded.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 4]);
        assert!(loaded[1].inputs.is_empty());
        assert!(loaded[2].inputs.is_empty());

        history.save(entry(5)).unwrap();
        let ids: Vec<i64> = history.load().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 4, 5]);
    }

    #[test]
    fn save_keeps_insertion_order() {
        let (_, history) = fresh();
        for id in 1..=3 {
            history.save(entry(id)).unwrap();
        }
        let ids: Vec<i64> = history.load().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn fifty_first_save_evicts_the_oldest() {
        let (_, history) = fresh();
        for id in 1..=51 {
            history.save(entry(id)).unwrap();
        }
        let ids: Vec<i64> = history.load().iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), MAX_HISTORY);
        assert!(!ids.contains(&1));
        assert_eq!(ids, (2..=51).collect::<Vec<_>>());
    }

    #[test]
    fn length_is_min_of_saves_and_cap() {
        for k in [0usize, 1, 49, 50, 75] {
            let (_, history) = fresh();
            for id in 0..k {
                history.save(entry(id as i64)).unwrap();
            }
            let loaded = history.load();
            assert_eq!(loaded.len(), k.min(MAX_HISTORY));
            if k > MAX_HISTORY {
                assert_eq!(loaded[0].id, (k - MAX_HISTORY) as i64);
            }
        }
    }

    #[test]
    fn clear_then_load_is_empty() {
        let (mem, history) = fresh();
        history.save(entry(1)).unwrap();
        history.clear().unwrap();
        assert!(history.load().is_empty());
        assert_eq!(mem.get(HISTORY_KEY).unwrap(), None);
    }

    #[test]
    fn recent_first_does_not_touch_storage() {
        let (mem, history) = fresh();
        for id in 1..=3 {
            history.save(entry(id)).unwrap();
        }
        let stored_before = mem.get(HISTORY_KEY).unwrap();
        let ids: Vec<i64> = history.recent_first().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert_eq!(mem.get(HISTORY_KEY).unwrap(), stored_before);
    }

    #[test]
    fn delete_removes_only_the_matching_entry() {
        let (_, history) = fresh();
        for id in 1..=3 {
            history.save(entry(id)).unwrap();
        }
        assert!(history.delete(2).unwrap());
        assert!(!history.delete(42).unwrap());
        let ids: Vec<i64> = history.load().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn reads_payloads_written_by_browser_clients() {
        let (mem, history) = fresh();
        mem.set(
            HISTORY_KEY,
            r#"[{"id":1718000000000,"task":"Summarize docs","inputs":["DOCUMENT"],"prompt":"You are...","provider":"fallback","createdAt":"2024-06-10T06:13:20.000Z"}]"#,
        )
        .unwrap();
        let loaded = history.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].provider, "fallback");
        assert_eq!(loaded[0].created_at.timestamp_millis(), 1_718_000_000_000);
    }
}
