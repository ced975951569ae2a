//! 💾 Persistent whisper memory
//!
//! One JSON file holding the universe counter and the bounded history
//! of (timestamp, message) pairs. Whole-file overwrite, last writer
//! wins, no locking.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Most recent entries kept on every save
pub const HISTORIA_MAX: usize = 50;

/// On-disk record. History is an array of [rfc3339, message] pairs,
/// pretty-printed UTF-8 with non-ASCII left unescaped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedMemoria {
    pub universe_count: u64,
    pub history: Vec<(DateTime<Utc>, String)>,
}

/// Load/save of the persisted record against one well-known file
pub struct MemoryStore {
    path: PathBuf,
}

impl MemoryStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Reads the record. A missing file is an empty record; an
    /// unreadable or unparsable one (including any timestamp that does
    /// not parse) is an error the caller degrades from. No partial
    /// history is ever returned.
    pub fn load(&self) -> Result<PersistedMemoria> {
        if !self.path.exists() {
            return Ok(PersistedMemoria::default());
        }

        let file = fs::File::open(&self.path)?;
        let reader = BufReader::new(file);
        let memoria: PersistedMemoria = serde_json::from_reader(reader)?;
        Ok(memoria)
    }

    /// Writes the record, keeping only the final [`HISTORIA_MAX`]
    /// history entries (oldest dropped first). Overwrites in place; a
    /// failed write leaves the file in whatever state it reached.
    pub fn save(&self, universe_count: u64, history: &[(DateTime<Utc>, String)]) -> Result<()> {
        let inicio = history.len().saturating_sub(HISTORIA_MAX);
        let record = PersistedMemoria {
            universe_count,
            history: history[inicio..].to_vec(),
        };

        let json_content = serde_json::to_string_pretty(&record)?;
        fs::write(&self.path, json_content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn entry(secs: i64, msg: &str) -> (DateTime<Utc>, String) {
        (Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap(), msg.to_string())
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = MemoryStore::new(temp_dir.path().join("memoria.json"));

        let memoria = store.load().unwrap();
        assert_eq!(memoria.universe_count, 0);
        assert!(memoria.history.is_empty());
    }

    #[test]
    fn test_round_trip_preserves_order_and_timestamps() {
        let temp_dir = TempDir::new().unwrap();
        let store = MemoryStore::new(temp_dir.path().join("memoria.json"));

        let history = vec![entry(0, "primero"), entry(1, "segundo ñandú 🌙")];
        store.save(3, &history).unwrap();

        let memoria = store.load().unwrap();
        assert_eq!(memoria.universe_count, 3);
        assert_eq!(memoria.history, history);
    }

    #[test]
    fn test_save_truncates_to_last_50() {
        let temp_dir = TempDir::new().unwrap();
        let store = MemoryStore::new(temp_dir.path().join("memoria.json"));

        let history: Vec<_> = (0..60).map(|i| entry(i, &format!("susurro {i}"))).collect();
        store.save(0, &history).unwrap();

        let memoria = store.load().unwrap();
        assert_eq!(memoria.history.len(), HISTORIA_MAX);
        // Oldest dropped first
        assert_eq!(memoria.history.first().unwrap().1, "susurro 10");
        assert_eq!(memoria.history.last().unwrap().1, "susurro 59");
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("memoria.json");
        fs::write(&path, "{ not json").unwrap();

        let store = MemoryStore::new(&path);
        assert!(store.load().is_err());
    }

    #[test]
    fn test_bad_timestamp_aborts_whole_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("memoria.json");
        fs::write(
            &path,
            r#"{"universeCount": 1, "history": [["2026-01-01T00:00:00Z", "ok"], ["ayer", "mal"]]}"#,
        )
        .unwrap();

        let store = MemoryStore::new(&path);
        assert!(store.load().is_err());
    }

    #[test]
    fn test_non_ascii_unescaped_on_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("memoria.json");
        let store = MemoryStore::new(&path);

        store.save(0, &[entry(0, "corazón")]).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("corazón"));
        assert!(!raw.contains("\\u00f3"));
    }

    #[test]
    fn test_persisted_key_names() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("memoria.json");
        let store = MemoryStore::new(&path);

        store.save(7, &[]).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"universeCount\": 7"));
        assert!(raw.contains("\"history\""));
    }
}
