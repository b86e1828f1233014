//! On-disk record cache: one pretty-printed JSON file per match id.
//! Read-through/write-through with no expiry: match reports never
//! change once final, so the first successful extraction wins. There is
//! no locking either; two racing first requests both extract the same
//! deterministic record and the later write is a no-op in practice.

use std::fs;
use std::io;
use std::path::PathBuf;

use log::warn;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct RecordCache {
    dir: PathBuf,
}

impl RecordCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn entry_path(&self, id: u32) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    /// A missing entry is a miss. A corrupt entry is also a miss; it is
    /// logged and left for the next `put` to overwrite, never surfaced.
    pub fn get(&self, id: u32) -> Option<Value> {
        let path = self.entry_path(id);
        let raw = fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("discarding corrupt cache entry {}: {e}", path.display());
                None
            }
        }
    }

    /// Persist a normalized record, creating the cache directory on
    /// first use. Last writer wins.
    pub fn put(&self, id: u32, record: &Value) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let body = serde_json::to_string_pretty(record).map_err(io::Error::other)?;
        fs::write(self.entry_path(id), body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn put_then_get_roundtrips() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = RecordCache::new(tmp.path().join("data"));

        let record = json!({ "event": { "name": "VCT" }, "players": {} });
        cache.put(42, &record).unwrap();
        assert_eq!(cache.get(42), Some(record));
    }

    #[test]
    fn missing_entry_is_a_miss() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = RecordCache::new(tmp.path());
        assert_eq!(cache.get(7), None);
    }

    #[test]
    fn corrupt_entry_is_a_miss_not_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = RecordCache::new(tmp.path());
        std::fs::write(tmp.path().join("9.json"), "{not json").unwrap();
        assert_eq!(cache.get(9), None);

        // And the slot is reusable afterwards.
        cache.put(9, &json!({"ok": true})).unwrap();
        assert_eq!(cache.get(9), Some(json!({"ok": true})));
    }

    #[test]
    fn entries_are_keyed_by_id() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = RecordCache::new(tmp.path());
        cache.put(1, &json!(1)).unwrap();
        cache.put(2, &json!(2)).unwrap();
        assert_eq!(cache.get(1), Some(json!(1)));
        assert_eq!(cache.get(2), Some(json!(2)));
    }
}
