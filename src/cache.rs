use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use std::path::PathBuf;

/// Favorite campsite ids persisted across runs
pub struct CacheDb {
    conn: Connection,
}

impl CacheDb {
    pub fn new() -> Result<Self> {
        let cache_dir = Self::get_cache_dir()?;
        std::fs::create_dir_all(&cache_dir)
            .with_context(|| format!("Failed to create {}", cache_dir.display()))?;

        let db_path = cache_dir.join("cache.db");
        let conn = Connection::open(&db_path)
            .with_context(|| format!("Failed to open {}", db_path.display()))?;

        let mut cache = CacheDb { conn };
        cache.init_schema()?;

        Ok(cache)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut cache = CacheDb { conn };
        cache.init_schema()?;
        Ok(cache)
    }

    fn get_cache_dir() -> Result<PathBuf> {
        if let Some(cache_dir) = dirs::cache_dir() {
            Ok(cache_dir.join("camptui"))
        } else {
            let mut path = std::env::temp_dir();
            path.push("camptui-cache");
            Ok(path)
        }
    }

    fn init_schema(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS favorites (
                campsite_id INTEGER PRIMARY KEY,
                added_at TEXT NOT NULL
            );
            ",
        )?;

        Ok(())
    }

    pub fn get_favorites(&self) -> Result<Vec<u32>> {
        let mut stmt = self
            .conn
            .prepare("SELECT campsite_id FROM favorites ORDER BY campsite_id")?;

        let ids = stmt
            .query_map([], |row| row.get::<_, u32>(0))?
            .collect::<rusqlite::Result<Vec<u32>>>()?;

        Ok(ids)
    }

    /// Returns false if the campsite was already a favorite
    pub fn add_favorite(&self, campsite_id: u32) -> Result<bool> {
        let added_at = chrono::Utc::now().to_rfc3339();
        let changed = self.conn.execute(
            "INSERT OR IGNORE INTO favorites (campsite_id, added_at) VALUES (?1, ?2)",
            params![campsite_id, added_at],
        )?;
        Ok(changed > 0)
    }

    /// Returns false if the campsite was not a favorite
    pub fn remove_favorite(&self, campsite_id: u32) -> Result<bool> {
        let changed = self.conn.execute(
            "DELETE FROM favorites WHERE campsite_id = ?1",
            params![campsite_id],
        )?;
        Ok(changed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorites_round_trip() {
        let cache = CacheDb::open_in_memory().unwrap();
        assert!(cache.get_favorites().unwrap().is_empty());

        assert!(cache.add_favorite(3).unwrap());
        assert!(cache.add_favorite(1).unwrap());
        assert!(!cache.add_favorite(3).unwrap());
        assert_eq!(cache.get_favorites().unwrap(), vec![1, 3]);

        assert!(cache.remove_favorite(3).unwrap());
        assert!(!cache.remove_favorite(3).unwrap());
        assert_eq!(cache.get_favorites().unwrap(), vec![1]);
    }
}
