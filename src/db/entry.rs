//! Diary entry repository for CRUD operations

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::DbPool;
use crate::{Error, Result};

/// Who produced an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

impl Speaker {
    const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }

    fn from_str(s: &str) -> Option<Self> {
        match s {
            "user" => Some(Self::User),
            "assistant" => Some(Self::Assistant),
            _ => None,
        }
    }
}

/// A persisted diary entry (user text or assistant reply)
#[derive(Debug, Clone, Serialize)]
pub struct DiaryEntry {
    pub id: String,
    pub speaker: Speaker,
    pub text: String,
    pub emotion: String,
    pub intensity: String,
    pub topic: String,
    pub created_at: DateTime<Utc>,
}

/// Diary entry repository
#[derive(Clone)]
pub struct EntryRepo {
    pool: DbPool,
}

impl EntryRepo {
    /// Create a new entry repository
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Insert a new entry
    ///
    /// # Errors
    ///
    /// Returns error if database operation fails
    pub fn insert(
        &self,
        speaker: Speaker,
        text: &str,
        emotion: &str,
        intensity: &str,
        topic: &str,
    ) -> Result<DiaryEntry> {
        let conn = self
            .pool
            .get()
            .map_err(|e| Error::Database(e.to_string()))?;

        let id = Uuid::new_v4().to_string();
        let now = Utc::now();
        let created_at = now.to_rfc3339();

        conn.execute(
            "INSERT INTO entries (id, speaker, text, emotion, intensity, topic, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            [
                id.as_str(),
                speaker.as_str(),
                text,
                emotion,
                intensity,
                topic,
                created_at.as_str(),
            ],
        )
        .map_err(|e| Error::Database(e.to_string()))?;

        Ok(DiaryEntry {
            id,
            speaker,
            text: text.to_string(),
            emotion: emotion.to_string(),
            intensity: intensity.to_string(),
            topic: topic.to_string(),
            created_at: now,
        })
    }

    /// List the most recent entries, newest first
    ///
    /// # Errors
    ///
    /// Returns error if database operation fails
    pub fn list_recent(&self, limit: usize) -> Result<Vec<DiaryEntry>> {
        let conn = self
            .pool
            .get()
            .map_err(|e| Error::Database(e.to_string()))?;

        let mut stmt = conn
            .prepare(
                "SELECT id, speaker, text, emotion, intensity, topic, created_at
                 FROM entries ORDER BY created_at DESC, id LIMIT ?1",
            )
            .map_err(|e| Error::Database(e.to_string()))?;

        let entries = stmt
            .query_map([limit], |row| {
                let speaker: String = row.get(1)?;
                Ok(DiaryEntry {
                    id: row.get(0)?,
                    speaker: Speaker::from_str(&speaker).unwrap_or(Speaker::User),
                    text: row.get(2)?,
                    emotion: row.get(3)?,
                    intensity: row.get(4)?,
                    topic: row.get(5)?,
                    created_at: parse_datetime(&row.get::<_, String>(6)?),
                })
            })
            .map_err(|e| Error::Database(e.to_string()))?
            .filter_map(std::result::Result::ok)
            .collect();

        Ok(entries)
    }

    /// Count all entries
    ///
    /// # Errors
    ///
    /// Returns error if database operation fails
    pub fn count(&self) -> Result<i64> {
        let conn = self
            .pool
            .get()
            .map_err(|e| Error::Database(e.to_string()))?;

        conn.query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))
            .map_err(|e| Error::Database(e.to_string()))
    }
}

/// Parse an RFC3339 timestamp, falling back to now on corruption
fn parse_datetime(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).map_or_else(|_| Utc::now(), |dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn repo() -> EntryRepo {
        EntryRepo::new(db::init_memory().unwrap())
    }

    #[test]
    fn insert_and_count() {
        let repo = repo();
        assert_eq!(repo.count().unwrap(), 0);

        repo.insert(Speaker::User, "rough day", "sadness", "low_intensity", "general")
            .unwrap();
        repo.insert(
            Speaker::Assistant,
            "I hear you.",
            "sadness",
            "low_intensity",
            "general",
        )
        .unwrap();

        assert_eq!(repo.count().unwrap(), 2);
    }

    #[test]
    fn list_recent_respects_limit() {
        let repo = repo();
        for i in 0..5 {
            repo.insert(
                Speaker::User,
                &format!("entry {i}"),
                "neutral",
                "low_intensity",
                "general",
            )
            .unwrap();
        }

        let entries = repo.list_recent(3).unwrap();
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn round_trips_fields() {
        let repo = repo();
        let inserted = repo
            .insert(Speaker::User, "my boss again", "anger", "high_intensity", "work")
            .unwrap();

        let entries = repo.list_recent(10).unwrap();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.id, inserted.id);
        assert_eq!(entry.speaker, Speaker::User);
        assert_eq!(entry.text, "my boss again");
        assert_eq!(entry.emotion, "anger");
        assert_eq!(entry.intensity, "high_intensity");
        assert_eq!(entry.topic, "work");
    }
}
