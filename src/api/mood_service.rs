use rand::seq::IndexedRandom;
use rusqlite::params;
use serde_json::json;
use crate::api::models::{ ApiError, MoodEntry };
use crate::api::{ Database, ResourceService };

#[derive(Clone)]
pub struct MoodService {
    resource_service: ResourceService,
    database: Database
}

impl MoodService {
    pub fn new(resource_service: ResourceService, database: Database) -> MoodService {
        MoodService {
            resource_service,
            database
        }
    }

    /// Picks one of the cocktails listed under exactly this mood label, uniformly at random.
    pub fn resolve_by_mood(&self, mood: &str) -> Result<Option<String>, ApiError> {
        let cocktail_ids = {
            let connection = self.database.lock()?;
            let mut statement = connection.prepare_cached("SELECT ID FROM Moods WHERE Mood = ?1")?;
            let rows = statement.query_map(params![mood], |row| row.get::<_, String>(0))?;
            rows.collect::<Result<Vec<String>, _>>()?
        };
        let chosen = cocktail_ids.choose(&mut rand::rng()).cloned();
        if let Some(cocktail_id) = &chosen {
            let message_data = &json!({ "mood": mood, "cocktail_id": cocktail_id });
            log::info!("{}", self.resource_service.render("mood_resolved_info_message_template", message_data));
        }
        Ok(chosen)
    }

    pub fn moods(&self) -> Result<Vec<String>, ApiError> {
        let connection = self.database.lock()?;
        let mut statement = connection.prepare_cached("SELECT DISTINCT Mood FROM Moods ORDER BY Mood")?;
        let rows = statement.query_map([], |row| row.get::<_, String>(0))?;
        Ok(rows.collect::<Result<Vec<String>, _>>()?)
    }

    pub fn is_empty(&self) -> Result<bool, ApiError> {
        let count: i64 = self.database.lock()?.query_row("SELECT COUNT(*) FROM Moods", [], |row| row.get(0))?;
        Ok(count == 0)
    }

    /// Inserts reference entries in one transaction.
    pub fn seed_moods(&self, entries: &[MoodEntry]) -> Result<usize, ApiError> {
        let mut connection = self.database.lock()?;
        let transaction = connection.transaction()?;
        {
            let mut statement = transaction.prepare_cached("INSERT INTO Moods (ID, Mood) VALUES (?1, ?2)")?;
            for entry in entries {
                statement.execute(params![entry.id, entry.mood])?;
            }
        }
        transaction.commit()?;
        Ok(entries.len())
    }
}
