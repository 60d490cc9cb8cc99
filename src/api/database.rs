use std::path::Path;
use std::sync::{ Arc, Mutex, MutexGuard };
use rusqlite::Connection;
use crate::api::models::ApiError;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS CocktailRatings (
        cocktail_id TEXT NOT NULL,
        rating INTEGER NOT NULL,
        rated_date TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_cocktail_ratings_date ON CocktailRatings (rated_date, cocktail_id);
    CREATE INDEX IF NOT EXISTS idx_cocktail_ratings_id ON CocktailRatings (cocktail_id);
    CREATE TABLE IF NOT EXISTS Moods (
        ID TEXT NOT NULL,
        Mood TEXT NOT NULL
    );
";

/// Shared handle to the ratings database file.
#[derive(Clone)]
pub struct Database {
    connection: Arc<Mutex<Connection>>
}

impl Database {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Database, ApiError> {
        Database::with_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Database, ApiError> {
        Database::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(connection: Connection) -> Result<Database, ApiError> {
        connection.execute_batch(SCHEMA)?;
        Ok(Database {
            connection: Arc::new(Mutex::new(connection))
        })
    }

    pub fn lock(&self) -> Result<MutexGuard<'_, Connection>, ApiError> {
        self.connection
            .lock()
            .map_err(|_| ApiError::Storage("connection lock poisoned".to_string()))
    }
}
