use std::fs;
use serde_json::json;
use crate::api::config::{ config_path, var_or };
use crate::api::models::MoodEntry;
use crate::api::{ Database, MoodService, ResourceService };

const DEFAULT_DATABASE_FILE_PATH: &str = ".cocktail-of-the-day/ratings.db";

pub struct DatabaseFactory {}

impl DatabaseFactory {
    pub fn create_or_panic(resource_service: &ResourceService) -> Database {
        let file_path = config_path(&var_or("DATABASE_FILE_PATH", DEFAULT_DATABASE_FILE_PATH));
        log::info!("{}", resource_service.render("opening_database_info_message_template", &json!({ "path": file_path.display().to_string() })));
        if let Some(parent) = file_path.parent() {
            if let Err(error) = fs::create_dir_all(parent) {
                panic!("Couldn't create database directory \"{}\": {}", parent.display(), error);
            }
        }
        let database = match Database::open(&file_path) {
            Ok(database) => database,
            Err(error) => panic!("Couldn't open database \"{}\": {}", file_path.display(), error)
        };
        if let Ok(moods_seed_file_path) = dotenv::var("MOODS_SEED_FILE_PATH") {
            Self::seed_moods_or_panic(resource_service, &database, &moods_seed_file_path);
        }
        database
    }

    /// Seeds `Moods` from a JSON array of `{id, mood}`, only while the table is empty.
    fn seed_moods_or_panic(resource_service: &ResourceService, database: &Database, moods_seed_file_path: &str) {
        let mood_service = MoodService::new(resource_service.clone(), database.clone());
        match mood_service.is_empty() {
            Ok(true) => {},
            Ok(false) => return,
            Err(error) => panic!("Couldn't inspect moods table: {}", error)
        }
        let file_path = config_path(moods_seed_file_path);
        let path = file_path.display().to_string();
        let entries: Vec<MoodEntry> = match fs::read_to_string(&file_path) {
            Ok(seed_json) => match serde_json::from_str(&seed_json) {
                Ok(entries) => entries,
                Err(error) => panic!("{}", resource_service.render("reading_moods_seed_file_error_message_template", &json!({ "path": path, "error": error.to_string() })))
            },
            Err(error) => panic!("{}", resource_service.render("reading_moods_seed_file_error_message_template", &json!({ "path": path, "error": error.to_string() })))
        };
        match mood_service.seed_moods(&entries) {
            Ok(count) => log::info!("{}", resource_service.render("seeded_moods_info_message_template", &json!({ "count": count, "path": path }))),
            Err(error) => panic!("Couldn't seed moods: {}", error)
        }
    }
}
