use rocket::serde::{ Deserialize, Serialize };

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct MoodEntry {
    pub id: String,
    pub mood: String
}
