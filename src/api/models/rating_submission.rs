use chrono::NaiveDate;
use rocket::serde::{ Deserialize, Serialize };
use serde::Deserializer;

pub const RATING_MIN: i64 = 1;
pub const RATING_MAX: i64 = 5;

/// Body of `POST /submit-rating`.
///
/// `rating` is range-checked by `rating_is_valid`, not by deserialisation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct RatingSubmission {
    #[serde(deserialize_with = "string_or_integer")]
    pub id: String,
    pub rating: i64,
    #[serde(default)]
    pub date: Option<NaiveDate>
}

/// Cocktail ids arrive as `"11007"` or `11007` depending on how the page parsed `idDrink`.
fn string_or_integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(crate = "rocket::serde", untagged)]
    enum CocktailId {
        Text(String),
        Number(u64)
    }

    Ok(match CocktailId::deserialize(deserializer)? {
        CocktailId::Text(text) => text,
        CocktailId::Number(number) => number.to_string()
    })
}

impl RatingSubmission {
    pub fn rating_is_valid(&self) -> bool {
        self.rating >= RATING_MIN && self.rating <= RATING_MAX
    }

    pub fn id_is_valid(&self) -> bool {
        !self.id.trim().is_empty()
    }
}
