use serde::{ Deserialize, Serialize };
use serde_json::{ Map, Value };
use crate::api::models::AggregateRating;

const MAX_INGREDIENTS: usize = 15;

/// One drink as the recipe API returns it.
///
/// Only the fields this service reads are named; everything else is carried
/// through untouched in `fields`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CocktailDetail {
    #[serde(rename = "idDrink")]
    pub id: String,
    #[serde(rename = "strDrink")]
    pub name: String,
    #[serde(rename = "strDrinkThumb", default)]
    pub thumbnail_url: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub name: String,
    pub measure: Option<String>
}

impl CocktailDetail {
    pub fn ingredients(&self) -> Vec<Ingredient> {
        (1..=MAX_INGREDIENTS)
            .filter_map(|index| {
                let name = self.non_blank_field(&format!("strIngredient{}", index))?;
                let measure = self.non_blank_field(&format!("strMeasure{}", index));
                Some(Ingredient { name, measure })
            })
            .collect()
    }

    fn non_blank_field(&self, key: &str) -> Option<String> {
        match self.fields.get(key) {
            Some(Value::String(text)) if !text.trim().is_empty() => Some(text.trim().to_string()),
            _ => None
        }
    }
}

/// Upstream envelope: `{"drinks": [...]}` or `{"drinks": null}`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct DrinksEnvelope {
    #[serde(default)]
    pub drinks: Option<Vec<CocktailDetail>>
}

/// Cocktail detail with its aggregate rating merged in at the top level.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RatedCocktail {
    #[serde(flatten)]
    pub cocktail: CocktailDetail,
    #[serde(flatten)]
    pub rating: AggregateRating
}
