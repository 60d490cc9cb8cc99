use rocket::async_trait;
use serde_json::json;
use crate::api::models::{ ApiError, CocktailDetail };
use crate::api::RecipeSource;

/// In-memory recipe API for offline runs and tests.
pub struct MockRecipeSource {
    drinks: Vec<CocktailDetail>,
    available: bool
}

impl MockRecipeSource {
    pub fn new(drinks: Vec<CocktailDetail>) -> Self {
        MockRecipeSource { drinks, available: true }
    }

    pub fn unavailable() -> Self {
        MockRecipeSource { drinks: vec![], available: false }
    }

    pub fn with_sample_drinks() -> Self {
        let sample = json!([
            {
                "idDrink": "11007",
                "strDrink": "Margarita",
                "strCategory": "Ordinary Drink",
                "strDrinkThumb": "https://www.thecocktaildb.com/images/media/drink/5noda61589575158.jpg",
                "strInstructions": "Rub the rim of the glass with the lime slice to make the salt stick to it. Shake the other ingredients with ice, then carefully pour into the glass.",
                "strIngredient1": "Tequila",
                "strMeasure1": "1 1/2 oz ",
                "strIngredient2": "Triple sec",
                "strMeasure2": "1/2 oz ",
                "strIngredient3": "Lime juice",
                "strMeasure3": "1 oz ",
                "strIngredient4": "Salt",
                "strMeasure4": null
            },
            {
                "idDrink": "17222",
                "strDrink": "A1",
                "strCategory": "Cocktail",
                "strDrinkThumb": "https://www.thecocktaildb.com/images/media/drink/2x8thr1504816928.jpg",
                "strInstructions": "Pour all ingredients into a cocktail shaker, mix and serve over ice into a chilled glass.",
                "strIngredient1": "Gin",
                "strMeasure1": "1 3/4 shot ",
                "strIngredient2": "Grand Marnier",
                "strMeasure2": "1 Shot ",
                "strIngredient3": "Lemon Juice",
                "strMeasure3": "1/4 Shot",
                "strIngredient4": "Grenadine",
                "strMeasure4": "1/8 Shot"
            }
        ]);
        match serde_json::from_value(sample) {
            Ok(drinks) => MockRecipeSource::new(drinks),
            Err(error) => panic!("Sample drinks are malformed: {}", error)
        }
    }

    fn check_available(&self) -> Result<(), ApiError> {
        if self.available {
            Ok(())
        } else {
            Err(ApiError::UpstreamUnavailable("mock recipe API is offline".to_string()))
        }
    }
}

#[async_trait]
impl RecipeSource for MockRecipeSource {
    async fn lookup(&self, cocktail_id: &str) -> Result<Option<Vec<CocktailDetail>>, ApiError> {
        self.check_available()?;
        let matches: Vec<CocktailDetail> = self.drinks.iter().filter(|drink| drink.id == cocktail_id).cloned().collect();
        Ok(if matches.is_empty() { None } else { Some(matches) })
    }

    async fn random(&self) -> Result<Option<Vec<CocktailDetail>>, ApiError> {
        self.check_available()?;
        Ok(self.drinks.first().cloned().map(|drink| vec![drink]))
    }
}
