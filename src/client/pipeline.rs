use chrono::Local;
use crate::api::models::{ AggregateRating, CocktailDetail, Message, RatingSubmission };
use crate::client::{ ClientError, CocktailApi, SessionContext };

pub const FAILED_TO_LOAD: &str = "Failed to load the cocktail of the day.";

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedView {
    pub cocktail_id: Option<String>,
    pub text: String
}

#[derive(Debug, Clone, PartialEq)]
pub enum RateOutcome {
    Submitted(Message),
    AlreadyRated
}

/// Step one: the session's cocktail, fetched once and then served from the cache.
async fn fetch_detail(session: &mut SessionContext, api: &dyn CocktailApi) -> Result<CocktailDetail, ClientError> {
    if let Some(cached) = &session.cached_cocktail {
        return Ok(cached.clone());
    }
    let detail = api.cocktail_of_the_day().await?;
    log::debug!("session {} cached cocktail {}", session.id, detail.id);
    session.cached_cocktail = Some(detail.clone());
    Ok(detail)
}

/// Step two: always fresh, never cached.
async fn fetch_rating(api: &dyn CocktailApi, cocktail_id: &str) -> Result<AggregateRating, ClientError> {
    api.average_rating(cocktail_id).await
}

/// Runs both steps and renders once, after the rating resolved or fell back to "Not rated".
pub async fn load_cocktail_of_the_day(session: &mut SessionContext, api: &dyn CocktailApi) -> RenderedView {
    let detail = match fetch_detail(session, api).await {
        Ok(detail) => detail,
        Err(error) => {
            log::warn!("session {} couldn't load the cocktail of the day: {}", session.id, error);
            return RenderedView { cocktail_id: None, text: FAILED_TO_LOAD.to_string() };
        }
    };
    let rating = match fetch_rating(api, &detail.id).await {
        Ok(rating) => rating,
        Err(error) => {
            log::warn!("session {} couldn't load the rating of {}: {}", session.id, detail.id, error);
            AggregateRating::not_rated()
        }
    };
    RenderedView { cocktail_id: Some(detail.id.clone()), text: render(&detail, &rating) }
}

/// Submits a rating unless this session already rated the cocktail.
pub async fn rate(session: &mut SessionContext, api: &dyn CocktailApi, cocktail_id: &str, rating: i64) -> Result<RateOutcome, ClientError> {
    if session.has_rated(cocktail_id) {
        return Ok(RateOutcome::AlreadyRated);
    }
    let submission = RatingSubmission {
        id: cocktail_id.to_string(),
        rating,
        date: Some(Local::now().date_naive())
    };
    let message = api.submit_rating(&submission).await?;
    session.rated_ids.insert(cocktail_id.to_string());
    Ok(RateOutcome::Submitted(message))
}

pub fn render(detail: &CocktailDetail, rating: &AggregateRating) -> String {
    let mut text = format!("{}\n", detail.name);
    text.push_str(&match rating.rating_count {
        0 => format!("Rating: {}\n", rating.average_rating),
        1 => format!("Rating: {} (1 rating)\n", rating.average_rating),
        count => format!("Rating: {} ({} ratings)\n", rating.average_rating, count)
    });
    if let Some(thumbnail_url) = &detail.thumbnail_url {
        text.push_str(&format!("Image: {}\n", thumbnail_url));
    }
    let ingredients = detail.ingredients();
    if !ingredients.is_empty() {
        text.push_str("\nIngredients:\n");
        for ingredient in ingredients {
            text.push_str(&match ingredient.measure {
                Some(measure) => format!("- {} {}\n", measure, ingredient.name),
                None => format!("- {}\n", ingredient.name)
            });
        }
    }
    if let Some(instructions) = &detail.instructions {
        text.push_str(&format!("\nInstructions:\n{}\n", instructions.trim()));
    }
    text
}
