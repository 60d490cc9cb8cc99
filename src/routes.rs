use chrono::{ Local, NaiveDate };
use rocket::http::Status;
use rocket::response::status;
use rocket::tokio::task::spawn_blocking;
use rocket::serde::json::{ Error as JsonError, Json };
use rocket::{ Request, Route, Catcher, State };
use serde_json::json;
use crate::api::models::{ AggregateRating, ApiError, CocktailDetail, GenericError, Message, RatedCocktail, RatingSubmission };
use crate::api::{ MoodService, Period, RatingService, RecipeGateway, ResourceService };

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Runs a database call on the blocking pool so a slow disk doesn't hold up the async workers.
async fn run_blocking<T, F>(task: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static
{
    match spawn_blocking(task).await {
        Ok(result) => result,
        Err(error) => Err(ApiError::Storage(error.to_string()))
    }
}

#[get("/cocktail-by-mood?<mood>")]
async fn cocktail_by_mood_get(
    mood: Option<&str>,
    mood_service: &State<MoodService>,
    recipe_gateway: &State<RecipeGateway>,
    resource_service: &State<ResourceService>
) -> Result<Json<CocktailDetail>, ApiError> {
    let mood = match mood {
        Some(mood) if !mood.is_empty() => mood,
        _ => return Err(ApiError::Validation(resource_service.string("missing_mood_error_message")))
    };
    let mood_service = mood_service.inner().clone();
    let mood = mood.to_string();
    match run_blocking(move || mood_service.resolve_by_mood(&mood)).await? {
        Some(cocktail_id) => Ok(Json(recipe_gateway.hydrate(&cocktail_id).await?)),
        None => Err(ApiError::NotFound(resource_service.string("no_mood_match_message")))
    }
}

#[get("/moods")]
fn moods_get(mood_service: &State<MoodService>) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(mood_service.moods()?))
}

#[post("/submit-rating", data = "<submission>")]
fn submit_rating_post(
    rating_service: &State<RatingService>,
    resource_service: &State<ResourceService>,
    submission: Result<Json<RatingSubmission>, JsonError<'_>>
) -> Result<Json<Message>, ApiError> {
    let submission = submission.map_err(|error| {
        ApiError::Validation(resource_service.render("malformed_rating_error_message_template", &json!({ "error": error.to_string() })))
    })?;
    Ok(Json(rating_service.submit_rating(&submission, today())?))
}

#[get("/average-rating/<cocktail_id>")]
fn average_rating_get(rating_service: &State<RatingService>, cocktail_id: &str) -> Result<Json<AggregateRating>, ApiError> {
    Ok(Json(rating_service.average_rating(cocktail_id)?))
}

async fn top_rated(
    period: Period,
    rating_service: &RatingService,
    recipe_gateway: &RecipeGateway,
    resource_service: &ResourceService
) -> Result<Json<RatedCocktail>, ApiError> {
    let rating_service = rating_service.clone();
    let current_date = today();
    match run_blocking(move || rating_service.top_rated_for_period(period, current_date)).await? {
        Some(top_rated) => {
            let cocktail = recipe_gateway.hydrate(&top_rated.cocktail_id).await?;
            Ok(Json(RatedCocktail { cocktail, rating: top_rated.rating }))
        },
        None => Err(ApiError::NotFound(resource_service.string("no_top_rated_message")))
    }
}

#[get("/top-rated-cocktail")]
async fn top_rated_cocktail_get(
    rating_service: &State<RatingService>,
    recipe_gateway: &State<RecipeGateway>,
    resource_service: &State<ResourceService>
) -> Result<Json<RatedCocktail>, ApiError> {
    top_rated(Period::Month, rating_service, recipe_gateway, resource_service).await
}

#[get("/top-rated-cocktail-week")]
async fn top_rated_cocktail_week_get(
    rating_service: &State<RatingService>,
    recipe_gateway: &State<RecipeGateway>,
    resource_service: &State<ResourceService>
) -> Result<Json<RatedCocktail>, ApiError> {
    top_rated(Period::Week, rating_service, recipe_gateway, resource_service).await
}

#[get("/cocktail-of-the-day")]
async fn cocktail_of_the_day_get(recipe_gateway: &State<RecipeGateway>) -> Result<Json<CocktailDetail>, ApiError> {
    Ok(Json(recipe_gateway.random().await?))
}

#[catch(default)]
fn json_catcher(status: Status, request: &Request<'_>) -> status::Custom<Json<GenericError>> {
    let resource_service = match request.rocket().state::<ResourceService>() {
        Some(resource_service) => resource_service.clone(),
        None => ResourceService::bundled()
    };
    let message = match status.code {
        404 => resource_service.render("route_not_found_message_template", &json!({ "path": request.uri().path().to_string() })),
        _ => resource_service.render("request_failed_message_template", &json!({ "status": status.to_string() }))
    };
    status::Custom(status, Json(GenericError { message }))
}

pub fn routes() -> Vec<Route> {
    routes![
        cocktail_by_mood_get,
        moods_get,
        submit_rating_post,
        average_rating_get,
        top_rated_cocktail_get,
        top_rated_cocktail_week_get,
        cocktail_of_the_day_get
    ]
}

pub fn catchers() -> Vec<Catcher> {
    catchers![json_catcher]
}
