use std::time::Duration;
use reqwest::{ Client, StatusCode };
use rocket::async_trait;
use rocket::tokio::time::sleep;
use serde_json::json;
use crate::api::models::{ ApiError, CocktailDetail, DrinksEnvelope };
use crate::api::ResourceService;

const MAX_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Where cocktail recipes come from. Both calls return the upstream `drinks` list as-is.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    async fn lookup(&self, cocktail_id: &str) -> Result<Option<Vec<CocktailDetail>>, ApiError>;
    async fn random(&self) -> Result<Option<Vec<CocktailDetail>>, ApiError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_delay: Duration
}

impl RetryPolicy {
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.initial_delay.saturating_mul(factor).min(MAX_RETRY_DELAY)
    }
}

enum Attempt {
    Done(Option<Vec<CocktailDetail>>),
    Retry(String),
    Fail(String)
}

/// `RecipeSource` backed by the public cocktail API over HTTPS.
pub struct HttpRecipeSource {
    resource_service: ResourceService,
    client: Client,
    base_url: String,
    retry_policy: RetryPolicy
}

impl HttpRecipeSource {
    pub fn new(resource_service: ResourceService, base_url: &str, timeout: Duration, retry_policy: RetryPolicy) -> Result<HttpRecipeSource, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(HttpRecipeSource {
            resource_service,
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            retry_policy
        })
    }

    async fn get_drinks(&self, path: &str, query: &[(&str, &str)]) -> Result<Option<Vec<CocktailDetail>>, ApiError> {
        let url = format!("{}/{}", self.base_url, path);
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.try_get_drinks(&url, query).await {
                Attempt::Done(drinks) => return Ok(drinks),
                Attempt::Fail(error) => return Err(ApiError::UpstreamUnavailable(error)),
                Attempt::Retry(error) => {
                    if attempt > self.retry_policy.max_retries {
                        return Err(ApiError::UpstreamUnavailable(error));
                    }
                    let delay = self.retry_policy.delay_for_attempt(attempt);
                    let message_data = &json!({ "url": url, "attempt": attempt, "error": error, "delay_ms": delay.as_millis() as u64 });
                    log::warn!("{}", self.resource_service.render("upstream_retry_warn_message_template", message_data));
                    sleep(delay).await;
                }
            }
        }
    }

    async fn try_get_drinks(&self, url: &str, query: &[(&str, &str)]) -> Attempt {
        let response = match self.client.get(url).query(query).send().await {
            Ok(response) => response,
            Err(error) => return Attempt::Retry(error.to_string())
        };
        let status = response.status();
        if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
            return Attempt::Retry(format!("upstream answered {}", status));
        }
        if !status.is_success() {
            return Attempt::Fail(format!("upstream answered {}", status));
        }
        let body = match response.text().await {
            Ok(body) => body,
            Err(error) => return Attempt::Retry(error.to_string())
        };
        match parse_drinks(&body) {
            Ok(drinks) => Attempt::Done(drinks),
            Err(error) => Attempt::Fail(error)
        }
    }
}

/// The API answers an empty body or `{"drinks": null}` when nothing matches.
pub fn parse_drinks(body: &str) -> Result<Option<Vec<CocktailDetail>>, String> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<DrinksEnvelope>(body)
        .map(|envelope| envelope.drinks)
        .map_err(|error| format!("malformed response: {}", error))
}

#[async_trait]
impl RecipeSource for HttpRecipeSource {
    async fn lookup(&self, cocktail_id: &str) -> Result<Option<Vec<CocktailDetail>>, ApiError> {
        self.get_drinks("lookup.php", &[("i", cocktail_id)]).await
    }

    async fn random(&self) -> Result<Option<Vec<CocktailDetail>>, ApiError> {
        self.get_drinks("random.php", &[]).await
    }
}

/// Resolves cocktail ids to full recipes.
pub struct RecipeGateway {
    resource_service: ResourceService,
    source: Box<dyn RecipeSource>
}

impl RecipeGateway {
    pub fn new(resource_service: ResourceService, source: Box<dyn RecipeSource>) -> RecipeGateway {
        RecipeGateway {
            resource_service,
            source
        }
    }

    pub async fn hydrate(&self, cocktail_id: &str) -> Result<CocktailDetail, ApiError> {
        let drinks = self.source.lookup(cocktail_id).await?;
        first_drink(drinks).ok_or_else(|| {
            let message_data = &json!({ "cocktail_id": cocktail_id });
            ApiError::NotFound(self.resource_service.render("cocktail_not_found_message_template", message_data))
        })
    }

    pub async fn random(&self) -> Result<CocktailDetail, ApiError> {
        let drinks = self.source.random().await?;
        first_drink(drinks).ok_or_else(|| ApiError::NotFound(self.resource_service.string("no_random_cocktail_message")))
    }
}

fn first_drink(drinks: Option<Vec<CocktailDetail>>) -> Option<CocktailDetail> {
    drinks.and_then(|drinks| drinks.into_iter().next())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockRecipeSource;

    fn gateway() -> RecipeGateway {
        RecipeGateway::new(ResourceService::bundled(), Box::new(MockRecipeSource::with_sample_drinks()))
    }

    #[rocket::async_test]
    async fn hydrates_known_ids() {
        let detail = gateway().hydrate("11007").await.unwrap();
        assert_eq!(detail.name, "Margarita");
    }

    #[rocket::async_test]
    async fn unknown_id_is_not_found() {
        let error = gateway().hydrate("0").await.unwrap_err();
        assert!(matches!(error, ApiError::NotFound(_)));
        assert_eq!(error.to_string(), "No cocktail found with id 0");
    }

    #[rocket::async_test]
    async fn upstream_failure_is_passed_on() {
        let gateway = RecipeGateway::new(ResourceService::bundled(), Box::new(MockRecipeSource::unavailable()));
        assert!(matches!(gateway.hydrate("11007").await, Err(ApiError::UpstreamUnavailable(_))));
        assert!(matches!(gateway.random().await, Err(ApiError::UpstreamUnavailable(_))));
    }

    #[test]
    fn parses_upstream_bodies() {
        assert_eq!(parse_drinks(r#"{"drinks":null}"#).unwrap(), None);
        assert_eq!(parse_drinks("").unwrap(), None);
        let drinks = parse_drinks(r#"{"drinks":[{"idDrink":"11007","strDrink":"Margarita"}]}"#).unwrap().unwrap();
        assert_eq!(drinks[0].id, "11007");
        assert!(parse_drinks("<html>busy</html>").is_err());
    }

    #[test]
    fn backoff_doubles_up_to_a_cap() {
        let retry_policy = RetryPolicy { max_retries: 10, initial_delay: Duration::from_millis(250) };
        assert_eq!(retry_policy.delay_for_attempt(1), Duration::from_millis(250));
        assert_eq!(retry_policy.delay_for_attempt(2), Duration::from_millis(500));
        assert_eq!(retry_policy.delay_for_attempt(3), Duration::from_millis(1000));
        assert_eq!(retry_policy.delay_for_attempt(9), MAX_RETRY_DELAY);
    }

    #[rocket::async_test]
    async fn unreachable_host_fails_after_retries() {
        let retry_policy = RetryPolicy { max_retries: 1, initial_delay: Duration::from_millis(1) };
        let source = HttpRecipeSource::new(ResourceService::bundled(), "http://127.0.0.1:9", Duration::from_millis(200), retry_policy).unwrap();
        assert!(matches!(source.lookup("11007").await, Err(ApiError::UpstreamUnavailable(_))));
    }
}
