use crate::api::{ RecipeGateway, RecipeSource, ResourceService };

#[cfg(not(feature = "mock-api"))]
const DEFAULT_COCKTAIL_API_BASE_URL: &str = "https://www.thecocktaildb.com/api/json/v1/1";

pub struct RecipeGatewayFactory {}

impl RecipeGatewayFactory {
    pub fn create_or_panic(resource_service: &ResourceService) -> RecipeGateway {
        RecipeGateway::new(resource_service.clone(), Self::create_source(resource_service))
    }

    #[cfg(feature = "mock-api")]
    fn create_source(resource_service: &ResourceService) -> Box<dyn RecipeSource> {
        log::info!("{}", resource_service.string("mocking_recipe_api_info_message"));
        Box::new(crate::api::mock::MockRecipeSource::with_sample_drinks())
    }

    #[cfg(not(feature = "mock-api"))]
    fn create_source(resource_service: &ResourceService) -> Box<dyn RecipeSource> {
        use std::time::Duration;
        use serde_json::json;
        use crate::api::config::{ parse_var_or, var_or };
        use crate::api::{ HttpRecipeSource, RetryPolicy };

        let base_url = var_or("COCKTAIL_API_BASE_URL", DEFAULT_COCKTAIL_API_BASE_URL);
        let timeout_ms: u64 = parse_var_or("UPSTREAM_TIMEOUT_MS", "5000");
        let retry_policy = RetryPolicy {
            max_retries: parse_var_or("UPSTREAM_MAX_RETRIES", "2"),
            initial_delay: Duration::from_millis(parse_var_or("UPSTREAM_RETRY_DELAY_MS", "250"))
        };
        let message_data = &json!({ "base_url": base_url, "timeout_ms": timeout_ms, "max_retries": retry_policy.max_retries });
        log::info!("{}", resource_service.render("using_recipe_api_info_message_template", message_data));
        match HttpRecipeSource::new(resource_service.clone(), &base_url, Duration::from_millis(timeout_ms), retry_policy) {
            Ok(source) => Box::new(source),
            Err(error) => panic!("Couldn't create recipe API client: {}", error)
        }
    }
}
