use reqwest::{ Client, Response };
use rocket::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;
use crate::api::models::{ AggregateRating, CocktailDetail, GenericError, Message, RatingSubmission };

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid server url: {0}")]
    InvalidUrl(String),

    #[error("server answered {status}: {message}")]
    Server { status: u16, message: String }
}

/// The server calls the page makes.
#[async_trait]
pub trait CocktailApi: Send + Sync {
    async fn cocktail_of_the_day(&self) -> Result<CocktailDetail, ClientError>;
    async fn average_rating(&self, cocktail_id: &str) -> Result<AggregateRating, ClientError>;
    async fn submit_rating(&self, submission: &RatingSubmission) -> Result<Message, ClientError>;
}

pub struct HttpCocktailApi {
    client: Client,
    base_url: String
}

impl HttpCocktailApi {
    pub fn new(base_url: &str) -> Self {
        HttpCocktailApi {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string()
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }
        let message = match response.json::<GenericError>().await {
            Ok(error) => error.message,
            Err(_) => status.to_string()
        };
        Err(ClientError::Server { status: status.as_u16(), message })
    }
}

#[async_trait]
impl CocktailApi for HttpCocktailApi {
    async fn cocktail_of_the_day(&self) -> Result<CocktailDetail, ClientError> {
        let response = self.client.get(self.url("/cocktail-of-the-day")).send().await?;
        Self::read(response).await
    }

    async fn average_rating(&self, cocktail_id: &str) -> Result<AggregateRating, ClientError> {
        let mut url = reqwest::Url::parse(&self.url("/average-rating/"))
            .map_err(|error| ClientError::InvalidUrl(error.to_string()))?;
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(cocktail_id);
        }
        let response = self.client.get(url).send().await?;
        Self::read(response).await
    }

    async fn submit_rating(&self, submission: &RatingSubmission) -> Result<Message, ClientError> {
        let response = self.client.post(self.url("/submit-rating")).json(submission).send().await?;
        Self::read(response).await
    }
}
