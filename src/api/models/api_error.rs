use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{ self, Responder, status };
use rocket::serde::json::Json;
use thiserror::Error;
use crate::api::models::GenericError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Ratings database error: {0}")]
    Storage(String),

    #[error("Recipe API unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String)
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::Storage(_) => Status::InternalServerError,
            ApiError::UpstreamUnavailable(_) => Status::InternalServerError,
            ApiError::NotFound(_) => Status::NotFound,
            ApiError::Validation(_) => Status::BadRequest
        }
    }
}

impl From<rusqlite::Error> for ApiError {
    fn from(error: rusqlite::Error) -> Self {
        ApiError::Storage(error.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        ApiError::UpstreamUnavailable(error.to_string())
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        match status.code {
            500..=599 => log::error!("{} {}: {}", request.method(), request.uri(), self),
            _ => log::debug!("{} {}: {}", request.method(), request.uri(), self)
        }
        status::Custom(status, Json(GenericError { message: self.to_string() })).respond_to(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_each_kind_to_its_status() {
        assert_eq!(ApiError::Storage("disk I/O error".to_string()).status(), Status::InternalServerError);
        assert_eq!(ApiError::UpstreamUnavailable("timed out".to_string()).status(), Status::InternalServerError);
        assert_eq!(ApiError::NotFound("No cocktail found for this mood".to_string()).status(), Status::NotFound);
        assert_eq!(ApiError::Validation("bad rating".to_string()).status(), Status::BadRequest);
    }

    #[test]
    fn sqlite_failures_are_storage_errors() {
        let error: ApiError = rusqlite::Error::InvalidQuery.into();
        assert!(matches!(error, ApiError::Storage(_)));
    }
}
