use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use super::demo_progress_models::ErrorResponse;
use crate::demo::SEED_COMMAND;

pub const INTERNAL_ERROR_MESSAGE: &str = "Failed to fetch demo progress";

/// Failures of the progress endpoint. Storage causes are logged, never sent.
#[derive(Debug, Error)]
pub enum DemoProgressError {
    #[error("Demo user not found. Run: {}", SEED_COMMAND)]
    NotFound,
    #[error("{}", INTERNAL_ERROR_MESSAGE)]
    Internal,
}

impl ResponseError for DemoProgressError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
