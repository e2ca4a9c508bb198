use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid UUID")]
    InvalidUuid,
    #[error("Room not found")]
    RoomNotFound,
    #[error("{0}")]
    InvalidPayload(String),
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

/// Body of every modeled error response.
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::InvalidUuid | AppError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            AppError::RoomNotFound => StatusCode::NOT_FOUND,
            AppError::Db(err) => {
                // store failures are not part of the modeled contract
                log::error!("database failure: {err}");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        };

        (status, Json(ErrorBody { message: self.to_string() })).into_response()
    }
}
