pub(crate) mod list;
pub(crate) mod new;
pub mod store;

use axum::{
    Router,
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::AppState;

pub(crate) static QUESTIONS_TAG: &str = "Questions";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/questions", post(new::create_question))
        .route("/questions/{room_id}", get(list::list_questions))
}

#[derive(Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionItem {
    pub id: String,
    pub question: String,
    pub answer: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewQuestionRequest {
    pub room_id: String,
    pub question: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedQuestion {
    pub id: String,
    pub question: String,
}
