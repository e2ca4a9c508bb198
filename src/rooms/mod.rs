pub(crate) mod get;
pub(crate) mod list;
pub(crate) mod new;
pub mod store;

use axum::{Router, routing::get};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::AppState;

pub(crate) static ROOMS_TAG: &str = "Rooms";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/rooms", get(list::list_rooms).post(new::create_room))
        .route("/rooms/{id}", get(get::get_room))
}

/// Entry of the canonical room listing, creation-ordered with the
/// computed question count.
#[derive(Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomSummary {
    pub id: String,
    pub name: String,
    pub questions_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Name-ordered `{id, name}` projection kept alongside the aggregate
/// listing as a distinct read capability.
#[derive(Serialize, FromRow, ToSchema)]
pub struct RoomBasic {
    pub id: String,
    pub name: String,
}

#[derive(Serialize, FromRow, ToSchema)]
pub struct RoomDetail {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct NewRoomRequest {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedRoom {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}
