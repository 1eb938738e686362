use axum::{
    extract::{Path, State},
    Json,
};
use service::user::domain::UserProfile;
use uuid::Uuid;

use super::ServerState;
use crate::errors::JsonApiError;

#[utoipa::path(get, path = "/user/{id}", tag = "user", params(("id" = Uuid, Path, description = "Employee id")), responses((status = 200, description = "Composite user profile", body = crate::openapi::UserProfileDoc), (status = 404, description = "Address, country, user or office missing")))]
pub async fn get(State(state): State<ServerState>, Path(id): Path<Uuid>) -> Result<Json<UserProfile>, JsonApiError> {
    Ok(Json(state.users.get_by_id(id).await?))
}
