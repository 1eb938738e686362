use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use models::comment::CommentWithAuthor;
use serde::{Deserialize, Serialize};
use service::comment::domain::NewComment;
use utoipa::ToSchema;
use uuid::Uuid;

use super::ServerState;
use crate::errors::JsonApiError;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NewCommentRequest {
    pub text: String,
    #[serde(default)]
    pub parent_id: Option<Uuid>,
    pub employee_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpvoteRequest {
    pub employee_id: Uuid,
}

#[utoipa::path(get, path = "/issue/{id}/comments", tag = "comment", params(("id" = Uuid, Path, description = "Issue id")), responses((status = 200, description = "Comments, oldest first", body = [crate::openapi::CommentDoc])))]
pub async fn list_for_issue(State(state): State<ServerState>, Path(issue_id): Path<Uuid>) -> Result<Json<Vec<CommentWithAuthor>>, JsonApiError> {
    Ok(Json(state.comments.list_for_issue(issue_id).await?))
}

#[utoipa::path(post, path = "/issue/{id}/comments", tag = "comment", params(("id" = Uuid, Path, description = "Issue id")), request_body = NewCommentRequest, responses((status = 201, description = "Comment added", body = crate::openapi::CommentDoc), (status = 400, description = "Invalid comment"), (status = 404, description = "Issue or parent missing")))]
pub async fn add(
    State(state): State<ServerState>,
    Path(issue_id): Path<Uuid>,
    Json(body): Json<NewCommentRequest>,
) -> Result<(StatusCode, Json<CommentWithAuthor>), JsonApiError> {
    let input = NewComment { text: body.text, parent_id: body.parent_id };
    let created = state.comments.add(issue_id, body.employee_id, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/comment/{id}", tag = "comment", params(("id" = Uuid, Path, description = "Comment id")), responses((status = 200, description = "Comment", body = crate::openapi::CommentDoc), (status = 404, description = "Not found")))]
pub async fn get(State(state): State<ServerState>, Path(id): Path<Uuid>) -> Result<Json<CommentWithAuthor>, JsonApiError> {
    Ok(Json(state.comments.get(id).await?))
}

#[utoipa::path(post, path = "/comment/{id}/upvote", tag = "comment", params(("id" = Uuid, Path, description = "Comment id")), request_body = UpvoteRequest, responses((status = 200, description = "Upvoted", body = crate::openapi::CommentDoc), (status = 404, description = "Not found"), (status = 409, description = "Already voted")))]
pub async fn upvote(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpvoteRequest>,
) -> Result<Json<CommentWithAuthor>, JsonApiError> {
    Ok(Json(state.comments.upvote(id, body.employee_id).await?))
}
