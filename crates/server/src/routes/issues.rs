use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use common::types::PageCount;
use models::{issue, office};
use service::issue::domain::{IssueUpdate, ReportIssue, StatusFilter};
use service::pagination::PageRequest;

use super::ServerState;
use crate::errors::JsonApiError;

/// `offset` is the 1-based page number.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

impl PageQuery {
    fn page(&self) -> Result<PageRequest, JsonApiError> {
        let d = PageRequest::default();
        Ok(PageRequest::new(self.offset.unwrap_or(d.page), self.limit.unwrap_or(d.limit))?)
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatusQuery {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub office_id: Option<Uuid>,
    pub employee_id: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReportIssueRequest {
    pub name: String,
    pub description: String,
    pub office_id: Uuid,
    pub employee_id: Uuid,
    #[serde(default)]
    pub rating: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateIssueRequest {
    pub description: String,
    pub office_id: Uuid,
    pub status: String,
}

#[utoipa::path(get, path = "/issue", tag = "issue", responses((status = 200, description = "All issues", body = [crate::openapi::IssueDoc])))]
pub async fn list_all(State(state): State<ServerState>) -> Result<Json<Vec<issue::Model>>, JsonApiError> {
    Ok(Json(state.issues.list_all().await?))
}

#[utoipa::path(get, path = "/issue/page", tag = "issue", params(PageQuery), responses((status = 200, description = "One page of issues", body = [crate::openapi::IssueDoc]), (status = 400, description = "Bad page parameters")))]
pub async fn list_page(State(state): State<ServerState>, Query(q): Query<PageQuery>) -> Result<Json<Vec<issue::Model>>, JsonApiError> {
    Ok(Json(state.issues.list_page(q.page()?).await?))
}

#[utoipa::path(get, path = "/issue/page-count", tag = "issue", responses((status = 200, description = "Page count", body = crate::openapi::PageCountDoc)))]
pub async fn page_count(State(state): State<ServerState>) -> Result<Json<PageCount>, JsonApiError> {
    Ok(Json(PageCount { page_count: state.issues.all_page_count().await? }))
}

#[utoipa::path(post, path = "/issue", tag = "issue", request_body = ReportIssueRequest, responses((status = 201, description = "Reported", body = crate::openapi::IssueDoc), (status = 409, description = "Name already in use")))]
pub async fn report(
    State(state): State<ServerState>,
    Json(body): Json<ReportIssueRequest>,
) -> Result<(StatusCode, Json<issue::Model>), JsonApiError> {
    let reporter = body.employee_id;
    let input = ReportIssue { name: body.name, description: body.description, office_id: body.office_id, rating: body.rating };
    let created = state.issues.report(input, reporter).await?;
    info!(issue_id = %created.id, "report accepted");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/issue/{id}", tag = "issue", params(("id" = Uuid, Path, description = "Issue id")), responses((status = 200, description = "Issue details", body = crate::openapi::IssueDetailsDoc), (status = 404, description = "Not found")))]
pub async fn get(State(state): State<ServerState>, Path(id): Path<Uuid>) -> Result<Json<issue::IssueDetails>, JsonApiError> {
    Ok(Json(state.issues.get_by_id(id).await?))
}

#[utoipa::path(put, path = "/issue/{id}", tag = "issue", params(("id" = Uuid, Path, description = "Issue id")), request_body = UpdateIssueRequest, responses((status = 204, description = "Updated"), (status = 404, description = "Not found")))]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateIssueRequest>,
) -> Result<StatusCode, JsonApiError> {
    let input = IssueUpdate { description: body.description, office_id: body.office_id, status: body.status };
    state.issues.update(input, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(delete, path = "/issue/{id}", tag = "issue", params(("id" = Uuid, Path, description = "Issue id")), responses((status = 204, description = "Deleted"), (status = 404, description = "Not found")))]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<Uuid>) -> Result<StatusCode, JsonApiError> {
    state.issues.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(get, path = "/issue/status/{status}", tag = "issue", params(("status" = String, Path, description = "Issue status"), StatusQuery), responses((status = 200, description = "Issues with that status", body = [crate::openapi::IssueDoc])))]
pub async fn list_by_status(
    State(state): State<ServerState>,
    Path(status): Path<String>,
    Query(q): Query<StatusQuery>,
) -> Result<Json<Vec<issue::Model>>, JsonApiError> {
    let page = PageQuery { offset: q.offset, limit: q.limit }.page()?;
    let filter = StatusFilter { status, office_id: q.office_id, employee_id: q.employee_id };
    Ok(Json(state.issues.list_by_status(&filter, page).await?))
}

#[utoipa::path(get, path = "/issue/status/{status}/page-count", tag = "issue", params(("status" = String, Path, description = "Issue status")), responses((status = 200, description = "Page count", body = crate::openapi::PageCountDoc)))]
pub async fn status_page_count(State(state): State<ServerState>, Path(status): Path<String>) -> Result<Json<PageCount>, JsonApiError> {
    Ok(Json(PageCount { page_count: state.issues.status_page_count(&status).await? }))
}

#[utoipa::path(get, path = "/issue/reporter/{id}", tag = "issue", params(("id" = Uuid, Path, description = "Reporter employee id"), PageQuery), responses((status = 200, description = "Issues reported by the employee", body = [crate::openapi::IssueDoc])))]
pub async fn list_by_reporter(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Query(q): Query<PageQuery>,
) -> Result<Json<Vec<issue::Model>>, JsonApiError> {
    Ok(Json(state.issues.list_by_reporter(id, q.page()?).await?))
}

#[utoipa::path(get, path = "/issue/reporter/{id}/page-count", tag = "issue", params(("id" = Uuid, Path, description = "Reporter employee id")), responses((status = 200, description = "Page count", body = crate::openapi::PageCountDoc)))]
pub async fn reporter_page_count(State(state): State<ServerState>, Path(id): Path<Uuid>) -> Result<Json<PageCount>, JsonApiError> {
    Ok(Json(PageCount { page_count: state.issues.reporter_page_count(id).await? }))
}

#[utoipa::path(get, path = "/office", tag = "issue", responses((status = 200, description = "All offices", body = [crate::openapi::OfficeDoc])))]
pub async fn list_offices(State(state): State<ServerState>) -> Result<Json<Vec<office::Model>>, JsonApiError> {
    Ok(Json(state.issues.list_offices().await?))
}
