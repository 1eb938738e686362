use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use service::comment::{repo::seaorm::SeaOrmCommentRepository, repository::CommentRepository, CommentService};
use service::issue::{repo::seaorm::SeaOrmIssueRepository, repository::IssueRepository, IssueService};
use service::notify::ReportNotifier;
use service::user::{repo::seaorm::SeaOrmUserRepository, repository::UserRepository, UserService};

use crate::openapi::ApiDoc;

pub mod comments;
pub mod issues;
pub mod users;

/// Services shared by every handler.
#[derive(Clone)]
pub struct ServerState {
    pub issues: Arc<IssueService<dyn IssueRepository>>,
    pub users: Arc<UserService<dyn UserRepository>>,
    pub comments: Arc<CommentService<dyn CommentRepository>>,
}

impl ServerState {
    pub fn new(
        issue_repo: Arc<dyn IssueRepository>,
        user_repo: Arc<dyn UserRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        notifier: Option<Arc<dyn ReportNotifier>>,
    ) -> Self {
        let mut issues = IssueService::new(issue_repo);
        if let Some(n) = notifier {
            issues = issues.with_notifier(n);
        }
        Self {
            issues: Arc::new(issues),
            users: Arc::new(UserService::new(user_repo)),
            comments: Arc::new(CommentService::new(comment_repo)),
        }
    }

    /// SeaORM-backed repositories sharing one connection pool.
    pub fn from_db(db: DatabaseConnection, notifier: Option<Arc<dyn ReportNotifier>>) -> Self {
        Self::new(
            Arc::new(SeaOrmIssueRepository { db: db.clone() }),
            Arc::new(SeaOrmUserRepository { db: db.clone() }),
            Arc::new(SeaOrmCommentRepository { db }),
            notifier,
        )
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let issue_routes = Router::new()
        .route("/issue", get(issues::list_all).post(issues::report))
        .route("/issue/page", get(issues::list_page))
        .route("/issue/page-count", get(issues::page_count))
        .route("/issue/status/:status", get(issues::list_by_status))
        .route("/issue/status/:status/page-count", get(issues::status_page_count))
        .route("/issue/reporter/:id", get(issues::list_by_reporter))
        .route("/issue/reporter/:id/page-count", get(issues::reporter_page_count))
        .route("/issue/:id", get(issues::get).put(issues::update).delete(issues::delete))
        .route("/office", get(issues::list_offices));

    let comment_routes = Router::new()
        .route("/issue/:id/comments", get(comments::list_for_issue).post(comments::add))
        .route("/comment/:id", get(comments::get))
        .route("/comment/:id/upvote", post(comments::upvote));

    let user_routes = Router::new().route("/user/:id", get(users::get));

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(issue_routes)
        .merge(comment_routes)
        .merge(user_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request with method and path
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status code and latency
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
