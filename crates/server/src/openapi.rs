use chrono::{DateTime, FixedOffset};
use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::routes::comments::{NewCommentRequest, UpvoteRequest};
use crate::routes::issues::{ReportIssueRequest, UpdateIssueRequest};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct PageCountDoc { pub page_count: u64 }

#[derive(ToSchema)]
pub struct IssueDoc {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub status: String,
    pub start_time: DateTime<FixedOffset>,
    pub finish_time: Option<DateTime<FixedOffset>>,
    pub employee_id: Uuid,
    pub office_id: Uuid,
    pub rating: i32,
    pub comment_count: i32,
}

#[derive(ToSchema)]
pub struct IssueDetailsDoc {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub status: String,
    pub start_time: DateTime<FixedOffset>,
    pub finish_time: Option<DateTime<FixedOffset>>,
    pub employee_id: Uuid,
    pub office_id: Uuid,
    pub rating: i32,
    pub comment_count: i32,
    pub reporter_name: Option<String>,
    pub reporter_avatar: Option<String>,
    pub office_name: Option<String>,
}

#[derive(ToSchema)]
pub struct OfficeDoc { pub id: Uuid, pub name: String, pub country_id: Uuid }

#[derive(ToSchema)]
pub struct CountryDoc { pub id: Uuid, pub name: String }

#[derive(ToSchema)]
pub struct AddressDoc {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub street: String,
    pub city: String,
    pub post_code: Option<String>,
    pub country_id: Uuid,
}

#[derive(ToSchema)]
pub struct UserProfileDoc {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub position: Option<String>,
    pub avatar: Option<String>,
    /// `ADMIN` or `USER`
    pub roles: Vec<String>,
    pub address: AddressDoc,
    pub country: CountryDoc,
    pub office: OfficeDoc,
}

#[derive(ToSchema)]
pub struct CommentAuthorDoc { pub id: Uuid, pub full_name: Option<String>, pub avatar: Option<String> }

#[derive(ToSchema)]
pub struct CommentDoc {
    pub id: Uuid,
    pub text: String,
    pub time: DateTime<FixedOffset>,
    pub likes: i32,
    pub parent_id: Option<Uuid>,
    pub issue_id: Uuid,
    pub employee_id: Uuid,
    pub author: Option<CommentAuthorDoc>,
}

#[derive(ToSchema)]
pub struct ErrorDoc { pub status: u16, pub title: String, pub detail: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::issues::list_all,
        crate::routes::issues::list_page,
        crate::routes::issues::page_count,
        crate::routes::issues::report,
        crate::routes::issues::get,
        crate::routes::issues::update,
        crate::routes::issues::delete,
        crate::routes::issues::list_by_status,
        crate::routes::issues::status_page_count,
        crate::routes::issues::list_by_reporter,
        crate::routes::issues::reporter_page_count,
        crate::routes::issues::list_offices,
        crate::routes::users::get,
        crate::routes::comments::list_for_issue,
        crate::routes::comments::add,
        crate::routes::comments::get,
        crate::routes::comments::upvote,
    ),
    components(
        schemas(
            HealthResponse,
            PageCountDoc,
            IssueDoc,
            IssueDetailsDoc,
            OfficeDoc,
            CountryDoc,
            AddressDoc,
            UserProfileDoc,
            CommentAuthorDoc,
            CommentDoc,
            ErrorDoc,
            ReportIssueRequest,
            UpdateIssueRequest,
            NewCommentRequest,
            UpvoteRequest,
        )
    ),
    tags(
        (name = "health"),
        (name = "issue"),
        (name = "user"),
        (name = "comment")
    )
)]
pub struct ApiDoc;
