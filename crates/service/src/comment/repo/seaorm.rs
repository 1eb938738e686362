use async_trait::async_trait;
use models::comment::{self, CommentWithAuthor};
use models::{comment_employee, issue};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::comment::repository::CommentRepository;
use crate::errors::{is_unique_violation, ServiceError};

pub struct SeaOrmCommentRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl CommentRepository for SeaOrmCommentRepository {
    async fn find_by_issue(&self, issue_id: Uuid) -> Result<Vec<CommentWithAuthor>, ServiceError> {
        comment::find_with_author_by_issue(&self.db, issue_id).await.map_err(ServiceError::db)
    }

    async fn find(&self, id: Uuid) -> Result<Option<CommentWithAuthor>, ServiceError> {
        comment::find_with_author_by_id(&self.db, id).await.map_err(ServiceError::db)
    }

    async fn issue_exists(&self, issue_id: Uuid) -> Result<bool, ServiceError> {
        let n = issue::Entity::find_by_id(issue_id).count(&self.db).await.map_err(ServiceError::db)?;
        Ok(n > 0)
    }

    async fn insert(&self, comment: comment::Model) -> Result<comment::Model, ServiceError> {
        comment
            .into_active_model()
            .reset_all()
            .insert(&self.db)
            .await
            .map_err(|e| ServiceError::db_write(e, "issue, parent comment or author"))
    }

    async fn increment_likes(&self, id: Uuid) -> Result<i32, ServiceError> {
        let updated = comment::Entity::update_many()
            .col_expr(comment::Column::Likes, Expr::col(comment::Column::Likes).add(1))
            .filter(comment::Column::Id.eq(id))
            .exec_with_returning(&self.db)
            .await
            .map_err(ServiceError::db)?;
        updated.first().map(|c| c.likes).ok_or(ServiceError::CommentNotFound(id))
    }

    async fn insert_upvote(&self, comment_id: Uuid, employee_id: Uuid) -> Result<(), ServiceError> {
        let vote = comment_employee::ActiveModel { comment_id: Set(comment_id), employee_id: Set(employee_id) };
        match comment_employee::Entity::insert(vote).exec(&self.db).await {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(ServiceError::AlreadyVoted { comment_id, employee_id }),
            Err(e) => Err(ServiceError::db_write(e, "comment or voter")),
        }
    }

    async fn find_upvote(&self, comment_id: Uuid, employee_id: Uuid) -> Result<Option<Uuid>, ServiceError> {
        let found = comment_employee::Entity::find_by_id((comment_id, employee_id))
            .one(&self.db)
            .await
            .map_err(ServiceError::db)?;
        Ok(found.map(|v| v.comment_id))
    }
}
