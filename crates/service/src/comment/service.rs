use std::sync::Arc;

use chrono::Utc;
use models::comment::{self, CommentWithAuthor};
use tracing::{info, instrument};
use uuid::Uuid;

use super::domain::NewComment;
use super::repository::CommentRepository;
use crate::errors::ServiceError;

pub struct CommentService<R: CommentRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: CommentRepository + ?Sized> CommentService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list_for_issue(&self, issue_id: Uuid) -> Result<Vec<CommentWithAuthor>, ServiceError> {
        self.repo.find_by_issue(issue_id).await
    }

    pub async fn get(&self, id: Uuid) -> Result<CommentWithAuthor, ServiceError> {
        self.repo.find(id).await?.ok_or(ServiceError::CommentNotFound(id))
    }

    /// Post a comment on `issue_id`. A reply must point at a comment of the same issue.
    #[instrument(skip(self, input), fields(issue_id = %issue_id, author = %author_id))]
    pub async fn add(&self, issue_id: Uuid, author_id: Uuid, input: NewComment) -> Result<CommentWithAuthor, ServiceError> {
        if input.text.trim().is_empty() {
            return Err(ServiceError::Validation("comment text must not be empty".into()));
        }
        if !self.repo.issue_exists(issue_id).await? {
            return Err(ServiceError::IssueNotFound(issue_id));
        }
        if let Some(parent_id) = input.parent_id {
            let parent = self.repo.find(parent_id).await?.ok_or(ServiceError::CommentNotFound(parent_id))?;
            if parent.issue_id != issue_id {
                return Err(ServiceError::Validation(format!("parent comment {parent_id} belongs to another issue")));
            }
        }

        let created = self
            .repo
            .insert(comment::Model {
                id: Uuid::new_v4(),
                text: input.text,
                time: Utc::now().into(),
                likes: 0,
                parent_id: input.parent_id,
                issue_id,
                employee_id: author_id,
            })
            .await?;
        info!(comment_id = %created.id, "comment_added");
        self.get(created.id).await
    }

    /// Like a comment once per employee.
    #[instrument(skip(self), fields(comment_id = %comment_id, employee_id = %employee_id))]
    pub async fn upvote(&self, comment_id: Uuid, employee_id: Uuid) -> Result<CommentWithAuthor, ServiceError> {
        let mut target = self.get(comment_id).await?;
        if self.repo.find_upvote(comment_id, employee_id).await?.is_some() {
            return Err(ServiceError::AlreadyVoted { comment_id, employee_id });
        }
        self.repo.insert_upvote(comment_id, employee_id).await?;
        target.likes = self.repo.increment_likes(comment_id).await?;
        info!(likes = target.likes, "comment_upvoted");
        Ok(target)
    }
}
