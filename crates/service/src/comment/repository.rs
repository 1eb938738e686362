use async_trait::async_trait;
use models::comment::{self, CommentWithAuthor};
use uuid::Uuid;

use crate::errors::ServiceError;

/// Comment persistence. Reads always carry the author projection.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Comments of one issue, oldest first.
    async fn find_by_issue(&self, issue_id: Uuid) -> Result<Vec<CommentWithAuthor>, ServiceError>;
    async fn find(&self, id: Uuid) -> Result<Option<CommentWithAuthor>, ServiceError>;
    async fn issue_exists(&self, issue_id: Uuid) -> Result<bool, ServiceError>;
    /// Insert with caller supplied id and timestamp.
    async fn insert(&self, comment: comment::Model) -> Result<comment::Model, ServiceError>;
    /// Add one like in storage and return the new count.
    async fn increment_likes(&self, id: Uuid) -> Result<i32, ServiceError>;
    /// Record a vote. A second vote by the same employee yields `AlreadyVoted`.
    async fn insert_upvote(&self, comment_id: Uuid, employee_id: Uuid) -> Result<(), ServiceError>;
    /// Comment id when `employee_id` already voted for it.
    async fn find_upvote(&self, comment_id: Uuid, employee_id: Uuid) -> Result<Option<Uuid>, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use models::employee;
    use std::collections::{HashMap, HashSet};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockCommentRepository {
        comments: Mutex<Vec<comment::Model>>,
        authors: Mutex<HashMap<Uuid, employee::Model>>,
        issues: Mutex<HashSet<Uuid>>,
        votes: Mutex<HashSet<(Uuid, Uuid)>>,
    }

    impl MockCommentRepository {
        pub fn add_issue(&self, issue_id: Uuid) {
            self.issues.lock().unwrap().insert(issue_id);
        }

        pub fn add_author(&self, author: employee::Model) {
            self.authors.lock().unwrap().insert(author.id, author);
        }

        pub fn vote_count(&self) -> usize {
            self.votes.lock().unwrap().len()
        }

        fn project(&self, c: comment::Model) -> CommentWithAuthor {
            let authors = self.authors.lock().unwrap();
            let author = authors.get(&c.employee_id);
            CommentWithAuthor::compose(c, author)
        }
    }

    #[async_trait]
    impl CommentRepository for MockCommentRepository {
        async fn find_by_issue(&self, issue_id: Uuid) -> Result<Vec<CommentWithAuthor>, ServiceError> {
            let mut rows: Vec<_> = self.comments.lock().unwrap().iter().filter(|c| c.issue_id == issue_id).cloned().collect();
            rows.sort_by(|a, b| a.time.cmp(&b.time));
            Ok(rows.into_iter().map(|c| self.project(c)).collect())
        }

        async fn find(&self, id: Uuid) -> Result<Option<CommentWithAuthor>, ServiceError> {
            let found = self.comments.lock().unwrap().iter().find(|c| c.id == id).cloned();
            Ok(found.map(|c| self.project(c)))
        }

        async fn issue_exists(&self, issue_id: Uuid) -> Result<bool, ServiceError> {
            Ok(self.issues.lock().unwrap().contains(&issue_id))
        }

        async fn insert(&self, comment: comment::Model) -> Result<comment::Model, ServiceError> {
            self.comments.lock().unwrap().push(comment.clone());
            Ok(comment)
        }

        async fn increment_likes(&self, id: Uuid) -> Result<i32, ServiceError> {
            let mut comments = self.comments.lock().unwrap();
            let slot = comments.iter_mut().find(|c| c.id == id).ok_or(ServiceError::CommentNotFound(id))?;
            slot.likes += 1;
            Ok(slot.likes)
        }

        async fn insert_upvote(&self, comment_id: Uuid, employee_id: Uuid) -> Result<(), ServiceError> {
            if !self.votes.lock().unwrap().insert((comment_id, employee_id)) {
                return Err(ServiceError::AlreadyVoted { comment_id, employee_id });
            }
            Ok(())
        }

        async fn find_upvote(&self, comment_id: Uuid, employee_id: Uuid) -> Result<Option<Uuid>, ServiceError> {
            Ok(self.votes.lock().unwrap().contains(&(comment_id, employee_id)).then_some(comment_id))
        }
    }
}
