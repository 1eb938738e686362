//! Out-of-band notifications triggered by issue workflows.

pub mod admin;
pub mod mailer;

use async_trait::async_trait;
use models::issue;
use thiserror::Error;

use crate::errors::ServiceError;

pub use admin::{compose_issue_message, AdminMailNotifier};
pub use mailer::{Mailer, SmtpMailer};

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("invalid mail address: {0}")]
    Address(String),
    #[error("failed to build message: {0}")]
    Message(String),
    #[error("smtp transport error: {0}")]
    Transport(String),
    #[error("recipient lookup failed: {0}")]
    Lookup(#[from] ServiceError),
}

/// Side effect run after an issue has been stored.
///
/// Implementations swallow their own failures; the reporting caller never sees them.
#[async_trait]
pub trait ReportNotifier: Send + Sync {
    async fn issue_reported(&self, issue: &issue::Model);
}
