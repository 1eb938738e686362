use thiserror::Error;
use uuid::Uuid;

/// Business errors surfaced by the service layer.
///
/// Every missing record has its own variant so callers can tell which lookup failed.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Issue with {0} id not found")]
    IssueNotFound(Uuid),
    #[error("issue name already in use: {0}")]
    NameConflict(String),
    #[error("User {0} not found")]
    UserNotFound(String),
    #[error("address of employee {0} not found")]
    AddressNotFound(Uuid),
    #[error("country {0} not found")]
    CountryNotFound(Uuid),
    /// Carries the employee id when no office resolves, the office id when the record is gone.
    #[error("office not found: {0}")]
    OfficeNotFound(Uuid),
    #[error("comment {0} not found")]
    CommentNotFound(Uuid),
    #[error("employee {employee_id} already voted for comment {comment_id}")]
    AlreadyVoted { comment_id: Uuid, employee_id: Uuid },
    #[error("validation error: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn db(e: sea_orm::DbErr) -> Self { Self::Db(e.to_string()) }

    /// Like [`ServiceError::db`], except a write naming a missing row (`refs`) is a `Validation` error.
    pub fn db_write(e: sea_orm::DbErr, refs: &str) -> Self {
        if is_foreign_key_violation(&e) {
            return Self::Validation(format!("unknown {refs}"));
        }
        Self::db(e)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::IssueNotFound(_)
                | Self::UserNotFound(_)
                | Self::AddressNotFound(_)
                | Self::CountryNotFound(_)
                | Self::OfficeNotFound(_)
                | Self::CommentNotFound(_)
        )
    }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            Self::IssueNotFound(_) => 2001,
            Self::NameConflict(_) => 2002,
            Self::UserNotFound(_) => 2101,
            Self::AddressNotFound(_) => 2102,
            Self::CountryNotFound(_) => 2103,
            Self::OfficeNotFound(_) => 2104,
            Self::CommentNotFound(_) => 2201,
            Self::AlreadyVoted { .. } => 2202,
            Self::Validation(_) => 1001,
            Self::Db(_) => 1200,
            Self::Model(_) => 1201,
        }
    }
}

/// True when the database rejected a write because of a unique/primary key.
pub(crate) fn is_unique_violation(e: &sea_orm::DbErr) -> bool {
    matches!(e.sql_err(), Some(sea_orm::SqlErr::UniqueConstraintViolation(_)))
}

/// True when a write referenced a row that does not exist.
pub(crate) fn is_foreign_key_violation(e: &sea_orm::DbErr) -> bool {
    matches!(e.sql_err(), Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(_)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_kinds_are_distinct() {
        let id = Uuid::new_v4();
        let kinds = [
            ServiceError::IssueNotFound(id),
            ServiceError::UserNotFound(id.to_string()),
            ServiceError::AddressNotFound(id),
            ServiceError::CountryNotFound(id),
            ServiceError::OfficeNotFound(id),
            ServiceError::CommentNotFound(id),
        ];
        let mut codes: Vec<u16> = kinds.iter().map(|k| k.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
        assert!(kinds.iter().all(|k| k.is_not_found()));
        assert!(!ServiceError::NameConflict("x".into()).is_not_found());
    }

    #[test]
    fn issue_not_found_message_names_the_id() {
        let id = Uuid::nil();
        assert_eq!(ServiceError::IssueNotFound(id).to_string(), format!("Issue with {} id not found", id));
    }

    #[test]
    fn plain_db_failures_stay_db_errors() {
        let err = ServiceError::db_write(sea_orm::DbErr::Custom("connection reset".into()), "office or reporter");
        assert!(matches!(err, ServiceError::Db(ref m) if m.contains("connection reset")));
        assert_eq!(err.code(), 1200);
    }
}
