//! Pagination utilities for service layer
//!
//! Listing endpoints take a 1-based page number (`offset`) and a page size
//! (`limit`). Page counts use a fixed page size of 10 regardless of `limit`.

use crate::errors::ServiceError;

/// Page size assumed by the page-count helpers.
pub const PAGE_COUNT_SIZE: u64 = 10;

/// Largest OFFSET/LIMIT PostgreSQL takes (`bigint`).
const MAX_SQL_ROWS: u64 = i64::MAX as u64;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page index
    pub page: u64,
    /// items per page
    pub limit: u64,
}

impl PageRequest {
    /// Page numbers start at 1 and the page size must be positive.
    ///
    /// The only upper bound is what PostgreSQL accepts: both the row offset
    /// and the limit must fit in a signed 64-bit integer.
    pub fn new(page: u64, limit: u64) -> Result<Self, ServiceError> {
        if page == 0 {
            return Err(ServiceError::Validation("offset must be >= 1".into()));
        }
        if limit == 0 {
            return Err(ServiceError::Validation("limit must be >= 1".into()));
        }
        let in_range = limit <= MAX_SQL_ROWS
            && (page - 1).checked_mul(limit).is_some_and(|o| o <= MAX_SQL_ROWS);
        if !in_range {
            return Err(ServiceError::Validation(format!(
                "offset {page} with limit {limit} is out of range"
            )));
        }
        Ok(Self { page, limit })
    }

    /// Row offset handed to the database: `(page - 1) * limit`.
    pub fn db_offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit).min(MAX_SQL_ROWS)
    }
}

impl Default for PageRequest {
    fn default() -> Self { Self { page: 1, limit: PAGE_COUNT_SIZE } }
}

/// `total / 10 + 1`: an exact multiple of ten reports one trailing empty page.
pub fn page_count(total: u64) -> u64 {
    total / PAGE_COUNT_SIZE + 1
}
