use async_trait::async_trait;
use models::{issue, office};
use uuid::Uuid;

use super::domain::StatusFilter;
use crate::errors::ServiceError;

/// Persistence operations behind the issue workflows.
///
/// Listing methods take a database row offset and a row limit; results are
/// newest first.
#[async_trait]
pub trait IssueRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<issue::Model>, ServiceError>;
    async fn count_all(&self) -> Result<u64, ServiceError>;
    async fn find_page(&self, offset: u64, limit: u64) -> Result<Vec<issue::Model>, ServiceError>;

    async fn find(&self, id: Uuid) -> Result<Option<issue::Model>, ServiceError>;
    async fn find_details(&self, id: Uuid) -> Result<Option<issue::IssueDetails>, ServiceError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<issue::Model>, ServiceError>;

    async fn find_by_status_page(&self, filter: &StatusFilter, offset: u64, limit: u64) -> Result<Vec<issue::Model>, ServiceError>;
    async fn count_by_status(&self, status: &str) -> Result<u64, ServiceError>;
    async fn find_reported_by_page(&self, employee_id: Uuid, offset: u64, limit: u64) -> Result<Vec<issue::Model>, ServiceError>;
    async fn count_reported_by(&self, employee_id: Uuid) -> Result<u64, ServiceError>;

    /// Insert a fully populated row. A duplicate name yields `NameConflict`.
    async fn insert(&self, issue: issue::Model) -> Result<issue::Model, ServiceError>;
    async fn update(&self, issue: issue::Model) -> Result<issue::Model, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<(), ServiceError>;

    async fn find_offices(&self) -> Result<Vec<office::Model>, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockIssueRepository {
        issues: Mutex<Vec<issue::Model>>,
        offices: Mutex<Vec<office::Model>>,
        page_requests: Mutex<Vec<(u64, u64)>>, // (offset, limit) as requested
    }

    impl MockIssueRepository {
        pub fn with_issues(issues: Vec<issue::Model>) -> Self {
            Self { issues: Mutex::new(issues), ..Default::default() }
        }

        pub fn add_office(&self, office: office::Model) {
            self.offices.lock().unwrap().push(office);
        }

        pub fn snapshot(&self) -> Vec<issue::Model> {
            self.issues.lock().unwrap().clone()
        }

        /// Every (offset, limit) pair passed to a paged query so far.
        pub fn page_requests(&self) -> Vec<(u64, u64)> {
            self.page_requests.lock().unwrap().clone()
        }

        fn page(&self, mut rows: Vec<issue::Model>, offset: u64, limit: u64) -> Vec<issue::Model> {
            self.page_requests.lock().unwrap().push((offset, limit));
            rows.sort_by(|a, b| b.start_time.cmp(&a.start_time).then(a.id.cmp(&b.id)));
            rows.into_iter().skip(offset as usize).take(limit as usize).collect()
        }
    }

    #[async_trait]
    impl IssueRepository for MockIssueRepository {
        async fn find_all(&self) -> Result<Vec<issue::Model>, ServiceError> {
            Ok(self.snapshot())
        }

        async fn count_all(&self) -> Result<u64, ServiceError> {
            Ok(self.issues.lock().unwrap().len() as u64)
        }

        async fn find_page(&self, offset: u64, limit: u64) -> Result<Vec<issue::Model>, ServiceError> {
            Ok(self.page(self.snapshot(), offset, limit))
        }

        async fn find(&self, id: Uuid) -> Result<Option<issue::Model>, ServiceError> {
            Ok(self.issues.lock().unwrap().iter().find(|i| i.id == id).cloned())
        }

        async fn find_details(&self, id: Uuid) -> Result<Option<issue::IssueDetails>, ServiceError> {
            let found = self.find(id).await?;
            let offices = self.offices.lock().unwrap();
            Ok(found.map(|m| {
                let office_name = offices.iter().find(|o| o.id == m.office_id).map(|o| o.name.clone());
                issue::IssueDetails { office_name, ..issue::IssueDetails::from(m) }
            }))
        }

        async fn find_by_name(&self, name: &str) -> Result<Option<issue::Model>, ServiceError> {
            Ok(self.issues.lock().unwrap().iter().find(|i| i.name == name).cloned())
        }

        async fn find_by_status_page(&self, filter: &StatusFilter, offset: u64, limit: u64) -> Result<Vec<issue::Model>, ServiceError> {
            let rows = self.snapshot().into_iter().filter(|i| filter.matches(i)).collect();
            Ok(self.page(rows, offset, limit))
        }

        async fn count_by_status(&self, status: &str) -> Result<u64, ServiceError> {
            Ok(self.issues.lock().unwrap().iter().filter(|i| i.status == status).count() as u64)
        }

        async fn find_reported_by_page(&self, employee_id: Uuid, offset: u64, limit: u64) -> Result<Vec<issue::Model>, ServiceError> {
            let rows = self.snapshot().into_iter().filter(|i| i.employee_id == employee_id).collect();
            Ok(self.page(rows, offset, limit))
        }

        async fn count_reported_by(&self, employee_id: Uuid) -> Result<u64, ServiceError> {
            Ok(self.issues.lock().unwrap().iter().filter(|i| i.employee_id == employee_id).count() as u64)
        }

        async fn insert(&self, issue: issue::Model) -> Result<issue::Model, ServiceError> {
            let mut issues = self.issues.lock().unwrap();
            if issues.iter().any(|i| i.name == issue.name) {
                return Err(ServiceError::NameConflict(issue.name));
            }
            issues.push(issue.clone());
            Ok(issue)
        }

        async fn update(&self, issue: issue::Model) -> Result<issue::Model, ServiceError> {
            let mut issues = self.issues.lock().unwrap();
            let slot = issues
                .iter_mut()
                .find(|i| i.id == issue.id)
                .ok_or(ServiceError::IssueNotFound(issue.id))?;
            *slot = issue.clone();
            Ok(issue)
        }

        async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
            self.issues.lock().unwrap().retain(|i| i.id != id);
            Ok(())
        }

        async fn find_offices(&self) -> Result<Vec<office::Model>, ServiceError> {
            Ok(self.offices.lock().unwrap().clone())
        }
    }
}
