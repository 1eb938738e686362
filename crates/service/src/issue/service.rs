use std::sync::Arc;

use chrono::Utc;
use models::{issue, office};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::domain::{IssueUpdate, ReportIssue, StatusFilter};
use super::repository::IssueRepository;
use crate::errors::ServiceError;
use crate::notify::ReportNotifier;
use crate::pagination::{page_count, PageRequest};

/// Issue lifecycle and listing rules, independent of web framework
pub struct IssueService<R: IssueRepository + ?Sized> {
    repo: Arc<R>,
    notifier: Option<Arc<dyn ReportNotifier>>,
}

impl<R: IssueRepository + ?Sized> IssueService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo, notifier: None } }

    /// Dispatch `notifier` after every successful report.
    pub fn with_notifier(mut self, notifier: Arc<dyn ReportNotifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn notifications_enabled(&self) -> bool { self.notifier.is_some() }

    pub async fn list_all(&self) -> Result<Vec<issue::Model>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn list_page(&self, page: PageRequest) -> Result<Vec<issue::Model>, ServiceError> {
        self.repo.find_page(page.db_offset(), page.limit).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<issue::IssueDetails, ServiceError> {
        self.repo.find_details(id).await?.ok_or(ServiceError::IssueNotFound(id))
    }

    #[instrument(skip(self), fields(issue_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        self.repo.find(id).await?.ok_or(ServiceError::IssueNotFound(id))?;
        self.repo.delete(id).await?;
        info!(issue_id = %id, "issue_deleted");
        Ok(())
    }

    pub async fn list_by_status(&self, filter: &StatusFilter, page: PageRequest) -> Result<Vec<issue::Model>, ServiceError> {
        self.repo.find_by_status_page(filter, page.db_offset(), page.limit).await
    }

    pub async fn list_by_reporter(&self, employee_id: Uuid, page: PageRequest) -> Result<Vec<issue::Model>, ServiceError> {
        self.repo.find_reported_by_page(employee_id, page.db_offset(), page.limit).await
    }

    /// Overwrite description, office and status. Everything else is kept.
    #[instrument(skip(self, input), fields(issue_id = %id, status = %input.status))]
    pub async fn update(&self, input: IssueUpdate, id: Uuid) -> Result<issue::Model, ServiceError> {
        let mut existing = self.repo.find(id).await?.ok_or(ServiceError::IssueNotFound(id))?;
        existing.description = input.description;
        existing.office_id = input.office_id;
        existing.status = input.status;
        let updated = self.repo.update(existing).await?;
        info!(issue_id = %id, "issue_updated");
        Ok(updated)
    }

    /// Report a new issue on behalf of `reporter_id`.
    ///
    /// # Examples
    /// ```
    /// use service::issue::{IssueService, domain::ReportIssue, repository::mock::MockIssueRepository};
    /// use std::sync::Arc;
    /// let svc = IssueService::new(Arc::new(MockIssueRepository::default()));
    /// let input = ReportIssue { name: "Broken lamp".into(), description: "Desk 14".into(), office_id: uuid::Uuid::new_v4(), rating: 0 };
    /// let created = tokio_test::block_on(svc.report(input, uuid::Uuid::new_v4())).unwrap();
    /// assert_eq!(created.status, "open");
    /// ```
    #[instrument(skip(self, input), fields(name = %input.name, reporter = %reporter_id))]
    pub async fn report(&self, input: ReportIssue, reporter_id: Uuid) -> Result<issue::Model, ServiceError> {
        if let Some(existing) = self.repo.find_by_name(&input.name).await? {
            debug!(existing_id = %existing.id, "issue name taken");
            return Err(ServiceError::NameConflict(input.name));
        }
        let created = self
            .repo
            .insert(issue::Model {
                id: Uuid::new_v4(),
                name: input.name,
                description: input.description,
                status: issue::STATUS_OPEN.to_string(),
                start_time: Utc::now().into(),
                finish_time: None,
                employee_id: reporter_id,
                office_id: input.office_id,
                rating: input.rating,
                comment_count: 0,
            })
            .await?;
        info!(issue_id = %created.id, office_id = %created.office_id, "issue_reported");

        if let Some(notifier) = &self.notifier {
            let notifier = Arc::clone(notifier);
            let issue = created.clone();
            tokio::spawn(async move { notifier.issue_reported(&issue).await });
        }
        Ok(created)
    }

    pub async fn all_page_count(&self) -> Result<u64, ServiceError> {
        Ok(page_count(self.repo.count_all().await?))
    }

    pub async fn status_page_count(&self, status: &str) -> Result<u64, ServiceError> {
        Ok(page_count(self.repo.count_by_status(status).await?))
    }

    pub async fn reporter_page_count(&self, employee_id: Uuid) -> Result<u64, ServiceError> {
        Ok(page_count(self.repo.count_reported_by(employee_id).await?))
    }

    pub async fn list_offices(&self) -> Result<Vec<office::Model>, ServiceError> {
        self.repo.find_offices().await
    }
}
