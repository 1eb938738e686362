use async_trait::async_trait;
use models::{issue, office};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select,
};
use uuid::Uuid;

use crate::errors::{is_unique_violation, ServiceError};
use crate::issue::domain::StatusFilter;
use crate::issue::repository::IssueRepository;

pub struct SeaOrmIssueRepository {
    pub db: DatabaseConnection,
}

fn newest_first(select: Select<issue::Entity>) -> Select<issue::Entity> {
    select.order_by_desc(issue::Column::StartTime).order_by_asc(issue::Column::Id)
}

#[async_trait]
impl IssueRepository for SeaOrmIssueRepository {
    async fn find_all(&self) -> Result<Vec<issue::Model>, ServiceError> {
        newest_first(issue::Entity::find()).all(&self.db).await.map_err(ServiceError::db)
    }

    async fn count_all(&self) -> Result<u64, ServiceError> {
        issue::Entity::find().count(&self.db).await.map_err(ServiceError::db)
    }

    async fn find_page(&self, offset: u64, limit: u64) -> Result<Vec<issue::Model>, ServiceError> {
        newest_first(issue::Entity::find())
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    async fn find(&self, id: Uuid) -> Result<Option<issue::Model>, ServiceError> {
        issue::Entity::find_by_id(id).one(&self.db).await.map_err(ServiceError::db)
    }

    async fn find_details(&self, id: Uuid) -> Result<Option<issue::IssueDetails>, ServiceError> {
        issue::find_details(&self.db, id).await.map_err(ServiceError::db)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<issue::Model>, ServiceError> {
        issue::Entity::find()
            .filter(issue::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    async fn find_by_status_page(&self, filter: &StatusFilter, offset: u64, limit: u64) -> Result<Vec<issue::Model>, ServiceError> {
        let mut finder = issue::Entity::find().filter(issue::Column::Status.eq(filter.status.as_str()));
        if let Some(oid) = filter.office_id { finder = finder.filter(issue::Column::OfficeId.eq(oid)); }
        if let Some(eid) = filter.employee_id { finder = finder.filter(issue::Column::EmployeeId.eq(eid)); }
        newest_first(finder)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    async fn count_by_status(&self, status: &str) -> Result<u64, ServiceError> {
        issue::Entity::find()
            .filter(issue::Column::Status.eq(status))
            .count(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    async fn find_reported_by_page(&self, employee_id: Uuid, offset: u64, limit: u64) -> Result<Vec<issue::Model>, ServiceError> {
        newest_first(issue::Entity::find().filter(issue::Column::EmployeeId.eq(employee_id)))
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    async fn count_reported_by(&self, employee_id: Uuid) -> Result<u64, ServiceError> {
        issue::Entity::find()
            .filter(issue::Column::EmployeeId.eq(employee_id))
            .count(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    async fn insert(&self, issue: issue::Model) -> Result<issue::Model, ServiceError> {
        let name = issue.name.clone();
        issue
            .into_active_model()
            .reset_all()
            .insert(&self.db)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    ServiceError::NameConflict(name)
                } else {
                    ServiceError::db_write(e, "office or reporter")
                }
            })
    }

    async fn update(&self, issue: issue::Model) -> Result<issue::Model, ServiceError> {
        // full-row write; the service decides which fields changed
        issue
            .into_active_model()
            .reset_all()
            .update(&self.db)
            .await
            .map_err(|e| ServiceError::db_write(e, "office or reporter"))
    }

    async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        issue::Entity::delete_by_id(id).exec(&self.db).await.map_err(ServiceError::db)?;
        Ok(())
    }

    async fn find_offices(&self) -> Result<Vec<office::Model>, ServiceError> {
        office::Entity::find()
            .order_by_asc(office::Column::Name)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)
    }
}
