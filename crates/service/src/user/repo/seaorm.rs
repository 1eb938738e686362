use async_trait::async_trait;
use models::{address, country, employee, office, role};
use sea_orm::{
    ColumnTrait, DatabaseBackend, DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter, QueryOrder,
    Statement,
};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::user::domain::EmployeeWithRoles;
use crate::user::repository::UserRepository;

pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

#[derive(Debug, FromQueryResult)]
struct OfficeIdRow {
    id: Uuid,
}

const OFFICE_FOR_EMPLOYEE_SQL: &str = "SELECT o.id FROM address a \
     JOIN office o ON o.country_id = a.country_id \
     WHERE a.employee_id = $1 \
     ORDER BY o.id LIMIT 1";

// Same office rule as OFFICE_FOR_EMPLOYEE_SQL: only the first office of the admin's country.
const ADMINS_BY_OFFICE_SQL: &str = "SELECT e.* FROM employee e \
     JOIN roles r ON r.employee_id = e.id \
     JOIN address a ON a.employee_id = e.id \
     WHERE r.role_type = 'ADMIN' \
     AND $1 = (SELECT o.id FROM office o WHERE o.country_id = a.country_id ORDER BY o.id LIMIT 1) \
     ORDER BY e.email";

impl SeaOrmUserRepository {
    async fn with_roles(&self, found: Option<employee::Model>) -> Result<Option<EmployeeWithRoles>, ServiceError> {
        let Some(employee) = found else { return Ok(None) };
        let roles = role::Entity::find()
            .filter(role::Column::EmployeeId.eq(employee.id))
            .order_by_asc(role::Column::RoleType)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)?
            .into_iter()
            .map(|r| r.role_type)
            .collect();
        Ok(Some(EmployeeWithRoles { employee, roles }))
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_address_by_employee(&self, employee_id: Uuid) -> Result<Option<address::Model>, ServiceError> {
        address::Entity::find()
            .filter(address::Column::EmployeeId.eq(employee_id))
            .one(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    async fn find_country(&self, id: Uuid) -> Result<Option<country::Model>, ServiceError> {
        country::Entity::find_by_id(id).one(&self.db).await.map_err(ServiceError::db)
    }

    async fn find_employee(&self, id: Uuid) -> Result<Option<EmployeeWithRoles>, ServiceError> {
        let found = employee::Entity::find_by_id(id).one(&self.db).await.map_err(ServiceError::db)?;
        self.with_roles(found).await
    }

    async fn find_employee_by_email(&self, email: &str) -> Result<Option<EmployeeWithRoles>, ServiceError> {
        let found = employee::Entity::find()
            .filter(employee::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(ServiceError::db)?;
        self.with_roles(found).await
    }

    async fn find_office_id_for_employee(&self, employee_id: Uuid) -> Result<Option<Uuid>, ServiceError> {
        let row = OfficeIdRow::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            OFFICE_FOR_EMPLOYEE_SQL,
            [employee_id.into()],
        ))
        .one(&self.db)
        .await
        .map_err(ServiceError::db)?;
        Ok(row.map(|r| r.id))
    }

    async fn find_office(&self, id: Uuid) -> Result<Option<office::Model>, ServiceError> {
        office::Entity::find_by_id(id).one(&self.db).await.map_err(ServiceError::db)
    }

    async fn find_admins_by_office(&self, office_id: Uuid) -> Result<Vec<employee::Model>, ServiceError> {
        employee::Entity::find()
            .from_raw_sql(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                ADMINS_BY_OFFICE_SQL,
                [office_id.into()],
            ))
            .all(&self.db)
            .await
            .map_err(ServiceError::db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, seed_employee, seed_person};
    use crate::user::UserService;
    use models::role::RoleType;
    use sea_orm::{ActiveModelTrait, IntoActiveModel};
    use std::sync::Arc;

    #[tokio::test]
    async fn seaorm_user_profile_and_admins() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let seeded = seed_employee(&db, &[RoleType::User]).await?;
        let admin = seed_person(&db, seeded.country.id, &[RoleType::Admin, RoleType::User], "admin").await?;
        let repo = Arc::new(SeaOrmUserRepository { db });

        let profile = UserService::new(repo.clone()).get_by_id(seeded.employee.id).await?;
        assert_eq!(profile.office.id, seeded.office.id);
        assert_eq!(profile.country.id, seeded.country.id);
        assert_eq!(profile.roles, vec![RoleType::User]);

        let by_email = repo.find_employee_by_email(&admin.email).await?.expect("admin by email");
        assert_eq!(by_email.roles.len(), 2);

        let admins = repo.find_admins_by_office(seeded.office.id).await?;
        assert_eq!(admins.iter().map(|a| a.id).collect::<Vec<_>>(), vec![admin.id]);

        // Ordered right after the seeded office, so it is never the country's first.
        let annex = office::Model {
            id: Uuid::from_u128(seeded.office.id.as_u128().wrapping_add(1)),
            name: format!("annex_{}", Uuid::new_v4().simple()),
            country_id: seeded.country.id,
        }
        .into_active_model()
        .reset_all()
        .insert(&repo.db)
        .await?;
        assert!(repo.find_admins_by_office(annex.id).await?.is_empty());
        assert_eq!(repo.find_office_id_for_employee(admin.id).await?, Some(seeded.office.id));
        Ok(())
    }
}
