use std::sync::Arc;

use models::employee;
use tracing::{debug, instrument};
use uuid::Uuid;

use super::domain::{EmployeeWithRoles, UserProfile};
use super::repository::UserRepository;
use crate::errors::ServiceError;

pub struct UserService<R: UserRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: UserRepository + ?Sized> UserService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Build the composite profile of one employee.
    ///
    /// Lookups run address, country, employee, office in that order and the
    /// first missing record decides the error.
    #[instrument(skip(self), fields(user_id = %id))]
    pub async fn get_by_id(&self, id: Uuid) -> Result<UserProfile, ServiceError> {
        let address = self.repo.find_address_by_employee(id).await?.ok_or(ServiceError::AddressNotFound(id))?;
        let country = self
            .repo
            .find_country(address.country_id)
            .await?
            .ok_or(ServiceError::CountryNotFound(address.country_id))?;
        let user = self
            .repo
            .find_employee(id)
            .await?
            .ok_or_else(|| ServiceError::UserNotFound(id.to_string()))?;
        let office_id = self.repo.find_office_id_for_employee(id).await?.ok_or(ServiceError::OfficeNotFound(id))?;
        let office = self.repo.find_office(office_id).await?.ok_or(ServiceError::OfficeNotFound(office_id))?;
        debug!(office_id = %office.id, roles = user.roles.len(), "user profile resolved");
        Ok(UserProfile::assemble(user, address, country, office))
    }

    pub async fn get_by_email(&self, email: &str) -> Result<EmployeeWithRoles, ServiceError> {
        employee::validate_email(email)?;
        self.repo
            .find_employee_by_email(email)
            .await?
            .ok_or_else(|| ServiceError::UserNotFound(email.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::repository::mock::MockUserRepository;
    use models::role::RoleType;
    use models::{address, country, office};

    struct Fixture {
        repo: Arc<MockUserRepository>,
        employee: employee::Model,
        country: country::Model,
        office: office::Model,
    }

    fn employee(email: &str) -> employee::Model {
        employee::Model {
            id: Uuid::new_v4(),
            full_name: "Ona Petraitė".into(),
            email: email.into(),
            password: "{noop}secret".into(),
            phone_number: Some("+37060000000".into()),
            position: Some("Engineer".into()),
            avatar: None,
        }
    }

    fn address_for(employee_id: Uuid, country_id: Uuid) -> address::Model {
        address::Model {
            id: Uuid::new_v4(),
            employee_id,
            street: "Gedimino pr. 1".into(),
            city: "Vilnius".into(),
            post_code: Some("01103".into()),
            country_id,
        }
    }

    /// Everything present except what each test removes.
    fn fixture(with_address: bool, with_country: bool, with_employee: bool, with_office: bool) -> Fixture {
        let repo = Arc::new(MockUserRepository::default());
        let employee = employee("ona@office.test");
        let country = country::Model { id: Uuid::new_v4(), name: "Lithuania".into() };
        let office = office::Model { id: Uuid::new_v4(), name: "Vilnius HQ".into(), country_id: country.id };
        if with_address { repo.add_address(address_for(employee.id, country.id)); }
        if with_country { repo.add_country(country.clone()); }
        if with_employee { repo.add_employee(employee.clone(), vec![RoleType::User]); }
        if with_office { repo.add_office(office.clone()); }
        Fixture { repo, employee, country, office }
    }

    #[tokio::test]
    async fn get_by_id_assembles_profile() {
        let f = fixture(true, true, true, true);
        let svc = UserService::new(f.repo.clone());
        let profile = svc.get_by_id(f.employee.id).await.unwrap();
        assert_eq!(profile.email, "ona@office.test");
        assert_eq!(profile.roles, vec![RoleType::User]);
        assert_eq!(profile.country, f.country);
        assert_eq!(profile.office, f.office);
        assert_eq!(profile.address.employee_id, f.employee.id);
    }

    #[tokio::test]
    async fn employee_without_address_is_address_not_found() {
        let f = fixture(false, true, true, true);
        let err = UserService::new(f.repo).get_by_id(f.employee.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::AddressNotFound(id) if id == f.employee.id));
    }

    #[tokio::test]
    async fn missing_country_is_country_not_found() {
        let f = fixture(true, false, true, true);
        let err = UserService::new(f.repo).get_by_id(f.employee.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::CountryNotFound(id) if id == f.country.id));
    }

    #[tokio::test]
    async fn missing_employee_is_user_not_found() {
        let f = fixture(true, true, false, true);
        let err = UserService::new(f.repo).get_by_id(f.employee.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::UserNotFound(_)));
        assert_eq!(err.to_string(), format!("User {} not found", f.employee.id));
    }

    #[tokio::test]
    async fn missing_office_is_office_not_found() {
        let f = fixture(true, true, true, false);
        let err = UserService::new(f.repo).get_by_id(f.employee.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::OfficeNotFound(id) if id == f.employee.id));
    }

    #[tokio::test]
    async fn resolved_office_id_without_record_is_office_not_found() {
        let f = fixture(true, true, true, true);
        let dangling = Uuid::new_v4();
        f.repo.resolve_office_to(f.employee.id, dangling);

        let err = UserService::new(f.repo).get_by_id(f.employee.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::OfficeNotFound(id) if id == dangling));
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn get_by_email_returns_roles() {
        let f = fixture(true, true, true, true);
        let admin = employee("admin@office.test");
        f.repo.add_employee(admin.clone(), vec![RoleType::Admin, RoleType::User]);
        let svc = UserService::new(f.repo.clone());

        let found = svc.get_by_email("admin@office.test").await.unwrap();
        assert_eq!(found.employee.id, admin.id);
        assert_eq!(found.roles, vec![RoleType::Admin, RoleType::User]);
        assert!(matches!(svc.get_by_email("nobody@office.test").await, Err(ServiceError::UserNotFound(_))));
        assert!(matches!(svc.get_by_email("not-an-email").await, Err(ServiceError::Model(_))));
    }

    #[tokio::test]
    async fn profile_never_serializes_password() {
        let f = fixture(true, true, true, true);
        let profile = UserService::new(f.repo).get_by_id(f.employee.id).await.unwrap();
        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["roles"], serde_json::json!(["USER"]));
    }
}
