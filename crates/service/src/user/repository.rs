use async_trait::async_trait;
use models::{address, country, employee, office};
use uuid::Uuid;

use super::domain::EmployeeWithRoles;
use crate::errors::ServiceError;

/// Read access to employees and the reference data around them
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_address_by_employee(&self, employee_id: Uuid) -> Result<Option<address::Model>, ServiceError>;
    async fn find_country(&self, id: Uuid) -> Result<Option<country::Model>, ServiceError>;
    async fn find_employee(&self, id: Uuid) -> Result<Option<EmployeeWithRoles>, ServiceError>;
    async fn find_employee_by_email(&self, email: &str) -> Result<Option<EmployeeWithRoles>, ServiceError>;
    /// Office reached through employee → address → country.
    async fn find_office_id_for_employee(&self, employee_id: Uuid) -> Result<Option<Uuid>, ServiceError>;
    async fn find_office(&self, id: Uuid) -> Result<Option<office::Model>, ServiceError>;
    /// Employees holding the ADMIN role whose office resolves to `office_id`.
    async fn find_admins_by_office(&self, office_id: Uuid) -> Result<Vec<employee::Model>, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use models::role::RoleType;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockUserRepository {
        employees: Mutex<HashMap<Uuid, EmployeeWithRoles>>,
        addresses: Mutex<Vec<address::Model>>,
        countries: Mutex<HashMap<Uuid, country::Model>>,
        offices: Mutex<HashMap<Uuid, office::Model>>,
        resolved_offices: Mutex<HashMap<Uuid, Uuid>>,
    }

    impl MockUserRepository {
        pub fn add_employee(&self, employee: employee::Model, roles: Vec<RoleType>) {
            self.employees.lock().unwrap().insert(employee.id, EmployeeWithRoles { employee, roles });
        }

        pub fn add_address(&self, address: address::Model) {
            self.addresses.lock().unwrap().push(address);
        }

        pub fn add_country(&self, country: country::Model) {
            self.countries.lock().unwrap().insert(country.id, country);
        }

        pub fn add_office(&self, office: office::Model) {
            self.offices.lock().unwrap().insert(office.id, office);
        }

        /// Make `find_office_id_for_employee` answer `office_id` for this employee,
        /// whether or not that office exists.
        pub fn resolve_office_to(&self, employee_id: Uuid, office_id: Uuid) {
            self.resolved_offices.lock().unwrap().insert(employee_id, office_id);
        }

        fn office_id_of(&self, employee_id: Uuid) -> Option<Uuid> {
            if let Some(office_id) = self.resolved_offices.lock().unwrap().get(&employee_id) {
                return Some(*office_id);
            }
            let country_id = self.addresses.lock().unwrap().iter().find(|a| a.employee_id == employee_id)?.country_id;
            self.office_of_country(country_id).map(|o| o.id)
        }

        fn office_of_country(&self, country_id: Uuid) -> Option<office::Model> {
            let offices = self.offices.lock().unwrap();
            let mut matching: Vec<_> = offices.values().filter(|o| o.country_id == country_id).cloned().collect();
            matching.sort_by_key(|o| o.id);
            matching.into_iter().next()
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn find_address_by_employee(&self, employee_id: Uuid) -> Result<Option<address::Model>, ServiceError> {
            Ok(self.addresses.lock().unwrap().iter().find(|a| a.employee_id == employee_id).cloned())
        }

        async fn find_country(&self, id: Uuid) -> Result<Option<country::Model>, ServiceError> {
            Ok(self.countries.lock().unwrap().get(&id).cloned())
        }

        async fn find_employee(&self, id: Uuid) -> Result<Option<EmployeeWithRoles>, ServiceError> {
            Ok(self.employees.lock().unwrap().get(&id).cloned())
        }

        async fn find_employee_by_email(&self, email: &str) -> Result<Option<EmployeeWithRoles>, ServiceError> {
            Ok(self.employees.lock().unwrap().values().find(|e| e.employee.email == email).cloned())
        }

        async fn find_office_id_for_employee(&self, employee_id: Uuid) -> Result<Option<Uuid>, ServiceError> {
            Ok(self.office_id_of(employee_id))
        }

        async fn find_office(&self, id: Uuid) -> Result<Option<office::Model>, ServiceError> {
            Ok(self.offices.lock().unwrap().get(&id).cloned())
        }

        async fn find_admins_by_office(&self, office_id: Uuid) -> Result<Vec<employee::Model>, ServiceError> {
            let candidates: Vec<employee::Model> = self
                .employees
                .lock()
                .unwrap()
                .values()
                .filter(|e| e.roles.contains(&RoleType::Admin))
                .map(|e| e.employee.clone())
                .collect();
            let mut admins: Vec<employee::Model> =
                candidates.into_iter().filter(|e| self.office_id_of(e.id) == Some(office_id)).collect();
            admins.sort_by(|a, b| a.email.cmp(&b.email));
            Ok(admins)
        }
    }
}
