use models::{address, country, employee, office, role::RoleType};
use serde::Serialize;
use uuid::Uuid;

/// Employee record together with its role tags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeWithRoles {
    #[serde(flatten)]
    pub employee: employee::Model,
    pub roles: Vec<RoleType>,
}

/// Composite view of one employee: personal fields, roles, address, country
/// and the office their address resolves to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub position: Option<String>,
    pub avatar: Option<String>,
    pub roles: Vec<RoleType>,
    pub address: address::Model,
    pub country: country::Model,
    pub office: office::Model,
}

impl UserProfile {
    pub fn assemble(user: EmployeeWithRoles, address: address::Model, country: country::Model, office: office::Model) -> Self {
        let e = user.employee;
        Self {
            id: e.id,
            full_name: e.full_name,
            email: e.email,
            phone_number: e.phone_number,
            position: e.position,
            avatar: e.avatar,
            roles: user.roles,
            address,
            country,
            office,
        }
    }
}
