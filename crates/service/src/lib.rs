//! Service layer for the office issue reporting backend.
//! - Business rules live here; persistence sits behind repository traits.
//! - Every trait has a SeaORM implementation and an in-memory mock.
//! - Errors are typed per missing record so the HTTP layer can map them.

pub mod errors;
pub mod pagination;
pub mod issue;
pub mod user;
pub mod comment;
pub mod notify;
#[cfg(test)]
pub mod test_support;
