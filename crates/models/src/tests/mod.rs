/// Read-model mapping tests that need no database
pub mod mapping_tests;

/// CRUD and join-projection tests against PostgreSQL
pub mod db_tests;
