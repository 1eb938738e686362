//! Issue module: domain inputs, repository abstraction and the issue service.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::IssueService;
