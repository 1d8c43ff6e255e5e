//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_audit_repository;
mod in_memory_grant_repository;
mod postgres_audit_repository;
mod postgres_grant_repository;

pub use in_memory_audit_repository::InMemoryAuditRepository;
pub use in_memory_grant_repository::InMemoryGrantRepository;
pub use postgres_audit_repository::PostgresAuditRepository;
pub use postgres_grant_repository::PostgresGrantRepository;
