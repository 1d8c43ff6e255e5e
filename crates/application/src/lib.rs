//! Application services and ports.

#![forbid(unsafe_code)]

mod access_control_ports;
mod access_control_service;
mod grant_bootstrap_service;

pub use access_control_ports::{
    AuditEvent, AuditRepository, GrantRepository, GrantSeedRepository,
};
pub use access_control_service::{AccessControlService, AccessDeniedView, PageCapabilities};
pub use grant_bootstrap_service::GrantBootstrapService;
