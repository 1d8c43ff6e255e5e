//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod grant;
mod navigation;
mod security;

pub use grant::{PageGrant, default_page_grants};
pub use navigation::{
    LOGOUT_LOGICAL_NAME, NavigationEntry, NavigationLink, NavigationSection, NavigationTarget,
    navigation_layout,
};
pub use security::{AuditAction, CapabilityAction, Resource};
