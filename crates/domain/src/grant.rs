use licitasis_core::PermissionLevel;
use serde::{Deserialize, Serialize};

use crate::{CapabilityAction, Resource};

/// Stored capability row for one permission level and one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageGrant {
    permission_level: PermissionLevel,
    resource: Resource,
    can_view: bool,
    can_edit: bool,
    can_create: bool,
    can_delete: bool,
}

impl PageGrant {
    /// Creates a grant row.
    #[must_use]
    pub fn new(
        permission_level: PermissionLevel,
        resource: Resource,
        can_view: bool,
        can_edit: bool,
        can_create: bool,
        can_delete: bool,
    ) -> Self {
        Self {
            permission_level,
            resource,
            can_view,
            can_edit,
            can_create,
            can_delete,
        }
    }

    /// Returns the permission level the row applies to.
    #[must_use]
    pub fn permission_level(&self) -> &PermissionLevel {
        &self.permission_level
    }

    /// Returns the guarded resource.
    #[must_use]
    pub fn resource(&self) -> Resource {
        self.resource
    }

    /// Returns whether the level can view the resource.
    #[must_use]
    pub fn can_view(&self) -> bool {
        self.can_view
    }

    /// Returns whether the level can edit records.
    #[must_use]
    pub fn can_edit(&self) -> bool {
        self.can_edit
    }

    /// Returns whether the level can create records.
    #[must_use]
    pub fn can_create(&self) -> bool {
        self.can_create
    }

    /// Returns whether the level can delete records.
    #[must_use]
    pub fn can_delete(&self) -> bool {
        self.can_delete
    }

    /// Returns the flag matching `action`.
    #[must_use]
    pub fn allows(&self, action: CapabilityAction) -> bool {
        match action {
            CapabilityAction::View => self.can_view,
            CapabilityAction::Edit => self.can_edit,
            CapabilityAction::Create => self.can_create,
            CapabilityAction::Delete => self.can_delete,
        }
    }
}

/// Grant matrix written to an empty store on first start.
#[must_use]
pub fn default_page_grants() -> Vec<PageGrant> {
    use PermissionLevel::{Investor, UserLevel1, UserLevel2, UserLevel3};
    use Resource::{
        Carriers, Clients, Commitments, Finance, Products, Purchases, Sales, Suppliers,
    };

    let rows: [(PermissionLevel, Resource, [bool; 4]); 23] = [
        (UserLevel1, Clients, [true, false, false, false]),
        (UserLevel1, Products, [true, false, false, false]),
        (UserLevel1, Commitments, [true, false, false, false]),
        (UserLevel1, Purchases, [true, false, false, false]),
        (UserLevel1, Sales, [true, false, false, false]),
        (UserLevel1, Suppliers, [true, false, false, false]),
        (UserLevel2, Clients, [true, true, true, false]),
        (UserLevel2, Products, [true, true, true, true]),
        (UserLevel2, Commitments, [true, true, true, false]),
        (UserLevel2, Purchases, [true, true, true, false]),
        (UserLevel2, Sales, [true, true, true, false]),
        (UserLevel2, Suppliers, [true, true, true, false]),
        (UserLevel2, Finance, [true, false, false, false]),
        (UserLevel2, Carriers, [true, true, true, false]),
        (UserLevel3, Clients, [true, true, true, false]),
        (UserLevel3, Products, [true, true, true, true]),
        (UserLevel3, Commitments, [true, true, true, false]),
        (UserLevel3, Purchases, [true, true, true, false]),
        (UserLevel3, Sales, [true, true, true, false]),
        (UserLevel3, Suppliers, [true, true, true, true]),
        (UserLevel3, Finance, [true, true, false, false]),
        (UserLevel3, Carriers, [true, true, true, true]),
        (Investor, Finance, [true, false, false, false]),
    ];

    rows.into_iter()
        .map(|(level, resource, [view, edit, create, delete])| {
            PageGrant::new(level, resource, view, edit, create, delete)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use licitasis_core::PermissionLevel;

    use super::{PageGrant, default_page_grants};
    use crate::{CapabilityAction, Resource};

    #[test]
    fn allows_maps_each_action_to_its_flag() {
        let grant = PageGrant::new(
            PermissionLevel::UserLevel1,
            Resource::Clients,
            true,
            false,
            false,
            false,
        );

        assert!(grant.allows(CapabilityAction::View));
        assert!(!grant.allows(CapabilityAction::Edit));
        assert!(!grant.allows(CapabilityAction::Create));
        assert!(!grant.allows(CapabilityAction::Delete));
    }

    #[test]
    fn default_grants_are_unique_per_level_and_resource() {
        let grants = default_page_grants();
        let keys: HashSet<(String, Resource)> = grants
            .iter()
            .map(|grant| (grant.permission_level().to_string(), grant.resource()))
            .collect();

        assert_eq!(keys.len(), grants.len());
    }

    #[test]
    fn default_grants_never_cover_administrator_only_resources() {
        assert!(
            default_page_grants()
                .iter()
                .all(|grant| !grant.resource().is_administrator_only())
        );
    }

    #[test]
    fn investor_defaults_to_finance_view_only() {
        let investor: Vec<PageGrant> = default_page_grants()
            .into_iter()
            .filter(|grant| grant.permission_level().is_investor())
            .collect();

        assert_eq!(investor.len(), 1);
        assert_eq!(investor[0].resource(), Resource::Finance);
        assert!(investor[0].can_view());
        assert!(!investor[0].can_edit());
    }
}
