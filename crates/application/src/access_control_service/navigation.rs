use std::collections::HashMap;

use licitasis_domain::{
    NavigationEntry, NavigationSection, NavigationTarget, PageGrant, navigation_layout,
};

use super::*;

impl AccessControlService {
    /// Returns every catalog resource the identity may view, in catalog order.
    pub async fn accessible_resources(&self, identity: &UserIdentity) -> AppResult<Vec<Resource>> {
        let snapshot = self.load_grant_snapshot(identity).await?;

        Ok(Resource::all()
            .iter()
            .copied()
            .filter(|resource| snapshot.allows(*resource, CapabilityAction::View))
            .collect())
    }

    /// Derives the ordered navigation entries for the identity.
    ///
    /// The result always ends with a single logout entry.
    pub async fn render_navigation(
        &self,
        identity: &UserIdentity,
    ) -> AppResult<Vec<NavigationEntry>> {
        let snapshot = self.load_grant_snapshot(identity).await?;
        let is_administrator = identity.permission_level().is_administrator();

        let mut entries = Vec::with_capacity(navigation_layout().len() + 1);
        for section in navigation_layout() {
            if section.resource.is_administrator_only() && !is_administrator {
                continue;
            }

            if !snapshot.allows(section.resource, CapabilityAction::View) {
                continue;
            }

            entries.push(build_section_entry(section, &snapshot));
        }

        entries.push(NavigationEntry::logout());
        Ok(entries)
    }

    async fn load_grant_snapshot(&self, identity: &UserIdentity) -> AppResult<GrantSnapshot> {
        let permission_level = identity.permission_level();
        if permission_level.is_administrator() {
            return Ok(GrantSnapshot::Unrestricted);
        }

        let grants = self
            .grant_repository
            .list_grants_for_level(permission_level)
            .await?;

        let mut by_resource = HashMap::with_capacity(grants.len());
        for grant in grants {
            by_resource.entry(grant.resource()).or_insert(grant);
        }

        Ok(GrantSnapshot::Rows(by_resource))
    }
}

fn build_section_entry(section: &NavigationSection, snapshot: &GrantSnapshot) -> NavigationEntry {
    let children = section
        .links
        .iter()
        .filter(|link| {
            link.requires
                .map(|action| snapshot.allows(section.resource, action))
                .unwrap_or(true)
        })
        .map(|link| {
            NavigationEntry::new(
                link.logical_name,
                link.label,
                NavigationTarget::Page {
                    path: link.path.to_owned(),
                },
                Vec::new(),
            )
        })
        .collect();

    NavigationEntry::new(
        section.resource.as_str(),
        section.label,
        NavigationTarget::Page {
            path: section.path.to_owned(),
        },
        children,
    )
}

/// Grant rows of one permission level, read once per navigation request.
enum GrantSnapshot {
    Unrestricted,
    Rows(HashMap<Resource, PageGrant>),
}

impl GrantSnapshot {
    fn allows(&self, resource: Resource, action: CapabilityAction) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::Rows(rows) => rows
                .get(&resource)
                .map(|grant| grant.allows(action))
                .unwrap_or(false),
        }
    }
}
