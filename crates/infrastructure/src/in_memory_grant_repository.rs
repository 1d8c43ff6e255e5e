use std::collections::BTreeMap;

use async_trait::async_trait;
use licitasis_application::{GrantRepository, GrantSeedRepository};
use licitasis_core::{AppResult, PermissionLevel};
use licitasis_domain::{PageGrant, Resource};
use tokio::sync::RwLock;

/// In-memory grant repository keyed by permission level and resource.
#[derive(Debug, Default)]
pub struct InMemoryGrantRepository {
    grants: RwLock<BTreeMap<(String, Resource), PageGrant>>,
}

impl InMemoryGrantRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding the given rows.
    ///
    /// Later duplicates of a level and resource pair are ignored.
    #[must_use]
    pub fn with_grants(grants: impl IntoIterator<Item = PageGrant>) -> Self {
        let mut stored = BTreeMap::new();
        for grant in grants {
            stored
                .entry((grant.permission_level().as_str().to_owned(), grant.resource()))
                .or_insert(grant);
        }

        Self {
            grants: RwLock::new(stored),
        }
    }
}

#[async_trait]
impl GrantRepository for InMemoryGrantRepository {
    async fn find_grant(
        &self,
        permission_level: &PermissionLevel,
        resource: Resource,
    ) -> AppResult<Option<PageGrant>> {
        let grants = self.grants.read().await;
        Ok(grants
            .get(&(permission_level.as_str().to_owned(), resource))
            .cloned())
    }

    async fn list_grants_for_level(
        &self,
        permission_level: &PermissionLevel,
    ) -> AppResult<Vec<PageGrant>> {
        let grants = self.grants.read().await;
        Ok(grants
            .iter()
            .filter(|((level, _), _)| level == permission_level.as_str())
            .map(|(_, grant)| grant.clone())
            .collect())
    }
}

#[async_trait]
impl GrantSeedRepository for InMemoryGrantRepository {
    async fn count_grants(&self) -> AppResult<i64> {
        let grants = self.grants.read().await;
        Ok(i64::try_from(grants.len()).unwrap_or(i64::MAX))
    }

    async fn insert_grants(&self, grants: &[PageGrant]) -> AppResult<u64> {
        let mut stored = self.grants.write().await;
        let mut inserted = 0;
        for grant in grants {
            let key = (grant.permission_level().as_str().to_owned(), grant.resource());
            if stored.contains_key(&key) {
                continue;
            }

            stored.insert(key, grant.clone());
            inserted += 1;
        }

        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use licitasis_application::{GrantRepository, GrantSeedRepository};
    use licitasis_core::PermissionLevel;
    use licitasis_domain::{PageGrant, Resource, default_page_grants};

    use super::InMemoryGrantRepository;

    #[tokio::test]
    async fn first_row_wins_for_duplicate_pairs() {
        let level = PermissionLevel::UserLevel1;
        let repository = InMemoryGrantRepository::with_grants([
            PageGrant::new(level.clone(), Resource::Clients, true, false, false, false),
            PageGrant::new(level.clone(), Resource::Clients, true, true, true, true),
        ]);

        let grant = repository
            .find_grant(&level, Resource::Clients)
            .await
            .ok()
            .flatten();
        assert!(grant.is_some_and(|grant| grant.can_view() && !grant.can_edit()));
        assert_eq!(repository.count_grants().await.ok(), Some(1));
    }

    #[tokio::test]
    async fn insert_skips_existing_pairs() {
        let repository = InMemoryGrantRepository::new();

        let first = repository.insert_grants(&default_page_grants()).await;
        let second = repository.insert_grants(&default_page_grants()).await;

        assert_eq!(first.ok(), Some(default_page_grants().len() as u64));
        assert_eq!(second.ok(), Some(0));
    }

    #[tokio::test]
    async fn lists_only_rows_of_requested_level() {
        let repository = InMemoryGrantRepository::with_grants(default_page_grants());

        let investor_rows = repository
            .list_grants_for_level(&PermissionLevel::Investor)
            .await
            .unwrap_or_default();

        assert!(!investor_rows.is_empty());
        assert!(
            investor_rows
                .iter()
                .all(|grant| grant.permission_level().is_investor())
        );
    }
}
