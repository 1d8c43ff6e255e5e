use std::sync::Arc;

use licitasis_core::AppResult;
use licitasis_domain::default_page_grants;
use tracing::info;

use crate::GrantSeedRepository;

/// Writes the default grant matrix into an empty grant store.
#[derive(Clone)]
pub struct GrantBootstrapService {
    repository: Arc<dyn GrantSeedRepository>,
}

impl GrantBootstrapService {
    /// Creates a new bootstrap service.
    #[must_use]
    pub fn new(repository: Arc<dyn GrantSeedRepository>) -> Self {
        Self { repository }
    }

    /// Seeds default grants when no grant row exists yet.
    ///
    /// Returns the number of inserted rows; zero when the store was already
    /// populated.
    pub async fn initialize_default_grants(&self) -> AppResult<u64> {
        let existing = self.repository.count_grants().await?;
        if existing > 0 {
            info!(existing, "grant store already populated, skipping defaults");
            return Ok(0);
        }

        let inserted = self
            .repository
            .insert_grants(&default_page_grants())
            .await?;
        info!(inserted, "default page grants initialized");

        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use licitasis_core::AppResult;
    use licitasis_domain::{PageGrant, default_page_grants};
    use tokio::sync::Mutex;

    use crate::GrantSeedRepository;

    use super::GrantBootstrapService;

    #[derive(Default)]
    struct FakeGrantSeedRepository {
        rows: Mutex<Vec<PageGrant>>,
    }

    #[async_trait]
    impl GrantSeedRepository for FakeGrantSeedRepository {
        async fn count_grants(&self) -> AppResult<i64> {
            Ok(self.rows.lock().await.len() as i64)
        }

        async fn insert_grants(&self, grants: &[PageGrant]) -> AppResult<u64> {
            let mut rows = self.rows.lock().await;
            rows.extend_from_slice(grants);
            Ok(grants.len() as u64)
        }
    }

    #[tokio::test]
    async fn seeds_defaults_into_empty_store() {
        let repository = Arc::new(FakeGrantSeedRepository::default());
        let service = GrantBootstrapService::new(repository.clone());

        let inserted = service.initialize_default_grants().await;
        assert_eq!(inserted.ok(), Some(default_page_grants().len() as u64));
        assert_eq!(
            repository.rows.lock().await.len(),
            default_page_grants().len()
        );
    }

    #[tokio::test]
    async fn leaves_populated_store_untouched() {
        let repository = Arc::new(FakeGrantSeedRepository::default());
        let service = GrantBootstrapService::new(repository.clone());

        let first = service.initialize_default_grants().await;
        let second = service.initialize_default_grants().await;

        assert!(first.is_ok());
        assert_eq!(second.ok(), Some(0));
        assert_eq!(
            repository.rows.lock().await.len(),
            default_page_grants().len()
        );
    }
}
