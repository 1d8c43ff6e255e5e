use async_trait::async_trait;
use licitasis_application::{AuditEvent, AuditRepository};
use licitasis_core::AppResult;
use tokio::sync::RwLock;

/// In-memory audit repository that keeps events in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryAuditRepository {
    events: RwLock<Vec<AuditEvent>>,
}

impl InMemoryAuditRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every appended event.
    pub async fn events(&self) -> Vec<AuditEvent> {
        self.events.read().await.clone()
    }
}

#[async_trait]
impl AuditRepository for InMemoryAuditRepository {
    async fn append_event(&self, event: AuditEvent) -> AppResult<()> {
        self.events.write().await.push(event);
        Ok(())
    }
}
