//! # Hive Service
//!
//! Domain-named API over the lifecycle service for hives.
use crate::model::{Hive, HiveId, HiveListItem, HiveRecord, SectionRecord, UpdateHiveRequest};
use crate::services::ManagedService;
use async_trait::async_trait;
use lifecycle_framework::{AuditContext, LifecycleError, LifecycleService, SharedStore};
use std::sync::Arc;
use tracing::{debug, instrument};

pub struct HiveService {
    inner: LifecycleService<HiveRecord>,
}

#[async_trait]
impl ManagedService<HiveRecord> for HiveService {
    fn inner(&self) -> &LifecycleService<HiveRecord> {
        &self.inner
    }

    async fn list(&self) -> Result<Vec<HiveListItem>, LifecycleError> {
        self.get_hives().await
    }

    async fn fetch(&self, id: HiveId) -> Result<Hive, LifecycleError> {
        self.get_hive(id).await
    }

    async fn create(&self, request: UpdateHiveRequest) -> Result<Hive, LifecycleError> {
        self.create_hive(request).await
    }

    async fn update(&self, id: HiveId, request: UpdateHiveRequest) -> Result<Hive, LifecycleError> {
        self.update_hive(id, request).await
    }

    async fn purge(&self, id: HiveId) -> Result<(), LifecycleError> {
        self.delete_hive(id).await
    }
}

impl HiveService {
    pub fn new(
        store: SharedStore<HiveRecord>,
        audit: Arc<dyn AuditContext>,
        sections: SharedStore<SectionRecord>,
    ) -> Result<Self, LifecycleError> {
        let inner = LifecycleService::builder()
            .store(store)
            .audit(audit)
            .context(sections)
            .build()?;
        Ok(Self { inner })
    }

    #[instrument(skip(self))]
    pub async fn get_hives(&self) -> Result<Vec<HiveListItem>, LifecycleError> {
        debug!("Sending request");
        self.inner.list().await
    }

    #[instrument(skip(self))]
    pub async fn get_hive(&self, id: HiveId) -> Result<Hive, LifecycleError> {
        debug!("Sending request");
        self.inner.get(id).await
    }

    #[instrument(skip(self))]
    pub async fn create_hive(&self, request: UpdateHiveRequest) -> Result<Hive, LifecycleError> {
        debug!("Sending request");
        self.inner.create(request).await
    }

    #[instrument(skip(self))]
    pub async fn update_hive(
        &self,
        id: HiveId,
        request: UpdateHiveRequest,
    ) -> Result<Hive, LifecycleError> {
        debug!("Sending request");
        self.inner.update(id, request).await
    }

    /// Purges a hive. It must be soft-deleted and have no live sections.
    #[instrument(skip(self))]
    pub async fn delete_hive(&self, id: HiveId) -> Result<(), LifecycleError> {
        debug!("Sending request");
        self.inner.delete(id).await
    }
}
