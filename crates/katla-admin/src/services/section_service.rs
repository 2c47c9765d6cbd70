//! # Hive Section Service
use crate::model::{
    HiveId, HiveRecord, HiveSection, HiveSectionId, HiveSectionListItem, SectionRecord,
    UpdateHiveSectionRequest,
};
use crate::services::ManagedService;
use async_trait::async_trait;
use lifecycle_framework::{AuditContext, LifecycleError, LifecycleService, SharedStore};
use std::sync::Arc;
use tracing::{debug, instrument};

pub struct HiveSectionService {
    inner: LifecycleService<SectionRecord>,
}

#[async_trait]
impl ManagedService<SectionRecord> for HiveSectionService {
    fn inner(&self) -> &LifecycleService<SectionRecord> {
        &self.inner
    }

    async fn list(&self) -> Result<Vec<HiveSectionListItem>, LifecycleError> {
        self.get_hive_sections().await
    }

    async fn fetch(&self, id: HiveSectionId) -> Result<HiveSection, LifecycleError> {
        self.get_hive_section(id).await
    }

    async fn create(
        &self,
        request: UpdateHiveSectionRequest,
    ) -> Result<HiveSection, LifecycleError> {
        self.create_hive_section(request).await
    }

    async fn update(
        &self,
        id: HiveSectionId,
        request: UpdateHiveSectionRequest,
    ) -> Result<HiveSection, LifecycleError> {
        self.update_hive_section(id, request).await
    }

    async fn purge(&self, id: HiveSectionId) -> Result<(), LifecycleError> {
        self.delete_hive_section(id).await
    }
}

impl HiveSectionService {
    pub fn new(
        store: SharedStore<SectionRecord>,
        audit: Arc<dyn AuditContext>,
        hives: SharedStore<HiveRecord>,
    ) -> Result<Self, LifecycleError> {
        let inner = LifecycleService::builder()
            .store(store)
            .audit(audit)
            .context(hives)
            .build()?;
        Ok(Self { inner })
    }

    #[instrument(skip(self))]
    pub async fn get_hive_sections(&self) -> Result<Vec<HiveSectionListItem>, LifecycleError> {
        debug!("Sending request");
        self.inner.list().await
    }

    /// Sections of one hive, deleted ones included. An unknown hive yields an empty list.
    #[instrument(skip(self))]
    pub async fn get_hive_sections_for(
        &self,
        hive_id: HiveId,
    ) -> Result<Vec<HiveSectionListItem>, LifecycleError> {
        debug!("Sending request");
        self.inner
            .list_where(Box::new(move |s: &SectionRecord| s.store_hive_id == hive_id))
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_hive_section(&self, id: HiveSectionId) -> Result<HiveSection, LifecycleError> {
        debug!("Sending request");
        self.inner.get(id).await
    }

    #[instrument(skip(self))]
    pub async fn create_hive_section(
        &self,
        request: UpdateHiveSectionRequest,
    ) -> Result<HiveSection, LifecycleError> {
        debug!("Sending request");
        self.inner.create(request).await
    }

    #[instrument(skip(self))]
    pub async fn update_hive_section(
        &self,
        id: HiveSectionId,
        request: UpdateHiveSectionRequest,
    ) -> Result<HiveSection, LifecycleError> {
        debug!("Sending request");
        self.inner.update(id, request).await
    }

    #[instrument(skip(self))]
    pub async fn delete_hive_section(&self, id: HiveSectionId) -> Result<(), LifecycleError> {
        debug!("Sending request");
        self.inner.delete(id).await
    }
}
