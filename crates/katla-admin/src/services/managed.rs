//! # ManagedService Trait
//!
//! The shape every domain service offers, so the transport layer can serve all four
//! kinds through one set of handlers. Each service maps the CRUD methods onto its
//! domain-named operations; `set_status` is provided once on top of the generic
//! [`LifecycleService`].
use async_trait::async_trait;
use lifecycle_framework::{LifecycleEntity, LifecycleError, LifecycleService};

/// Trait for domain services to inherit the shared lifecycle operations.
///
/// Implementors expose their inner service and forward the CRUD methods to their
/// domain-named ones (`get_hives`, `create_hive`, ...); `set_status` comes for free.
#[async_trait]
pub trait ManagedService<T: LifecycleEntity>: Send + Sync {
    /// Access the inner generic service.
    fn inner(&self) -> &LifecycleService<T>;

    async fn list(&self) -> Result<Vec<T::Summary>, LifecycleError>;

    async fn fetch(&self, id: T::Id) -> Result<T::Detail, LifecycleError>;

    async fn create(&self, request: T::Request) -> Result<T::Detail, LifecycleError>;

    async fn update(&self, id: T::Id, request: T::Request) -> Result<T::Detail, LifecycleError>;

    /// Purge a soft-deleted entity.
    async fn purge(&self, id: T::Id) -> Result<(), LifecycleError>;

    /// Soft-delete (`true`) or restore (`false`) an entity.
    #[tracing::instrument(skip(self))]
    async fn set_status(&self, id: T::Id, deleted: bool) -> Result<(), LifecycleError> {
        tracing::debug!("Sending request");
        self.inner().set_status(id, deleted).await
    }
}
