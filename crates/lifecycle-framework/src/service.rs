//! # Generic Lifecycle Service
//!
//! `LifecycleService<T>` implements the rules every entity kind shares:
//!
//! * codes are unique among non-deleted rows of one kind;
//! * deletion is two-phase: `set_status(id, true)` hides a row, `delete(id)` purges it,
//!   and purge is refused while the row is still live;
//! * audit fields are refreshed on every successful mutation.
//!
//! Kind-specific behaviour (field mapping, parent and child checks) comes from the
//! [`LifecycleEntity`] binding. The service keeps no cache and re-reads the store on
//! every call.
//!
//! Mutating calls of one service are serialized by an async mutex, so the
//! read-check-write sequence behind code uniqueness cannot interleave within a
//! process. Reads are never blocked by it.

use crate::audit::{AuditContext, Stamp};
use crate::entity::LifecycleEntity;
use crate::error::LifecycleError;
use crate::message::Predicate;
use crate::store::SharedStore;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

pub struct LifecycleService<T: LifecycleEntity> {
    store: SharedStore<T>,
    audit: Arc<dyn AuditContext>,
    context: T::Context,
    writes: Mutex<()>,
}

/// Collects the service's collaborators. Every one of them is required.
pub struct LifecycleServiceBuilder<T: LifecycleEntity> {
    store: Option<SharedStore<T>>,
    audit: Option<Arc<dyn AuditContext>>,
    context: Option<T::Context>,
}

impl<T: LifecycleEntity> Default for LifecycleServiceBuilder<T> {
    fn default() -> Self {
        Self {
            store: None,
            audit: None,
            context: None,
        }
    }
}

impl<T: LifecycleEntity> LifecycleServiceBuilder<T> {
    pub fn store(mut self, store: SharedStore<T>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn audit(mut self, audit: Arc<dyn AuditContext>) -> Self {
        self.audit = Some(audit);
        self
    }

    pub fn context(mut self, context: T::Context) -> Self {
        self.context = Some(context);
        self
    }

    pub fn build(self) -> Result<LifecycleService<T>, LifecycleError> {
        let store = self
            .store
            .ok_or_else(|| LifecycleError::invalid(format!("{} service needs a store", T::KIND)))?;
        let audit = self.audit.ok_or_else(|| {
            LifecycleError::invalid(format!("{} service needs an audit context", T::KIND))
        })?;
        let context = self.context.ok_or_else(|| {
            LifecycleError::invalid(format!("{} service needs its context", T::KIND))
        })?;
        Ok(LifecycleService {
            store,
            audit,
            context,
            writes: Mutex::new(()),
        })
    }
}

impl<T: LifecycleEntity> LifecycleService<T> {
    pub fn builder() -> LifecycleServiceBuilder<T> {
        LifecycleServiceBuilder::default()
    }

    /// All rows as list items, in store order. Soft-deleted rows are included.
    pub async fn list(&self) -> Result<Vec<T::Summary>, LifecycleError> {
        let rows = self.store.list().await?;
        debug!(kind = T::KIND, size = rows.len(), "List");
        Ok(rows.iter().map(|row| row.summary()).collect())
    }

    /// Rows matching `predicate`, in store order.
    pub async fn list_where(
        &self,
        predicate: Predicate<T>,
    ) -> Result<Vec<T::Summary>, LifecycleError> {
        let rows = self.store.find(predicate).await?;
        debug!(kind = T::KIND, size = rows.len(), "List filtered");
        Ok(rows.iter().map(|row| row.summary()).collect())
    }

    /// Skips `offset` rows and returns at most `count` of the rest.
    pub async fn list_page(
        &self,
        offset: usize,
        count: usize,
    ) -> Result<Vec<T::Summary>, LifecycleError> {
        let rows = self.store.list().await?;
        debug!(kind = T::KIND, offset, count, size = rows.len(), "List page");
        Ok(rows
            .iter()
            .skip(offset)
            .take(count)
            .map(|row| row.summary())
            .collect())
    }

    pub async fn get(&self, id: T::Id) -> Result<T::Detail, LifecycleError> {
        let row = self.fetch(id).await?;
        Ok(row.detail())
    }

    pub async fn create(&self, request: T::Request) -> Result<T::Detail, LifecycleError> {
        debug!(kind = T::KIND, ?request, "Create");
        T::validate(&request)?;

        let _guard = self.writes.lock().await;
        self.ensure_code_free(T::request_code(&request), None)
            .await?;

        let stamp = Stamp::now(self.audit.as_ref());
        let record = T::from_request(request, &stamp);
        record.on_create(&self.context).await?;

        let record = self.store.insert(record).await?;
        info!(kind = T::KIND, id = %record.id(), code = record.code(), "Created");
        Ok(record.detail())
    }

    pub async fn update(
        &self,
        id: T::Id,
        request: T::Request,
    ) -> Result<T::Detail, LifecycleError> {
        debug!(kind = T::KIND, %id, ?request, "Update");
        let _guard = self.writes.lock().await;

        let mut record = self.fetch(id).await?;
        T::validate(&request)?;
        self.ensure_code_free(T::request_code(&request), Some(id))
            .await?;

        record.apply(request);
        record.on_update(&self.context).await?;
        record.touch(&Stamp::now(self.audit.as_ref()));

        let record = self.store.save(record).await?;
        info!(kind = T::KIND, %id, code = record.code(), "Updated");
        Ok(record.detail())
    }

    /// Soft-deletes (`true`) or restores (`false`) a row. Repeating a call is harmless
    /// and only refreshes the audit fields.
    ///
    /// Restoring a row whose code was taken over by a live row while it was deleted
    /// fails with `Conflict`. The kind's `on_restore` hook runs before the row goes live,
    /// so a child whose parent was purged in the meantime stays deleted.
    pub async fn set_status(&self, id: T::Id, deleted: bool) -> Result<(), LifecycleError> {
        debug!(kind = T::KIND, %id, deleted, "Set status");
        let _guard = self.writes.lock().await;

        let mut record = match self.store.get(id).await? {
            Some(record) => record,
            None => {
                warn!(kind = T::KIND, %id, "Not found");
                return Err(T::MISSING_ON_STATUS.error(T::KIND, id));
            }
        };

        if record.is_deleted() && !deleted {
            self.ensure_code_free(record.code(), Some(id)).await?;
            record.on_restore(&self.context).await?;
        }

        record.set_deleted(deleted);
        record.touch(&Stamp::now(self.audit.as_ref()));
        self.store.save(record).await?;
        info!(kind = T::KIND, %id, deleted, "Status set");
        Ok(())
    }

    /// Purges a soft-deleted row for good.
    pub async fn delete(&self, id: T::Id) -> Result<(), LifecycleError> {
        debug!(kind = T::KIND, %id, "Delete");
        let _guard = self.writes.lock().await;

        let record = self.fetch(id).await?;
        if !record.is_deleted() {
            warn!(kind = T::KIND, %id, "Purge of live row refused");
            return Err(LifecycleError::conflict(
                T::KIND,
                format!("{id} must be marked deleted before it can be purged"),
            ));
        }
        record.on_delete(&self.context).await?;

        self.store.remove(id).await?;
        info!(kind = T::KIND, %id, "Purged");
        Ok(())
    }

    async fn fetch(&self, id: T::Id) -> Result<T, LifecycleError> {
        match self.store.get(id).await? {
            Some(record) => Ok(record),
            None => {
                warn!(kind = T::KIND, %id, "Not found");
                Err(LifecycleError::not_found(T::KIND, id))
            }
        }
    }

    async fn ensure_code_free(
        &self,
        code: &str,
        except: Option<T::Id>,
    ) -> Result<(), LifecycleError> {
        let wanted = code.to_owned();
        let clashes = self
            .store
            .find(Box::new(move |row: &T| {
                !row.is_deleted() && row.code() == wanted && Some(row.id()) != except
            }))
            .await?;

        match clashes.first() {
            Some(existing) => {
                warn!(kind = T::KIND, code, owner = %existing.id(), "Code in use");
                Err(LifecycleError::conflict(
                    T::KIND,
                    format!("code '{code}' is already used by {}", existing.id()),
                ))
            }
            None => Ok(()),
        }
    }
}
