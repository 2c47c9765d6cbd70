//! # Record & LifecycleEntity Traits
//!
//! [`Record`] is the minimal contract an entity store needs: something cloneable with a
//! numeric identity. [`LifecycleEntity`] layers the soft-delete lifecycle on top of it
//! and is what every entity kind (hive, section, category, product) implements to be
//! managed by the generic [`LifecycleService`](crate::LifecycleService).
//!
//! # Provided Methods (Hooks)
//! Like the store, the hooks receive the kind's `Context` by reference. The defaults do
//! nothing (`Ok(())`), so a kind without parents or children only implements the
//! required mapping methods:
//! - [`LifecycleEntity::on_create`] runs on a freshly built record before insert.
//! - [`LifecycleEntity::on_update`] runs after the request fields were applied, before save.
//! - [`LifecycleEntity::on_restore`] runs on a deleted record before it is made live again.
//! - [`LifecycleEntity::on_delete`] runs on a soft-deleted record before purge.
//!
//! # Context
//! `Context` is injected once, when the service is built. Parent kinds get the child
//! store (to count live children), child kinds get the parent store (to check the
//! referenced parent exists). Use `()` if nothing is needed.

use crate::audit::Stamp;
use crate::error::{LifecycleError, MissingPolicy};
use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A row held by an [`EntityStore`](crate::EntityStore).
pub trait Record: Clone + Debug + Send + Sync + 'static {
    /// Store-assigned identity. Must be convertible from `u32` for id allocation.
    type Id: Copy + Eq + Hash + Debug + Display + Send + Sync + From<u32> + 'static;

    fn id(&self) -> Self::Id;

    /// Called by the store on insert; records built from a request carry a placeholder.
    fn assign_id(&mut self, id: Self::Id);
}

/// The per-kind binding consumed by the generic lifecycle service.
#[async_trait]
pub trait LifecycleEntity: Record {
    /// Create/update payload (one type for both).
    type Request: Send + Sync + Debug;

    /// Full view returned by `get`, `create` and `update`.
    type Detail: Send + Debug;

    /// Compact view returned by the list operations.
    type Summary: Send + Debug;

    /// Dependencies injected into the hooks.
    type Context: Send + Sync;

    /// Lower-case kind name used in logs and error messages.
    const KIND: &'static str;

    /// Error reported by `set_status` for an unknown id.
    const MISSING_ON_STATUS: MissingPolicy = MissingPolicy::NotFound;

    fn code(&self) -> &str;

    fn request_code(request: &Self::Request) -> &str;

    fn is_deleted(&self) -> bool;

    fn set_deleted(&mut self, deleted: bool);

    /// Refresh `last_updated` and `last_updated_by`.
    fn touch(&mut self, stamp: &Stamp);

    /// Reject requests with missing required fields.
    fn validate(request: &Self::Request) -> Result<(), LifecycleError>;

    /// Build a new, non-deleted record. The id is a placeholder until the store assigns one.
    fn from_request(request: Self::Request, stamp: &Stamp) -> Self;

    /// Overwrite the mutable business fields. Identity, deleted flag and audit stay.
    fn apply(&mut self, request: Self::Request);

    fn detail(&self) -> Self::Detail;

    fn summary(&self) -> Self::Summary;

    // --- Lifecycle Hooks (Async) ---

    async fn on_create(&self, _ctx: &Self::Context) -> Result<(), LifecycleError> {
        Ok(())
    }

    async fn on_update(&self, _ctx: &Self::Context) -> Result<(), LifecycleError> {
        Ok(())
    }

    async fn on_restore(&self, _ctx: &Self::Context) -> Result<(), LifecycleError> {
        Ok(())
    }

    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), LifecycleError> {
        Ok(())
    }
}
