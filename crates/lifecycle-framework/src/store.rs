//! # EntityStore Trait
//!
//! The asynchronous collection a [`LifecycleService`](crate::LifecycleService) works
//! against. It is object-safe so services hold an `Arc<dyn EntityStore<T>>` and do not
//! care whether the rows live in a [`StoreActor`](crate::StoreActor), a
//! [`MockStore`](crate::mock::MockStore) or something persistent.
//!
//! Implementations must keep rows in a stable order (the order list operations
//! return) and allocate fresh positive ids on insert.

use crate::entity::Record;
use crate::error::StoreError;
use crate::message::Predicate;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait EntityStore<T: Record>: Send + Sync {
    async fn list(&self) -> Result<Vec<T>, StoreError>;

    async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError>;

    async fn find(&self, predicate: Predicate<T>) -> Result<Vec<T>, StoreError>;

    /// Stores a new row and returns it with its assigned id.
    async fn insert(&self, record: T) -> Result<T, StoreError>;

    /// Replaces the row with the same id. `StoreError::Missing` if there is none.
    async fn save(&self, record: T) -> Result<T, StoreError>;

    /// Permanently removes a row and returns it.
    async fn remove(&self, id: T::Id) -> Result<T, StoreError>;
}

/// Shared handle to a store of `T`.
pub type SharedStore<T> = Arc<dyn EntityStore<T>>;
