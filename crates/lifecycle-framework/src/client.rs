//! # Store Client
//!
//! The sender half of a [`StoreActor`](crate::StoreActor). Cheap to clone; every
//! clone keeps the actor alive.

use crate::entity::Record;
use crate::error::StoreError;
use crate::message::{Predicate, Response, StoreRequest};
use crate::store::EntityStore;
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `StoreActor`.
pub struct StoreClient<T: Record> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: Record> Clone for StoreClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Record> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R: Send>(
        &self,
        build: impl FnOnce(Response<R>) -> StoreRequest<T> + Send,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }
}

#[async_trait]
impl<T: Record> EntityStore<T> for StoreClient<T> {
    async fn list(&self) -> Result<Vec<T>, StoreError> {
        self.request(|respond_to| StoreRequest::List { respond_to })
            .await
    }

    async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        self.request(|respond_to| StoreRequest::Get { id, respond_to })
            .await
    }

    async fn find(&self, predicate: Predicate<T>) -> Result<Vec<T>, StoreError> {
        self.request(|respond_to| StoreRequest::Find {
            predicate,
            respond_to,
        })
        .await
    }

    async fn insert(&self, record: T) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::Insert { record, respond_to })
            .await
    }

    async fn save(&self, record: T) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::Save { record, respond_to })
            .await
    }

    async fn remove(&self, id: T::Id) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::Remove { id, respond_to })
            .await
    }
}
