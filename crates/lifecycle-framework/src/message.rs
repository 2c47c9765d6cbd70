//! # Store Messages
//!
//! Requests sent from a [`StoreClient`](crate::StoreClient) to a
//! [`StoreActor`](crate::StoreActor). Each variant carries a oneshot sender for the
//! reply, so the actor never blocks on a caller.
//!
//! - **List**: every row in insertion order.
//! - **Get**: one row by id, `None` if absent.
//! - **Find**: rows matching a predicate, in insertion order.
//! - **Insert**: new row; the actor allocates the id.
//! - **Save**: replace the row with the same id.
//! - **Remove**: purge by id.

use crate::entity::Record;
use crate::error::StoreError;
use std::fmt;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Row filter evaluated inside the store task.
pub type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

pub enum StoreRequest<T: Record> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Find {
        predicate: Predicate<T>,
        respond_to: Response<Vec<T>>,
    },
    Insert {
        record: T,
        respond_to: Response<T>,
    },
    Save {
        record: T,
        respond_to: Response<T>,
    },
    Remove {
        id: T::Id,
        respond_to: Response<T>,
    },
}

impl<T: Record> fmt::Debug for StoreRequest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreRequest::List { .. } => f.write_str("List"),
            StoreRequest::Get { id, .. } => f.debug_struct("Get").field("id", id).finish(),
            StoreRequest::Find { .. } => f.write_str("Find"),
            StoreRequest::Insert { record, .. } => {
                f.debug_struct("Insert").field("record", record).finish()
            }
            StoreRequest::Save { record, .. } => {
                f.debug_struct("Save").field("record", record).finish()
            }
            StoreRequest::Remove { id, .. } => f.debug_struct("Remove").field("id", id).finish(),
        }
    }
}
