//! # Product Category Binding
//!
//! Categories own catalogue products; their context is the product store.

pub mod entity;

use crate::model::CategoryRecord;
use lifecycle_framework::{StoreActor, StoreClient};

/// Creates the in-memory category store and its client.
pub fn new(buffer_size: usize) -> (StoreActor<CategoryRecord>, StoreClient<CategoryRecord>) {
    StoreActor::new(buffer_size)
}
