//! # Catalogue Product Binding
//!
//! Products must reference an existing product category (the binding's context).

pub mod entity;

use crate::model::ProductRecord;
use lifecycle_framework::{StoreActor, StoreClient};

/// Creates the in-memory product store and its client.
pub fn new(buffer_size: usize) -> (StoreActor<ProductRecord>, StoreClient<ProductRecord>) {
    StoreActor::new(buffer_size)
}
