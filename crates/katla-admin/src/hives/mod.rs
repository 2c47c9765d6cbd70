//! # Hive Binding
//!
//! Hives are the parent kind of hive sections. The binding in [`entity`] wires
//! [`HiveRecord`] into the generic lifecycle service with the section store as its
//! context, which is what blocks purging a hive that still has live sections.

pub mod entity;

use crate::model::HiveRecord;
use lifecycle_framework::{StoreActor, StoreClient};

/// Creates the in-memory hive store and its client.
pub fn new(buffer_size: usize) -> (StoreActor<HiveRecord>, StoreClient<HiveRecord>) {
    StoreActor::new(buffer_size)
}
