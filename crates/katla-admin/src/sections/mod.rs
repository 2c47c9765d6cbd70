//! # Hive Section Binding
//!
//! Sections reference their hive by `store_hive_id`. The hive store is the binding's
//! context: creating or moving a section onto a hive id that does not exist fails
//! with `NotFound`.

pub mod entity;

use crate::model::SectionRecord;
use lifecycle_framework::{StoreActor, StoreClient};

/// Creates the in-memory section store and its client.
pub fn new(buffer_size: usize) -> (StoreActor<SectionRecord>, StoreClient<SectionRecord>) {
    StoreActor::new(buffer_size)
}
