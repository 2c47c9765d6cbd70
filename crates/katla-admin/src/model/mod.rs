//! # Domain Model
//!
//! Every entity kind comes in four shapes:
//!
//! | Shape | Hive | Section | Category | Product |
//! |-------|------|---------|----------|---------|
//! | stored record | [`HiveRecord`] | [`SectionRecord`] | [`CategoryRecord`] | [`ProductRecord`] |
//! | detail view | [`Hive`] | [`HiveSection`] | [`ProductCategory`] | [`CatalogueProduct`] |
//! | list item | [`HiveListItem`] | [`HiveSectionListItem`] | [`ProductCategoryListItem`] | [`ProductListItem`] |
//! | request | [`UpdateHiveRequest`] | [`UpdateHiveSectionRequest`] | [`UpdateProductCategoryRequest`] | [`UpdateProductRequest`] |
//!
//! Views are produced from records with plain `From<&Record>` conversions. Records
//! carry the audit columns (`created_by`, `last_updated_by`, `last_updated`) that the
//! views leave out, except for `last_updated`.
//!
//! Views and requests serialize with camelCase field names.

pub mod category;
pub mod hive;
pub mod product;
pub mod section;

pub use category::*;
pub use hive::*;
pub use product::*;
pub use section::*;

use lifecycle_framework::LifecycleError;

fn require(field: &str, value: &str) -> Result<(), LifecycleError> {
    if value.trim().is_empty() {
        return Err(LifecycleError::invalid(format!("{field} is required")));
    }
    Ok(())
}
