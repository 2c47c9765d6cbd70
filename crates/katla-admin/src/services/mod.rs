//! # Domain Services
//!
//! One service per entity kind, each a thin, domain-named wrapper around the generic
//! [`LifecycleService`](lifecycle_framework::LifecycleService). The shared
//! `set_status` operation comes from [`ManagedService`].

pub mod category_service;
pub mod hive_service;
pub mod managed;
pub mod product_service;
pub mod section_service;

pub use category_service::ProductCategoryService;
pub use hive_service::HiveService;
pub use managed::ManagedService;
pub use product_service::ProductCatalogueService;
pub use section_service::HiveSectionService;
