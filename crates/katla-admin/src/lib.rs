//! # Katla Admin
//!
//! Administration backend for the Katla catalogue: hives and their sections, product
//! categories and their catalogue products. All four kinds share one lifecycle
//! (create, update, soft-delete or restore, purge) implemented once in
//! [`lifecycle_framework`] and bound per kind here.
//!
//! - **[model]**: records, detail views, list items and requests per kind.
//! - **[hives], [sections], [categories], [products]**: `LifecycleEntity` bindings and
//!   store factories.
//! - **[services]**: domain-named services (`HiveService`, ...).
//! - **[runtime]**: [`AdminSystem`](runtime::AdminSystem) wiring and graceful shutdown.
//! - **[transport]**: the HTTP contract as framework-free handlers.
//! - **[config]**: [`AdminConfig`](config::AdminConfig) loading.

pub mod categories;
pub mod config;
pub mod hives;
pub mod model;
pub mod products;
pub mod runtime;
pub mod sections;
pub mod services;
pub mod transport;
