//! # Lifecycle Framework
//!
//! Building blocks for managing soft-deletable, code-keyed entities behind an
//! asynchronous store. One generic service implements the rules; each entity kind
//! plugs in through a small binding.
//!
//! ## Layers
//!
//! - **Store**: [`EntityStore`] is the async collection the service talks to.
//!   [`StoreActor`] is the in-memory implementation: it owns the rows of one kind and
//!   processes requests sequentially on its own task, reached through a cloneable
//!   [`StoreClient`].
//! - **Binding**: [`LifecycleEntity`] tells the service how to read codes and
//!   deleted flags, map records to views, and check parents or children through an
//!   injected `Context`.
//! - **Service**: [`LifecycleService`] implements list, get, create, update,
//!   set-status and purge with code uniqueness among live rows and two-phase delete.
//! - **Relations**: [`ensure_parent_exists`] and [`ensure_no_live_children`] back the
//!   hooks of kinds that reference each other.
//!
//! ## Two-Phase Delete
//!
//! ```text
//!  create ──► live ◄──── set_status(false) ────┐
//!              │                               │
//!              └──── set_status(true) ──► deleted ── delete ──► purged
//! ```
//!
//! Only a deleted row can be purged. A deleted row keeps its code on record, but the
//! code becomes available to new rows.
//!
//! ## Testing
//!
//! See [`mock`] for the scripted [`MockStore`](mock::MockStore) used to inject store
//! failures.

pub mod actor;
pub mod audit;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod relation;
pub mod service;
pub mod store;

pub use actor::StoreActor;
pub use audit::{AuditContext, FixedUser, Stamp};
pub use client::StoreClient;
pub use entity::{LifecycleEntity, Record};
pub use error::{ErrorKind, LifecycleError, MissingPolicy, StoreError};
pub use message::{Predicate, Response, StoreRequest};
pub use relation::{ensure_no_live_children, ensure_parent_exists};
pub use service::{LifecycleService, LifecycleServiceBuilder};
pub use store::{EntityStore, SharedStore};
