//! # Runtime
//!
//! Starting, wiring and stopping the admin system.
//!
//! ## Wiring
//!
//! The four store actors are created first, with no knowledge of each other. The
//! services are then built with the related kind's store as their context:
//!
//! | Service | Own store | Context |
//! |---------|-----------|---------|
//! | hives | hive | section store (live children block purge) |
//! | sections | section | hive store (parent must exist) |
//! | categories | category | product store (live children block purge) |
//! | products | product | category store (parent must exist) |
//!
//! Hives and sections reference each other's stores, but only through clients, so no
//! actor holds another actor.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all services**: every store client goes with them.
//! 2. **Stores detect closure**: `receiver.recv()` returns `None`.
//! 3. **Stores log their final size** and exit.
//! 4. **Await completion** of every store task.

pub mod admin_system;
pub mod error;
pub mod tracing;

pub use admin_system::AdminSystem;
pub use error::AdminError;
pub use self::tracing::setup_tracing;
