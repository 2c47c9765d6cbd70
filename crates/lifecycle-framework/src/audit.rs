//! Acting-user attribution for mutating calls.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Supplies the id of the user on whose behalf a service call runs.
pub trait AuditContext: Send + Sync {
    fn user_id(&self) -> i32;
}

/// An [`AuditContext`] that always reports the same user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedUser(pub i32);

impl AuditContext for FixedUser {
    fn user_id(&self) -> i32 {
        self.0
    }
}

/// Who touched a record and when. Taken once per mutating call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stamp {
    pub user_id: i32,
    pub at: DateTime<Utc>,
}

impl Stamp {
    pub fn now(audit: &dyn AuditContext) -> Self {
        Self {
            user_id: audit.user_id(),
            at: Utc::now(),
        }
    }
}
