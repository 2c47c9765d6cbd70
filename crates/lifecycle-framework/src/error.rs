//! # Lifecycle Errors
//!
//! Two layers of failure live here. [`StoreError`] covers the plumbing between a
//! service and its entity store (closed channels, dropped replies, rows that vanished
//! between a read and a write). [`LifecycleError`] is what callers of the service see:
//! the domain outcomes (`NotFound`, `Conflict`, `InvalidArgument`) plus any store
//! failure wrapped as-is.
//!
//! The transport layer never inspects messages; it matches on [`ErrorKind`].

use std::fmt;

/// Errors raised by an entity store or its client.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store closed")]
    Closed,
    #[error("Store dropped response channel")]
    Dropped,
    #[error("Record not found: {0}")]
    Missing(String),
    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Errors returned by every [`LifecycleService`](crate::LifecycleService) operation.
#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },
    #[error("{kind} conflict: {reason}")]
    Conflict { kind: &'static str, reason: String },
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Coarse classification of a [`LifecycleError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    InvalidArgument,
    Unexpected,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::Conflict => "conflict",
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::Unexpected => "unexpected",
        };
        f.write_str(name)
    }
}

impl LifecycleError {
    pub fn not_found(kind: &'static str, id: impl fmt::Display) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    pub fn conflict(kind: &'static str, reason: impl Into<String>) -> Self {
        Self::Conflict {
            kind,
            reason: reason.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            LifecycleError::NotFound { .. } => ErrorKind::NotFound,
            LifecycleError::Conflict { .. } => ErrorKind::Conflict,
            LifecycleError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            LifecycleError::Store(_) => ErrorKind::Unexpected,
        }
    }
}

/// How `set_status` reports an id that does not exist.
///
/// Every built-in entity kind uses [`MissingPolicy::NotFound`]; the policy is a
/// per-kind constant so a binding can opt into reporting a conflict instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPolicy {
    NotFound,
    Conflict,
}

impl MissingPolicy {
    pub fn error(self, kind: &'static str, id: impl fmt::Display) -> LifecycleError {
        match self {
            MissingPolicy::NotFound => LifecycleError::not_found(kind, id),
            MissingPolicy::Conflict => {
                LifecycleError::conflict(kind, format!("{id} does not exist"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_failures_classify_as_unexpected() {
        let err: LifecycleError = StoreError::Closed.into();
        assert_eq!(err.kind(), ErrorKind::Unexpected);
        assert_eq!(err.to_string(), "Store closed");
    }

    #[test]
    fn missing_policy_picks_error_kind() {
        assert_eq!(
            MissingPolicy::NotFound.error("hive", 4).kind(),
            ErrorKind::NotFound
        );
        let conflict = MissingPolicy::Conflict.error("hive", 4);
        assert_eq!(conflict.kind(), ErrorKind::Conflict);
        assert_eq!(conflict.to_string(), "hive conflict: 4 does not exist");
    }
}
