//! Parent/child checks used by the `on_*` hooks of related entity kinds.
//!
//! A child kind keeps a reference to its parent's id. Child hooks call
//! [`ensure_parent_exists`] against the parent store; parent hooks call
//! [`ensure_no_live_children`] against the child store before a purge.

use crate::entity::LifecycleEntity;
use crate::error::LifecycleError;
use crate::store::SharedStore;
use std::fmt::Display;
use tracing::warn;

/// `NotFound` (reported for the parent kind) unless a row with `id` exists.
/// Soft-deleted parents count as existing.
pub async fn ensure_parent_exists<P: LifecycleEntity>(
    parents: &SharedStore<P>,
    id: P::Id,
) -> Result<(), LifecycleError> {
    match parents.get(id).await? {
        Some(_) => Ok(()),
        None => {
            warn!(kind = P::KIND, %id, "Referenced parent missing");
            Err(LifecycleError::not_found(P::KIND, id))
        }
    }
}

/// `Conflict` (reported for `parent_kind`) while any non-deleted child matches `belongs`.
pub async fn ensure_no_live_children<C, F>(
    children: &SharedStore<C>,
    parent_kind: &'static str,
    parent_id: impl Display,
    belongs: F,
) -> Result<(), LifecycleError>
where
    C: LifecycleEntity,
    F: Fn(&C) -> bool + Send + Sync + 'static,
{
    let live = children
        .find(Box::new(move |child: &C| !child.is_deleted() && belongs(child)))
        .await?;
    if live.is_empty() {
        return Ok(());
    }
    warn!(
        kind = parent_kind,
        %parent_id,
        children = live.len(),
        "Purge blocked by live children"
    );
    Err(LifecycleError::conflict(
        parent_kind,
        format!(
            "{parent_id} still has {} live {} row(s)",
            live.len(),
            C::KIND
        ),
    ))
}
