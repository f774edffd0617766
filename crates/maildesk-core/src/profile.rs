//! Per-profile user id provisioning.

use maildesk_store::{CollectionStore, UserId};
use tracing::debug;

/// The user id for this profile, provisioned on first use.
///
/// Returns the persisted id if one exists; otherwise generates a fresh one,
/// persists it, and returns it. Call this once at startup and thread the
/// result into the repositories — every subsequent call against the same
/// store yields the same id, so all of a profile's collections stay under
/// one user.
///
/// If the backing storage is unavailable the generated id still works for
/// the session; it just won't survive a restart.
pub fn ensure_user_id(store: &CollectionStore) -> UserId {
    if let Some(existing) = store.user_id() {
        return existing;
    }
    let fresh = UserId::generate();
    store.set_user_id(&fresh);
    debug!("Provisioned new profile user id {fresh}");
    fresh
}
