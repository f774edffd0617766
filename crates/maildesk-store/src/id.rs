//! Identifier and timestamp utilities.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};
use tracing::warn;

/// Counter mixed into the fallback generator's seed so that two fallback ids
/// produced within the same millisecond still differ.
static FALLBACK_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a new record identifier.
///
/// Draws a UUID v4 from OS entropy. If the entropy source is unavailable in
/// the execution environment the function falls back to a pseudo-random
/// `id_` + seven alphanumerics, which is unique enough for a local data set
/// but not cryptographically strong.
#[must_use]
pub fn new_id() -> String {
    let mut bytes = [0u8; 16];
    match OsRng.try_fill_bytes(&mut bytes) {
        Ok(()) => uuid::Builder::from_random_bytes(bytes)
            .into_uuid()
            .to_string(),
        Err(e) => {
            warn!("OS entropy unavailable, using pseudo-random id: {e}");
            format!("id_{}", random_suffix(7))
        }
    }
}

/// Current time as integer milliseconds since the Unix epoch.
///
/// Not guaranteed monotonically non-decreasing within a session; only used
/// for sort keys and display.
#[must_use]
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Re-hydrate a stored millisecond timestamp into a [`DateTime<Utc>`].
///
/// Returns `None` for timestamps outside the representable range. The
/// persisted format has no native date type, so callers that want calendar
/// semantics convert explicitly.
#[must_use]
pub fn to_datetime(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}

/// Pseudo-random lowercase alphanumeric suffix of the given length.
///
/// Seeded from the wall clock and a process-local counter; suitable for the
/// degraded id path and user-id generation, not for anything adversarial.
pub(crate) fn random_suffix(len: usize) -> String {
    let seed = now_millis()
        .unsigned_abs()
        .wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ FALLBACK_COUNTER.fetch_add(1, Ordering::Relaxed);
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| (rng.sample(rand::distributions::Alphanumeric) as char).to_ascii_lowercase())
        .collect()
}
