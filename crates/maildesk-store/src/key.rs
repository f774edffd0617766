//! Storage key construction.

use serde::{Deserialize, Serialize};

/// Identifier for a local user profile.
///
/// Generated once per profile and persisted under the profile key (see
/// [`KeyBuilder::user_id_key`]), then threaded explicitly into every store
/// operation. Generated ids have the form `u_` followed by seven
/// pseudo-random alphanumerics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Wrap an existing user id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh user id.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("u_{}", crate::id::random_suffix(7)))
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Builds the composed string keys under which collections are persisted.
///
/// A key has the form `namespace::app_id::user_id::collection`; the
/// per-profile user id lives under `namespace::app_id::userId`. The builder
/// is pure and deterministic: the same inputs yield the same key on every
/// call, across sessions.
///
/// Namespace, app id, and user id are escaped (`%` to `%25`, `:` to `%3A`)
/// before joining, so no two distinct (user, collection) pairs can ever
/// produce the same key. The collection name is the final segment and is
/// kept verbatim, which allows sub-scoped collections such as
/// `messages::<conversation-id>`.
///
/// Construct one at startup and share it; there is no ambient default.
#[derive(Debug, Clone)]
pub struct KeyBuilder {
    namespace: String,
    app_id: String,
}

impl KeyBuilder {
    /// Create a key builder for the given namespace and application id.
    #[must_use]
    pub fn new(namespace: impl Into<String>, app_id: impl Into<String>) -> Self {
        Self {
            namespace: escape_segment(&namespace.into()),
            app_id: escape_segment(&app_id.into()),
        }
    }

    /// Key for one user's collection.
    #[must_use]
    pub fn collection_key(&self, user: &UserId, collection: &str) -> String {
        format!(
            "{}::{}::{}::{collection}",
            self.namespace,
            self.app_id,
            escape_segment(user.as_str())
        )
    }

    /// Key under which the per-profile user id is persisted.
    #[must_use]
    pub fn user_id_key(&self) -> String {
        format!("{}::{}::userId", self.namespace, self.app_id)
    }
}

/// Escape `%` and `:` so a segment can never be mistaken for a separator.
fn escape_segment(segment: &str) -> String {
    if !segment.contains(['%', ':']) {
        return segment.to_string();
    }
    let mut out = String::with_capacity(segment.len());
    for c in segment.chars() {
        match c {
            '%' => out.push_str("%25"),
            ':' => out.push_str("%3A"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_format_matches_convention() {
        let keys = KeyBuilder::new("maildesk", "default-app-id");
        let user = UserId::new("u_abc1234");
        assert_eq!(
            keys.collection_key(&user, "drafts"),
            "maildesk::default-app-id::u_abc1234::drafts"
        );
        assert_eq!(keys.user_id_key(), "maildesk::default-app-id::userId");
    }

    #[test]
    fn deterministic_across_calls() {
        let keys = KeyBuilder::new("maildesk", "app");
        let user = UserId::new("u_x");
        assert_eq!(
            keys.collection_key(&user, "links"),
            keys.collection_key(&user, "links")
        );
    }

    #[test]
    fn distinct_users_never_collide() {
        let keys = KeyBuilder::new("maildesk", "app");
        // Without escaping these two pairs would both produce
        // maildesk::app::a::b::c.
        let k1 = keys.collection_key(&UserId::new("a::b"), "c");
        let k2 = keys.collection_key(&UserId::new("a"), "b::c");
        assert_ne!(k1, k2);
    }

    #[test]
    fn escape_is_injective() {
        assert_ne!(escape_segment("a%3Ab"), escape_segment("a:b"));
        assert_eq!(escape_segment("plain"), "plain");
    }

    #[test]
    fn sub_scoped_collection_kept_verbatim() {
        let keys = KeyBuilder::new("maildesk", "app");
        let user = UserId::new("u_x");
        let key = keys.collection_key(&user, "messages::conv-1");
        assert!(key.ends_with("::messages::conv-1"));
    }

    #[test]
    fn generated_user_ids_have_expected_shape() {
        let id = UserId::generate();
        assert!(id.as_str().starts_with("u_"));
        assert_eq!(id.as_str().len(), 9);
    }
}
