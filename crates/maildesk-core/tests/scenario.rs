//! End-to-end scenarios over a real file-backed store.

#![allow(clippy::unwrap_used)]

use maildesk_core::drafts::{DraftParams, DraftRepository};
use maildesk_core::ensure_user_id;
use maildesk_store::{CollectionStore, KeyBuilder};

fn keys() -> KeyBuilder {
    KeyBuilder::new("maildesk", "default-app-id")
}

#[test]
fn create_list_remove_against_the_filesystem() {
    let dir = tempfile::tempdir().unwrap();
    let store = CollectionStore::open_at(dir.path(), keys()).unwrap();
    let user = ensure_user_id(&store);
    let drafts = DraftRepository::new(store);

    let created = drafts.create(
        &user,
        DraftParams {
            title: Some("Buy milk".to_string()),
            ..DraftParams::default()
        },
    );
    assert_eq!(created.title, "Buy milk");
    assert_eq!(created.created_at, created.updated_at);

    let listed = drafts.list(&user);
    assert_eq!(listed[0].title, "Buy milk");

    drafts.remove(&user, &created.id);
    assert!(drafts.list(&user).iter().all(|d| d.id != created.id));
}

#[test]
fn collections_survive_a_session_restart() {
    let dir = tempfile::tempdir().unwrap();

    let (user, id) = {
        let store = CollectionStore::open_at(dir.path(), keys()).unwrap();
        let user = ensure_user_id(&store);
        let drafts = DraftRepository::new(store);
        let draft = drafts.create(
            &user,
            DraftParams {
                title: Some("persisted".to_string()),
                ..DraftParams::default()
            },
        );
        (user, draft.id)
    };

    // A fresh store over the same directory sees the same profile and data.
    let store = CollectionStore::open_at(dir.path(), keys()).unwrap();
    assert_eq!(ensure_user_id(&store), user);
    let drafts = DraftRepository::new(store);
    let listed = drafts.list(&user);
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, id);
    assert_eq!(listed[0].title, "persisted");
}

#[test]
fn corrupt_blob_on_disk_loads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = CollectionStore::open_at(dir.path(), keys()).unwrap();
    let user = ensure_user_id(&store);
    let drafts = DraftRepository::new(store.clone());

    drafts.create(&user, DraftParams::default());

    let key = store.keys().collection_key(&user, "drafts");
    store.backend().write(&key, "definitely not json").unwrap();

    assert!(drafts.list(&user).is_empty());
}

#[test]
fn two_stores_on_one_directory_are_last_write_wins() {
    let dir = tempfile::tempdir().unwrap();
    let tab_a = CollectionStore::open_at(dir.path(), keys()).unwrap();
    let tab_b = CollectionStore::open_at(dir.path(), keys()).unwrap();
    let user = ensure_user_id(&tab_a);

    // Both tabs snapshot the (empty) collection, then write their own
    // version. There is no merge and no staleness check: whoever saves last
    // fully overwrites the other tab's records.
    let mut view_a: Vec<String> = tab_a.load(&user, "labels");
    let mut view_b: Vec<String> = tab_b.load(&user, "labels");
    view_a.push("from tab a".to_string());
    view_b.push("from tab b".to_string());

    tab_a.save(&user, "labels", &view_a);
    tab_b.save(&user, "labels", &view_b);

    let final_view: Vec<String> = tab_a.load(&user, "labels");
    assert_eq!(final_view, ["from tab b"]);
}
