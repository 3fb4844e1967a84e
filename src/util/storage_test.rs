use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::default();
    assert_eq!(store.token(), None);
}

#[test]
fn memory_store_set_then_read() {
    let store = MemoryStore::default();
    store.set_token("abc.def.ghi");
    assert_eq!(store.token().as_deref(), Some("abc.def.ghi"));
}

#[test]
fn memory_store_set_replaces_previous_value() {
    let store = MemoryStore::default();
    store.set_token("first");
    store.set_token("second");
    assert_eq!(store.token().as_deref(), Some("second"));
}

#[test]
fn memory_store_clear_is_idempotent() {
    let store = MemoryStore::default();
    store.clear_token();
    store.set_token("tok");
    store.clear_token();
    store.clear_token();
    assert_eq!(store.token(), None);
}

#[test]
fn memory_store_clones_share_the_slot() {
    let store = MemoryStore::default();
    let view = store.clone();
    store.set_token("shared");
    assert_eq!(view.token().as_deref(), Some("shared"));
    view.clear_token();
    assert_eq!(store.token(), None);
}

#[test]
fn browser_store_reads_none_outside_the_browser() {
    // Under the non-hydrate build there is no localStorage to touch.
    let store = BrowserStore;
    store.set_token("tok");
    assert_eq!(store.token(), None);
}
