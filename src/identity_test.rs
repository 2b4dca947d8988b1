use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_starts_empty() {
    let store = MemoryStorage::new();
    assert_eq!(store.get_item(IDENTITY_KEY), None);
}

#[test]
fn memory_storage_set_overwrites() {
    let store = MemoryStorage::new();
    store.set_item("k", "v");
    store.set_item("k", "w");
    assert_eq!(store.get_item("k").as_deref(), Some("w"));
}

#[test]
fn with_identity_uses_username_key() {
    let store = MemoryStorage::with_identity("alice");
    assert_eq!(store.get_item("username").as_deref(), Some("alice"));
}

// =============================================================
// read_identity
// =============================================================

#[test]
fn read_identity_returns_saved_name() {
    let store = MemoryStorage::with_identity("alice");
    assert_eq!(read_identity(&store).as_deref(), Some("alice"));
}

#[test]
fn read_identity_treats_empty_as_absent() {
    let store = MemoryStorage::with_identity("");
    assert_eq!(read_identity(&store), None);
}

#[test]
fn read_identity_ignores_other_keys() {
    let store = MemoryStorage::new();
    store.set_item("user", "alice");
    assert_eq!(read_identity(&store), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_empty_off_browser() {
    assert_eq!(read_identity(&BrowserStorage), None);
}
