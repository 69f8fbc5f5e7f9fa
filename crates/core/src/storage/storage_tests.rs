#[cfg(test)]
mod tests {
    use crate::errors::{DatabaseError, Error, Result};
    use crate::storage::{InMemoryKeyValueStore, JsonStorage, KeyValueStoreTrait};
    use serde::{Deserialize, Serialize};
    use std::sync::Arc;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Item {
        name: String,
        qty: u32,
    }

    /// Backend that refuses every operation, like a disabled browser store.
    struct UnavailableStore;

    impl KeyValueStoreTrait for UnavailableStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>> {
            Err(Error::Database(DatabaseError::Unavailable(
                "storage disabled".to_string(),
            )))
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Database(DatabaseError::Unavailable(
                "quota exceeded".to_string(),
            )))
        }

        fn remove_item(&self, _key: &str) -> Result<()> {
            Err(Error::Database(DatabaseError::Unavailable(
                "storage disabled".to_string(),
            )))
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item {
                name: "toned milk".to_string(),
                qty: 2,
            },
            Item {
                name: "curd".to_string(),
                qty: 1,
            },
        ]
    }

    // ==================== InMemoryKeyValueStore ====================

    #[test]
    fn test_memory_store_get_missing_key() {
        let store = InMemoryKeyValueStore::new();
        assert_eq!(store.get_item("missing").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_memory_store_set_replaces_value() {
        let store = InMemoryKeyValueStore::new();
        store.set_item("k", "one").unwrap();
        store.set_item("k", "two").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("two"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_remove_absent_key_is_ok() {
        let store = InMemoryKeyValueStore::with_items([("a", "1")]);
        store.remove_item("b").unwrap();
        store.remove_item("a").unwrap();
        assert!(store.is_empty());
    }

    // ==================== JsonStorage ====================

    #[test]
    fn test_read_returns_default_when_absent() {
        let storage = JsonStorage::new(Arc::new(InMemoryKeyValueStore::new()));
        let value: Vec<Item> = storage.read("ns_items", Vec::new());
        assert!(value.is_empty());
    }

    #[test]
    fn test_write_then_read_preserves_order() {
        let storage = JsonStorage::new(Arc::new(InMemoryKeyValueStore::new()));
        storage.write("ns_items", &items());

        let loaded: Vec<Item> = storage.read("ns_items", Vec::new());
        assert_eq!(loaded, items());
    }

    #[test]
    fn test_read_returns_default_when_malformed() {
        let backend = Arc::new(InMemoryKeyValueStore::with_items([(
            "ns_items",
            "{not json",
        )]));
        let storage = JsonStorage::new(backend);

        let fallback = vec![Item {
            name: "fallback".to_string(),
            qty: 0,
        }];
        let loaded: Vec<Item> = storage.read("ns_items", fallback.clone());
        assert_eq!(loaded, fallback);
    }

    #[test]
    fn test_read_returns_default_when_shape_mismatch() {
        let backend = Arc::new(InMemoryKeyValueStore::with_items([(
            "ns_items",
            r#"{"name":"single object, not an array","qty":1}"#,
        )]));
        let storage = JsonStorage::new(backend);

        let loaded: Vec<Item> = storage.read("ns_items", Vec::new());
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_write_fully_replaces_previous_payload() {
        let backend = Arc::new(InMemoryKeyValueStore::new());
        let storage = JsonStorage::new(backend.clone());

        storage.write("ns_items", &items());
        storage.write("ns_items", &items()[..1]);

        let raw = backend.get_item("ns_items").unwrap().unwrap();
        let parsed: Vec<Item> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "toned milk");
    }

    #[test]
    fn test_unavailable_backend_is_swallowed() {
        let storage = JsonStorage::new(Arc::new(UnavailableStore));

        // Neither call panics or surfaces an error.
        storage.write("ns_items", &items());
        let loaded: Vec<Item> = storage.read("ns_items", Vec::new());
        assert!(loaded.is_empty());
    }
}
