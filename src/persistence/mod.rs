//! Save/load of the todo list to a single storage slot
//!
//! Features:
//! - JSON array encoding (`text`, `completed`, `id` per entry)
//! - Pluggable key-value backend (`LocalStorage` on web, memory elsewhere)
//! - Corrupt or missing slots recover to an empty list

pub mod memory;

use std::collections::HashSet;

use thiserror::Error;

use crate::todo::Todo;

pub use memory::MemoryStorage;

/// Failure talking to the key-value backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// Slot content that cannot become a todo list
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("entry {index} has blank text")]
    BlankText { index: usize },
    #[error("duplicate id `{id}`")]
    DuplicateId { id: String },
}

/// String key-value store holding the serialized list
pub trait Storage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

pub fn encode(todos: &[Todo]) -> Result<String, serde_json::Error> {
    serde_json::to_string(todos)
}

/// Parse a slot and check the list invariants (non-blank text, unique ids)
pub fn decode(json: &str) -> Result<Vec<Todo>, DecodeError> {
    let todos: Vec<Todo> = serde_json::from_str(json)?;

    let mut seen = HashSet::with_capacity(todos.len());
    for (index, todo) in todos.iter().enumerate() {
        if todo.text.trim().is_empty() {
            return Err(DecodeError::BlankText { index });
        }
        if !seen.insert(todo.id.as_str()) {
            return Err(DecodeError::DuplicateId {
                id: todo.id.to_string(),
            });
        }
    }

    Ok(todos)
}

/// The durable slot: one storage key holding the whole list
#[derive(Debug)]
pub struct Slot<S> {
    storage: S,
    key: String,
}

impl<S: Storage> Slot<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Raw slot content. An empty string counts as no saved list.
    fn stored_json(&self) -> Result<Option<String>, StorageError> {
        Ok(self.storage.read(&self.key)?.filter(|json| !json.is_empty()))
    }

    /// Load the list, or an empty one if the slot is absent or unreadable
    pub fn load(&self) -> Vec<Todo> {
        let json = match self.stored_json() {
            Ok(Some(json)) => json,
            Ok(None) => {
                log::info!("No saved todos, starting fresh");
                return Vec::new();
            }
            Err(e) => {
                log::warn!("Could not read saved todos: {}", e);
                return Vec::new();
            }
        };

        match decode(&json) {
            Ok(todos) => {
                log::info!("Loaded {} todos", todos.len());
                todos
            }
            Err(e) => {
                log::error!("Failed to parse todos from storage: {}", e);
                Vec::new()
            }
        }
    }

    /// Overwrite the slot with the full list
    pub fn save(&mut self, todos: &[Todo]) -> Result<(), StorageError> {
        let json = encode(todos).map_err(|e| StorageError::Write {
            key: self.key.clone(),
            reason: e.to_string(),
        })?;
        self.storage.write(&self.key, &json)?;
        log::debug!("Todos saved ({} entries)", todos.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::TodoId;

    const KEY: &str = "simple_todo_list";

    fn todo(id: &str, text: &str, completed: bool) -> Todo {
        Todo {
            text: text.to_string(),
            completed,
            id: TodoId::new(id),
        }
    }

    /// Backend that fails every call
    struct BrokenStorage;

    impl Storage for BrokenStorage {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn write(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            })
        }
    }

    #[test]
    fn test_load_missing_slot_is_empty() {
        let slot = Slot::new(MemoryStorage::new(), KEY);
        assert!(slot.load().is_empty());
    }

    #[test]
    fn test_load_garbage_is_empty() {
        for garbage in ["not json", "{\"text\":\"a\"}", "[{\"id\":\"1\"}]", "  ", "[1,2]"] {
            let storage = MemoryStorage::with_entry(KEY, garbage);
            let slot = Slot::new(storage, KEY);
            assert!(slot.load().is_empty(), "expected empty for {:?}", garbage);
        }
    }

    #[test]
    fn test_empty_string_slot_counts_as_absent() {
        let slot = Slot::new(MemoryStorage::with_entry(KEY, ""), KEY);
        assert!(slot.stored_json().unwrap().is_none());
        assert!(slot.load().is_empty());

        let slot = Slot::new(MemoryStorage::with_entry(KEY, "[]"), KEY);
        assert_eq!(slot.stored_json().unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_load_unreadable_backend_is_empty() {
        let slot = Slot::new(BrokenStorage, KEY);
        assert!(slot.load().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let todos = vec![todo("1", "buy milk", false), todo("2", "walk dog", true)];
        let mut slot = Slot::new(MemoryStorage::new(), KEY);
        slot.save(&todos).unwrap();
        assert_eq!(slot.load(), todos);
    }

    #[test]
    fn test_save_overwrites_previous_content() {
        let mut slot = Slot::new(MemoryStorage::new(), KEY);
        slot.save(&[todo("1", "a", false), todo("2", "b", false)]).unwrap();
        slot.save(&[todo("3", "c", true)]).unwrap();
        assert_eq!(slot.load(), vec![todo("3", "c", true)]);
    }

    #[test]
    fn test_save_surfaces_write_failure() {
        let mut slot = Slot::new(BrokenStorage, KEY);
        let err = slot.save(&[todo("1", "a", false)]).unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
    }

    #[test]
    fn test_decode_reads_original_format() {
        let json = r#"[{"text":"buy milk","completed":false,"id":"1700000000000"}]"#;
        let todos = decode(json).unwrap();
        assert_eq!(todos, vec![todo("1700000000000", "buy milk", false)]);
    }

    #[test]
    fn test_decode_defaults_missing_completed() {
        let todos = decode(r#"[{"text":"a","id":"1"}]"#).unwrap();
        assert!(!todos[0].completed);
    }

    #[test]
    fn test_decode_rejects_blank_text() {
        let err = decode(r#"[{"text":"ok","id":"1"},{"text":"  ","id":"2"}]"#).unwrap_err();
        assert!(matches!(err, DecodeError::BlankText { index: 1 }));
    }

    #[test]
    fn test_decode_rejects_duplicate_ids() {
        let err = decode(r#"[{"text":"a","id":"1"},{"text":"b","id":"1"}]"#).unwrap_err();
        assert!(matches!(err, DecodeError::DuplicateId { .. }));
    }

    #[test]
    fn test_encode_field_order() {
        let json = encode(&[todo("9", "x", false)]).unwrap();
        assert_eq!(json, r#"[{"text":"x","completed":false,"id":"9"}]"#);
    }
}
