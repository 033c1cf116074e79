//! Application configuration
//!
//! Storage key and the ids of the page elements the app attaches to.

/// LocalStorage key holding the serialized list
pub const DEFAULT_STORAGE_KEY: &str = "simple_todo_list";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Key of the durable slot
    pub storage_key: String,

    // === Page elements ===
    /// `<ul>` receiving one `<li>` per todo
    pub list_id: String,
    /// Text input for new todos
    pub input_id: String,
    /// Button that submits the input
    pub add_button_id: String,

    /// Browser console log level (native builds use `RUST_LOG`)
    pub log_level: log::Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),

            list_id: "todo-list".to_string(),
            input_id: "new-todo-input".to_string(),
            add_button_id: "add-todo-button".to_string(),

            log_level: log::Level::Info,
        }
    }
}

impl Config {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}
