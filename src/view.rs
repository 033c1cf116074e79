//! List rendering
//!
//! The view is a pure projection: every render clears the surface and emits
//! one row per todo. Row controls carry their todo id as data and are decoded
//! back into a [`Command`] by the event handler, so no closure ever holds on
//! to an id from a previous render.

use crate::todo::{Todo, TodoId};

/// CSS class marking a completed row
pub const COMPLETED_CLASS: &str = "completed";
pub const TEXT_CLASS: &str = "todo-text";
pub const ACTIONS_CLASS: &str = "todo-actions";
pub const COMPLETE_BUTTON_CLASS: &str = "complete-button";
pub const REMOVE_BUTTON_CLASS: &str = "remove-button";

/// Attribute names used to tag row controls
pub const DATA_ID: &str = "data-id";
pub const DATA_ACTION: &str = "data-action";

/// Per-row control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Toggle,
    Remove,
}

impl RowAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowAction::Toggle => "toggle",
            RowAction::Remove => "remove",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "toggle" => Some(RowAction::Toggle),
            "remove" => Some(RowAction::Remove),
            _ => None,
        }
    }
}

/// A user intent, dispatched against the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Toggle(TodoId),
    Remove(TodoId),
}

impl Command {
    /// Decode the `data-action` / `data-id` pair found on a clicked control
    pub fn from_row(action: &str, id: &str) -> Option<Self> {
        let id = TodoId::new(id);
        match RowAction::parse(action)? {
            RowAction::Toggle => Some(Command::Toggle(id)),
            RowAction::Remove => Some(Command::Remove(id)),
        }
    }
}

/// Everything a surface needs to draw one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
}

impl RowView {
    pub fn toggle_label(&self) -> &'static str {
        if self.completed { "Uncomplete" } else { "Complete" }
    }

    pub fn remove_label(&self) -> &'static str {
        "Remove"
    }

    /// Class list for the row element
    pub fn row_class(&self) -> &'static str {
        if self.completed { COMPLETED_CLASS } else { "" }
    }
}

impl From<&Todo> for RowView {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id.clone(),
            text: todo.text.clone(),
            completed: todo.completed,
        }
    }
}

/// Where rows end up: the DOM list in the browser, a buffer in tests
pub trait ListSurface {
    fn clear_rows(&mut self);
    fn append_row(&mut self, row: &RowView);
}

/// Rebuild the whole list from scratch
pub fn render<V: ListSurface + ?Sized>(surface: &mut V, todos: &[Todo]) {
    surface.clear_rows();
    for todo in todos {
        surface.append_row(&RowView::from(todo));
    }
}

/// Surface that keeps rows in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    pub rows: Vec<RowView>,
    /// Number of times the list was cleared (one per render)
    pub renders: usize,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain-text rendering, one line per row
    pub fn lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| {
                let mark = if row.completed { "x" } else { " " };
                format!("[{}] {} ({})", mark, row.text, row.toggle_label())
            })
            .collect()
    }
}

impl ListSurface for MemorySurface {
    fn clear_rows(&mut self) {
        self.rows.clear();
        self.renders += 1;
    }

    fn append_row(&mut self, row: &RowView) {
        self.rows.push(row.clone());
    }
}
