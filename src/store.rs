//! The todo collection
//!
//! Owns the ordered list and its durable slot. Every successful mutation is
//! written through to storage before returning, so the caller only has to
//! re-render.

use crate::persistence::{Slot, Storage};
use crate::todo::{Clock, IdGenerator, SystemClock, Todo, TodoId};

#[derive(Debug)]
pub struct Store<S, C = SystemClock> {
    todos: Vec<Todo>,
    slot: Slot<S>,
    ids: IdGenerator<C>,
}

impl<S: Storage> Store<S> {
    /// Empty store backed by `storage` under `key`. Call [`Store::load`] to hydrate.
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self::with_clock(storage, key, SystemClock)
    }
}

impl<S: Storage, C: Clock> Store<S, C> {
    pub fn with_clock(storage: S, key: impl Into<String>, clock: C) -> Self {
        Self {
            todos: Vec::new(),
            slot: Slot::new(storage, key),
            ids: IdGenerator::new(clock),
        }
    }

    /// Replace the list with whatever the slot holds (empty if nothing usable)
    pub fn load(&mut self) {
        self.todos = self.slot.load();
        self.ids.observe(self.todos.iter().map(|t| &t.id));
    }

    /// Write the current list to the slot. Failures are logged, not returned.
    pub fn save(&mut self) {
        if let Err(e) = self.slot.save(&self.todos) {
            log::warn!("Failed to save todos: {}", e);
        }
    }

    /// Append a new todo. Blank input is ignored and returns `None`.
    pub fn add(&mut self, text: &str) -> Option<TodoId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.fresh_id()?;
        self.todos.push(Todo::new(id.clone(), text));
        self.save();
        Some(id)
    }

    /// Next generated id not already in the list
    fn fresh_id(&mut self) -> Option<TodoId> {
        loop {
            let Some(id) = self.ids.next_id() else {
                log::error!("Id sequence exhausted, todo not added");
                return None;
            };
            if self.get(&id).is_none() {
                return Some(id);
            }
        }
    }

    /// Flip the completed flag of `id`. Returns false if it does not exist.
    pub fn toggle(&mut self, id: &TodoId) -> bool {
        let Some(todo) = self.todos.iter_mut().find(|t| &t.id == id) else {
            return false;
        };
        todo.toggle();
        self.save();
        true
    }

    /// Drop every todo with `id`. Returns false if none matched.
    pub fn remove(&mut self, id: &TodoId) -> bool {
        let before = self.todos.len();
        self.todos.retain(|t| &t.id != id);
        if self.todos.len() == before {
            return false;
        }
        self.save();
        true
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: &TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| &t.id == id)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Number of todos not yet completed
    pub fn remaining(&self) -> usize {
        self.todos.iter().filter(|t| !t.completed).count()
    }

    pub fn slot(&self) -> &Slot<S> {
        &self.slot
    }
}
