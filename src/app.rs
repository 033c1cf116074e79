//! Wiring between store and view
//!
//! One `App` per page. Each user action goes through [`App::dispatch`], which
//! runs the full mutate, persist, render cycle before returning.

use crate::persistence::Storage;
use crate::store::Store;
use crate::todo::{Clock, SystemClock};
use crate::view::{Command, ListSurface, render};

#[derive(Debug)]
pub struct App<S, V, C = SystemClock> {
    store: Store<S, C>,
    surface: V,
}

impl<S: Storage, V: ListSurface, C: Clock> App<S, V, C> {
    pub fn new(store: Store<S, C>, surface: V) -> Self {
        Self { store, surface }
    }

    /// Hydrate from storage and draw the initial list
    pub fn start(&mut self) {
        self.store.load();
        self.render();
        log::info!("Todo list ready ({} items)", self.store.len());
    }

    /// Apply a command. Returns true if the list changed (and was redrawn).
    pub fn dispatch(&mut self, command: Command) -> bool {
        log::debug!("Dispatch {:?}", command);
        let changed = match &command {
            Command::Add(text) => self.store.add(text).is_some(),
            Command::Toggle(id) => self.store.toggle(id),
            Command::Remove(id) => self.store.remove(id),
        };
        if changed {
            self.render();
        }
        changed
    }

    /// Submit the add-input content
    pub fn submit(&mut self, input: &str) -> bool {
        self.dispatch(Command::Add(input.to_string()))
    }

    pub fn render(&mut self) {
        render(&mut self.surface, self.store.todos());
    }

    pub fn store(&self) -> &Store<S, C> {
        &self.store
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }
}
