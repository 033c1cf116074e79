//! Simple Todo - a LocalStorage-backed todo list for the browser
//!
//! Core modules:
//! - `todo`: Items, ids and the id generator
//! - `store`: The ordered collection and its mutations
//! - `persistence`: Save/load of the collection to one storage slot
//! - `view`: Stateless projection of the collection into list rows
//! - `app`: Mutate, persist, render cycle per user command
//! - `platform`: Browser storage and DOM (wasm32 only)
//! - `config`: Storage key and page element ids

pub mod app;
pub mod config;
pub mod persistence;
pub mod platform;
pub mod store;
pub mod todo;
pub mod view;

pub use app::App;
pub use config::Config;
pub use persistence::{DecodeError, MemoryStorage, Slot, Storage, StorageError};
pub use store::Store;
pub use todo::{Clock, IdGenerator, SystemClock, Todo, TodoId};
pub use view::{Command, ListSurface, MemorySurface, RowView};
