//! Browser platform layer
//!
//! Handles the web-only pieces:
//! - Storage (LocalStorage)
//! - DOM list rendering
//!
//! Native builds use `persistence::MemoryStorage` and `view::MemorySurface`.

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod storage;

#[cfg(target_arch = "wasm32")]
pub use dom::DomSurface;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
